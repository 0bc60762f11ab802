//! Split-screen demo: hand-placed, overlapping screens.
//!
//! A full-canvas backdrop screen with an inset overlay screen on top,
//! declared from raw fractional coordinates. Press any key to exit.

use easel::{Cell, ClipMode, Margins, Rgb, Session, TerminalGuard};
use std::io;

fn main() -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    let (cols, rows) = easel::terminal::terminal_size()?;

    let mut session = Session::new(cols, rows);
    // Screen 1 covers the canvas; screen 2 overlaps it in the middle.
    let ids = session
        .split_coords(&[(0.0, 1.0, 0.0, 1.0), (0.2, 0.8, 0.2, 0.8)])
        .expect("valid split");

    session.activate(ids[0]).expect("activate backdrop");
    {
        let mut painter = session.painter(ClipMode::Screen).expect("painter");
        painter.fill(Cell::new('.').with_fg(Rgb::from_u32(0x003E_4451)));
    }
    session.deactivate(ids[0]).expect("deactivate backdrop");

    session
        .figure_mut()
        .set_margins(ids[1], Margins::uniform(0.1).expect("margins"))
        .expect("known screen");
    session.activate(ids[1]).expect("activate overlay");
    {
        let mut painter = session.painter(ClipMode::Screen).expect("painter");
        painter.fill(Cell::new(' '));
        painter.frame(Rgb::from_u32(0x00C6_78DD), Rgb::BLACK);
    }
    {
        // Margins keep the text off the frame.
        let mut painter = session.painter(ClipMode::Plot).expect("plot painter");
        painter.text(0, 0, "overlapping screens are allowed", Rgb::WHITE, Rgb::BLACK);
    }
    session.deactivate(ids[1]).expect("deactivate overlay");

    // Mop up any forgotten activation before presenting.
    session.deactivate_all();

    session.present(&mut io::stdout()).expect("present");
    let _ = crossterm::event::read();
    drop(guard);
    Ok(())
}
