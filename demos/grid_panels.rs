//! Grid demo: a 2x2 figure with framed, labelled panels.
//!
//! Press any key to exit.

use easel::{Cell, ClipMode, Grid, Rgb, Session, TerminalGuard};
use std::io;

fn main() -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    let (cols, rows) = easel::terminal::terminal_size()?;

    let mut session = Session::new(cols, rows);
    let grid = Grid::new(2, 2).expect("non-zero grid");
    let ids = session.split_grid(&grid).expect("grid split");

    let colors = [
        Rgb::from_u32(0x00E0_6C75),
        Rgb::from_u32(0x0098_C379),
        Rgb::from_u32(0x0061_AFEF),
        Rgb::from_u32(0x00E5_C07B),
    ];

    for (i, &id) in ids.iter().enumerate() {
        session.activate(id).expect("activate");
        {
            let mut painter = session.painter(ClipMode::Screen).expect("painter");
            painter.fill(Cell::new(' '));
            painter.frame(colors[i % colors.len()], Rgb::BLACK);
            let label = format!(" panel {id} ");
            painter.text(2, 0, &label, Rgb::WHITE, Rgb::BLACK);
        }
        session.deactivate(id).expect("deactivate");
    }

    session.present(&mut io::stdout()).expect("present");
    let _ = crossterm::event::read();
    drop(guard);
    Ok(())
}
