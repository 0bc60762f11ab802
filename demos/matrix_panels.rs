//! Matrix demo: a wide top panel over two weighted bottom panels.
//!
//! Press any key to exit.

use easel::{Cell, ClipMode, Matrix, Rgb, Session, TerminalGuard};
use std::io;

fn main() -> io::Result<()> {
    let guard = TerminalGuard::new()?;
    let (cols, rows) = easel::terminal::terminal_size()?;

    // Panel 1 spans the top; 2 and 3 share the bottom at a 2:1 ratio.
    let matrix = Matrix::new(vec![vec![1, 1], vec![2, 3]])
        .and_then(|m| m.widths(vec![2.0, 1.0]))
        .and_then(|m| m.heights(vec![1.0, 2.0]))
        .expect("valid matrix");

    let mut session = Session::new(cols, rows);
    let ids = session.split_matrix(&matrix).expect("matrix split");

    for &id in &ids {
        session.activate(id).expect("activate");
        {
            let mut painter = session.painter(ClipMode::Screen).expect("painter");
            painter.frame(Rgb::from_u32(0x0056_B6C2), Rgb::BLACK);
            let label = format!(" {}x{} ", painter.width(), painter.height());
            painter.text(2, 0, &label, Rgb::WHITE, Rgb::BLACK);
        }
        session.deactivate(id).expect("deactivate");
    }

    session.present(&mut io::stdout()).expect("present");
    let _ = crossterm::event::read();
    drop(guard);
    Ok(())
}
