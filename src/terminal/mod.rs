//! Terminal module: presenting surfaces to a real terminal.
//!
//! [`Presenter`] turns a surface into one ANSI frame; [`TerminalGuard`]
//! wraps the crossterm session setup (alternate screen, hidden cursor, raw
//! mode) and restores the terminal on drop.

mod output;
mod presenter;

pub use output::FrameBuffer;
pub use presenter::Presenter;

use crossterm::{
    cursor, execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io;

/// Query the terminal size as (columns, rows).
///
/// # Errors
///
/// Returns an error if the backend cannot determine the size.
pub fn terminal_size() -> io::Result<(u16, u16)> {
    terminal::size()
}

/// RAII guard for an interactive drawing session.
///
/// Enters the alternate screen, hides the cursor, and enables raw mode;
/// everything is restored when the guard is dropped, even on early return.
pub struct TerminalGuard {
    alternate_screen: bool,
}

impl TerminalGuard {
    /// Set up the terminal for full-screen drawing.
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails (raw mode, alternate
    /// screen, etc.).
    pub fn new() -> io::Result<Self> {
        Self::with_alternate_screen(true)
    }

    /// Set up the terminal, optionally without the alternate screen
    /// (leaving the final frame visible after exit).
    ///
    /// # Errors
    ///
    /// Returns an error if terminal setup fails.
    pub fn with_alternate_screen(alternate_screen: bool) -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        let mut stdout = io::stdout();
        if alternate_screen {
            execute!(stdout, EnterAlternateScreen)?;
        }
        execute!(stdout, cursor::Hide)?;
        Ok(Self { alternate_screen })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        // Restore terminal state
        let mut stdout = io::stdout();
        let _ = execute!(stdout, cursor::Show);
        if self.alternate_screen {
            let _ = execute!(stdout, LeaveAlternateScreen);
        }
        let _ = terminal::disable_raw_mode();
    }
}
