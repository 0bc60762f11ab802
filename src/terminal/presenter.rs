//! Presenter: renders a surface to a terminal as one ANSI frame.

use super::output::FrameBuffer;
use crate::surface::{Modifiers, Rgb, Surface};
use std::io::Write;

/// Renders a [`Surface`] to any writer as a single ANSI frame.
///
/// The frame is accumulated in a reusable [`FrameBuffer`] and flushed in one
/// write. Color and modifier state is tracked across cells so runs of
/// identically styled cells emit no redundant escape sequences.
pub struct Presenter {
    output: FrameBuffer,
    style: Option<(Rgb, Rgb, Modifiers)>,
}

impl Presenter {
    /// Create a presenter with a default-sized frame buffer.
    pub fn new() -> Self {
        Self { output: FrameBuffer::new(), style: None }
    }

    /// Create a presenter sized for a given surface.
    pub fn for_surface(surface: &Surface) -> Self {
        // Rough upper bound: one styled wide cell is ~40 bytes of ANSI.
        let capacity = surface.len() * 8 + (surface.height() as usize) * 8;
        Self { output: FrameBuffer::with_capacity(capacity), style: None }
    }

    /// Present the surface with its top-left cell at the terminal origin.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn present<W: Write>(&mut self, surface: &Surface, writer: &mut W) -> std::io::Result<()> {
        self.present_at(surface, 0, 0, writer)
    }

    /// Present the surface with its top-left cell at terminal (x, y).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    pub fn present_at<W: Write>(
        &mut self,
        surface: &Surface,
        x: u16,
        y: u16,
        writer: &mut W,
    ) -> std::io::Result<()> {
        self.output.clear();
        self.style = None;

        for (row_idx, row) in surface.rows().enumerate() {
            self.output.cursor_move(x, y + row_idx as u16);
            for cell in row {
                // The wide glyph before a continuation cell already covers
                // this column.
                if cell.is_wide_continuation() {
                    continue;
                }
                self.apply_style(cell.fg(), cell.bg(), cell.modifiers());
                if let Some(grapheme) = cell.grapheme() {
                    self.output.write_str(grapheme);
                }
            }
        }
        self.output.reset_attrs();

        self.output.flush_to(writer)
    }

    /// Emit style escapes only when the style run changes.
    fn apply_style(&mut self, fg: Rgb, bg: Rgb, modifiers: Modifiers) {
        if self.style == Some((fg, bg, modifiers)) {
            return;
        }
        // A modifier change needs a reset since SGR codes only add styles.
        let modifiers_changed = match self.style {
            Some((_, _, prev)) => prev != modifiers,
            None => true,
        };
        if modifiers_changed {
            self.output.reset_attrs();
            self.output.set_modifiers(modifiers);
            self.output.set_fg(fg);
            self.output.set_bg(bg);
        } else {
            let (prev_fg, prev_bg, _) = self.style.unwrap_or((fg, bg, modifiers));
            if prev_fg != fg {
                self.output.set_fg(fg);
            }
            if prev_bg != bg {
                self.output.set_bg(bg);
            }
        }
        self.style = Some((fg, bg, modifiers));
    }
}

impl Default for Presenter {
    fn default() -> Self {
        Self::new()
    }
}
