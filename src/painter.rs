//! Painter and Session: clipped drawing scoped to the active screen.
//!
//! A [`Session`] owns the [`Figure`] (which screens exist, which one is
//! active) and the [`Surface`] (the cells). Drawing happens through a
//! [`Painter`], which is only handed out while a screen is active and which
//! silently discards anything outside its clip rectangle.

use crate::error::{FigureError, Result};
use crate::layout::{Bounds, Figure, Grid, Matrix, Rect, ScreenId};
use crate::surface::{Cell, Rgb, Surface};
use crate::terminal::Presenter;
use std::io::Write;
use unicode_segmentation::UnicodeSegmentation;

/// What a draw operation is allowed to touch.
///
/// The source convention: most drawing stays inside the plot area, but
/// annotations are sometimes allowed to spill into the screen margins or
/// anywhere on the device.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum ClipMode {
    /// Clip to the plot area (the active screen minus its margins).
    #[default]
    Plot,
    /// Clip to the whole active screen.
    Screen,
    /// Clip to the whole device surface.
    Device,
}

/// A clipped view of the surface.
///
/// Coordinates are painter-local: `(0, 0)` is the top-left cell of the clip
/// rectangle. Writes outside the clip are discarded, never an error.
pub struct Painter<'a> {
    surface: &'a mut Surface,
    clip: Rect,
}

impl<'a> Painter<'a> {
    /// Create a painter over an explicit clip rectangle.
    ///
    /// The rectangle is clamped to the surface.
    pub fn new(surface: &'a mut Surface, clip: Rect) -> Self {
        let clip = clip.intersection(&surface.rect());
        Self { surface, clip }
    }

    /// The clip rectangle in surface coordinates.
    pub const fn clip(&self) -> Rect {
        self.clip
    }

    /// Width of the drawable area in columns.
    pub const fn width(&self) -> u16 {
        self.clip.width
    }

    /// Height of the drawable area in rows.
    pub const fn height(&self) -> u16 {
        self.clip.height
    }

    /// Set a cell at painter-local (x, y).
    ///
    /// Returns `false` when the cell falls outside the clip.
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) -> bool {
        if x >= self.clip.width || y >= self.clip.height {
            return false;
        }
        self.surface.set(self.clip.x + x, self.clip.y + y, cell)
    }

    /// Fill the whole drawable area with a cell.
    pub fn fill(&mut self, cell: Cell) {
        self.surface.fill_rect(self.clip, cell);
    }

    /// Draw a horizontal line across row `y`.
    pub fn hline(&mut self, y: u16, fg: Rgb, bg: Rgb) {
        for x in 0..self.clip.width {
            self.set(x, y, Cell::new('─').with_fg(fg).with_bg(bg));
        }
    }

    /// Draw a vertical line down column `x`.
    pub fn vline(&mut self, x: u16, fg: Rgb, bg: Rgb) {
        for y in 0..self.clip.height {
            self.set(x, y, Cell::new('│').with_fg(fg).with_bg(bg));
        }
    }

    /// Draw a box-drawing frame around the drawable area.
    ///
    /// Does nothing when the area is smaller than 2x2.
    pub fn frame(&mut self, fg: Rgb, bg: Rgb) {
        let (w, h) = (self.clip.width, self.clip.height);
        if w < 2 || h < 2 {
            return;
        }
        self.hline(0, fg, bg);
        self.hline(h - 1, fg, bg);
        self.vline(0, fg, bg);
        self.vline(w - 1, fg, bg);
        for (x, y, c) in [
            (0, 0, '┌'),
            (w - 1, 0, '┐'),
            (0, h - 1, '└'),
            (w - 1, h - 1, '┘'),
        ] {
            self.set(x, y, Cell::new(c).with_fg(fg).with_bg(bg));
        }
    }

    /// Draw text starting at painter-local (x, y), clipped at the right
    /// edge. Returns the number of columns used.
    pub fn text(&mut self, x: u16, y: u16, text: &str, fg: Rgb, bg: Rgb) -> u16 {
        if y >= self.clip.height {
            return 0;
        }
        let mut col = x;
        for grapheme in text.graphemes(true) {
            let width = u16::try_from(unicode_width::UnicodeWidthStr::width(grapheme))
                .unwrap_or(1)
                .max(1);
            // A wide glyph that straddles the clip edge is dropped whole.
            if col.saturating_add(width) > self.clip.width {
                break;
            }
            self.surface.set_grapheme(
                self.clip.x.saturating_add(col),
                self.clip.y + y,
                grapheme,
                fg,
                bg,
            );
            col += width;
        }
        col.saturating_sub(x)
    }

    /// Clear the drawable area.
    pub fn clear(&mut self) {
        self.surface.clear_rect(self.clip);
    }
}

/// A drawing session: one figure layout over one surface.
///
/// ```
/// use easel::{ClipMode, Grid, Session};
///
/// let mut session = Session::new(80, 24);
/// let ids = session.split_grid(&Grid::new(2, 2).unwrap()).unwrap();
/// session.activate(ids[0]).unwrap();
/// session.painter(ClipMode::Screen).unwrap().fill('.'.into());
/// session.deactivate(ids[0]).unwrap();
/// ```
#[derive(Debug)]
pub struct Session {
    figure: Figure,
    surface: Surface,
}

impl Session {
    /// Create a session over a fresh surface of the given size.
    pub fn new(width: u16, height: u16) -> Self {
        Self { figure: Figure::new(), surface: Surface::new(width, height) }
    }

    /// The figure (layout and active-screen state).
    pub const fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Mutable access to the figure.
    pub fn figure_mut(&mut self) -> &mut Figure {
        &mut self.figure
    }

    /// The surface.
    pub const fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Mutable access to the surface.
    pub fn surface_mut(&mut self) -> &mut Surface {
        &mut self.surface
    }

    /// Declare a new layout; a successful split starts a fresh page.
    pub fn split(&mut self, bounds: Vec<Bounds>) -> Result<Vec<ScreenId>> {
        let ids = self.figure.split(bounds)?;
        self.surface.clear();
        Ok(ids)
    }

    /// Declare a new layout from raw coordinate tuples.
    pub fn split_coords(&mut self, coords: &[(f64, f64, f64, f64)]) -> Result<Vec<ScreenId>> {
        let ids = self.figure.split_coords(coords)?;
        self.surface.clear();
        Ok(ids)
    }

    /// Declare an equal-panel grid layout.
    pub fn split_grid(&mut self, grid: &Grid) -> Result<Vec<ScreenId>> {
        self.split(grid.bounds())
    }

    /// Declare a matrix layout.
    pub fn split_matrix(&mut self, matrix: &Matrix) -> Result<Vec<ScreenId>> {
        self.split(matrix.bounds())
    }

    /// Activate a screen for drawing.
    pub fn activate(&mut self, id: ScreenId) -> Result<()> {
        self.figure.activate(id)
    }

    /// Deactivate the active screen.
    pub fn deactivate(&mut self, id: ScreenId) -> Result<()> {
        self.figure.deactivate(id)
    }

    /// Mop up any leftover active screen. Idempotent.
    pub fn deactivate_all(&mut self) {
        self.figure.deactivate_all();
    }

    /// Borrow a painter scoped to the active screen.
    ///
    /// # Errors
    ///
    /// [`FigureError::NoActiveScreen`] when no screen is active; drawing is
    /// always scoped to an activation, even in [`ClipMode::Device`].
    pub fn painter(&mut self, mode: ClipMode) -> Result<Painter<'_>> {
        let id = self.figure.active().ok_or(FigureError::NoActiveScreen)?;
        let (cols, rows) = (self.surface.width(), self.surface.height());
        let clip = match mode {
            ClipMode::Plot => self.figure.plot_rect(id, cols, rows)?,
            ClipMode::Screen => self.figure.resolve(id, cols, rows)?,
            ClipMode::Device => self.surface.rect(),
        };
        Ok(Painter::new(&mut self.surface, clip))
    }

    /// Clear the surface without touching the layout.
    pub fn clear(&mut self) {
        self.surface.clear();
    }

    /// Resize the underlying surface.
    ///
    /// Fractional layouts re-resolve automatically on the next paint.
    pub fn resize(&mut self, width: u16, height: u16) {
        self.surface.resize(width, height);
    }

    /// Present the surface to a writer as a single ANSI frame.
    pub fn present<W: Write>(&self, writer: &mut W) -> Result<()> {
        let mut presenter = Presenter::for_surface(&self.surface);
        presenter.present(&self.surface, writer)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::Margins;

    #[test]
    fn test_painter_discards_outside_clip() {
        let mut surface = Surface::new(20, 10);
        let mut painter = Painter::new(&mut surface, Rect::new(5, 2, 4, 3));
        assert!(painter.set(0, 0, Cell::new('A')));
        assert!(painter.set(3, 2, Cell::new('B')));
        assert!(!painter.set(4, 0, Cell::new('C')));
        assert!(!painter.set(0, 3, Cell::new('D')));

        assert_eq!(surface.get_grapheme(5, 2), Some("A"));
        assert_eq!(surface.get_grapheme(8, 4), Some("B"));
        // Nothing leaked outside the clip.
        assert_eq!(surface.get_grapheme(9, 2), Some(" "));
        assert_eq!(surface.get_grapheme(5, 5), Some(" "));
    }

    #[test]
    fn test_painter_text_clips_right_edge() {
        let mut surface = Surface::new(20, 10);
        let mut painter = Painter::new(&mut surface, Rect::new(0, 0, 5, 1));
        let used = painter.text(2, 0, "abcdef", Rgb::WHITE, Rgb::BLACK);
        assert_eq!(used, 3);
        assert_eq!(surface.get_grapheme(4, 0), Some("c"));
        assert_eq!(surface.get_grapheme(5, 0), Some(" "));
    }

    #[test]
    fn test_painter_text_at_extreme_offset() {
        // Column offsets near u16::MAX must clip, not overflow.
        let mut surface = Surface::new(20, 10);
        let mut painter = Painter::new(&mut surface, Rect::new(0, 0, 5, 1));
        let used = painter.text(u16::MAX, 0, "abc", Rgb::WHITE, Rgb::BLACK);
        assert_eq!(used, 0);
        assert_eq!(surface.get_grapheme(0, 0), Some(" "));
    }

    #[test]
    fn test_painter_frame_corners() {
        let mut surface = Surface::new(10, 10);
        let mut painter = Painter::new(&mut surface, Rect::new(1, 1, 4, 3));
        painter.frame(Rgb::WHITE, Rgb::BLACK);
        assert_eq!(surface.get_grapheme(1, 1), Some("┌"));
        assert_eq!(surface.get_grapheme(4, 1), Some("┐"));
        assert_eq!(surface.get_grapheme(1, 3), Some("└"));
        assert_eq!(surface.get_grapheme(4, 3), Some("┘"));
        assert_eq!(surface.get_grapheme(2, 1), Some("─"));
        assert_eq!(surface.get_grapheme(1, 2), Some("│"));
    }

    #[test]
    fn test_session_requires_active_screen() {
        let mut session = Session::new(40, 12);
        session.split_coords(&[(0.0, 1.0, 0.0, 1.0)]).unwrap();
        assert!(matches!(
            session.painter(ClipMode::Plot),
            Err(FigureError::NoActiveScreen)
        ));
    }

    #[test]
    fn test_session_paint_is_scoped_to_active_screen() {
        let mut session = Session::new(40, 12);
        let ids = session
            .split_coords(&[(0.0, 0.5, 0.0, 1.0), (0.5, 1.0, 0.0, 1.0)])
            .unwrap();
        session.activate(ids[0]).unwrap();
        session.painter(ClipMode::Screen).unwrap().fill(Cell::new('L'));
        session.deactivate(ids[0]).unwrap();

        assert_eq!(session.surface().get_grapheme(0, 0), Some("L"));
        assert_eq!(session.surface().get_grapheme(19, 11), Some("L"));
        // The right half is untouched.
        assert_eq!(session.surface().get_grapheme(20, 0), Some(" "));
    }

    #[test]
    fn test_session_clip_modes() {
        let mut session = Session::new(40, 20);
        let ids = session.split_coords(&[(0.0, 0.5, 0.5, 1.0)]).unwrap();
        session
            .figure_mut()
            .set_margins(ids[0], Margins::uniform(0.25).unwrap())
            .unwrap();
        session.activate(ids[0]).unwrap();

        let plot = session.painter(ClipMode::Plot).unwrap().clip();
        let screen = session.painter(ClipMode::Screen).unwrap().clip();
        let device = session.painter(ClipMode::Device).unwrap().clip();

        assert_eq!(screen, Rect::new(0, 0, 20, 10));
        assert_eq!(device, Rect::from_size(40, 20));
        assert!(plot.width < screen.width && plot.height < screen.height);
        assert!(plot.x >= screen.x && plot.bottom() <= screen.bottom());
    }

    #[test]
    fn test_session_resplit_starts_fresh_page() {
        let mut session = Session::new(10, 4);
        let ids = session.split_coords(&[(0.0, 1.0, 0.0, 1.0)]).unwrap();
        session.activate(ids[0]).unwrap();
        session.painter(ClipMode::Device).unwrap().fill(Cell::new('#'));

        session.split_coords(&[(0.0, 1.0, 0.0, 0.5)]).unwrap();
        assert_eq!(session.figure().active(), None);
        assert_eq!(session.surface().get_grapheme(0, 0), Some(" "));

        // Mop-up after the re-split never raises.
        session.deactivate_all();
    }
}
