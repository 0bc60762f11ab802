//! Screen and Figure: the split-screen allocator.
//!
//! A [`Figure`] owns one batch of declared screens and at most one active
//! screen. Drawing is scoped to the active screen; activating a second
//! screen without deactivating the first is reported as misuse rather than
//! silently allowed, since a leftover active screen is the classic way to
//! scribble over the wrong panel.

use super::bounds::{Bounds, Margins};
use super::grid::{Grid, Matrix};
use super::rect::Rect;
use crate::error::{FigureError, Result};

/// Unique identifier for a declared screen.
///
/// Ids are 1-based in declaration order and only valid for the batch that
/// produced them; a new split invalidates all previous ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct ScreenId(pub u16);

impl ScreenId {
    /// Create a new screen ID.
    pub const fn new(id: u16) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for ScreenId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A declared panel: fractional bounds plus its own plot margins.
#[derive(Clone, Debug)]
pub struct Screen {
    /// Unique identifier.
    pub id: ScreenId,
    /// Position on the unit-square canvas.
    pub bounds: Bounds,
    /// Insets carving the plot area out of the screen.
    pub margins: Margins,
}

impl Screen {
    /// Create a new screen with no margins.
    pub const fn new(id: ScreenId, bounds: Bounds) -> Self {
        Self { id, bounds, margins: Margins::NONE }
    }
}

/// The split-screen allocator.
///
/// Holds the current layout (an ordered batch of screens), the optional
/// active screen, and figure-level outer margins. A fresh `Figure` has no
/// screens; declare a layout with [`split`](Self::split),
/// [`split_coords`](Self::split_coords), or the [`Grid`]/[`Matrix`]
/// constructors.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    /// Flat list of screens for the current batch (no tree).
    screens: Vec<Screen>,
    /// Id of the screen currently receiving draw operations.
    active: Option<ScreenId>,
    /// Outer margins shrinking the usable canvas.
    outer: Margins,
}

impl Figure {
    /// Create an empty figure.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a figure pre-split into an equal-panel grid.
    pub fn with_grid(grid: &Grid) -> Result<Self> {
        let mut figure = Self::new();
        figure.split(grid.bounds())?;
        Ok(figure)
    }

    /// Create a figure pre-split from a layout matrix.
    pub fn with_matrix(matrix: &Matrix) -> Result<Self> {
        let mut figure = Self::new();
        figure.split(matrix.bounds())?;
        Ok(figure)
    }

    /// Declare a new layout batch.
    ///
    /// On success the previous layout is discarded, any active screen is
    /// cleared, and the returned ids are `1..=N` in declaration order. On
    /// failure the previous layout and active marker are untouched.
    ///
    /// # Errors
    ///
    /// [`FigureError::EmptyLayout`] for an empty batch, or
    /// [`FigureError::InvalidRegion`] (naming the offending entry) when any
    /// entry violates the coordinate invariant. Every entry is re-checked
    /// here so a struct-literal `Bounds` cannot smuggle in degenerate edges.
    pub fn split(&mut self, bounds: Vec<Bounds>) -> Result<Vec<ScreenId>> {
        if bounds.is_empty() {
            return Err(FigureError::EmptyLayout);
        }
        for (i, b) in bounds.iter().enumerate() {
            b.check()
                .map_err(|msg| FigureError::InvalidRegion(format!("entry {i}: {msg}")))?;
        }
        self.screens = bounds
            .into_iter()
            .enumerate()
            .map(|(i, b)| Screen::new(ScreenId::new(i as u16 + 1), b))
            .collect();
        self.active = None;
        Ok(self.screens.iter().map(|s| s.id).collect())
    }

    /// Declare a new layout batch from raw `(left, right, bottom, top)`
    /// tuples, validating each entry.
    ///
    /// # Errors
    ///
    /// [`FigureError::InvalidRegion`] (naming the offending entry) when any
    /// tuple violates the coordinate invariant; the previous layout is kept.
    pub fn split_coords(&mut self, coords: &[(f64, f64, f64, f64)]) -> Result<Vec<ScreenId>> {
        let batch = coords
            .iter()
            .map(|&(left, right, bottom, top)| Bounds { left, right, bottom, top })
            .collect();
        self.split(batch)
    }

    /// Number of screens in the current batch.
    pub fn len(&self) -> usize {
        self.screens.len()
    }

    /// Check if no layout has been declared.
    pub fn is_empty(&self) -> bool {
        self.screens.is_empty()
    }

    /// All screens in declaration order.
    pub fn screens(&self) -> &[Screen] {
        &self.screens
    }

    /// Look up a screen by id.
    ///
    /// # Errors
    ///
    /// [`FigureError::UnknownScreen`] when the id is not in the current batch.
    pub fn screen(&self, id: ScreenId) -> Result<&Screen> {
        self.screens
            .iter()
            .find(|s| s.id == id)
            .ok_or(FigureError::UnknownScreen(id.0))
    }

    /// Id of the currently active screen, if any.
    pub const fn active(&self) -> Option<ScreenId> {
        self.active
    }

    /// Mark a screen as active.
    ///
    /// All subsequent drawing is scoped to it until deactivated.
    ///
    /// # Errors
    ///
    /// [`FigureError::UnknownScreen`] for an id outside the current batch;
    /// [`FigureError::AlreadyActive`] when any screen (including this one)
    /// is still active.
    pub fn activate(&mut self, id: ScreenId) -> Result<()> {
        self.screen(id)?;
        if let Some(active) = self.active {
            return Err(FigureError::AlreadyActive { requested: id.0, active: active.0 });
        }
        self.active = Some(id);
        Ok(())
    }

    /// Clear the active marker, checking it matches the given id.
    ///
    /// # Errors
    ///
    /// [`FigureError::NotActive`] when `id` is not the active screen,
    /// including when nothing is active.
    pub fn deactivate(&mut self, id: ScreenId) -> Result<()> {
        if self.active != Some(id) {
            return Err(FigureError::NotActive(id.0));
        }
        self.active = None;
        Ok(())
    }

    /// Unconditionally clear the active marker.
    ///
    /// Idempotent; the mop-up for a forgotten active screen.
    pub fn deactivate_all(&mut self) {
        self.active = None;
    }

    /// Set the plot margins of a screen.
    ///
    /// # Errors
    ///
    /// [`FigureError::UnknownScreen`] when the id is not in the current batch.
    pub fn set_margins(&mut self, id: ScreenId, margins: Margins) -> Result<()> {
        let screen = self
            .screens
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(FigureError::UnknownScreen(id.0))?;
        screen.margins = margins;
        Ok(())
    }

    /// Set the figure-level outer margins.
    pub fn set_outer_margins(&mut self, margins: Margins) {
        self.outer = margins;
    }

    /// The figure-level outer margins.
    pub const fn outer_margins(&self) -> &Margins {
        &self.outer
    }

    /// The canvas frame left over by the outer margins.
    fn frame(&self) -> Bounds {
        // Margins::new keeps opposing insets summing below 1, so the
        // shrunken unit square is never degenerate.
        Bounds::FULL.shrink(&self.outer).unwrap_or(Bounds::FULL)
    }

    /// Resolve a screen to cell coordinates on a `cols x rows` surface,
    /// after applying the outer margins.
    pub fn resolve(&self, id: ScreenId, cols: u16, rows: u16) -> Result<Rect> {
        let screen = self.screen(id)?;
        Ok(screen.bounds.within(&self.frame()).resolve(cols, rows))
    }

    /// Resolve a screen's plot area (screen minus its margins).
    pub fn plot_rect(&self, id: ScreenId, cols: u16, rows: u16) -> Result<Rect> {
        let screen = self.screen(id)?;
        let placed = screen.bounds.within(&self.frame());
        let inner = placed.shrink(&screen.margins).unwrap_or(placed);
        Ok(inner.resolve(cols, rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_rows() -> Vec<Bounds> {
        vec![
            Bounds::new(0.0, 1.0, 0.5, 1.0).unwrap(),
            Bounds::new(0.0, 1.0, 0.0, 0.5).unwrap(),
        ]
    }

    #[test]
    fn test_split_assigns_one_based_ids() {
        let mut figure = Figure::new();
        let ids = figure.split(two_rows()).unwrap();
        assert_eq!(ids, vec![ScreenId::new(1), ScreenId::new(2)]);
        assert_eq!(figure.len(), 2);
    }

    #[test]
    fn test_split_rejects_empty_batch() {
        let mut figure = Figure::new();
        assert!(matches!(figure.split(Vec::new()), Err(FigureError::EmptyLayout)));
    }

    #[test]
    fn test_activate_deactivate_every_screen() {
        let mut figure = Figure::new();
        let ids = figure.split(two_rows()).unwrap();
        for id in ids {
            figure.activate(id).unwrap();
            assert_eq!(figure.active(), Some(id));
            figure.deactivate(id).unwrap();
            assert_eq!(figure.active(), None);
        }
    }

    #[test]
    fn test_double_activation_is_an_error() {
        let mut figure = Figure::new();
        figure.split_coords(&[(0.0, 1.0, 0.0, 0.5)]).unwrap();
        figure.activate(ScreenId::new(1)).unwrap();
        // Re-activating the same screen without deactivating first.
        let err = figure.activate(ScreenId::new(1)).unwrap_err();
        assert!(matches!(err, FigureError::AlreadyActive { requested: 1, active: 1 }));
        // State unchanged: screen 1 is still active.
        assert_eq!(figure.active(), Some(ScreenId::new(1)));
    }

    #[test]
    fn test_activation_while_another_is_active() {
        let mut figure = Figure::new();
        figure.split(two_rows()).unwrap();
        figure.activate(ScreenId::new(1)).unwrap();
        let err = figure.activate(ScreenId::new(2)).unwrap_err();
        assert!(matches!(err, FigureError::AlreadyActive { requested: 2, active: 1 }));
    }

    #[test]
    fn test_deactivate_without_activation() {
        let mut figure = Figure::new();
        figure.split_coords(&[(0.0, 0.5, 0.0, 1.0)]).unwrap();
        let err = figure.deactivate(ScreenId::new(1)).unwrap_err();
        assert!(matches!(err, FigureError::NotActive(1)));
    }

    #[test]
    fn test_deactivate_wrong_screen() {
        let mut figure = Figure::new();
        figure.split(two_rows()).unwrap();
        figure.activate(ScreenId::new(1)).unwrap();
        assert!(matches!(
            figure.deactivate(ScreenId::new(2)),
            Err(FigureError::NotActive(2))
        ));
        // The mismatch left screen 1 active.
        assert_eq!(figure.active(), Some(ScreenId::new(1)));
    }

    #[test]
    fn test_unknown_screen() {
        let mut figure = Figure::new();
        figure.split(two_rows()).unwrap();
        assert!(matches!(
            figure.activate(ScreenId::new(3)),
            Err(FigureError::UnknownScreen(3))
        ));
        assert!(matches!(
            figure.activate(ScreenId::new(0)),
            Err(FigureError::UnknownScreen(0))
        ));
        assert!(matches!(
            figure.screen(ScreenId::new(7)),
            Err(FigureError::UnknownScreen(7))
        ));
    }

    #[test]
    fn test_invalid_coords_keep_previous_layout() {
        let mut figure = Figure::new();
        figure.split(two_rows()).unwrap();
        figure.activate(ScreenId::new(2)).unwrap();

        // left > right in the second entry.
        let err = figure
            .split_coords(&[(0.0, 1.0, 0.0, 1.0), (0.5, 0.2, 0.0, 1.0)])
            .unwrap_err();
        assert!(matches!(err, FigureError::InvalidRegion(_)));
        assert!(err.to_string().contains("entry 1"));

        // Previous batch and active marker survive the failed call.
        assert_eq!(figure.len(), 2);
        assert_eq!(figure.active(), Some(ScreenId::new(2)));
    }

    #[test]
    fn test_split_rejects_literal_degenerate_bounds() {
        // Struct-literal bounds skip `Bounds::new`, so `split` itself must
        // enforce the coordinate invariant.
        let mut figure = Figure::new();
        figure.split(two_rows()).unwrap();

        let err = figure
            .split(vec![Bounds { left: 0.5, right: 0.2, bottom: 0.0, top: 1.0 }])
            .unwrap_err();
        assert!(matches!(err, FigureError::InvalidRegion(_)));
        assert!(err.to_string().contains("entry 0"));
        assert!(figure
            .split(vec![Bounds { left: 0.0, right: f64::NAN, bottom: 0.0, top: 1.0 }])
            .is_err());

        // Failed batches leave the previous layout in place.
        assert_eq!(figure.len(), 2);
    }

    #[test]
    fn test_resplit_clears_active_marker() {
        let mut figure = Figure::new();
        figure.split(two_rows()).unwrap();
        figure.activate(ScreenId::new(1)).unwrap();

        figure.split_coords(&[(0.0, 1.0, 0.0, 1.0)]).unwrap();
        assert_eq!(figure.active(), None);

        // Mop-up after the re-split is a no-op and never raises.
        figure.deactivate_all();
        figure.deactivate_all();
        assert_eq!(figure.active(), None);
    }

    #[test]
    fn test_overlapping_screens_are_permitted() {
        let mut figure = Figure::new();
        let ids = figure
            .split_coords(&[(0.0, 1.0, 0.0, 1.0), (0.2, 0.8, 0.2, 0.8)])
            .unwrap();
        assert_eq!(ids.len(), 2);
        let a = figure.screen(ids[0]).unwrap().bounds;
        let b = figure.screen(ids[1]).unwrap().bounds;
        assert!(a.overlaps(&b));
    }

    #[test]
    fn test_resolve_with_outer_margins() {
        let mut figure = Figure::new();
        figure.split_coords(&[(0.0, 1.0, 0.0, 1.0)]).unwrap();
        assert_eq!(
            figure.resolve(ScreenId::new(1), 80, 24).unwrap(),
            Rect::from_size(80, 24)
        );

        figure.set_outer_margins(Margins::new(0.25, 0.25, 0.0, 0.0).unwrap());
        let rect = figure.resolve(ScreenId::new(1), 80, 24).unwrap();
        assert_eq!(rect, Rect::new(20, 0, 40, 24));
    }

    #[test]
    fn test_plot_rect_respects_screen_margins() {
        let mut figure = Figure::new();
        let ids = figure.split_coords(&[(0.0, 1.0, 0.0, 1.0)]).unwrap();
        figure
            .set_margins(ids[0], Margins::new(0.25, 0.25, 0.25, 0.25).unwrap())
            .unwrap();
        let plot = figure.plot_rect(ids[0], 80, 24).unwrap();
        assert_eq!(plot, Rect::new(20, 6, 40, 12));
        // The full screen rect is unaffected.
        let screen = figure.resolve(ids[0], 80, 24).unwrap();
        assert_eq!(screen, Rect::from_size(80, 24));
    }
}
