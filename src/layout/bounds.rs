//! Bounds: fractional screen coordinates on the unit-square canvas.
//!
//! Every screen is declared as a rectangle in `[0,1] x [0,1]` canvas
//! coordinates with a y-up convention (bottom < top), and only resolved to
//! cell coordinates once a concrete surface size is known.

use super::rect::Rect;
use crate::error::{FigureError, Result};

/// A screen's rectangle in fractional canvas coordinates.
///
/// Invariant: `0 <= left < right <= 1` and `0 <= bottom < top <= 1`,
/// enforced by [`Bounds::new`] and re-checked when a batch is declared on a
/// figure. Bounds may overlap each other and need not tile the canvas.
#[derive(Clone, Copy, PartialEq)]
pub struct Bounds {
    /// Left edge.
    pub left: f64,
    /// Right edge (exclusive of `left`; strictly greater).
    pub right: f64,
    /// Bottom edge (y-up).
    pub bottom: f64,
    /// Top edge (strictly greater than `bottom`).
    pub top: f64,
}

impl Bounds {
    /// The full unit-square canvas.
    pub const FULL: Self = Self { left: 0.0, right: 1.0, bottom: 0.0, top: 1.0 };

    /// Create validated bounds.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidRegion`] when any edge is non-finite,
    /// outside `[0, 1]`, or the rectangle is degenerate (`left >= right` or
    /// `bottom >= top`).
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self> {
        let bounds = Self { left, right, bottom, top };
        bounds.check().map_err(FigureError::InvalidRegion)?;
        Ok(bounds)
    }

    /// Validate the coordinate invariant, returning a description on failure.
    pub(crate) fn check(&self) -> std::result::Result<(), String> {
        for (name, value) in [
            ("left", self.left),
            ("right", self.right),
            ("bottom", self.bottom),
            ("top", self.top),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(format!("{name}={value} is outside [0, 1]"));
            }
        }
        if self.left >= self.right {
            return Err(format!("left={} >= right={}", self.left, self.right));
        }
        if self.bottom >= self.top {
            return Err(format!("bottom={} >= top={}", self.bottom, self.top));
        }
        Ok(())
    }

    /// Fractional width.
    #[inline]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Fractional height.
    #[inline]
    pub fn height(&self) -> f64 {
        self.top - self.bottom
    }

    /// Check if a canvas point is inside the bounds.
    #[inline]
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x < self.right && y >= self.bottom && y < self.top
    }

    /// Check if two bounds overlap.
    ///
    /// Overlap between screens is permitted; this is a query, not a check.
    pub fn overlaps(&self, other: &Self) -> bool {
        self.left < other.right
            && self.right > other.left
            && self.bottom < other.top
            && self.top > other.bottom
    }

    /// Inset by margins expressed as fractions of this rectangle's extent.
    ///
    /// Returns `None` when the margins consume the rectangle.
    #[must_use]
    pub fn shrink(&self, margins: &Margins) -> Option<Self> {
        let left = self.left + margins.left * self.width();
        let right = self.right - margins.right * self.width();
        let bottom = self.bottom + margins.bottom * self.height();
        let top = self.top - margins.top * self.height();
        let inner = Self { left, right, bottom, top };
        inner.check().ok().map(|()| inner)
    }

    /// Re-express these bounds inside an `outer` reference frame.
    ///
    /// `self` is interpreted as unit-square fractions of `outer`. Used to
    /// place screens inside the canvas left over by outer margins.
    #[must_use]
    pub fn within(&self, outer: &Self) -> Self {
        Self {
            left: outer.left + self.left * outer.width(),
            right: outer.left + self.right * outer.width(),
            bottom: outer.bottom + self.bottom * outer.height(),
            top: outer.bottom + self.top * outer.height(),
        }
    }

    /// Resolve to whole cells on a `cols x rows` surface.
    ///
    /// The y-up fractional convention maps to y-down rows: `top` becomes the
    /// first row of the rect. Edges floor onto the cell grid so that panels
    /// sharing a fractional edge share a cell boundary; valid bounds on a
    /// non-empty surface always resolve to at least one cell per axis.
    pub fn resolve(&self, cols: u16, rows: u16) -> Rect {
        if cols == 0 || rows == 0 {
            return Rect::ZERO;
        }
        let x1 = grid_edge(self.left, cols);
        let mut x2 = grid_edge(self.right, cols);
        let y1 = grid_edge(1.0 - self.top, rows);
        let mut y2 = grid_edge(1.0 - self.bottom, rows);
        // left < 1 and top > 0 guarantee x1 < cols and y1 < rows.
        if x2 <= x1 {
            x2 = x1 + 1;
        }
        if y2 <= y1 {
            y2 = y1 + 1;
        }
        Rect::new(x1, y1, x2 - x1, y2 - y1)
    }
}

/// Map a fractional edge onto a grid of `extent` cells.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn grid_edge(frac: f64, extent: u16) -> u16 {
    ((frac * f64::from(extent)).floor() as u16).min(extent)
}

impl std::fmt::Debug for Bounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Bounds(l={} r={} b={} t={})",
            self.left, self.right, self.bottom, self.top
        )
    }
}

/// Fractional insets applied to a rectangle's four sides.
///
/// Each inset is a fraction of the rectangle's own extent on that axis, in
/// `[0, 1)`. Screen margins carve the plot area out of a screen; figure
/// outer margins carve the usable canvas out of the surface.
#[derive(Clone, Copy, PartialEq, Default)]
pub struct Margins {
    /// Left inset.
    pub left: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
    /// Top inset.
    pub top: f64,
}

impl Margins {
    /// No insets.
    pub const NONE: Self = Self { left: 0.0, right: 0.0, bottom: 0.0, top: 0.0 };

    /// Create validated margins.
    ///
    /// # Errors
    ///
    /// Returns [`FigureError::InvalidMargins`] when any inset is non-finite,
    /// negative, or `>= 1`, or when opposing insets sum to 1 or more.
    pub fn new(left: f64, right: f64, bottom: f64, top: f64) -> Result<Self> {
        for (name, value) in [("left", left), ("right", right), ("bottom", bottom), ("top", top)] {
            if !value.is_finite() || !(0.0..1.0).contains(&value) {
                return Err(FigureError::InvalidMargins(format!(
                    "{name}={value} is outside [0, 1)"
                )));
            }
        }
        if left + right >= 1.0 {
            return Err(FigureError::InvalidMargins(format!(
                "left + right = {} leaves no width",
                left + right
            )));
        }
        if bottom + top >= 1.0 {
            return Err(FigureError::InvalidMargins(format!(
                "bottom + top = {} leaves no height",
                bottom + top
            )));
        }
        Ok(Self { left, right, bottom, top })
    }

    /// Equal insets on all four sides.
    pub fn uniform(inset: f64) -> Result<Self> {
        Self::new(inset, inset, inset, inset)
    }
}

impl std::fmt::Debug for Margins {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Margins(l={} r={} b={} t={})",
            self.left, self.right, self.bottom, self.top
        )
    }
}
