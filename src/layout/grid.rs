//! Grid and Matrix: multi-panel layout builders.
//!
//! Both builders produce a batch of fractional [`Bounds`] that feeds
//! [`Figure::split`](super::Figure::split) unchanged. [`Grid`] is the
//! equal-panel case; [`Matrix`] places numbered panels on a weighted cell
//! grid and lets a panel span several adjacent cells.

use super::bounds::Bounds;
use crate::error::{FigureError, Result};

/// Order in which grid panels are numbered.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum FillOrder {
    /// Left to right, then top to bottom.
    #[default]
    RowMajor,
    /// Top to bottom, then left to right.
    ColumnMajor,
}

/// An n x m grid of equal panels.
#[derive(Clone, Copy, Debug)]
pub struct Grid {
    rows: u16,
    cols: u16,
    order: FillOrder,
}

impl Grid {
    /// Create a grid with the given dimensions, numbered row-major.
    ///
    /// # Errors
    ///
    /// [`FigureError::EmptyLayout`] when either dimension is zero.
    pub fn new(rows: u16, cols: u16) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(FigureError::EmptyLayout);
        }
        Ok(Self { rows, cols, order: FillOrder::RowMajor })
    }

    /// Set the fill order.
    #[must_use]
    pub const fn order(mut self, order: FillOrder) -> Self {
        self.order = order;
        self
    }

    /// Number of panels.
    pub const fn len(&self) -> usize {
        (self.rows as usize) * (self.cols as usize)
    }

    /// A grid always has at least one panel.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Bounds of every panel in fill order, top-left panel first.
    pub fn bounds(&self) -> Vec<Bounds> {
        let mut panels = Vec::with_capacity(self.len());
        let cell = |row: u16, col: u16| {
            let rows = f64::from(self.rows);
            let cols = f64::from(self.cols);
            Bounds {
                left: f64::from(col) / cols,
                right: f64::from(col + 1) / cols,
                bottom: 1.0 - f64::from(row + 1) / rows,
                top: 1.0 - f64::from(row) / rows,
            }
        };
        match self.order {
            FillOrder::RowMajor => {
                for row in 0..self.rows {
                    for col in 0..self.cols {
                        panels.push(cell(row, col));
                    }
                }
            }
            FillOrder::ColumnMajor => {
                for col in 0..self.cols {
                    for row in 0..self.rows {
                        panels.push(cell(row, col));
                    }
                }
            }
        }
        panels
    }
}

/// A matrix of panel numbers with relative column widths and row heights.
///
/// Cell value `0` marks an empty cell. Panel numbers must form `1..=N` with
/// every number present, and each panel's cells must form a solid rectangle.
///
/// ```
/// use easel::layout::Matrix;
///
/// // Panel 1 spans the full top row; 2 and 3 share the bottom.
/// let matrix = Matrix::new(vec![
///     vec![1, 1],
///     vec![2, 3],
/// ]).unwrap();
/// assert_eq!(matrix.bounds().len(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Matrix {
    cells: Vec<Vec<u16>>,
    widths: Vec<f64>,
    heights: Vec<f64>,
    panels: u16,
}

impl Matrix {
    /// Create a layout matrix with equal column widths and row heights.
    ///
    /// # Errors
    ///
    /// [`FigureError::BadMatrix`] for an empty or ragged matrix, panel
    /// numbers that do not form `1..=N`, or a panel whose cells are not a
    /// solid rectangle.
    pub fn new(cells: Vec<Vec<u16>>) -> Result<Self> {
        if cells.is_empty() || cells[0].is_empty() {
            return Err(FigureError::BadMatrix("matrix has no cells".into()));
        }
        let ncols = cells[0].len();
        for (i, row) in cells.iter().enumerate() {
            if row.len() != ncols {
                return Err(FigureError::BadMatrix(format!(
                    "row {i} has {} cells, expected {ncols}",
                    row.len()
                )));
            }
        }

        let panels = cells.iter().flatten().copied().max().unwrap_or(0);
        if panels == 0 {
            return Err(FigureError::BadMatrix("matrix contains no panel numbers".into()));
        }
        for panel in 1..=panels {
            let span = Self::span_of(&cells, panel).ok_or_else(|| {
                FigureError::BadMatrix(format!("panel {panel} is missing from the matrix"))
            })?;
            let (r1, r2, c1, c2) = span;
            let area = (r2 - r1 + 1) * (c2 - c1 + 1);
            let count = cells.iter().flatten().filter(|&&v| v == panel).count();
            if count != area {
                return Err(FigureError::BadMatrix(format!(
                    "panel {panel} does not span a solid rectangle"
                )));
            }
        }

        let nrows = cells.len();
        Ok(Self {
            cells,
            widths: vec![1.0; ncols],
            heights: vec![1.0; nrows],
            panels,
        })
    }

    /// Set relative column widths.
    ///
    /// # Errors
    ///
    /// [`FigureError::BadMatrix`] when the count does not match the matrix
    /// columns or a weight is not positive and finite.
    pub fn widths(mut self, widths: Vec<f64>) -> Result<Self> {
        Self::check_weights(&widths, self.cells[0].len(), "widths")?;
        self.widths = widths;
        Ok(self)
    }

    /// Set relative row heights, top row first.
    ///
    /// # Errors
    ///
    /// [`FigureError::BadMatrix`] when the count does not match the matrix
    /// rows or a weight is not positive and finite.
    pub fn heights(mut self, heights: Vec<f64>) -> Result<Self> {
        Self::check_weights(&heights, self.cells.len(), "heights")?;
        self.heights = heights;
        Ok(self)
    }

    /// Number of panels.
    pub const fn len(&self) -> usize {
        self.panels as usize
    }

    /// A matrix always holds at least one panel.
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Bounds of every panel, ordered by panel number.
    pub fn bounds(&self) -> Vec<Bounds> {
        let col_edges = edges(&self.widths);
        let row_edges = edges(&self.heights);

        (1..=self.panels)
            .map(|panel| {
                // Validated at construction: every panel has a solid span.
                let (r1, r2, c1, c2) =
                    Self::span_of(&self.cells, panel).unwrap_or((0, 0, 0, 0));
                Bounds {
                    left: col_edges[c1],
                    right: col_edges[c2 + 1],
                    bottom: 1.0 - row_edges[r2 + 1],
                    top: 1.0 - row_edges[r1],
                }
            })
            .collect()
    }

    /// Bounding box of a panel's occurrences as (row1, row2, col1, col2).
    fn span_of(cells: &[Vec<u16>], panel: u16) -> Option<(usize, usize, usize, usize)> {
        let mut span: Option<(usize, usize, usize, usize)> = None;
        for (r, row) in cells.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value == panel {
                    span = Some(match span {
                        None => (r, r, c, c),
                        Some((r1, r2, c1, c2)) => (r1.min(r), r2.max(r), c1.min(c), c2.max(c)),
                    });
                }
            }
        }
        span
    }

    fn check_weights(weights: &[f64], expected: usize, what: &str) -> Result<()> {
        if weights.len() != expected {
            return Err(FigureError::BadMatrix(format!(
                "{what} has {} entries, expected {expected}",
                weights.len()
            )));
        }
        if let Some(bad) = weights.iter().find(|w| !w.is_finite() || **w <= 0.0) {
            return Err(FigureError::BadMatrix(format!(
                "{what} contains non-positive weight {bad}"
            )));
        }
        Ok(())
    }
}

/// Cumulative fractional edges of weighted segments, first edge at 0.0 and
/// last at exactly 1.0.
fn edges(weights: &[f64]) -> Vec<f64> {
    let total: f64 = weights.iter().sum();
    let mut acc = 0.0;
    let mut edges = Vec::with_capacity(weights.len() + 1);
    edges.push(0.0);
    for weight in weights {
        acc += weight;
        edges.push(acc / total);
    }
    // Guard against accumulated rounding on the final edge.
    if let Some(last) = edges.last_mut() {
        *last = 1.0;
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-12
    }

    #[test]
    fn test_grid_tiles_unit_square() {
        let grid = Grid::new(2, 2).unwrap();
        let panels = grid.bounds();
        assert_eq!(panels.len(), 4);
        for bounds in &panels {
            assert!(bounds.check().is_ok());
        }
        let area: f64 = panels.iter().map(|b| b.width() * b.height()).sum();
        assert!(approx(area, 1.0));
        // Row-major: panel 1 is top-left, panel 2 top-right.
        assert!(approx(panels[0].left, 0.0) && approx(panels[0].top, 1.0));
        assert!(approx(panels[1].left, 0.5) && approx(panels[1].top, 1.0));
        assert!(approx(panels[2].top, 0.5));
    }

    #[test]
    fn test_grid_column_major_order() {
        let grid = Grid::new(2, 2).unwrap().order(FillOrder::ColumnMajor);
        let panels = grid.bounds();
        // Panel 2 is below panel 1 instead of beside it.
        assert!(approx(panels[1].left, 0.0));
        assert!(approx(panels[1].top, 0.5));
    }

    #[test]
    fn test_grid_rejects_zero_dimension() {
        assert!(matches!(Grid::new(0, 3), Err(FigureError::EmptyLayout)));
        assert!(matches!(Grid::new(3, 0), Err(FigureError::EmptyLayout)));
    }

    #[test]
    fn test_matrix_spanning_panel() {
        // Panel 1 takes the whole top row; 2 and 3 split the bottom.
        let matrix = Matrix::new(vec![vec![1, 1], vec![2, 3]]).unwrap();
        let panels = matrix.bounds();
        assert_eq!(panels.len(), 3);
        assert!(approx(panels[0].left, 0.0) && approx(panels[0].right, 1.0));
        assert!(approx(panels[0].bottom, 0.5) && approx(panels[0].top, 1.0));
        assert!(approx(panels[1].right, 0.5));
        assert!(approx(panels[2].left, 0.5));
    }

    #[test]
    fn test_matrix_weights() {
        let matrix = Matrix::new(vec![vec![1, 2]])
            .unwrap()
            .widths(vec![3.0, 1.0])
            .unwrap();
        let panels = matrix.bounds();
        assert!(approx(panels[0].right, 0.75));
        assert!(approx(panels[1].left, 0.75));
    }

    #[test]
    fn test_matrix_empty_cell_is_blank() {
        // The zero cell belongs to no panel; panels need not tile.
        let matrix = Matrix::new(vec![vec![1, 0], vec![0, 2]]).unwrap();
        let panels = matrix.bounds();
        assert_eq!(panels.len(), 2);
        assert!(approx(panels[0].right, 0.5));
        assert!(approx(panels[1].left, 0.5));
        assert!(!panels[0].overlaps(&panels[1]));
    }

    #[test]
    fn test_matrix_rejects_ragged_rows() {
        let err = Matrix::new(vec![vec![1, 2], vec![3]]).unwrap_err();
        assert!(matches!(err, FigureError::BadMatrix(_)));
    }

    #[test]
    fn test_matrix_rejects_missing_panel_number() {
        // 1 and 3 present, 2 missing.
        let err = Matrix::new(vec![vec![1, 3]]).unwrap_err();
        assert!(err.to_string().contains("panel 2"));
    }

    #[test]
    fn test_matrix_rejects_non_rectangular_span() {
        // Panel 1 forms an L shape.
        let err = Matrix::new(vec![vec![1, 1], vec![1, 2]]).unwrap_err();
        assert!(err.to_string().contains("solid rectangle"));
    }

    #[test]
    fn test_matrix_rejects_all_zero() {
        assert!(Matrix::new(vec![vec![0, 0]]).is_err());
        assert!(Matrix::new(Vec::new()).is_err());
    }

    #[test]
    fn test_matrix_rejects_bad_weights() {
        let matrix = Matrix::new(vec![vec![1, 2]]).unwrap();
        assert!(matrix.clone().widths(vec![1.0]).is_err());
        assert!(matrix.clone().widths(vec![1.0, 0.0]).is_err());
        assert!(matrix.clone().widths(vec![1.0, f64::NAN]).is_err());
        assert!(matrix.heights(vec![1.0, 1.0]).is_err());
    }
}
