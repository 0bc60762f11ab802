//! Layout module: fractional screen declaration and resolution.
//!
//! Screens are declared once as fractional rectangles on the unit-square
//! canvas and resolved to cell rects at paint time. There is no layout tree,
//! just a flat batch of screens per [`Figure`].

mod bounds;
mod grid;
mod rect;
mod screen;

pub use bounds::{Bounds, Margins};
pub use grid::{FillOrder, Grid, Matrix};
pub use rect::Rect;
pub use screen::{Figure, Screen, ScreenId};
