//! Surface module: the cell grid that figures are painted onto.

mod cell;
#[allow(clippy::module_inception)]
mod surface;

pub use cell::{Cell, Modifiers, Rgb};
pub use surface::Surface;
