//! # Easel
//!
//! A multi-panel figure compositor for terminal plotting.
//!
//! Easel lays out plot panels ("screens") on a unit-square canvas using
//! fractional coordinates, enforces a one-active-screen drawing discipline,
//! and resolves panels to cells only when a frame is painted.
//!
//! ## Core Concepts
//!
//! - **Fractional layout**: Screens are declared as `(left, right, bottom,
//!   top)` fractions of the canvas and may overlap freely
//! - **One active screen**: Drawing is scoped to exactly one screen at a
//!   time; stale activations are reported, not silently tolerated
//! - **Layout builders**: Equal-panel grids and weighted layout matrices
//!   produce the same screen batches as hand-written coordinates
//! - **Single-flush frames**: A whole frame is one `write()` syscall
//!
//! ## Example
//!
//! ```rust
//! use easel::{Cell, ClipMode, Session};
//!
//! // A 2-up figure: left and right halves of an 80x24 surface.
//! let mut session = Session::new(80, 24);
//! let ids = session
//!     .split_coords(&[(0.0, 0.5, 0.0, 1.0), (0.5, 1.0, 0.0, 1.0)])
//!     .unwrap();
//!
//! session.activate(ids[0]).unwrap();
//! session.painter(ClipMode::Screen).unwrap().fill(Cell::new('.'));
//! session.deactivate(ids[0]).unwrap();
//! ```

#![warn(missing_docs)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod error;
pub mod layout;
pub mod painter;
pub mod surface;
pub mod terminal;

// Re-exports for convenience
pub use error::{FigureError, Result};
pub use layout::{Bounds, Figure, FillOrder, Grid, Margins, Matrix, Rect, Screen, ScreenId};
pub use painter::{ClipMode, Painter, Session};
pub use surface::{Cell, Modifiers, Rgb, Surface};
pub use terminal::{Presenter, TerminalGuard};
