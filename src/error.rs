//! Error types for layout declaration and the drawing session.

use thiserror::Error;

/// Unified result type for the easel crate.
pub type Result<T> = std::result::Result<T, FigureError>;

/// Errors surfaced by the figure layout engine.
///
/// All variants indicate synchronous caller misuse rather than transient
/// failure; the operation that raised them leaves allocator state unchanged.
#[derive(Debug, Error)]
pub enum FigureError {
    /// A declared screen has malformed fractional bounds.
    #[error("invalid screen bounds: {0}")]
    InvalidRegion(String),

    /// Margins were negative, non-finite, or out of range.
    #[error("invalid margins: {0}")]
    InvalidMargins(String),

    /// A screen id does not belong to the current layout.
    #[error("unknown screen {0}")]
    UnknownScreen(u16),

    /// Activation was requested while a screen is already active.
    #[error("cannot activate screen {requested}: screen {active} is still active")]
    AlreadyActive {
        /// The id the caller tried to activate.
        requested: u16,
        /// The id currently holding the active marker.
        active: u16,
    },

    /// Deactivation was requested for a screen that is not active.
    #[error("screen {0} is not the active screen")]
    NotActive(u16),

    /// A drawing operation needs an active screen and none is set.
    #[error("no screen is active")]
    NoActiveScreen,

    /// A split batch or grid with no panels.
    #[error("layout declares no panels")]
    EmptyLayout,

    /// Matrix layout validation failure.
    #[error("bad layout matrix: {0}")]
    BadMatrix(String),

    /// Terminal backend failure while presenting a frame.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
