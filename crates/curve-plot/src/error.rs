//! Error types for plot setup.
//!
//! The math core is numerically fail-silent; this layer is where degenerate
//! configuration becomes a real error, because a collapsed viewport would
//! otherwise divide the whole plot into inf/NaN pixels.

use curve_math::Vec2;
use thiserror::Error;

/// Result type alias using [`PlotError`] as the error type.
pub type Result<T> = std::result::Result<T, PlotError>;

/// Errors that can occur while configuring a plot.
#[derive(Debug, Error)]
pub enum PlotError {
    /// Viewport window has a (near-)zero extent on some axis.
    #[error("degenerate viewport: min {min:?} and max {max:?} span no area")]
    DegenerateViewport {
        /// Lower-left corner of the rejected window
        min: Vec2,
        /// Upper-right corner of the rejected window
        max: Vec2,
    },

    /// Segment count of zero cannot produce any chords.
    #[error("segment count must be at least 1")]
    NoSegments,
}
