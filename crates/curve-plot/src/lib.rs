//! # curve-plot
//!
//! The drawing boundary for the math core: a [`DrawTarget`] trait consumed
//! by rendering backends, a validated [`Viewport`] mapping plot coordinates
//! into pixel space, named RGBA [`colors`], and a [`CurvePlot`] helper that
//! turns a cubic Bezier into line segments plus a control-handle overlay.
//!
//! The actual backend (a GUI draw list, a framebuffer, a terminal) lives
//! outside this crate; anything that can draw a line and a point between
//! two mapped coordinates can implement [`DrawTarget`].
//!
//! # Quick Start
//!
//! ```rust
//! use curve_math::{Bezier, Vec3};
//! use curve_plot::{colors, Canvas, CommandLog, CurvePlot, Viewport};
//!
//! let curve = Bezier::new(
//!     Vec3::new(-5.0, 0.0, 0.0),
//!     Vec3::new(-2.0, 1.0, 0.0),
//!     Vec3::new(2.0, 1.0, 0.0),
//!     Vec3::new(5.0, 0.0, 0.0),
//! );
//!
//! let viewport = Viewport::new(
//!     curve_math::Vec2::splat(-5.0),
//!     curve_math::Vec2::splat(5.0),
//! ).unwrap();
//! let canvas = Canvas::new(curve_math::Vec2::ZERO, curve_math::Vec2::splat(256.0));
//!
//! let plot = CurvePlot::new(viewport, canvas);
//! let mut log = CommandLog::default();
//! plot.plot_bezier(&mut log, &curve, 200, colors::MAGENTA).unwrap();
//! assert_eq!(log.commands.len(), 200);
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod draw;
mod error;
mod plot;
mod viewport;

pub mod colors;

pub use draw::*;
pub use error::*;
pub use plot::*;
pub use viewport::*;
