//! # curve-math
//!
//! Math primitives for positioning and coloring geometry each frame.
//!
//! This crate provides the foundational types consumed by the plotting and
//! rendering layers:
//!
//! - [`Vec2`], [`Vec3`], [`Vec4`] - componentwise float vectors
//! - [`Quat`] - rotation built from a vector part and a scalar part
//! - [`Mat4`] - 4x4 column-major transform
//! - [`Bezier`] - generic cubic Bezier over any [`Lerp`]-capable type
//! - [`VEC_EPSILON`], [`MAT4_EPSILON`] - the tolerance constants governing
//!   all near-zero and near-equal decisions
//!
//! # Design
//!
//! Everything here is a plain `Copy` value type: operations take inputs by
//! value and return a new value, with no shared state and no I/O, so every
//! call is safe from any thread without synchronization.
//!
//! Degenerate inputs are handled by a *numerically fail-silent* policy: the
//! few documented epsilon guards ([`Vec3::length`], [`Vec3::project`],
//! [`Vec3::angle`]) return zero, and every other degenerate path propagates
//! IEEE-754 `inf`/`NaN` instead of raising an error. Division is never
//! guarded.
//!
//! # Usage
//!
//! ```rust
//! use curve_math::{Bezier, Vec3, interpolate};
//!
//! let curve = Bezier {
//!     p1: Vec3::new(-5.0, 0.0, 0.0),
//!     c1: Vec3::new(-2.0, 1.0, 0.0),
//!     c2: Vec3::new(2.0, 1.0, 0.0),
//!     p2: Vec3::new(5.0, 0.0, 0.0),
//! };
//! let mid = interpolate(&curve, 0.5);
//! assert!((mid.y - 0.75).abs() < 1e-5);
//! ```
//!
//! # Dependencies
//!
//! - [`glam`] - interop conversions for downstream renderers
//!
//! # Used By
//!
//! - `curve-plot` - viewport mapping and draw commands
//! - `curve-cli` - curve sampling demo

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod consts;
mod interp;
mod mat4;
mod quat;
mod vector;

pub use consts::*;
pub use interp::*;
pub use mat4::*;
pub use quat::*;
pub use vector::*;

/// Re-export glam types for direct use
pub mod glam {
    pub use ::glam::{Mat4 as GlamMat4, Quat as GlamQuat, Vec2 as GlamVec2, Vec3 as GlamVec3, Vec4 as GlamVec4};
}
