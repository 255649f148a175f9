//! Interpolation utilities and the generic cubic Bezier evaluator.
//!
//! The [`Lerp`] trait is the single seam for generic interpolation: any type
//! that can linearly interpolate can be a [`Bezier`] control value. All
//! implementations use the same algebraic form `end * t + start * (1 - t)`.
//!
//! # Usage
//!
//! ```rust
//! use curve_math::{interpolate, Bezier, Vec3};
//!
//! let curve = Bezier {
//!     p1: Vec3::new(-5.0, 0.0, 0.0),
//!     c1: Vec3::new(-2.0, 1.0, 0.0),
//!     c2: Vec3::new(2.0, 1.0, 0.0),
//!     p2: Vec3::new(5.0, 0.0, 0.0),
//! };
//! assert_eq!(interpolate(&curve, 0.0), curve.p1);
//! assert_eq!(interpolate(&curve, 1.0), curve.p2);
//! ```

use crate::vector::{Vec2, Vec3, Vec4};

/// Linear interpolation between two scalars.
///
/// Evaluated as `b * t + a * (1 - t)`; `t = 0` yields `a` exactly and
/// `t = 1` yields `b` exactly. Values of `t` outside [0, 1] extrapolate.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    b * t + a * (1.0 - t)
}

/// Types that support linear interpolation.
///
/// Implementors must return `self` at `t = 0` and `end` at `t = 1` exactly,
/// and extrapolate outside [0, 1].
pub trait Lerp: Copy {
    /// Interpolates from `self` toward `end` by `t`.
    fn lerp(self, end: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        lerp(self, end, t)
    }
}

impl Lerp for Vec2 {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        Vec2::lerp(self, end, t)
    }
}

impl Lerp for Vec3 {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        Vec3::lerp(self, end, t)
    }
}

impl Lerp for Vec4 {
    #[inline]
    fn lerp(self, end: Self, t: f32) -> Self {
        Vec4::lerp(self, end, t)
    }
}

/// A cubic Bezier curve: two endpoints and two control values.
///
/// Stateless beyond its four control values; evaluation is a pure function
/// of `t` via [`interpolate`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bezier<T> {
    /// Start point
    pub p1: T,
    /// First control value (pulls the curve leaving `p1`)
    pub c1: T,
    /// Second control value (pulls the curve entering `p2`)
    pub c2: T,
    /// End point
    pub p2: T,
}

impl<T: Lerp> Bezier<T> {
    /// Creates a curve from start, first control, second control, end.
    #[inline]
    pub const fn new(p1: T, c1: T, c2: T, p2: T) -> Self {
        Self { p1, c1, c2, p2 }
    }

    /// Evaluates the curve at `t`. See [`interpolate`].
    #[inline]
    pub fn at(&self, t: f32) -> T {
        interpolate(self, t)
    }
}

/// Evaluates a cubic Bezier at `t` by de Casteljau reduction.
///
/// Six nested lerps over the four control values; deterministic for
/// `t` in [0, 1] and extrapolating outside that range rather than erroring.
#[inline]
pub fn interpolate<T: Lerp>(curve: &Bezier<T>, t: f32) -> T {
    let a = curve.p1.lerp(curve.c1, t);
    let b = curve.c2.lerp(curve.p2, t);
    let c = curve.c1.lerp(curve.c2, t);
    let d = a.lerp(c, t);
    let e = c.lerp(b, t);
    d.lerp(e, t)
}
