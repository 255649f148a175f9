//! Tolerance constants for near-zero and near-equal decisions.
//!
//! Two distinct policies coexist and are deliberately not unified:
//!
//! - Vectors compare by **squared distance**: `(a - b).length_squared()`
//!   must fall below [`VEC_EPSILON`].
//! - [`Mat4`](crate::Mat4) compares **per element**: every
//!   `|a[i] - b[i]|` must fall below [`MAT4_EPSILON`].
//!
//! Both are compile-time constants, never mutable state.

/// Squared-distance tolerance for vector equality and degenerate-length
/// guards.
///
/// A vector whose squared length is below this value is treated as zero by
/// [`Vec3::length`](crate::Vec3::length), [`Vec3::angle`](crate::Vec3::angle),
/// [`Vec3::project`](crate::Vec3::project) and
/// [`Vec3::reflect`](crate::Vec3::reflect). Two vectors whose difference has
/// a squared length below this value compare equal.
pub const VEC_EPSILON: f32 = 1e-6;

/// Per-element absolute tolerance for [`Mat4`](crate::Mat4) equality.
///
/// Distinct policy from [`VEC_EPSILON`]: matrix equality checks each of the
/// 16 elements independently rather than a squared distance.
pub const MAT4_EPSILON: f32 = 1e-6;
