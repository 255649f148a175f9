//! Quaternion rotation type.
//!
//! [`Quat`] is a rotation value built from a [`Vec3`] vector part and a
//! scalar part. Unit length is expected but not enforced; the rotation
//! formulas below are only meaningful for unit quaternions.
//!
//! # Composition order
//!
//! `q * r` composes so that applying the product to a vector equals
//! applying `q`'s rotation first and then `r`'s:
//!
//! ```rust
//! use curve_math::{Quat, Vec3};
//!
//! let s = Quat::angle_axis(0.5, Vec3::Z);
//! let r = Quat::angle_axis(0.25, Vec3::Y);
//! let p = Vec3::new(0.0, -1.0, 0.0);
//! let a = s * (r * p);
//! let b = (r * s) * p;
//! assert!((a - b).length_squared() < 1e-6);
//! ```

use crate::consts::VEC_EPSILON;
use crate::vector::Vec3;
use std::ops::Mul;

/// A rotation quaternion: vector part (x, y, z) plus scalar part w.
///
/// Identity is `(0, 0, 0, 1)`. Construct rotations with
/// [`angle_axis`](Quat::angle_axis) and compose them with `*`.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Quat {
    /// X component of the vector part
    pub x: f32,
    /// Y component of the vector part
    pub y: f32,
    /// Z component of the vector part
    pub z: f32,
    /// Scalar part
    pub w: f32,
}

impl Quat {
    /// Identity rotation (0, 0, 0, 1).
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Creates a quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Creates a quaternion from a vector part and a scalar part.
    #[inline]
    pub const fn from_parts(vector: Vec3, scalar: f32) -> Self {
        Self::new(vector.x, vector.y, vector.z, scalar)
    }

    /// Rotation of `angle` radians around `axis`.
    ///
    /// The axis is normalized internally; a zero-length axis hits the
    /// unguarded [`Vec3::normalize`] divide and produces a quaternion of
    /// `inf`/`NaN` components.
    #[inline]
    pub fn angle_axis(angle: f32, axis: Vec3) -> Self {
        let norm = axis.normalize();
        let half = angle * 0.5;
        Self::from_parts(norm * half.sin(), half.cos())
    }

    /// The vector part (x, y, z).
    #[inline]
    pub const fn vector(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// The scalar part (w).
    #[inline]
    pub const fn scalar(self) -> f32 {
        self.w
    }

    /// Squared length of the quaternion viewed as a 4-tuple.
    #[inline]
    pub fn length_squared(self) -> f32 {
        self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w
    }

    /// Rotates a vector by this quaternion.
    ///
    /// Computed directly, without building a conjugate; equivalent to
    /// `q * v * q^-1` for unit quaternions.
    #[inline]
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let qv = self.vector();
        qv * 2.0 * qv.dot(v)
            + v * (self.w * self.w - qv.dot(qv))
            + qv.cross(v) * 2.0 * self.w
    }

    /// True when this quaternion is within tolerance of unit length.
    #[inline]
    pub fn is_normalized(self) -> bool {
        (self.length_squared() - 1.0).abs() < VEC_EPSILON
    }

    /// Converts to a glam quaternion.
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Creates from a glam quaternion.
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl Default for Quat {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Composition: (q * r) applied to a vector rotates by q first, then r,
// so q * (r * v) == (r * q) * v. The component/sign arrangement is what
// fixes that order; a transposed but still valid product would flip it.
impl Mul for Quat {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        let q = self;
        let r = rhs;
        Self::new(
            r.x * q.w + r.y * q.z - r.z * q.y + r.w * q.x,
            -r.x * q.z + r.y * q.w + r.z * q.x + r.w * q.y,
            r.x * q.y - r.y * q.x + r.z * q.w + r.w * q.z,
            -r.x * q.x - r.y * q.y - r.z * q.z + r.w * q.w,
        )
    }
}

impl Mul<Vec3> for Quat {
    type Output = Vec3;

    #[inline]
    fn mul(self, rhs: Vec3) -> Vec3 {
        self.rotate(rhs)
    }
}

impl From<Quat> for glam::Quat {
    #[inline]
    fn from(q: Quat) -> glam::Quat {
        q.to_glam()
    }
}

impl From<glam::Quat> for Quat {
    #[inline]
    fn from(q: glam::Quat) -> Quat {
        Quat::from_glam(q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::{FRAC_PI_2, PI};

    fn assert_vec3_near(a: Vec3, b: Vec3, eps: f32) {
        assert_abs_diff_eq!(a.x, b.x, epsilon = eps);
        assert_abs_diff_eq!(a.y, b.y, epsilon = eps);
        assert_abs_diff_eq!(a.z, b.z, epsilon = eps);
    }

    #[test]
    fn test_default_is_identity() {
        let q = Quat::default();
        assert_eq!([q.x, q.y, q.z, q.w], [0.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_identity_rotation_is_noop() {
        let v = Vec3::new(1.0, -2.0, 3.0);
        assert_vec3_near(Quat::IDENTITY * v, v, 1e-6);
    }

    #[test]
    fn test_zero_angle_is_noop() {
        let q = Quat::angle_axis(0.0, Vec3::new(0.3, 0.9, -0.2));
        let v = Vec3::new(4.0, 5.0, 6.0);
        assert_vec3_near(q * v, v, 1e-5);
    }

    #[test]
    fn test_quarter_turn_about_y() {
        let q = Quat::angle_axis(FRAC_PI_2, Vec3::Y);
        let rotated = q * Vec3::Z;
        assert_vec3_near(rotated, Vec3::X, 1e-5);
    }

    #[test]
    fn test_half_turn_about_z() {
        let q = Quat::angle_axis(PI, Vec3::Z);
        let rotated = q * Vec3::X;
        assert_vec3_near(rotated, -Vec3::X, 1e-5);
    }

    #[test]
    fn test_angle_axis_is_unit() {
        let q = Quat::angle_axis(1.2, Vec3::new(1.0, 2.0, 3.0));
        assert!(q.is_normalized());
    }

    #[test]
    fn test_composition_order() {
        let s = Quat::angle_axis(PI / 4.0, Vec3::Z);
        let r = Quat::angle_axis(PI / 4.0, Vec3::Y);
        let p = Vec3::new(0.0, -1.0, 0.0);
        // s * (r * v) == (r * s) * v
        assert_vec3_near(s * (r * p), (r * s) * p, 1e-5);
    }

    #[test]
    fn test_product_with_identity() {
        let q = Quat::angle_axis(0.7, Vec3::new(0.0, 1.0, 1.0));
        let p = q * Quat::IDENTITY;
        assert_abs_diff_eq!(p.x, q.x, epsilon = 1e-6);
        assert_abs_diff_eq!(p.y, q.y, epsilon = 1e-6);
        assert_abs_diff_eq!(p.z, q.z, epsilon = 1e-6);
        assert_abs_diff_eq!(p.w, q.w, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_axis_degenerates() {
        let q = Quat::angle_axis(1.0, Vec3::ZERO);
        assert!(q.x.is_nan() || q.x.is_infinite());
    }

    #[test]
    fn test_glam_roundtrip() {
        let q = Quat::angle_axis(0.4, Vec3::X);
        let g: glam::Quat = q.into();
        let back = Quat::from(g);
        assert_eq!([back.x, back.y, back.z, back.w], [q.x, q.y, q.z, q.w]);
    }
}
