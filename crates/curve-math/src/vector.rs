//! Componentwise float vectors: [`Vec2`], [`Vec3`], [`Vec4`].
//!
//! One canonical design covers all three arities: concrete named-field
//! structs whose shared componentwise machinery (arithmetic operators,
//! compound assignment, indexing, dot product, length, lerp, tolerance
//! equality) is generated by a single `impl_vector!` macro. Arity-specific
//! geometry (cross product, projections, slerp) is written out per type.
//!
//! # Equality
//!
//! Vector `==` is an equivalence class, not exact comparison: two vectors
//! are equal when the squared length of their difference falls below
//! [`VEC_EPSILON`]. Compare [`to_array`](Vec3::to_array) output when exact
//! bit equality is needed.
//!
//! # Swizzles
//!
//! A swizzle accessor such as [`Vec4::xyz`] returns a *snapshot* copy of the
//! leading components, never a view into the source storage. Writing back
//! goes through an explicit setter such as [`Vec4::set_xyz`].
//!
//! # Usage
//!
//! ```rust
//! use curve_math::Vec3;
//!
//! let a = Vec3::new(1.0, 0.0, 0.0);
//! let b = Vec3::new(0.0, 1.0, 0.0);
//! assert_eq!(a.cross(b), Vec3::new(0.0, 0.0, 1.0));
//! assert_eq!(a.dot(b), 0.0);
//! ```

use crate::consts::VEC_EPSILON;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A 2D vector.
///
/// Used for plot-window coordinates and as the 2D reduction of a [`Vec3`]
/// point handed to a draw target.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

/// A 3D vector.
///
/// The workhorse type: positions, directions, rotation axes, Bezier control
/// points. Carries the full geometric operation set (cross product, angle,
/// projection, reflection, slerp).
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vec3 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
    /// Z component
    pub z: f32,
}

/// A 4D vector.
///
/// Doubles as an RGBA color (see [`r`](Vec4::r), [`g`](Vec4::g),
/// [`b`](Vec4::b), [`a`](Vec4::a)) and as a homogeneous point or a
/// [`Mat4`](crate::Mat4) column.
#[derive(Debug, Clone, Copy, Default)]
#[repr(C)]
pub struct Vec4 {
    /// X component (R for colors)
    pub x: f32,
    /// Y component (G for colors)
    pub y: f32,
    /// Z component (B for colors)
    pub z: f32,
    /// W component (A for colors)
    pub w: f32,
}

/// Generates the componentwise machinery shared by every vector arity.
///
/// Single abstraction over the per-component loops: operators, compound
/// assignment, indexing, dot/length/lerp, tolerance equality, array and
/// glam conversions.
macro_rules! impl_vector {
    ($Vec:ident, $GlamVec:ty, $n:literal, [$($f:ident = $i:tt),+]) => {
        impl $Vec {
            /// Creates a new vector.
            #[inline]
            pub const fn new($($f: f32),+) -> Self {
                Self { $($f),+ }
            }

            /// Creates a vector with all components set to the same value.
            #[inline]
            pub const fn splat(v: f32) -> Self {
                Self { $($f: v),+ }
            }

            /// Creates from an array.
            #[inline]
            pub const fn from_array(a: [f32; $n]) -> Self {
                Self { $($f: a[$i]),+ }
            }

            /// Converts to an array.
            #[inline]
            pub const fn to_array(self) -> [f32; $n] {
                [$(self.$f),+]
            }

            /// Dot product with another vector.
            #[inline]
            pub fn dot(self, other: Self) -> f32 {
                0.0 $(+ self.$f * other.$f)+
            }

            /// Squared length (avoids sqrt).
            #[inline]
            pub fn length_squared(self) -> f32 {
                self.dot(self)
            }

            /// Length (magnitude) of the vector.
            ///
            /// Returns exactly `0.0` when the squared length falls below
            /// [`VEC_EPSILON`], guarding the sqrt of a negative rounding
            /// residue and the zero-length [`normalize`](Self::normalize)
            /// divide.
            #[inline]
            pub fn length(self) -> f32 {
                let sq = self.length_squared();
                if sq < VEC_EPSILON {
                    return 0.0;
                }
                sq.sqrt()
            }

            /// Normalizes the vector to unit length.
            ///
            /// Unguarded: a zero-length input divides by the exact zero
            /// returned by [`length`](Self::length) and yields `inf`
            /// components. Callers that need safety must check
            /// [`length_squared`](Self::length_squared) first.
            #[inline]
            pub fn normalize(self) -> Self {
                self * (1.0 / self.length())
            }

            /// Linear interpolation between self and `end`.
            ///
            /// Evaluated as `end * t + self * (1 - t)`. The algebraic form
            /// matters: it differs from `self + (end - self) * t` in the
            /// last bits at extreme `t` and when extrapolating outside
            /// [0, 1].
            #[inline]
            pub fn lerp(self, end: Self, t: f32) -> Self {
                end * t + self * (1.0 - t)
            }

            /// Returns true if any component is NaN.
            #[inline]
            pub fn is_nan(self) -> bool {
                false $(|| self.$f.is_nan())+
            }

            /// Returns true if all components are finite (not NaN or
            /// infinite).
            #[inline]
            pub fn is_finite(self) -> bool {
                true $(&& self.$f.is_finite())+
            }

            /// Converts to the equivalent glam vector.
            #[inline]
            pub fn to_glam(self) -> $GlamVec {
                <$GlamVec>::new($(self.$f),+)
            }

            /// Creates from the equivalent glam vector.
            #[inline]
            pub fn from_glam(v: $GlamVec) -> Self {
                Self::new($(v.$f),+)
            }
        }

        // Tolerance equality: squared distance below VEC_EPSILON.
        impl PartialEq for $Vec {
            #[inline]
            fn eq(&self, other: &Self) -> bool {
                (*self - *other).length_squared() < VEC_EPSILON
            }
        }

        impl Index<usize> for $Vec {
            type Output = f32;

            #[inline]
            fn index(&self, i: usize) -> &f32 {
                match i {
                    $($i => &self.$f,)+
                    _ => panic!(concat!(stringify!($Vec), " index out of bounds: {}"), i),
                }
            }
        }

        impl IndexMut<usize> for $Vec {
            #[inline]
            fn index_mut(&mut self, i: usize) -> &mut f32 {
                match i {
                    $($i => &mut self.$f,)+
                    _ => panic!(concat!(stringify!($Vec), " index out of bounds: {}"), i),
                }
            }
        }

        impl Add for $Vec {
            type Output = Self;

            #[inline]
            fn add(self, rhs: Self) -> Self {
                Self::new($(self.$f + rhs.$f),+)
            }
        }

        impl Sub for $Vec {
            type Output = Self;

            #[inline]
            fn sub(self, rhs: Self) -> Self {
                Self::new($(self.$f - rhs.$f),+)
            }
        }

        // Componentwise product.
        impl Mul for $Vec {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: Self) -> Self {
                Self::new($(self.$f * rhs.$f),+)
            }
        }

        // Componentwise quotient. Unguarded: zero components propagate
        // IEEE-754 inf/NaN.
        impl Div for $Vec {
            type Output = Self;

            #[inline]
            fn div(self, rhs: Self) -> Self {
                Self::new($(self.$f / rhs.$f),+)
            }
        }

        impl Mul<f32> for $Vec {
            type Output = Self;

            #[inline]
            fn mul(self, rhs: f32) -> Self {
                Self::new($(self.$f * rhs),+)
            }
        }

        impl Mul<$Vec> for f32 {
            type Output = $Vec;

            #[inline]
            fn mul(self, rhs: $Vec) -> $Vec {
                rhs * self
            }
        }

        impl Div<f32> for $Vec {
            type Output = Self;

            #[inline]
            fn div(self, rhs: f32) -> Self {
                Self::new($(self.$f / rhs),+)
            }
        }

        impl Neg for $Vec {
            type Output = Self;

            #[inline]
            fn neg(self) -> Self {
                Self::new($(-self.$f),+)
            }
        }

        impl AddAssign for $Vec {
            #[inline]
            fn add_assign(&mut self, rhs: Self) {
                *self = *self + rhs;
            }
        }

        impl SubAssign for $Vec {
            #[inline]
            fn sub_assign(&mut self, rhs: Self) {
                *self = *self - rhs;
            }
        }

        impl MulAssign for $Vec {
            #[inline]
            fn mul_assign(&mut self, rhs: Self) {
                *self = *self * rhs;
            }
        }

        impl DivAssign for $Vec {
            #[inline]
            fn div_assign(&mut self, rhs: Self) {
                *self = *self / rhs;
            }
        }

        impl MulAssign<f32> for $Vec {
            #[inline]
            fn mul_assign(&mut self, rhs: f32) {
                *self = *self * rhs;
            }
        }

        impl DivAssign<f32> for $Vec {
            #[inline]
            fn div_assign(&mut self, rhs: f32) {
                *self = *self / rhs;
            }
        }

        impl From<[f32; $n]> for $Vec {
            #[inline]
            fn from(a: [f32; $n]) -> Self {
                Self::from_array(a)
            }
        }

        impl From<$Vec> for [f32; $n] {
            #[inline]
            fn from(v: $Vec) -> [f32; $n] {
                v.to_array()
            }
        }

        impl From<$GlamVec> for $Vec {
            #[inline]
            fn from(v: $GlamVec) -> Self {
                Self::from_glam(v)
            }
        }

        impl From<$Vec> for $GlamVec {
            #[inline]
            fn from(v: $Vec) -> $GlamVec {
                v.to_glam()
            }
        }
    };
}

impl_vector!(Vec2, glam::Vec2, 2, [x = 0, y = 1]);
impl_vector!(Vec3, glam::Vec3, 3, [x = 0, y = 1, z = 2]);
impl_vector!(Vec4, glam::Vec4, 4, [x = 0, y = 1, z = 2, w = 3]);

impl Vec2 {
    /// Zero vector (0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One vector (1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Unit X vector (1, 0).
    pub const X: Self = Self::new(1.0, 0.0);

    /// Unit Y vector (0, 1).
    pub const Y: Self = Self::new(0.0, 1.0);

    /// Appends a z component.
    #[inline]
    pub const fn extend(self, z: f32) -> Vec3 {
        Vec3::new(self.x, self.y, z)
    }
}

impl Vec3 {
    /// Zero vector (0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// One vector (1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0);

    /// Unit X vector (1, 0, 0).
    pub const X: Self = Self::new(1.0, 0.0, 0.0);

    /// Unit Y vector (0, 1, 0).
    pub const Y: Self = Self::new(0.0, 1.0, 0.0);

    /// Unit Z vector (0, 0, 1).
    pub const Z: Self = Self::new(0.0, 0.0, 1.0);

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Angle between two vectors in radians.
    ///
    /// Returns `0.0` when either input has a squared length below
    /// [`VEC_EPSILON`], guarding the acos domain error from that case only.
    /// The acos argument is deliberately *not* clamped to [-1, 1]:
    /// near-parallel inputs can still push `dot / (len * len)` just outside
    /// the domain through rounding and produce NaN. Preserved as observed
    /// behavior.
    #[inline]
    pub fn angle(self, other: Self) -> f32 {
        let sq_len_l = self.length_squared();
        let sq_len_r = other.length_squared();
        if sq_len_l < VEC_EPSILON || sq_len_r < VEC_EPSILON {
            return 0.0;
        }
        let len = sq_len_l.sqrt() * sq_len_r.sqrt();
        (self.dot(other) / len).acos()
    }

    /// Projects `self` onto `onto`.
    ///
    /// Returns the zero vector when `onto` has a squared length below
    /// [`VEC_EPSILON`].
    #[inline]
    pub fn project(self, onto: Self) -> Self {
        let sq_len = onto.length_squared();
        if sq_len < VEC_EPSILON {
            return Self::ZERO;
        }
        onto * (self.dot(onto) / sq_len)
    }

    /// Component of `self` perpendicular to `onto`.
    #[inline]
    pub fn reject(self, onto: Self) -> Self {
        self - self.project(onto)
    }

    /// Reflects `self` across the plane perpendicular to `normal`.
    ///
    /// Returns the zero vector when `normal` has a squared length below
    /// [`VEC_EPSILON`].
    #[inline]
    pub fn reflect(self, normal: Self) -> Self {
        if normal.length_squared() < VEC_EPSILON {
            return Self::ZERO;
        }
        self - self.project(normal) * 2.0
    }

    /// Spherical linear interpolation between two directions.
    ///
    /// Both endpoints are normalized first; the result is then the
    /// sin-weighted sum `from * sin((1-t)*theta)/sin(theta) +
    /// to * sin(t*theta)/sin(theta)`.
    ///
    /// Degenerates (divides by zero) when the endpoints are parallel or
    /// anti-parallel, where `sin(theta)` vanishes. Unguarded by design;
    /// use [`nlerp`](Self::nlerp) when the endpoints may coincide.
    #[inline]
    pub fn slerp(self, end: Self, t: f32) -> Self {
        let from = self.normalize();
        let to = end.normalize();
        let theta = from.angle(to);
        let sin_theta = theta.sin();
        let a = ((1.0 - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;
        from * a + to * b
    }

    /// Normalized linear interpolation.
    ///
    /// Cheap approximation of [`slerp`](Self::slerp) with the same lack of
    /// singularity handling: a degenerate lerp result normalizes to inf.
    #[inline]
    pub fn nlerp(self, end: Self, t: f32) -> Self {
        self.lerp(end, t).normalize()
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        Self::new(
            self.x.min(other.x),
            self.y.min(other.y),
            self.z.min(other.z),
        )
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        Self::new(
            self.x.max(other.x),
            self.y.max(other.y),
            self.z.max(other.z),
        )
    }

    /// Snapshot of the leading x, y components.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Writes a [`Vec2`] back into the leading components.
    #[inline]
    pub fn set_xy(&mut self, v: Vec2) {
        self.x = v.x;
        self.y = v.y;
    }

    /// Appends a w component.
    #[inline]
    pub const fn extend(self, w: f32) -> Vec4 {
        Vec4::new(self.x, self.y, self.z, w)
    }
}

impl Vec4 {
    /// Zero vector (0, 0, 0, 0).
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// One vector (1, 1, 1, 1).
    pub const ONE: Self = Self::new(1.0, 1.0, 1.0, 1.0);

    /// Red channel (alias for x).
    #[inline]
    pub const fn r(self) -> f32 {
        self.x
    }

    /// Green channel (alias for y).
    #[inline]
    pub const fn g(self) -> f32 {
        self.y
    }

    /// Blue channel (alias for z).
    #[inline]
    pub const fn b(self) -> f32 {
        self.z
    }

    /// Alpha channel (alias for w).
    #[inline]
    pub const fn a(self) -> f32 {
        self.w
    }

    /// Snapshot of the leading x, y components.
    #[inline]
    pub const fn xy(self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Snapshot of the leading x, y, z components.
    ///
    /// A copy, not a view: mutate through [`set_xyz`](Self::set_xyz).
    #[inline]
    pub const fn xyz(self) -> Vec3 {
        Vec3::new(self.x, self.y, self.z)
    }

    /// Writes a [`Vec3`] back into the leading components, leaving w
    /// untouched.
    #[inline]
    pub fn set_xyz(&mut self, v: Vec3) {
        self.x = v.x;
        self.y = v.y;
        self.z = v.z;
    }
}

// Truncating conversions mirror the original converting constructors:
// a longer vector narrows to its leading components.

impl From<Vec3> for Vec2 {
    #[inline]
    fn from(v: Vec3) -> Self {
        v.xy()
    }
}

impl From<Vec4> for Vec3 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.xyz()
    }
}

impl From<Vec4> for Vec2 {
    #[inline]
    fn from(v: Vec4) -> Self {
        v.xy()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_vec3_new() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
    }

    #[test]
    fn test_vec_splat() {
        assert_eq!(Vec2::splat(0.5).to_array(), [0.5, 0.5]);
        assert_eq!(Vec3::splat(0.5).to_array(), [0.5; 3]);
        assert_eq!(Vec4::splat(0.5).to_array(), [0.5; 4]);
    }

    #[test]
    fn test_vec3_ops() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);

        assert_eq!((a + b).to_array(), [5.0, 7.0, 9.0]);
        assert_eq!((b - a).to_array(), [3.0, 3.0, 3.0]);
        assert_eq!((a * b).to_array(), [4.0, 10.0, 18.0]);
        assert_eq!((a * 2.0).to_array(), [2.0, 4.0, 6.0]);
        assert_eq!((a / 2.0).to_array(), [0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_scalar_mul_commutes() {
        let v = Vec3::new(1.0, -2.0, 3.5);
        assert_eq!((2.0 * v).to_array(), (v * 2.0).to_array());
    }

    #[test]
    fn test_compound_assign() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        v += Vec4::splat(10.0);
        assert_eq!(v.to_array(), [11.0, 12.0, 13.0, 14.0]);
        v -= Vec4::splat(1.0);
        assert_eq!(v.to_array(), [10.0, 11.0, 12.0, 13.0]);
        v *= 2.0;
        assert_eq!(v.to_array(), [20.0, 22.0, 24.0, 26.0]);
    }

    #[test]
    fn test_div_by_zero_unguarded() {
        let v = Vec3::ONE / 0.0;
        assert!(v.x.is_infinite());
        let nan = Vec3::ZERO / Vec3::ZERO;
        assert!(nan.is_nan());
    }

    #[test]
    fn test_vec3_dot() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
    }

    #[test]
    fn test_vec3_cross_axes() {
        let a = Vec3::X;
        let b = Vec3::Y;
        assert_eq!(a.cross(b).to_array(), [0.0, 0.0, 1.0]);
        assert_eq!(a.dot(b), 0.0);
        assert_abs_diff_eq!(a.angle(b), FRAC_PI_2, epsilon = 1e-6);
    }

    #[test]
    fn test_cross_antisymmetric() {
        let a = Vec3::new(1.5, -2.0, 0.25);
        let b = Vec3::new(0.5, 4.0, -1.0);
        assert_eq!(a.cross(b).to_array(), (-(b.cross(a))).to_array());
    }

    #[test]
    fn test_length_degenerate_is_zero() {
        let tiny = Vec3::splat(1e-4);
        assert!(tiny.length_squared() < VEC_EPSILON);
        assert_eq!(tiny.length(), 0.0);
    }

    #[test]
    fn test_normalize() {
        let v = Vec3::new(3.0, 0.0, 4.0).normalize();
        assert_abs_diff_eq!(v.length(), 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(v.x, 0.6, epsilon = 1e-6);
    }

    #[test]
    fn test_normalize_zero_is_inf() {
        let v = Vec3::ZERO.normalize();
        assert!(!v.is_finite());
    }

    #[test]
    fn test_angle_degenerate() {
        assert_eq!(Vec3::ZERO.angle(Vec3::X), 0.0);
        assert_eq!(Vec3::X.angle(Vec3::splat(1e-4)), 0.0);
    }

    #[test]
    fn test_project_reject() {
        let a = Vec3::new(2.0, 3.0, -1.0);
        let b = Vec3::new(1.0, 1.0, 0.5);
        let p = a.project(b);
        let r = a.reject(b);
        assert_eq!(p + r, a);
        assert_abs_diff_eq!(r.dot(b), 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_project_degenerate() {
        let a = Vec3::new(2.0, 3.0, -1.0);
        assert_eq!(a.project(Vec3::ZERO).to_array(), [0.0; 3]);
        assert_eq!(a.reflect(Vec3::ZERO).to_array(), [0.0; 3]);
    }

    #[test]
    fn test_reflect() {
        let a = Vec3::new(1.0, -1.0, 0.0);
        let r = a.reflect(Vec3::Y);
        assert_abs_diff_eq!(r.x, 1.0, epsilon = 1e-6);
        assert_abs_diff_eq!(r.y, 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_lerp_endpoints_exact() {
        let s = Vec3::new(1.25, -3.5, 0.125);
        let e = Vec3::new(-7.0, 2.5, 9.0);
        assert_eq!(s.lerp(e, 0.0).to_array(), s.to_array());
        assert_eq!(s.lerp(e, 1.0).to_array(), e.to_array());
    }

    #[test]
    fn test_slerp_endpoints() {
        let s = Vec3::new(2.0, 0.0, 0.0);
        let e = Vec3::new(0.0, 3.0, 0.5);
        let r0 = s.slerp(e, 0.0);
        let r1 = s.slerp(e, 1.0);
        let sn = s.normalize();
        let en = e.normalize();
        assert_abs_diff_eq!(r0.x, sn.x, epsilon = 1e-5);
        assert_abs_diff_eq!(r1.y, en.y, epsilon = 1e-5);
        assert_abs_diff_eq!(r1.z, en.z, epsilon = 1e-5);
    }

    #[test]
    fn test_nlerp_unit_length() {
        let s = Vec3::new(1.0, 0.0, 0.0);
        let e = Vec3::new(0.0, 1.0, 0.0);
        assert_abs_diff_eq!(s.nlerp(e, 0.25).length(), 1.0, epsilon = 1e-6);
    }

    #[test]
    fn test_tolerance_equality() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(1.0 + 1e-4, 2.0, 3.0);
        // squared distance 1e-8 < VEC_EPSILON
        assert_eq!(a, b);
        let c = Vec3::new(1.01, 2.0, 3.0);
        assert_ne!(a, c);
    }

    #[test]
    fn test_swizzle_is_snapshot() {
        let mut v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        let xyz = v.xyz();
        v.x = 99.0;
        assert_eq!(xyz.x, 1.0);
        v.set_xyz(Vec3::splat(7.0));
        assert_eq!(v.to_array(), [7.0, 7.0, 7.0, 4.0]);
    }

    #[test]
    fn test_truncating_from() {
        let v4 = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(Vec3::from(v4).to_array(), [1.0, 2.0, 3.0]);
        assert_eq!(Vec2::from(v4).to_array(), [1.0, 2.0]);
        assert_eq!(Vec2::from(Vec3::new(5.0, 6.0, 7.0)).to_array(), [5.0, 6.0]);
    }

    #[test]
    fn test_index() {
        let v = Vec4::new(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v[0], 1.0);
        assert_eq!(v[3], 4.0);
        let mut m = Vec2::ZERO;
        m[1] = 5.0;
        assert_eq!(m.y, 5.0);
    }

    #[test]
    fn test_glam_roundtrip() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        let g: glam::Vec3 = v.into();
        assert_eq!(Vec3::from(g).to_array(), v.to_array());
    }
}
