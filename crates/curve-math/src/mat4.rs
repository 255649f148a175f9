//! 4x4 transform matrix.
//!
//! # Convention
//!
//! [`Mat4`] stores four [`Vec4`] **columns** and multiplies **column
//! vectors**: `result = matrix * vector`. This is the canonical convention
//! for the whole workspace; translation lives in the last column.
//!
//! ```text
//! | c0.x c1.x c2.x c3.x |   | x |
//! | c0.y c1.y c2.y c3.y | * | y |
//! | c0.z c1.z c2.z c3.z |   | z |
//! | c0.w c1.w c2.w c3.w |   | w |
//! ```
//!
//! # Equality
//!
//! `==` compares each of the 16 elements with an absolute tolerance of
//! [`MAT4_EPSILON`] - a per-element policy, deliberately different from the
//! squared-distance policy vectors use.
//!
//! # Usage
//!
//! ```rust
//! use curve_math::{Mat4, Vec3, Vec4};
//!
//! let t = Mat4::translation(Vec3::new(1.0, 2.0, 3.0));
//! let p = t * Vec4::new(0.0, 0.0, 0.0, 1.0);
//! assert_eq!(p.to_array(), [1.0, 2.0, 3.0, 1.0]);
//! ```

use crate::consts::MAT4_EPSILON;
use crate::vector::{Vec3, Vec4};
use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A 4x4 transform matrix stored as four [`Vec4`] columns.
#[derive(Debug, Clone, Copy)]
#[repr(C)]
pub struct Mat4 {
    /// Columns in order: x axis, y axis, z axis, translation.
    pub cols: [Vec4; 4],
}

impl Mat4 {
    /// Zero matrix.
    pub const ZERO: Self = Self {
        cols: [Vec4::ZERO; 4],
    };

    /// Identity matrix.
    pub const IDENTITY: Self = Self {
        cols: [
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(0.0, 0.0, 0.0, 1.0),
        ],
    };

    /// Creates a matrix from column vectors.
    #[inline]
    pub const fn from_cols(c0: Vec4, c1: Vec4, c2: Vec4, c3: Vec4) -> Self {
        Self {
            cols: [c0, c1, c2, c3],
        }
    }

    /// Creates a diagonal matrix (all four diagonal elements, including w).
    ///
    /// `from_diagonal(Vec4::splat(s))` reproduces the scalar constructor of
    /// the usual C-family math libraries.
    #[inline]
    pub const fn from_diagonal(d: Vec4) -> Self {
        Self::from_cols(
            Vec4::new(d.x, 0.0, 0.0, 0.0),
            Vec4::new(0.0, d.y, 0.0, 0.0),
            Vec4::new(0.0, 0.0, d.z, 0.0),
            Vec4::new(0.0, 0.0, 0.0, d.w),
        )
    }

    /// Translation matrix: moves a homogeneous point by `t`.
    #[inline]
    pub const fn translation(t: Vec3) -> Self {
        Self::from_cols(
            Vec4::new(1.0, 0.0, 0.0, 0.0),
            Vec4::new(0.0, 1.0, 0.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::new(t.x, t.y, t.z, 1.0),
        )
    }

    /// Per-axis scale matrix; the w diagonal stays 1.
    #[inline]
    pub const fn scaling(s: Vec3) -> Self {
        Self::from_diagonal(Vec4::new(s.x, s.y, s.z, 1.0))
    }

    /// Returns a column.
    #[inline]
    pub const fn col(&self, i: usize) -> Vec4 {
        self.cols[i]
    }

    /// Returns a row.
    #[inline]
    pub fn row(&self, i: usize) -> Vec4 {
        Vec4::new(self.cols[0][i], self.cols[1][i], self.cols[2][i], self.cols[3][i])
    }

    /// Returns the transpose of this matrix.
    #[inline]
    pub fn transpose(&self) -> Self {
        Self::from_cols(self.row(0), self.row(1), self.row(2), self.row(3))
    }

    /// Transforms a column vector: `self * v`.
    #[inline]
    pub fn transform(&self, v: Vec4) -> Vec4 {
        self.cols[0] * v.x + self.cols[1] * v.y + self.cols[2] * v.z + self.cols[3] * v.w
    }

    /// Transforms a point, treating `p` as homogeneous with w = 1.
    #[inline]
    pub fn transform_point(&self, p: Vec3) -> Vec3 {
        self.transform(p.extend(1.0)).xyz()
    }

    /// Matrix product: `self * other` applies `other` first.
    #[inline]
    pub fn mul_mat(&self, other: &Self) -> Self {
        Self::from_cols(
            self.transform(other.cols[0]),
            self.transform(other.cols[1]),
            self.transform(other.cols[2]),
            self.transform(other.cols[3]),
        )
    }

    /// Flattens to 16 elements in column-major order.
    #[inline]
    pub const fn to_cols_array(&self) -> [f32; 16] {
        let c = &self.cols;
        [
            c[0].x, c[0].y, c[0].z, c[0].w,
            c[1].x, c[1].y, c[1].z, c[1].w,
            c[2].x, c[2].y, c[2].z, c[2].w,
            c[3].x, c[3].y, c[3].z, c[3].w,
        ]
    }

    /// Creates from 16 elements in column-major order.
    #[inline]
    pub const fn from_cols_array(a: &[f32; 16]) -> Self {
        Self::from_cols(
            Vec4::new(a[0], a[1], a[2], a[3]),
            Vec4::new(a[4], a[5], a[6], a[7]),
            Vec4::new(a[8], a[9], a[10], a[11]),
            Vec4::new(a[12], a[13], a[14], a[15]),
        )
    }

    /// Returns true if all elements are finite (not NaN or infinite).
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.cols.iter().all(|c| c.is_finite())
    }

    /// Converts to glam Mat4 (also column-major, direct copy).
    #[inline]
    pub fn to_glam(&self) -> glam::Mat4 {
        glam::Mat4::from_cols_array(&self.to_cols_array())
    }

    /// Creates from glam Mat4.
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_cols_array(&m.to_cols_array())
    }
}

impl Default for Mat4 {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

// Per-element tolerance equality, MAT4_EPSILON policy.
impl PartialEq for Mat4 {
    fn eq(&self, other: &Self) -> bool {
        let a = self.to_cols_array();
        let b = other.to_cols_array();
        a.iter().zip(b.iter()).all(|(x, y)| (x - y).abs() < MAT4_EPSILON)
    }
}

impl Mul<Vec4> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn mul(self, rhs: Vec4) -> Vec4 {
        self.transform(rhs)
    }
}

impl Mul for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        self.mul_mat(&rhs)
    }
}

impl Mul<f32> for Mat4 {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_cols(
            self.cols[0] * rhs,
            self.cols[1] * rhs,
            self.cols[2] * rhs,
            self.cols[3] * rhs,
        )
    }
}

impl Add for Mat4 {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_cols(
            self.cols[0] + rhs.cols[0],
            self.cols[1] + rhs.cols[1],
            self.cols[2] + rhs.cols[2],
            self.cols[3] + rhs.cols[3],
        )
    }
}

impl Sub for Mat4 {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_cols(
            self.cols[0] - rhs.cols[0],
            self.cols[1] - rhs.cols[1],
            self.cols[2] - rhs.cols[2],
            self.cols[3] - rhs.cols[3],
        )
    }
}

impl AddAssign for Mat4 {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Mat4 {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Mat4 {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl Index<usize> for Mat4 {
    type Output = Vec4;

    #[inline]
    fn index(&self, i: usize) -> &Vec4 {
        &self.cols[i]
    }
}

impl IndexMut<usize> for Mat4 {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Vec4 {
        &mut self.cols[i]
    }
}
