//! The configurable 2D plot window and its pixel mapping.

use crate::error::{PlotError, Result};
use curve_math::{Vec2, VEC_EPSILON};

/// A pixel-space rectangle a plot is drawn into.
///
/// `origin` is the top-left corner; `size` the width and height in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Canvas {
    /// Top-left corner in pixels
    pub origin: Vec2,
    /// Width and height in pixels
    pub size: Vec2,
}

impl Canvas {
    /// Creates a canvas rectangle.
    #[inline]
    pub const fn new(origin: Vec2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// A square canvas of `dim` pixels at the origin.
    #[inline]
    pub const fn square(dim: f32) -> Self {
        Self::new(Vec2::ZERO, Vec2::splat(dim))
    }
}

/// The plot window: a `{min, max}` coordinate-mapping pair.
///
/// Plot coordinates inside the window map onto a [`Canvas`] with the y axis
/// flipped, so larger y draws higher on screen.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    min: Vec2,
    max: Vec2,
}

impl Viewport {
    /// Creates a viewport from its window corners.
    ///
    /// Rejects windows whose extent on either axis is within
    /// [`VEC_EPSILON`] of zero; such a window cannot be mapped without
    /// dividing by zero.
    pub fn new(min: Vec2, max: Vec2) -> Result<Self> {
        let extent = max - min;
        if extent.x.abs() < VEC_EPSILON || extent.y.abs() < VEC_EPSILON {
            return Err(PlotError::DegenerateViewport { min, max });
        }
        Ok(Self { min, max })
    }

    /// The unit window [0, 1] x [0, 1].
    #[inline]
    pub const fn unit() -> Self {
        Self {
            min: Vec2::ZERO,
            max: Vec2::ONE,
        }
    }

    /// Lower-left corner of the window.
    #[inline]
    pub const fn min(&self) -> Vec2 {
        self.min
    }

    /// Upper-right corner of the window.
    #[inline]
    pub const fn max(&self) -> Vec2 {
        self.max
    }

    /// Maps a plot coordinate to a pixel position on `canvas`.
    ///
    /// Normalizes `p` into the window, flips y, then scales into the canvas
    /// rectangle. Points outside the window map outside the canvas; no
    /// clipping happens here.
    #[inline]
    pub fn to_canvas(&self, p: Vec2, canvas: &Canvas) -> Vec2 {
        let npos = (p - self.min) / (self.max - self.min);
        Vec2::new(npos.x, 1.0 - npos.y) * canvas.size + canvas.origin
    }
}

impl Default for Viewport {
    #[inline]
    fn default() -> Self {
        Self::unit()
    }
}
