//! Named RGBA colors used by the demo plots.

use curve_math::Vec4;

/// Opaque white.
pub const WHITE: Vec4 = Vec4::new(1.0, 1.0, 1.0, 1.0);

/// Opaque pink.
pub const PINK: Vec4 = Vec4::new(1.0, 0.0, 0.75, 1.0);

/// Opaque cyan.
pub const CYAN: Vec4 = Vec4::new(0.0, 0.75, 1.0, 1.0);

/// Opaque red.
pub const RED: Vec4 = Vec4::new(1.0, 0.0, 0.0, 1.0);

/// Opaque green.
pub const GREEN: Vec4 = Vec4::new(0.0, 1.0, 0.0, 1.0);

/// Opaque blue.
pub const BLUE: Vec4 = Vec4::new(0.0, 0.0, 1.0, 1.0);

/// Opaque magenta.
pub const MAGENTA: Vec4 = Vec4::new(1.0, 0.0, 1.0, 1.0);
