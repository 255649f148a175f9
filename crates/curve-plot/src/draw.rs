//! The draw-target boundary.
//!
//! [`DrawTarget`] is the seam between the pure math/plot layer and an actual
//! rendering backend. Coordinates arriving here are already mapped to pixel
//! space by a [`Viewport`](crate::Viewport); colors are RGBA [`Vec4`]
//! values.

use curve_math::{Vec2, Vec3, Vec4};

/// Something that can draw lines and points in pixel space.
///
/// 3D points are reduced to 2D by discarding the trailing component, so a
/// planar curve expressed in [`Vec3`] plots without manual conversion.
pub trait DrawTarget {
    /// Draws a line segment between two pixel positions.
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Vec4);

    /// Draws a point marker at a pixel position.
    fn draw_point(&mut self, p: Vec2, color: Vec4);

    /// Draws a line between two 3D points, discarding z.
    #[inline]
    fn draw_line_3d(&mut self, a: Vec3, b: Vec3, color: Vec4) {
        self.draw_line(a.xy(), b.xy(), color);
    }

    /// Draws a point at a 3D position, discarding z.
    #[inline]
    fn draw_point_3d(&mut self, p: Vec3, color: Vec4) {
        self.draw_point(p.xy(), color);
    }
}

/// A recorded draw call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    /// Line segment between two pixel positions.
    Line {
        /// Start position
        a: Vec2,
        /// End position
        b: Vec2,
        /// RGBA color
        color: Vec4,
    },
    /// Point marker at a pixel position.
    Point {
        /// Position
        p: Vec2,
        /// RGBA color
        color: Vec4,
    },
}

/// A [`DrawTarget`] that records commands instead of rendering.
///
/// Used by tests and by backends that replay a frame's draw list.
#[derive(Debug, Clone, Default)]
pub struct CommandLog {
    /// Commands in submission order.
    pub commands: Vec<DrawCommand>,
}

impl CommandLog {
    /// Drops all recorded commands.
    #[inline]
    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl DrawTarget for CommandLog {
    #[inline]
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Line { a, b, color });
    }

    #[inline]
    fn draw_point(&mut self, p: Vec2, color: Vec4) {
        self.commands.push(DrawCommand::Point { p, color });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colors;

    #[test]
    fn test_log_records_in_order() {
        let mut log = CommandLog::default();
        log.draw_line(Vec2::ZERO, Vec2::ONE, colors::WHITE);
        log.draw_point(Vec2::splat(0.5), colors::RED);
        assert_eq!(log.commands.len(), 2);
        assert!(matches!(log.commands[0], DrawCommand::Line { .. }));
        assert!(matches!(log.commands[1], DrawCommand::Point { .. }));
        log.clear();
        assert!(log.commands.is_empty());
    }

    #[test]
    fn test_3d_variants_discard_z() {
        let mut log = CommandLog::default();
        log.draw_point_3d(Vec3::new(1.0, 2.0, 99.0), colors::BLUE);
        match log.commands[0] {
            DrawCommand::Point { p, .. } => assert_eq!(p.to_array(), [1.0, 2.0]),
            _ => panic!("expected a point"),
        }
    }
}
