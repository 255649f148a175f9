//! Bezier plotting: chord sampling and the control-handle overlay.

use crate::colors;
use crate::draw::DrawTarget;
use crate::error::{PlotError, Result};
use crate::viewport::{Canvas, Viewport};
use curve_math::{interpolate, Bezier, Vec3, Vec4};
use tracing::debug;

/// Plots curves through a [`Viewport`] onto a [`Canvas`].
#[derive(Debug, Clone, Copy)]
pub struct CurvePlot {
    viewport: Viewport,
    canvas: Canvas,
}

impl CurvePlot {
    /// Creates a plot over the given window and pixel rectangle.
    #[inline]
    pub const fn new(viewport: Viewport, canvas: Canvas) -> Self {
        Self { viewport, canvas }
    }

    /// The plot window.
    #[inline]
    pub const fn viewport(&self) -> Viewport {
        self.viewport
    }

    /// The pixel rectangle.
    #[inline]
    pub const fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Draws a Bezier curve as `segments` straight chords.
    ///
    /// Evaluates the curve at `t = i / segments` and joins consecutive
    /// samples, exactly one draw call per chord.
    pub fn plot_bezier(
        &self,
        target: &mut dyn DrawTarget,
        curve: &Bezier<Vec3>,
        segments: u32,
        color: Vec4,
    ) -> Result<()> {
        if segments == 0 {
            return Err(PlotError::NoSegments);
        }
        debug!(segments, "plotting bezier chords");
        for i in 0..segments {
            let t0 = i as f32 / segments as f32;
            let t1 = (i + 1) as f32 / segments as f32;
            let k0 = interpolate(curve, t0);
            let k1 = interpolate(curve, t1);
            target.draw_line(
                self.viewport.to_canvas(k0.xy(), &self.canvas),
                self.viewport.to_canvas(k1.xy(), &self.canvas),
                color,
            );
        }
        Ok(())
    }

    /// Draws the control-handle overlay: white handle lines from each
    /// endpoint to its control value, red endpoint markers, green control
    /// markers.
    pub fn draw_handles(&self, target: &mut dyn DrawTarget, curve: &Bezier<Vec3>) {
        let p1 = self.viewport.to_canvas(curve.p1.xy(), &self.canvas);
        let c1 = self.viewport.to_canvas(curve.c1.xy(), &self.canvas);
        let c2 = self.viewport.to_canvas(curve.c2.xy(), &self.canvas);
        let p2 = self.viewport.to_canvas(curve.p2.xy(), &self.canvas);

        target.draw_line(p1, c1, colors::WHITE);
        target.draw_line(p2, c2, colors::WHITE);
        target.draw_point(p1, colors::RED);
        target.draw_point(c1, colors::GREEN);
        target.draw_point(p2, colors::RED);
        target.draw_point(c2, colors::GREEN);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::{CommandLog, DrawCommand};
    use curve_math::Vec2;

    fn demo_curve() -> Bezier<Vec3> {
        Bezier::new(
            Vec3::new(-5.0, 0.0, 0.0),
            Vec3::new(-2.0, 1.0, 0.0),
            Vec3::new(2.0, 1.0, 0.0),
            Vec3::new(5.0, 0.0, 0.0),
        )
    }

    fn demo_plot() -> CurvePlot {
        let viewport = Viewport::new(Vec2::splat(-5.0), Vec2::splat(5.0)).unwrap();
        CurvePlot::new(viewport, Canvas::square(256.0))
    }

    #[test]
    fn test_one_chord_per_segment() {
        let plot = demo_plot();
        let mut log = CommandLog::default();
        plot.plot_bezier(&mut log, &demo_curve(), 200, colors::MAGENTA)
            .unwrap();
        assert_eq!(log.commands.len(), 200);
    }

    #[test]
    fn test_chords_join_end_to_end() {
        let plot = demo_plot();
        let mut log = CommandLog::default();
        plot.plot_bezier(&mut log, &demo_curve(), 8, colors::CYAN).unwrap();
        for pair in log.commands.windows(2) {
            let (DrawCommand::Line { b, .. }, DrawCommand::Line { a, .. }) = (pair[0], pair[1])
            else {
                panic!("expected line commands");
            };
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_chords_stay_on_canvas() {
        let plot = demo_plot();
        let mut log = CommandLog::default();
        plot.plot_bezier(&mut log, &demo_curve(), 50, colors::PINK).unwrap();
        for cmd in &log.commands {
            let DrawCommand::Line { a, b, .. } = cmd else {
                panic!("expected line commands");
            };
            for p in [a, b] {
                assert!(p.x >= -0.5 && p.x <= 256.5, "x out of canvas: {}", p.x);
                assert!(p.y >= -0.5 && p.y <= 256.5, "y out of canvas: {}", p.y);
            }
        }
    }

    #[test]
    fn test_zero_segments_rejected() {
        let plot = demo_plot();
        let mut log = CommandLog::default();
        let r = plot.plot_bezier(&mut log, &demo_curve(), 0, colors::WHITE);
        assert!(matches!(r, Err(PlotError::NoSegments)));
        assert!(log.commands.is_empty());
    }

    #[test]
    fn test_handle_overlay_shape() {
        let plot = demo_plot();
        let mut log = CommandLog::default();
        plot.draw_handles(&mut log, &demo_curve());
        let lines = log
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Line { .. }))
            .count();
        let points = log
            .commands
            .iter()
            .filter(|c| matches!(c, DrawCommand::Point { .. }))
            .count();
        assert_eq!(lines, 2);
        assert_eq!(points, 4);
    }
}
