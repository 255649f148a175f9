//! Terminal backend: rasterizes draw commands into a character grid.

use curve_math::{lerp, Vec2, Vec4};
use curve_plot::DrawTarget;

/// A character-cell [`DrawTarget`].
///
/// Pixel coordinates map 1:1 onto cells; out-of-range samples are clipped.
/// Colors collapse to one glyph per dominant channel, enough to tell the
/// curve from its handles in a terminal.
pub struct AsciiCanvas {
    width: usize,
    height: usize,
    cells: Vec<char>,
}

impl AsciiCanvas {
    /// Creates an empty canvas of `width` x `height` cells.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            cells: vec![' '; width * height],
        }
    }

    /// Canvas width in cells.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Canvas height in cells.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Glyph at a cell, row-major.
    pub fn at(&self, x: usize, y: usize) -> char {
        self.cells[y * self.width + x]
    }

    fn put(&mut self, p: Vec2, glyph: char) {
        let x = p.x.round();
        let y = p.y.round();
        if x < 0.0 || y < 0.0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return;
        }
        self.cells[y * self.width + x] = glyph;
    }

    fn glyph_for(color: Vec4) -> char {
        let (r, g, b) = (color.r(), color.g(), color.b());
        if r >= 0.99 && g >= 0.99 && b >= 0.99 {
            '+'
        } else if r > g && r > b {
            'o'
        } else if g > r && g > b {
            'x'
        } else if b > r && b > g {
            '#'
        } else {
            '*'
        }
    }

    /// Renders the grid as newline-separated rows.
    pub fn render(&self) -> String {
        let mut out = String::with_capacity((self.width + 1) * self.height);
        for y in 0..self.height {
            for x in 0..self.width {
                out.push(self.at(x, y));
            }
            out.push('\n');
        }
        out
    }
}

impl DrawTarget for AsciiCanvas {
    fn draw_line(&mut self, a: Vec2, b: Vec2, color: Vec4) {
        let glyph = Self::glyph_for(color);
        let span = b - a;
        let steps = span.x.abs().max(span.y.abs()).ceil().max(1.0) as usize;
        for i in 0..=steps {
            let t = i as f32 / steps as f32;
            let p = Vec2::new(lerp(a.x, b.x, t), lerp(a.y, b.y, t));
            self.put(p, glyph);
        }
    }

    fn draw_point(&mut self, p: Vec2, color: Vec4) {
        self.put(p, Self::glyph_for(color));
    }
}
