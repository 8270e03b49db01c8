//! Headless draw surface that records every call.
//!
//! Text is measured with fixed monospace bitmap metrics, so layouts computed against it are
//! deterministic. Positions are reported both as issued (`ops`) and resolved through the
//! translation stack (`texts`, `fills`).

use crate::core::color::Color;
use crate::core::text::width::text_columns;
use crate::render::surface::{DrawSurface, Rect};

/// Monospace bitmap font metrics.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BitmapFontMetrics {
    pub glyph_width: f32,
    pub line_height: f32,
}

impl BitmapFontMetrics {
    pub fn new(glyph_width: f32, line_height: f32) -> Self {
        Self {
            glyph_width,
            line_height,
        }
    }
}

impl Default for BitmapFontMetrics {
    fn default() -> Self {
        Self::new(8.0, 11.0)
    }
}

/// A recorded surface call, in the coordinates it was issued with.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    SetColor(Color),
    FillRect(Rect),
    Text { text: String, x: f32, y: f32 },
    PushTransform { dx: f32, dy: f32 },
    PopTransform,
}

/// Text drawn at an absolute position with the color active at the time.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawnText {
    pub text: String,
    pub x: f32,
    pub y: f32,
    pub color: Color,
}

#[derive(Debug, Default)]
pub struct RecordingSurface {
    metrics: BitmapFontMetrics,
    color: Color,
    offset: (f32, f32),
    stack: Vec<(f32, f32)>,
    ops: Vec<DrawOp>,
    texts: Vec<DrawnText>,
    fills: Vec<(Rect, Color)>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_metrics(metrics: BitmapFontMetrics) -> Self {
        Self {
            metrics,
            ..Self::default()
        }
    }

    pub fn metrics(&self) -> BitmapFontMetrics {
        self.metrics
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn texts(&self) -> &[DrawnText] {
        &self.texts
    }

    /// Drawn strings in draw order.
    pub fn text_strings(&self) -> Vec<&str> {
        self.texts.iter().map(|drawn| drawn.text.as_str()).collect()
    }

    /// Filled rectangles in absolute coordinates.
    pub fn fills(&self) -> &[(Rect, Color)] {
        &self.fills
    }

    /// Number of translations currently pushed.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    pub fn clear(&mut self) {
        self.ops.clear();
        self.texts.clear();
        self.fills.clear();
    }
}

impl DrawSurface for RecordingSurface {
    fn set_color(&mut self, color: Color) {
        self.color = color;
        self.ops.push(DrawOp::SetColor(color));
    }

    fn fill_rect(&mut self, rect: Rect) {
        self.ops.push(DrawOp::FillRect(rect));
        let absolute = Rect::new(
            rect.x + self.offset.0,
            rect.y + self.offset.1,
            rect.width,
            rect.height,
        );
        self.fills.push((absolute, self.color));
    }

    fn text_bounds(&self, text: &str) -> Rect {
        let columns = text_columns(text) as f32;
        Rect::new(
            0.0,
            0.0,
            columns * self.metrics.glyph_width,
            self.metrics.line_height,
        )
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            x,
            y,
        });
        self.texts.push(DrawnText {
            text: text.to_string(),
            x: x + self.offset.0,
            y: y + self.offset.1,
            color: self.color,
        });
    }

    fn push_transform(&mut self, dx: f32, dy: f32) {
        self.ops.push(DrawOp::PushTransform { dx, dy });
        self.stack.push(self.offset);
        self.offset = (self.offset.0 + dx, self.offset.1 + dy);
    }

    fn pop_transform(&mut self) {
        self.ops.push(DrawOp::PopTransform);
        // Unbalanced pops leave the origin where it is.
        if let Some(previous) = self.stack.pop() {
            self.offset = previous;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{BitmapFontMetrics, DrawOp, RecordingSurface};
    use crate::core::color::Color;
    use crate::render::surface::{DrawSurface, Rect};

    #[test]
    fn measures_with_monospace_metrics() {
        let surface = RecordingSurface::new();
        assert_eq!(surface.text_bounds("> "), Rect::new(0.0, 0.0, 16.0, 11.0));

        let wide = RecordingSurface::with_metrics(BitmapFontMetrics::new(10.0, 20.0));
        assert_eq!(wide.text_bounds("abc").width, 30.0);
        assert_eq!(wide.text_bounds("").height, 20.0);
    }

    #[test]
    fn fills_and_texts_carry_active_color_and_offset() {
        let mut surface = RecordingSurface::new();
        surface.push_transform(5.0, 6.0);
        surface.set_color(Color::BLACK);
        surface.fill_rect(Rect::new(0.0, 0.0, 10.0, 10.0));
        surface.set_color(Color::gray(200));
        surface.draw_text("hi", 1.0, 1.0);
        surface.pop_transform();

        assert_eq!(
            surface.fills(),
            &[(Rect::new(5.0, 6.0, 10.0, 10.0), Color::BLACK)]
        );
        let drawn = &surface.texts()[0];
        assert_eq!((drawn.x, drawn.y, drawn.color), (6.0, 7.0, Color::gray(200)));
        assert_eq!(surface.ops().len(), 6);
        assert_eq!(surface.ops()[0], DrawOp::PushTransform { dx: 5.0, dy: 6.0 });
    }

    #[test]
    fn unbalanced_pop_is_ignored() {
        let mut surface = RecordingSurface::new();
        surface.pop_transform();
        surface.draw_text("x", 2.0, 3.0);
        assert_eq!(surface.depth(), 0);
        assert_eq!((surface.texts()[0].x, surface.texts()[0].y), (2.0, 3.0));
    }
}
