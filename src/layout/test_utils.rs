#![cfg(test)]

use super::fonts::StandardFont;
use super::geom::{Color, Point, Rect, Size};
use crate::render::{DocumentRenderer, RenderError};

#[derive(Debug, Clone, PartialEq)]
pub struct TextOp {
    pub font: StandardFont,
    pub size: f32,
    pub origin: Point,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    BeginPage(Size),
    Stroke(Color, f32),
    Line(Point, Point),
    RoundedRect(Rect, f32),
    Text(TextOp),
    EndPage,
}

/// A renderer that remembers every call, for asserting on layout decisions.
#[derive(Debug, Default)]
pub struct RecordingRenderer {
    pub ops: Vec<DrawOp>,
}

impl RecordingRenderer {
    pub fn with_page() -> Self {
        let mut renderer = Self::default();
        renderer.ops.push(DrawOp::BeginPage(Size::new(612.0, 792.0)));
        renderer
    }

    pub fn texts(&self) -> Vec<TextOp> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text(t) => Some(t.clone()),
                _ => None,
            })
            .collect()
    }

    pub fn count(&self, pred: impl Fn(&DrawOp) -> bool) -> usize {
        self.ops.iter().filter(|op| pred(op)).count()
    }
}

impl DocumentRenderer for RecordingRenderer {
    fn begin_page(&mut self, size: Size) -> Result<(), RenderError> {
        self.ops.push(DrawOp::BeginPage(size));
        Ok(())
    }

    fn set_stroke(&mut self, color: Color, width: f32) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Stroke(color, width));
        Ok(())
    }

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Line(from, to));
        Ok(())
    }

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32) -> Result<(), RenderError> {
        self.ops.push(DrawOp::RoundedRect(rect, radius));
        Ok(())
    }

    fn draw_text(
        &mut self,
        font: StandardFont,
        size: f32,
        origin: Point,
        text: &str,
    ) -> Result<(), RenderError> {
        self.ops.push(DrawOp::Text(TextOp {
            font,
            size,
            origin,
            text: text.to_string(),
        }));
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), RenderError> {
        self.ops.push(DrawOp::EndPage);
        Ok(())
    }
}
