//! Drawing backends for the card sheet.

use crate::layout::fonts::StandardFont;
use crate::layout::geom::{Color, Point, Rect, Size};
use thiserror::Error;

pub mod lopdf;

pub use self::lopdf::LopdfDocumentRenderer;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("PDF generation error: {0}")]
    Pdf(String),
    #[error("Other rendering error: {0}")]
    Other(String),
}

impl From<::lopdf::Error> for RenderError {
    fn from(err: ::lopdf::Error) -> Self {
        RenderError::Pdf(err.to_string())
    }
}

/// The drawing primitives the layout engine needs from a page canvas.
///
/// Coordinates are PDF points with the origin at the bottom-left of the page.
/// Drawing outside `begin_page`/`end_page` is an error.
pub trait DocumentRenderer {
    fn begin_page(&mut self, size: Size) -> Result<(), RenderError>;

    /// Sets the colour and width used by subsequent strokes.
    fn set_stroke(&mut self, color: Color, width: f32) -> Result<(), RenderError>;

    fn stroke_line(&mut self, from: Point, to: Point) -> Result<(), RenderError>;

    fn stroke_rounded_rect(&mut self, rect: Rect, radius: f32) -> Result<(), RenderError>;

    /// Draws `text` with its baseline starting at `origin`.
    fn draw_text(
        &mut self,
        font: StandardFont,
        size: f32,
        origin: Point,
        text: &str,
    ) -> Result<(), RenderError>;

    fn end_page(&mut self) -> Result<(), RenderError>;
}
