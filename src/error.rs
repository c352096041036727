// src/error.rs
use crate::layout::LayoutError;
use crate::parser::ParseError;
use crate::render::RenderError;
use thiserror::Error;

/// A comprehensive error type for the entire sheet generation pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error("Layout failed: {0}")]
    Layout(#[from] LayoutError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
