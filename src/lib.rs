//! Turns YAML card definitions into a printable PDF sheet of bordered cards.
//!
//! Input is one or more YAML documents, optionally inside Markdown ```yaml
//! fences. Each document becomes a [`Card`]; the deck is laid out row-major in
//! a fixed grid, paginated, and written with the `lopdf` backend.

pub mod card;
pub mod config;
pub mod error;
pub mod layout;
pub mod parser;
pub mod pipeline;
pub mod render;

pub use card::{Card, Section};
pub use config::{FontSet, PageSize, SheetConfig};
pub use error::PipelineError;
pub use layout::{LayoutEngine, LayoutError};
pub use parser::ParseError;
pub use pipeline::{SheetPipeline, SheetSummary};
pub use render::{DocumentRenderer, LopdfDocumentRenderer, RenderError};
