//! Errors raised while turning input text into cards.
use thiserror::Error;

/// Every way loading a card file can fail. All of them abort the run before
/// anything is drawn.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Document #{index} is not a mapping and cannot be used as a card definition.")]
    NotAMapping { index: usize },

    #[error("Document #{index} is missing required field(s): {}.", .fields.join(", "))]
    MissingFields {
        index: usize,
        fields: Vec<&'static str>,
    },

    #[error("No cards parsed. Make sure your file contains valid YAML documents.")]
    NoCards,
}
