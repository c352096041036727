//! Input handling: YAML extraction, document parsing and card normalization.

mod error;
pub mod normalize;
pub mod source;

pub use error::ParseError;
pub use normalize::{has_required_value, normalize_document, stringify, REQUIRED_FIELDS};
pub use source::{extract_yaml_text, parse_documents};

use crate::card::Card;
use std::fs;
use std::path::Path;

/// Parses and validates every card in `text`.
///
/// Fails on the first invalid document, or when no document yields a card.
pub fn load_cards(text: &str) -> Result<Vec<Card>, ParseError> {
    let yaml = extract_yaml_text(text);
    let documents = parse_documents(&yaml)?;

    let cards = documents
        .into_iter()
        .enumerate()
        .map(|(i, doc)| normalize_document(i + 1, doc))
        .collect::<Result<Vec<_>, _>>()?;

    if cards.is_empty() {
        return Err(ParseError::NoCards);
    }
    log::info!("Loaded {} card(s)", cards.len());
    Ok(cards)
}

pub fn load_cards_from_file(path: &Path) -> Result<Vec<Card>, ParseError> {
    let text = fs::read_to_string(path)?;
    load_cards(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    const VALID: &str = "\
card_id: C-1
title: First
description: d
print_layout: standard
scenario: Temple
outcome: success
";

    #[test]
    fn empty_input_reports_no_cards() {
        assert!(matches!(load_cards(""), Err(ParseError::NoCards)));
        assert!(matches!(load_cards("---\n---\n"), Err(ParseError::NoCards)));
    }

    #[test]
    fn document_index_skips_empty_documents() {
        let text = "---\n---\ncard_id: 1\n";
        match load_cards(text) {
            Err(ParseError::MissingFields { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn repeated_title_uses_the_last_value() {
        let cards = load_cards(&format!("{VALID}title: Second\n")).unwrap();
        assert_eq!(cards[0].title, "Second");
    }

    #[test]
    fn falsy_documents_do_not_take_a_number() {
        let cards = load_cards(&format!("false\n---\n0\n---\n{VALID}")).unwrap();
        assert_eq!(cards.len(), 1);

        match load_cards("false\n---\ntitle: only\n") {
            Err(ParseError::MissingFields { index, .. }) => assert_eq!(index, 1),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
