//! The end-to-end run: load, normalize, replicate, paginate, draw, finalize.

use crate::card::{Card, replicate};
use crate::config::SheetConfig;
use crate::error::PipelineError;
use crate::layout::{LayoutEngine, LayoutStats};
use crate::parser;
use crate::render::LopdfDocumentRenderer;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

/// What a successful run produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetSummary {
    /// Cards in the deck after replication.
    pub cards: usize,
    pub pages: usize,
    /// Cards whose content was cut off at the bottom of their box.
    pub truncated: usize,
}

impl From<LayoutStats> for SheetSummary {
    fn from(stats: LayoutStats) -> Self {
        Self {
            cards: stats.cards,
            pages: stats.pages,
            truncated: stats.truncated,
        }
    }
}

pub struct SheetPipeline {
    config: SheetConfig,
    engine: LayoutEngine,
}

impl SheetPipeline {
    /// Fails if the configured grid cannot fit on the page.
    pub fn new(config: SheetConfig) -> Result<Self, PipelineError> {
        let engine = LayoutEngine::new(&config)?;
        Ok(Self { config, engine })
    }

    /// Parses and validates `text`, then repeats the cards `copies` times.
    pub fn build_deck(&self, text: &str) -> Result<Vec<Card>, PipelineError> {
        let cards = parser::load_cards(text)?;
        Ok(replicate(&cards, self.config.effective_copies()))
    }

    fn render_deck(
        &self,
        deck: &[Card],
    ) -> Result<(LopdfDocumentRenderer, SheetSummary), PipelineError> {
        let mut renderer = LopdfDocumentRenderer::new();
        let stats = self.engine.render(deck, &mut renderer)?;
        if stats.truncated > 0 {
            log::debug!("{} card(s) truncated to fit their box", stats.truncated);
        }
        Ok((renderer, stats.into()))
    }

    /// Generates the sheet for `text` into `writer`.
    pub fn generate<W: Write>(
        &self,
        text: &str,
        writer: W,
    ) -> Result<(W, SheetSummary), PipelineError> {
        let deck = self.build_deck(text)?;
        let (renderer, summary) = self.render_deck(&deck)?;
        let writer = renderer.finish(writer)?;
        Ok((writer, summary))
    }

    /// Reads `input` and writes the sheet to `output`.
    ///
    /// The output file is only created once every card has validated and
    /// every page has been laid out.
    pub fn generate_to_file(
        &self,
        input: &Path,
        output: &Path,
    ) -> Result<SheetSummary, PipelineError> {
        log::info!("Loading cards from {}", input.display());
        let text = fs::read_to_string(input).map_err(parser::ParseError::from)?;
        let deck = self.build_deck(&text)?;
        let (renderer, summary) = self.render_deck(&deck)?;

        let file = BufWriter::new(File::create(output)?);
        renderer.finish(file)?;
        log::info!("Finished {} ({} page(s))", output.display(), summary.pages);
        Ok(summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CARD: &str = "\
card_id: C-{n}
title: Card {n}
description: A short description.
print_layout: standard
scenario: Temple
outcome: success
";

    fn cards(n: usize) -> String {
        (1..=n)
            .map(|i| CARD.replace("{n}", &i.to_string()))
            .collect::<Vec<_>>()
            .join("---\n")
    }

    #[test]
    fn copies_replicate_the_deck_before_pagination() {
        let config = SheetConfig { copies: 3, ..Default::default() };
        let pipeline = SheetPipeline::new(config).unwrap();
        let deck = pipeline.build_deck(&cards(4)).unwrap();
        let ids: Vec<&str> = deck.iter().map(|c| c.card_id.as_str()).collect();
        assert_eq!(ids.len(), 12);
        assert_eq!(&ids[..5], ["C-1", "C-2", "C-3", "C-4", "C-1"]);
    }

    #[test]
    fn summary_counts_cards_and_pages() {
        let pipeline = SheetPipeline::new(SheetConfig::default()).unwrap();
        let (bytes, summary) = pipeline.generate(&cards(10), Vec::new()).unwrap();
        assert_eq!(summary, SheetSummary { cards: 10, pages: 2, truncated: 0 });
        assert!(bytes.starts_with(b"%PDF-1.7"));
    }

    #[test]
    fn invalid_input_never_creates_the_output_file() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("cards.yaml");
        let output = dir.path().join("sheet.pdf");
        fs::write(&input, "title: only a title\n").unwrap();

        let pipeline = SheetPipeline::new(SheetConfig::default()).unwrap();
        let err = pipeline.generate_to_file(&input, &output).unwrap_err();
        assert!(err.to_string().starts_with("Document #1 is missing required field(s)"));
        assert!(!output.exists());
    }

    #[test]
    fn impossible_grids_fail_up_front() {
        let config = SheetConfig { rows: 0, ..Default::default() };
        assert!(matches!(SheetPipeline::new(config), Err(PipelineError::Layout(_))));
    }
}
