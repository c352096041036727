//! Page layout: grid geometry, text wrapping and per-card drawing.

pub mod card;
pub mod fonts;
pub mod geom;
pub mod grid;
pub mod text;

mod test_utils;

pub use card::{CardOutcome, CardStyle, draw_card};
pub use fonts::StandardFont;
pub use geom::{Color, Point, Rect, Size};
pub use grid::{GridGeometry, paginate};
pub use text::wrap_text;

use crate::card::Card;
use crate::config::SheetConfig;
use crate::render::{DocumentRenderer, RenderError};
use thiserror::Error;

const CUT_GUIDE_WIDTH: f32 = 0.3;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Invalid grid: {0}")]
    InvalidGrid(String),
}

/// Counts gathered while drawing a deck.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LayoutStats {
    pub pages: usize,
    pub cards: usize,
    pub truncated: usize,
}

/// Places cards on pages and drives the renderer.
#[derive(Debug, Clone)]
pub struct LayoutEngine {
    grid: GridGeometry,
    style: CardStyle,
}

impl LayoutEngine {
    pub fn new(config: &SheetConfig) -> Result<Self, LayoutError> {
        let grid = GridGeometry::new(
            config.page_size.dimensions_pt(),
            config.margin_pt(),
            config.gutter_pt(),
            config.rows,
            config.cols,
        )?;
        Ok(Self {
            grid,
            style: CardStyle::from_config(config),
        })
    }

    pub fn grid(&self) -> &GridGeometry {
        &self.grid
    }

    pub fn style(&self) -> &CardStyle {
        &self.style
    }

    pub fn paginate<'a>(&self, deck: &'a [Card]) -> Vec<&'a [Card]> {
        paginate(deck, self.grid.rows, self.grid.cols)
    }

    /// Draws one page: cut guides first, then each card in reading order.
    pub fn render_page<R: DocumentRenderer + ?Sized>(
        &self,
        renderer: &mut R,
        cards: &[Card],
    ) -> Result<usize, RenderError> {
        renderer.begin_page(self.grid.page)?;

        renderer.set_stroke(Color::LIGHT_GREY, CUT_GUIDE_WIDTH)?;
        for (from, to) in self.grid.cut_guides() {
            renderer.stroke_line(from, to)?;
        }

        let mut truncated = 0;
        for (i, card) in cards.iter().enumerate() {
            if draw_card(renderer, self.grid.slot(i), card, &self.style)? == CardOutcome::Truncated {
                truncated += 1;
            }
        }

        renderer.end_page()?;
        Ok(truncated)
    }

    /// Draws the whole deck, one page per `rows * cols` cards.
    pub fn render<R: DocumentRenderer + ?Sized>(
        &self,
        deck: &[Card],
        renderer: &mut R,
    ) -> Result<LayoutStats, RenderError> {
        let pages = self.paginate(deck);
        let mut stats = LayoutStats {
            pages: pages.len(),
            cards: deck.len(),
            truncated: 0,
        };
        for (index, page) in pages.iter().enumerate() {
            log::debug!("Laying out page {} with {} card(s)", index + 1, page.len());
            stats.truncated += self.render_page(renderer, page)?;
        }
        Ok(stats)
    }
}
