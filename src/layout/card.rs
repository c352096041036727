//! Draws a single card into its slot.

use super::fonts::StandardFont;
use super::geom::{Color, Point, Rect};
use super::text::wrap_text;
use crate::card::Card;
use crate::config::{FontSet, SheetConfig};
use crate::render::{DocumentRenderer, RenderError};

const TITLE_LEADING: f32 = 1.2;
const BODY_LEADING: f32 = 1.15;
const DIVIDER_GAP_ABOVE: f32 = 4.0;
const DIVIDER_GAP_BELOW: f32 = 6.0;
const TITLE_SEGMENT_SEPARATOR: &str = " - ";
const ELLIPSIS: &str = "\u{2026}";

const BORDER_WIDTH: f32 = 1.0;
const DIVIDER_WIDTH: f32 = 0.5;

/// Typography and border settings shared by every card on the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardStyle {
    pub fonts: FontSet,
    pub title_size: f32,
    pub body_size: f32,
    pub corner_radius: f32,
    pub padding: f32,
}

impl CardStyle {
    pub fn from_config(config: &SheetConfig) -> Self {
        Self {
            fonts: config.fonts,
            title_size: config.title_size,
            body_size: config.body_size,
            corner_radius: config.corner_radius,
            padding: config.padding,
        }
    }

    /// Titles that carry an outcome prefix ("Result — Detail") are set bold.
    /// Any hyphen counts, including ones inside ordinary words.
    pub fn title_font(&self, title: &str) -> StandardFont {
        if title.contains('\u{2014}') || title.contains('-') {
            self.fonts.bold
        } else {
            self.fonts.title
        }
    }
}

impl Default for CardStyle {
    fn default() -> Self {
        Self::from_config(&SheetConfig::default())
    }
}

/// Whether everything on the card fit inside its box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardOutcome {
    Complete,
    /// Drawing stopped at the bottom edge and an ellipsis marks the cut.
    Truncated,
}

/// Draws `card` inside `slot`: border, title block, divider, then the body
/// sections top to bottom until they run out or the box does.
pub fn draw_card<R: DocumentRenderer + ?Sized>(
    renderer: &mut R,
    slot: Rect,
    card: &Card,
    style: &CardStyle,
) -> Result<CardOutcome, RenderError> {
    renderer.set_stroke(Color::BLACK, BORDER_WIDTH)?;
    renderer.stroke_rounded_rect(slot, style.corner_radius)?;

    let inner = slot.inset(style.padding);
    let mut cursor_y = inner.top();

    let title_font = style.title_font(&card.title);
    let title_leading = style.title_size * TITLE_LEADING;
    for segment in card.title.split(TITLE_SEGMENT_SEPARATOR).map(str::trim) {
        for line in wrap_text(segment, title_font, style.title_size, inner.width) {
            cursor_y -= title_leading;
            renderer.draw_text(title_font, style.title_size, Point::new(inner.x, cursor_y), &line)?;
        }
    }

    cursor_y -= DIVIDER_GAP_ABOVE;
    renderer.set_stroke(Color::GREY, DIVIDER_WIDTH)?;
    renderer.stroke_line(
        Point::new(inner.x, cursor_y),
        Point::new(inner.right(), cursor_y),
    )?;
    cursor_y -= DIVIDER_GAP_BELOW;

    let body_size = style.body_size;
    let leading = body_size * BODY_LEADING;
    let floor = inner.y + body_size;

    for (section, text) in card.present_sections() {
        cursor_y -= leading;
        let label = format!("{}:", section.label());
        renderer.draw_text(style.fonts.bold, body_size, Point::new(inner.x, cursor_y), &label)?;

        for line in wrap_text(text, style.fonts.body, body_size, inner.width) {
            cursor_y -= leading;
            if cursor_y < floor {
                renderer.draw_text(style.fonts.body, body_size, Point::new(inner.x, floor), ELLIPSIS)?;
                log::debug!("Card '{}' truncated in {:?}", card.card_id, section);
                return Ok(CardOutcome::Truncated);
            }
            // Blank lines keep their vertical space but draw nothing.
            if line.is_empty() {
                continue;
            }
            renderer.draw_text(style.fonts.body, body_size, Point::new(inner.x, cursor_y), &line)?;
        }
    }

    Ok(CardOutcome::Complete)
}
