//! Run configuration for a card sheet.

use crate::layout::fonts::StandardFont;
use crate::layout::geom::Size;
use std::fmt;
use std::str::FromStr;

/// Points per inch; margins and gutters are configured in inches.
pub const POINTS_PER_INCH: f32 = 72.0;

/// Physical page sizes the sheet can be printed on.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PageSize {
    #[default]
    Letter,
    A4,
    Legal,
}

impl PageSize {
    /// Page dimensions in points.
    pub fn dimensions_pt(&self) -> Size {
        match self {
            PageSize::Letter => Size::new(612.0, 792.0),
            PageSize::A4 => Size::new(595.28, 841.89),
            PageSize::Legal => Size::new(612.0, 1008.0),
        }
    }
}

impl FromStr for PageSize {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "letter" => Ok(PageSize::Letter),
            "a4" => Ok(PageSize::A4),
            "legal" => Ok(PageSize::Legal),
            _ => Err(format!("Unknown page size: {}", s)),
        }
    }
}

impl fmt::Display for PageSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageSize::Letter => f.write_str("letter"),
            PageSize::A4 => f.write_str("a4"),
            PageSize::Legal => f.write_str("legal"),
        }
    }
}

/// The three faces a card is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSet {
    /// Titles without an outcome separator.
    pub title: StandardFont,
    /// Section body text.
    pub body: StandardFont,
    /// Section labels, and titles containing a hyphen or em-dash.
    pub bold: StandardFont,
}

impl Default for FontSet {
    fn default() -> Self {
        Self {
            title: StandardFont::Helvetica,
            body: StandardFont::Helvetica,
            bold: StandardFont::HelveticaBold,
        }
    }
}

/// Everything a run needs besides the input text.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    pub page_size: PageSize,
    pub rows: usize,
    pub cols: usize,
    /// How many times the whole card list repeats before pagination.
    pub copies: usize,
    /// Page margin in inches.
    pub margin_in: f32,
    /// Space between adjacent cards in inches.
    pub gutter_in: f32,
    /// Card border corner radius in points.
    pub corner_radius: f32,
    /// Inset between a card border and its text, in points.
    pub padding: f32,
    pub title_size: f32,
    pub body_size: f32,
    pub fonts: FontSet,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            page_size: PageSize::Letter,
            rows: 3,
            cols: 3,
            copies: 1,
            margin_in: 0.25,
            gutter_in: 0.10,
            corner_radius: 10.0,
            padding: 10.0,
            title_size: 12.0,
            body_size: 9.0,
            fonts: FontSet::default(),
        }
    }
}

impl SheetConfig {
    pub fn margin_pt(&self) -> f32 {
        self.margin_in * POINTS_PER_INCH
    }

    pub fn gutter_pt(&self) -> f32 {
        self.gutter_in * POINTS_PER_INCH
    }

    /// The replication count actually applied; never less than one.
    pub fn effective_copies(&self) -> usize {
        self.copies.max(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_command_line() {
        let config = SheetConfig::default();
        assert_eq!((config.rows, config.cols), (3, 3));
        assert_eq!(config.margin_pt(), 18.0);
        assert!((config.gutter_pt() - 7.2).abs() < 1e-4);
        assert_eq!(config.page_size.dimensions_pt(), Size::new(612.0, 792.0));
    }

    #[test]
    fn zero_copies_means_one() {
        let config = SheetConfig { copies: 0, ..Default::default() };
        assert_eq!(config.effective_copies(), 1);
    }

    #[test]
    fn page_size_names_are_case_insensitive() {
        assert_eq!("A4".parse::<PageSize>(), Ok(PageSize::A4));
        assert_eq!("Legal".parse::<PageSize>(), Ok(PageSize::Legal));
        assert!("tabloid".parse::<PageSize>().is_err());
    }
}
