//! Slot geometry for a rows × cols card grid and deck pagination.

use super::LayoutError;
use super::geom::{Point, Rect, Size};

/// Card slot dimensions derived from the page, margin, gutter and grid.
///
/// Slots tile the margin-to-margin area exactly, with gutters only between
/// neighbouring slots.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridGeometry {
    pub page: Size,
    pub margin: f32,
    pub gutter: f32,
    pub rows: usize,
    pub cols: usize,
    pub card_width: f32,
    pub card_height: f32,
}

impl GridGeometry {
    pub fn new(
        page: Size,
        margin: f32,
        gutter: f32,
        rows: usize,
        cols: usize,
    ) -> Result<Self, LayoutError> {
        if rows == 0 || cols == 0 {
            return Err(LayoutError::InvalidGrid(format!(
                "grid must have at least one row and column, got {}x{}",
                rows, cols
            )));
        }
        let usable_w = page.width - 2.0 * margin;
        let usable_h = page.height - 2.0 * margin;
        let card_width = (usable_w - (cols - 1) as f32 * gutter) / cols as f32;
        let card_height = (usable_h - (rows - 1) as f32 * gutter) / rows as f32;
        if !(card_width > 0.0 && card_height > 0.0) {
            return Err(LayoutError::InvalidGrid(format!(
                "{}x{} cards leave no room on a {}x{}pt page (margin {}pt, gutter {}pt)",
                rows, cols, page.width, page.height, margin, gutter
            )));
        }
        Ok(Self {
            page,
            margin,
            gutter,
            rows,
            cols,
            card_width,
            card_height,
        })
    }

    pub fn per_page(&self) -> usize {
        self.rows * self.cols
    }

    /// The box of the `index`-th card on a page, filled row-major from the top-left.
    pub fn slot(&self, index: usize) -> Rect {
        let row = index / self.cols;
        let col = index % self.cols;
        let x = self.margin + col as f32 * (self.card_width + self.gutter);
        let y = self.page.height
            - self.margin
            - self.card_height
            - row as f32 * (self.card_height + self.gutter);
        Rect::new(x, y, self.card_width, self.card_height)
    }

    /// Cut lines centred in every interior gutter, spanning margin to margin.
    pub fn cut_guides(&self) -> Vec<(Point, Point)> {
        let top = self.page.height - self.margin;
        let right = self.page.width - self.margin;
        let half_gutter = self.gutter / 2.0;

        let vertical = (1..self.cols).map(|c| {
            let x = self.margin + c as f32 * (self.card_width + self.gutter) - half_gutter;
            (Point::new(x, self.margin), Point::new(x, top))
        });
        let horizontal = (1..self.rows).map(|r| {
            let y = self.margin + r as f32 * (self.card_height + self.gutter) - half_gutter;
            (Point::new(self.margin, y), Point::new(right, y))
        });
        vertical.chain(horizontal).collect()
    }
}

/// Splits `deck` into consecutive pages of `rows * cols` items; the last may be short.
pub fn paginate<T>(deck: &[T], rows: usize, cols: usize) -> Vec<&[T]> {
    let per_page = (rows * cols).max(1);
    deck.chunks(per_page).collect()
}
