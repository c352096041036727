/// A point in PDF user space (origin bottom-left, y grows upward).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

/// An axis-aligned box whose `(x, y)` is the bottom-left corner.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn top(&self) -> f32 {
        self.y + self.height
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Shrinks the box by `pad` on every side.
    pub fn inset(&self, pad: f32) -> Rect {
        Rect {
            x: self.x + pad,
            y: self.y + pad,
            width: self.width - 2.0 * pad,
            height: self.height - 2.0 * pad,
        }
    }
}

/// An RGB colour with 8-bit channels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::gray(0);
    pub const GREY: Color = Color::gray(128);
    pub const LIGHT_GREY: Color = Color::gray(211);

    pub const fn gray(value: u8) -> Self {
        Self { r: value, g: value, b: value }
    }

    /// Channels scaled to the 0.0..=1.0 range PDF colour operators expect.
    pub fn to_unit(self) -> [f32; 3] {
        [
            self.r as f32 / 255.0,
            self.g as f32 / 255.0,
            self.b as f32 / 255.0,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inset_shrinks_every_side() {
        let rect = Rect::new(10.0, 20.0, 100.0, 50.0).inset(5.0);
        assert_eq!(rect, Rect::new(15.0, 25.0, 90.0, 40.0));
        assert_eq!(rect.top(), 65.0);
        assert_eq!(rect.right(), 105.0);
    }

    #[test]
    fn grey_maps_to_half_intensity() {
        let [r, g, b] = Color::GREY.to_unit();
        assert!((r - 0.502).abs() < 0.001);
        assert_eq!(r, g);
        assert_eq!(g, b);
    }
}
