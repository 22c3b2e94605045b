use crate::models::Palette;
use embedded_graphics::pixelcolor::Rgb888;

/// Shared geometry and colors for all element renderers
#[derive(Clone)]
pub struct RenderContext {
    /// Band width in pixels, one pixel per compressed time unit
    pub width: i32,

    /// Inner icon height in pixels
    pub height: i32,

    /// Border thickness in pixels, 0 disables the border
    pub border_width: i32,

    /// Colors for every element
    pub palette: Palette,
}

impl RenderContext {
    pub fn new(width: i32, height: i32, border_width: i32, palette: Palette) -> Self {
        Self {
            width,
            height,
            border_width,
            palette,
        }
    }

    /// Total surface width including the border and the one pixel of slack
    /// the border outline needs
    pub fn image_width(&self) -> i32 {
        self.width + 2 * self.border_width + 1
    }

    /// Total surface height including the border
    pub fn image_height(&self) -> i32 {
        self.height + 2 * self.border_width + 1
    }

    pub fn color(&self, rgb: [u8; 3]) -> Rgb888 {
        Rgb888::new(rgb[0], rgb[1], rgb[2])
    }
}
