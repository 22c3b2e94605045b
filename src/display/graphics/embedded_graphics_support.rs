use crate::display::canvas::IconCanvas;
use embedded_graphics::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Size},
    pixelcolor::{Rgb888, RgbColor},
    Pixel,
};

/// Adapts an [`IconCanvas`] to an `embedded-graphics` draw target so the
/// renderers can use Rectangle, Triangle and Text primitives.
pub struct EmbeddedGraphicsCanvas<'a> {
    canvas: &'a mut dyn IconCanvas,
}

impl<'a> EmbeddedGraphicsCanvas<'a> {
    pub fn new(canvas: &'a mut dyn IconCanvas) -> Self {
        Self { canvas }
    }
}

impl DrawTarget for EmbeddedGraphicsCanvas<'_> {
    type Color = Rgb888;
    type Error = core::convert::Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        let (width, height) = self.canvas.size();
        for Pixel(point, color) in pixels.into_iter() {
            // Clip instead of erroring; small icon heights routinely put
            // glyph and chevron pixels outside the surface.
            if point.x < 0 || point.y < 0 {
                continue;
            }
            let (x, y) = (point.x as usize, point.y as usize);
            if x >= width || y >= height {
                continue;
            }
            self.canvas.set_pixel(x, y, color.r(), color.g(), color.b());
        }
        Ok(())
    }

    fn clear(&mut self, color: Self::Color) -> Result<(), Self::Error> {
        self.canvas.fill(color.r(), color.g(), color.b());
        Ok(())
    }
}

impl OriginDimensions for EmbeddedGraphicsCanvas<'_> {
    fn size(&self) -> Size {
        let (width, height) = self.canvas.size();
        Size::new(width as u32, height as u32)
    }
}
