use crate::display::canvas::IconCanvas;
use crate::display::graphics::EmbeddedGraphicsCanvas;
use crate::display::renderer::{RenderContext, Renderer};
use crate::layout::chevron_points;
use embedded_graphics::{
    primitives::{Primitive, PrimitiveStyle, Triangle},
    Drawable,
};

/// Downward triangle marking the current time at the band's center
pub struct ChevronRenderer {
    ctx: RenderContext,
}

impl ChevronRenderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }
}

impl Renderer for ChevronRenderer {
    fn render(&self, canvas: &mut dyn IconCanvas) {
        let mut eg_canvas = EmbeddedGraphicsCanvas::new(canvas);

        let [bottom_left, apex, bottom_right] = chevron_points(
            self.ctx.image_width(),
            self.ctx.image_height(),
            self.ctx.border_width,
        );
        let color = self.ctx.color(self.ctx.palette.chevron);

        let _ = Triangle::new(bottom_left, apex, bottom_right)
            .into_styled(PrimitiveStyle::with_fill(color))
            .draw(&mut eg_canvas);
    }
}
