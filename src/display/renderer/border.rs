use crate::display::canvas::IconCanvas;
use crate::display::graphics::EmbeddedGraphicsCanvas;
use crate::display::renderer::{RenderContext, Renderer};
use embedded_graphics::{
    geometry::Point,
    primitives::{Primitive, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
    Drawable,
};

/// Outline around the whole icon
pub struct BorderRenderer {
    ctx: RenderContext,
}

impl BorderRenderer {
    pub fn new(ctx: RenderContext) -> Self {
        Self { ctx }
    }
}

impl Renderer for BorderRenderer {
    fn render(&self, canvas: &mut dyn IconCanvas) {
        if self.ctx.border_width <= 0 {
            return;
        }
        let mut eg_canvas = EmbeddedGraphicsCanvas::new(canvas);

        let corner = Point::new(
            self.ctx.width + self.ctx.border_width * 2,
            self.ctx.height + self.ctx.border_width * 2,
        );
        // stroke grows inward so the outline never exceeds the surface
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(self.ctx.color(self.ctx.palette.border))
            .stroke_width(self.ctx.border_width as u32)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();

        let _ = Rectangle::with_corners(Point::zero(), corner)
            .into_styled(style)
            .draw(&mut eg_canvas);
    }
}
