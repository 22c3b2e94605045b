use crate::display::canvas::IconCanvas;
use crate::display::graphics::EmbeddedGraphicsCanvas;
use crate::display::renderer::{RenderContext, Renderer};
use crate::layout::rotated_band;
use crate::models::{DayPhase, SolarTimes};
use embedded_graphics::{
    geometry::Point,
    primitives::{Primitive, PrimitiveStyle, Rectangle},
    Drawable,
};
use log::trace;

/// Compressed day/night band, one column per time unit
pub struct BandRenderer {
    ctx: RenderContext,
    phases: Vec<DayPhase>,
}

impl BandRenderer {
    pub fn new(
        ctx: RenderContext,
        times: &SolarTimes,
        now_minute: u32,
        compression_factor: u32,
    ) -> Self {
        let phases = rotated_band(now_minute, times, compression_factor);
        Self { ctx, phases }
    }

    /// Render an arbitrary sequence of phase columns, e.g. a grouped
    /// day/night ratio strip from [`crate::layout::grouped_band`].
    pub fn with_phases(ctx: RenderContext, phases: Vec<DayPhase>) -> Self {
        Self { ctx, phases }
    }
}

impl Renderer for BandRenderer {
    fn render(&self, canvas: &mut dyn IconCanvas) {
        let mut eg_canvas = EmbeddedGraphicsCanvas::new(canvas);
        let b = self.ctx.border_width;

        for (i, phase) in self.phases.iter().enumerate() {
            let i = i as i32;
            let top_left = Point::new(i + b, b);
            let bottom_right = Point::new(i + 1 + b, self.ctx.height + b);
            let color = self.ctx.color(self.ctx.palette.phase_color(*phase));

            let _ = Rectangle::with_corners(top_left, bottom_right)
                .into_styled(PrimitiveStyle::with_fill(color))
                .draw(&mut eg_canvas);
            trace!(
                "band column {} corners ({}, {}) ({}, {}) {:?}",
                i,
                top_left.x,
                top_left.y,
                bottom_right.x,
                bottom_right.y,
                phase
            );
        }
    }
}
