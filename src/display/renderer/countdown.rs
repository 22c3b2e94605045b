use crate::display::canvas::IconCanvas;
use crate::display::graphics::EmbeddedGraphicsCanvas;
use crate::display::renderer::{RenderContext, Renderer};
use crate::layout::CountdownLayout;
use crate::models::IndicatorMode;
use crate::timeline::HoursMinutes;
use embedded_graphics::{
    mono_font::{ascii::FONT_6X9, MonoTextStyle},
    primitives::{Primitive, PrimitiveStyle},
    text::{Baseline, Text},
    Drawable,
};

/// Countdown label at the icon's right edge plus the minute indicator bar
pub struct CountdownRenderer {
    ctx: RenderContext,
    layout: CountdownLayout,
}

impl CountdownRenderer {
    pub fn new(ctx: RenderContext, left: HoursMinutes, mode: IndicatorMode) -> Self {
        let layout = CountdownLayout::new(left, ctx.width, ctx.height, mode);
        Self { ctx, layout }
    }
}

impl Renderer for CountdownRenderer {
    fn render(&self, canvas: &mut dyn IconCanvas) {
        let mut eg_canvas = EmbeddedGraphicsCanvas::new(canvas);
        let ink = self.ctx.color(self.ctx.palette.countdown);

        let text_style = MonoTextStyle::new(&FONT_6X9, ink);
        let _ = Text::with_baseline(
            &self.layout.label,
            self.layout.origin,
            text_style,
            Baseline::Top,
        )
        .draw(&mut eg_canvas);

        if let Some(bar) = self.layout.indicator {
            let _ = bar
                .into_styled(PrimitiveStyle::with_fill(ink))
                .draw(&mut eg_canvas);
        }
    }
}
