mod band;
mod border;
mod chevron;
mod context;
mod countdown;

pub use band::BandRenderer;
pub use border::BorderRenderer;
pub use chevron::ChevronRenderer;
pub use context::RenderContext;
pub use countdown::CountdownRenderer;

use crate::config::WidgetConfig;
use crate::display::canvas::IconCanvas;
use crate::models::SolarTimes;
use crate::timeline::Countdown;

/// One visual element of the icon. Renderers hold no state between calls;
/// everything is recomputed from the context each render.
pub trait Renderer {
    fn render(&self, canvas: &mut dyn IconCanvas);
}

/// Render a complete icon for the given minute of the day.
///
/// Elements draw back to front: background, border, day/night band, chevron,
/// then the countdown label and minute indicator when enabled.
pub fn render_icon(
    config: &WidgetConfig,
    times: &SolarTimes,
    now_minute: u32,
    canvas: &mut dyn IconCanvas,
) {
    let ctx = RenderContext::new(
        config.units() as i32,
        config.height as i32,
        config.border_width as i32,
        config.palette.clone(),
    );

    let [r, g, b] = ctx.palette.background;
    canvas.fill(r, g, b);

    BorderRenderer::new(ctx.clone()).render(canvas);
    BandRenderer::new(ctx.clone(), times, now_minute, config.compression_factor).render(canvas);
    ChevronRenderer::new(ctx.clone()).render(canvas);

    if config.draw_countdown {
        let (_, left) = Countdown::at(now_minute, times).next_event();
        CountdownRenderer::new(ctx, left, config.indicator_mode).render(canvas);
    }
}
