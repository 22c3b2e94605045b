//! Environment variable handling

use crate::models::IndicatorMode;
use log::warn;

/// Environment variables for the icon widget, using the xbar-style VAR_*
/// names the host exposes
#[derive(Debug, Default, Clone)]
pub struct EnvVars {
    pub height: Option<u32>,
    pub border_width: Option<u32>,
    pub compression_factor: Option<u32>,
    pub hours_offset: Option<i64>,
    pub draw_countdown: Option<bool>,
    pub indicator_mode: Option<IndicatorMode>,
}

/// Load configuration from environment variables
pub fn load_env_vars() -> EnvVars {
    let mut env = EnvVars::default();

    // Icon geometry
    if let Ok(value) = std::env::var("VAR_HEIGHT") {
        if let Ok(height) = value.parse() {
            env.height = Some(height);
        }
    }

    if let Ok(value) = std::env::var("VAR_BORDER_WIDTH") {
        if let Ok(width) = value.parse() {
            env.border_width = Some(width);
        }
    }

    if let Ok(value) = std::env::var("VAR_WIDTH_COMPRESSION_FACTOR") {
        if let Ok(factor) = value.parse() {
            env.compression_factor = Some(factor);
        }
    }

    // Time travel
    if let Ok(value) = std::env::var("VAR_HOURS_OFFSET") {
        if let Ok(offset) = value.parse() {
            env.hours_offset = Some(offset);
        }
    }

    // Countdown element
    if let Ok(value) = std::env::var("VAR_DRAW_TIME_UNTIL_NEXT_PHASE") {
        if let Ok(enabled) = value.parse::<bool>() {
            env.draw_countdown = Some(enabled);
        } else if let Ok(enabled) = value.parse::<u8>() {
            // Also support numeric values (0/1)
            env.draw_countdown = Some(enabled != 0);
        }
    }

    if let Ok(value) = std::env::var("VAR_MINUTE_INDICATOR_MODE") {
        match value.parse() {
            Ok(mode) => env.indicator_mode = Some(mode),
            Err(e) => warn!("{}", e),
        }
    }

    env
}
