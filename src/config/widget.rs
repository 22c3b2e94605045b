//! Widget configuration structure and methods

use super::{EnvVars, WidgetSettings};
use crate::models::{IndicatorMode, Palette};
use crate::timeline::MINUTES_PER_DAY;

/// Configuration structure that stores all widget settings
#[derive(Clone, Debug)]
pub struct WidgetConfig {
    /// Inner icon height in pixels
    pub height: u32,
    /// Border thickness in pixels
    pub border_width: u32,
    /// Minutes of the day represented by one band column
    pub compression_factor: u32,
    /// Whole hours added to "now" before rendering
    pub hours_offset: i64,
    /// Whether to draw the countdown label and minute indicator
    pub draw_countdown: bool,
    /// When the minute indicator is shown
    pub indicator_mode: IndicatorMode,
    /// Element colors
    pub palette: Palette,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            height: 10,
            border_width: 1,
            compression_factor: 20,
            hours_offset: 0,
            draw_countdown: true,
            indicator_mode: IndicatorMode::default(),
            palette: Palette::default(),
        }
    }
}

impl WidgetConfig {
    /// Create a new configuration by combining settings file values and
    /// environment variables. Environment variables win, matching hosts
    /// that export the settings file into the environment.
    pub fn new(settings: WidgetSettings, env_vars: EnvVars) -> Self {
        let defaults = Self::default();

        Self {
            height: env_vars
                .height
                .or(settings.height)
                .unwrap_or(defaults.height),
            border_width: env_vars
                .border_width
                .or(settings.border_width)
                .unwrap_or(defaults.border_width),
            compression_factor: env_vars
                .compression_factor
                .or(settings.compression_factor)
                .unwrap_or(defaults.compression_factor),
            hours_offset: env_vars
                .hours_offset
                .or(settings.hours_offset)
                .unwrap_or(defaults.hours_offset),
            draw_countdown: env_vars
                .draw_countdown
                .or(settings.draw_countdown)
                .unwrap_or(defaults.draw_countdown),
            indicator_mode: env_vars
                .indicator_mode
                .or(settings.indicator_mode)
                .unwrap_or_default(),
            palette: defaults.palette,
        }
    }

    /// Number of band columns at the configured compression
    pub fn units(&self) -> u32 {
        MINUTES_PER_DAY / self.compression_factor
    }

    /// Total surface width in pixels, +1 so the border outline is not cut off
    pub fn image_width(&self) -> u32 {
        self.units() + 2 * self.border_width + 1
    }

    /// Total surface height in pixels
    pub fn image_height(&self) -> u32 {
        self.height + 2 * self.border_width + 1
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), Vec<String>> {
        let mut errors = Vec::new();

        if self.compression_factor < 2 || self.compression_factor > 60 {
            errors.push("Width compression factor must be between 2 and 60".to_string());
        }

        if self.hours_offset.abs() >= 24 {
            errors.push("Hours offset must be between -23 and 23".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_overrides_settings_file() {
        let settings = WidgetSettings {
            height: Some(8),
            border_width: Some(2),
            ..Default::default()
        };
        let env = EnvVars {
            height: Some(12),
            ..Default::default()
        };

        let config = WidgetConfig::new(settings, env);
        assert_eq!(config.height, 12);
        assert_eq!(config.border_width, 2);
        assert_eq!(config.compression_factor, 20);
        assert_eq!(config.indicator_mode, IndicatorMode::OnlyUnderTenHours);
    }

    #[test]
    fn derived_dimensions_match_compression() {
        let config = WidgetConfig::default();
        assert_eq!(config.units(), 72);
        assert_eq!(config.image_width(), 75);
        assert_eq!(config.image_height(), 13);
    }

    #[test]
    fn rejects_out_of_range_compression() {
        let mut config = WidgetConfig::default();
        config.compression_factor = 1;
        assert!(config.validate().is_err());
        config.compression_factor = 61;
        assert!(config.validate().is_err());
        config.compression_factor = 60;
        assert!(config.validate().is_ok());
        config.compression_factor = 2;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_offsets_beyond_a_day() {
        let mut config = WidgetConfig::default();
        config.hours_offset = 24;
        assert!(config.validate().is_err());
        config.hours_offset = -23;
        assert!(config.validate().is_ok());
    }
}
