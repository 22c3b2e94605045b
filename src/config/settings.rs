//! Optional settings file handling
//!
//! Status bar hosts persist widget variables in a JSON file next to the
//! plugin (`<plugin>.vars.json`). The file is read-only from this crate's
//! point of view; the host owns writing it.

use crate::models::IndicatorMode;
use log::warn;
use serde::Deserialize;
use std::path::Path;

/// Settings persisted by the host. All fields are optional; missing ones
/// fall back to environment variables and then to defaults.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct WidgetSettings {
    #[serde(rename = "VAR_HEIGHT")]
    pub height: Option<u32>,
    #[serde(rename = "VAR_BORDER_WIDTH")]
    pub border_width: Option<u32>,
    #[serde(rename = "VAR_WIDTH_COMPRESSION_FACTOR")]
    pub compression_factor: Option<u32>,
    #[serde(rename = "VAR_HOURS_OFFSET")]
    pub hours_offset: Option<i64>,
    #[serde(rename = "VAR_DRAW_TIME_UNTIL_NEXT_PHASE")]
    pub draw_countdown: Option<bool>,
    #[serde(rename = "VAR_MINUTE_INDICATOR_MODE")]
    pub indicator_mode: Option<IndicatorMode>,
}

impl WidgetSettings {
    /// Read settings from a JSON file. A missing file is normal (the host
    /// only creates it once the user changes a variable) and yields
    /// defaults; a malformed file is logged and also yields defaults.
    pub fn load(path: &Path) -> Self {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => return Self::default(),
        };

        match serde_json::from_str(&content) {
            Ok(settings) => settings,
            Err(e) => {
                warn!("Failed to parse settings file {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}
