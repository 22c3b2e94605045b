use super::DayPhase;
use serde::{Deserialize, Serialize};

fn default_ink_color() -> [u8; 3] {
    [0, 0, 0]
}

fn default_day_color() -> [u8; 3] {
    [255, 255, 0]
}

fn default_night_color() -> [u8; 3] {
    [40, 180, 255]
}

fn default_background_color() -> [u8; 3] {
    [255, 255, 255]
}

/// Colors for every element of the icon
#[derive(Clone, Serialize, Deserialize, Debug)]
pub struct Palette {
    #[serde(default = "default_ink_color")]
    pub border: [u8; 3],
    #[serde(default = "default_ink_color")]
    pub chevron: [u8; 3],
    #[serde(default = "default_ink_color")]
    pub countdown: [u8; 3],
    #[serde(default = "default_day_color")]
    pub day: [u8; 3],
    #[serde(default = "default_night_color")]
    pub night: [u8; 3],
    #[serde(default = "default_background_color")]
    pub background: [u8; 3],
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            border: default_ink_color(),
            chevron: default_ink_color(),
            countdown: default_ink_color(),
            day: default_day_color(),
            night: default_night_color(),
            background: default_background_color(),
        }
    }
}

impl Palette {
    /// Band color for a day or night column
    pub fn phase_color(&self, phase: DayPhase) -> [u8; 3] {
        match phase {
            DayPhase::Day => self.day,
            DayPhase::Night => self.night,
        }
    }
}
