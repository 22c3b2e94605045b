mod mode;
mod palette;
mod solar;

pub use mode::IndicatorMode;
pub use palette::Palette;
pub use solar::{DayPhase, SolarTimes};
