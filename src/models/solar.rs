use crate::timeline::MINUTES_PER_DAY;
use serde::{Deserialize, Serialize};

/// One half of the day/night cycle.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DayPhase {
    Day,
    Night,
}

/// Sunrise and sunset as minutes of the local day (0..1440), supplied by the
/// embedding application. Computing these from coordinates is out of scope
/// for this crate.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct SolarTimes {
    pub sunrise_minute: u32,
    pub sunset_minute: u32,
}

impl SolarTimes {
    pub fn new(sunrise_minute: u32, sunset_minute: u32) -> Self {
        Self {
            sunrise_minute,
            sunset_minute,
        }
    }

    /// Whether the given minute of the day falls in daylight. Both the
    /// sunrise and the sunset minute themselves count as day.
    pub fn is_day(&self, minute: u32) -> bool {
        self.sunrise_minute <= minute && minute <= self.sunset_minute
    }

    /// Minutes of daylight over the whole day, counted minute by minute
    pub fn daylight_minutes(&self) -> u32 {
        (0..MINUTES_PER_DAY).filter(|&m| self.is_day(m)).count() as u32
    }

    /// Minutes of darkness over the whole day
    pub fn darkness_minutes(&self) -> u32 {
        MINUTES_PER_DAY - self.daylight_minutes()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn daylight_bounds_are_inclusive() {
        let times = SolarTimes::new(360, 1080);
        assert!(times.is_day(360));
        assert!(times.is_day(1080));
        assert!(!times.is_day(359));
        assert!(!times.is_day(1081));
    }

    #[test]
    fn daylight_and_darkness_cover_the_day() {
        let times = SolarTimes::new(360, 1080);
        assert_eq!(times.daylight_minutes(), 721);
        assert_eq!(times.daylight_minutes() + times.darkness_minutes(), 1440);
    }
}
