use super::{norm_mod, MINUTES_PER_DAY, MINUTES_PER_HOUR};
use crate::models::{DayPhase, SolarTimes};
use chrono::{DateTime, Duration, Local, Timelike};
use std::fmt;

/// Minute of the local day (0..1440) for the given time, after applying a
/// whole-hours offset.
pub fn minute_of_day(now: DateTime<Local>, hours_offset: i64) -> u32 {
    let shifted = now + Duration::hours(hours_offset);
    shifted.hour() * MINUTES_PER_HOUR + shifted.minute()
}

/// A duration split into whole hours and leftover minutes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HoursMinutes {
    pub hours: u32,
    pub minutes: u32,
}

impl HoursMinutes {
    pub fn from_minutes(total: u32) -> Self {
        Self {
            hours: total / MINUTES_PER_HOUR,
            minutes: total % MINUTES_PER_HOUR,
        }
    }
}

impl fmt::Display for HoursMinutes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}h{:02}m", self.hours, self.minutes)
    }
}

/// Which solar event comes next
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NextEvent {
    Sunrise,
    Sunset,
}

/// Time remaining until sunrise and sunset from a given minute of the day
#[derive(Clone, Copy, Debug)]
pub struct Countdown {
    pub to_sunrise: u32,
    pub to_sunset: u32,
}

impl Countdown {
    pub fn at(now_minute: u32, times: &SolarTimes) -> Self {
        let day = MINUTES_PER_DAY as i64;
        Self {
            to_sunrise: norm_mod(times.sunrise_minute as i64 - now_minute as i64, day) as u32,
            to_sunset: norm_mod(times.sunset_minute as i64 - now_minute as i64, day) as u32,
        }
    }

    /// The sooner of the two events and the time left until it. A tie goes
    /// to sunset.
    pub fn next_event(&self) -> (NextEvent, HoursMinutes) {
        if self.to_sunrise < self.to_sunset {
            (NextEvent::Sunrise, HoursMinutes::from_minutes(self.to_sunrise))
        } else {
            (NextEvent::Sunset, HoursMinutes::from_minutes(self.to_sunset))
        }
    }
}

/// The current phase and how far through it we are, as a whole percent
pub fn phase_progress(now_minute: u32, times: &SolarTimes) -> (DayPhase, u8) {
    let day = MINUTES_PER_DAY as i64;
    let sunrise = times.sunrise_minute as i64;
    let sunset = times.sunset_minute as i64;
    let now = now_minute as i64;

    if times.is_day(now_minute) {
        let total = norm_mod(sunset - sunrise, day);
        let done = norm_mod(now - sunrise, day);
        (DayPhase::Day, percent_of(done, total))
    } else {
        let total = norm_mod(sunrise - sunset, day);
        let done = norm_mod(now - sunset, day);
        (DayPhase::Night, percent_of(done, total))
    }
}

fn percent_of(done: i64, total: i64) -> u8 {
    if total == 0 {
        return 0;
    }
    (done as f64 / total as f64 * 100.0).round() as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn splits_and_formats_hours_minutes() {
        assert_eq!(
            HoursMinutes::from_minutes(65),
            HoursMinutes {
                hours: 1,
                minutes: 5
            }
        );
        assert_eq!(HoursMinutes::from_minutes(65).to_string(), "1h05m");
        assert_eq!(HoursMinutes::from_minutes(119).to_string(), "1h59m");
        assert_eq!(HoursMinutes::from_minutes(600).to_string(), "10h00m");
        assert_eq!(HoursMinutes::from_minutes(59).to_string(), "0h59m");
    }

    #[test]
    fn countdown_wraps_around_midnight() {
        let times = SolarTimes::new(360, 1080);
        let countdown = Countdown::at(1430, &times);
        assert_eq!(countdown.to_sunrise, 370);
        assert_eq!(countdown.to_sunset, 1090);
    }

    #[test]
    fn next_event_is_the_sooner_one() {
        let times = SolarTimes::new(360, 1080);

        let (event, left) = Countdown::at(0, &times).next_event();
        assert_eq!(event, NextEvent::Sunrise);
        assert_eq!(left, HoursMinutes::from_minutes(360));

        let (event, left) = Countdown::at(720, &times).next_event();
        assert_eq!(event, NextEvent::Sunset);
        assert_eq!(left, HoursMinutes::from_minutes(360));
    }

    #[test]
    fn equidistant_events_pick_sunset() {
        // degenerate polar-day input where both events share a minute
        let times = SolarTimes::new(600, 600);
        let (event, left) = Countdown::at(0, &times).next_event();
        assert_eq!(event, NextEvent::Sunset);
        assert_eq!(left, HoursMinutes::from_minutes(600));
    }

    #[test]
    fn progress_at_midpoints() {
        let times = SolarTimes::new(360, 1080);
        assert_eq!(phase_progress(720, &times), (DayPhase::Day, 50));
        assert_eq!(phase_progress(0, &times), (DayPhase::Night, 50));
        assert_eq!(phase_progress(360, &times), (DayPhase::Day, 0));
    }

    #[test]
    fn minute_of_day_applies_hour_offset() {
        let now = chrono::Local.with_ymd_and_hms(2024, 6, 1, 13, 30, 0).unwrap();
        assert_eq!(minute_of_day(now, 0), 810);
        assert_eq!(minute_of_day(now, 2), 930);
        // wraps into the previous day
        assert_eq!(minute_of_day(now, -14), 1410);
    }
}
