use crate::models::{DayPhase, SolarTimes};
use crate::timeline::{norm_mod, MINUTES_PER_DAY};
use log::trace;

/// Number of band columns for a given width compression factor
pub fn band_units(compression_factor: u32) -> u32 {
    MINUTES_PER_DAY / compression_factor
}

fn classify(times: &SolarTimes, compression_factor: u32) -> Vec<DayPhase> {
    let units = band_units(compression_factor);
    let sunrise_unit = times.sunrise_minute / compression_factor;
    let sunset_unit = times.sunset_minute / compression_factor;

    (0..units)
        .map(|unit| {
            if sunrise_unit <= unit && unit <= sunset_unit {
                DayPhase::Day
            } else {
                DayPhase::Night
            }
        })
        .collect()
}

/// Classify each band column as day or night and rotate the band so the
/// current minute sits at the horizontal center.
pub fn rotated_band(now_minute: u32, times: &SolarTimes, compression_factor: u32) -> Vec<DayPhase> {
    let mut phases = classify(times, compression_factor);
    let units = phases.len();

    // Ceiling, not floor: one minute past the exact half-day boundary must
    // already shift the band by one column, even though a column covers
    // `compression_factor` minutes.
    let half_day = (MINUTES_PER_DAY / 2) as i64;
    let centered = norm_mod(now_minute as i64 - half_day, MINUTES_PER_DAY as i64) as u32;
    let rotate_by = centered.div_ceil(compression_factor) as usize % units;

    trace!("band rotated by {} of {} units", rotate_by, units);
    phases.rotate_left(rotate_by);
    phases
}

/// Band with all day columns grouped to the left, used for the absolute
/// day/night ratio strip.
pub fn grouped_band(times: &SolarTimes, compression_factor: u32) -> Vec<DayPhase> {
    let mut phases = classify(times, compression_factor);
    phases.sort_by_key(|phase| match phase {
        DayPhase::Day => 0,
        DayPhase::Night => 1,
    });
    phases
}

#[cfg(test)]
mod tests {
    use super::*;

    fn times() -> SolarTimes {
        // 06:00 sunrise, 18:00 sunset
        SolarTimes::new(360, 1080)
    }

    #[test]
    fn noon_band_is_unrotated_with_day_in_the_middle() {
        let band = rotated_band(720, &times(), 20);
        assert_eq!(band.len(), 72);
        for (i, phase) in band.iter().enumerate() {
            let expected = if (18..=54).contains(&i) {
                DayPhase::Day
            } else {
                DayPhase::Night
            };
            assert_eq!(*phase, expected, "unit {}", i);
        }
    }

    #[test]
    fn midnight_centers_the_night() {
        let band = rotated_band(0, &times(), 20);
        assert_eq!(band[36], DayPhase::Night);
        assert_eq!(band[0], DayPhase::Day);
    }

    #[test]
    fn rotation_uses_ceiling_division() {
        // exactly half a day from the center: no rotation yet, but one
        // minute later the band must already have shifted one column
        let at_boundary = rotated_band(720, &times(), 20);
        let past_boundary = rotated_band(721, &times(), 20);
        assert_ne!(at_boundary, past_boundary);
        assert_eq!(past_boundary[0], at_boundary[1]);
        assert_eq!(past_boundary[71], at_boundary[0]);
    }

    #[test]
    fn grouped_band_puts_day_first() {
        let band = grouped_band(&times(), 20);
        let day_units = band.iter().filter(|p| **p == DayPhase::Day).count();
        assert_eq!(day_units, 37);
        assert!(band[..day_units].iter().all(|p| *p == DayPhase::Day));
        assert!(band[day_units..].iter().all(|p| *p == DayPhase::Night));
    }
}
