use super::{CHAR_H, CHAR_W};
use crate::models::IndicatorMode;
use crate::timeline::HoursMinutes;
use embedded_graphics::{geometry::Point, primitives::Rectangle};
use log::debug;

/// Placement of the countdown label and, when eligible, the minute indicator
/// bar next to it.
#[derive(Clone, Debug)]
pub struct CountdownLayout {
    /// Label text, "-3" when whole hours remain, "-45m" under an hour
    pub label: String,
    /// Top-left corner of the label
    pub origin: Point,
    /// Minute indicator bar, absent when ineligible or degenerate
    pub indicator: Option<Rectangle>,
}

impl CountdownLayout {
    /// Lay out the countdown for the given time remaining inside an icon of
    /// `width` x `height` pixels.
    pub fn new(left: HoursMinutes, width: i32, height: i32, mode: IndicatorMode) -> Self {
        let indicator_eligible = mode.shows_for_hours(left.hours);

        let label = if left.hours == 0 {
            format!("-{}m", left.minutes)
        } else {
            format!("-{}", left.hours)
        };

        let chars = label.chars().count() as i32;
        let mut x = width - chars * CHAR_W + 1;
        if indicator_eligible {
            // leave room for the indicator column at the right edge
            x -= 4;
        }
        let y = (height - CHAR_H).div_euclid(2);

        let indicator = if indicator_eligible {
            minute_indicator_rect(left.minutes, width, height)
        } else {
            None
        };

        Self {
            label,
            origin: Point::new(x, y),
            indicator,
        }
    }
}

/// Bar showing the minutes remainder rounded to tenths of an hour, one pixel
/// row per tenth, growing upward from the label baseline.
///
/// Small icon heights can push the candidate rows out of order or below
/// zero; such bars are skipped rather than drawn with invalid bounds. The
/// returned rectangle always has its bottom row strictly below its top row
/// and never starts above row 0.
pub fn minute_indicator_rect(minutes_rem: u32, width: i32, height: i32) -> Option<Rectangle> {
    let rounded_tenths = (minutes_rem / 10 + u32::from(minutes_rem % 10 >= 5)) as i32;

    // floor division keeps the baseline stable for heights below the glyph
    let anchor = (height - CHAR_H).div_euclid(2) + CHAR_H;
    let raised = anchor - rounded_tenths;

    let top = anchor.min(raised).max(0);
    let bottom = anchor.max(raised);

    if bottom <= top {
        debug!(
            "minute indicator degenerate (top {} bottom {}), skipping",
            top, bottom
        );
        return None;
    }

    let x = width - 2;
    Some(Rectangle::with_corners(
        Point::new(x, top),
        Point::new(x + 1, bottom),
    ))
}
