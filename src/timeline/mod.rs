//! Minute arithmetic on the 24 hour wheel: countdowns to the next solar
//! event, phase progress and percent splitting.

mod countdown;
mod percent;

pub use countdown::{minute_of_day, phase_progress, Countdown, HoursMinutes, NextEvent};
pub use percent::split_percents;

pub const MINUTES_PER_HOUR: u32 = 60;
pub const MINUTES_PER_DAY: u32 = 24 * MINUTES_PER_HOUR;

/// Modulo that is non-negative for negative inputs
pub fn norm_mod(x: i64, modulus: i64) -> i64 {
    ((x % modulus) + modulus) % modulus
}
