//! Pure coordinate math for the icon's visual elements. Everything here is
//! plain integer geometry so the edge cases can be tested without a canvas.

mod band;
mod chevron;
mod countdown;

pub use band::{band_units, grouped_band, rotated_band};
pub use chevron::chevron_points;
pub use countdown::{minute_indicator_rect, CountdownLayout};

/// Width of a countdown label glyph in pixels
pub const CHAR_W: i32 = 6;
/// Height of a countdown label glyph in pixels
pub const CHAR_H: i32 = 8;
