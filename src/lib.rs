//! Renders a status bar "sun indicator" icon: a compressed day/night band
//! centered on the current time, a chevron marking "now", and an optional
//! countdown to the next sunrise or sunset with a minute indicator bar.
//!
//! Sunrise and sunset are supplied by the caller as minutes of the local day;
//! computing them from coordinates is an external concern, as is encoding the
//! resulting bitmap. All drawing goes through the [`IconCanvas`] trait
//! implemented by the embedding application.

pub mod config;
pub mod display;
pub mod layout;
pub mod models;
pub mod timeline;

pub use config::{init_config, WidgetConfig, WidgetSettings};
pub use display::canvas::IconCanvas;
pub use display::renderer::{render_icon, RenderContext, Renderer};
pub use models::{DayPhase, IndicatorMode, Palette, SolarTimes};
pub use timeline::{minute_of_day, Countdown, HoursMinutes, NextEvent};
