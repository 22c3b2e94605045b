//! Configuration module that handles all widget settings

mod env;
mod settings;
mod widget;

pub use env::{load_env_vars, EnvVars};
pub use settings::WidgetSettings;
pub use widget::WidgetConfig;

use std::path::Path;

/// Initialize configuration from all sources (settings file, environment)
pub fn init_config(settings_path: Option<&Path>) -> WidgetConfig {
    let settings = match settings_path {
        Some(path) => WidgetSettings::load(path),
        None => WidgetSettings::default(),
    };

    let env_vars = load_env_vars();

    WidgetConfig::new(settings, env_vars)
}
