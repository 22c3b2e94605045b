use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Policy controlling when the minute indicator next to the countdown label
/// is drawn.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub enum IndicatorMode {
    #[serde(rename = "no")]
    Never,
    #[serde(rename = "only_under_10h")]
    OnlyUnderTenHours,
    #[serde(rename = "always")]
    Always,
}

impl Default for IndicatorMode {
    fn default() -> Self {
        IndicatorMode::OnlyUnderTenHours
    }
}

impl FromStr for IndicatorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "no" => Ok(IndicatorMode::Never),
            "only_under_10h" => Ok(IndicatorMode::OnlyUnderTenHours),
            "always" => Ok(IndicatorMode::Always),
            _ => Err(format!(
                "Invalid minute indicator mode '{}'. Must be 'no', 'only_under_10h' or 'always'",
                s
            )),
        }
    }
}

impl IndicatorMode {
    /// Whether the indicator applies when this many whole hours remain.
    /// Sub-hour countdowns show minutes in the label instead, so the
    /// indicator is never eligible for zero hours.
    pub fn shows_for_hours(&self, hours: u32) -> bool {
        match self {
            IndicatorMode::Never => false,
            IndicatorMode::OnlyUnderTenHours => hours > 0 && hours < 10,
            IndicatorMode::Always => hours > 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_modes() {
        assert_eq!("no".parse::<IndicatorMode>(), Ok(IndicatorMode::Never));
        assert_eq!(
            "only_under_10h".parse::<IndicatorMode>(),
            Ok(IndicatorMode::OnlyUnderTenHours)
        );
        assert_eq!("always".parse::<IndicatorMode>(), Ok(IndicatorMode::Always));
        assert!("sometimes".parse::<IndicatorMode>().is_err());
    }

    #[test]
    fn hour_boundaries() {
        assert!(!IndicatorMode::OnlyUnderTenHours.shows_for_hours(0));
        assert!(IndicatorMode::OnlyUnderTenHours.shows_for_hours(1));
        assert!(IndicatorMode::OnlyUnderTenHours.shows_for_hours(9));
        assert!(!IndicatorMode::OnlyUnderTenHours.shows_for_hours(10));

        assert!(!IndicatorMode::Always.shows_for_hours(0));
        assert!(IndicatorMode::Always.shows_for_hours(10));

        assert!(!IndicatorMode::Never.shows_for_hours(5));
    }
}
