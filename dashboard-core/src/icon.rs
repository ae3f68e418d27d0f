use serde::{Deserialize, Serialize};
use std::fmt;

/// Coarse icon family for a condition label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IconCategory {
    Rain,
    Snow,
    Cloud,
    Clear,
}

impl IconCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            IconCategory::Rain => "rain",
            IconCategory::Snow => "snow",
            IconCategory::Cloud => "cloud",
            IconCategory::Clear => "clear",
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            IconCategory::Rain => "🌧",
            IconCategory::Snow => "❄",
            IconCategory::Cloud => "☁",
            IconCategory::Clear => "☀",
        }
    }
}

impl fmt::Display for IconCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First keyword found wins; order matters.
const RULES: &[(&[&str], IconCategory)] = &[
    (&["rain", "drizzle"], IconCategory::Rain),
    (&["snow"], IconCategory::Snow),
    (&["cloud"], IconCategory::Cloud),
];

/// Empty or unrecognised text falls back to [`IconCategory::Clear`].
pub fn select_icon(condition_text: &str) -> IconCategory {
    let condition = condition_text.to_lowercase();

    RULES
        .iter()
        .find(|(keywords, _)| keywords.iter().any(|k| condition.contains(*k)))
        .map(|(_, icon)| *icon)
        .unwrap_or(IconCategory::Clear)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_and_sunny_are_clear() {
        assert_eq!(select_icon(""), IconCategory::Clear);
        assert_eq!(select_icon("Sunny"), IconCategory::Clear);
        assert_eq!(select_icon("Fog"), IconCategory::Clear);
    }

    #[test]
    fn drizzle_counts_as_rain() {
        assert_eq!(select_icon("Patchy light drizzle"), IconCategory::Rain);
        assert_eq!(select_icon("Moderate rain"), IconCategory::Rain);
    }

    #[test]
    fn rain_checked_before_snow_and_cloud() {
        assert_eq!(select_icon("Light rain and snow"), IconCategory::Rain);
        assert_eq!(select_icon("Blowing snow, cloudy"), IconCategory::Snow);
        assert_eq!(select_icon("OVERCAST, CLOUDY"), IconCategory::Cloud);
    }
}
