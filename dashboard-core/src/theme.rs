//! Background theme selection.
//!
//! Precipitation and cloud cues win over temperature: "light rain" at 30°C
//! is a rain theme, not a hot one. The rule table is evaluated top to
//! bottom and the first matching rule decides.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::model::WeatherSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    /// Shown before any snapshot has been fetched.
    Default,
    Rain,
    Snow,
    Cloud,
    Hot,
    Warm,
    Cold,
}

impl ThemeId {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Default => "default",
            ThemeId::Rain => "rain",
            ThemeId::Snow => "snow",
            ThemeId::Cloud => "cloud",
            ThemeId::Hot => "hot",
            ThemeId::Warm => "warm",
            ThemeId::Cold => "cold",
        }
    }

    /// Gradient colour stops, start to end.
    pub fn gradient(&self) -> [&'static str; 3] {
        match self {
            ThemeId::Default => ["blue", "purple", "pink"],
            ThemeId::Rain => ["slate", "blue", "indigo"],
            ThemeId::Snow => ["white", "sky", "slate"],
            ThemeId::Cloud => ["gray", "slate", "blue"],
            ThemeId::Hot => ["yellow", "orange", "red"],
            ThemeId::Warm => ["amber", "orange", "rose"],
            ThemeId::Cold => ["cyan", "blue", "indigo"],
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
enum Predicate {
    /// Lower-cased condition text contains the keyword.
    Mentions(&'static str),
    /// Temperature in Celsius strictly above the threshold.
    WarmerThan(f64),
    Always,
}

impl Predicate {
    fn matches(&self, condition: &str, temp_c: f64) -> bool {
        match *self {
            Predicate::Mentions(keyword) => condition.contains(keyword),
            Predicate::WarmerThan(threshold) => temp_c > threshold,
            Predicate::Always => true,
        }
    }
}

const RULES: &[(Predicate, ThemeId)] = &[
    (Predicate::Mentions("rain"), ThemeId::Rain),
    (Predicate::Mentions("snow"), ThemeId::Snow),
    (Predicate::Mentions("cloud"), ThemeId::Cloud),
    (Predicate::WarmerThan(25.0), ThemeId::Hot),
    (Predicate::WarmerThan(15.0), ThemeId::Warm),
    (Predicate::Always, ThemeId::Cold),
];

/// Theme for a known condition and temperature.
pub fn select_theme(condition_text: &str, temp_c: f64) -> ThemeId {
    let condition = condition_text.to_lowercase();

    RULES
        .iter()
        .find(|(predicate, _)| predicate.matches(&condition, temp_c))
        .map(|(_, theme)| *theme)
        .unwrap_or(ThemeId::Cold)
}

/// Theme for whatever is currently displayed, [`ThemeId::Default`] if nothing is.
pub fn theme_for(snapshot: Option<&WeatherSnapshot>) -> ThemeId {
    match snapshot {
        None => ThemeId::Default,
        Some(snap) => select_theme(&snap.current.condition.text, snap.current.temp_c),
    }
}
