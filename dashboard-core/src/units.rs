use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::model::WeatherSnapshot;

/// Temperature unit the dashboard displays.
///
/// Session-scoped: it is independent of which snapshot is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayUnit {
    #[default]
    Celsius,
    Fahrenheit,
}

impl DisplayUnit {
    pub fn toggle(self) -> Self {
        match self {
            DisplayUnit::Celsius => DisplayUnit::Fahrenheit,
            DisplayUnit::Fahrenheit => DisplayUnit::Celsius,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "°C",
            DisplayUnit::Fahrenheit => "°F",
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DisplayUnit::Celsius => "celsius",
            DisplayUnit::Fahrenheit => "fahrenheit",
        }
    }
}

impl fmt::Display for DisplayUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DisplayUnit {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "c" | "celsius" => Ok(DisplayUnit::Celsius),
            "f" | "fahrenheit" => Ok(DisplayUnit::Fahrenheit),
            _ => Err(anyhow::anyhow!(
                "Unknown unit '{value}'. Supported units: celsius (c), fahrenheit (f)."
            )),
        }
    }
}

/// Temperatures of a snapshot rounded to whole degrees in one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayTemperatures {
    pub unit: DisplayUnit,
    pub temperature: i64,
    pub feels_like: i64,
}

impl DisplayTemperatures {
    /// Picks the provider's pre-converted fields; no arithmetic conversion
    /// happens here. Rounds half away from zero.
    pub fn of(snapshot: &WeatherSnapshot, unit: DisplayUnit) -> Self {
        let current = &snapshot.current;
        let (temperature, feels_like) = match unit {
            DisplayUnit::Celsius => (current.temp_c, current.feelslike_c),
            DisplayUnit::Fahrenheit => (current.temp_f, current.feelslike_f),
        };

        Self { unit, temperature: round_degrees(temperature), feels_like: round_degrees(feels_like) }
    }
}

fn round_degrees(value: f64) -> i64 {
    value.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::fixtures::snapshot;

    #[test]
    fn toggle_twice_is_identity() {
        for unit in [DisplayUnit::Celsius, DisplayUnit::Fahrenheit] {
            assert_eq!(unit.toggle().toggle(), unit);
            assert_ne!(unit.toggle(), unit);
        }
    }

    #[test]
    fn selects_precomputed_fields() {
        let mut snap = snapshot("London", "Sunny", 20.0, 5.0);
        // Deliberately inconsistent with 20°C so a local conversion would show up.
        snap.current.temp_f = 100.2;
        snap.current.feelslike_f = 99.6;

        let f = DisplayTemperatures::of(&snap, DisplayUnit::Fahrenheit);
        assert_eq!(f.temperature, 100);
        assert_eq!(f.feels_like, 100);

        let c = DisplayTemperatures::of(&snap, DisplayUnit::Celsius);
        assert_eq!(c.temperature, 20);
        assert_eq!(c.feels_like, 19);
    }

    #[test]
    fn rounds_half_away_from_zero() {
        let mut snap = snapshot("Oslo", "Snow", 0.0, 5.0);
        snap.current.temp_c = 2.5;
        snap.current.feelslike_c = -2.5;

        let c = DisplayTemperatures::of(&snap, DisplayUnit::Celsius);
        assert_eq!(c.temperature, 3);
        assert_eq!(c.feels_like, -3);
    }

    #[test]
    fn repeated_reads_are_stable() {
        let snap = snapshot("London", "Sunny", 17.4, 5.0);
        let first = DisplayTemperatures::of(&snap, DisplayUnit::Celsius);
        for _ in 0..3 {
            assert_eq!(DisplayTemperatures::of(&snap, DisplayUnit::Celsius), first);
        }
    }

    #[test]
    fn parse_accepts_short_and_long_names() {
        assert_eq!("C".parse::<DisplayUnit>().unwrap(), DisplayUnit::Celsius);
        assert_eq!("fahrenheit".parse::<DisplayUnit>().unwrap(), DisplayUnit::Fahrenheit);

        let err = "kelvin".parse::<DisplayUnit>().unwrap_err();
        assert!(err.to_string().contains("Unknown unit"));
    }
}
