use serde::{Deserialize, Serialize};
use std::fmt;

/// Health category derived from PM2.5 concentration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AirQualityLevel {
    Good,
    Moderate,
    UnhealthySensitive,
    Unhealthy,
    VeryUnhealthy,
}

impl AirQualityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            AirQualityLevel::Good => "Good",
            AirQualityLevel::Moderate => "Moderate",
            AirQualityLevel::UnhealthySensitive => "Unhealthy for Sensitive Groups",
            AirQualityLevel::Unhealthy => "Unhealthy",
            AirQualityLevel::VeryUnhealthy => "Very Unhealthy",
        }
    }
}

impl fmt::Display for AirQualityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Upper bounds, inclusive, ascending.
const PM25_BRACKETS: &[(f64, AirQualityLevel)] = &[
    (12.0, AirQualityLevel::Good),
    (35.0, AirQualityLevel::Moderate),
    (55.0, AirQualityLevel::UnhealthySensitive),
    (150.0, AirQualityLevel::Unhealthy),
];

/// Values sitting on a boundary belong to the safer category. Inputs are
/// not validated: negatives land in `Good`, NaN in `VeryUnhealthy`.
pub fn classify_pm25(pm25: f64) -> AirQualityLevel {
    PM25_BRACKETS
        .iter()
        .find(|(upper, _)| pm25 <= *upper)
        .map(|(_, level)| *level)
        .unwrap_or(AirQualityLevel::VeryUnhealthy)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_belong_to_lower_category() {
        assert_eq!(classify_pm25(12.0), AirQualityLevel::Good);
        assert_eq!(classify_pm25(12.1), AirQualityLevel::Moderate);
        assert_eq!(classify_pm25(35.0), AirQualityLevel::Moderate);
        assert_eq!(classify_pm25(55.0), AirQualityLevel::UnhealthySensitive);
        assert_eq!(classify_pm25(150.0), AirQualityLevel::Unhealthy);
        assert_eq!(classify_pm25(150.1), AirQualityLevel::VeryUnhealthy);
    }

    #[test]
    fn negative_values_are_not_rejected() {
        assert_eq!(classify_pm25(-4.0), AirQualityLevel::Good);
    }

    #[test]
    fn nan_falls_through_to_worst() {
        assert_eq!(classify_pm25(f64::NAN), AirQualityLevel::VeryUnhealthy);
    }

    #[test]
    fn levels_order_by_severity() {
        assert!(AirQualityLevel::Good < AirQualityLevel::Moderate);
        assert!(AirQualityLevel::Unhealthy < AirQualityLevel::VeryUnhealthy);
        assert_eq!(AirQualityLevel::UnhealthySensitive.to_string(), "Unhealthy for Sensitive Groups");
    }
}
