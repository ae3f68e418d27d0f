use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Format WeatherAPI uses for `location.localtime`, e.g. `2024-03-05 9:07`.
const LOCALTIME_FORMAT: &str = "%Y-%m-%d %H:%M";

/// One fetched reading for a single location.
///
/// Snapshots are never mutated after construction; the view-state store
/// swaps whole snapshots instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherSnapshot {
    pub location: Location,
    pub current: CurrentConditions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    pub region: String,
    pub country: String,
    /// Provider-local wall clock time, not necessarily UTC.
    pub localtime: String,
}

impl Location {
    /// "London, United Kingdom"
    pub fn display_name(&self) -> String {
        format!("{}, {}", self.name, self.country)
    }

    /// Parses `localtime` if it is in the provider's usual format.
    pub fn local_time(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.localtime.trim(), LOCALTIME_FORMAT).ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentConditions {
    pub temp_c: f64,
    pub temp_f: f64,
    pub condition: Condition,
    pub wind_kph: f64,
    /// Compass abbreviation, e.g. "WSW".
    pub wind_dir: String,
    pub pressure_mb: f64,
    pub humidity: u8,
    pub feelslike_c: f64,
    pub feelslike_f: f64,
    pub vis_km: f64,
    pub uv: f64,
    pub air_quality: AirQuality,
}

/// Condition label and icon reference, both opaque provider strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Condition {
    pub text: String,
    pub icon: String,
}

/// Pollutant concentrations as reported by the provider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AirQuality {
    pub co: f64,
    pub no2: f64,
    pub o3: f64,
    pub so2: f64,
    pub pm2_5: f64,
    pub pm10: f64,
    /// US EPA index (1-6), when the provider includes it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub us_epa_index: Option<u8>,
}

impl AirQuality {
    /// Pollutants in display order, paired with their labels.
    pub fn pollutants(&self) -> [(&'static str, f64); 6] {
        [
            ("PM2.5", self.pm2_5),
            ("PM10", self.pm10),
            ("O3", self.o3),
            ("NO2", self.no2),
            ("SO2", self.so2),
            ("CO", self.co),
        ]
    }
}
