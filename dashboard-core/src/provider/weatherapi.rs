use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use tracing::debug;

use crate::{
    FetchError,
    model::{AirQuality, Condition, CurrentConditions, Location, WeatherSnapshot},
};

use super::WeatherProvider;

pub const DEFAULT_BASE_URL: &str = "https://api.weatherapi.com/v1";

/// WeatherAPI.com `current.json` client with air quality enabled.
#[derive(Debug, Clone)]
pub struct WeatherApiProvider {
    api_key: String,
    base_url: String,
    http: Client,
}

impl WeatherApiProvider {
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL)
    }

    /// Point the client at another host, e.g. a local mock server.
    pub fn with_base_url(api_key: String, base_url: &str) -> Self {
        Self {
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
            http: Client::new(),
        }
    }

    async fn fetch_current(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        let url = format!("{}/current.json", self.base_url);

        let res = self
            .http
            .get(&url)
            .query(&[("key", self.api_key.as_str()), ("q", query), ("aqi", "yes")])
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;

        if !status.is_success() {
            return Err(FetchError::Status { status, body: truncate_body(&body) });
        }

        let parsed: WaResponse = serde_json::from_str(&body)?;
        debug!(?parsed, "WeatherAPI current response");

        Ok(parsed.into())
    }
}

#[derive(Debug, Deserialize)]
struct WaLocation {
    name: String,
    region: String,
    country: String,
    localtime: String,
}

#[derive(Debug, Deserialize)]
struct WaCondition {
    text: String,
    icon: String,
}

#[derive(Debug, Deserialize)]
struct WaAirQuality {
    co: f64,
    no2: f64,
    o3: f64,
    so2: f64,
    pm2_5: f64,
    pm10: f64,
    #[serde(rename = "us-epa-index", default)]
    us_epa_index: Option<u8>,
}

#[derive(Debug, Deserialize)]
struct WaCurrent {
    temp_c: f64,
    temp_f: f64,
    condition: WaCondition,
    wind_kph: f64,
    wind_dir: String,
    pressure_mb: f64,
    humidity: u8,
    feelslike_c: f64,
    feelslike_f: f64,
    vis_km: f64,
    uv: f64,
    // Absent when the key's plan has no air-quality access.
    #[serde(default)]
    air_quality: Option<WaAirQuality>,
}

#[derive(Debug, Deserialize)]
struct WaResponse {
    location: WaLocation,
    current: WaCurrent,
}

impl From<WaResponse> for WeatherSnapshot {
    fn from(wa: WaResponse) -> Self {
        let current = wa.current;
        let air_quality = current
            .air_quality
            .map(|aq| AirQuality {
                co: aq.co,
                no2: aq.no2,
                o3: aq.o3,
                so2: aq.so2,
                pm2_5: aq.pm2_5,
                pm10: aq.pm10,
                us_epa_index: aq.us_epa_index,
            })
            .unwrap_or_default();

        WeatherSnapshot {
            location: Location {
                name: wa.location.name,
                region: wa.location.region,
                country: wa.location.country,
                localtime: wa.location.localtime,
            },
            current: CurrentConditions {
                temp_c: current.temp_c,
                temp_f: current.temp_f,
                condition: Condition { text: current.condition.text, icon: current.condition.icon },
                wind_kph: current.wind_kph,
                wind_dir: current.wind_dir,
                pressure_mb: current.pressure_mb,
                humidity: current.humidity,
                feelslike_c: current.feelslike_c,
                feelslike_f: current.feelslike_f,
                vis_km: current.vis_km,
                uv: current.uv,
                air_quality,
            },
        }
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiProvider {
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        self.fetch_current(query).await
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 200;
    match body.char_indices().nth(MAX) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}
