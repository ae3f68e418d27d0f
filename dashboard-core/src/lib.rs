//! Core library for the `weatherdash` terminal dashboard.
//!
//! This crate defines:
//! - The weather snapshot model and the WeatherAPI.com provider
//! - Pure view mappings: units, theme, condition icon, air quality
//! - The view-state store and the fetch orchestrator driving it
//! - Configuration handling
//!
//! It is used by `dashboard-cli`, but nothing here touches the terminal.

pub mod air_quality;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod icon;
pub mod model;
pub mod notify;
pub mod provider;
pub mod state;
pub mod theme;
pub mod units;

pub use air_quality::{AirQualityLevel, classify_pm25};
pub use config::Config;
pub use dashboard::Dashboard;
pub use error::FetchError;
pub use icon::{IconCategory, select_icon};
pub use model::{AirQuality, Condition, CurrentConditions, Location, WeatherSnapshot};
pub use notify::{Notification, NotificationSink, Severity, TracingSink};
pub use provider::{WeatherProvider, provider_from_config};
pub use state::{CurrentView, DerivedView, ViewAction, ViewState};
pub use theme::{ThemeId, select_theme, theme_for};
pub use units::{DisplayTemperatures, DisplayUnit};
