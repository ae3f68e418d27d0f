use crate::{
    Config, FetchError, WeatherSnapshot, provider::weatherapi::WeatherApiProvider,
};
use async_trait::async_trait;
use std::{fmt::Debug, sync::Arc};

pub mod weatherapi;

/// Source of current-conditions snapshots.
#[async_trait]
pub trait WeatherProvider: Send + Sync + Debug {
    /// Current conditions (with air quality) for a location query.
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError>;
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Box<T> {
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        (**self).current(query).await
    }
}

#[async_trait]
impl<T: WeatherProvider + ?Sized> WeatherProvider for Arc<T> {
    async fn current(&self, query: &str) -> Result<WeatherSnapshot, FetchError> {
        (**self).current(query).await
    }
}

/// Construct the provider described by config.
pub fn provider_from_config(config: &Config) -> Result<Box<dyn WeatherProvider>, FetchError> {
    let api_key = config.api_key().ok_or(FetchError::MissingApiKey)?;

    let provider = match config.base_url.as_deref() {
        Some(base_url) => WeatherApiProvider::with_base_url(api_key.to_owned(), base_url),
        None => WeatherApiProvider::new(api_key.to_owned()),
    };

    Ok(Box::new(provider))
}
