use thiserror::Error;

/// Everything that can go wrong between a submitted query and a snapshot.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The query was empty or whitespace; nothing was sent.
    #[error("Please enter a location name")]
    EmptyQuery,

    #[error("No API key configured. Hint: run `weatherdash configure` or set WEATHERAPI_KEY.")]
    MissingApiKey,

    #[error("Failed to reach the weather provider: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response, including "no matching location".
    #[error("Weather provider responded with status {status}: {body}")]
    Status { status: reqwest::StatusCode, body: String },

    #[error("Failed to parse weather provider JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

impl FetchError {
    /// Validation failures are rejected locally and never reach the network.
    pub fn is_validation(&self) -> bool {
        matches!(self, FetchError::EmptyQuery)
    }
}
