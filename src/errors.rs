use thiserror::Error;

/// Ways a stats fetch can fail.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Network failure or a non-2xx HTTP status.
    #[error("Failed to fetch data: {message}")]
    Transport { status: Option<u16>, message: String },

    /// The body was not JSON, or not the expected envelope shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The upstream answered with `success: false`.
    #[error("API returned success: false")]
    ApiLogic,
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::Transport { .. } => "transport",
            FetchError::Decode(_) => "decode",
            FetchError::ApiLogic => "api_logic",
        }
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        FetchError::Transport {
            status: err.status().map(|status| status.as_u16()),
            message: err.to_string(),
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("STATS_API_URL is not a valid http(s) URL: {0}")]
    InvalidApiUrl(String),

    #[error("STATS_REFRESH_SECS must be a whole number of seconds, got {0:?}")]
    InvalidRefreshInterval(String),
}
