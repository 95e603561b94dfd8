//! Error handling module
//!
//! Defines the error taxonomy for OpenRouter API calls

use thiserror::Error;

/// API call error types
///
/// Every failure of the completion layer is surfaced as one of these
/// variants together with a human-readable message. A call never returns
/// content alongside an error.
#[derive(Error, Debug)]
pub enum ApiError {
    /// Rate limited by the upstream API (HTTP 429), retries exhausted
    #[error("Rate limited. Please try again later.")]
    RateLimited,

    /// Authentication failed (HTTP 401)
    #[error("Invalid API key. Please check your OpenRouter API key.")]
    InvalidApiKey,

    /// The requested model is unknown or unavailable (HTTP 400/404)
    #[error("Invalid model: {0}")]
    InvalidModel(String),

    /// Response body did not match the expected envelope
    #[error("Unexpected API response format: {0}")]
    UnexpectedFormat(String),

    /// Any other upstream API error
    #[error("OpenRouter API error: {0}")]
    Api(String),

    /// Connection-level fault (connect failure or timeout), retries exhausted
    #[error("Could not connect to the OpenRouter API: {0}")]
    Connection(String),

    /// Anything that does not fit the categories above
    #[error("Unexpected error: {0}")]
    Unknown(String),
}

impl ApiError {
    /// Whether the failure is transient and worth another attempt
    pub fn is_retryable(&self) -> bool {
        matches!(self, ApiError::RateLimited | ApiError::Connection(_))
    }

    /// Short machine-readable kind string, used in logs and raw outcomes
    pub fn kind(&self) -> &'static str {
        match self {
            ApiError::RateLimited => "rate_limited",
            ApiError::InvalidApiKey => "invalid_api_key",
            ApiError::InvalidModel(_) => "invalid_model",
            ApiError::UnexpectedFormat(_) => "unexpected_format",
            ApiError::Api(_) => "api_error",
            ApiError::Connection(_) => "connection_error",
            ApiError::Unknown(_) => "unknown",
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            ApiError::Connection(err.to_string())
        } else {
            ApiError::Unknown(err.to_string())
        }
    }
}

/// Result type alias
pub type ApiResult<T> = Result<T, ApiError>;
