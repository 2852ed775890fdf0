//! Internal error types for breed API operations.
//!
//! These errors are internal to `breedex-api` and are mapped to
//! `SourceError` at the port boundary.

use thiserror::Error;

/// Result type alias for breed API operations.
pub type ApiResult<T> = Result<T, ApiError>;

/// Errors related to breed API operations.
#[derive(Debug, Error)]
pub enum ApiError {
    /// API request failed with an HTTP error status.
    #[error("Breed API request failed with status {status}: {url}")]
    RequestFailed {
        /// HTTP status code
        status: u16,
        /// The URL that was requested
        url: String,
    },

    /// API returned an invalid or unexpected response.
    #[error("Invalid response from breed API: {message}")]
    InvalidResponse {
        /// Description of what was invalid
        message: String,
    },

    /// The HTTP client could not be built from the configuration.
    #[error("Invalid client configuration: {0}")]
    ClientConfig(String),

    /// Network or HTTP client error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// JSON parsing error.
    #[error("JSON parsing error: {0}")]
    JsonParse(#[from] serde_json::Error),
}
