//! Error types for the connector layer.

use thiserror::Error;

/// Result type alias for connector operations.
pub type Result<T> = std::result::Result<T, ConnectorError>;

/// Errors that can occur when talking to the remote API.
#[derive(Error, Debug)]
pub enum ConnectorError {
    /// API request failed with a non-success status.
    #[error("API request failed: {0}")]
    ApiRequest(String),

    /// Invalid response from the API.
    #[error("invalid response: {0}")]
    InvalidResponse(String),

    /// Rate limit exceeded.
    #[error("rate limit exceeded, retry after {retry_after_secs}s")]
    RateLimited { retry_after_secs: u64 },

    /// Empty document batch passed to embed.
    #[error("cannot embed an empty document batch")]
    EmptyBatch,

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// HTTP error.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
}
