//! Error types for the HBnB client

use thiserror::Error;

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Failures arising from issuing or interpreting an HTTP call
#[derive(Debug, Error)]
pub enum ApiError {
    /// Network failure or a response body that was not valid JSON
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response to a login attempt
    #[error("Authentication failed: {0}")]
    AuthFailed(String),

    /// Non-2xx response to any other call
    #[error("Request failed ({status}): {message}")]
    RequestFailed { status: u16, message: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Transport("Request timed out".to_string())
        } else if err.is_connect() {
            ApiError::Transport("Failed to connect to API".to_string())
        } else {
            ApiError::Transport(err.to_string())
        }
    }
}

/// Credential-store failures
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Could not determine credential file location")]
    NoHomeDirectory,

    #[error("Malformed cookie record: {0}")]
    MalformedCookie(String),

    #[error("Failed to parse stored credentials: {0}")]
    ParseError(String),

    #[error("Failed to save credentials: {0}")]
    SaveError(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<serde_yaml::Error> for StoreError {
    fn from(err: serde_yaml::Error) -> Self {
        StoreError::ParseError(err.to_string())
    }
}
