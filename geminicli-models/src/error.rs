//! Errors from building or calling a content generator.

use std::time::Duration;
use thiserror::Error;

/// Errors raised while constructing or calling a content generator.
#[derive(Debug, Error)]
pub enum ModelError {
    /// Non-2xx response without a recognizable Google error body.
    #[error("HTTP error: {status} - {body}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Google error envelope (`{"error": {...}}`) on a non-2xx response.
    #[error("API error: {message}")]
    Api {
        /// Error message.
        message: String,
        /// Status string such as `INVALID_ARGUMENT`.
        code: Option<String>,
    },

    /// The request did not finish in time.
    #[error("Request timed out{}", after_suffix(.0))]
    Timeout(Option<Duration>),

    /// HTTP 429. `retry_after` comes from the `Retry-After` header.
    #[error("Rate limited{}", retry_suffix(.retry_after))]
    RateLimited {
        /// Delay the server asked for.
        retry_after: Option<Duration>,
    },

    /// HTTP 401 or 403.
    #[error("Authentication failed: {0}")]
    Authentication(String),

    /// A 2xx response whose body could not be decoded, or a broken stream.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// HTTP 404, usually an unknown model.
    #[error("Model not found: {0}")]
    NotFound(String),

    /// Could not reach the endpoint.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Client construction failed (missing key, bad header).
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Any other transport failure.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

fn after_suffix(after: &Option<Duration>) -> String {
    after
        .map(|d| format!(" after {d:?}"))
        .unwrap_or_default()
}

fn retry_suffix(retry_after: &Option<Duration>) -> String {
    retry_after
        .map(|d| format!(", retry after {d:?}"))
        .unwrap_or_default()
}

impl ModelError {
    /// Create an HTTP error.
    pub fn http(status: u16, body: impl Into<String>) -> Self {
        Self::Http {
            status,
            body: body.into(),
        }
    }

    /// Create an authentication error.
    pub fn auth(message: impl Into<String>) -> Self {
        Self::Authentication(message.into())
    }

    /// Create an invalid response error.
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse(message.into())
    }

    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration(message.into())
    }

    /// Map a transport error, reporting `timeout` for timeouts.
    pub fn from_transport(err: reqwest::Error, timeout: Option<Duration>) -> Self {
        if err.is_timeout() {
            ModelError::Timeout(timeout)
        } else if err.is_connect() {
            ModelError::Connection(err.to_string())
        } else if let Some(status) = err.status() {
            ModelError::http(status.as_u16(), err.to_string())
        } else {
            ModelError::Other(err.into())
        }
    }
}

impl From<reqwest::Error> for ModelError {
    fn from(err: reqwest::Error) -> Self {
        Self::from_transport(err, None)
    }
}

/// Result type for generator operations.
pub type ModelResult<T> = Result<T, ModelError>;
