/*
[INPUT]:  Error sources (HTTP, endpoint responses, serialization, schema validation, file IO)
[OUTPUT]: Structured error types with context and retry hints
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use std::path::PathBuf;
use std::time::Duration;

use reqwest::StatusCode;
use thiserror::Error;

use crate::validation::ValidationError;

/// Main error type for webhook operations
#[derive(Error, Debug)]
pub enum WebhookError {
    /// HTTP request failed
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Endpoint returned an error response
    #[error("API error (status {status}, code {code}): {message}")]
    Api {
        status: u16,
        code: i64,
        message: String,
    },

    /// Rate limit still in effect after all retries
    #[error("Rate limit exceeded, retry after {}ms", retry_after.as_millis())]
    RateLimit { retry_after: Duration, global: bool },

    /// Message does not satisfy the endpoint's schema
    #[error("Invalid message: {0}")]
    Validation(#[from] ValidationError),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Reading an attachment from disk failed
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid response from server
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl WebhookError {
    /// Check if the error is retryable
    pub fn is_retryable(&self) -> bool {
        match self {
            WebhookError::Http(err) => err.is_timeout() || err.is_connect(),
            WebhookError::RateLimit { .. } => true,
            WebhookError::Api { status, .. } => *status >= 500,
            _ => false,
        }
    }

    /// Get retry delay (if retryable)
    pub fn retry_delay(&self) -> Option<Duration> {
        match self {
            WebhookError::RateLimit { retry_after, .. } => Some(*retry_after),
            WebhookError::Api { status, .. } if *status >= 500 => Some(Duration::from_secs(1)),
            _ => None,
        }
    }

    /// Check if the endpoint rejected the message content
    pub fn is_validation_error(&self) -> bool {
        matches!(self, WebhookError::Validation(_))
            || matches!(self, WebhookError::Api { status: 400, .. })
    }

    /// Create an API error from status code, endpoint error code and message
    pub fn api_error(status: StatusCode, code: i64, message: impl Into<String>) -> Self {
        WebhookError::Api {
            status: status.as_u16(),
            code,
            message: message.into(),
        }
    }
}

/// Result type alias for webhook operations
pub type Result<T> = std::result::Result<T, WebhookError>;
