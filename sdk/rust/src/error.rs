//! Error types for the repofolio SDK.

use thiserror::Error;

/// Main error type for the repofolio SDK.
#[derive(Error, Debug)]
pub enum Error {
    /// HTTP transport error
    #[error("HTTP error: {0}")]
    Http(String),

    /// JSON serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API error reported by the showcase service
    #[error(transparent)]
    Api(#[from] ApiError),
}

/// Typed errors for showcase API responses.
///
/// Each variant corresponds to a status class of the API's error envelope.
#[derive(Error, Debug, Clone)]
pub enum ApiError {
    /// Raised on validation errors (400).
    #[error("[{code}] {message}")]
    Validation {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Raised when the requested user does not exist (404).
    #[error("[{code}] {message}")]
    NotFound {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Raised when the service could not reach GitHub (502).
    #[error("[{code}] {message}")]
    Upstream {
        code: String,
        message: String,
        request_id: Option<String>,
    },

    /// Raised on other server errors (5xx).
    #[error("[{code}] {message}")]
    Server {
        code: String,
        message: String,
        request_id: Option<String>,
    },
}

impl ApiError {
    /// Get the error code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::Validation { code, .. }
            | Self::NotFound { code, .. }
            | Self::Upstream { code, .. }
            | Self::Server { code, .. } => code,
        }
    }

    /// Get the error message.
    #[must_use]
    pub fn message(&self) -> &str {
        match self {
            Self::Validation { message, .. }
            | Self::NotFound { message, .. }
            | Self::Upstream { message, .. }
            | Self::Server { message, .. } => message,
        }
    }

    /// Get the request ID if available.
    #[must_use]
    pub fn request_id(&self) -> Option<&str> {
        match self {
            Self::Validation { request_id, .. }
            | Self::NotFound { request_id, .. }
            | Self::Upstream { request_id, .. }
            | Self::Server { request_id, .. } => request_id.as_deref(),
        }
    }
}
