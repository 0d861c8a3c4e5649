//! Error types for persistence API calls.

use thiserror::Error;

/// Errors that can occur while talking to the persistence API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ClientError {
    /// The request never produced a response (connection, timeout, TLS).
    #[error("network error: {0}")]
    Network(String),

    /// The server answered with a non-success status.
    #[error("server returned {status}: {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Response body or reason phrase.
        message: String,
    },

    /// The response body was not the expected JSON shape.
    #[error("could not decode response: {0}")]
    Decode(String),

    /// The client was configured with an unusable value.
    #[error("invalid client configuration: {0}")]
    InvalidConfig(String),

    /// The API has no such operation for this entity kind.
    #[error("cannot {operation} a {kind}")]
    Unsupported {
        /// Operation attempted ("create" or "update").
        operation: &'static str,
        /// Entity kind label.
        kind: &'static str,
    },
}

impl ClientError {
    /// Returns a user-friendly error message suitable for a failure notification.
    #[must_use]
    pub fn user_message(&self) -> &str {
        match self {
            Self::Network(_) => "Could not reach the server. Please check your connection.",
            Self::Server { status, .. } if *status >= 500 => {
                "The server could not save your changes. Please try again."
            }
            Self::Server { .. } => "The server rejected the request.",
            Self::Decode(_) => "The server sent an unexpected response.",
            Self::InvalidConfig(_) | Self::Unsupported { .. } => {
                "The application is not configured correctly."
            }
        }
    }

    /// Whether retrying the same request manually may succeed.
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network(_) => true,
            Self::Server { status, .. } => *status >= 500 || *status == 429,
            Self::Decode(_) | Self::InvalidConfig(_) | Self::Unsupported { .. } => false,
        }
    }
}

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;
