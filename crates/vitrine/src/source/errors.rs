use chrono::{DateTime, Utc};
use thiserror::Error;

/// Errors that can occur when querying a remote admin data source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The upstream refused the request because of rate limiting.
    ///
    /// The list path recovers from this locally by serving an empty page;
    /// the detail path propagates it.
    #[error("rate limited by upstream{}", reset_hint(.reset_at))]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    /// Non-success HTTP response from the backend.
    #[error("upstream API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// Transport-level failure before a response was received.
    #[error("network error: {message}")]
    Network { message: String },

    /// The response body could not be decoded as the expected JSON.
    #[error("decode error: {message}")]
    Decode { message: String },

    /// Unexpected/internal error.
    #[error("internal error: {message}")]
    Internal { message: String },
}

fn reset_hint(reset_at: &Option<DateTime<Utc>>) -> String {
    match reset_at {
        Some(at) => format!(", resets at {at}"),
        None => String::new(),
    }
}

impl SourceError {
    /// Create an API error from a status code and response text.
    #[inline]
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// Create a network error.
    #[inline]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a decode error.
    #[inline]
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode {
            message: message.into(),
        }
    }

    /// Create an internal error.
    #[inline]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Check if this error is a rate limit error.
    #[inline]
    pub fn is_rate_limited(&self) -> bool {
        matches!(self, Self::RateLimited { .. })
    }
}

/// Result type for source operations.
pub type Result<T> = std::result::Result<T, SourceError>;
