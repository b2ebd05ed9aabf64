//! GitHub API error types.

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur when talking to the GitHub API.
#[derive(Debug, Error)]
pub enum GitHubError {
    #[error("rate limit exceeded")]
    RateLimited { reset_at: Option<DateTime<Utc>> },

    #[error("GitHub API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("JSON decode error: {0}")]
    Decode(String),
}

impl From<GitHubError> for SourceError {
    fn from(err: GitHubError) -> Self {
        match err {
            GitHubError::RateLimited { reset_at } => SourceError::RateLimited { reset_at },
            GitHubError::Api { status, message } => SourceError::api(status, message),
            GitHubError::Network(message) => SourceError::network(message),
            GitHubError::Decode(message) => SourceError::decode(message),
        }
    }
}
