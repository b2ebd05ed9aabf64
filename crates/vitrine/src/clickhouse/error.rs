//! ClickHouse HTTP interface error types.

use thiserror::Error;

use crate::source::SourceError;

/// Errors that can occur when querying ClickHouse over HTTP.
#[derive(Debug, Error)]
pub enum ClickHouseError {
    #[error("ClickHouse error ({status}): {body}")]
    Http { status: u16, body: String },

    #[error("network error: {0}")]
    Network(String),

    #[error("JSON decode error: {0}")]
    Decode(String),

    #[error("HTTP client setup error: {0}")]
    Client(String),
}

impl From<ClickHouseError> for SourceError {
    fn from(err: ClickHouseError) -> Self {
        match err {
            ClickHouseError::Http { status, body } => SourceError::api(status, body),
            ClickHouseError::Network(message) => SourceError::network(message),
            ClickHouseError::Decode(message) => SourceError::decode(message),
            ClickHouseError::Client(message) => SourceError::internal(message),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clickhouse_error_to_source_error() {
        let http = ClickHouseError::Http {
            status: 500,
            body: "Code: 62. DB::Exception: Syntax error".to_string(),
        };
        let source_err: SourceError = http.into();
        assert!(matches!(source_err, SourceError::Api { status: 500, .. }));

        let network = ClickHouseError::Network("connect timeout".to_string());
        let source_err: SourceError = network.into();
        assert!(matches!(source_err, SourceError::Network { .. }));
    }
}
