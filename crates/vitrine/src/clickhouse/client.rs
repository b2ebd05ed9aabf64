//! Minimal ClickHouse HTTP client.
//!
//! One query per call: the SQL text is POSTed as the request body and the
//! JSON result format is requested through URL parameters. Connect and
//! read timeouts are fixed constants to bound worst-case latency.

use std::time::Duration;

use serde::Deserialize;
use serde_json::Value;

use super::error::ClickHouseError;

/// Connect timeout applied to every request.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Total request timeout applied to every request.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Decoded ClickHouse JSON result set.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct QueryResponse {
    /// Result rows, one JSON object per row.
    #[serde(default)]
    pub data: Vec<Value>,
    /// Row count before LIMIT was applied, when ClickHouse reports one.
    #[serde(default)]
    pub rows_before_limit_at_least: Option<u64>,
}

/// HTTP client for one ClickHouse endpoint and database.
#[derive(Debug, Clone)]
pub struct ClickHouseClient {
    http: reqwest::Client,
    url: String,
    database: String,
    user: Option<String>,
    password: Option<String>,
}

impl ClickHouseClient {
    /// Create a client for an endpoint URL and database.
    pub fn new(
        url: impl Into<String>,
        database: impl Into<String>,
    ) -> Result<Self, ClickHouseError> {
        let http = reqwest::Client::builder()
            .connect_timeout(CONNECT_TIMEOUT)
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ClickHouseError::Client(e.to_string()))?;

        Ok(Self {
            http,
            url: url.into().trim_end_matches('/').to_string(),
            database: database.into(),
            user: None,
            password: None,
        })
    }

    /// Attach credentials, sent via the `X-ClickHouse-*` headers.
    #[must_use]
    pub fn with_credentials(
        mut self,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        self.user = Some(user.into());
        self.password = Some(password.into());
        self
    }

    /// The endpoint URL this client posts to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Run one query and decode the JSON result set.
    ///
    /// Any non-success status propagates with the server's error text.
    pub async fn query(&self, sql: &str) -> Result<QueryResponse, ClickHouseError> {
        let mut request = self
            .http
            .post(&self.url)
            .query(&[
                ("database", self.database.as_str()),
                ("default_format", "JSON"),
            ])
            .body(sql.to_string());

        if let Some(user) = &self.user {
            request = request.header("X-ClickHouse-User", user);
        }
        if let Some(password) = &self.password {
            request = request.header("X-ClickHouse-Key", password);
        }

        let response = request
            .send()
            .await
            .map_err(|e| ClickHouseError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClickHouseError::Http {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| ClickHouseError::Decode(e.to_string()))
    }
}
