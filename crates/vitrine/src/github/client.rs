//! GitHub REST source: paginated repository listing and single-repo lookup.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::header::HeaderMap;
use reqwest::StatusCode;
use serde_json::Value;
use tokio::sync::Mutex;

use super::error::GitHubError;
use super::repo;
use crate::record::{project_rows, Record};
use crate::source::{self, AdminSource, ListPage, ListRequest, SourceError};

/// Public GitHub API base URL.
pub const GITHUB_API_BASE: &str = "https://api.github.com";

/// Organization browsed when none is configured.
pub const DEFAULT_ORG: &str = "django";

const ACCEPT: &str = "application/vnd.github+json";
const USER_AGENT: &str = "vitrine";

/// Extract the rate-limit reset time from GitHub response headers.
fn reset_hint(headers: &HeaderMap) -> Option<DateTime<Utc>> {
    let epoch: i64 = headers
        .get("x-ratelimit-reset")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.parse().ok())?;
    DateTime::from_timestamp(epoch, 0)
}

/// Repository source backed by the GitHub REST API.
///
/// Unauthenticated, read-only. List pages map `page`/`per_page` straight
/// through to the API; there is no search or filter support because the
/// list endpoint is unfiltered. A rate-limited list request degrades to an
/// empty page instead of failing.
#[derive(Clone)]
pub struct GitHubSource {
    http: reqwest::Client,
    base_url: String,
    org: String,
    /// Single-slot memo for the organization repo count. The outer `None`
    /// means "not fetched yet"; the inner value is whatever the org
    /// endpoint answered, including "no count available". No TTL, no
    /// invalidation; a concurrent first access may fetch twice.
    repo_total: Arc<Mutex<Option<Option<u64>>>>,
}

impl GitHubSource {
    /// Create a source for an organization on the public API.
    pub fn new(org: impl Into<String>) -> Self {
        Self::with_base_url(GITHUB_API_BASE, org)
    }

    /// Create a source against a custom API base URL.
    pub fn with_base_url(base_url: impl Into<String>, org: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            org: org.into(),
            repo_total: Arc::new(Mutex::new(None)),
        }
    }

    /// The organization this source browses.
    pub fn org(&self) -> &str {
        &self.org
    }

    async fn get(
        &self,
        route: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, GitHubError> {
        self.http
            .get(format!("{}{}", self.base_url, route))
            .header("Accept", ACCEPT)
            .header("User-Agent", USER_AGENT)
            .query(query)
            .send()
            .await
            .map_err(|e| GitHubError::Network(e.to_string()))
    }

    /// Fetch the organization's public repo count from the org endpoint.
    ///
    /// The count is read out of whatever JSON comes back, so an error
    /// payload resolves to "no count" rather than a failure.
    async fn fetch_repo_total(&self) -> Result<Option<u64>, GitHubError> {
        let response = self.get(&format!("/orgs/{}", self.org), &[]).await?;
        let data: Value = response
            .json()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))?;
        Ok(data.get("public_repos").and_then(Value::as_u64))
    }

    /// Compute-if-absent accessor for the memoized repo count.
    ///
    /// The value is organization-wide and approximate; it is served as the
    /// `total` of every list page regardless of the page's contents.
    pub async fn repo_total(&self) -> Option<u64> {
        {
            let slot = self.repo_total.lock().await;
            if let Some(cached) = *slot {
                return cached;
            }
        }

        // Not held across the fetch: a racing first access fetches twice,
        // which is benign.
        match self.fetch_repo_total().await {
            Ok(total) => {
                *self.repo_total.lock().await = Some(total);
                total
            }
            Err(err) => {
                tracing::debug!("org repo count fetch failed: {err}");
                None
            }
        }
    }
}

#[async_trait]
impl AdminSource for GitHubSource {
    fn entity(&self) -> &'static str {
        "repository"
    }

    fn field_list(&self) -> &'static [&'static str] {
        &repo::FIELDS
    }

    fn sortable_columns(&self) -> &'static [&'static str] {
        // The list endpoint serves its own fixed order.
        &[]
    }

    async fn list_page(&self, request: &ListRequest) -> source::Result<ListPage> {
        let response = self
            .get(
                &format!("/orgs/{}/repos", self.org),
                &[
                    ("page", request.page.to_string()),
                    ("per_page", request.per_page.to_string()),
                ],
            )
            .await
            .map_err(SourceError::from)?;

        let status = response.status();
        if status == StatusCode::FORBIDDEN {
            let reset_at = reset_hint(response.headers());
            tracing::debug!(
                org = %self.org,
                ?reset_at,
                "rate limited listing repositories, serving an empty page"
            );
            return Ok(ListPage::degraded());
        }
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(GitHubError::Api {
                status: status.as_u16(),
                message,
            }
            .into());
        }

        let rows: Vec<Value> = response
            .json()
            .await
            .map_err(|e| GitHubError::Decode(e.to_string()))?;

        Ok(ListPage {
            total: self.repo_total().await,
            items: project_rows(&repo::FIELDS, &rows),
        })
    }

    async fn get_object(&self, key: &str) -> source::Result<Option<Record>> {
        // The key is a backend-assigned `owner/name` path segment and is
        // trusted as-is.
        let response = self
            .get(&format!("/repos/{key}"), &[])
            .await
            .map_err(SourceError::from)?;

        let status = response.status();
        match status {
            StatusCode::NOT_FOUND => Ok(None),
            StatusCode::FORBIDDEN => Err(GitHubError::RateLimited {
                reset_at: reset_hint(response.headers()),
            }
            .into()),
            status if status.is_success() => {
                let row: Value = response
                    .json()
                    .await
                    .map_err(|e| GitHubError::Decode(e.to_string()))?;
                Ok(Some(Record::project(&repo::FIELDS, &row)))
            }
            status => {
                let message = response.text().await.unwrap_or_default();
                Err(GitHubError::Api {
                    status: status.as_u16(),
                    message,
                }
                .into())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use reqwest::header::HeaderValue;

    use super::*;

    #[test]
    fn test_reset_hint_parses_epoch_header() {
        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("1700000000"));
        let reset = reset_hint(&headers).expect("reset time");
        assert_eq!(reset.timestamp(), 1_700_000_000);
    }

    #[test]
    fn test_reset_hint_missing_or_malformed() {
        assert!(reset_hint(&HeaderMap::new()).is_none());

        let mut headers = HeaderMap::new();
        headers.insert("x-ratelimit-reset", HeaderValue::from_static("soon"));
        assert!(reset_hint(&headers).is_none());
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let source = GitHubSource::with_base_url("https://example.test/", "django");
        assert_eq!(source.base_url, "https://example.test");
    }

    #[test]
    fn test_sortable_columns_empty() {
        let source = GitHubSource::new(DEFAULT_ORG);
        assert!(source.sortable_columns().is_empty());
    }
}
