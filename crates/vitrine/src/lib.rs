//! Vitrine - a read-only admin browser over remote data backends.
//!
//! This library adapts two external backends to one admin list/detail
//! contract: a GitHub-style REST API serving repository records, and a
//! ClickHouse SQL-over-HTTP endpoint serving recipe records. Nothing is
//! persisted locally; every row is built fresh from the backend's JSON
//! response and discarded after rendering.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::{AdminSource, GitHubSource, ListRequest};
//!
//! let source = GitHubSource::new("django");
//! let page = source.list_page(&ListRequest::new(1, 10)).await?;
//! for item in &page.items {
//!     println!("{}", item.display("full_name"));
//! }
//! ```

pub mod clickhouse;
pub mod github;
pub mod record;
pub mod sort;
pub mod source;

pub use clickhouse::{ClickHouseClient, RecipeSource};
pub use github::GitHubSource;
pub use record::{project_rows, Record};
pub use sort::{order_by_clause, resolve_sort_token, SortDirection, SortEntry};
pub use source::{
    AdminSource, ListPage, ListRequest, Permissions, Result, SourceError, DEFAULT_PER_PAGE,
};
