//! SQL-over-HTTP recipe source (ClickHouse).

mod client;
mod error;
mod query;
pub mod recipe;

pub use client::{ClickHouseClient, QueryResponse};
pub use error::ClickHouseError;
pub use query::prevent_injection;

use async_trait::async_trait;

use crate::record::{project_rows, Record};
use crate::source::{self, AdminSource, ListPage, ListRequest, SourceError};

/// Recipe source backed by a ClickHouse table queried over HTTP.
///
/// Queries are built as SQL text per request; HTTP-level failures
/// propagate to the caller, there is no degraded path on this backend.
#[derive(Clone)]
pub struct RecipeSource {
    client: ClickHouseClient,
    table: String,
}

impl RecipeSource {
    /// Create a source reading from `table` through `client`.
    pub fn new(client: ClickHouseClient, table: impl Into<String>) -> Self {
        Self {
            client,
            table: table.into(),
        }
    }

    /// The table this source reads from.
    pub fn table(&self) -> &str {
        &self.table
    }
}

#[async_trait]
impl AdminSource for RecipeSource {
    fn entity(&self) -> &'static str {
        "recipe"
    }

    fn field_list(&self) -> &'static [&'static str] {
        &recipe::FIELDS
    }

    fn sortable_columns(&self) -> &'static [&'static str] {
        &recipe::SORTABLE_COLUMNS
    }

    async fn list_page(&self, request: &ListRequest) -> source::Result<ListPage> {
        let sql = query::build_list_sql(&self.table, request, &recipe::SORTABLE_COLUMNS);
        tracing::debug!(page = request.page, per_page = request.per_page, "listing recipes");

        let response = self.client.query(&sql).await.map_err(SourceError::from)?;

        Ok(ListPage {
            total: Some(response.rows_before_limit_at_least.unwrap_or(0)),
            items: project_rows(&recipe::FIELDS, &response.data),
        })
    }

    async fn get_object(&self, key: &str) -> source::Result<Option<Record>> {
        let sql = query::build_detail_sql(&self.table, key);
        let response = self.client.query(&sql).await.map_err(SourceError::from)?;

        Ok(response
            .data
            .first()
            .map(|row| Record::project(&recipe::FIELDS, row)))
    }
}
