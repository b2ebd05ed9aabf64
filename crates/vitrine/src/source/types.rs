use async_trait::async_trait;

use crate::record::Record;

use super::errors::Result;

/// Default page size for list requests, matching the admin's page length.
pub const DEFAULT_PER_PAGE: u32 = 10;

/// Parameters of one list admin request.
///
/// `page` is 1-based. A zero page or page size falls back to the default,
/// the way the admin UI's "missing or zero" request parameters do.
#[derive(Debug, Clone)]
pub struct ListRequest {
    /// 1-based page number.
    pub page: u32,
    /// Rows per page.
    pub per_page: u32,
    /// Free-text search over the entity's search column.
    pub search: Option<String>,
    /// Backend-specific filter value (recipe ingredient).
    pub filter: Option<String>,
    /// Compact column-index sort token, e.g. `"-2.0"`.
    pub sort: Option<String>,
}

impl ListRequest {
    /// Create a request for one page, clamping zero inputs to defaults.
    pub fn new(page: u32, per_page: u32) -> Self {
        Self {
            page: page.max(1),
            per_page: if per_page == 0 {
                DEFAULT_PER_PAGE
            } else {
                per_page
            },
            search: None,
            filter: None,
            sort: None,
        }
    }

    /// Set the search text.
    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Set the filter value.
    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    /// Set the sort token.
    #[must_use]
    pub fn with_sort(mut self, sort: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self
    }

    /// Row offset of this page: `(page - 1) * per_page`.
    #[inline]
    #[must_use]
    pub fn offset(&self) -> u64 {
        u64::from(self.page - 1) * u64::from(self.per_page)
    }
}

impl Default for ListRequest {
    fn default() -> Self {
        Self::new(1, DEFAULT_PER_PAGE)
    }
}

/// One page of list results.
#[derive(Debug, Clone, Default)]
pub struct ListPage {
    /// Total row count, when the backend can report one.
    ///
    /// `None` means unknown (e.g. a rate-limited REST page), which callers
    /// must not collapse to zero. For the REST source the value is the
    /// organization-wide repository count, not the page's result count.
    pub total: Option<u64>,
    /// The page's rows, in backend order.
    pub items: Vec<Record>,
}

impl ListPage {
    /// An empty page with unknown total, served when the upstream degrades.
    #[must_use]
    pub fn degraded() -> Self {
        Self {
            total: None,
            items: Vec::new(),
        }
    }
}

/// What the admin UI may let a user do with an entity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Permissions {
    /// Whether the entity's module is visible at all.
    pub module: bool,
    /// Whether the detail view may be opened.
    pub change: bool,
    /// Whether new rows may be created.
    pub add: bool,
    /// Whether rows may be deleted.
    pub delete: bool,
}

impl Permissions {
    /// The read-only surface: module and detail access require
    /// authentication, add and delete are always denied.
    #[must_use]
    pub fn read_only(authenticated: bool) -> Self {
        Self {
            module: authenticated,
            change: authenticated,
            add: false,
            delete: false,
        }
    }
}

/// Trait for read-only admin data sources backed by remote services.
///
/// Implementors translate the generic list/detail request into their
/// backend's native query form (REST query parameters, or SQL text) and
/// normalize the response into whitelisted [`Record`]s.
///
/// # Implementation Notes
///
/// Implementors should:
/// - Treat the field whitelist as the single authority for which columns
///   are requested, read back, and exposed
/// - Keep every call a stateless request/response cycle (the memoized
///   total count is the only permitted cross-call state)
/// - Convert backend-specific errors to `SourceError`
#[async_trait]
pub trait AdminSource: Send + Sync {
    /// Display name of the entity this source serves.
    fn entity(&self) -> &'static str;

    /// The fixed, ordered field whitelist.
    fn field_list(&self) -> &'static [&'static str];

    /// Columns the admin UI may sort by. Empty means sorting is disabled.
    fn sortable_columns(&self) -> &'static [&'static str];

    /// Permission set for a request, keyed on authentication only.
    fn permissions(&self, authenticated: bool) -> Permissions {
        Permissions::read_only(authenticated)
    }

    /// Fetch one page of rows.
    async fn list_page(&self, request: &ListRequest) -> Result<ListPage>;

    /// Fetch a single row by its lookup key.
    ///
    /// `Ok(None)` is the normal not-found outcome, not an error.
    async fn get_object(&self, key: &str) -> Result<Option<Record>>;
}
