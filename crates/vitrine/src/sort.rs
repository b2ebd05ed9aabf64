//! Sort-token decoding.
//!
//! The admin UI encodes its sort order as dot-separated entries of the
//! form `[-]<index>`, where `<index>` is a zero-based position into the
//! entity's sortable-column list and a leading `-` marks descending.
//! Entries that are non-numeric or out of range are skipped, not errored.

/// Sort direction for one column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }
}

/// One resolved sort entry: a named column and a direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortEntry {
    pub column: &'static str,
    pub direction: SortDirection,
}

impl SortEntry {
    /// Render as an ORDER BY element, e.g. `"title desc"`.
    #[must_use]
    pub fn to_sql(self) -> String {
        format!("{} {}", self.column, self.direction.as_str())
    }
}

/// Decode a sort token against a fixed sortable-column list.
///
/// An empty or entirely-invalid token yields an empty list; the caller
/// falls back to its default ordering.
#[must_use]
pub fn resolve_sort_token(token: &str, columns: &'static [&'static str]) -> Vec<SortEntry> {
    let mut entries = Vec::new();

    for raw in token.split('.') {
        let raw = raw.trim();
        if raw.is_empty() {
            continue;
        }

        let (direction, index_text) = match raw.strip_prefix('-') {
            Some(rest) => (SortDirection::Desc, rest),
            None => (SortDirection::Asc, raw),
        };

        let index: usize = match index_text.parse() {
            Ok(index) => index,
            Err(_) => {
                tracing::debug!(entry = raw, "skipping non-numeric sort entry");
                continue;
            }
        };

        match columns.get(index).copied() {
            Some(column) => entries.push(SortEntry { column, direction }),
            None => {
                tracing::debug!(entry = raw, "skipping out-of-range sort entry");
            }
        }
    }

    entries
}

/// Join resolved entries into an ORDER BY list, e.g. `"title desc,link asc"`.
#[must_use]
pub fn order_by_clause(entries: &[SortEntry]) -> String {
    entries
        .iter()
        .map(|entry| entry.to_sql())
        .collect::<Vec<_>>()
        .join(",")
}
