//! SQL text construction for the recipe table.
//!
//! Queries are built by string formatting with a strip-based sanitizer,
//! preserving the behavior of the system this replaces. Stripping quotes
//! and semicolons is NOT a complete escaping scheme and this module should
//! not be taken as a template for general SQL construction; values that
//! need real safety belong in parameterized queries.

use crate::sort::{order_by_clause, resolve_sort_token};
use crate::source::ListRequest;

/// Ordering applied when the request carries no usable sort token, and for
/// detail lookups.
const DEFAULT_ORDER_BY: &str = "title desc";

/// SELECT list derived from the recipe field whitelist: every output
/// column alias matches a whitelisted field, with the length counts
/// stringified server-side.
const SELECT_LIST: &str = "link, title, toString(length(NER)) AS ner_length, \
toString(length(directions)) AS directions_length, NER AS ner, ingredients, directions";

/// Strip every single quote and semicolon from raw user text.
///
/// Deliberately weak: this keeps the interpolated literal from terminating
/// the string or statement, nothing more.
#[must_use]
pub fn prevent_injection(raw: &str) -> String {
    raw.chars().filter(|c| *c != '\'' && *c != ';').collect()
}

/// Build the list query: conjunctive WHERE, ORDER BY from the sort token,
/// LIMIT/OFFSET from the page.
pub(crate) fn build_list_sql(
    table: &str,
    request: &ListRequest,
    sortable: &'static [&'static str],
) -> String {
    let mut predicates: Vec<String> = Vec::new();

    if let Some(search) = request.search.as_deref().filter(|s| !s.is_empty()) {
        predicates.push(format!("title ILIKE '%{}%'", prevent_injection(search)));
    }
    if let Some(ingredient) = request.filter.as_deref().filter(|s| !s.is_empty()) {
        predicates.push(format!("has(NER, '{}')", prevent_injection(ingredient)));
    }

    // No predicates means no WHERE clause at all.
    let where_sql = if predicates.is_empty() {
        String::new()
    } else {
        format!("\nWHERE {}", predicates.join(" AND "))
    };

    let entries = resolve_sort_token(request.sort.as_deref().unwrap_or(""), sortable);
    let order_by = if entries.is_empty() {
        DEFAULT_ORDER_BY.to_string()
    } else {
        order_by_clause(&entries)
    };

    format!(
        "SELECT {SELECT_LIST}\nFROM {table}{where_sql}\nORDER BY {order_by}\nLIMIT {} OFFSET {}",
        request.per_page,
        request.offset(),
    )
}

/// Build the single-row detail query keyed by the escaped link literal.
pub(crate) fn build_detail_sql(table: &str, link: &str) -> String {
    format!(
        "SELECT {SELECT_LIST}\nFROM {table}\nWHERE link = '{}'\nORDER BY {DEFAULT_ORDER_BY}\nLIMIT 1 OFFSET 0",
        prevent_injection(link),
    )
}
