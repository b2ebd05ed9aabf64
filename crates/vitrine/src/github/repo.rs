//! Repository record: field whitelist and typed view.

use serde_json::Value;

use crate::record::Record;

/// Field whitelist for repository records. The single authority for which
/// JSON keys are read back and which columns the admin UI may display.
pub const FIELDS: [&str; 7] = [
    "id",
    "name",
    "full_name",
    "forks_count",
    "stargazers_count",
    "watchers_count",
    "open_issues_count",
];

/// Lookup key used for detail requests.
pub const KEY_FIELD: &str = "full_name";

/// Typed view over a projected repository record.
///
/// Accessors read the carried JSON values lazily; a malformed value simply
/// reads as `None`, it is never rejected at projection time.
#[derive(Debug, Clone, Default)]
pub struct RepositoryRecord {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub full_name: Option<String>,
    pub forks_count: Option<u64>,
    pub stargazers_count: Option<u64>,
    pub watchers_count: Option<u64>,
    pub open_issues_count: Option<u64>,
}

impl RepositoryRecord {
    /// Build the typed view from a projected record.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            id: record.get("id").and_then(Value::as_i64),
            name: field_string(record, "name"),
            full_name: field_string(record, "full_name"),
            forks_count: record.get("forks_count").and_then(Value::as_u64),
            stargazers_count: record.get("stargazers_count").and_then(Value::as_u64),
            watchers_count: record.get("watchers_count").and_then(Value::as_u64),
            open_issues_count: record.get("open_issues_count").and_then(Value::as_u64),
        }
    }
}

fn field_string(record: &Record, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(String::from)
}
