//! Whitelist projection of backend JSON rows.
//!
//! A [`Record`] is one backend row projected onto a fixed, ordered field
//! whitelist. Keys missing from the source become `null`; keys absent from
//! the whitelist are dropped silently. This is projection, not validation:
//! values are carried through uninterpreted, with no coercion or type
//! checking.

use serde_json::Value;

/// A typed, whitelisted projection of one backend entity.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    fields: &'static [&'static str],
    values: Vec<Value>,
}

impl Record {
    /// Project one JSON mapping onto the whitelist.
    ///
    /// A non-object `source` yields a record of all-null values.
    #[must_use]
    pub fn project(fields: &'static [&'static str], source: &Value) -> Self {
        let values = fields
            .iter()
            .map(|field| source.get(*field).cloned().unwrap_or(Value::Null))
            .collect();
        Self { fields, values }
    }

    /// The whitelist this record was projected with.
    #[must_use]
    pub fn fields(&self) -> &'static [&'static str] {
        self.fields
    }

    /// Get a field's value. `None` for fields outside the whitelist.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields
            .iter()
            .position(|candidate| *candidate == field)
            .map(|index| &self.values[index])
    }

    /// Iterate fields and values in whitelist order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &Value)> {
        self.fields.iter().copied().zip(self.values.iter())
    }

    /// Render a field for display: strings unquoted, null as `-`,
    /// everything else as compact JSON.
    #[must_use]
    pub fn display(&self, field: &str) -> String {
        match self.get(field) {
            None | Some(Value::Null) => "-".to_string(),
            Some(Value::String(text)) => text.clone(),
            Some(other) => other.to_string(),
        }
    }
}

/// Project a slice of JSON mappings into records, preserving order.
///
/// An empty input produces zero records.
#[must_use]
pub fn project_rows(fields: &'static [&'static str], rows: &[Value]) -> Vec<Record> {
    rows.iter().map(|row| Record::project(fields, row)).collect()
}
