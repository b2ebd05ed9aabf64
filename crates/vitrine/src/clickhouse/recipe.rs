//! Recipe record: field whitelist, sortable columns, typed view.

use serde_json::Value;

use crate::record::Record;

/// Field whitelist for recipe records, in display order.
pub const FIELDS: [&str; 7] = [
    "link",
    "title",
    "ner_length",
    "directions_length",
    "ner",
    "ingredients",
    "directions",
];

/// Columns the admin UI may sort recipes by, in sort-index order.
pub const SORTABLE_COLUMNS: [&str; 3] = ["title", "ner_length", "directions_length"];

/// Lookup key used for detail requests, escaped into the SQL literal.
pub const KEY_FIELD: &str = "link";

/// Typed view over a projected recipe record.
///
/// The length counts come back pre-stringified by the backend and stay
/// strings here; `ner`, `ingredients` and `directions` are arbitrary JSON.
#[derive(Debug, Clone, Default)]
pub struct RecipeRecord {
    pub link: Option<String>,
    pub title: Option<String>,
    pub ner_length: Option<String>,
    pub directions_length: Option<String>,
    pub ner: Value,
    pub ingredients: Value,
    pub directions: Value,
}

impl RecipeRecord {
    /// Build the typed view from a projected record.
    #[must_use]
    pub fn from_record(record: &Record) -> Self {
        Self {
            link: field_string(record, "link"),
            title: field_string(record, "title"),
            ner_length: field_string(record, "ner_length"),
            directions_length: field_string(record, "directions_length"),
            ner: field_value(record, "ner"),
            ingredients: field_value(record, "ingredients"),
            directions: field_value(record, "directions"),
        }
    }
}

fn field_string(record: &Record, field: &str) -> Option<String> {
    record
        .get(field)
        .and_then(Value::as_str)
        .map(String::from)
}

fn field_value(record: &Record, field: &str) -> Value {
    record.get(field).cloned().unwrap_or(Value::Null)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_from_record() {
        let record = Record::project(
            &FIELDS,
            &json!({
                "link": "www.example.com/r/42",
                "title": "Garlic Stew",
                "ner_length": "4",
                "directions_length": "6",
                "ner": ["garlic", "onion"],
                "ingredients": ["2 cloves garlic", "1 onion"],
                "directions": ["chop", "simmer"]
            }),
        );

        let recipe = RecipeRecord::from_record(&record);
        assert_eq!(recipe.link.as_deref(), Some("www.example.com/r/42"));
        assert_eq!(recipe.ner_length.as_deref(), Some("4"));
        assert_eq!(recipe.ner, json!(["garlic", "onion"]));
    }

    #[test]
    fn test_absent_fields_default() {
        let recipe = RecipeRecord::from_record(&Record::project(&FIELDS, &json!({})));
        assert!(recipe.link.is_none());
        assert_eq!(recipe.ingredients, Value::Null);
    }
}
