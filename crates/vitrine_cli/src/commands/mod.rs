//! Command handlers.

pub(crate) mod recipes;
pub(crate) mod repos;

use console::style;
use vitrine::{AdminSource, ListPage, Record};

use crate::config::Config;

/// Print one page of records as a column-aligned table.
pub(crate) fn print_page(source: &dyn AdminSource, page: &ListPage, page_num: u32) {
    let fields = source.field_list();

    let header = fields
        .iter()
        .map(|field| format!("{field:<20}"))
        .collect::<Vec<_>>()
        .join(" ");
    println!("{}", style(header.trim_end()).bold());

    for record in &page.items {
        let row = fields
            .iter()
            .map(|field| format!("{:<20}", truncate(&record.display(field), 19)))
            .collect::<Vec<_>>()
            .join(" ");
        println!("{}", row.trim_end());
    }

    let total = match page.total {
        Some(total) => format!("~{total}"),
        None => "unknown (rate limited)".to_string(),
    };
    println!(
        "\npage {} · {} row(s) · total {}",
        page_num,
        page.items.len(),
        style(total).dim()
    );
}

/// Print one record as field/value lines.
pub(crate) fn print_record(record: &Record) {
    for (field, _) in record.iter() {
        println!(
            "{:>20}  {}",
            style(field).bold(),
            record.display(field)
        );
    }
}

fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let head: String = text.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{head}…")
}

/// Describe both sources: entity, fields, sortable columns, permissions.
pub(crate) fn handle_sources(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let github = repos::build_source(config);
    let clickhouse = recipes::build_source(config)?;

    for source in [&github as &dyn AdminSource, &clickhouse as &dyn AdminSource] {
        println!("{}", style(source.entity()).bold());
        println!("  fields:   {}", source.field_list().join(", "));
        let sortable = source.sortable_columns();
        println!(
            "  sortable: {}",
            if sortable.is_empty() {
                "(none)".to_string()
            } else {
                sortable.join(", ")
            }
        );
        let authed = source.permissions(true);
        let anon = source.permissions(false);
        println!(
            "  permissions: module/change require authentication \
             (authenticated: module={} change={}; anonymous: module={} change={}); \
             add={} delete={}",
            authed.module, authed.change, anon.module, anon.change, authed.add, authed.delete
        );
        println!();
    }

    Ok(())
}
