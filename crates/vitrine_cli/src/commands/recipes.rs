//! Recipe browsing commands (ClickHouse-backed).

use console::style;
use vitrine::clickhouse::recipe::RecipeRecord;
use vitrine::{AdminSource, ClickHouseClient, ListRequest, RecipeSource};

use crate::config::Config;

pub(crate) fn build_source(
    config: &Config,
) -> Result<RecipeSource, Box<dyn std::error::Error>> {
    let mut client = ClickHouseClient::new(&config.clickhouse.url, &config.clickhouse.database)?;

    if let (Some(user), Some(password)) =
        (&config.clickhouse.user, &config.clickhouse.password)
    {
        client = client.with_credentials(user, password);
    }

    Ok(RecipeSource::new(client, &config.clickhouse.table))
}

pub(crate) async fn handle_list(
    page: u32,
    per_page: Option<u32>,
    search: Option<String>,
    ingredient: Option<String>,
    sort: Option<String>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_source(config)?;

    let mut request = ListRequest::new(page, per_page.unwrap_or(config.list.per_page));
    if let Some(search) = search {
        request = request.with_search(search);
    }
    if let Some(ingredient) = ingredient {
        request = request.with_filter(ingredient);
    }
    if let Some(sort) = sort {
        request = request.with_sort(sort);
    }

    let result = source.list_page(&request).await?;

    println!("{} recipes\n", style(source.table()).bold());
    super::print_page(&source, &result, request.page);

    Ok(())
}

pub(crate) async fn handle_show(
    link: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_source(config)?;

    match source.get_object(link).await? {
        Some(record) => {
            let recipe = RecipeRecord::from_record(&record);
            println!(
                "{}\n",
                style(recipe.title.as_deref().unwrap_or(link)).bold()
            );
            super::print_record(&record);
        }
        None => println!("recipe {link} not found"),
    }

    Ok(())
}
