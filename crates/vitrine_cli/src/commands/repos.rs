//! Repository browsing commands (REST-backed).

use console::style;
use vitrine::github::repo::RepositoryRecord;
use vitrine::{AdminSource, GitHubSource, ListRequest};

use crate::config::Config;

pub(crate) fn build_source(config: &Config) -> GitHubSource {
    GitHubSource::with_base_url(&config.github.api_url, &config.github.org)
}

pub(crate) async fn handle_list(
    page: u32,
    per_page: Option<u32>,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_source(config);
    let request = ListRequest::new(page, per_page.unwrap_or(config.list.per_page));

    let result = source.list_page(&request).await?;

    println!(
        "{} repositories\n",
        style(source.org()).bold()
    );
    super::print_page(&source, &result, request.page);

    if result.total.is_none() && result.items.is_empty() {
        println!(
            "{}",
            style("The repository API rate limit is exhausted; try again later.").yellow()
        );
    } else if result.total.is_some() {
        println!(
            "{}",
            style("The total is the organization-wide public repo count.").dim()
        );
    }

    Ok(())
}

pub(crate) async fn handle_show(
    full_name: &str,
    config: &Config,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = build_source(config);

    match source.get_object(full_name).await? {
        Some(record) => {
            let repo = RepositoryRecord::from_record(&record);
            println!(
                "{}\n",
                style(repo.full_name.as_deref().unwrap_or(full_name)).bold()
            );
            super::print_record(&record);
        }
        None => println!("repository {full_name} not found"),
    }

    Ok(())
}
