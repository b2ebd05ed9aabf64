//! Vitrine CLI - browse remote admin data sources from the terminal.

mod commands;
mod config;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::config::Config;

#[derive(Parser)]
#[command(name = "vitrine")]
#[command(version)]
#[command(about = "Read-only browser over remote data backends")]
#[command(
    long_about = "Vitrine adapts two remote backends to one list/detail browsing \
contract: a GitHub organization's repositories (REST) and a ClickHouse recipe \
table (SQL over HTTP). Everything is read-only; nothing is stored locally."
)]
#[command(after_long_help = r#"EXAMPLES
    List the first page of repositories:
        $ vitrine repos list

    Show one repository:
        $ vitrine repos show django/django

    Search recipes and sort by title:
        $ vitrine recipes list --search chicken --sort 0

    Filter recipes by ingredient:
        $ vitrine recipes list --ingredient garlic

    Generate shell completions:
        $ vitrine completions bash > ~/.local/share/bash-completion/completions/vitrine

CONFIGURATION
    Vitrine reads configuration from:
      1. ~/.config/vitrine/config.toml (or $XDG_CONFIG_HOME/vitrine/config.toml)
      2. ./vitrine.toml
      3. Environment variables (VITRINE_* prefix)
      4. .env file in current directory

ENVIRONMENT VARIABLES
    VITRINE_GITHUB_ORG            Organization to browse (default: django)
    VITRINE_CLICKHOUSE_URL        ClickHouse HTTP endpoint (default: http://localhost:8123)
    VITRINE_CLICKHOUSE_USER       ClickHouse username
    VITRINE_CLICKHOUSE_PASSWORD   ClickHouse password
"#)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the organization's repositories (REST-backed)
    Repos {
        #[command(subcommand)]
        action: ReposAction,
    },
    /// Browse the recipe table (ClickHouse-backed)
    Recipes {
        #[command(subcommand)]
        action: RecipesAction,
    },
    /// Describe the available sources, their fields and permissions
    Sources,
    /// Generate shell completion scripts
    Completions {
        /// Shell to generate completions for
        shell: clap_complete::Shell,
    },
}

#[derive(Subcommand)]
enum ReposAction {
    /// List one page of repositories
    List {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Rows per page (default from config or 10)
        #[arg(long)]
        per_page: Option<u32>,
    },
    /// Show one repository by full name (owner/name)
    Show {
        /// Repository full name, e.g. django/django
        full_name: String,
    },
}

#[derive(Subcommand)]
enum RecipesAction {
    /// List one page of recipes
    List {
        /// 1-based page number
        #[arg(short, long, default_value_t = 1)]
        page: u32,

        /// Rows per page (default from config or 10)
        #[arg(long)]
        per_page: Option<u32>,

        /// Title search text
        #[arg(short, long)]
        search: Option<String>,

        /// Only recipes containing this ingredient
        #[arg(short, long)]
        ingredient: Option<String>,

        /// Sort token: dot-separated column indexes, '-' for descending
        /// (e.g. "-2.0"; columns: 0=title, 1=ner_length, 2=directions_length)
        #[arg(long)]
        sort: Option<String>,
    },
    /// Show one recipe by link
    Show {
        /// Recipe link, e.g. www.example.com/r/42
        link: String,
    },
}

fn handle_completions(shell: clap_complete::Shell) {
    use clap::CommandFactory;

    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "vitrine", &mut std::io::stdout());
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = Config::load();

    match cli.command {
        Commands::Repos { action } => match action {
            ReposAction::List { page, per_page } => {
                commands::repos::handle_list(page, per_page, &config).await
            }
            ReposAction::Show { full_name } => {
                commands::repos::handle_show(&full_name, &config).await
            }
        },
        Commands::Recipes { action } => match action {
            RecipesAction::List {
                page,
                per_page,
                search,
                ingredient,
                sort,
            } => {
                commands::recipes::handle_list(page, per_page, search, ingredient, sort, &config)
                    .await
            }
            RecipesAction::Show { link } => commands::recipes::handle_show(&link, &config).await,
        },
        Commands::Sources => commands::handle_sources(&config),
        Commands::Completions { shell } => {
            handle_completions(shell);
            Ok(())
        }
    }
}
