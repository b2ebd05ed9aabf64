//! Configuration file support for vitrine.
//!
//! Configuration is loaded with the following precedence (highest to lowest):
//! 1. CLI flags
//! 2. Environment variables (prefixed with `VITRINE_`, e.g., `VITRINE_GITHUB_ORG`)
//! 3. Config file (~/.config/vitrine/config.toml or ./vitrine.toml)
//! 4. Built-in defaults
//!
//! Example config file:
//! ```toml
//! [github]
//! org = "django"
//! api_url = "https://api.github.com"  # optional, this is the default
//!
//! [clickhouse]
//! url = "http://localhost:8123"
//! database = "default"
//! table = "recipes"
//! user = "default"      # or use VITRINE_CLICKHOUSE_USER env var
//! password = "..."      # or use VITRINE_CLICKHOUSE_PASSWORD env var
//!
//! [list]
//! per_page = 10
//! ```

use std::path::PathBuf;

use config::{Config as ConfigBuilder, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::Deserialize;
use vitrine::DEFAULT_PER_PAGE;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// GitHub configuration.
    pub github: GitHubConfig,
    /// ClickHouse configuration.
    pub clickhouse: ClickHouseConfig,
    /// List rendering options.
    pub list: ListConfig,
}

/// GitHub configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct GitHubConfig {
    /// Organization whose repositories are browsed.
    pub org: String,
    /// API base URL. Override for GitHub Enterprise or tests.
    pub api_url: String,
}

impl Default for GitHubConfig {
    fn default() -> Self {
        Self {
            org: vitrine::github::DEFAULT_ORG.to_string(),
            api_url: vitrine::github::GITHUB_API_BASE.to_string(),
        }
    }
}

/// ClickHouse configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ClickHouseConfig {
    /// HTTP endpoint URL.
    pub url: String,
    /// Database to query.
    pub database: String,
    /// Recipe table name.
    pub table: String,
    /// Username, sent via the X-ClickHouse-User header.
    /// Can also be set via VITRINE_CLICKHOUSE_USER environment variable.
    pub user: Option<String>,
    /// Password, sent via the X-ClickHouse-Key header.
    /// Can also be set via VITRINE_CLICKHOUSE_PASSWORD environment variable.
    pub password: Option<String>,
}

impl Default for ClickHouseConfig {
    fn default() -> Self {
        Self {
            url: "http://localhost:8123".to_string(),
            database: "default".to_string(),
            table: "recipes".to_string(),
            user: None,
            password: None,
        }
    }
}

/// List rendering options.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ListConfig {
    /// Rows per page.
    pub per_page: u32,
}

impl Default for ListConfig {
    fn default() -> Self {
        Self {
            per_page: DEFAULT_PER_PAGE,
        }
    }
}

impl Config {
    /// Load configuration using the config crate's layered approach.
    ///
    /// Sources are loaded in order (later sources override earlier):
    /// 1. Built-in defaults
    /// 2. XDG config file (~/.config/vitrine/config.toml)
    /// 3. Local config file (./vitrine.toml)
    /// 4. Environment variables with VITRINE_ prefix
    pub fn load() -> Self {
        let mut builder = ConfigBuilder::builder();

        if let Some(proj_dirs) = ProjectDirs::from("", "", "vitrine") {
            let xdg_config = proj_dirs.config_dir().join("config.toml");
            if xdg_config.exists() {
                tracing::debug!("Loading config from {:?}", xdg_config);
                builder = builder.add_source(
                    File::from(xdg_config)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        let local_config = PathBuf::from("vitrine.toml");
        if local_config.exists() {
            tracing::debug!("Loading config from ./vitrine.toml");
            builder = builder.add_source(
                File::from(local_config)
                    .format(FileFormat::Toml)
                    .required(false),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("VITRINE")
                .separator("_")
                .try_parsing(true),
        );

        match builder.build() {
            Ok(settings) => match settings.try_deserialize::<Config>() {
                Ok(config) => config,
                Err(e) => {
                    tracing::warn!("Failed to deserialize config: {}", e);
                    Config::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to build config: {}", e);
                Config::default()
            }
        }
    }
}
