//! REST-backed repository source (GitHub API).

mod client;
mod error;
pub mod repo;

pub use client::{GitHubSource, DEFAULT_ORG, GITHUB_API_BASE};
pub use error::GitHubError;
