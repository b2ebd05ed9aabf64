//! Backend-agnostic contract for admin data sources.
//!
//! This module defines the `AdminSource` trait that lets the admin UI's
//! list/detail machinery run against backends that are not the local
//! database. Each source declares a fixed field whitelist and sortable
//! column list, answers one page per call, and is read-only by design.
//!
//! # Example
//!
//! ```ignore
//! use vitrine::source::{AdminSource, ListRequest};
//!
//! async fn render_page<S: AdminSource>(source: &S) -> Result<(), vitrine::SourceError> {
//!     let page = source.list_page(&ListRequest::default()).await?;
//!     for record in page.items {
//!         println!("{}", record.display(source.field_list()[0]));
//!     }
//!     Ok(())
//! }
//! ```

mod errors;
mod types;

pub use errors::{Result, SourceError};
pub use types::{AdminSource, ListPage, ListRequest, Permissions, DEFAULT_PER_PAGE};
