//! Course catalog access
//!
//! This crate fetches one catalog entry per course and reads the two fields
//! the rest of the system needs: the display label and the free-text
//! section information that carries prerequisites.
//!
//! ## Sources
//!
//! - `HttpCatalog` - the university's XML catalog over HTTPS
//! - `MockCatalog` - in-memory entries for tests and demos
//!
//! ## Example
//!
//! ```rust,ignore
//! use coursegraph_catalog::{CatalogSource, HttpCatalog};
//! use coursegraph_core::{CatalogConfig, CourseIdentifier};
//!
//! let catalog = HttpCatalog::new(&CatalogConfig::default())?;
//! let document = catalog.fetch_document(&CourseIdentifier::new("CS", 225)).await?;
//! println!("{:?}", document.label);
//! ```

pub mod adapter;
pub mod document;
pub mod http;
pub mod mock;

pub use adapter::{CatalogSource, FetchError};
pub use document::CatalogDocument;
pub use http::HttpCatalog;
pub use mock::{MockCatalog, MockCatalogBuilder};
