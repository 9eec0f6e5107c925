//! Mock catalog source for testing
//!
//! Returns predefined catalog entries without touching the network. Useful
//! for record-builder and pipeline tests, demos, and simulating failures.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use coursegraph_catalog::{CatalogSource, MockCatalogBuilder};
//! use coursegraph_core::CourseIdentifier;
//!
//! let catalog = MockCatalogBuilder::new()
//!     .with_course("CS", 225, "Data Structures", "Prerequisite: CS 173.")
//!     .with_course("CS", 173, "Discrete Structures", "")
//!     .build();
//!
//! let doc = catalog.fetch_document(&CourseIdentifier::new("CS", 225)).await?;
//! ```

use coursegraph_core::CourseIdentifier;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::adapter::{CatalogSource, FetchError};
use crate::document::CatalogDocument;

/// Mock catalog source for testing
///
/// Unknown courses return `FetchError::CourseNotFound`, like a 404 from the
/// real catalog. Clones share their entries and fetch counter.
#[derive(Clone, Default)]
pub struct MockCatalog {
    /// Predefined entries by course
    documents: Arc<RwLock<HashMap<CourseIdentifier, CatalogDocument>>>,

    /// Errors to return for specific courses
    errors: Arc<RwLock<HashMap<CourseIdentifier, FetchError>>>,

    /// Number of `fetch_document` calls
    fetches: Arc<AtomicUsize>,

    /// Simulated latency (milliseconds)
    latency_ms: u64,
}

impl MockCatalog {
    /// Create a new mock catalog with no entries
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the entry for a course
    pub async fn add_document(&self, course: CourseIdentifier, document: CatalogDocument) {
        self.documents.write().await.insert(course, document);
    }

    /// Add an entry from label and section-information text
    ///
    /// Empty strings become absent fields.
    pub async fn add_course(&self, course: CourseIdentifier, label: &str, section_information: &str) {
        self.add_document(course, document_from(label, section_information)).await;
    }

    /// Configure an error to be returned for a specific course
    pub async fn add_error(&self, course: CourseIdentifier, error: FetchError) {
        self.errors.write().await.insert(course, error);
    }

    /// Configure simulated latency for every fetch
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Number of fetches served so far, successful or not
    pub fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    /// Check if an entry exists for a course
    pub async fn has_document(&self, course: &CourseIdentifier) -> bool {
        self.documents.read().await.contains_key(course)
    }

    async fn simulate_latency(&self) {
        if self.latency_ms > 0 {
            tokio::time::sleep(std::time::Duration::from_millis(self.latency_ms)).await;
        }
    }
}

fn document_from(label: &str, section_information: &str) -> CatalogDocument {
    let non_empty = |s: &str| if s.trim().is_empty() { None } else { Some(s.to_string()) };
    CatalogDocument {
        section_information: non_empty(section_information),
        label: non_empty(label),
    }
}

#[async_trait::async_trait]
impl CatalogSource for MockCatalog {
    fn name(&self) -> &'static str {
        "Mock"
    }

    async fn fetch_document(&self, course: &CourseIdentifier) -> Result<CatalogDocument, FetchError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.simulate_latency().await;

        // Check for configured errors first
        if let Some(error) = self.errors.read().await.get(course) {
            return Err(error.clone());
        }

        self.documents
            .read()
            .await
            .get(course)
            .cloned()
            .ok_or_else(|| FetchError::CourseNotFound(course.spaced()))
    }
}

/// Builder for creating a MockCatalog without `.await`
///
/// ```rust,ignore
/// let catalog = MockCatalogBuilder::new()
///     .with_course("CS", 374, "", "See ECE 374.")
///     .with_error("CS", 999, FetchError::Timeout("slow".into()))
///     .build();
/// ```
#[derive(Default)]
pub struct MockCatalogBuilder {
    documents: HashMap<CourseIdentifier, CatalogDocument>,
    errors: HashMap<CourseIdentifier, FetchError>,
    latency_ms: u64,
}

impl MockCatalogBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry from label and section-information text
    pub fn with_course(mut self, department: &str, number: u32, label: &str, section_information: &str) -> Self {
        self.documents.insert(
            CourseIdentifier::new(department, number),
            document_from(label, section_information),
        );
        self
    }

    /// Add an error for a course
    pub fn with_error(mut self, department: &str, number: u32, error: FetchError) -> Self {
        self.errors.insert(CourseIdentifier::new(department, number), error);
        self
    }

    /// Set simulated latency
    pub fn with_latency(mut self, latency_ms: u64) -> Self {
        self.latency_ms = latency_ms;
        self
    }

    /// Build the mock catalog
    pub fn build(self) -> MockCatalog {
        MockCatalog {
            documents: Arc::new(RwLock::new(self.documents)),
            errors: Arc::new(RwLock::new(self.errors)),
            fetches: Arc::new(AtomicUsize::new(0)),
            latency_ms: self.latency_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_added_documents() {
        let catalog = MockCatalog::new();
        let cs225 = CourseIdentifier::new("CS", 225);
        catalog.add_course(cs225.clone(), "Data Structures", "Prerequisite: CS 173.").await;

        let doc = catalog.fetch_document(&cs225).await.unwrap();
        assert_eq!(doc.label.as_deref(), Some("Data Structures"));
        assert_eq!(doc.section_information.as_deref(), Some("Prerequisite: CS 173."));
        assert!(catalog.has_document(&cs225).await);
    }

    #[tokio::test]
    async fn unknown_course_is_not_found() {
        let catalog = MockCatalog::new();
        let err = catalog.fetch_document(&CourseIdentifier::new("CS", 999)).await.unwrap_err();
        assert_eq!(err, FetchError::CourseNotFound("CS 999".to_string()));
    }

    #[tokio::test]
    async fn configured_error_wins() {
        let catalog = MockCatalogBuilder::new()
            .with_course("CS", 225, "Data Structures", "")
            .with_error("CS", 225, FetchError::Timeout("simulated".to_string()))
            .build();

        let err = catalog.fetch_document(&CourseIdentifier::new("CS", 225)).await.unwrap_err();
        assert!(matches!(err, FetchError::Timeout(_)));
    }

    #[tokio::test]
    async fn fetches_are_counted_across_clones() {
        let catalog = MockCatalogBuilder::new().with_course("CS", 173, "", "").build();
        let clone = catalog.clone();

        let _ = catalog.fetch_document(&CourseIdentifier::new("CS", 173)).await;
        let _ = clone.fetch_document(&CourseIdentifier::new("CS", 174)).await;

        assert_eq!(catalog.fetch_count(), 2);
    }
}
