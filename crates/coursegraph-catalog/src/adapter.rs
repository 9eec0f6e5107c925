//! Catalog source trait for fetching course entries

use coursegraph_core::CourseIdentifier;

use crate::document::CatalogDocument;

/// Errors that can occur when fetching a catalog entry
///
/// Every variant means "no record for this course"; none of them abort a run.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Course not found: {0}")]
    CourseNotFound(String),

    #[error("HTTP {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Network error: {0}")]
    NetworkError(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Trait for anything that can return the catalog entry of a course
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Get the source name (e.g., "HTTP", "Mock")
    fn name(&self) -> &'static str;

    /// Fetch and parse the catalog entry for a course
    async fn fetch_document(&self, course: &CourseIdentifier) -> Result<CatalogDocument, FetchError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_messages() {
        let err = FetchError::HttpStatus {
            status: 503,
            url: "https://example.test/CS/225.xml".to_string(),
        };
        assert_eq!(err.to_string(), "HTTP 503 from https://example.test/CS/225.xml");
        assert_eq!(
            FetchError::CourseNotFound("CS 999".to_string()).to_string(),
            "Course not found: CS 999"
        );
    }
}
