//! HTTP catalog source
//!
//! Fetches `{base_url}/{year}/{term}/{DEPT}/{NUM}.xml`, e.g.
//! `https://courses.illinois.edu/cisapp/explorer/catalog/2023/fall/CS/225.xml`.
//!
//! Every request is bounded by the configured timeout. Non-success statuses
//! and transport failures are returned as `FetchError`s; nothing is retried.

use coursegraph_core::{CatalogConfig, CourseIdentifier, Term};
use reqwest::StatusCode;

use crate::adapter::{CatalogSource, FetchError};
use crate::document::CatalogDocument;

/// Catalog source backed by the university's XML catalog
pub struct HttpCatalog {
    client: reqwest::Client,
    base_url: String,
    year: u16,
    term: Term,
}

impl HttpCatalog {
    /// Create a catalog client from the `[catalog]` config section
    pub fn new(config: &CatalogConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.as_str())
            .build()
            .map_err(|e| FetchError::ConfigError(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            year: config.year,
            term: config.term,
        })
    }

    /// URL of a course's catalog entry
    pub fn course_url(&self, course: &CourseIdentifier) -> String {
        format!(
            "{}/{}/{}/{}/{}.xml",
            self.base_url,
            self.year,
            self.term,
            course.department.to_uppercase(),
            course.number
        )
    }
}

fn transport_error(url: &str, err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        FetchError::Timeout(url.to_string())
    } else {
        FetchError::NetworkError(format!("{}: {}", url, err))
    }
}

#[async_trait::async_trait]
impl CatalogSource for HttpCatalog {
    fn name(&self) -> &'static str {
        "HTTP"
    }

    async fn fetch_document(&self, course: &CourseIdentifier) -> Result<CatalogDocument, FetchError> {
        let url = self.course_url(course);
        tracing::debug!(course = %course, url = %url, "fetching catalog entry");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| transport_error(&url, e))?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(FetchError::CourseNotFound(course.spaced()));
        }
        if !status.is_success() {
            return Err(FetchError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await.map_err(|e| transport_error(&url, e))?;
        CatalogDocument::from_xml(&body)
    }
}
