//! Course record construction
//!
//! Fetches a course's catalog entry and turns it into a `CourseRecord`.
//! An entry that only says "See X" is followed to X; the record keeps the
//! requested identifier and takes its name and prerequisites from X.

use coursegraph_catalog::{CatalogDocument, CatalogSource, FetchError};
use coursegraph_core::{Config, CourseIdentifier, CourseRecord, Diagnostic, DiagnosticCode};
use coursegraph_parser::{extract_prerequisites, redirect_target, NoiseFilter};
use std::collections::HashMap;
use tokio::sync::RwLock;

/// A built record plus what its text parsing dropped
#[derive(Debug, Clone, PartialEq)]
pub struct BuiltRecord {
    pub record: CourseRecord,
    pub diagnostics: Vec<Diagnostic>,
}

/// Reasons a course yields no record
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum RecordError {
    #[error("Failed to fetch {course}: {source}")]
    Fetch {
        course: CourseIdentifier,
        source: FetchError,
    },

    #[error("Cross-reference cycle: {}", format_chain(.chain))]
    RedirectCycle { chain: Vec<CourseIdentifier> },

    #[error("More than {limit} cross-references followed from {course}")]
    RedirectDepthExceeded {
        course: CourseIdentifier,
        limit: usize,
    },
}

fn format_chain(chain: &[CourseIdentifier]) -> String {
    chain
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl RecordError {
    /// Convert to a diagnostic about the requested course
    pub fn to_diagnostic(&self, requested: &CourseIdentifier) -> Diagnostic {
        let code = match self {
            Self::Fetch { .. } => DiagnosticCode::FetchFailed,
            Self::RedirectCycle { .. } => DiagnosticCode::RedirectCycle,
            Self::RedirectDepthExceeded { .. } => DiagnosticCode::RedirectDepthExceeded,
        };

        Diagnostic::of(code, self.to_string()).with_course(requested.clone())
    }
}

/// Builds course records from a catalog source
///
/// Fetched entries are memoized for the lifetime of the builder, so shared
/// cross-reference targets are only fetched once per run.
pub struct RecordBuilder<'a, S: CatalogSource + ?Sized> {
    source: &'a S,
    filter: NoiseFilter,
    max_redirect_depth: usize,
    documents: RwLock<HashMap<CourseIdentifier, Result<CatalogDocument, FetchError>>>,
}

impl<'a, S: CatalogSource + ?Sized> RecordBuilder<'a, S> {
    /// Create a builder with default filters and redirect limit
    pub fn new(source: &'a S) -> Self {
        Self::from_config(source, &Config::default())
    }

    /// Create a builder from configuration
    pub fn from_config(source: &'a S, config: &Config) -> Self {
        Self {
            source,
            filter: NoiseFilter::from_config(&config.filters),
            max_redirect_depth: config.resolution.max_redirect_depth,
            documents: RwLock::new(HashMap::new()),
        }
    }

    /// Override the maximum number of cross-references followed
    pub fn with_max_redirect_depth(mut self, depth: usize) -> Self {
        self.max_redirect_depth = depth;
        self
    }

    /// Name of the underlying catalog source
    pub fn source_name(&self) -> &'static str {
        self.source.name()
    }

    /// Build the record for a course
    pub async fn build(&self, course: &CourseIdentifier) -> Result<BuiltRecord, RecordError> {
        let mut current = course.clone();
        let mut chain = vec![course.clone()];

        loop {
            let document = self
                .fetch(&current)
                .await
                .map_err(|source| RecordError::Fetch {
                    course: current.clone(),
                    source,
                })?;

            let info = document.section_information.as_deref().unwrap_or("");

            if let Some(target) = redirect_target(info) {
                if chain.contains(&target) {
                    chain.push(target);
                    return Err(RecordError::RedirectCycle { chain });
                }
                if chain.len() > self.max_redirect_depth {
                    return Err(RecordError::RedirectDepthExceeded {
                        course: course.clone(),
                        limit: self.max_redirect_depth,
                    });
                }

                tracing::debug!(from = %current, to = %target, "following cross-reference");
                chain.push(target.clone());
                current = target;
                continue;
            }

            return Ok(self.assemble(course, current, document));
        }
    }

    fn assemble(
        &self,
        requested: &CourseIdentifier,
        resolved: CourseIdentifier,
        document: CatalogDocument,
    ) -> BuiltRecord {
        let info = document.section_information.as_deref().unwrap_or("");
        let section = extract_prerequisites(info, &self.filter);

        let mut diagnostics = Vec::new();
        for filtered in &section.filtered_clauses {
            diagnostics.push(
                Diagnostic::of(
                    DiagnosticCode::ClauseFiltered,
                    format!("Clause matched noise filter '{}'", filtered.pattern),
                )
                .with_course(requested.clone())
                .with_dropped(filtered.clause.clone()),
            );
        }
        for token in &section.rejected_tokens {
            diagnostics.push(
                Diagnostic::of(DiagnosticCode::TokenUnparseable, "Token is not a course identifier")
                    .with_course(requested.clone())
                    .with_dropped(token.clone()),
            );
        }

        let mut record = CourseRecord::new(requested.clone(), document.label.unwrap_or_default())
            .with_relations(section.relations);
        if resolved != *requested {
            record = record.with_resolved_from(resolved);
        }

        tracing::debug!(
            course = %requested,
            relations = record.relations.len(),
            dropped = diagnostics.len(),
            "built course record"
        );

        BuiltRecord { record, diagnostics }
    }

    async fn fetch(&self, course: &CourseIdentifier) -> Result<CatalogDocument, FetchError> {
        if let Some(cached) = self.documents.read().await.get(course) {
            return cached.clone();
        }

        let result = self.source.fetch_document(course).await;
        self.documents
            .write()
            .await
            .insert(course.clone(), result.clone());
        result
    }
}
