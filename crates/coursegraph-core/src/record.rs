//! Course records and operator-supplied course inputs

use serde::{Deserialize, Serialize};
use crate::identifier::CourseIdentifier;
use crate::relation::PrerequisiteRelation;

/// A course with its fetched name and parsed prerequisites
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// The course that was requested
    pub identifier: CourseIdentifier,

    /// Catalog label (empty if the catalog has none)
    pub display_name: String,

    /// Parsed prerequisite clauses, in catalog order
    pub relations: Vec<PrerequisiteRelation>,

    /// Course whose catalog entry supplied this record, when the requested
    /// entry was a "see X" cross-reference
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_from: Option<CourseIdentifier>,
}

impl CourseRecord {
    /// Create a record with no prerequisites
    pub fn new(identifier: CourseIdentifier, display_name: impl Into<String>) -> Self {
        Self {
            identifier,
            display_name: display_name.into(),
            relations: Vec::new(),
            resolved_from: None,
        }
    }

    /// Set the parsed prerequisite relations
    pub fn with_relations(mut self, relations: Vec<PrerequisiteRelation>) -> Self {
        self.relations = relations;
        self
    }

    /// Mark the record as copied from another course's entry
    pub fn with_resolved_from(mut self, source: CourseIdentifier) -> Self {
        self.resolved_from = Some(source);
        self
    }

    /// Iterate every (prerequisite, relation) pair named by this record
    pub fn prerequisites(&self) -> impl Iterator<Item = (&CourseIdentifier, &PrerequisiteRelation)> {
        self.relations
            .iter()
            .flat_map(|relation| relation.participants.iter().map(move |p| (p, relation)))
    }
}

/// One line of the operator's course list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnnotatedCourseInput {
    /// The listed course
    pub identifier: CourseIdentifier,

    /// Free text after the identifier, appended verbatim to the node label
    pub annotation: Option<String>,
}

impl AnnotatedCourseInput {
    /// Create an input without annotation
    pub fn new(identifier: CourseIdentifier) -> Self {
        Self {
            identifier,
            annotation: None,
        }
    }

    /// Attach an annotation; blank text counts as none
    pub fn with_annotation(mut self, annotation: impl Into<String>) -> Self {
        let annotation = annotation.into();
        let trimmed = annotation.trim();
        self.annotation = if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        };
        self
    }
}
