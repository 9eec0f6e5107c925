//! CourseGraph Core
//!
//! Core domain model shared by the parser, catalog, and engine crates.
//! Diagnostic codes are part of the report format - never rename them.

pub mod identifier;
pub mod relation;
pub mod record;
pub mod diagnostic;
pub mod report;
pub mod config;

pub use identifier::CourseIdentifier;
pub use relation::{RelationKind, PrerequisiteRelation};
pub use record::{CourseRecord, AnnotatedCourseInput};
pub use diagnostic::{Diagnostic, DiagnosticCode, Severity, Location};
pub use report::{Report, ReportSummary, ReportVersion};
pub use config::{Config, CatalogConfig, ResolutionConfig, FilterConfig, Term, ConfigError};
