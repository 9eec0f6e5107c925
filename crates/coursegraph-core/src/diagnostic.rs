//! Diagnostics for everything a run skips or drops
//!
//! Code strings appear in saved reports; never rename one.

use serde::{Deserialize, Serialize};
use crate::identifier::CourseIdentifier;

/// What was dropped, and at which stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DiagnosticCode {
    // Course list
    /// A line of the course list does not start with a course identifier
    InputLineUnparseable,

    /// The same course is listed more than once; later lines are ignored
    DuplicateInputCourse,

    // Prerequisite text
    /// A token of a prerequisite clause is not a course identifier
    TokenUnparseable,

    /// A prerequisite clause was discarded as administrative boilerplate
    ClauseFiltered,

    // Catalog
    /// The catalog entry could not be fetched or read
    FetchFailed,

    /// "see X" cross-references loop back on themselves
    RedirectCycle,

    /// "see X" cross-references go deeper than the configured limit
    RedirectDepthExceeded,

    // Graph
    /// A prerequisite lies outside the listed courses and was not drawn
    EdgeOutOfScope,

    /// The emitted graph contains a cycle
    PrerequisiteCycle,
}

impl DiagnosticCode {
    /// Stable string written to reports
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::InputLineUnparseable => "INPUT_LINE_UNPARSEABLE",
            Self::DuplicateInputCourse => "DUPLICATE_INPUT_COURSE",
            Self::TokenUnparseable => "TOKEN_UNPARSEABLE",
            Self::ClauseFiltered => "CLAUSE_FILTERED",
            Self::FetchFailed => "FETCH_FAILED",
            Self::RedirectCycle => "REDIRECT_CYCLE",
            Self::RedirectDepthExceeded => "REDIRECT_DEPTH_EXCEEDED",
            Self::EdgeOutOfScope => "EDGE_OUT_OF_SCOPE",
            Self::PrerequisiteCycle => "PREREQUISITE_CYCLE",
        }
    }

    /// Severity used when the code is reported without an override
    pub fn default_severity(&self) -> Severity {
        match self {
            Self::TokenUnparseable | Self::ClauseFiltered | Self::EdgeOutOfScope => Severity::Info,
            Self::InputLineUnparseable
            | Self::DuplicateInputCourse
            | Self::FetchFailed
            | Self::RedirectCycle
            | Self::RedirectDepthExceeded
            | Self::PrerequisiteCycle => Severity::Warn,
        }
    }
}

impl std::fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Diagnostic severity level
///
/// Nothing a run drops is an error: failures that stop a run are returned
/// as `Err` instead of being reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Expected drop (noise words, out-of-scope prerequisites)
    Info,

    /// A listed course lost data or was skipped
    Warn,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
        }
    }
}

/// Line of the course list a diagnostic refers to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    /// Path as given on the command line
    pub file: String,

    /// 1-based; absent when the whole file is meant
    pub line: Option<usize>,
}

impl Location {
    pub fn new(file: impl Into<String>) -> Self {
        Self { file: file.into(), line: None }
    }

    pub fn with_line(file: impl Into<String>, line: usize) -> Self {
        Self { file: file.into(), line: Some(line) }
    }
}

impl std::fmt::Display for Location {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}", self.file, line),
            None => write!(f, "{}", self.file),
        }
    }
}

/// One dropped item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub code: DiagnosticCode,
    pub severity: Severity,
    pub message: String,

    /// Course being processed when the diagnostic was raised
    pub course: Option<CourseIdentifier>,

    /// Set for course-list diagnostics only
    pub location: Option<Location>,

    /// The dropped text, verbatim
    pub dropped: Option<String>,
}

impl Diagnostic {
    /// Diagnostic with an explicit severity
    pub fn new(code: DiagnosticCode, severity: Severity, message: impl Into<String>) -> Self {
        Self {
            code,
            severity,
            message: message.into(),
            course: None,
            location: None,
            dropped: None,
        }
    }

    /// Create a diagnostic at the code's default severity
    pub fn of(code: DiagnosticCode, message: impl Into<String>) -> Self {
        Self::new(code, code.default_severity(), message)
    }

    pub fn with_course(mut self, course: CourseIdentifier) -> Self {
        self.course = Some(course);
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_dropped(mut self, dropped: impl Into<String>) -> Self {
        self.dropped = Some(dropped.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_render_as_stable_strings() {
        assert_eq!(DiagnosticCode::InputLineUnparseable.as_str(), "INPUT_LINE_UNPARSEABLE");
        assert_eq!(DiagnosticCode::FetchFailed.as_str(), "FETCH_FAILED");
        assert_eq!(DiagnosticCode::EdgeOutOfScope.to_string(), "EDGE_OUT_OF_SCOPE");
    }

    #[test]
    fn default_severity_separates_noise_from_loss() {
        assert_eq!(DiagnosticCode::TokenUnparseable.default_severity(), Severity::Info);
        assert_eq!(DiagnosticCode::FetchFailed.default_severity(), Severity::Warn);
    }

    #[test]
    fn course_list_diagnostic_json() {
        let diag = Diagnostic::of(DiagnosticCode::InputLineUnparseable, "No course identifier")
            .with_location(Location::with_line("courses.txt", 4))
            .with_dropped("honors section");

        let json = serde_json::to_string(&diag).unwrap();
        assert!(json.contains("INPUT_LINE_UNPARSEABLE"));
        assert!(json.contains("\"warn\""));
        assert!(json.contains("honors section"));
    }

    #[test]
    fn location_display() {
        assert_eq!(Location::with_line("courses.txt", 3).to_string(), "courses.txt:3");
        assert_eq!(Location::new("courses.txt").to_string(), "courses.txt");
    }
}
