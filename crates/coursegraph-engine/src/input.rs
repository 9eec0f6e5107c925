//! Operator course list
//!
//! One course per line: `DEPT NUM [annotation]`, e.g. `CS 225 (honors)`.
//! Blank lines and `#` comments are skipped. Anything else that does not
//! start with a course identifier is dropped with a diagnostic.

use coursegraph_core::{AnnotatedCourseInput, CourseIdentifier, Diagnostic, DiagnosticCode, Location};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use std::path::Path;

static LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\s*([A-Za-z]+\s*\d+)(.*)$").expect("course line pattern is valid")
});

/// Parsed course list with the lines that were dropped
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseList {
    /// Courses in input order, each listed once
    pub courses: Vec<AnnotatedCourseInput>,

    /// Malformed and duplicate lines
    pub diagnostics: Vec<Diagnostic>,
}

impl CourseList {
    /// Number of courses
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// Check if no course was listed
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }
}

/// Parse one line of the course list
pub fn parse_line(line: &str) -> Option<AnnotatedCourseInput> {
    let caps = LINE.captures(line)?;
    let identifier = CourseIdentifier::parse(caps.get(1)?.as_str())?;
    let annotation = caps.get(2).map(|m| m.as_str()).unwrap_or("");

    Some(AnnotatedCourseInput::new(identifier).with_annotation(annotation))
}

/// Parse a whole course list
///
/// `source` names the input in diagnostics (usually the file path).
pub fn parse_course_list(text: &str, source: &str) -> CourseList {
    let mut list = CourseList::default();
    let mut seen = HashSet::new();

    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let location = Location::with_line(source, index + 1);

        let Some(input) = parse_line(trimmed) else {
            tracing::debug!(%location, line = trimmed, "skipping unparseable course line");
            list.diagnostics.push(
                Diagnostic::of(DiagnosticCode::InputLineUnparseable, "Line does not start with a course identifier")
                    .with_location(location)
                    .with_dropped(trimmed),
            );
            continue;
        };

        if !seen.insert(input.identifier.clone()) {
            list.diagnostics.push(
                Diagnostic::of(
                    DiagnosticCode::DuplicateInputCourse,
                    format!("{} is already listed; keeping the first line", input.identifier),
                )
                .with_course(input.identifier.clone())
                .with_location(location)
                .with_dropped(trimmed),
            );
            continue;
        }

        list.courses.push(input);
    }

    list
}

/// Read and parse a course list file
pub fn read_course_list(path: &Path) -> std::io::Result<CourseList> {
    let text = std::fs::read_to_string(path)?;
    Ok(parse_course_list(&text, &path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_spaced_and_compact_lines() {
        assert_eq!(
            parse_line("CS 225 (honors)"),
            Some(AnnotatedCourseInput::new(CourseIdentifier::new("CS", 225)).with_annotation("(honors)"))
        );
        assert_eq!(
            parse_line("math231"),
            Some(AnnotatedCourseInput::new(CourseIdentifier::new("MATH", 231)))
        );
    }

    #[test]
    fn annotation_is_kept_verbatim() {
        let input = parse_line("ECE 391   Spring only, \"hard\"").unwrap();
        assert_eq!(input.annotation.as_deref(), Some("Spring only, \"hard\""));
    }

    #[test]
    fn malformed_lines_are_dropped_with_location() {
        let list = parse_course_list("CS 225\nElectives\n\n# core\nCS 173\n", "courses.txt");

        assert_eq!(list.len(), 2);
        assert_eq!(list.diagnostics.len(), 1);

        let diag = &list.diagnostics[0];
        assert_eq!(diag.code, DiagnosticCode::InputLineUnparseable);
        assert_eq!(diag.location, Some(Location::with_line("courses.txt", 2)));
        assert_eq!(diag.dropped.as_deref(), Some("Electives"));
    }

    #[test]
    fn duplicates_keep_first_line() {
        let list = parse_course_list("CS 225 first\ncs225 second\n", "courses.txt");

        assert_eq!(list.len(), 1);
        assert_eq!(list.courses[0].annotation.as_deref(), Some("first"));
        assert_eq!(list.diagnostics[0].code, DiagnosticCode::DuplicateInputCourse);
    }

    #[test]
    fn number_without_department_is_not_a_course_line() {
        assert_eq!(parse_line("225 data structures"), None);
    }
}
