//! Prerequisite paragraph extraction
//!
//! Finds the "Prerequisite:" paragraph of a catalog description, splits it
//! into clauses, drops administrative boilerplate, and parses what is left.

use coursegraph_core::{FilterConfig, PrerequisiteRelation};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::clause::ClauseParser;

/// "Prerequisite:" / "Prerequisites:" heading of the prerequisite paragraph
pub(crate) static LABEL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)prerequisites?:").expect("label pattern is valid"));

/// "and" joining a course list to a new relation phrase
static CONNECTIVE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\band\s+(credit or concurrent (?:registration|enrollment) in|one of)\b")
        .expect("connective pattern is valid")
});

/// Substring filters for clauses that are not prerequisites
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoiseFilter {
    patterns: Vec<String>,
}

impl NoiseFilter {
    /// Create a filter from case-insensitive substrings
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            patterns: patterns
                .into_iter()
                .map(|p| p.as_ref().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Build a filter from the `[filters]` config section
    pub fn from_config(config: &FilterConfig) -> Self {
        Self::new(&config.noise)
    }

    /// Return the first pattern the clause contains, if any
    pub fn matched(&self, clause: &str) -> Option<&str> {
        let lowered = clause.to_lowercase();
        self.patterns
            .iter()
            .find(|pattern| lowered.contains(pattern.as_str()))
            .map(String::as_str)
    }
}

impl Default for NoiseFilter {
    fn default() -> Self {
        Self::from_config(&FilterConfig::default())
    }
}

/// A clause dropped by the noise filter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilteredClause {
    pub clause: String,
    pub pattern: String,
}

/// Everything read from one prerequisite paragraph
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PrerequisiteSection {
    /// Parsed clauses, in order
    pub relations: Vec<PrerequisiteRelation>,

    /// Clauses dropped as boilerplate
    pub filtered_clauses: Vec<FilteredClause>,

    /// Tokens that were not course identifiers
    pub rejected_tokens: Vec<String>,
}

/// Split a prerequisite paragraph into clauses
///
/// Sentences end at `.` or `;`. Inside a sentence, "and" followed by a
/// relation phrase ("credit or concurrent ...", "one of") starts a new clause
/// when the text before it names a course.
pub fn split_clauses(section: &str) -> Vec<String> {
    section
        .split(|c| c == '.' || c == ';')
        .map(str::trim)
        .filter(|sentence| !sentence.is_empty())
        .flat_map(split_connectives)
        .collect()
}

fn split_connectives(sentence: &str) -> Vec<String> {
    let mut clauses = Vec::new();
    let mut start = 0;
    let mut search_from = 0;

    while let Some(caps) = CONNECTIVE.captures_at(sentence, search_from) {
        let (Some(whole), Some(phrase)) = (caps.get(0), caps.get(1)) else {
            break;
        };

        let head = sentence[start..whole.start()]
            .trim()
            .trim_end_matches(',')
            .trim_end();

        if head.chars().any(|c| c.is_ascii_digit()) {
            clauses.push(head.to_string());
            start = phrase.start();
        }

        search_from = phrase.start();
    }

    let tail = sentence[start..].trim();
    if !tail.is_empty() {
        clauses.push(tail.to_string());
    }

    clauses
}

/// Extract and parse the prerequisite paragraph of a description
///
/// A description without a "Prerequisite:" label has no prerequisites.
pub fn extract_prerequisites(description: &str, filter: &NoiseFilter) -> PrerequisiteSection {
    let mut section = PrerequisiteSection::default();

    let Some(label) = LABEL.find(description) else {
        return section;
    };

    let paragraph = description[label.end()..].to_lowercase();

    for clause in split_clauses(&paragraph) {
        if let Some(pattern) = filter.matched(&clause) {
            tracing::trace!(clause = %clause, pattern, "dropping boilerplate clause");
            section.filtered_clauses.push(FilteredClause {
                pattern: pattern.to_string(),
                clause,
            });
            continue;
        }

        let parsed = ClauseParser::parse_detailed(&clause);
        section.relations.push(parsed.relation);
        section.rejected_tokens.extend(parsed.rejected_tokens);
    }

    section
}
