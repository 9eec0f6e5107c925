//! Single-clause prerequisite parsing
//!
//! A clause is one sentence of a prerequisite paragraph, e.g.
//! `"Credit or concurrent registration in one of MATH 231, MATH 241"`.
//! Parsing never fails: the worst case is an `Unclassified` relation with no
//! participants.

use coursegraph_core::{CourseIdentifier, PrerequisiteRelation};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::classifier::classify;
use crate::section::LABEL;

/// "Same as ECE 374" cross-listing notes
static SAME_AS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)same as \w+ \d+").expect("same-as pattern is valid"));

static LEADING_SEE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*see\b").expect("see pattern is valid"));

/// Some departments write "credit or concurrent registration in X is required"
static IS_REQUIRED: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)is required").expect("is-required pattern is valid"));

/// Commas and the whole words "or" / "and"
static SEPARATOR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\s*,\s*|\s*\bor\b\s*|\s*\band\b\s*").expect("separator pattern is valid")
});

/// A parsed clause together with what was dropped from it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedClause {
    /// The relation that was recognized
    pub relation: PrerequisiteRelation,

    /// Tokens of the course list that were not course identifiers
    pub rejected_tokens: Vec<String>,
}

/// Parses individual prerequisite clauses
pub struct ClauseParser;

impl ClauseParser {
    /// Parse a clause into a relation
    pub fn parse(clause: &str) -> PrerequisiteRelation {
        Self::parse_detailed(clause).relation
    }

    /// Parse a clause, keeping the rejected tokens for diagnostics
    pub fn parse_detailed(clause: &str) -> ParsedClause {
        let cleaned = Self::clean(clause);
        let kind = classify(&cleaned);

        let course_list = match kind.phrase() {
            "" => cleaned.clone(),
            phrase => cleaned.replacen(phrase, "", 1),
        };

        let mut participants = Vec::new();
        let mut rejected_tokens = Vec::new();

        for token in Self::tokenize(&course_list) {
            match CourseIdentifier::parse(token) {
                Some(id) => participants.push(id),
                // "in engineering" after "senior standing required" is not a lost course
                None if kind.is_restriction() => {}
                None => rejected_tokens.push(token.to_string()),
            }
        }

        tracing::trace!(
            clause = %cleaned,
            kind = ?kind,
            participants = participants.len(),
            rejected = rejected_tokens.len(),
            "parsed prerequisite clause"
        );

        ParsedClause {
            relation: PrerequisiteRelation::new(kind, participants),
            rejected_tokens,
        }
    }

    /// Strip boilerplate, trim, and lower-case a clause
    pub fn clean(clause: &str) -> String {
        let text = SAME_AS.replace_all(clause, "");
        let text = LEADING_SEE.replace(&text, "");
        let text = text.replace('.', "");
        let text = LABEL.replace_all(&text, "");
        let text = IS_REQUIRED.replace_all(&text, "");

        text.trim().to_lowercase()
    }

    /// Split a course list on commas, "or" and "and"
    fn tokenize(course_list: &str) -> impl Iterator<Item = &str> {
        SEPARATOR
            .split(course_list)
            .map(str::trim)
            .filter(|token| !token.is_empty())
    }
}
