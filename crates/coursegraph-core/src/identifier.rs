//! Course identifiers (department + number)

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifies a course within a catalog, e.g. `CS 225`
///
/// This is the "partial" form of a course: it carries no fetched data.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CourseIdentifier {
    /// Department code, upper-cased (e.g. "CS")
    pub department: String,

    /// Course number (e.g. 225)
    pub number: u32,
}

impl CourseIdentifier {
    /// Create a new identifier, upper-casing the department
    pub fn new(department: impl Into<String>, number: u32) -> Self {
        Self {
            department: department.into().to_uppercase(),
            number,
        }
    }

    /// Parse an identifier out of an already isolated token
    ///
    /// Whitespace is removed first, so `"CS225"`, `"CS 225"` and `"cs 225"` are
    /// all the same course. The number is the first run of digits; the
    /// department is the alphabetic characters in front of it. Trailing text
    /// after the number is ignored.
    ///
    /// Returns `None` when the token has no digits at all.
    pub fn parse(token: &str) -> Option<Self> {
        let compact: String = token
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        let digits_start = compact.find(|c: char| c.is_ascii_digit())?;
        let rest = &compact[digits_start..];
        let digits_end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());

        let number = rest[..digits_end].parse::<u32>().ok()?;
        let department: String = compact[..digits_start]
            .chars()
            .filter(|c| c.is_alphabetic())
            .collect();

        Some(Self { department, number })
    }

    /// Render as `DEPT NUM`, the form the catalog uses in prose
    pub fn spaced(&self) -> String {
        format!("{} {}", self.department, self.number)
    }
}

impl fmt::Display for CourseIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.department, self.number)
    }
}
