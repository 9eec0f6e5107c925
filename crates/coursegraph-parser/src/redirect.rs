//! "See X" cross-references
//!
//! Cross-listed courses often have a catalog entry that only says
//! "See CS 374." Such an entry is an alias; the real data lives under the
//! referenced course.

use coursegraph_core::CourseIdentifier;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::section::LABEL;

static SEE_TARGET: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bsee\s+([a-z]+\s*\d+)").expect("see-target pattern is valid")
});

/// Course a description redirects to, if it is a cross-reference
///
/// "See class schedule" is an instruction, not a cross-reference. Only text
/// ahead of the prerequisite paragraph is considered, so a "see" inside the
/// prerequisites does not turn a real course into an alias.
pub fn redirect_target(description: &str) -> Option<CourseIdentifier> {
    if description.to_lowercase().contains("see class schedule") {
        return None;
    }

    // "Prerequisite: See CS 225." names a prerequisite, not an alias
    let head = match LABEL.find(description) {
        Some(label) => &description[..label.start()],
        None => description,
    };

    let caps = SEE_TARGET.captures(head)?;
    CourseIdentifier::parse(caps.get(1)?.as_str())
}
