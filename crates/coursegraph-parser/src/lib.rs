//! Prerequisite text parsing
//!
//! Turns the free-text "Prerequisite:" paragraphs of catalog entries into
//! typed relations. Matching is heuristic: anything that cannot be read as a
//! course identifier is dropped and reported, never treated as an error.
//!
//! - `classifier` - phrase-based relation classification
//! - `clause` - cleaning and tokenizing a single clause
//! - `section` - splitting a description into clauses and filtering noise
//! - `redirect` - "see X" cross-references

pub mod classifier;
pub mod clause;
pub mod section;
pub mod redirect;

pub use classifier::classify;
pub use clause::{ClauseParser, ParsedClause};
pub use section::{extract_prerequisites, split_clauses, FilteredClause, NoiseFilter, PrerequisiteSection};
pub use redirect::redirect_target;
