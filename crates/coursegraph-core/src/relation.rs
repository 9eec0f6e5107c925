//! Prerequisite relation kinds and parsed relations
//!
//! Every kind owns the phrase that both detects it in catalog prose and
//! renders it back. Adding a kind means adding its phrase in `phrase()` and
//! placing it in `DETECTION_ORDER`.

use serde::{Deserialize, Serialize};
use crate::identifier::CourseIdentifier;

/// How the participants of a prerequisite clause relate to the course
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RelationKind {
    /// "credit or concurrent registration in one of ..."
    CreditOrConcurrentOneOf,

    /// "credit or concurrent enrollment in ..."
    CreditOrConcurrentEnrollment,

    /// "credit or concurrent registration in ..."
    CreditOrConcurrentRegistration,

    /// "one of ..."
    OneOf,

    FreshmanStanding,
    SophomoreStanding,
    JuniorStanding,
    SeniorStanding,

    /// "for majors only"
    MajorsOnly,

    /// Restricted to ECE majors or transfer students with consent
    DepartmentRestricted,

    /// Requires an adequate ALEKS placement score
    PlacementScore,

    /// Conjunctive list ("... and ..."). Tagged only, never resolved.
    AllOf,

    /// Nothing matched; participants are read as a disjunctive list
    Unclassified,
}

impl RelationKind {
    /// Kinds in the order they must be tested against prose.
    ///
    /// Longer phrases come before the phrases they contain.
    /// `Unclassified` is the fallback and is never tested.
    pub const DETECTION_ORDER: &'static [RelationKind] = &[
        Self::CreditOrConcurrentOneOf,
        Self::CreditOrConcurrentEnrollment,
        Self::CreditOrConcurrentRegistration,
        Self::OneOf,
        Self::FreshmanStanding,
        Self::SophomoreStanding,
        Self::JuniorStanding,
        Self::SeniorStanding,
        Self::MajorsOnly,
        Self::DepartmentRestricted,
        Self::PlacementScore,
        Self::AllOf,
    ];

    /// Canonical phrase, removed from a clause to leave its course list
    pub fn phrase(&self) -> &'static str {
        match self {
            Self::CreditOrConcurrentOneOf => "credit or concurrent registration in one of",
            Self::CreditOrConcurrentEnrollment => "credit or concurrent enrollment in",
            Self::CreditOrConcurrentRegistration => "credit or concurrent registration in",
            Self::OneOf => "one of",
            Self::FreshmanStanding => "freshman standing required",
            Self::SophomoreStanding => "sophomore standing required",
            Self::JuniorStanding => "junior standing required",
            Self::SeniorStanding => "senior standing required",
            Self::MajorsOnly => "for majors only",
            Self::DepartmentRestricted => {
                "restricted to computer engineering or electrical engineering majors or transfer students with ece department consent"
            }
            Self::PlacementScore => {
                "an adequate aleks placement score as described at http://mathillinoisedu/aleks/, demonstrating knowledge of topics of"
            }
            Self::AllOf => "all of",
            Self::Unclassified => "",
        }
    }

    /// Substring that detects this kind in a cleaned, lower-cased clause
    ///
    /// Identical to `phrase()` except for `AllOf`, which is detected by a bare
    /// "and" but must not strip that "and" from the course list.
    pub fn marker(&self) -> Option<&'static str> {
        match self {
            Self::AllOf => Some("and"),
            Self::Unclassified => None,
            other => Some(other.phrase()),
        }
    }

    /// True for the "credit or concurrent" kinds, which become corequisite edges
    pub fn is_corequisite(&self) -> bool {
        matches!(
            self,
            Self::CreditOrConcurrentOneOf
                | Self::CreditOrConcurrentEnrollment
                | Self::CreditOrConcurrentRegistration
        )
    }

    /// True for standing, major and placement requirements
    ///
    /// Text left over after their phrase qualifies the requirement; only the
    /// placement kind also names courses.
    pub fn is_restriction(&self) -> bool {
        matches!(
            self,
            Self::FreshmanStanding
                | Self::SophomoreStanding
                | Self::JuniorStanding
                | Self::SeniorStanding
                | Self::MajorsOnly
                | Self::DepartmentRestricted
                | Self::PlacementScore
        )
    }
}

impl std::fmt::Display for RelationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.phrase())
    }
}

/// One parsed clause, e.g. "one of MATH 221, MATH 231"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrerequisiteRelation {
    /// Courses named by the clause, in order of appearance
    pub participants: Vec<CourseIdentifier>,

    /// How the participants relate to the course
    pub kind: RelationKind,
}

impl PrerequisiteRelation {
    /// Create a new relation
    pub fn new(kind: RelationKind, participants: Vec<CourseIdentifier>) -> Self {
        Self { participants, kind }
    }

    /// A relation that names no courses (e.g. "junior standing required")
    pub fn restriction(kind: RelationKind) -> Self {
        Self::new(kind, Vec::new())
    }
}
