//! Relation classification by ordered phrase matching

use coursegraph_core::RelationKind;

/// Classify a cleaned, lower-cased clause
///
/// Returns the first kind in `RelationKind::DETECTION_ORDER` whose marker
/// occurs in `text`, or `Unclassified`.
pub fn classify(text: &str) -> RelationKind {
    RelationKind::DETECTION_ORDER
        .iter()
        .copied()
        .find(|kind| kind.marker().is_some_and(|marker| text.contains(marker)))
        .unwrap_or(RelationKind::Unclassified)
}
