// Continuity detectors
//
// Each detector is an independent pass over the same read-only scan input.
// Detectors never see each other's output; the report module merges them.
//
// Contract: input is a ScanInput (normalized entries + scene index),
//           output is Vec<ConflictIssue> in detection order

use std::collections::HashSet;
use std::sync::Arc;

use wardrobe_common::{OutfitRef, RawTimelineEntry};

use crate::adapter::{normalize, TimelineEntry};
use crate::grouping::{SceneBucket, SceneIndex};
use crate::types::ConflictIssue;

pub mod integrity;         // Missing chapter / outfit / character
pub mod outfit_conflicts;  // One character, several outfits, one scene
pub mod shared_items;      // One item, several outfits, one scene

pub use integrity::IntegrityScanner;
pub use outfit_conflicts::OutfitConflictDetector;
pub use shared_items::SharedItemDetector;

/// Normalized entries plus the scene index built over them
#[derive(Debug, Clone, Default)]
pub struct ScanInput {
    pub entries: Vec<TimelineEntry>,
    pub index: SceneIndex,
}

impl ScanInput {
    /// Normalize raw records and build the scene index once
    pub fn new(raw: &[RawTimelineEntry]) -> Self {
        Self::from_entries(normalize(raw))
    }

    pub fn from_entries(entries: Vec<TimelineEntry>) -> Self {
        let index = SceneIndex::build(&entries);
        Self { entries, index }
    }

    pub fn bucket_entries<'a>(
        &'a self,
        bucket: &'a SceneBucket,
    ) -> impl Iterator<Item = &'a TimelineEntry> + 'a {
        bucket.iter(&self.entries)
    }
}

/// A single continuity rule
///
/// Implementations must be pure: the same input always yields the same
/// issues in the same order.
pub trait Detector: Send + Sync {
    /// Detector name for logging
    fn name(&self) -> &'static str;

    /// Run the rule over the whole scan input
    fn detect(&self, input: &ScanInput) -> Vec<ConflictIssue>;
}

/// Detectors in report detection order
pub fn standard_detectors() -> Vec<Arc<dyn Detector>> {
    vec![
        Arc::new(OutfitConflictDetector),
        Arc::new(SharedItemDetector),
        Arc::new(IntegrityScanner),
    ]
}

/// Distinct outfits referenced by `entries`, first-seen order by id
pub(crate) fn distinct_outfits<'a, I>(entries: I) -> Vec<&'a OutfitRef>
where
    I: IntoIterator<Item = &'a TimelineEntry>,
{
    let mut seen: HashSet<&str> = HashSet::new();
    let mut outfits = Vec::new();

    for entry in entries {
        if let Some(outfit) = &entry.outfit {
            if seen.insert(outfit.id.as_str()) {
                outfits.push(outfit);
            }
        }
    }

    outfits
}

/// Display name, falling back to the id when the name is blank
pub(crate) fn display_name<'a>(name: &'a str, id: &'a str) -> &'a str {
    if name.trim().is_empty() {
        id
    } else {
        name
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wardrobe_common::ItemRef;

    #[test]
    fn test_distinct_outfits_first_seen() {
        let raw = vec![
            RawTimelineEntry::new("e1").with_outfit(OutfitRef::new("B", "b", vec![])),
            RawTimelineEntry::new("e2"),
            RawTimelineEntry::new("e3").with_outfit(OutfitRef::new("A", "a", vec![])),
            RawTimelineEntry::new("e4")
                .with_outfit(OutfitRef::new("B", "b", vec![ItemRef::new("x", None)])),
        ];
        let entries = normalize(&raw);

        let ids: Vec<&str> = distinct_outfits(&entries).iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["B", "A"]);
    }

    #[test]
    fn test_display_name_fallback() {
        assert_eq!(display_name("Alice", "c1"), "Alice");
        assert_eq!(display_name(" ", "c1"), "c1");
    }

    #[test]
    fn test_standard_detector_order() {
        let names: Vec<&str> = standard_detectors().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["outfit_conflicts", "shared_items", "integrity"]);
    }
}
