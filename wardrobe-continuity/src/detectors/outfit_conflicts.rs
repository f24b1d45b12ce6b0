// Character-outfit conflict detector
//
// A character can only wear one outfit at a time. Within a scene bucket,
// every entry for the same character must reference the same outfit id.
//
// Algorithm:
// 1. Sub-group bucket entries by character id (entries with no character skipped)
// 2. For each sub-group of two or more entries, collect distinct outfit ids
// 3. More than one distinct outfit → one multiple_outfits issue per (scene, character)

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use tracing::debug;
use wardrobe_common::CharacterRef;

use super::{display_name, distinct_outfits, Detector, ScanInput};
use crate::adapter::TimelineEntry;
use crate::grouping::SceneBucket;
use crate::types::{ConflictIssue, OutfitConflictDetails};

/// Flags characters wearing more than one outfit in a single scene
#[derive(Debug, Clone, Copy, Default)]
pub struct OutfitConflictDetector;

impl Detector for OutfitConflictDetector {
    fn name(&self) -> &'static str {
        "outfit_conflicts"
    }

    fn detect(&self, input: &ScanInput) -> Vec<ConflictIssue> {
        let mut issues = Vec::new();

        for bucket in input.index.buckets() {
            for (character, members) in group_by_character(input, bucket) {
                if members.len() < 2 {
                    continue;
                }
                if let Some(issue) = check_character(bucket, character, &members) {
                    issues.push(issue);
                }
            }
        }

        debug!("{}: {} issue(s)", self.name(), issues.len());
        issues
    }
}

/// Character sub-groups of a bucket, in first-seen character order
fn group_by_character<'a>(
    input: &'a ScanInput,
    bucket: &'a SceneBucket,
) -> Vec<(&'a CharacterRef, Vec<&'a TimelineEntry>)> {
    let mut groups: Vec<(&CharacterRef, Vec<&TimelineEntry>)> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for entry in input.bucket_entries(bucket) {
        let Some(character) = &entry.character else {
            continue;
        };
        match slots.entry(character.id.as_str()) {
            Entry::Occupied(slot) => groups[*slot.get()].1.push(entry),
            Entry::Vacant(slot) => {
                slot.insert(groups.len());
                groups.push((character, vec![entry]));
            }
        }
    }

    groups
}

fn check_character(
    bucket: &SceneBucket,
    character: &CharacterRef,
    members: &[&TimelineEntry],
) -> Option<ConflictIssue> {
    let outfits = distinct_outfits(members.iter().copied());
    if outfits.len() < 2 {
        return None;
    }

    let message = format!(
        "{} appears to wear {} different outfits in {}",
        display_name(&character.name, &character.id),
        outfits.len(),
        bucket.key.describe()
    );

    let details = OutfitConflictDetails {
        character_id: character.id.clone(),
        character_name: character.name.clone(),
        chapter: bucket.key.chapter.clone(),
        scene: bucket.key.scene.clone(),
        outfit_ids: outfits.iter().map(|o| o.id.clone()).collect(),
        outfit_names: outfits.iter().map(|o| o.name.clone()).collect(),
        entry_ids: members.iter().map(|e| e.id.clone()).collect(),
    };

    Some(ConflictIssue::multiple_outfits(message, details))
}
