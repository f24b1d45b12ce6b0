// Shared-item conflict detector
//
// A physical clothing item can only be worn in one outfit at a time. Any
// item that belongs to two or more outfits assigned within the same scene
// is flagged, regardless of which characters wear those outfits.
//
// Algorithm:
// 1. Membership: per scene bucket, distinct outfits referenced; each outfit's
//    item set comes from the per-check ItemSetCache (one resolution per id)
// 2. Intersection: per bucket with 2+ outfits, item id → [outfits using it];
//    every item used by 2+ outfits yields one item_conflict issue
//
// Cost is linear in entries plus items of the resolved outfits; no pairwise
// outfit comparison.

use std::collections::hash_map::Entry;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use tracing::debug;
use wardrobe_common::OutfitRef;

use super::{distinct_outfits, Detector, ScanInput};
use crate::grouping::SceneBucket;
use crate::item_sets::{ItemSet, ItemSetCache};
use crate::types::{ConflictIssue, ItemConflictDetails};

/// Flags clothing items used by several outfits within one scene
#[derive(Debug, Clone, Copy, Default)]
pub struct SharedItemDetector;

/// Outfits of one scene bucket with their resolved item sets
struct SceneMembership<'a> {
    bucket: &'a SceneBucket,
    outfits: Vec<(&'a OutfitRef, Arc<ItemSet>)>,
}

/// Outfits sharing one item within a scene
struct ItemUsage<'a> {
    item_id: &'a str,
    item_name: Option<&'a str>,
    /// Positions into `SceneMembership::outfits`
    outfits: Vec<usize>,
}

impl SharedItemDetector {
    /// Run detection with a caller-supplied cache
    ///
    /// `detect` uses a fresh cache per call; this entry point lets callers
    /// observe how many item sets were resolved.
    pub fn detect_with_cache(
        &self,
        input: &ScanInput,
        cache: &mut ItemSetCache,
    ) -> Vec<ConflictIssue> {
        // Phase 1: outfit membership per scene
        let memberships: Vec<SceneMembership> = input
            .index
            .buckets()
            .iter()
            .map(|bucket| SceneMembership {
                bucket,
                outfits: distinct_outfits(input.bucket_entries(bucket))
                    .into_iter()
                    .map(|outfit| (outfit, cache.resolve(outfit)))
                    .collect(),
            })
            .collect();

        // Phase 2: cross-outfit intersection per scene
        let mut issues = Vec::new();
        for membership in &memberships {
            if membership.outfits.len() < 2 {
                continue;
            }
            for usage in item_usage(membership) {
                if usage.outfits.len() > 1 {
                    issues.push(build_issue(input, membership, &usage));
                }
            }
        }

        debug!(
            "{}: {} issue(s), {} outfit item set(s) resolved",
            self.name(),
            issues.len(),
            cache.resolutions()
        );
        issues
    }
}

impl Detector for SharedItemDetector {
    fn name(&self) -> &'static str {
        "shared_items"
    }

    fn detect(&self, input: &ScanInput) -> Vec<ConflictIssue> {
        let mut cache = ItemSetCache::new();
        self.detect_with_cache(input, &mut cache)
    }
}

/// Item → outfits map for one scene, in first-seen item order
fn item_usage<'a>(membership: &'a SceneMembership<'a>) -> Vec<ItemUsage<'a>> {
    let mut usages: Vec<ItemUsage> = Vec::new();
    let mut slots: HashMap<&str, usize> = HashMap::new();

    for (pos, (_, set)) in membership.outfits.iter().enumerate() {
        for item in set.items() {
            let name = item.item_name.as_deref();
            match slots.entry(item.item_id.as_str()) {
                Entry::Occupied(slot) => {
                    let usage = &mut usages[*slot.get()];
                    usage.outfits.push(pos);
                    if usage.item_name.is_none() {
                        usage.item_name = name;
                    }
                }
                Entry::Vacant(slot) => {
                    slot.insert(usages.len());
                    usages.push(ItemUsage {
                        item_id: item.item_id.as_str(),
                        item_name: name,
                        outfits: vec![pos],
                    });
                }
            }
        }
    }

    usages
}

fn build_issue(
    input: &ScanInput,
    membership: &SceneMembership,
    usage: &ItemUsage,
) -> ConflictIssue {
    let outfits: Vec<&OutfitRef> = usage
        .outfits
        .iter()
        .map(|&pos| membership.outfits[pos].0)
        .collect();
    let implicated: HashSet<&str> = outfits.iter().map(|o| o.id.as_str()).collect();

    let entry_ids = input
        .bucket_entries(membership.bucket)
        .filter(|e| {
            e.outfit
                .as_ref()
                .is_some_and(|o| implicated.contains(o.id.as_str()))
        })
        .map(|e| e.id.clone())
        .collect();

    let key = &membership.bucket.key;
    let message = format!(
        "Item '{}' is used by {} outfits in {}",
        usage.item_name.unwrap_or(usage.item_id),
        outfits.len(),
        key.describe()
    );

    let details = ItemConflictDetails {
        chapter: key.chapter.clone(),
        scene: key.scene.clone(),
        item_id: usage.item_id.to_string(),
        item_name: usage.item_name.map(str::to_string),
        outfit_ids: outfits.iter().map(|o| o.id.clone()).collect(),
        outfit_names: outfits.iter().map(|o| o.name.clone()).collect(),
        entry_ids,
    };

    ConflictIssue::item_conflict(message, details)
}
