//! Test Helper Utilities
//!
//! Fixture builders shared by the continuity integration tests

#![allow(dead_code)]

use wardrobe_common::{CharacterRef, ItemRef, OutfitRef, RawTimelineEntry};
use wardrobe_continuity::{ConflictIssue, IssueDetails, IssueType};

pub fn character(id: &str) -> CharacterRef {
    CharacterRef::new(id, id)
}

pub fn outfit(id: &str, items: &[&str]) -> OutfitRef {
    OutfitRef::new(
        id,
        format!("Outfit {}", id),
        items.iter().map(|i| ItemRef::new(*i, None)).collect(),
    )
}

/// Complete assignment: character wears outfit in chapter/scene
pub fn assignment(
    id: &str,
    character_id: &str,
    outfit: OutfitRef,
    chapter: &str,
    scene: Option<&str>,
) -> RawTimelineEntry {
    let mut entry = RawTimelineEntry::new(id)
        .with_character(character(character_id))
        .with_outfit(outfit)
        .with_chapter(chapter);
    entry.scene = scene.map(str::to_string);
    entry
}

pub fn count_type(issues: &[ConflictIssue], issue_type: IssueType) -> usize {
    issues.iter().filter(|i| i.issue_type == issue_type).count()
}

pub fn outfit_ids(issue: &ConflictIssue) -> Vec<String> {
    match &issue.details {
        IssueDetails::MultipleOutfits(d) => d.outfit_ids.clone(),
        IssueDetails::ItemConflict(d) => d.outfit_ids.clone(),
        IssueDetails::MissingData(_) => Vec::new(),
    }
}

/// A mixed timeline exercising every detector
pub fn mixed_timeline() -> Vec<RawTimelineEntry> {
    let gown = outfit("gown", &["gloves", "tiara", "heels"]);
    let armor = outfit("armor", &["helmet", "boots"]);
    let travel = outfit("travel", &["boots", "cloak"]);
    let court = outfit("court", &["gloves", "cloak"]);

    let mut no_outfit = RawTimelineEntry::new("e7")
        .with_character(character("bob"))
        .with_chapter("2");
    no_outfit.scene = Some("1".to_string());

    vec![
        assignment("e1", "alice", gown.clone(), "1", Some("1")),
        assignment("e2", "alice", armor.clone(), "1", Some("1")),
        assignment("e3", "bob", travel.clone(), "1", Some("1")),
        assignment("e4", "carol", court.clone(), "1", None),
        assignment("e5", "alice", gown.clone(), "1", None),
        assignment("e6", "alice", gown, "2", Some("1")),
        no_outfit,
        RawTimelineEntry::new("e8").with_outfit(armor).with_chapter("2"),
        RawTimelineEntry::new("e9").with_character(character("carol")).with_outfit(court),
        RawTimelineEntry::new("e10"),
        assignment("e11", "bob", travel, "3", Some("4")),
    ]
}
