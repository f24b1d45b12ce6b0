// Data integrity scanner
//
// Runs over every normalized entry, independent of scene grouping. Each
// missing field produces its own issue, so one entry can yield several.
// Rule order per entry: chapter, outfit, character.

use tracing::debug;

use super::{Detector, ScanInput};
use crate::adapter::TimelineEntry;
use crate::types::{ConflictIssue, MissingDataDetails, MissingField};

pub const MISSING_CHAPTER_MESSAGE: &str = "Timeline entry missing chapter information";
pub const MISSING_OUTFIT_MESSAGE: &str = "Timeline entry missing outfit reference";
pub const MISSING_CHARACTER_MESSAGE: &str = "Timeline entry missing character reference";

/// Flags entries lacking a chapter, outfit or character
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegrityScanner;

impl IntegrityScanner {
    /// Issues for a single entry, in rule order
    pub fn scan_entry(&self, entry: &TimelineEntry) -> Vec<ConflictIssue> {
        let mut issues = Vec::new();
        let character_name = entry.character_name().map(str::to_string);

        if entry.chapter.is_none() {
            issues.push(ConflictIssue::missing_data(
                MISSING_CHAPTER_MESSAGE.to_string(),
                MissingDataDetails {
                    field: MissingField::Chapter,
                    entry_id: entry.id.clone(),
                    character_name: character_name.clone(),
                    chapter: None,
                    scene: None,
                },
            ));
        }

        if entry.outfit.is_none() {
            issues.push(ConflictIssue::missing_data(
                MISSING_OUTFIT_MESSAGE.to_string(),
                MissingDataDetails {
                    field: MissingField::Outfit,
                    entry_id: entry.id.clone(),
                    character_name,
                    chapter: entry.chapter.clone(),
                    scene: entry.scene.clone(),
                },
            ));
        }

        if entry.character.is_none() {
            issues.push(ConflictIssue::missing_data(
                MISSING_CHARACTER_MESSAGE.to_string(),
                MissingDataDetails {
                    field: MissingField::Character,
                    entry_id: entry.id.clone(),
                    character_name: None,
                    chapter: entry.chapter.clone(),
                    scene: entry.scene.clone(),
                },
            ));
        }

        issues
    }
}

impl Detector for IntegrityScanner {
    fn name(&self) -> &'static str {
        "integrity"
    }

    fn detect(&self, input: &ScanInput) -> Vec<ConflictIssue> {
        let issues: Vec<ConflictIssue> = input
            .entries
            .iter()
            .flat_map(|entry| self.scan_entry(entry))
            .collect();

        debug!("{}: {} issue(s)", self.name(), issues.len());
        issues
    }
}
