//! Issue types produced by the continuity detectors

use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Severity and Issue Classification
// ============================================================================

/// Fixed priority tier of an issue, used for sorting and display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    High,   // Contradictory wardrobe state or unusable record
    Medium, // Overlapping item usage within a scene
    Low,    // Record cannot be placed on the timeline
}

impl Severity {
    /// Sort rank: high=0, medium=1, low=2
    pub fn rank(self) -> u8 {
        match self {
            Severity::High => 0,
            Severity::Medium => 1,
            Severity::Low => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Severity::High => "high",
            Severity::Medium => "medium",
            Severity::Low => "low",
        }
    }

    /// True when `self` is at least as severe as `threshold`
    pub fn is_at_least(self, threshold: Severity) -> bool {
        self.rank() <= threshold.rank()
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueType {
    MultipleOutfits,
    ItemConflict,
    MissingData,
}

impl IssueType {
    pub fn as_str(self) -> &'static str {
        match self {
            IssueType::MultipleOutfits => "multiple_outfits",
            IssueType::ItemConflict => "item_conflict",
            IssueType::MissingData => "missing_data",
        }
    }
}

impl fmt::Display for IssueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which field a `missing_data` issue is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingField {
    Chapter,
    Outfit,
    Character,
}

impl MissingField {
    /// A record without a chapter is only unplaceable; a record without an
    /// outfit or character cannot be checked at all
    pub fn severity(self) -> Severity {
        match self {
            MissingField::Chapter => Severity::Low,
            MissingField::Outfit | MissingField::Character => Severity::High,
        }
    }
}

// ============================================================================
// Issue Details
// ============================================================================

/// A character assigned more than one distinct outfit in one scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OutfitConflictDetails {
    pub character_id: String,
    pub character_name: String,
    pub chapter: String,
    /// Absent for the unspecified scene
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    /// Distinct outfit ids in first-seen order
    pub outfit_ids: Vec<String>,
    /// Names parallel to `outfit_ids`
    pub outfit_names: Vec<String>,
    pub entry_ids: Vec<String>,
}

/// A clothing item shared by several outfits assigned in one scene
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemConflictDetails {
    pub chapter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
    pub item_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
    pub outfit_ids: Vec<String>,
    pub outfit_names: Vec<String>,
    /// Entries in the scene that reference one of the implicated outfits
    pub entry_ids: Vec<String>,
}

/// A timeline entry lacking data needed for continuity checks
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MissingDataDetails {
    pub field: MissingField,
    pub entry_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

/// Type-specific detail payload
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum IssueDetails {
    MultipleOutfits(OutfitConflictDetails),
    ItemConflict(ItemConflictDetails),
    MissingData(MissingDataDetails),
}

// ============================================================================
// Conflict Issue
// ============================================================================

/// A single reportable continuity finding
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConflictIssue {
    #[serde(rename = "type")]
    pub issue_type: IssueType,
    pub severity: Severity,
    pub message: String,
    pub details: IssueDetails,
}

impl ConflictIssue {
    pub fn multiple_outfits(message: String, details: OutfitConflictDetails) -> Self {
        Self {
            issue_type: IssueType::MultipleOutfits,
            severity: Severity::High,
            message,
            details: IssueDetails::MultipleOutfits(details),
        }
    }

    pub fn item_conflict(message: String, details: ItemConflictDetails) -> Self {
        Self {
            issue_type: IssueType::ItemConflict,
            severity: Severity::Medium,
            message,
            details: IssueDetails::ItemConflict(details),
        }
    }

    pub fn missing_data(message: String, details: MissingDataDetails) -> Self {
        Self {
            issue_type: IssueType::MissingData,
            severity: details.field.severity(),
            message,
            details: IssueDetails::MissingData(details),
        }
    }

    /// Entry ids implicated by this issue
    pub fn entry_ids(&self) -> Vec<&str> {
        match &self.details {
            IssueDetails::MultipleOutfits(d) => d.entry_ids.iter().map(String::as_str).collect(),
            IssueDetails::ItemConflict(d) => d.entry_ids.iter().map(String::as_str).collect(),
            IssueDetails::MissingData(d) => vec![d.entry_id.as_str()],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_severity_rank_order() {
        assert!(Severity::High.rank() < Severity::Medium.rank());
        assert!(Severity::Medium.rank() < Severity::Low.rank());
    }

    #[test]
    fn test_severity_threshold() {
        assert!(Severity::High.is_at_least(Severity::Medium));
        assert!(Severity::Medium.is_at_least(Severity::Medium));
        assert!(!Severity::Low.is_at_least(Severity::Medium));
    }

    #[test]
    fn test_missing_field_severity() {
        assert_eq!(MissingField::Chapter.severity(), Severity::Low);
        assert_eq!(MissingField::Outfit.severity(), Severity::High);
        assert_eq!(MissingField::Character.severity(), Severity::High);
    }

    #[test]
    fn test_issue_serialization_shape() {
        let issue = ConflictIssue::missing_data(
            "Timeline entry missing chapter information".to_string(),
            MissingDataDetails {
                field: MissingField::Chapter,
                entry_id: "e1".to_string(),
                character_name: Some("Alice".to_string()),
                chapter: None,
                scene: None,
            },
        );

        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["type"], "missing_data");
        assert_eq!(value["severity"], "low");
        assert_eq!(value["details"]["field"], "chapter");
        assert_eq!(value["details"]["entryId"], "e1");
        assert_eq!(value["details"]["characterName"], "Alice");
        assert!(value["details"].get("chapter").is_none());
    }

    #[test]
    fn test_outfit_conflict_omits_unspecified_scene() {
        let issue = ConflictIssue::multiple_outfits(
            "Alice appears to wear 2 different outfits in Chapter 1".to_string(),
            OutfitConflictDetails {
                character_id: "c1".to_string(),
                character_name: "Alice".to_string(),
                chapter: "1".to_string(),
                scene: None,
                outfit_ids: vec!["A".to_string(), "B".to_string()],
                outfit_names: vec!["Gown".to_string(), "Armor".to_string()],
                entry_ids: vec!["e1".to_string(), "e2".to_string()],
            },
        );

        let value = serde_json::to_value(&issue).unwrap();
        assert_eq!(value["severity"], "high");
        assert_eq!(value["details"]["outfitIds"], serde_json::json!(["A", "B"]));
        assert!(value["details"].get("scene").is_none());
        assert_eq!(issue.entry_ids(), vec!["e1", "e2"]);
    }
}
