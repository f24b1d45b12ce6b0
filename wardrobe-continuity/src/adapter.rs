//! Input model adapter
//!
//! Converts hydrated timeline records into the engine's entry type. The
//! conversion is one-to-one and order preserving; absent references stay
//! absent so the detectors can report on them.

use wardrobe_common::{CharacterRef, OutfitRef, RawTimelineEntry};

use crate::grouping::SceneKey;

/// Normalized timeline entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub id: String,
    pub character: Option<CharacterRef>,
    pub outfit: Option<OutfitRef>,
    /// Verbatim, never empty
    pub chapter: Option<String>,
    /// Verbatim, never empty; `None` is the unspecified scene
    pub scene: Option<String>,
}

impl TimelineEntry {
    /// Grouping key, or `None` when the entry has no chapter
    pub fn scene_key(&self) -> Option<SceneKey> {
        self.chapter
            .as_ref()
            .map(|chapter| SceneKey::new(chapter.clone(), self.scene.clone()))
    }

    pub fn character_name(&self) -> Option<&str> {
        self.character.as_ref().map(|c| c.name.as_str())
    }
}

impl From<&RawTimelineEntry> for TimelineEntry {
    fn from(raw: &RawTimelineEntry) -> Self {
        Self {
            id: raw.id.clone(),
            character: raw.character_ref.clone(),
            outfit: raw.outfit_ref.clone(),
            chapter: clean_label(raw.chapter.as_deref()),
            scene: clean_label(raw.scene.as_deref()),
        }
    }
}

/// Normalize raw records, preserving cardinality and order
pub fn normalize(raw: &[RawTimelineEntry]) -> Vec<TimelineEntry> {
    raw.iter().map(TimelineEntry::from).collect()
}

/// An empty label carries no placement information; any other label is
/// kept byte for byte so distinct strings never share a scene
fn clean_label(label: Option<&str>) -> Option<String> {
    label.filter(|s| !s.is_empty()).map(str::to_string)
}
