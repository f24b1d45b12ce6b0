//! Scene grouper
//!
//! Buckets timeline entries by (chapter, scene). Entries without a chapter
//! cannot be placed and are left out of the index entirely.

use std::collections::HashMap;
use std::fmt;

use crate::adapter::TimelineEntry;

/// Placeholder rendered for entries without a scene
pub const UNSPECIFIED_SCENE: &str = "unspecified";

/// Composite (chapter, scene) grouping key
///
/// Compared structurally, so a chapter label containing the display
/// separator cannot collide with another key.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SceneKey {
    pub chapter: String,
    /// `None` is the unspecified scene of the chapter
    pub scene: Option<String>,
}

impl SceneKey {
    pub fn new(chapter: impl Into<String>, scene: Option<String>) -> Self {
        Self {
            chapter: chapter.into(),
            scene,
        }
    }

    /// Human-readable location for issue messages
    pub fn describe(&self) -> String {
        match &self.scene {
            Some(scene) => format!("Chapter {}, Scene {}", self.chapter, scene),
            None => format!("Chapter {}", self.chapter),
        }
    }
}

impl fmt::Display for SceneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}-{}",
            self.chapter,
            self.scene.as_deref().unwrap_or(UNSPECIFIED_SCENE)
        )
    }
}

/// Entries sharing one scene key, as positions into the entry list
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SceneBucket {
    pub key: SceneKey,
    /// Ascending, i.e. input order
    pub entries: Vec<usize>,
}

impl SceneBucket {
    pub fn iter<'a>(
        &'a self,
        entries: &'a [TimelineEntry],
    ) -> impl Iterator<Item = &'a TimelineEntry> + 'a {
        self.entries.iter().map(move |&pos| &entries[pos])
    }
}

/// Scene key → bucket index, built once per check
///
/// Buckets are kept in first-seen key order so every pass over the index is
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct SceneIndex {
    buckets: Vec<SceneBucket>,
    lookup: HashMap<SceneKey, usize>,
}

impl SceneIndex {
    pub fn build(entries: &[TimelineEntry]) -> Self {
        let mut index = SceneIndex::default();

        for (pos, entry) in entries.iter().enumerate() {
            let Some(key) = entry.scene_key() else {
                continue;
            };

            match index.lookup.get(&key) {
                Some(&slot) => index.buckets[slot].entries.push(pos),
                None => {
                    index.lookup.insert(key.clone(), index.buckets.len());
                    index.buckets.push(SceneBucket {
                        key,
                        entries: vec![pos],
                    });
                }
            }
        }

        index
    }

    pub fn buckets(&self) -> &[SceneBucket] {
        &self.buckets
    }

    #[cfg(test)]
    pub fn get(&self, key: &SceneKey) -> Option<&SceneBucket> {
        self.lookup.get(key).map(|&slot| &self.buckets[slot])
    }

    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Number of entries placed in some bucket
    pub fn grouped_entries(&self) -> usize {
        self.buckets.iter().map(|b| b.entries.len()).sum()
    }
}
