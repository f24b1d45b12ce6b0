//! Timeline record models
//!
//! These mirror the hydrated records the wardrobe tracker exports: every
//! timeline entry arrives with its character, outfit and clothing item
//! summaries already joined in. Any reference may be absent.

use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::Result;

/// Character summary embedded in a timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharacterRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// Clothing item reference inside an outfit
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemRef {
    #[serde(alias = "id", alias = "_id")]
    pub item_id: String,
    #[serde(default, alias = "name", skip_serializing_if = "Option::is_none")]
    pub item_name: Option<String>,
}

/// Outfit summary embedded in a timeline entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutfitRef {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    /// Ordered item list composing the outfit
    #[serde(default)]
    pub items: Vec<ItemRef>,
}

/// Timeline entry as fetched from the data store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTimelineEntry {
    #[serde(alias = "_id")]
    pub id: String,
    #[serde(default, alias = "character", skip_serializing_if = "Option::is_none")]
    pub character_ref: Option<CharacterRef>,
    #[serde(default, alias = "outfit", skip_serializing_if = "Option::is_none")]
    pub outfit_ref: Option<OutfitRef>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chapter: Option<String>,
    /// Absent scene means "unspecified", still part of the chapter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scene: Option<String>,
}

impl CharacterRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl ItemRef {
    pub fn new(item_id: impl Into<String>, item_name: Option<&str>) -> Self {
        Self {
            item_id: item_id.into(),
            item_name: item_name.map(str::to_string),
        }
    }
}

impl OutfitRef {
    pub fn new(id: impl Into<String>, name: impl Into<String>, items: Vec<ItemRef>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            items,
        }
    }
}

impl RawTimelineEntry {
    /// Create an entry with no references; use the `with_*` builders to fill it in
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            character_ref: None,
            outfit_ref: None,
            chapter: None,
            scene: None,
        }
    }

    pub fn with_character(mut self, character: CharacterRef) -> Self {
        self.character_ref = Some(character);
        self
    }

    pub fn with_outfit(mut self, outfit: OutfitRef) -> Self {
        self.outfit_ref = Some(outfit);
        self
    }

    pub fn with_chapter(mut self, chapter: impl Into<String>) -> Self {
        self.chapter = Some(chapter.into());
        self
    }

    pub fn with_scene(mut self, scene: impl Into<String>) -> Self {
        self.scene = Some(scene.into());
        self
    }
}

/// Parse a JSON array of timeline records
pub fn parse_timeline(json: &str) -> Result<Vec<RawTimelineEntry>> {
    Ok(serde_json::from_str(json)?)
}

/// Read a JSON array of timeline records from any reader (file, stdin)
pub fn read_timeline<R: Read>(reader: R) -> Result<Vec<RawTimelineEntry>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Load a timeline export from disk
///
/// Failing to open the file is an `Error::Io`; a file that opens but does
/// not hold a timeline array is an `Error::Json`.
pub fn load_timeline(path: &Path) -> Result<Vec<RawTimelineEntry>> {
    let file = File::open(path)?;
    read_timeline(BufReader::new(file))
}
