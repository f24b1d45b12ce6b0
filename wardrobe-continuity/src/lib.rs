//! # Wardrobe Continuity Engine
//!
//! Scans a timeline of character/outfit assignments and reports continuity
//! conflicts:
//! - a character wearing more than one outfit in the same scene
//! - a clothing item appearing in several outfits worn in the same scene
//! - entries missing the chapter, outfit or character needed for checking
//!
//! The caller supplies hydrated timeline records (see
//! [`wardrobe_common::RawTimelineEntry`]); the engine performs no I/O and
//! never fails on incomplete data.
//!
//! ```
//! use wardrobe_common::{CharacterRef, OutfitRef, RawTimelineEntry};
//! use wardrobe_continuity::check_continuity;
//!
//! let alice = CharacterRef::new("c1", "Alice");
//! let entries = vec![
//!     RawTimelineEntry::new("e1")
//!         .with_character(alice.clone())
//!         .with_outfit(OutfitRef::new("A", "Gown", vec![]))
//!         .with_chapter("5")
//!         .with_scene("2"),
//!     RawTimelineEntry::new("e2")
//!         .with_character(alice)
//!         .with_outfit(OutfitRef::new("B", "Armor", vec![]))
//!         .with_chapter("5")
//!         .with_scene("2"),
//! ];
//!
//! let report = check_continuity(&entries);
//! assert_eq!(report.summary.by_type.multiple_outfits, 1);
//! ```

pub mod adapter;
pub mod detectors;
pub mod engine;
pub mod grouping;
pub mod item_sets;
pub mod report;
pub mod types;

pub use engine::{check_continuity, ContinuityEngine};
pub use grouping::SceneKey;
pub use report::{ConsistencyReport, ReportSummary, TypeCounts};
pub use types::{ConflictIssue, IssueDetails, IssueType, MissingField, Severity};
