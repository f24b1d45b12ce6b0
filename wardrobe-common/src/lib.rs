//! # Wardrobe Common Library
//!
//! Shared code for the wardrobe continuity tools including:
//! - Timeline record models as exported by the wardrobe tracker
//! - Common error and result types
//! - Configuration loading and resolution

pub mod config;
pub mod error;
pub mod models;

pub use error::{Error, Result};
pub use models::{CharacterRef, ItemRef, OutfitRef, RawTimelineEntry};
