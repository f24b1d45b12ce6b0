//! Outfit item-set resolution
//!
//! Each outfit id is resolved to its set of distinct clothing items at most
//! once per check. The cache lives only as long as one check.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::trace;
use wardrobe_common::{ItemRef, OutfitRef};

/// Distinct items composing one outfit, in listed order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemSet {
    items: Vec<ItemRef>,
}

impl ItemSet {
    /// Collapse duplicate item ids; the first listing wins but a later
    /// listing may supply a missing name
    pub fn from_items(listed: &[ItemRef]) -> Self {
        let mut items: Vec<ItemRef> = Vec::with_capacity(listed.len());
        let mut seen: HashMap<&str, usize> = HashMap::with_capacity(listed.len());

        for item in listed {
            if item.item_id.is_empty() {
                continue;
            }
            match seen.get(item.item_id.as_str()) {
                Some(&slot) => {
                    if items[slot].item_name.is_none() {
                        items[slot].item_name = item.item_name.clone();
                    }
                }
                None => {
                    seen.insert(item.item_id.as_str(), items.len());
                    items.push(item.clone());
                }
            }
        }

        Self { items }
    }

    pub fn items(&self) -> &[ItemRef] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, item_id: &str) -> bool {
        self.items.iter().any(|i| i.item_id == item_id)
    }
}

/// Per-check memo of outfit id → item set
#[derive(Debug, Default)]
pub struct ItemSetCache {
    sets: HashMap<String, Arc<ItemSet>>,
    resolutions: usize,
}

impl ItemSetCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item set for `outfit`, computed on first request for its id
    ///
    /// Later references to the same id reuse the first resolution even if
    /// their embedded item list differs.
    pub fn resolve(&mut self, outfit: &OutfitRef) -> Arc<ItemSet> {
        if let Some(set) = self.sets.get(&outfit.id) {
            return Arc::clone(set);
        }

        let set = Arc::new(ItemSet::from_items(&outfit.items));
        self.resolutions += 1;
        trace!("Resolved outfit {} to {} item(s)", outfit.id, set.len());
        self.sets.insert(outfit.id.clone(), Arc::clone(&set));
        set
    }

    /// Previously resolved set, if any
    #[cfg(test)]
    pub fn get(&self, outfit_id: &str) -> Option<&ItemSet> {
        self.sets.get(outfit_id).map(Arc::as_ref)
    }

    /// How many item sets were actually computed
    pub fn resolutions(&self) -> usize {
        self.resolutions
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }
}
