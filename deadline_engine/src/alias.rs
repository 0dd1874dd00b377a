//! Item shorthand table.
//!
//! Take, drop and examine all resolve player-typed item names through the same
//! table, so "mug" means `lucky_mug` everywhere or nowhere.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
pub struct AliasTable {
    entries: BTreeMap<String, String>,
}
impl AliasTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `shorthand` for `canonical`. Shorthand keys are stored lowercased.
    pub fn insert(&mut self, shorthand: &str, canonical: &str) {
        self.entries.insert(shorthand.to_lowercase(), canonical.to_string());
    }

    /// The canonical name for `name`, or `name` itself if it isn't shorthand.
    pub fn canonical<'a>(&'a self, name: &'a str) -> &'a str {
        self.entries
            .get(&name.to_lowercase())
            .map_or(name, String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
impl FromIterator<(String, String)> for AliasTable {
    fn from_iter<T: IntoIterator<Item = (String, String)>>(iter: T) -> Self {
        let mut table = AliasTable::new();
        for (shorthand, canonical) in iter {
            table.insert(&shorthand, &canonical);
        }
        table
    }
}
