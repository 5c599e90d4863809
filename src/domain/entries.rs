//! Case-insensitive keyed collection of entries

use crate::domain::entry::{entry_key, Entry};
use indexmap::IndexMap;
use serde::Serialize;

/// Entries keyed by lowercased display name, in insertion order.
///
/// Overwriting an existing key keeps its original position; removal shifts
/// later entries up so listing order stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Entries {
    map: IndexMap<String, Entry>,
}

impl Entries {
    pub fn new() -> Self {
        Entries::default()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Insert under the entry's key, returning the entry it replaced
    pub fn insert(&mut self, entry: Entry) -> Option<Entry> {
        self.map.insert(entry.key(), entry)
    }

    pub fn get(&self, display_name: &str) -> Option<&Entry> {
        self.map.get(&entry_key(display_name))
    }

    pub fn remove(&mut self, display_name: &str) -> Option<Entry> {
        self.map.shift_remove(&entry_key(display_name))
    }

    /// Entries whose name or username contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Entry> {
        let term_lower = term.to_lowercase();
        self.map
            .values()
            .filter(|entry| entry.matches(&term_lower))
            .collect()
    }

    /// Merge `other` into this collection; colliding keys take `other`'s entry
    pub fn merge(&mut self, other: Entries) {
        for (key, entry) in other.map {
            self.map.insert(key, entry);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entry> {
        self.map.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.map.keys().map(String::as_str)
    }
}

impl FromIterator<Entry> for Entries {
    fn from_iter<I: IntoIterator<Item = Entry>>(iter: I) -> Self {
        let mut entries = Entries::new();
        for entry in iter {
            entries.insert(entry);
        }
        entries
    }
}
