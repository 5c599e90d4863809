//! Persisted JSON format
//!
//! A top-level object with one property per entry key. Each value is an
//! object holding `name`, `username` and `password` strings. Output uses
//! two-space indentation and keeps non-ASCII text unescaped.

use crate::domain::entries::Entries;
use crate::domain::entry::Entry;
use indexmap::IndexMap;
use tracing::warn;

/// Result of decoding a persisted source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub entries: Entries,
    /// Number of entries present in the source document
    pub read: usize,
}

/// Encode the full collection
pub fn encode(entries: &Entries) -> serde_json::Result<Vec<u8>> {
    serde_json::to_vec_pretty(entries)
}

/// Decode a persisted document.
///
/// Entries are re-keyed by their lowercased display name; a document key that
/// disagrees with its entry is logged and replaced.
pub fn decode(bytes: &[u8]) -> serde_json::Result<Decoded> {
    let raw: IndexMap<String, Entry> = serde_json::from_slice(bytes)?;
    let read = raw.len();

    let mut entries = Entries::new();
    for (key, entry) in raw {
        if key != entry.key() {
            warn!(
                "Entry stored under '{}' re-keyed to '{}'",
                key,
                entry.key()
            );
        }
        entries.insert(entry);
    }

    Ok(Decoded { entries, read })
}
