//! Credential entry model

use serde::{Deserialize, Serialize};

/// One stored credential record.
///
/// Serialized with the field names `name`, `username` and `password` so that
/// existing data files stay readable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    #[serde(rename = "name")]
    display_name: String,
    username: String,
    #[serde(rename = "password")]
    secret: String,
}

impl Entry {
    pub fn new(
        display_name: impl Into<String>,
        username: impl Into<String>,
        secret: impl Into<String>,
    ) -> Self {
        Entry {
            display_name: display_name.into(),
            username: username.into(),
            secret: secret.into(),
        }
    }

    /// Name as originally entered (case preserved)
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    /// Stored verbatim, unencrypted
    pub fn secret(&self) -> &str {
        &self.secret
    }

    /// Key this entry is stored under
    pub fn key(&self) -> String {
        entry_key(&self.display_name)
    }

    /// Case-insensitive substring match against name or username.
    /// `term_lower` must already be lowercased.
    pub(crate) fn matches(&self, term_lower: &str) -> bool {
        self.display_name.to_lowercase().contains(term_lower)
            || self.username.to_lowercase().contains(term_lower)
    }
}

/// Normalize a display name into a store key
pub fn entry_key(display_name: &str) -> String {
    display_name.to_lowercase()
}
