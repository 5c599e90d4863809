//! Entry store use cases
//!
//! Every mutating operation flushes the full store to its backend before
//! returning. A failed flush leaves the change in memory and reports the error.

use crate::domain::{decode, encode, render_report, Entries, Entry};
use crate::error::{PassbookError, Result};
use crate::infrastructure::Backend;
use tracing::{debug, info, warn};

/// How the store came to hold its initial contents
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    /// Nothing persisted yet; started empty
    Missing,
    /// Decoded this many entries
    Loaded(usize),
    /// Persisted data could not be decoded; started empty
    Corrupt(String),
}

/// Keyed entry collection bound to the backend it persists to
pub struct EntryStore<B: Backend> {
    backend: B,
    entries: Entries,
    status: LoadStatus,
}

impl<B: Backend> EntryStore<B> {
    /// Create an empty store without reading the backend
    pub fn new(backend: B) -> Self {
        EntryStore {
            backend,
            entries: Entries::new(),
            status: LoadStatus::Missing,
        }
    }

    /// Load the store from its backend.
    ///
    /// A missing source starts empty. A malformed source also starts empty and
    /// is reported as `LoadStatus::Corrupt` with a warning; the old data is not
    /// recovered. Only read failures are returned as errors.
    pub fn load(backend: B) -> Result<Self> {
        let location = backend.location().display().to_string();

        let (entries, status) = match backend.read_all()? {
            None => {
                info!("No data at {}, starting fresh", location);
                (Entries::new(), LoadStatus::Missing)
            }
            Some(bytes) => match decode(&bytes) {
                Ok(decoded) => {
                    let count = decoded.entries.len();
                    info!("Loaded {} entries from {}", count, location);
                    (decoded.entries, LoadStatus::Loaded(count))
                }
                Err(source) => {
                    let err = PassbookError::Decode {
                        path: backend.location().to_path_buf(),
                        source,
                    };
                    warn!("{}; starting with an empty store", err);
                    (Entries::new(), LoadStatus::Corrupt(err.to_string()))
                }
            },
        };

        Ok(EntryStore {
            backend,
            entries,
            status,
        })
    }

    pub fn load_status(&self) -> &LoadStatus {
        &self.status
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn entries(&self) -> &Entries {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Write the full store to its own backend
    pub fn save(&self) -> Result<()> {
        self.save_to(&self.backend)
    }

    /// Write the full store to `destination`, replacing its contents
    pub fn save_to<D: Backend>(&self, destination: &D) -> Result<()> {
        let bytes = encode(&self.entries)?;
        destination.write_all(&bytes)?;
        debug!(
            "Saved {} entries to {}",
            self.entries.len(),
            destination.location().display()
        );
        Ok(())
    }

    /// Insert or replace the entry keyed by `display_name`, then persist.
    /// Fields are expected to be validated as non-empty by the caller.
    pub fn add(&mut self, display_name: &str, username: &str, secret: &str) -> Result<Entry> {
        let entry = Entry::new(display_name, username, secret);
        if self.entries.insert(entry.clone()).is_some() {
            debug!("Replaced entry '{}'", entry.key());
        }
        self.save()?;
        Ok(entry)
    }

    pub fn get(&self, display_name: &str) -> Option<&Entry> {
        self.entries.get(display_name)
    }

    /// Entries whose name or username contains `term`, ignoring case
    pub fn search(&self, term: &str) -> Vec<&Entry> {
        self.entries.search(term)
    }

    /// Every entry in listing order
    pub fn all(&self) -> Vec<&Entry> {
        self.entries.iter().collect()
    }

    /// Remove an entry and persist. Returns false without writing when absent.
    pub fn delete(&mut self, display_name: &str) -> Result<bool> {
        match self.entries.remove(display_name) {
            Some(removed) => {
                debug!("Deleted entry '{}'", removed.key());
                self.save()?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Write the human-readable report to `destination`
    pub fn export<D: Backend>(&self, destination: &D) -> Result<()> {
        let report = render_report(self.entries.iter());
        destination.write_all(report.as_bytes())?;
        info!(
            "Exported {} entries to {}",
            self.entries.len(),
            destination.location().display()
        );
        Ok(())
    }

    /// Merge a persisted-format source into the store and persist.
    ///
    /// The source is decoded completely before anything changes, so a missing
    /// or malformed source leaves the store untouched. Imported entries replace
    /// live ones with the same key. Returns the number of entries in the source.
    pub fn import_merge<S: Backend>(&mut self, source: &S) -> Result<usize> {
        let location = source.location().display().to_string();

        let bytes = source
            .read_all()?
            .ok_or_else(|| PassbookError::import(format!("{} does not exist", location)))?;

        let decoded = decode(&bytes).map_err(|e| {
            let err = PassbookError::Decode {
                path: source.location().to_path_buf(),
                source: e,
            };
            PassbookError::Import {
                reason: err.to_string(),
                source: Some(Box::new(err)),
            }
        })?;

        let read = decoded.read;
        self.entries.merge(decoded.entries);
        self.save()?;

        info!("Imported {} entries from {}", read, location);
        Ok(read)
    }
}
