//! Persistence backends

use crate::error::Result;
use std::cell::{Cell, RefCell};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Whole-document storage behind an entry store, an export or an import
pub trait Backend {
    /// Where this backend reads and writes, for messages
    fn location(&self) -> &Path;

    /// Read the full document. `Ok(None)` when nothing exists yet.
    fn read_all(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the full document
    fn write_all(&self, bytes: &[u8]) -> Result<()>;
}

/// Backend over a single file on disk
#[derive(Debug, Clone)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileBackend { path: path.into() }
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }
}

impl Backend for FileBackend {
    fn location(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    // Parent directories are not created; a missing directory is an error.
    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        debug!("Writing {} bytes to {}", bytes.len(), self.path.display());
        fs::write(&self.path, bytes)?;
        Ok(())
    }
}

/// In-process backend that counts writes and can refuse them
#[derive(Debug, Default)]
pub struct MemoryBackend {
    label: PathBuf,
    contents: RefCell<Option<Vec<u8>>>,
    writes: Cell<usize>,
    read_only: Cell<bool>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        MemoryBackend {
            label: PathBuf::from("<memory>"),
            ..Default::default()
        }
    }

    pub fn with_contents(bytes: impl Into<Vec<u8>>) -> Self {
        let backend = MemoryBackend::new();
        backend.contents.replace(Some(bytes.into()));
        backend
    }

    pub fn contents(&self) -> Option<Vec<u8>> {
        self.contents.borrow().clone()
    }

    /// Number of successful writes so far
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    /// While set, every write fails with `PermissionDenied`
    pub fn set_read_only(&self, read_only: bool) {
        self.read_only.set(read_only);
    }
}

impl Backend for MemoryBackend {
    fn location(&self) -> &Path {
        &self.label
    }

    fn read_all(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents())
    }

    fn write_all(&self, bytes: &[u8]) -> Result<()> {
        if self.read_only.get() {
            return Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                "memory backend is read-only",
            )
            .into());
        }
        self.contents.replace(Some(bytes.to_vec()));
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
