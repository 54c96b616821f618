//! Durable key-value backends for the collection store.
//!
//! The store persists its entire state as one serialized blob; a backend
//! only needs whole-blob load and save. [`FileBackend`] is the production
//! implementation, [`MemoryBackend`] backs tests and ephemeral use.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::error::{PokebinderError, Result};

/// Whole-blob durable storage used by the collection store.
///
/// `load` returns `None` when no state has ever been saved; any other
/// failure is a `Persistence` error. `save` must be atomic with respect to
/// the stored blob: a failed save leaves the previous blob intact.
pub trait StorageBackend: Send {
    fn load(&self) -> Result<Option<String>>;
    fn save(&mut self, blob: &str) -> Result<()>;
}

// ---------------------------------------------------------------------------
// MemoryBackend
// ---------------------------------------------------------------------------

/// In-memory backend. Nothing survives the process.
#[derive(Debug, Default)]
pub struct MemoryBackend {
    blob: Option<String>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start pre-seeded with a serialized blob, as if it had been saved by
    /// a previous session.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: Some(blob.into()),
        }
    }
}

impl StorageBackend for MemoryBackend {
    fn load(&self) -> Result<Option<String>> {
        Ok(self.blob.clone())
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        self.blob = Some(blob.to_string());
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// FileBackend
// ---------------------------------------------------------------------------

/// File-backed storage holding the blob at a fixed path.
///
/// Saves write to a sibling temp file and rename over the target, so an
/// interrupted save never leaves a corrupt partial file behind.
#[derive(Debug)]
pub struct FileBackend {
    path: PathBuf,
}

impl FileBackend {
    /// Create a backend for the given file path, creating parent
    /// directories as needed.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                PokebinderError::Persistence(format!(
                    "failed to create data directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
        Ok(Self { path })
    }

    /// The path the blob is stored at.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageBackend for FileBackend {
    fn load(&self) -> Result<Option<String>> {
        match fs::read_to_string(&self.path) {
            Ok(blob) => Ok(Some(blob)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(PokebinderError::Persistence(format!(
                "failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn save(&mut self, blob: &str) -> Result<()> {
        let tmp = self.path.with_extension("json.tmp");

        let result = (|| -> io::Result<()> {
            fs::write(&tmp, blob)?;
            fs::rename(&tmp, &self.path)?;
            Ok(())
        })();

        if result.is_err() {
            // Clean up the partial temp file on any error
            let _ = fs::remove_file(&tmp);
        }

        result.map_err(|e| {
            PokebinderError::Persistence(format!(
                "failed to write {}: {}",
                self.path.display(),
                e
            ))
        })
    }
}
