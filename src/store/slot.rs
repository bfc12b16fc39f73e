// SPDX-License-Identifier: MIT

//! Persistent key-value slot backends.
//!
//! The store persists one value under one key. [`FileSlot`] keeps it in a
//! JSON file named after the key; [`MemorySlot`] backs tests without
//! touching the filesystem.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{AppError, Result};

/// A single persistent key-value slot.
pub trait StorageSlot {
    /// Read the stored value. Absent is `Ok(None)`, not an error.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored value wholesale.
    fn write(&mut self, value: &str) -> Result<()>;

    /// Remove the stored value. Already-absent is fine.
    fn clear(&mut self) -> Result<()>;
}

/// File-backed slot: `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlot {
    path: PathBuf,
}

impl FileSlot {
    /// Slot for `key` under `dir`. Nothing is created until the first
    /// write.
    pub fn new(dir: impl AsRef<Path>, key: &str) -> Self {
        Self {
            path: dir.as_ref().join(format!("{key}.json")),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl StorageSlot for FileSlot {
    fn read(&self) -> Result<Option<String>> {
        match std::fs::read_to_string(&self.path) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))),
        }
    }

    fn write(&mut self, value: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Storage(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }
        std::fs::write(&self.path, value).map_err(|e| {
            AppError::Storage(format!("Failed to write {}: {}", self.path.display(), e))
        })
    }

    fn clear(&mut self) -> Result<()> {
        match std::fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(AppError::Storage(format!(
                "Failed to remove {}: {}",
                self.path.display(),
                e
            ))),
        }
    }
}

/// In-memory slot (for testing).
#[derive(Debug, Default)]
pub struct MemorySlot {
    value: Option<String>,
}

impl MemorySlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Slot pre-seeded with a value, as if a previous session persisted.
    pub fn with_value(value: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
        }
    }
}

impl StorageSlot for MemorySlot {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.value.clone())
    }

    fn write(&mut self, value: &str) -> Result<()> {
        self.value = Some(value.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.value = None;
        Ok(())
    }
}
