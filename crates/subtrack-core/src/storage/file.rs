//! Filesystem-backed slot store.

use std::fs;
use std::io;
use std::path::PathBuf;

use tracing::debug;

use crate::error::{Result, SubtrackError};
use crate::fs::write_atomic;
use crate::storage::traits::SlotStore;

/// Slot store keeping each slot as `<dir>/<key>.json`.
#[derive(Debug, Clone)]
pub struct FileSlotStore {
    dir: PathBuf,
}

impl FileSlotStore {
    /// Create a store rooted at `dir`. The directory is created lazily on
    /// first write.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the file backing `key`.
    ///
    /// # Errors
    ///
    /// Returns `SubtrackError::InvalidInput` for keys that could escape the
    /// store directory.
    pub fn slot_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');
        if !valid {
            return Err(SubtrackError::InvalidInput(format!(
                "Invalid slot key: {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl SlotStore for FileSlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key)?;
        match fs::read_to_string(&path) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(SubtrackError::Storage(format!(
                "Failed to read {}: {}",
                path.display(),
                err
            ))),
        }
    }

    fn write(&mut self, key: &str, document: &str) -> Result<()> {
        let path = self.slot_path(key)?;
        write_atomic(&path, document.as_bytes()).map_err(|err| {
            SubtrackError::Storage(format!("Failed to write {}: {}", path.display(), err))
        })?;
        debug!(path = %path.display(), bytes = document.len(), "slot written");
        Ok(())
    }
}
