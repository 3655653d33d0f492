//! In-memory slot store for tests and embedding.

use std::collections::HashMap;

use crate::error::Result;
use crate::storage::traits::SlotStore;

/// Slot store backed by a `HashMap`; nothing survives the process.
#[derive(Debug, Clone, Default)]
pub struct MemorySlotStore {
    slots: HashMap<String, String>,
}

impl MemorySlotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `document` already stored at `key`.
    pub fn with_slot(mut self, key: impl Into<String>, document: impl Into<String>) -> Self {
        self.slots.insert(key.into(), document.into());
        self
    }
}

impl SlotStore for MemorySlotStore {
    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, document: &str) -> Result<()> {
        self.slots.insert(key.to_string(), document.to_string());
        Ok(())
    }
}
