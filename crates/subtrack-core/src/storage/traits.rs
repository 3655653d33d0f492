//! Slot store trait definition.
//!
//! A slot store is a durable key-value store holding one text document per
//! key. It plays the role a browser's local storage plays for a web client:
//! the subscription collection lives in a single named slot and is rewritten
//! as a whole on every change.

use crate::error::Result;

/// Durable key-value storage of whole documents.
///
/// Implementations must ensure:
/// - `write` supersedes any previous document at the key
/// - a failed `write` leaves the previous document readable
/// - `read` of a never-written key is `Ok(None)`, not an error
pub trait SlotStore {
    /// Read the document stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns `SubtrackError::Storage` if the backing store cannot be read.
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the document stored at `key`.
    ///
    /// # Errors
    ///
    /// Returns `SubtrackError::Storage` if the document cannot be persisted
    /// (disk full, permissions, quota).
    fn write(&mut self, key: &str, document: &str) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trait_is_object_safe() {
        fn _accepts_dyn(_store: &mut dyn SlotStore) {}
    }
}
