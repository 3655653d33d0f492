//! Result types for loading the persisted collection.

use crate::model::Subscription;

/// Where a loaded collection came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadSource {
    /// Parsed from the stored document
    Stored,
    /// No document (or a blank one) was stored; seed data was used
    SeededMissing,
    /// The stored document was unreadable or invalid; seed data was used
    SeededCorrupt(String),
}

impl LoadSource {
    pub fn is_seeded(&self) -> bool {
        !matches!(self, Self::Stored)
    }
}

/// A collection produced by `load_subscriptions`, with its provenance.
#[derive(Debug, Clone)]
pub struct Loaded {
    pub subscriptions: Vec<Subscription>,
    pub source: LoadSource,
}
