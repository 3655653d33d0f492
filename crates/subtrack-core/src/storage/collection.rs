//! Loading and saving the whole subscription collection.
//!
//! The collection is one JSON array in one slot. Loading never fails: any
//! problem with the stored document is logged and the seed collection is
//! used instead. Saving reports errors to the caller.

use tracing::{debug, info, warn};

use crate::error::Result;
use crate::model::Subscription;
use crate::seed::seed_subscriptions;
use crate::storage::traits::SlotStore;
use crate::storage::types::{LoadSource, Loaded};
use crate::validation::validate_collection;

/// Slot key holding the subscription collection.
pub const SUBSCRIPTIONS_SLOT: &str = "subtrackr-subscriptions";

/// Parse and validate a stored collection document.
pub fn parse_collection(document: &str) -> Result<Vec<Subscription>> {
    let subscriptions: Vec<Subscription> = serde_json::from_str(document)?;
    validate_collection(&subscriptions)?;
    Ok(subscriptions)
}

/// Load the collection, falling back to the seed collection.
pub fn load_subscriptions(slots: &dyn SlotStore) -> Loaded {
    let document = match slots.read(SUBSCRIPTIONS_SLOT) {
        Ok(document) => document,
        Err(err) => {
            warn!(error = %err, "failed to read stored subscriptions, using defaults");
            return seeded(LoadSource::SeededCorrupt(err.to_string()));
        }
    };

    let Some(document) = document.filter(|d| !d.trim().is_empty()) else {
        info!("no stored subscriptions, using defaults");
        return seeded(LoadSource::SeededMissing);
    };

    match parse_collection(&document) {
        Ok(subscriptions) => {
            debug!(count = subscriptions.len(), "loaded stored subscriptions");
            Loaded {
                subscriptions,
                source: LoadSource::Stored,
            }
        }
        Err(err) => {
            warn!(error = %err, "failed to parse stored subscriptions, using defaults");
            seeded(LoadSource::SeededCorrupt(err.to_string()))
        }
    }
}

fn seeded(source: LoadSource) -> Loaded {
    Loaded {
        subscriptions: seed_subscriptions(),
        source,
    }
}

/// Serialize and store the whole collection, replacing the previous document.
pub fn save_subscriptions(slots: &mut dyn SlotStore, subscriptions: &[Subscription]) -> Result<()> {
    let document = serde_json::to_string(subscriptions)?;
    slots.write(SUBSCRIPTIONS_SLOT, &document)?;
    debug!(count = subscriptions.len(), "saved subscriptions");
    Ok(())
}
