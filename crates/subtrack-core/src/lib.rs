//! # SubTrack Core
//!
//! Core library for SubTrack - a local, single-user tracker for recurring
//! subscriptions and one-time purchases.
//!
//! This crate provides the domain model, cost computations, and persistence
//! independent of the CLI interface.
//!
//! ## Architecture
//!
//! - **model**: Subscription records and their closed enumerations
//! - **validation**: Input-boundary constraints
//! - **renewal**: Next renewal date projection
//! - **stats**: Headline cost metrics and the per-category breakdown
//! - **filter**: Category/status view selection
//! - **export**: CSV export
//! - **storage**: Slot store abstraction, backends, collection load/save
//! - **store**: The canonical collection and its mutations

pub mod error;
pub mod export;
pub mod filter;
pub mod fs;
pub mod model;
pub mod renewal;
pub mod seed;
pub mod stats;
pub mod storage;
pub mod store;
pub mod validation;

pub use error::{Result, SubtrackError};
pub use export::{to_delimited_text, EXPORT_FILE_NAME};
pub use filter::{Selector, SubscriptionFilter};
pub use model::{BillingCycle, CardType, Category, Status, Subscription, SubscriptionId};
pub use renewal::next_renewal_date;
pub use stats::{round_money, CategoryTotal, SubscriptionStats};
pub use storage::{FileSlotStore, LoadSource, MemorySlotStore, SlotStore};
pub use store::{SubscriptionStore, Upsert};

/// Core version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
