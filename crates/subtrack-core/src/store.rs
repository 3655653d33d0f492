//! The subscription store: sole owner and writer of the canonical collection.
//!
//! Every committed mutation is followed by a save of the whole collection.
//! If the save fails the mutation still stands in memory; the error is
//! returned so the caller can tell the user their change is not yet durable.

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::error::Result;
use crate::export::to_delimited_text;
use crate::filter::SubscriptionFilter;
use crate::model::{Subscription, SubscriptionId};
use crate::stats::{category_breakdown, CategoryTotal, SubscriptionStats};
use crate::storage::{load_subscriptions, save_subscriptions, LoadSource, SlotStore};

/// What `add_or_update` did with a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Upsert {
    Added,
    Updated,
}

/// Canonical in-memory collection backed by a slot store.
pub struct SubscriptionStore<S: SlotStore> {
    slots: S,
    subscriptions: Vec<Subscription>,
    load_source: LoadSource,
}

impl<S: SlotStore> SubscriptionStore<S> {
    /// Load the collection from `slots`, falling back to seed data.
    pub fn open(slots: S) -> Self {
        let loaded = load_subscriptions(&slots);
        Self {
            slots,
            subscriptions: loaded.subscriptions,
            load_source: loaded.source,
        }
    }

    /// How the collection was obtained at startup.
    pub fn load_source(&self) -> &LoadSource {
        &self.load_source
    }

    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    pub fn get(&self, id: &SubscriptionId) -> Option<&Subscription> {
        self.subscriptions.iter().find(|s| &s.id == id)
    }

    /// Persist the current collection as-is.
    pub fn save(&mut self) -> Result<()> {
        save_subscriptions(&mut self.slots, &self.subscriptions).inspect_err(|err| {
            warn!(error = %err, "failed to save subscriptions; changes kept in memory");
        })
    }

    /// Replace the record with the same id in place, or append a new one.
    ///
    /// The record must already have passed input validation.
    pub fn add_or_update(&mut self, subscription: Subscription) -> Result<Upsert> {
        let outcome = match self
            .subscriptions
            .iter_mut()
            .find(|s| s.id == subscription.id)
        {
            Some(existing) => {
                *existing = subscription;
                Upsert::Updated
            }
            None => {
                self.subscriptions.push(subscription);
                Upsert::Added
            }
        };
        info!(?outcome, count = self.subscriptions.len(), "subscription stored");
        self.save()?;
        Ok(outcome)
    }

    /// Remove the record with `id`. Unknown ids are a no-op returning `false`.
    pub fn remove(&mut self, id: &SubscriptionId) -> Result<bool> {
        let before = self.subscriptions.len();
        self.subscriptions.retain(|s| &s.id != id);
        if self.subscriptions.len() == before {
            return Ok(false);
        }
        info!(%id, "subscription removed");
        self.save()?;
        Ok(true)
    }

    /// The records matching `filter`, in collection order.
    pub fn apply_filter(&self, filter: &SubscriptionFilter) -> Vec<Subscription> {
        filter.apply(&self.subscriptions)
    }

    pub fn stats(&self, view: &[Subscription]) -> SubscriptionStats {
        SubscriptionStats::compute(view)
    }

    pub fn category_breakdown(&self, view: &[Subscription]) -> Vec<CategoryTotal> {
        category_breakdown(view)
    }

    /// CSV text for `view`, or `None` when there is nothing to export.
    pub fn export(&self, view: &[Subscription], as_of: NaiveDate) -> Option<String> {
        if view.is_empty() {
            return None;
        }
        Some(to_delimited_text(view, as_of))
    }

    /// Give back the underlying slot store.
    pub fn into_slots(self) -> S {
        self.slots
    }
}
