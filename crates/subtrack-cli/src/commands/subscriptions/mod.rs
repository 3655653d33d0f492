//! Commands that read or change individual subscriptions.

mod add;
mod edit;
mod list;
mod remove;
mod show;

pub use add::handle_add;
pub use edit::handle_edit;
pub use list::handle_list;
pub use remove::handle_remove;
pub use show::handle_show;

use subtrack_core::{SlotStore, Subscription, SubscriptionId, SubscriptionStore, SubtrackError};

use crate::errors::CliError;

const LIST_HINT: &str = "Hint: Run `subtrack list` to see subscription IDs.";

/// Look up a subscription by id, or fail with a not-found error.
fn find_subscription<S: SlotStore>(
    store: &SubscriptionStore<S>,
    id: &str,
) -> anyhow::Result<Subscription> {
    store
        .get(&SubscriptionId::from(id))
        .cloned()
        .ok_or_else(|| CliError::not_found(format!("Subscription {} not found", id), LIST_HINT).into())
}

/// Turn a failed save into a storage error that says the change was lost.
fn not_saved(err: SubtrackError) -> anyhow::Error {
    match err {
        SubtrackError::Storage(message) | SubtrackError::Serialization(message) => {
            CliError::storage(format!("Change was not saved: {}", message)).into()
        }
        other => other.into(),
    }
}
