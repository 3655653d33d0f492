//! Persistence of the subscription collection.
//!
//! - **traits**: the `SlotStore` key-value abstraction
//! - **file** / **memory**: backends
//! - **collection**: whole-collection load (with seed fallback) and save

mod collection;
mod file;
mod memory;
pub mod traits;
pub mod types;

pub use collection::{load_subscriptions, parse_collection, save_subscriptions, SUBSCRIPTIONS_SLOT};
pub use file::FileSlotStore;
pub use memory::MemorySlotStore;
pub use traits::SlotStore;
pub use types::{LoadSource, Loaded};
