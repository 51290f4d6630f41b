//! In-memory stand-ins for the store API, the notifier and storage.

mod failing_store;
mod fake_notifier;
mod store_api;

pub use failing_store::ReadOnlyStore;
pub use fake_notifier::{FakeNotifier, ScheduledCall};
pub use store_api::{InMemoryStoreApi, StoreOverrideFake, StoreTimeFake};
