//! Client side of the store-hours REST API.
//!
//! Weekly hours ("store times") and date overrides live on a remote
//! service. Adapters here fetch and mutate them; use cases only see the
//! `*Query` / `*Mutation` traits.

mod api_client;
pub mod store_override_adapter;
pub mod store_time_adapter;

pub use api_client::{ApiClient, ApiError};
