mod resolve;
mod status;
pub mod types;

pub use resolve::{is_store_closed, resolve_availability};
pub use status::store_status;
