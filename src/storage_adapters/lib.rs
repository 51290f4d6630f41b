mod key_value_store;
pub mod scheduled_notification_adapter;

pub use key_value_store::{FileStore, KeyValueStore, MemoryStore};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("SerdeJsonError: {0}")]
    SerdeJson(#[from] serde_json::Error),
}
