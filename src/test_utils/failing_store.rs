use std::io::{Error, ErrorKind};

use storage_adapters::{KeyValueStore, StorageError};

/// Reads as empty, refuses every write.
#[derive(Debug, Default)]
pub struct ReadOnlyStore;

impl KeyValueStore for ReadOnlyStore {
    async fn get_item(&self, _key: &str) -> Result<Option<String>, StorageError> {
        Ok(None)
    }

    async fn set_item(&self, key: &str, _value: String) -> Result<(), StorageError> {
        Err(StorageError::Io(Error::new(
            ErrorKind::PermissionDenied,
            format!("{} is read-only", key),
        )))
    }
}
