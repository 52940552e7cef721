use crate::domain::session::StorageError;
use crate::global::local_storage;
use crate::ports::KeyValueStorePort;

/// `window.localStorage`, looked up on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl KeyValueStorePort for LocalStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(local_storage()?.get_item(key)?)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        Ok(local_storage()?.set_item(key, value)?)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        Ok(local_storage()?.remove_item(key)?)
    }

    fn clear(&self) -> Result<(), StorageError> {
        Ok(local_storage()?.clear()?)
    }
}
