use crate::domain::session::error::StorageError;

/// Port for a synchronous string-keyed store (browser local storage).
pub trait KeyValueStorePort: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;

    fn remove_item(&self, key: &str) -> Result<(), StorageError>;

    fn clear(&self) -> Result<(), StorageError>;
}
