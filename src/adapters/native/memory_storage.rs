use crate::domain::session::StorageError;
use crate::ports::KeyValueStorePort;
use parking_lot::RwLock;
use std::collections::HashMap;

/// Process-local store; nothing survives a restart.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    items: RwLock<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.read().is_empty()
    }
}

impl KeyValueStorePort for MemoryStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.items.read().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.items.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        self.items.write().remove(key);
        Ok(())
    }

    fn clear(&self) -> Result<(), StorageError> {
        self.items.write().clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_item_lifecycle() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get_item("userData").unwrap(), None);

        storage.set_item("userData", "{}").unwrap();
        storage.set_item("userAvatar", "data:,").unwrap();
        assert_eq!(storage.get_item("userData").unwrap(), Some("{}".to_string()));
        assert_eq!(storage.len(), 2);

        storage.remove_item("userData").unwrap();
        storage.remove_item("userData").unwrap();
        assert_eq!(storage.get_item("userData").unwrap(), None);

        storage.clear().unwrap();
        assert!(storage.is_empty());
    }
}
