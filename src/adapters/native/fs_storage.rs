use crate::domain::session::StorageError;
use crate::ports::KeyValueStorePort;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Native key-value store, one file per key under a root directory.
#[derive(Debug, Clone)]
pub struct FsStorage {
    root_path: PathBuf,
}

impl FsStorage {
    pub fn new(root_path: impl AsRef<Path>) -> Result<Self, StorageError> {
        let root_path = root_path.as_ref().to_path_buf();
        fs::create_dir_all(&root_path)
            .map_err(|e| StorageError::io_error(format!("Failed to create storage root: {e}")))?;
        Ok(Self { root_path })
    }

    pub fn root(&self) -> &Path {
        &self.root_path
    }

    fn get_full_path(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'));
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.root_path.join(key))
    }
}

impl KeyValueStorePort for FsStorage {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        let full_path = self.get_full_path(key)?;
        match fs::read_to_string(&full_path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::io_error(format!("Failed to read {key}: {e}"))),
        }
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let full_path = self.get_full_path(key)?;
        fs::write(&full_path, value)
            .map_err(|e| StorageError::io_error(format!("Failed to write {key}: {e}")))
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        let full_path = self.get_full_path(key)?;
        match fs::remove_file(&full_path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::io_error(format!("Failed to delete {key}: {e}"))),
        }
    }

    fn clear(&self) -> Result<(), StorageError> {
        let entries = fs::read_dir(&self.root_path)
            .map_err(|e| StorageError::io_error(format!("Failed to read storage root: {e}")))?;

        for entry in entries.flatten() {
            let path = entry.path();
            if path.is_file() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::io_error(format!("Failed to delete {}: {e}", path.display()))
                })?;
            }
        }
        Ok(())
    }
}
