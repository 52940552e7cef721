use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    Unavailable(String),
    IoError(String),
    SerializationError(String),
    InvalidKey(String),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::Unavailable(msg) => write!(f, "Storage unavailable: {msg}"),
            StorageError::IoError(msg) => write!(f, "IO Error: {msg}"),
            StorageError::SerializationError(msg) => write!(f, "Serialization Error: {msg}"),
            StorageError::InvalidKey(key) => write!(f, "Invalid storage key: {key}"),
        }
    }
}

impl std::error::Error for StorageError {}

impl StorageError {
    pub fn io_error(message: impl Into<String>) -> Self {
        StorageError::IoError(message.into())
    }

    pub fn serialization_error(message: impl Into<String>) -> Self {
        StorageError::SerializationError(message.into())
    }
}
