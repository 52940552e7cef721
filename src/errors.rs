use crate::config::ConfigError;
use crate::domain::image::ImageError;
use crate::domain::request::ApiError;
use crate::domain::session::StorageError;
use crate::domain::validation::ValidationError;
use std::fmt;

/// Failure of a portal flow.
#[derive(Debug, Clone, PartialEq)]
pub enum PortalError {
    Api(ApiError),
    Storage(StorageError),
    Validation(ValidationError),
    Image(ImageError),
    Config(ConfigError),
    SessionMissing,
}

impl fmt::Display for PortalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortalError::Api(e) => write!(f, "{e}"),
            PortalError::Storage(e) => write!(f, "{e}"),
            PortalError::Validation(e) => write!(f, "{e}"),
            PortalError::Image(e) => write!(f, "{e}"),
            PortalError::Config(e) => write!(f, "{e}"),
            PortalError::SessionMissing => write!(f, "No user data in the session"),
        }
    }
}

impl std::error::Error for PortalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PortalError::Api(e) => Some(e),
            PortalError::Storage(e) => Some(e),
            PortalError::Validation(e) => Some(e),
            PortalError::Image(e) => Some(e),
            PortalError::Config(e) => Some(e),
            PortalError::SessionMissing => None,
        }
    }
}

impl From<ApiError> for PortalError {
    fn from(error: ApiError) -> Self {
        PortalError::Api(error)
    }
}

impl From<StorageError> for PortalError {
    fn from(error: StorageError) -> Self {
        PortalError::Storage(error)
    }
}

impl From<ValidationError> for PortalError {
    fn from(error: ValidationError) -> Self {
        PortalError::Validation(error)
    }
}

impl From<ImageError> for PortalError {
    fn from(error: ImageError) -> Self {
        PortalError::Image(error)
    }
}

impl From<ConfigError> for PortalError {
    fn from(error: ConfigError) -> Self {
        PortalError::Config(error)
    }
}

impl From<serde_json::Error> for PortalError {
    fn from(error: serde_json::Error) -> Self {
        PortalError::Api(error.into())
    }
}

impl PortalError {
    /// The request failure behind this error, if any.
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            PortalError::Api(e) => Some(e),
            _ => None,
        }
    }
}
