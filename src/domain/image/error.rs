use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    InvalidDataUrl(String),
    Decode(String),
    EmptyImage,
}

impl fmt::Display for ImageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageError::InvalidDataUrl(msg) => write!(f, "Invalid data URL: {msg}"),
            ImageError::Decode(msg) => write!(f, "Image decode error: {msg}"),
            ImageError::EmptyImage => write!(f, "Image is empty"),
        }
    }
}

impl std::error::Error for ImageError {}

impl ImageError {
    pub fn invalid_data_url(msg: impl Into<String>) -> Self {
        ImageError::InvalidDataUrl(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        ImageError::Decode(msg.into())
    }
}
