use serde::Deserialize;
use std::fmt;

pub const DEFAULT_AVATAR_BASE_URL: &str = "https://milkyway.local/user/avatar";
pub const DEFAULT_AVATAR_EXTENSION: &str = ".jpg";
/// 1x1 grey JPEG shown until a real avatar is cached.
pub const DEFAULT_AVATAR: &str = "data:image/jpeg;base64,/9j/4AAQSkZJRgABAQEASABIAAD/2wBDAP//////////////////////////////////////////////////////////////////////////////////////wgALCAABAAEBAREA/8QAFBABAAAAAAAAAAAAAAAAAAAAAP/aAAgBAQABPxA=";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    MissingVariable(&'static str),
    Invalid(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingVariable(name) => write!(f, "{name} must be set"),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}

fn default_avatar_base_url() -> String {
    DEFAULT_AVATAR_BASE_URL.to_string()
}

fn default_avatar_extension() -> String {
    DEFAULT_AVATAR_EXTENSION.to_string()
}

fn default_avatar() -> String {
    DEFAULT_AVATAR.to_string()
}

/// Connection settings of the portal client.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortalConfig {
    pub request_url: String,
    pub username: String,
    pub password: String,
    #[serde(default = "default_avatar_base_url")]
    pub avatar_base_url: String,
    #[serde(default = "default_avatar_extension")]
    pub avatar_extension: String,
    #[serde(default = "default_avatar")]
    pub default_avatar: String,
    /// Native only: directory of the file-backed session store. In memory when unset.
    #[serde(default)]
    pub data_dir: Option<String>,
}

impl PortalConfig {
    pub fn new(
        request_url: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            request_url: request_url.into(),
            username: username.into(),
            password: password.into(),
            avatar_base_url: default_avatar_base_url(),
            avatar_extension: default_avatar_extension(),
            default_avatar: default_avatar(),
            data_dir: None,
        }
        .normalized()
    }

    /// Trims the trailing slashes of the URLs so paths can be appended.
    pub fn normalized(mut self) -> Self {
        self.request_url = self.request_url.trim_end_matches('/').to_string();
        self.avatar_base_url = self.avatar_base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_url.is_empty() {
            return Err(ConfigError::Invalid("request URL is empty".to_string()));
        }
        if !self.request_url.starts_with("http://") && !self.request_url.starts_with("https://") {
            return Err(ConfigError::Invalid(format!(
                "request URL must be http(s): {}",
                self.request_url
            )));
        }
        Ok(())
    }

    /// Reads the configuration from the environment, loading `.env` first.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv::dotenv().ok();

        let required = |name: &'static str| {
            std::env::var(name).map_err(|_| {
                log::error!("{name} must be set");
                ConfigError::MissingVariable(name)
            })
        };
        let optional = |name: &str| std::env::var(name).ok().filter(|v| !v.is_empty());

        let mut config = Self::new(
            required("APP_REQUEST_URL")?,
            required("APP_USERNAME")?,
            required("APP_PASSWORD")?,
        );
        if let Some(url) = optional("APP_AVATAR_URL") {
            config.avatar_base_url = url;
        }
        if let Some(extension) = optional("APP_AVATAR_EXTENSION") {
            config.avatar_extension = extension;
        }
        if let Some(avatar) = optional("APP_DEFAULT_AVATAR") {
            config.default_avatar = avatar;
        }
        config.data_dir = optional("APP_DATA_DIR");

        let config = config.normalized();
        config.validate()?;
        Ok(config)
    }
}
