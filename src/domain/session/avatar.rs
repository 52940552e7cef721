use super::store::SessionStore;
use crate::config::PortalConfig;
use crate::domain::request::{ApiError, Request};
use crate::platform::Platform;
use crate::ports::{HttpPort, KeyValueStorePort, LoggerPort};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use std::sync::Arc;

pub const USER_AVATAR_KEY: &str = "userAvatar";

const DEFAULT_AVATAR_MIME: &str = "image/jpeg";

/// The user's avatar, cached as a data URL next to the session record.
#[derive(Clone)]
pub struct AvatarStore {
    storage: Arc<dyn KeyValueStorePort>,
    http: Arc<dyn HttpPort>,
    logger: &'static dyn LoggerPort,
    session: SessionStore,
    base_url: String,
    extension: String,
    default_avatar: String,
}

impl AvatarStore {
    pub fn new(platform: &Platform, config: &PortalConfig) -> Self {
        Self {
            storage: platform.storage(),
            http: platform.http(),
            logger: platform.logger(),
            session: SessionStore::new(platform),
            base_url: config.avatar_base_url.clone(),
            extension: config.avatar_extension.clone(),
            default_avatar: config.default_avatar.clone(),
        }
    }

    pub fn avatar_url(&self, user_id: i64) -> String {
        format!("{}/{user_id}{}", self.base_url, self.extension)
    }

    /// Re-downloads the avatar of the user in the session record.
    pub async fn update_avatar(&self) -> bool {
        let user_id = self.session.user_id();
        self.fetch_and_save_user_avatar(user_id).await
    }

    /// Downloads and caches the avatar. Any failure caches the default avatar
    /// instead and reports `false`.
    pub async fn fetch_and_save_user_avatar(&self, user_id: Option<i64>) -> bool {
        let Some(user_id) = user_id else {
            self.logger.error("Invalid user ID for downloading avatar.");
            return false;
        };

        match self.download(user_id).await {
            Ok(data_url) => match self.storage.set_item(USER_AVATAR_KEY, &data_url) {
                Ok(()) => true,
                Err(e) => {
                    self.logger
                        .error(&format!("Failed to store the user avatar: {e}"));
                    false
                }
            },
            Err(e) => {
                self.logger.error(&format!(
                    "An error occurred while downloading the user avatar: {e}"
                ));
                if let Err(e) = self.storage.set_item(USER_AVATAR_KEY, &self.default_avatar) {
                    self.logger
                        .error(&format!("Failed to store the default avatar: {e}"));
                }
                false
            }
        }
    }

    async fn download(&self, user_id: i64) -> Result<String, ApiError> {
        let request = Request::get(self.avatar_url(user_id)).anonymous();
        let payload = self.http.send(&request).await?;

        if payload.body.is_empty() {
            return Err(ApiError::serialization("Blob is empty or invalid."));
        }

        let mime = payload
            .content_type
            .as_deref()
            .and_then(|ct| ct.split(';').next())
            .map(str::trim)
            .filter(|ct| !ct.is_empty())
            .unwrap_or(DEFAULT_AVATAR_MIME);

        Ok(to_data_url(mime, &payload.body))
    }

    /// The cached avatar, or the default one when nothing is cached.
    pub fn get_user_avatar(&self) -> String {
        match self.storage.get_item(USER_AVATAR_KEY) {
            Ok(Some(avatar)) if !avatar.is_empty() => avatar,
            Ok(_) => {
                self.logger
                    .warn("User avatar not found, returning default.");
                self.default_avatar.clone()
            }
            Err(e) => {
                self.logger.error(&format!(
                    "An error occurred while reading user avatar: {e}"
                ));
                self.default_avatar.clone()
            }
        }
    }
}

pub fn to_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{mime};base64,{}", STANDARD.encode(bytes))
}
