use super::error::StorageError;
use super::types::{Theme, UserData};
use crate::domain::request::{endpoints, RequestDispatcher};
use crate::errors::PortalError;
use crate::platform::Platform;
use crate::ports::{KeyValueStorePort, LoggerPort};
use std::sync::Arc;

pub const USER_DATA_KEY: &str = "userData";

/// The session record kept in local storage.
///
/// The record is one JSON blob: every update reads it whole, changes a copy and
/// writes it whole back. Concurrent writers are last-write-wins.
#[derive(Clone)]
pub struct SessionStore {
    storage: Arc<dyn KeyValueStorePort>,
    logger: &'static dyn LoggerPort,
}

impl SessionStore {
    pub fn new(platform: &Platform) -> Self {
        Self {
            storage: platform.storage(),
            logger: platform.logger(),
        }
    }

    pub fn save_user_data(&self, user_data: &UserData) -> Result<(), StorageError> {
        let text = serde_json::to_string(user_data)
            .map_err(|e| StorageError::serialization_error(e.to_string()))?;

        self.storage.set_item(USER_DATA_KEY, &text).map_err(|e| {
            self.logger
                .error(&format!("Error during saving user data: {e}"));
            e
        })
    }

    /// Reads the session record. Absent, unreadable or malformed data all read
    /// as `None`.
    pub fn load_user_data(&self) -> Option<UserData> {
        let text = match self.storage.get_item(USER_DATA_KEY) {
            Ok(Some(text)) => text,
            Ok(None) => return None,
            Err(e) => {
                self.logger
                    .error(&format!("Error during loading user data: {e}"));
                return None;
            }
        };

        match serde_json::from_str(&text) {
            Ok(user_data) => Some(user_data),
            Err(e) => {
                self.logger
                    .error(&format!("Error during loading user data: {e}"));
                None
            }
        }
    }

    pub fn clear_user_data(&self) -> Result<(), StorageError> {
        self.storage.remove_item(USER_DATA_KEY)
    }

    /// Drops everything kept for the session, avatar included.
    pub fn clear_all(&self) -> Result<(), StorageError> {
        self.storage.clear()
    }

    pub fn user_id(&self) -> Option<i64> {
        self.load_user_data()?.id
    }

    pub fn theme_name(&self) -> Option<String> {
        self.load_user_data()?.theme().map(|theme| theme.name.clone())
    }

    /// Stores a theme without sending it to the server. Returns `false` when no
    /// session record with `settings.general` exists or it cannot be written.
    pub fn set_temporary_theme(&self, theme: Theme) -> bool {
        let Some(mut user_data) = self.load_user_data() else {
            return false;
        };
        user_data.set_theme(theme) && self.save_user_data(&user_data).is_ok()
    }

    /// Downloads the session record and stores it.
    pub async fn fetch_user_data(
        &self,
        dispatcher: &RequestDispatcher,
        request_url: &str,
    ) -> Result<UserData, PortalError> {
        let url = format!("{request_url}{}", endpoints::USERS);
        let user_data: UserData = dispatcher.get(&url).await?.json()?;
        self.save_user_data(&user_data)?;
        Ok(user_data)
    }
}
