//! The application root: one `Portal` per page, shared by every view.

use crate::config::PortalConfig;
use crate::domain::account::{self, LoginData, PasswordChange, RegistrationData, TokenData};
use crate::domain::image::{self, ImageFile};
use crate::domain::observer::Listeners;
use crate::domain::profile::{self, ProfileData, ReferenceList};
use crate::domain::request::{AccessRefresher, Payload, RequestDispatcher};
use crate::domain::session::{
    Achievement, AvatarStore, Game, GeneralSettings, NamedItem, SessionStore, SoundSettings,
    Theme, UserData,
};
use crate::domain::validation;
use crate::errors::PortalError;
use crate::platform::Platform;
use std::sync::Arc;

pub const DEFAULT_THEME_NAME: &str = "Default";

/// Delay between caching a freshly uploaded avatar and telling the views.
const AVATAR_NOTIFY_DELAY_MS: u32 = 100;

pub struct Portal {
    platform: Platform,
    config: PortalConfig,
    dispatcher: RequestDispatcher,
    session: SessionStore,
    avatar: AvatarStore,
    listeners: Listeners,
}

impl Portal {
    /// Builds the portal over the default adapters of the current target.
    pub fn new(config: PortalConfig) -> Result<Self, PortalError> {
        let config = config.normalized();
        config.validate()?;
        let platform = Platform::new(&config)?;
        Ok(Self::with_platform(platform, config))
    }

    pub fn with_platform(platform: Platform, config: PortalConfig) -> Self {
        let refresher = Arc::new(AccessRefresher::new(platform.http(), &config.request_url));
        Self {
            dispatcher: RequestDispatcher::new(&platform, refresher),
            session: SessionStore::new(&platform),
            avatar: AvatarStore::new(&platform, &config),
            listeners: Listeners::new(),
            platform,
            config,
        }
    }

    pub fn config(&self) -> &PortalConfig {
        &self.config
    }

    pub fn platform(&self) -> &Platform {
        &self.platform
    }

    pub fn dispatcher(&self) -> &RequestDispatcher {
        &self.dispatcher
    }

    pub fn session(&self) -> &SessionStore {
        &self.session
    }

    pub fn avatar(&self) -> &AvatarStore {
        &self.avatar
    }

    pub fn listeners(&self) -> &Listeners {
        &self.listeners
    }

    fn request_url(&self) -> &str {
        &self.config.request_url
    }

    /// Logs in, then caches the user record and the avatar.
    pub async fn login(&self, login_data: &LoginData) -> Result<UserData, PortalError> {
        validation::validate_login_data(login_data)?;
        account::login_user(&self.dispatcher, self.request_url(), login_data).await?;

        let user = self
            .session
            .fetch_user_data(&self.dispatcher, self.request_url())
            .await?;
        self.avatar.fetch_and_save_user_avatar(user.id).await;
        Ok(user)
    }

    /// Logs in and returns the page of the game called `destination`, if that
    /// game is enabled.
    pub async fn login_and_redirect(
        &self,
        login_data: &LoginData,
        destination: &str,
    ) -> Result<Option<String>, PortalError> {
        let games = profile::fetch_enabled_games(&self.dispatcher, self.request_url()).await?;
        self.login(login_data).await?;
        Ok(profile::find_game_page(&games, destination).map(str::to_string))
    }

    pub async fn register(
        &self,
        user: &RegistrationData,
        password_confirmation: &str,
    ) -> Result<Payload, PortalError> {
        validation::validate_registration(user, password_confirmation)?;
        account::register_user(&self.dispatcher, self.request_url(), user).await
    }

    /// `id` and `token` as they appear in the confirmation link.
    pub async fn confirm_account(&self, id: &str, token: &str) -> Result<Payload, PortalError> {
        let token = TokenData::from_link(id, token)?;
        account::confirm_account(&self.dispatcher, self.request_url(), &token).await
    }

    pub async fn recover_password(&self, email: &str) -> Result<Payload, PortalError> {
        validation::validate_email(email)?;
        account::reset_password(&self.dispatcher, self.request_url(), email).await
    }

    pub async fn change_password(&self, change: &PasswordChange) -> Result<Payload, PortalError> {
        validation::validate_password_update(change)?;
        account::change_password(&self.dispatcher, &self.session, self.request_url(), change).await
    }

    /// The profile form pre-filled from the session record.
    pub fn profile_form(&self) -> Option<ProfileData> {
        ProfileData::from_user_data(&self.session.load_user_data()?)
    }

    /// Sends the profile, then refreshes the cached user record.
    pub async fn update_profile(&self, profile_data: &ProfileData) -> Result<UserData, PortalError> {
        validation::validate_profile_update(profile_data)?;
        profile::update_profile(&self.dispatcher, self.request_url(), profile_data).await?;
        self.session
            .fetch_user_data(&self.dispatcher, self.request_url())
            .await
    }

    /// Applies a theme locally, without saving it on the server.
    pub fn preview_theme(&self, theme: Theme) -> bool {
        let stored = self.session.set_temporary_theme(theme);
        if stored {
            self.listeners.theme.notify_all();
        }
        stored
    }

    /// Saves the settings, refreshes the cached user record and tells the theme
    /// observers.
    pub async fn save_settings(
        &self,
        general: &GeneralSettings,
        sound: &SoundSettings,
    ) -> Result<UserData, PortalError> {
        profile::update_settings(&self.dispatcher, self.request_url(), general, sound).await?;
        let user = self
            .session
            .fetch_user_data(&self.dispatcher, self.request_url())
            .await?;
        self.listeners.theme.notify_all();
        Ok(user)
    }

    /// Uploads a new avatar and re-caches it. The avatar observers are told
    /// only once the new image is cached.
    pub async fn upload_avatar(&self, file: &ImageFile) -> bool {
        let data_url = image::read_file_as_data_url(file);

        if let Err(e) = image::upload_image(&self.dispatcher, self.request_url(), &data_url).await {
            self.platform
                .logger()
                .error(&format!("Error during image upload: {e}"));
            return false;
        }

        let updated = self.avatar.update_avatar().await;
        if updated {
            self.platform.clock().sleep(AVATAR_NOTIFY_DELAY_MS).await;
            self.listeners.avatar.notify_all();
        }
        updated
    }

    pub fn user_avatar(&self) -> String {
        self.avatar.get_user_avatar()
    }

    pub fn logout(&self) -> Result<(), PortalError> {
        self.session.clear_all()?;
        Ok(())
    }

    pub fn is_logged_in(&self) -> bool {
        self.session.load_user_data().is_some()
    }

    pub fn user_data(&self) -> Option<UserData> {
        self.session.load_user_data()
    }

    pub fn theme_name(&self) -> String {
        self.session
            .theme_name()
            .unwrap_or_else(|| DEFAULT_THEME_NAME.to_string())
    }

    pub fn achievements(&self) -> Vec<Achievement> {
        self.session
            .load_user_data()
            .and_then(|user| user.achievements)
            .unwrap_or_default()
    }

    pub fn games(&self) -> Vec<Game> {
        self.session
            .load_user_data()
            .and_then(|user| user.games)
            .unwrap_or_default()
    }

    pub async fn enabled_games(&self) -> Result<Vec<Game>, PortalError> {
        profile::fetch_enabled_games(&self.dispatcher, self.request_url()).await
    }

    pub async fn reference_list(&self, list: ReferenceList) -> Result<Vec<NamedItem>, PortalError> {
        profile::fetch_reference_list(&self.dispatcher, self.request_url(), list).await
    }
}
