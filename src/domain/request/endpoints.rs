//! Paths of the portal REST API, relative to the configured request URL.

pub const LOGIN: &str = "/account/token";
pub const REGISTER: &str = "/account/register";
pub const CONFIRM_ACCOUNT: &str = "/account/confirm";
pub const CHANGE_PASSWORD: &str = "/account/change-password";
pub const RESET_PASSWORD: &str = "/account/reset-password";
pub const REFRESH_ACCESS: &str = "/token/refresh/access";
pub const USERS: &str = "/users";
pub const USER_PROFILE: &str = "/users/profile";
pub const USER_SETTINGS: &str = "/users/settings";
pub const IMAGE: &str = "/image";
pub const GENDERS: &str = "/genders";
pub const NATIONALITIES: &str = "/nationalities";
pub const THEMES: &str = "/themes";
pub const GAMES_ENABLED: &str = "/games/enabled";

pub fn reset_password(email: &str) -> String {
    format!("{RESET_PASSWORD}/{email}")
}
