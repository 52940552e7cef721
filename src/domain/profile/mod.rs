pub mod operations;
pub mod types;

pub use operations::{
    fetch_enabled_games, fetch_reference_list, find_game_page, sort_by_name, update_profile,
    update_settings,
};
pub use types::{ProfileData, ProfileUpdateBody, ReferenceList, SettingsUpdateBody};
