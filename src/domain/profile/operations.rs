use super::types::{ProfileData, ProfileUpdateBody, ReferenceList, SettingsUpdateBody};
use crate::domain::request::{endpoints, Payload, Request, RequestDispatcher};
use crate::domain::session::{Game, GeneralSettings, NamedItem, SoundSettings};
use crate::errors::PortalError;
use std::cmp::Ordering;

pub async fn update_profile(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    profile: &ProfileData,
) -> Result<Payload, PortalError> {
    let body = serde_json::to_value(ProfileUpdateBody::try_from(profile)?)?;
    Ok(dispatcher
        .patch(&format!("{request_url}{}", endpoints::USER_PROFILE), body)
        .await?)
}

pub async fn update_settings(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    general: &GeneralSettings,
    sound: &SoundSettings,
) -> Result<Payload, PortalError> {
    let body = serde_json::to_value(SettingsUpdateBody::new(general, sound))?;
    Ok(dispatcher
        .put(&format!("{request_url}{}", endpoints::USER_SETTINGS), body)
        .await?)
}

/// Case-insensitive name order, ties broken by the exact name.
pub fn sort_by_name(items: &mut [NamedItem]) {
    items.sort_by(|a, b| match a.name.to_lowercase().cmp(&b.name.to_lowercase()) {
        Ordering::Equal => a.name.cmp(&b.name),
        other => other,
    });
}

/// Fetches one of the public lists, sorted by name.
pub async fn fetch_reference_list(
    dispatcher: &RequestDispatcher,
    request_url: &str,
    list: ReferenceList,
) -> Result<Vec<NamedItem>, PortalError> {
    let request = Request::get(format!("{request_url}{}", list.path())).public();
    let mut items: Vec<NamedItem> = dispatcher
        .send_direct(&request)
        .await?
        .json::<Option<Vec<NamedItem>>>()?
        .unwrap_or_default();

    sort_by_name(&mut items);
    Ok(items)
}

pub async fn fetch_enabled_games(
    dispatcher: &RequestDispatcher,
    request_url: &str,
) -> Result<Vec<Game>, PortalError> {
    let request = Request::get(format!("{request_url}{}", endpoints::GAMES_ENABLED)).public();
    Ok(dispatcher
        .send_direct(&request)
        .await?
        .json::<Option<Vec<Game>>>()?
        .unwrap_or_default())
}

/// Page of the game called `destination`, if it is among `games`.
pub fn find_game_page<'a>(games: &'a [Game], destination: &str) -> Option<&'a str> {
    games
        .iter()
        .find(|game| game.name.as_deref() == Some(destination))
        .and_then(|game| game.page_url.as_deref())
}
