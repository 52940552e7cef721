#![cfg(not(target_arch = "wasm32"))]


use futures::executor::block_on;
use nebula_portal::domain::account::{LoginData, PasswordChange};
use nebula_portal::domain::image::ImageFile;
use nebula_portal::domain::profile::{ProfileData, ReferenceList};
use nebula_portal::domain::request::{ApiError, Auth, Body, Method, Payload};
use nebula_portal::domain::session::{GeneralSettings, NamedItem, SoundSettings};
use nebula_portal::domain::validation::ValidationError;
use nebula_portal::{observer, Portal, PortalError};
use serde_json::{json, Value};
use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;
use test_utils::{config, platform, token_expired, InstantClock, ScriptedHttp, REQUEST_URL};

fn portal(http: &Arc<ScriptedHttp>, clock: &'static InstantClock) -> Portal {
    Portal::with_platform(platform(http.clone(), clock), config())
}

fn credentials() -> LoginData {
    LoginData {
        email: "orion@milkyway.local".to_string(),
        password: "Passw0rd".to_string(),
    }
}

fn user_json() -> Value {
    json!({
        "id": 7,
        "login": "orion",
        "email": "orion@milkyway.local",
        "firstName": "Orion",
        "lastName": "Hunter",
        "birthDate": "1990-05-01",
        "nationality": {"id": 12, "name": "Poland"},
        "gender": {"id": 1, "name": "Male"},
        "settings": {"general": {"userId": 7, "theme": {"id": 2, "name": "Dark"}}},
        "games": [{"id": 1, "name": "Asteroids", "pageUrl": "https://milkyway.local/asteroids", "enable": true}]
    })
}

fn avatar_payload() -> Payload {
    Payload::new(200, Some("image/png".to_string()), b"abc".to_vec())
}

fn url(path: &str) -> String {
    format!("{REQUEST_URL}{path}")
}

fn counter() -> (Rc<Cell<u32>>, nebula_portal::Observer) {
    let count = Rc::new(Cell::new(0));
    let captured = count.clone();
    (count, observer(move || captured.set(captured.get() + 1)))
}

fn logged_in(http: &Arc<ScriptedHttp>, clock: &'static InstantClock) -> Portal {
    http.respond_json(json!({}))
        .respond_json(user_json())
        .respond(Ok(avatar_payload()));
    let portal = portal(http, clock);
    block_on(portal.login(&credentials())).unwrap();
    portal
}

#[test]
fn login_caches_user_and_avatar() {
    let http = ScriptedHttp::new();
    let portal = logged_in(&http, InstantClock::leaked());

    let requests = http.requests();
    assert_eq!(requests.len(), 3);
    assert_eq!(requests[0].url, url("/account/token"));
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].auth, Auth::Included);
    assert_eq!(
        requests[0].body,
        Body::Json(json!({"email": "orion@milkyway.local", "password": "Passw0rd"}))
    );
    assert_eq!(requests[1].url, url("/users"));
    assert_eq!(requests[2].url, "https://milkyway.local/user/avatar/7.jpg");

    assert!(portal.is_logged_in());
    assert_eq!(portal.theme_name(), "Dark");
    assert_eq!(portal.user_avatar(), "data:image/png;base64,YWJj");
    assert_eq!(portal.games().len(), 1);
    assert!(portal.achievements().is_empty());
}

#[test]
fn invalid_login_sends_nothing() {
    let http = ScriptedHttp::new();
    let portal = portal(&http, InstantClock::leaked());

    let weak = LoginData {
        password: "short".to_string(),
        ..credentials()
    };
    assert_eq!(
        block_on(portal.login(&weak)).unwrap_err(),
        PortalError::Validation(ValidationError::WeakPassword("Password"))
    );
    assert_eq!(http.calls(), 0);
}

#[test]
fn rejected_login_surfaces_the_api_error() {
    let http = ScriptedHttp::new();
    http.respond_error(ApiError::from_response(401, r#"{"error":"BAD_CREDENTIALS"}"#));
    let portal = portal(&http, InstantClock::leaked());

    let error = block_on(portal.login(&credentials())).unwrap_err();

    assert_eq!(error.api_error().and_then(|e| e.status()), Some(401));
    assert_eq!(http.calls(), 1);
    assert!(!portal.is_logged_in());
}

#[test]
fn expired_token_during_login_is_refreshed() {
    let http = ScriptedHttp::new();
    http.respond_json(json!({}))
        .respond_error(token_expired())
        .respond(Ok(Payload::default()))
        .respond_json(user_json())
        .respond(Ok(avatar_payload()));
    let portal = portal(&http, InstantClock::leaked());

    let user = block_on(portal.login(&credentials())).unwrap();

    assert_eq!(user.id, Some(7));
    let urls: Vec<String> = http.requests().into_iter().map(|r| r.url).collect();
    assert_eq!(urls[2], url("/token/refresh/access"));
    assert_eq!(urls[3], url("/users"));
}

#[test]
fn login_and_redirect_finds_the_game_page() {
    let http = ScriptedHttp::new();
    http.respond_json(json!([
        {"id": 1, "name": "Asteroids", "pageUrl": "https://milkyway.local/asteroids", "enable": true}
    ]))
    .respond_json(json!({}))
    .respond_json(user_json())
    .respond(Ok(avatar_payload()));
    let portal = portal(&http, InstantClock::leaked());

    let page = block_on(portal.login_and_redirect(&credentials(), "Asteroids")).unwrap();

    assert_eq!(page.as_deref(), Some("https://milkyway.local/asteroids"));
    let first = &http.requests()[0];
    assert_eq!(first.url, url("/games/enabled"));
    assert_eq!(first.auth, Auth::Public);
}

#[test]
fn change_password_needs_a_session() {
    let http = ScriptedHttp::new();
    let portal = portal(&http, InstantClock::leaked());

    let change = PasswordChange {
        user_id: 7,
        current_password: "OldPassw0rd".to_string(),
        new_password: "NewPassw0rd".to_string(),
        confirm_password: "NewPassw0rd".to_string(),
    };
    assert_eq!(
        block_on(portal.change_password(&change)).unwrap_err(),
        PortalError::SessionMissing
    );
    assert_eq!(http.calls(), 0);
}

#[test]
fn change_password_sends_the_session_email() {
    let http = ScriptedHttp::new();
    let portal = logged_in(&http, InstantClock::leaked());
    http.respond_json(json!({}));

    let change = PasswordChange {
        user_id: 7,
        current_password: "OldPassw0rd".to_string(),
        new_password: "NewPassw0rd".to_string(),
        confirm_password: "NewPassw0rd".to_string(),
    };
    block_on(portal.change_password(&change)).unwrap();

    let request = http.requests().pop().unwrap();
    assert_eq!(request.url, url("/account/change-password"));
    assert_eq!(
        request.body,
        Body::Json(json!({
            "userId": 7,
            "email": "orion@milkyway.local",
            "actualPassword": "OldPassw0rd",
            "newPassword": "NewPassw0rd"
        }))
    );
}

#[test]
fn confirm_account_parses_the_link_id() {
    let http = ScriptedHttp::new();
    http.respond_json(json!({}));
    let portal = portal(&http, InstantClock::leaked());

    assert!(matches!(
        block_on(portal.confirm_account("abc", "t0k3n")),
        Err(PortalError::Validation(ValidationError::InvalidTokenId(_)))
    ));
    assert_eq!(http.calls(), 0);

    block_on(portal.confirm_account("42", "t0k3n")).unwrap();
    let request = &http.requests()[0];
    assert_eq!(request.method, Method::Patch);
    assert_eq!(request.auth, Auth::Public);
    assert_eq!(request.body, Body::Json(json!({"tokenId": 42, "token": "t0k3n"})));
}

#[test]
fn recover_password_posts_to_the_email_path() {
    let http = ScriptedHttp::new();
    http.respond(Ok(Payload::default()));
    let portal = portal(&http, InstantClock::leaked());

    assert!(block_on(portal.recover_password("not-an-email")).is_err());
    block_on(portal.recover_password("orion@milkyway.local")).unwrap();

    let request = &http.requests()[0];
    assert_eq!(request.method, Method::PostNoBody);
    assert_eq!(request.body, Body::Empty);
    assert_eq!(request.url, url("/account/reset-password/orion@milkyway.local"));
}

#[test]
fn preview_theme_notifies_only_when_stored() {
    let http = ScriptedHttp::new();
    let portal = portal(&http, InstantClock::leaked());
    let (count, theme_observer) = counter();
    portal.listeners().theme.subscribe(theme_observer);

    assert!(!portal.preview_theme(NamedItem::new(3, "Nebula")));
    assert_eq!(count.get(), 0);
    assert_eq!(portal.theme_name(), "Default");

    let portal = logged_in(&http, InstantClock::leaked());
    let (count, theme_observer) = counter();
    portal.listeners().theme.subscribe(theme_observer);

    assert!(portal.preview_theme(NamedItem::new(3, "Nebula")));
    assert_eq!(count.get(), 1);
    assert_eq!(portal.theme_name(), "Nebula");
}

#[test]
fn save_settings_refreshes_user_and_notifies_theme() {
    let http = ScriptedHttp::new();
    let portal = logged_in(&http, InstantClock::leaked());
    let (count, theme_observer) = counter();
    portal.listeners().theme.subscribe(theme_observer);

    let mut saved = user_json();
    saved["settings"]["general"]["theme"] = json!({"id": 3, "name": "Nebula"});
    http.respond_json(json!({})).respond_json(saved);

    let general = GeneralSettings {
        user_id: Some(7),
        theme: Some(NamedItem::new(3, "Nebula")),
        ..GeneralSettings::default()
    };
    let sound = SoundSettings {
        user_id: Some(7),
        volume_master: 80,
        ..SoundSettings::default()
    };
    block_on(portal.save_settings(&general, &sound)).unwrap();

    let requests = http.requests();
    assert_eq!(requests[3].method, Method::Put);
    assert_eq!(requests[3].url, url("/users/settings"));
    assert_eq!(requests[4].url, url("/users"));
    assert_eq!(count.get(), 1);
    assert_eq!(portal.theme_name(), "Nebula");
}

#[test]
fn update_profile_sends_timestamp_and_refetches() {
    let http = ScriptedHttp::new();
    let portal = logged_in(&http, InstantClock::leaked());
    http.respond_json(json!({})).respond_json(user_json());

    let form = portal.profile_form().unwrap();
    let profile = ProfileData {
        first_name: "Orionis".to_string(),
        ..form
    };
    block_on(portal.update_profile(&profile)).unwrap();

    let requests = http.requests();
    assert_eq!(requests[3].method, Method::Patch);
    assert_eq!(
        requests[3].body,
        Body::Json(json!({
            "userId": 7,
            "firstName": "Orionis",
            "lastName": "Hunter",
            "birthdate": "1990-05-01T00:00:00.000Z",
            "nationalityId": 12,
            "genderId": 1
        }))
    );
    assert_eq!(requests[4].url, url("/users"));
}

#[test]
fn upload_avatar_notifies_after_delay() {
    let http = ScriptedHttp::new();
    let clock = InstantClock::leaked();
    let portal = logged_in(&http, clock);
    let (count, avatar_observer) = counter();
    portal.listeners().avatar.subscribe(avatar_observer);

    http.respond_json(json!({}))
        .respond(Ok(Payload::new(200, Some("image/png".to_string()), b"new".to_vec())));
    let file = ImageFile {
        name: "me.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: b"new".to_vec(),
    };

    assert!(block_on(portal.upload_avatar(&file)));

    let upload = &http.requests()[3];
    assert_eq!(upload.method, Method::PostMultipart);
    assert_eq!(upload.url, url("/image"));
    match &upload.body {
        Body::Multipart(parts) => {
            assert_eq!(parts.len(), 1);
            assert_eq!(parts[0].field, "file");
            assert_eq!(parts[0].file_name, "image.png");
            assert_eq!(parts[0].mime_type, "image/png");
            assert_eq!(parts[0].bytes, b"new".to_vec());
        }
        other => panic!("expected multipart body, got {other:?}"),
    }
    assert_eq!(clock.sleeps(), vec![100]);
    assert_eq!(count.get(), 1);
    assert_eq!(portal.user_avatar(), "data:image/png;base64,bmV3");
}

#[test]
fn failed_upload_keeps_observers_quiet() {
    let http = ScriptedHttp::new();
    let clock = InstantClock::leaked();
    let portal = logged_in(&http, clock);
    let (count, avatar_observer) = counter();
    portal.listeners().avatar.subscribe(avatar_observer);

    http.respond_error(ApiError::from_response(413, "Payload Too Large"));
    let file = ImageFile {
        name: "me.png".to_string(),
        mime_type: "image/png".to_string(),
        bytes: b"big".to_vec(),
    };

    assert!(!block_on(portal.upload_avatar(&file)));
    assert_eq!(http.calls(), 4);
    assert!(clock.sleeps().is_empty());
    assert_eq!(count.get(), 0);
}

#[test]
fn reference_lists_are_sorted_by_name() {
    let http = ScriptedHttp::new();
    http.respond_json(json!([
        {"id": 3, "name": "Sweden"},
        {"id": 1, "name": "austria"},
        {"id": 2, "name": "Poland"}
    ]));
    let portal = portal(&http, InstantClock::leaked());

    let nationalities = block_on(portal.reference_list(ReferenceList::Nationalities)).unwrap();

    let names: Vec<&str> = nationalities.iter().map(|n| n.name.as_str()).collect();
    assert_eq!(names, vec!["austria", "Poland", "Sweden"]);
    assert_eq!(http.requests()[0].url, url("/nationalities"));
    assert_eq!(http.requests()[0].auth, Auth::Public);
}

#[test]
fn logout_clears_everything() {
    let http = ScriptedHttp::new();
    let portal = logged_in(&http, InstantClock::leaked());

    portal.logout().unwrap();

    assert!(!portal.is_logged_in());
    assert_eq!(portal.theme_name(), "Default");
    assert_eq!(portal.user_avatar(), config().default_avatar);
    assert!(portal.games().is_empty());
}
