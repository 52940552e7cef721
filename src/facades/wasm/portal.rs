use super::converters::{from_js_value, payload_to_js, to_js_value};
use super::observer::JsObserverRegistry;
use crate::config::PortalConfig;
use crate::domain::account::{LoginData, PasswordChange, RegistrationData};
use crate::domain::image::ImageFile;
use crate::domain::profile::{ProfileData, ReferenceList};
use crate::domain::session::{GeneralSettings, SoundSettings, Theme};
use crate::portal::Portal;
use js_sys::Promise;
use std::future::Future;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::future_to_promise;

/// The portal as seen from JavaScript. Async operations return promises; a
/// failed request rejects with `{status, error, message}`.
#[wasm_bindgen]
pub struct PortalHandle {
    portal: Rc<Portal>,
    theme: JsObserverRegistry,
    avatar: JsObserverRegistry,
}

impl PortalHandle {
    fn spawn<F, Fut>(&self, run: F) -> Promise
    where
        F: FnOnce(Rc<Portal>) -> Fut,
        Fut: Future<Output = Result<JsValue, JsValue>> + 'static,
    {
        future_to_promise(run(Rc::clone(&self.portal)))
    }

    fn reference_list(&self, list: ReferenceList) -> Promise {
        self.spawn(move |portal| async move { to_js_value(&portal.reference_list(list).await?) })
    }
}

#[wasm_bindgen]
impl PortalHandle {
    /// `config` is `{requestUrl, username, password, avatarBaseUrl?,
    /// avatarExtension?, defaultAvatar?}`.
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<PortalHandle, JsValue> {
        let config: PortalConfig = from_js_value(config)?;
        let portal = Portal::new(config)?;

        let listeners = portal.listeners().clone();
        Ok(Self {
            portal: Rc::new(portal),
            theme: JsObserverRegistry::wrap(listeners.theme),
            avatar: JsObserverRegistry::wrap(listeners.avatar),
        })
    }

    #[wasm_bindgen(getter, js_name = themeListeners)]
    pub fn theme_listeners(&self) -> JsObserverRegistry {
        self.theme.clone()
    }

    #[wasm_bindgen(getter, js_name = avatarListeners)]
    pub fn avatar_listeners(&self) -> JsObserverRegistry {
        self.avatar.clone()
    }

    pub fn login(&self, login_data: JsValue) -> Promise {
        self.spawn(|portal| async move {
            let login_data: LoginData = from_js_value(login_data)?;
            let user = portal.login(&login_data).await?;
            to_js_value(&user)
        })
    }

    /// Resolves to the page URL of `destination`, or `null`.
    #[wasm_bindgen(js_name = loginAndRedirect)]
    pub fn login_and_redirect(&self, login_data: JsValue, destination: String) -> Promise {
        self.spawn(|portal| async move {
            let login_data: LoginData = from_js_value(login_data)?;
            let page = portal.login_and_redirect(&login_data, &destination).await?;
            Ok::<_, JsValue>(page.map(JsValue::from).unwrap_or(JsValue::NULL))
        })
    }

    pub fn register(&self, user: JsValue, password_confirmation: String) -> Promise {
        self.spawn(|portal| async move {
            let user: RegistrationData = from_js_value(user)?;
            let payload = portal.register(&user, &password_confirmation).await?;
            payload_to_js(&payload)
        })
    }

    #[wasm_bindgen(js_name = confirmAccount)]
    pub fn confirm_account(&self, id: String, token: String) -> Promise {
        self.spawn(|portal| async move {
            let payload = portal.confirm_account(&id, &token).await?;
            payload_to_js(&payload)
        })
    }

    #[wasm_bindgen(js_name = recoverPassword)]
    pub fn recover_password(&self, email: String) -> Promise {
        self.spawn(|portal| async move {
            let payload = portal.recover_password(&email).await?;
            payload_to_js(&payload)
        })
    }

    #[wasm_bindgen(js_name = changePassword)]
    pub fn change_password(&self, change: JsValue) -> Promise {
        self.spawn(|portal| async move {
            let change: PasswordChange = from_js_value(change)?;
            let payload = portal.change_password(&change).await?;
            payload_to_js(&payload)
        })
    }

    #[wasm_bindgen(js_name = profileForm)]
    pub fn profile_form(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.portal.profile_form())
    }

    #[wasm_bindgen(js_name = updateProfile)]
    pub fn update_profile(&self, profile: JsValue) -> Promise {
        self.spawn(|portal| async move {
            let profile: ProfileData = from_js_value(profile)?;
            let user = portal.update_profile(&profile).await?;
            to_js_value(&user)
        })
    }

    #[wasm_bindgen(js_name = previewTheme)]
    pub fn preview_theme(&self, theme: JsValue) -> Result<bool, JsValue> {
        let theme: Theme = from_js_value(theme)?;
        Ok(self.portal.preview_theme(theme))
    }

    #[wasm_bindgen(js_name = saveSettings)]
    pub fn save_settings(&self, general: JsValue, sound: JsValue) -> Promise {
        self.spawn(|portal| async move {
            let general: GeneralSettings = from_js_value(general)?;
            let sound: SoundSettings = from_js_value(sound)?;
            let user = portal.save_settings(&general, &sound).await?;
            to_js_value(&user)
        })
    }

    /// Resolves to `true` once the new avatar is cached.
    #[wasm_bindgen(js_name = uploadAvatar)]
    pub fn upload_avatar(&self, name: String, mime_type: String, bytes: Vec<u8>) -> Promise {
        self.spawn(|portal| async move {
            let file = ImageFile {
                name,
                mime_type,
                bytes,
            };
            Ok::<_, JsValue>(JsValue::from_bool(portal.upload_avatar(&file).await))
        })
    }

    #[wasm_bindgen(js_name = userAvatar)]
    pub fn user_avatar(&self) -> String {
        self.portal.user_avatar()
    }

    pub fn logout(&self) -> Result<(), JsValue> {
        Ok(self.portal.logout()?)
    }

    #[wasm_bindgen(js_name = isLoggedIn)]
    pub fn is_logged_in(&self) -> bool {
        self.portal.is_logged_in()
    }

    #[wasm_bindgen(js_name = userData)]
    pub fn user_data(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.portal.user_data())
    }

    #[wasm_bindgen(js_name = themeName)]
    pub fn theme_name(&self) -> String {
        self.portal.theme_name()
    }

    pub fn achievements(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.portal.achievements())
    }

    pub fn games(&self) -> Result<JsValue, JsValue> {
        to_js_value(&self.portal.games())
    }

    #[wasm_bindgen(js_name = enabledGames)]
    pub fn enabled_games(&self) -> Promise {
        self.spawn(|portal| async move { to_js_value(&portal.enabled_games().await?) })
    }

    pub fn genders(&self) -> Promise {
        self.reference_list(ReferenceList::Genders)
    }

    pub fn nationalities(&self) -> Promise {
        self.reference_list(ReferenceList::Nationalities)
    }

    pub fn themes(&self) -> Promise {
        self.reference_list(ReferenceList::Themes)
    }
}
