use crate::domain::request::ApiError;
use crate::domain::session::StorageError;
use crate::errors::PortalError;
use wasm_bindgen::JsValue;

fn js_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{err:?}"))
}

/// A rejected `fetch` or a failed body read.
impl From<JsValue> for ApiError {
    fn from(err: JsValue) -> Self {
        ApiError::network(js_message(&err))
    }
}

/// `localStorage` throws on quota errors and in some private modes.
impl From<JsValue> for StorageError {
    fn from(err: JsValue) -> Self {
        StorageError::io_error(js_message(&err))
    }
}

/// Request failures reach JavaScript as `{status, error, message}` objects.
impl From<ApiError> for JsValue {
    fn from(error: ApiError) -> Self {
        let object = js_sys::Object::new();
        let set = |key: &str, value: JsValue| {
            let _ = js_sys::Reflect::set(&object, &JsValue::from_str(key), &value);
        };

        set(
            "status",
            error.status().map(JsValue::from).unwrap_or(JsValue::NULL),
        );
        set(
            "error",
            error.code().map(JsValue::from_str).unwrap_or(JsValue::NULL),
        );
        let message = match &error {
            ApiError::Status { message, .. } => message.clone(),
            other => other.to_string(),
        };
        set("message", JsValue::from_str(&message));

        object.into()
    }
}

impl From<StorageError> for JsValue {
    fn from(error: StorageError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}

impl From<PortalError> for JsValue {
    fn from(error: PortalError) -> Self {
        match error {
            PortalError::Api(api) => api.into(),
            other => JsValue::from_str(&other.to_string()),
        }
    }
}
