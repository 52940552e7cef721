use crate::domain::session::StorageError;
use wasm_bindgen::prelude::JsValue;
use wasm_bindgen::JsCast;
use web_sys::{DedicatedWorkerGlobalScope, Storage};

pub fn get_global_scope() -> Result<JsValue, StorageError> {
    if let Ok(scope) = js_sys::global().dyn_into::<DedicatedWorkerGlobalScope>() {
        return Ok(JsValue::from(scope));
    }

    let window = web_sys::window().ok_or_else(|| {
        StorageError::Unavailable("Neither DedicatedWorkerGlobalScope nor Window found".to_string())
    })?;
    Ok(JsValue::from(window))
}

/// `window.localStorage`. Workers have none.
pub fn local_storage() -> Result<Storage, StorageError> {
    let window = get_global_scope()?
        .dyn_into::<web_sys::Window>()
        .map_err(|_| StorageError::Unavailable("localStorage needs a window".to_string()))?;

    window
        .local_storage()
        .map_err(|e| StorageError::Unavailable(format!("{e:?}")))?
        .ok_or_else(|| StorageError::Unavailable("localStorage is disabled".to_string()))
}
