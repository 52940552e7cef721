use crate::domain::request::Payload;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_wasm_bindgen::{from_value, Serializer};
use wasm_bindgen::prelude::*;

pub fn to_js_error<E: std::fmt::Display>(error: E) -> JsValue {
    JsValue::from_str(&error.to_string())
}

/// Serialises maps as plain objects so JSON-shaped data stays JSON-shaped.
pub fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    value
        .serialize(&Serializer::new().serialize_maps_as_objects(true))
        .map_err(to_js_error)
}

pub fn from_js_value<T: DeserializeOwned>(value: JsValue) -> Result<T, JsValue> {
    from_value(value).map_err(to_js_error)
}

/// The JSON body of a response, `null` when empty.
pub fn payload_to_js(payload: &Payload) -> Result<JsValue, JsValue> {
    let body: serde_json::Value = payload.json()?;
    to_js_value(&body)
}
