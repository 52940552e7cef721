// Hexagonal architecture modules
pub mod adapters;
pub mod domain;
pub mod facades;
pub mod platform;
pub mod ports;

pub mod config;
pub mod errors;
#[cfg(target_arch = "wasm32")]
pub mod global;
pub mod measure;
pub mod portal;

pub use config::PortalConfig;
pub use domain::observer::{observer, Listeners, Observer, ObserverRegistry};
pub use domain::request::{ApiError, RequestDispatcher};
pub use errors::PortalError;
pub use platform::Platform;
pub use portal::Portal;

use wasm_bindgen::prelude::*;

#[wasm_bindgen(start)]
pub fn start_app() -> Result<(), JsValue> {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    Ok(())
}
