/// Adapters module - platform-specific implementations of ports.
pub mod global_clock;
pub mod global_logger;

#[cfg(not(target_arch = "wasm32"))]
pub mod native;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

#[cfg(not(target_arch = "wasm32"))]
pub use native::{Clock, ConsoleLogger};
#[cfg(target_arch = "wasm32")]
pub use wasm::{Clock, ConsoleLogger};

pub use global_clock::clock;
pub use global_logger::logger;

use crate::config::PortalConfig;
use crate::errors::PortalError;
use crate::ports::{HttpPort, KeyValueStorePort};
use std::sync::Arc;

/// File-backed under `data_dir` when configured, in memory otherwise.
#[cfg(not(target_arch = "wasm32"))]
pub fn default_storage(config: &PortalConfig) -> Result<Arc<dyn KeyValueStorePort>, PortalError> {
    Ok(match &config.data_dir {
        Some(dir) => Arc::new(native::FsStorage::new(dir)?),
        None => Arc::new(native::MemoryStorage::new()),
    })
}

#[cfg(target_arch = "wasm32")]
pub fn default_storage(_config: &PortalConfig) -> Result<Arc<dyn KeyValueStorePort>, PortalError> {
    Ok(Arc::new(wasm::LocalStorage::new()))
}

#[cfg(not(target_arch = "wasm32"))]
pub fn default_http(config: &PortalConfig) -> Result<Arc<dyn HttpPort>, PortalError> {
    Ok(Arc::new(native::ReqwestHttp::new(config)?))
}

#[cfg(target_arch = "wasm32")]
pub fn default_http(config: &PortalConfig) -> Result<Arc<dyn HttpPort>, PortalError> {
    Ok(Arc::new(wasm::FetchHttp::new(config)))
}
