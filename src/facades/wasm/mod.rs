pub mod converters;
pub mod observer;
pub mod portal;

pub use observer::JsObserverRegistry;
pub use portal::PortalHandle;
