/// WASM adapters - implementations using browser APIs.
pub mod clock;
pub mod console_logger;
pub mod error_conversions;
pub mod fetch_http;
pub mod local_storage;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use fetch_http::FetchHttp;
pub use local_storage::LocalStorage;
