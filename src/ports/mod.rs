/// Ports module - Defines the interfaces (traits) that abstract platform-specific functionality.
///
/// The domain layer talks to the network, the browser storage, the console and the
/// timers only through these traits, so the same request and session logic runs
/// in the browser and natively.

pub mod clock;
pub mod http;
pub mod logger;
pub mod storage;
pub mod token;

pub use clock::ClockPort;
pub use http::HttpPort;
pub use logger::LoggerPort;
pub use storage::KeyValueStorePort;
pub use token::TokenRefreshPort;
