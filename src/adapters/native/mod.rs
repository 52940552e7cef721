/// Native adapters - implementations for native Rust (non-WASM).
pub mod clock;
pub mod console_logger;
pub mod fs_storage;
pub mod http;
pub mod memory_storage;

pub use clock::Clock;
pub use console_logger::ConsoleLogger;
pub use fs_storage::FsStorage;
pub use http::ReqwestHttp;
pub use memory_storage::MemoryStorage;
