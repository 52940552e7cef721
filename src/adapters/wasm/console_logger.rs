use crate::ports::LoggerPort;
use wasm_bindgen::JsValue;
use web_sys::console;

const DEFAULT_PREFIX: &str = "nebula-portal";

/// Browser console logger. Messages are tagged with a prefix so portal output
/// stands apart from the host page; timer labels are tagged the same way so
/// they cannot collide with the page's own `console.time` labels.
#[derive(Debug, Clone, Copy)]
pub struct ConsoleLogger {
    prefix: &'static str,
}

impl Default for ConsoleLogger {
    fn default() -> Self {
        Self::with_prefix(DEFAULT_PREFIX)
    }
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(prefix: &'static str) -> Self {
        Self { prefix }
    }

    fn tagged(&self, text: &str) -> String {
        format!("[{}] {text}", self.prefix)
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        console::log_1(&JsValue::from_str(&self.tagged(message)));
    }

    fn error(&self, message: &str) {
        console::error_1(&JsValue::from_str(&self.tagged(message)));
    }

    fn warn(&self, message: &str) {
        console::warn_1(&JsValue::from_str(&self.tagged(message)));
    }

    fn time(&self, label: &str) {
        console::time_with_label(&self.tagged(label));
    }

    fn time_end(&self, label: &str) {
        console::time_end_with_label(&self.tagged(label));
    }
}
