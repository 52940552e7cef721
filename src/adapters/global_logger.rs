/// Global logger instance - the implementation is selected by the build target:
/// the browser console on wasm32, the `log` facade natively.
use super::ConsoleLogger;
use crate::ports::LoggerPort;
use once_cell::sync::Lazy;

pub static LOGGER: Lazy<ConsoleLogger> = Lazy::new(ConsoleLogger::new);

#[inline]
pub fn logger() -> &'static dyn LoggerPort {
    &*LOGGER
}
