use crate::ports::LoggerPort;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::time::Instant;

/// Native logger forwarding to the `log` facade. Install a backend with
/// `init_logging` to see the output.
#[derive(Debug, Default)]
pub struct ConsoleLogger {
    timers: Mutex<HashMap<String, Instant>>,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }
}

impl LoggerPort for ConsoleLogger {
    fn log(&self, message: &str) {
        log::info!("{message}");
    }

    fn error(&self, message: &str) {
        log::error!("{message}");
    }

    fn warn(&self, message: &str) {
        log::warn!("{message}");
    }

    fn time(&self, label: &str) {
        self.timers.lock().insert(label.to_string(), Instant::now());
    }

    fn time_end(&self, label: &str) {
        match self.timers.lock().remove(label) {
            Some(start) => log::debug!("{label}: {:.3}ms", start.elapsed().as_secs_f64() * 1000.0),
            None => log::warn!("Timer '{label}' does not exist"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_logger_all_methods() {
        let logger = ConsoleLogger::new();
        logger.log("test log");
        logger.warn("test warn");
        logger.error("test error");
        logger.time("test_timer");
        logger.time_end("test_timer");
    }

    #[test]
    fn test_timer_is_removed_on_end() {
        let logger = ConsoleLogger::new();
        logger.time("GET /users");
        assert_eq!(logger.timers.lock().len(), 1);

        logger.time_end("GET /users");
        assert!(logger.timers.lock().is_empty());

        logger.time_end("GET /users");
    }
}
