use std::sync::atomic::{AtomicBool, Ordering};
use wasm_bindgen::prelude::*;

pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

#[wasm_bindgen]
pub fn set_debug_mode(enabled: bool) {
    DEBUG_MODE.store(enabled, Ordering::SeqCst);
}

pub fn is_debug_mode() -> bool {
    DEBUG_MODE.load(Ordering::SeqCst)
}

/// Wraps `$block` in `time`/`time_end` calls on `$logger` when debug mode is on
/// and `$clock` can measure.
#[macro_export]
macro_rules! time_it {
    ($logger:expr, $clock:expr, $label:expr, $block:expr) => {{
        let timed = $crate::measure::is_debug_mode() && $clock.is_available();
        if timed {
            $logger.time($label);
        }
        let result = $block;
        if timed {
            $logger.time_end($label);
        }
        result
    }};
}

pub use crate::time_it;
