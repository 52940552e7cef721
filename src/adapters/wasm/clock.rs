use crate::global::get_global_scope;
use crate::ports::ClockPort;
use async_trait::async_trait;
use gloo_timers::future::TimeoutFuture;
use wasm_bindgen::JsCast;
use web_sys::{Performance, WorkerGlobalScope};

#[derive(Debug, Clone, Copy, Default)]
pub struct Clock;

impl Clock {
    pub fn new() -> Self {
        Self
    }

    fn get_performance(&self) -> Option<Performance> {
        let scope = get_global_scope().ok()?;
        if let Ok(worker) = scope.clone().dyn_into::<WorkerGlobalScope>() {
            worker.performance()
        } else if let Ok(window) = scope.dyn_into::<web_sys::Window>() {
            window.performance()
        } else {
            None
        }
    }
}

#[async_trait(?Send)]
impl ClockPort for Clock {
    fn now(&self) -> f64 {
        self.get_performance().map(|perf| perf.now()).unwrap_or(0.0)
    }

    fn is_available(&self) -> bool {
        self.get_performance().is_some()
    }

    async fn sleep(&self, millis: u32) {
        TimeoutFuture::new(millis).await;
    }
}
