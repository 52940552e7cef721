use crate::adapters::logger;
use crate::domain::observer::{observer, Observer, ObserverRegistry};
use js_sys::Function;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;

/// JavaScript view of an `ObserverRegistry`.
///
/// Keeps the JS function next to the Rust observer that calls it, so that
/// `unsubscribe` can match callbacks with `===`.
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct JsObserverRegistry {
    registry: Rc<ObserverRegistry>,
    bridges: Rc<RefCell<Vec<(Function, Observer)>>>,
}

impl JsObserverRegistry {
    pub fn wrap(registry: Rc<ObserverRegistry>) -> Self {
        Self {
            registry,
            bridges: Rc::default(),
        }
    }
}

#[wasm_bindgen]
impl JsObserverRegistry {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self::default()
    }

    /// Values that are not functions are ignored.
    pub fn subscribe(&self, callback: JsValue) {
        let Some(function) = callback.dyn_ref::<Function>() else {
            return;
        };

        let target = function.clone();
        let bridge = observer(move || {
            if let Err(e) = target.call0(&JsValue::NULL) {
                logger().error(&format!("Observer threw: {e:?}"));
            }
        });

        self.registry.subscribe(bridge.clone());
        self.bridges.borrow_mut().push((function.clone(), bridge));
    }

    pub fn unsubscribe(&self, callback: JsValue) {
        let removed: Vec<Observer> = {
            let mut bridges = self.bridges.borrow_mut();
            let mut removed = Vec::new();
            bridges.retain(|(function, bridge)| {
                let value: &JsValue = function;
                let matches = *value == callback;
                if matches {
                    removed.push(bridge.clone());
                }
                !matches
            });
            removed
        };

        for bridge in &removed {
            self.registry.unsubscribe(bridge);
        }
    }

    #[wasm_bindgen(js_name = notifyAll)]
    pub fn notify_all(&self) {
        self.registry.notify_all();
    }

    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.registry.len()
    }
}
