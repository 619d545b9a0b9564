//! [`Timers`] backed by the browser's `setTimeout` / `setInterval`.

use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use notes_common::timer::{TimerId, Timers};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

#[derive(Default)]
struct Registry {
    live: HashMap<TimerId, Closure<dyn FnMut()>>,
    // A closure may clear its own handle while it is running, so it cannot be
    // dropped on the spot. Retired closures are freed on a later task.
    retired: Vec<Closure<dyn FnMut()>>,
}

#[derive(Clone, Default)]
pub struct BrowserTimers {
    registry: Rc<RefCell<Registry>>,
}

impl BrowserTimers {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self, handle: i32, closure: Closure<dyn FnMut()>) -> TimerId {
        let id = TimerId(handle as u64);
        self.registry.borrow_mut().live.insert(id, closure);
        id
    }

    fn retire(&self, id: TimerId) {
        let Some(closure) = self.registry.borrow_mut().live.remove(&id) else {
            return;
        };
        self.registry.borrow_mut().retired.push(closure);

        let registry = Rc::clone(&self.registry);
        let drain = Closure::once_into_js(move || {
            registry.borrow_mut().retired.clear();
        });
        if let Some(window) = web_sys::window() {
            let _ = window
                .set_timeout_with_callback_and_timeout_and_arguments_0(drain.unchecked_ref(), 0);
        }
    }
}

fn millis(d: Duration) -> i32 {
    d.as_millis().min(i32::MAX as u128) as i32
}

impl Timers for BrowserTimers {
    fn set_interval(&self, period: Duration, mut callback: Box<dyn FnMut()>) -> TimerId {
        let closure = Closure::<dyn FnMut()>::new(move || callback());
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, interval not scheduled");
            return TimerId(0);
        };
        let handle = window
            .set_interval_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis(period),
            )
            .unwrap_or(0);
        self.register(handle, closure)
    }

    fn set_timeout(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> TimerId {
        let own_id: Rc<Cell<Option<TimerId>>> = Rc::new(Cell::new(None));
        let mut callback = Some(callback);
        let timers = self.clone();
        let id_slot = Rc::clone(&own_id);
        let closure = Closure::<dyn FnMut()>::new(move || {
            if let Some(id) = id_slot.get() {
                timers.retire(id);
            }
            if let Some(f) = callback.take() {
                f();
            }
        });
        let Some(window) = web_sys::window() else {
            tracing::warn!("No window, timeout not scheduled");
            return TimerId(0);
        };
        let handle = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(
                closure.as_ref().unchecked_ref(),
                millis(delay),
            )
            .unwrap_or(0);
        let id = self.register(handle, closure);
        own_id.set(Some(id));
        id
    }

    fn clear(&self, id: TimerId) {
        if let Some(window) = web_sys::window() {
            // Timeout and interval handles share one pool; either call clears both kinds.
            window.clear_interval_with_handle(id.0 as i32);
        }
        self.retire(id);
    }
}
