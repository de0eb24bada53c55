//! Timeout helpers: one-shot callbacks, an awaitable sleep, and a
//! self-rescheduling task that can be stopped.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::Duration;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

#[inline]
fn millis(delay: Duration) -> i32 {
    delay.as_millis().min(i32::MAX as u128) as i32
}

/// Run `f` once after `delay`. Returns the browser timeout handle.
pub fn set_timeout(delay: Duration, f: impl FnOnce() + 'static) -> Option<i32> {
    let window = web::window()?;
    let callback = Closure::once_into_js(f);
    window
        .set_timeout_with_callback_and_timeout_and_arguments_0(
            callback.unchecked_ref(),
            millis(delay),
        )
        .ok()
}

pub async fn sleep(delay: Duration) {
    if delay.is_zero() {
        return;
    }
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.set_timeout_with_callback_and_timeout_and_arguments_0(&resolve, millis(delay));
        }
    });
    _ = JsFuture::from(promise).await;
}

type Step = Box<dyn FnMut() -> Duration>;

struct TaskState {
    stopped: Cell<bool>,
    pending: Cell<Option<i32>>,
    step: RefCell<Step>,
}

/// Calls `step` repeatedly; each call returns the delay before the next one.
#[derive(Clone)]
pub struct RepeatingTask {
    state: Rc<TaskState>,
}

impl RepeatingTask {
    pub fn start(first_delay: Duration, step: impl FnMut() -> Duration + 'static) -> Self {
        let state = Rc::new(TaskState {
            stopped: Cell::new(false),
            pending: Cell::new(None),
            step: RefCell::new(Box::new(step)),
        });
        schedule(state.clone(), first_delay);
        Self { state }
    }

    /// Cancel the pending run. A stopped task never runs again.
    pub fn stop(&self) {
        self.state.stopped.set(true);
        if let (Some(id), Some(w)) = (self.state.pending.take(), web::window()) {
            w.clear_timeout_with_handle(id);
        }
    }

    pub fn is_stopped(&self) -> bool {
        self.state.stopped.get()
    }
}

fn schedule(state: Rc<TaskState>, delay: Duration) {
    if state.stopped.get() {
        return;
    }
    let next_state = state.clone();
    let id = set_timeout(delay, move || {
        next_state.pending.set(None);
        if next_state.stopped.get() {
            return;
        }
        let next = (&mut *next_state.step.borrow_mut())();
        schedule(next_state, next);
    });
    state.pending.set(id);
}
