//! Cancelable timers tied to component lifetime.
//!
//! Dropping a `gloo-timers` handle clears the underlying browser timer.
//! These wrappers keep the handle in a shared slot so an event handler can
//! replace or cancel it, and [`DeferredTask::cancel_on_cleanup`] makes sure
//! nothing fires after the owning component is gone.

use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use leptos::on_cleanup;

/// At most one pending one-shot callback.
#[derive(Clone, Default)]
pub struct DeferredTask {
    handle: Rc<RefCell<Option<Timeout>>>,
}

impl DeferredTask {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f` after `millis`, replacing (and cancelling) any pending callback.
    pub fn schedule(&self, millis: u32, f: impl FnOnce() + 'static) {
        let timeout = Timeout::new(millis, f);
        *self.handle.borrow_mut() = Some(timeout);
    }

    pub fn cancel(&self) {
        self.handle.borrow_mut().take();
    }

    /// Cancels the task when the current reactive owner is disposed.
    pub fn cancel_on_cleanup(&self) {
        let task = self.clone();
        on_cleanup(move || task.cancel());
    }
}

/// A repeating callback that stops with its owner.
pub struct RepeatingTask {
    handle: Option<Interval>,
}

impl RepeatingTask {
    pub fn start(millis: u32, f: impl FnMut() + 'static) -> Self {
        Self {
            handle: Some(Interval::new(millis, f)),
        }
    }

    /// Starts the interval and stops it on owner cleanup.
    pub fn scoped(millis: u32, f: impl FnMut() + 'static) {
        let task = Self::start(millis, f);
        on_cleanup(move || task.stop());
    }

    pub fn stop(mut self) {
        self.handle.take();
    }
}
