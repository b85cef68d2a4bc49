//! Call-after-N completion trigger
//!
//! Counts down on each tick; when the counter reaches exactly zero the
//! completion callback fires once with no arguments. Further ticks keep
//! decrementing (the counter goes negative) but never re-fire.

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;

type Callback = Box<dyn FnOnce() + Send>;

/// Fires a callback after N ticks
pub struct After {
    remaining: AtomicI64,
    callback: Mutex<Option<Callback>>,
}

impl After {
    pub fn new(count: u32, callback: impl FnOnce() + Send + 'static) -> Self {
        Self {
            remaining: AtomicI64::new(i64::from(count)),
            callback: Mutex::new(Some(Box::new(callback))),
        }
    }

    /// Counter without a completion callback; ticks decrement silently.
    pub fn silent(count: u32) -> Self {
        Self {
            remaining: AtomicI64::new(i64::from(count)),
            callback: Mutex::new(None),
        }
    }

    /// Decrement the counter, firing the callback on the transition to zero.
    pub fn tick(&self) {
        // fetch_sub returns the previous value; we fire on 1 -> 0 only,
        // so over-ticking can never reach the callback a second time.
        if self.remaining.fetch_sub(1, Ordering::SeqCst) == 1 {
            let callback = self
                .callback
                .lock()
                .unwrap_or_else(|e| e.into_inner())
                .take();
            if let Some(callback) = callback {
                callback();
            }
        }
    }

    /// Ticks still needed before the callback fires (negative if over-ticked)
    pub fn remaining(&self) -> i64 {
        self.remaining.load(Ordering::SeqCst)
    }
}
