//! Call throttling
//!
//! Rate-limits a side-effecting closure: the first call in a window runs
//! immediately and synchronously, calls while the window is open are dropped
//! silently. No queuing and no trailing-call guarantee; a burst that ends
//! inside the window simply loses its tail.
//!
//! One `Throttle` per call site wanting an isolated window.

use std::sync::Mutex;
use std::time::{Duration, Instant};

/// Leading-edge throttle gate
pub struct Throttle {
    interval: Duration,
    last_fired: Mutex<Option<Instant>>,
}

impl Throttle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_fired: Mutex::new(None),
        }
    }

    /// Run `f` if the window is closed, dropping the call otherwise.
    ///
    /// Returns `Some` with `f`'s result when it ran, `None` when dropped.
    /// The window is measured from the start of the executed call, so it
    /// closes after `interval` regardless of what `f` does or how long it
    /// takes.
    pub fn call<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        {
            let mut last = self.last_fired.lock().unwrap_or_else(|e| e.into_inner());
            let now = Instant::now();
            match *last {
                Some(fired) if now.duration_since(fired) < self.interval => return None,
                _ => *last = Some(now),
            }
            // Lock released before invoking f: a slow closure must not
            // block other callers past the window.
        }
        Some(f())
    }
}
