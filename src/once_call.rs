//! At-most-once execution
//!
//! Wraps a call site so the supplied closure body runs on the first
//! invocation only. Later invocations are no-ops, whatever arguments they
//! captured. The winning closure keeps its own captures, so the "context of
//! the first call" travels with it.

use std::sync::atomic::{AtomicBool, Ordering};

/// Gate that lets exactly one call through
#[derive(Debug, Default)]
pub struct OnceCall {
    called: AtomicBool,
}

impl OnceCall {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `f` if no call has won yet; `None` on every later call.
    pub fn call<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        if self.called.swap(true, Ordering::SeqCst) {
            None
        } else {
            Some(f())
        }
    }

    /// Whether the gate has already fired
    pub fn has_fired(&self) -> bool {
        self.called.load(Ordering::SeqCst)
    }
}
