//! Future-to-callback bridging
//!
//! Awaits a fallible future and hands its settled `Result` to an optional
//! completion callback, then returns the settlement unchanged so the caller
//! can keep chaining.
//!
//! The callback runs on its own spawned task. That buys two guarantees:
//! the invocation happens strictly after settlement on a later scheduler
//! turn, and a panicking callback surfaces as a fault on that task alone.
//! It can neither poison the returned `Result` nor trigger a second
//! invocation.

use std::future::Future;

/// Bridge a future's settlement into a completion callback.
///
/// Must be awaited inside a tokio runtime when a callback is supplied (the
/// callback is posted to the runtime's task queue).
pub async fn nodify<T, E, F, C>(future: F, callback: Option<C>) -> Result<T, E>
where
    T: Clone + Send + 'static,
    E: Clone + Send + 'static,
    F: Future<Output = Result<T, E>>,
    C: FnOnce(Result<T, E>) + Send + 'static,
{
    let outcome = future.await;

    if let Some(callback) = callback {
        let settled = outcome.clone();
        tokio::spawn(async move { callback(settled) });
    }

    outcome
}
