//! Coarse cached timestamps
//!
//! Amortizes wall-clock reads: one `SystemTime` read serves repeated
//! callers until either the refresh window elapses or the cached value has
//! been handed out `max_reads` times, whichever comes first. Invalidation
//! is lazy (checked on the next read), so staleness is still bounded by the
//! refresh window.
//!
//! Each `CoarseClock` is an explicit instance; [`shared()`] exposes the one
//! process-wide clock with the default policy.

use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;

/// Default refresh window for the shared clock
pub const DEFAULT_REFRESH: Duration = Duration::from_millis(100);

/// Default read ceiling per refresh for the shared clock
pub const DEFAULT_MAX_READS: u32 = 1000;

/// Process-wide shared clock (thread-safe)
static SHARED: Lazy<CoarseClock> =
    Lazy::new(|| CoarseClock::new(DEFAULT_REFRESH, DEFAULT_MAX_READS));

struct ClockState {
    value_ms: u64,
    refreshed_at: Instant,
    reads: u32,
}

/// A clock that trades accuracy for cheap repeated reads
pub struct CoarseClock {
    refresh: Duration,
    max_reads: u32,
    state: Mutex<ClockState>,
}

impl CoarseClock {
    pub fn new(refresh: Duration, max_reads: u32) -> Self {
        Self {
            refresh,
            max_reads,
            state: Mutex::new(ClockState {
                value_ms: wall_now_ms(),
                refreshed_at: Instant::now(),
                reads: 0,
            }),
        }
    }

    /// Current Unix-epoch milliseconds, cached per the clock's policy.
    ///
    /// Non-decreasing across calls barring system clock adjustment.
    pub fn now_millis(&self) -> u64 {
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        if state.refreshed_at.elapsed() >= self.refresh || state.reads >= self.max_reads {
            state.value_ms = wall_now_ms().max(state.value_ms);
            state.refreshed_at = Instant::now();
            state.reads = 0;
        }

        state.reads += 1;
        state.value_ms
    }
}

fn wall_now_ms() -> u64 {
    // UNIX_EPOCH is always in the past on any sane clock
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or(Duration::ZERO)
        .as_millis() as u64
}

/// The process-wide shared clock with default policy
pub fn shared() -> &'static CoarseClock {
    &SHARED
}

/// Shorthand for `shared().now_millis()`
#[inline]
pub fn coarse_now_millis() -> u64 {
    SHARED.now_millis()
}
