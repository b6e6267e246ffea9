//! Timing scopes for the pipeline stages.
//!
//! A `ProfileScope` measures wall-clock time from creation; on drop the
//! duration is emitted as a `tracing` debug event. The runner times the
//! signal and PnL stages through `profile()`.
//!
//! ```
//! use revlab_runner::profiling::ProfileScope;
//!
//! let scope = ProfileScope::new("signal_and_pnl");
//! // Work...
//! let took = scope.elapsed();
//! assert!(took.as_secs_f64() >= 0.0);
//! ```

use std::time::{Duration, Instant};

/// A profiling scope that measures execution time.
pub struct ProfileScope {
    name: &'static str,
    start: Instant,
}

impl ProfileScope {
    #[inline]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            start: Instant::now(),
        }
    }

    /// Get elapsed time without dropping the scope.
    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Drop for ProfileScope {
    fn drop(&mut self) {
        let duration = self.start.elapsed();
        tracing::debug!(
            scope = self.name,
            elapsed_ms = duration.as_secs_f64() * 1000.0,
            "profile scope closed"
        );
    }
}

/// Profile a closure and return its result along with duration.
pub fn profile<F, R>(name: &'static str, f: F) -> (R, Duration)
where
    F: FnOnce() -> R,
{
    let scope = ProfileScope::new(name);
    let result = f();
    (result, scope.elapsed())
}
