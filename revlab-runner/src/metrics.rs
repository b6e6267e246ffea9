//! Run metrics record: what a run reports to stdout and `metrics.json`.

use serde::{Deserialize, Serialize};
use std::time::Duration;

use revlab_core::Performance;

/// Latency floor so an unmeasurably fast run still yields a finite throughput.
const MIN_LATENCY_SECS: f64 = 1e-9;

/// Throughput and risk summary for one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunMetrics {
    pub rows: usize,
    pub throughput_rows_per_sec: u64,
    pub latency_sec: f64,
    pub sharpe: f64,
    pub max_drawdown: f64,
}

impl RunMetrics {
    /// Build the record from a row count, the timed span, and the evaluation.
    ///
    /// Latency is rounded to 6 decimals; Sharpe and max drawdown to 4.
    pub fn compute(rows: usize, elapsed: Duration, performance: &Performance) -> Self {
        let secs = elapsed.as_secs_f64();
        Self {
            rows,
            throughput_rows_per_sec: throughput(rows, secs),
            latency_sec: round_to(secs, 6),
            sharpe: round_to(performance.sharpe, 4),
            max_drawdown: round_to(performance.max_drawdown, 4),
        }
    }
}

/// Whole rows per second over `secs`.
pub fn throughput(rows: usize, secs: f64) -> u64 {
    (rows as f64 / secs.max(MIN_LATENCY_SECS)) as u64
}

/// Round half away from zero to `decimals` places.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}
