//! Rolling-window statistics feeding the signal engine.
//!
//! Undefined values are modeled as `Option`, never as a NaN sentinel.

pub mod rolling;
pub mod zscore;

pub use rolling::{rolling_stats, RollingStat};
pub use zscore::z_scores;

#[cfg(test)]
pub(crate) const DEFAULT_EPSILON: f64 = 1e-12;

#[cfg(test)]
pub(crate) fn assert_approx(actual: f64, expected: f64, epsilon: f64) {
    assert!(
        (actual - expected).abs() < epsilon,
        "expected {expected}, got {actual} (diff={})",
        (actual - expected).abs()
    );
}
