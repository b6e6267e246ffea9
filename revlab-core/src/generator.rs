//! Synthetic mid-price generator.
//!
//! A Gaussian random walk around a fixed base level:
//! `price[t] = 100 + sum(step[0..=t])`, `step ~ N(0, 0.02)`.

use rand::distributions::Distribution;

use crate::domain::PriceSeries;
use crate::error::{CoreError, Result};
use crate::rng::{rng_for, Normal};

/// Base level the random walk is added to.
pub const BASE_PRICE: f64 = 100.0;

/// Standard deviation of each random-walk increment.
pub const STEP_STD_DEV: f64 = 0.02;

/// Generate `n` synthetic mid-prices from `seed`.
///
/// Same `(n, seed)` always yields a bit-identical series.
pub fn generate(n: usize, seed: u64) -> Result<PriceSeries> {
    if n == 0 {
        return Err(CoreError::invalid("n", "row count must be positive, got 0"));
    }

    let normal = Normal::new(0.0, STEP_STD_DEV)
        .ok_or_else(|| CoreError::invalid("step_std_dev", "must be finite and non-negative"))?;

    let mut prices = Vec::with_capacity(n);
    let mut walk = 0.0_f64;
    for step in normal.sample_iter(rng_for(seed)).take(n) {
        walk += step;
        prices.push(BASE_PRICE + walk);
    }

    PriceSeries::new(prices)
}
