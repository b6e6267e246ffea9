//! Deterministic, seed-addressable random draws.
//!
//! Generators are constructed locally from an explicit seed. Nothing in this
//! crate touches a thread-local or global RNG, so the same seed yields the
//! same draws regardless of thread count or call order.

use rand::distributions::Distribution;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Create a seeded StdRng.
pub fn rng_for(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Normal distribution N(mean, std_dev) sampled with the Box-Muller transform.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

impl Normal {
    /// Returns `None` unless `std_dev` is finite and non-negative and `mean` finite.
    pub fn new(mean: f64, std_dev: f64) -> Option<Self> {
        if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
            return None;
        }
        Some(Self { mean, std_dev })
    }
}

impl Distribution<f64> for Normal {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        // u1 in (0, 1] keeps ln() finite.
        let u1: f64 = 1.0 - rng.gen::<f64>();
        let u2: f64 = rng.gen();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        self.mean + self.std_dev * z
    }
}
