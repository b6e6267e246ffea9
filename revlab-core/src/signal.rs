//! Signal engine: rolling z-score mapped to a position with entry/exit hysteresis.
//!
//! Per step:
//! 1. `z < -entry_z` latches Long, `z > entry_z` latches Short; anything else
//!    keeps the latched side (forward fill, Flat before the first entry).
//! 2. If `|z| < exit_z` the emitted position is Flat. The exit override is
//!    applied after forward fill and does not clear the latch.
//! 3. An undefined z is neither entry nor exit: the latched side is emitted.
//!
//! Position at step `t` is a function of `prices[0..=t]` only.

use serde::{Deserialize, Serialize};

use crate::domain::{Position, PriceSeries, ReturnSeries};
use crate::error::{CoreError, Result};
use crate::indicators::{rolling_stats, z_scores};

/// Rolling window and thresholds for the z-score rule.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalParams {
    pub window: usize,
    pub entry_z: f64,
    pub exit_z: f64,
}

impl SignalParams {
    pub fn new(window: usize, entry_z: f64, exit_z: f64) -> Result<Self> {
        let params = Self {
            window,
            entry_z,
            exit_z,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every parameter contract. Values are never clamped.
    pub fn validate(&self) -> Result<()> {
        if self.window < 2 {
            return Err(CoreError::invalid(
                "window",
                format!("must be >= 2, got {}", self.window),
            ));
        }
        if !self.entry_z.is_finite() || self.entry_z <= 0.0 {
            return Err(CoreError::invalid(
                "entry_z",
                format!("must be finite and > 0, got {}", self.entry_z),
            ));
        }
        if !self.exit_z.is_finite() || self.exit_z < 0.0 {
            return Err(CoreError::invalid(
                "exit_z",
                format!("must be finite and >= 0, got {}", self.exit_z),
            ));
        }
        if self.exit_z >= self.entry_z {
            return Err(CoreError::invalid(
                "exit_z",
                format!(
                    "must be below entry_z ({}), got {}",
                    self.entry_z, self.exit_z
                ),
            ));
        }
        Ok(())
    }
}

impl Default for SignalParams {
    fn default() -> Self {
        Self {
            window: 20,
            entry_z: 1.0,
            exit_z: 0.2,
        }
    }
}

/// Three-state machine over {Long, Short, Flat} carrying the latched side.
#[derive(Debug, Clone)]
pub struct Hysteresis {
    entry_z: f64,
    exit_z: f64,
    latched: Position,
}

impl Hysteresis {
    pub fn new(params: &SignalParams) -> Self {
        Self {
            entry_z: params.entry_z,
            exit_z: params.exit_z,
            latched: Position::Flat,
        }
    }

    /// Advance one step and return the position to hold after it.
    pub fn step(&mut self, z: Option<f64>) -> Position {
        let Some(z) = z else {
            return self.latched;
        };

        if z < -self.entry_z {
            self.latched = Position::Long;
        } else if z > self.entry_z {
            self.latched = Position::Short;
        }

        if z.abs() < self.exit_z {
            Position::Flat
        } else {
            self.latched
        }
    }
}

/// Intermediate series behind a position path, kept for inspection and export.
#[derive(Debug, Clone, PartialEq)]
pub struct SignalTrace {
    pub returns: ReturnSeries,
    pub z_scores: Vec<Option<f64>>,
    pub positions: Vec<Position>,
}

/// Derive the position path and the series it was computed from.
pub fn derive_signal(prices: &PriceSeries, params: &SignalParams) -> Result<SignalTrace> {
    params.validate()?;

    let returns = prices.returns();
    let stats = rolling_stats(&returns, params.window)?;
    let z_scores = z_scores(&returns, &stats)?;

    let mut machine = Hysteresis::new(params);
    let positions = z_scores.iter().map(|&z| machine.step(z)).collect();

    Ok(SignalTrace {
        returns,
        z_scores,
        positions,
    })
}

/// Position per step, same length as `prices`, values in {-1, 0, +1}.
pub fn derive_position(prices: &PriceSeries, params: &SignalParams) -> Result<Vec<Position>> {
    derive_signal(prices, params).map(|trace| trace.positions)
}
