//! PnL simulator with per-change transaction costs.
//!
//! The position decided at step t is held over (t, t+1], so
//! `pnl[t+1] = positions[t] * return[t+1] - cost * [positions[t+1] != positions[t]]`.
//! `pnl[0]` is 0: no earlier position exists to have earned anything.

use serde::{Deserialize, Serialize};

use crate::domain::{PnlSeries, Position, PriceSeries};
use crate::error::{CoreError, Result};

const BPS_PER_UNIT: f64 = 10_000.0;

/// Fee and slippage rates in basis points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CostModel {
    pub fee_bps: f64,
    pub slip_bps: f64,
}

impl CostModel {
    pub fn new(fee_bps: f64, slip_bps: f64) -> Result<Self> {
        let model = Self { fee_bps, slip_bps };
        model.validate()?;
        Ok(model)
    }

    /// Zero fees and zero slippage.
    pub fn frictionless() -> Self {
        Self {
            fee_bps: 0.0,
            slip_bps: 0.0,
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (name, value) in [("fee_bps", self.fee_bps), ("slip_bps", self.slip_bps)] {
            if !value.is_finite() || value < 0.0 {
                return Err(CoreError::invalid(
                    name,
                    format!("must be finite and >= 0, got {value}"),
                ));
            }
        }
        Ok(())
    }

    /// Fractional cost charged once per position change.
    pub fn cost_per_change(&self) -> f64 {
        (self.fee_bps + self.slip_bps) / BPS_PER_UNIT
    }
}

impl Default for CostModel {
    fn default() -> Self {
        Self {
            fee_bps: 1.0,
            slip_bps: 2.0,
        }
    }
}

/// Net per-step returns for `positions` traded over `prices`.
pub fn simulate(prices: &PriceSeries, positions: &[Position], costs: &CostModel) -> Result<PnlSeries> {
    costs.validate()?;
    if positions.len() != prices.len() {
        return Err(CoreError::ShapeMismatch {
            expected: prices.len(),
            actual: positions.len(),
        });
    }

    let returns = prices.returns();
    let cost = costs.cost_per_change();

    let mut pnl = Vec::with_capacity(prices.len());
    pnl.push(0.0);
    for t in 1..prices.len() {
        let (prev, curr) = (positions[t - 1], positions[t]);
        let gross = prev.as_f64() * returns[t];
        let charge = if curr != prev { cost } else { 0.0 };
        pnl.push(gross - charge);
    }

    Ok(pnl)
}

/// Number of steps where the position changed value.
pub fn position_changes(positions: &[Position]) -> usize {
    positions.windows(2).filter(|w| w[0] != w[1]).count()
}
