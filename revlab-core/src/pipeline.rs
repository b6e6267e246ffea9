//! End-to-end pipeline: prices → positions → PnL → performance.

use crate::domain::{PnlSeries, Position, PriceSeries};
use crate::error::Result;
use crate::performance::{evaluate, Performance};
use crate::pnl::{simulate, CostModel};
use crate::signal::{derive_position, SignalParams};

/// Every series produced by one pipeline invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Backtest {
    pub positions: Vec<Position>,
    pub pnl: PnlSeries,
    pub performance: Performance,
}

/// Run the signal, PnL, and evaluation stages over `prices`.
///
/// Parameters are validated before any stage runs.
pub fn backtest(prices: &PriceSeries, signal: &SignalParams, costs: &CostModel) -> Result<Backtest> {
    signal.validate()?;
    costs.validate()?;

    let positions = derive_position(prices, signal)?;
    let pnl = simulate(prices, &positions, costs)?;
    let performance = evaluate(&pnl)?;

    Ok(Backtest {
        positions,
        pnl,
        performance,
    })
}
