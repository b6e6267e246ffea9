//! Performance evaluator: equity, drawdown, Sharpe, max drawdown.
//!
//! Pure functions over a PnL series. Equity starts conceptually at 1.0
//! before step 0.

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// Periods per year used to annualize the Sharpe ratio.
pub const PERIODS_PER_YEAR: f64 = 252.0;

/// Guard added to the PnL standard deviation so a constant series gives 0.
pub const SHARPE_EPSILON: f64 = 1e-12;

/// Equity and risk summary of one PnL series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Performance {
    pub equity: Vec<f64>,
    pub drawdown: Vec<f64>,
    pub sharpe: f64,
    pub max_drawdown: f64,
}

/// Evaluate a PnL series. Fails on empty input.
pub fn evaluate(pnl: &[f64]) -> Result<Performance> {
    if pnl.is_empty() {
        return Err(CoreError::invalid("pnl", "series must contain at least one step"));
    }

    let equity = equity_curve(pnl);
    let drawdown = drawdown_series(&equity);
    let max_drawdown = drawdown.iter().copied().fold(0.0_f64, f64::min);

    Ok(Performance {
        sharpe: sharpe_ratio(pnl),
        max_drawdown,
        equity,
        drawdown,
    })
}

/// Cumulative product of `1 + pnl`.
pub fn equity_curve(pnl: &[f64]) -> Vec<f64> {
    pnl.iter()
        .scan(1.0_f64, |eq, r| {
            *eq *= 1.0 + r;
            Some(*eq)
        })
        .collect()
}

/// `equity / running_max(equity) - 1`, never positive.
pub fn drawdown_series(equity: &[f64]) -> Vec<f64> {
    let mut peak = f64::NEG_INFINITY;
    equity
        .iter()
        .map(|&eq| {
            peak = peak.max(eq);
            if peak > 0.0 {
                (eq / peak - 1.0).min(0.0)
            } else {
                0.0
            }
        })
        .collect()
}

/// Annualized Sharpe: `sqrt(252) * mean / (sample_std + eps)`.
pub fn sharpe_ratio(pnl: &[f64]) -> f64 {
    if pnl.is_empty() {
        return 0.0;
    }
    let mean = mean_f64(pnl);
    PERIODS_PER_YEAR.sqrt() * mean / (sample_std(pnl, mean) + SHARPE_EPSILON)
}

fn mean_f64(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Sample (n - 1) standard deviation; 0 for fewer than two values.
fn sample_std(values: &[f64], mean: f64) -> f64 {
    if values.len() < 2 {
        return 0.0;
    }
    let var = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / (values.len() - 1) as f64;
    var.sqrt()
}
