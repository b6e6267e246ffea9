//! Backtest runner: wires the core pipeline, timing, and metrics together.
//!
//! `run_backtest()` validates every parameter before generating data, so an
//! invalid config fails without computing or writing anything.

use thiserror::Error;

use revlab_core::{
    derive_signal, evaluate, generate, simulate, CoreError, Performance, PnlSeries, Position,
};

use crate::config::RunConfig;
use crate::metrics::RunMetrics;
use crate::profiling::profile;

/// Errors from the runner.
#[derive(Debug, Error)]
pub enum RunError {
    #[error("pipeline error: {0}")]
    Core(#[from] CoreError),
}

/// Complete result of a single backtest run.
#[derive(Debug, Clone)]
pub struct BacktestResult {
    pub config: RunConfig,
    pub run_id: String,
    pub prices: Vec<f64>,
    pub z_scores: Vec<Option<f64>>,
    pub positions: Vec<Position>,
    pub pnl: PnlSeries,
    pub performance: Performance,
    pub metrics: RunMetrics,
}

/// Run one backtest described by `config`.
///
/// Latency covers signal derivation and PnL simulation, the stages whose
/// throughput the metrics record reports.
pub fn run_backtest(config: &RunConfig) -> Result<BacktestResult, RunError> {
    let signal = config.signal_params();
    let costs = config.cost_model();
    signal.validate()?;
    costs.validate()?;

    let prices = generate(config.n, config.seed)?;

    let (timed, elapsed) = profile("signal_and_pnl", || -> Result<_, CoreError> {
        let trace = derive_signal(&prices, &signal)?;
        let pnl = simulate(&prices, &trace.positions, &costs)?;
        Ok((trace, pnl))
    });
    let (trace, pnl) = timed?;

    let performance = evaluate(&pnl)?;
    let metrics = RunMetrics::compute(prices.len(), elapsed, &performance);

    tracing::info!(
        rows = metrics.rows,
        latency_sec = metrics.latency_sec,
        throughput = metrics.throughput_rows_per_sec,
        sharpe = metrics.sharpe,
        max_drawdown = metrics.max_drawdown,
        "backtest complete"
    );

    Ok(BacktestResult {
        config: config.clone(),
        run_id: config.run_id(),
        prices: prices.into_vec(),
        z_scores: trace.z_scores,
        positions: trace.positions,
        pnl,
        performance,
        metrics,
    })
}
