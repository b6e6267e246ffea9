//! JSON and CSV export of run records.

use anyhow::{Context, Result};
use serde::Serialize;

use crate::config::RunConfig;
use crate::metrics::RunMetrics;
use crate::runner::BacktestResult;

#[derive(Serialize)]
struct ParamsRecord<'a> {
    #[serde(flatten)]
    config: &'a RunConfig,
    run_id: &'a str,
}

// ─── JSON export ────────────────────────────────────────────────────

/// Serialize the run parameters and run id to pretty JSON.
pub fn export_params_json(config: &RunConfig, run_id: &str) -> Result<String> {
    serde_json::to_string_pretty(&ParamsRecord { config, run_id })
        .context("failed to serialize run parameters to JSON")
}

/// Serialize the metrics record to pretty JSON.
pub fn export_metrics_json(metrics: &RunMetrics) -> Result<String> {
    serde_json::to_string_pretty(metrics).context("failed to serialize metrics to JSON")
}

// ─── CSV export ─────────────────────────────────────────────────────

/// Export the per-step series as CSV.
///
/// Columns: step, price, zscore, position, pnl, equity, drawdown.
/// `zscore` is empty where the rolling statistic is undefined.
pub fn export_timeseries_csv(result: &BacktestResult) -> Result<String> {
    let mut wtr = csv::Writer::from_writer(vec![]);

    wtr.write_record([
        "step", "price", "zscore", "position", "pnl", "equity", "drawdown",
    ])?;

    let perf = &result.performance;
    for t in 0..result.prices.len() {
        let z = result.z_scores[t]
            .map(|z| format!("{z:.6}"))
            .unwrap_or_default();
        wtr.write_record([
            t.to_string(),
            format!("{:.6}", result.prices[t]),
            z,
            result.positions[t].exposure().to_string(),
            format!("{:.8}", result.pnl[t]),
            format!("{:.8}", perf.equity[t]),
            format!("{:.8}", perf.drawdown[t]),
        ])?;
    }

    let data = wtr.into_inner().context("failed to flush CSV writer")?;
    String::from_utf8(data).context("CSV output is not valid UTF-8")
}
