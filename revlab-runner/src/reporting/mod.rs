//! Reporting and artifact export.
//!
//! Four artifacts per run:
//! - `params.json`: the run configuration plus its run id
//! - `metrics.json`: the `RunMetrics` record
//! - `timeseries.csv`: per-step price, z-score, position, PnL, equity, drawdown
//! - `equity_drawdown.svg`: equity curve over drawdown
//!
//! Contents are rendered in memory first; the output directory is only
//! created once every artifact rendered successfully.

pub mod artifacts;
pub mod chart;
pub mod export;

pub use artifacts::{render_artifacts, save_artifacts, ArtifactPaths, RenderedArtifacts};
pub use chart::render_equity_drawdown_svg;
pub use export::{export_metrics_json, export_params_json, export_timeseries_csv};
