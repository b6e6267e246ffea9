//! RevLab Runner: run orchestration, timing, metrics record, and artifacts.
//!
//! This crate builds on `revlab-core` to provide:
//! - TOML run configuration with defaults and a content-addressed run id
//! - Single-run orchestration with timed signal and PnL stages
//! - The `RunMetrics` record (rows, throughput, latency, Sharpe, max drawdown)
//! - JSON, CSV, and SVG artifacts written under one output directory

pub mod config;
pub mod metrics;
pub mod profiling;
pub mod reporting;
pub mod runner;

pub use config::{ConfigError, RunConfig};
pub use metrics::RunMetrics;
pub use profiling::{profile, ProfileScope};
pub use reporting::{render_artifacts, save_artifacts, ArtifactPaths, RenderedArtifacts};
pub use runner::{run_backtest, BacktestResult, RunError};
