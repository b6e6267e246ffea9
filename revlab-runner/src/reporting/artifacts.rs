//! Artifact rendering and persistence for a single run.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use super::chart::render_equity_drawdown_svg;
use super::export::{export_metrics_json, export_params_json, export_timeseries_csv};
use crate::runner::BacktestResult;

pub const PARAMS_FILE: &str = "params.json";
pub const METRICS_FILE: &str = "metrics.json";
pub const TIMESERIES_FILE: &str = "timeseries.csv";
pub const CHART_FILE: &str = "equity_drawdown.svg";

/// Artifact contents rendered in memory, ready to write.
#[derive(Debug, Clone)]
pub struct RenderedArtifacts {
    pub params_json: String,
    pub metrics_json: String,
    pub timeseries_csv: String,
    pub chart_svg: String,
}

/// Artifact paths returned after saving.
#[derive(Debug, Clone)]
pub struct ArtifactPaths {
    pub params: PathBuf,
    pub metrics: PathBuf,
    pub timeseries: PathBuf,
    pub chart: PathBuf,
}

/// Render every artifact for `result`.
///
/// The params record carries `outdir` as the directory the artifacts land in.
pub fn render_artifacts(result: &BacktestResult, outdir: &Path) -> Result<RenderedArtifacts> {
    let mut config = result.config.clone();
    config.outdir = Some(outdir.to_path_buf());

    Ok(RenderedArtifacts {
        params_json: export_params_json(&config, &result.run_id)?,
        metrics_json: export_metrics_json(&result.metrics)?,
        timeseries_csv: export_timeseries_csv(result)?,
        chart_svg: render_equity_drawdown_svg(
            &result.performance.equity,
            &result.performance.drawdown,
        ),
    })
}

/// Render, then write all artifacts under `outdir` (created if missing).
///
/// Nothing touches the filesystem until rendering has succeeded.
pub fn save_artifacts(outdir: &Path, result: &BacktestResult) -> Result<ArtifactPaths> {
    let rendered = render_artifacts(result, outdir)?;

    std::fs::create_dir_all(outdir).with_context(|| {
        format!("failed to create artifact directory {}", outdir.display())
    })?;

    let paths = ArtifactPaths {
        params: outdir.join(PARAMS_FILE),
        metrics: outdir.join(METRICS_FILE),
        timeseries: outdir.join(TIMESERIES_FILE),
        chart: outdir.join(CHART_FILE),
    };

    write_file(&paths.params, &rendered.params_json)?;
    write_file(&paths.metrics, &rendered.metrics_json)?;
    write_file(&paths.timeseries, &rendered.timeseries_csv)?;
    write_file(&paths.chart, &rendered.chart_svg)?;

    Ok(paths)
}

fn write_file(path: &Path, contents: &str) -> Result<()> {
    std::fs::write(path, contents)
        .with_context(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), bytes = contents.len(), "wrote artifact");
    Ok(())
}
