//! RevLab CLI: run one intraday mean-reversion backtest on synthetic prices.
//!
//! Parameters come from an optional TOML file, then flags override
//! individual fields. The metrics record is printed to stdout as one JSON
//! line; logs go to stderr.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{fmt, EnvFilter};

use revlab_runner::{run_backtest, save_artifacts, RunConfig};

#[derive(Parser, Debug, Default)]
#[command(
    name = "revlab",
    version,
    about = "RevLab: z-score mean-reversion backtest on a synthetic random walk"
)]
struct Cli {
    /// Path to a TOML config file. Flags override its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Number of price rows to generate.
    #[arg(long)]
    n: Option<usize>,

    /// RNG seed for the price generator.
    #[arg(long)]
    seed: Option<u64>,

    /// Rolling window length for the z-score.
    #[arg(long)]
    window: Option<usize>,

    /// Entry threshold on |z|.
    #[arg(long, allow_negative_numbers = true)]
    entry_z: Option<f64>,

    /// Exit threshold on |z|.
    #[arg(long, allow_negative_numbers = true)]
    exit_z: Option<f64>,

    /// Fee in basis points per position change.
    #[arg(long, allow_negative_numbers = true)]
    fee_bps: Option<f64>,

    /// Slippage in basis points per position change.
    #[arg(long, allow_negative_numbers = true)]
    slip_bps: Option<f64>,

    /// Artifact directory. Defaults to runs/<local timestamp>.
    #[arg(long)]
    outdir: Option<PathBuf>,

    /// Skip writing artifacts; only print metrics.
    #[arg(long, default_value_t = false)]
    no_artifacts: bool,

    /// Log at info level.
    #[arg(short, long, default_value_t = false)]
    verbose: bool,

    /// Log at debug level (includes stage timings).
    #[arg(long, default_value_t = false)]
    debug: bool,
}

impl Cli {
    /// Merge flag overrides onto `base`.
    fn apply(&self, mut base: RunConfig) -> RunConfig {
        if let Some(n) = self.n {
            base.n = n;
        }
        if let Some(seed) = self.seed {
            base.seed = seed;
        }
        if let Some(window) = self.window {
            base.window = window;
        }
        if let Some(entry_z) = self.entry_z {
            base.entry_z = entry_z;
        }
        if let Some(exit_z) = self.exit_z {
            base.exit_z = exit_z;
        }
        if let Some(fee_bps) = self.fee_bps {
            base.fee_bps = fee_bps;
        }
        if let Some(slip_bps) = self.slip_bps {
            base.slip_bps = slip_bps;
        }
        if let Some(outdir) = &self.outdir {
            base.outdir = Some(outdir.clone());
        }
        base
    }
}

fn init_logging(verbose: bool, debug: bool) {
    let default_level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else {
        "warn"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn default_outdir() -> PathBuf {
    PathBuf::from("runs").join(chrono::Local::now().format("%Y%m%d-%H%M%S").to_string())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.debug);

    let base = match &cli.config {
        Some(path) => RunConfig::from_file(path)?,
        None => RunConfig::default(),
    };
    let config = cli.apply(base);
    tracing::debug!(?config, "resolved run config");

    let result = run_backtest(&config)?;

    if !cli.no_artifacts {
        let outdir = config.outdir.clone().unwrap_or_else(default_outdir);
        save_artifacts(&outdir, &result)?;
        tracing::info!(outdir = %outdir.display(), run_id = %result.run_id, "artifacts saved");
    }

    println!("{}", serde_json::to_string(&result.metrics)?);
    Ok(())
}
