//! Serializable run configuration.
//!
//! A `RunConfig` captures every parameter needed to reproduce one run. It can
//! be loaded from a TOML file; missing keys fall back to the defaults below.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

use revlab_core::{CostModel, SignalParams};

/// Errors from loading a configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Parameters for one backtest run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Row count of the synthetic series.
    pub n: usize,
    /// RNG seed for the price generator.
    pub seed: u64,
    /// Rolling window length for the z-score.
    pub window: usize,
    /// Entry threshold on |z|.
    pub entry_z: f64,
    /// Exit threshold on |z|.
    pub exit_z: f64,
    /// Fee rate in basis points per position change.
    pub fee_bps: f64,
    /// Slippage rate in basis points per position change.
    pub slip_bps: f64,
    /// Output directory for artifacts. `None` lets the caller choose.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outdir: Option<PathBuf>,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            n: 20_000,
            seed: 0,
            window: 20,
            entry_z: 1.0,
            exit_z: 0.2,
            fee_bps: 1.0,
            slip_bps: 2.0,
            outdir: None,
        }
    }
}

impl RunConfig {
    /// Load a configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    /// Parse a configuration from a TOML string.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    pub fn signal_params(&self) -> SignalParams {
        SignalParams {
            window: self.window,
            entry_z: self.entry_z,
            exit_z: self.exit_z,
        }
    }

    pub fn cost_model(&self) -> CostModel {
        CostModel {
            fee_bps: self.fee_bps,
            slip_bps: self.slip_bps,
        }
    }

    /// Deterministic BLAKE3 id over the result-affecting fields.
    ///
    /// Two configs that differ only in `outdir` share a run id.
    pub fn run_id(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        hasher.update(&(self.n as u64).to_le_bytes());
        hasher.update(&self.seed.to_le_bytes());
        hasher.update(&(self.window as u64).to_le_bytes());
        for value in [self.entry_z, self.exit_z, self.fee_bps, self.slip_bps] {
            hasher.update(&value.to_bits().to_le_bytes());
        }
        hasher.finalize().to_hex().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let c = RunConfig::default();
        assert_eq!(c.n, 20_000);
        assert_eq!(c.seed, 0);
        assert_eq!(c.window, 20);
        assert_eq!(c.entry_z, 1.0);
        assert_eq!(c.exit_z, 0.2);
        assert_eq!(c.fee_bps, 1.0);
        assert_eq!(c.slip_bps, 2.0);
        assert!(c.outdir.is_none());
        assert!(c.signal_params().validate().is_ok());
        assert!(c.cost_model().validate().is_ok());
    }

    #[test]
    fn partial_toml_uses_defaults() {
        let c = RunConfig::from_toml("n = 1000\nseed = 7\nentry_z = 1.5\n").unwrap();
        assert_eq!(c.n, 1000);
        assert_eq!(c.seed, 7);
        assert_eq!(c.entry_z, 1.5);
        assert_eq!(c.window, 20);
        assert_eq!(c.slip_bps, 2.0);
    }

    #[test]
    fn full_toml_round_trip() {
        let c = RunConfig {
            n: 500,
            seed: 3,
            window: 10,
            entry_z: 2.0,
            exit_z: 0.5,
            fee_bps: 0.5,
            slip_bps: 1.5,
            outdir: Some(PathBuf::from("runs/test")),
        };
        let text = toml::to_string(&c).unwrap();
        assert_eq!(RunConfig::from_toml(&text).unwrap(), c);
    }

    #[test]
    fn malformed_toml_is_parse_error() {
        assert!(matches!(
            RunConfig::from_toml("n = \"many\""),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_read_error() {
        let err = RunConfig::from_file(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn run_id_deterministic() {
        let c = RunConfig::default();
        assert_eq!(c.run_id(), c.run_id());
        assert_eq!(c.run_id().len(), 64);
    }

    #[test]
    fn run_id_changes_with_params() {
        let a = RunConfig::default();
        let mut b = a.clone();
        b.window = 30;
        assert_ne!(a.run_id(), b.run_id());
    }

    #[test]
    fn run_id_ignores_outdir() {
        let a = RunConfig::default();
        let mut b = a.clone();
        b.outdir = Some(PathBuf::from("elsewhere"));
        assert_eq!(a.run_id(), b.run_id());
    }
}
