//! RevLab Core: the mean-reversion backtest pipeline.
//!
//! Four pure stages, each a function over immutable sequences:
//! - Price generator: seeded Gaussian random walk around 100
//! - Signal engine: rolling z-score of returns with entry/exit hysteresis
//! - PnL simulator: lagged exposure times next return, minus per-change costs
//! - Performance evaluator: equity, drawdown, Sharpe, max drawdown
//!
//! No stage holds state between calls or performs I/O, so every function is
//! reentrant and safe to call from several threads on independent inputs.

pub mod domain;
pub mod error;
pub mod generator;
pub mod indicators;
pub mod performance;
pub mod pipeline;
pub mod pnl;
pub mod rng;
pub mod signal;

pub use domain::{PnlSeries, Position, PriceSeries, ReturnSeries};
pub use error::{CoreError, Result};
pub use generator::generate;
pub use indicators::{rolling_stats, z_scores, RollingStat};
pub use performance::{evaluate, Performance};
pub use pipeline::{backtest, Backtest};
pub use pnl::{simulate, CostModel};
pub use signal::{derive_position, derive_signal, Hysteresis, SignalParams, SignalTrace};
