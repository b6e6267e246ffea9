//! Domain types shared by every pipeline stage.

pub mod position;
pub mod series;

pub use position::Position;
pub use series::PriceSeries;

/// Simple percentage returns, index-aligned with the prices they came from.
pub type ReturnSeries = Vec<f64>;

/// Per-step net returns after transaction costs.
pub type PnlSeries = Vec<f64>;
