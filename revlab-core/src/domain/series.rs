//! PriceSeries: validated mid-price path.

use crate::error::{CoreError, Result};

/// Ordered mid-prices, one per step, index-aligned from 0.
///
/// Invariants: at least one element, every price finite and strictly
/// positive. Percentage returns over a `PriceSeries` are therefore always
/// defined.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    prices: Vec<f64>,
}

impl PriceSeries {
    pub fn new(prices: Vec<f64>) -> Result<Self> {
        if prices.is_empty() {
            return Err(CoreError::invalid("prices", "series must contain at least one price"));
        }
        if let Some((i, p)) = prices
            .iter()
            .enumerate()
            .find(|(_, p)| !p.is_finite() || **p <= 0.0)
        {
            return Err(CoreError::invalid(
                "prices",
                format!("price at step {i} must be finite and positive, got {p}"),
            ));
        }
        Ok(Self { prices })
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.prices
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.prices
    }

    /// The first `len` prices, used to check that nothing reads ahead.
    pub fn truncated(&self, len: usize) -> Result<Self> {
        if len == 0 || len > self.prices.len() {
            return Err(CoreError::invalid(
                "len",
                format!("must be in 1..={}, got {len}", self.prices.len()),
            ));
        }
        Ok(Self {
            prices: self.prices[..len].to_vec(),
        })
    }

    /// Simple percentage returns; step 0 has no prior price and is 0.
    pub fn returns(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.prices.len());
        out.push(0.0);
        out.extend(self.prices.windows(2).map(|w| w[1] / w[0] - 1.0));
        out
    }
}

impl AsRef<[f64]> for PriceSeries {
    fn as_ref(&self) -> &[f64] {
        &self.prices
    }
}

impl TryFrom<Vec<f64>> for PriceSeries {
    type Error = CoreError;

    fn try_from(prices: Vec<f64>) -> Result<Self> {
        Self::new(prices)
    }
}
