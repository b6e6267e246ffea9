//! Z-score of each return against its trailing window.

use super::rolling::RollingStat;
use crate::error::{CoreError, Result};

/// `(return - mean) / std_dev` per step; `None` wherever the stat is undefined.
pub fn z_scores(returns: &[f64], stats: &[Option<RollingStat>]) -> Result<Vec<Option<f64>>> {
    if returns.len() != stats.len() {
        return Err(CoreError::ShapeMismatch {
            expected: returns.len(),
            actual: stats.len(),
        });
    }

    Ok(returns
        .iter()
        .zip(stats)
        .map(|(&r, stat)| stat.map(|s| (r - s.mean) / s.std_dev))
        .collect())
}
