//! Trailing-window mean and sample standard deviation over returns.
//!
//! Step `t` covers `returns[t + 1 - window..=t]`, so the first `window - 1`
//! steps are undefined. The step-0 return of 0 counts as a regular value and
//! sits in the first window. A window whose returns are all equal has zero
//! standard deviation and is treated as undefined.

use crate::error::{CoreError, Result};

/// Mean and sample standard deviation of one trailing window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RollingStat {
    pub mean: f64,
    pub std_dev: f64,
}

/// Compute the rolling statistic for every step of `returns`.
///
/// Output is index-aligned with `returns`. Uses the sample (n - 1) standard
/// deviation, so a window of fewer than two values is rejected.
pub fn rolling_stats(returns: &[f64], window: usize) -> Result<Vec<Option<RollingStat>>> {
    if window < 2 {
        return Err(CoreError::invalid(
            "window",
            format!("must be >= 2, got {window}"),
        ));
    }

    let n = returns.len();
    let mut out = vec![None; n];
    if n < window {
        return Ok(out);
    }

    let denom = (window - 1) as f64;
    for (t, slot) in out.iter_mut().enumerate().skip(window - 1) {
        let values = &returns[t + 1 - window..=t];
        // A flat window has zero dispersion even if the float mean rounds.
        if values.iter().all(|&r| r == values[0]) {
            continue;
        }
        let mean = values.iter().sum::<f64>() / window as f64;
        let var = values.iter().map(|r| (r - mean) * (r - mean)).sum::<f64>() / denom;
        let std_dev = var.sqrt();
        if std_dev > 0.0 && std_dev.is_finite() {
            *slot = Some(RollingStat { mean, std_dev });
        }
    }

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::indicators::{assert_approx, DEFAULT_EPSILON};

    #[test]
    fn window_below_two_is_invalid() {
        assert!(matches!(
            rolling_stats(&[0.0, 0.1, 0.2], 1),
            Err(CoreError::InvalidParameter { name: "window", .. })
        ));
        assert!(rolling_stats(&[0.0], 0).is_err());
    }

    #[test]
    fn first_defined_step_is_window_minus_one() {
        let r = [0.0, 0.01, -0.02, 0.03, 0.01];
        let stats = rolling_stats(&r, 3).unwrap();
        assert_eq!(stats.len(), 5);
        assert!(stats[..2].iter().all(Option::is_none));
        assert!(stats[2..].iter().all(Option::is_some));
    }

    #[test]
    fn first_window_includes_leading_zero() {
        // returns of [100, 100, 110, 110]
        let r = [0.0, 0.0, 0.1, 0.0];
        let stat = rolling_stats(&r, 3).unwrap()[2].unwrap();
        let mean = 0.1 / 3.0;
        let var = (2.0 * mean * mean + (0.1f64 - mean).powi(2)) / 2.0;
        assert_approx(stat.mean, mean, DEFAULT_EPSILON);
        assert_approx(stat.std_dev, var.sqrt(), DEFAULT_EPSILON);
    }

    #[test]
    fn known_values() {
        // window [0.01, -0.02, 0.03]: mean 0.00667, sample var = 0.000633..
        let r = [0.0, 0.01, -0.02, 0.03];
        let stat = rolling_stats(&r, 3).unwrap()[3].unwrap();
        let mean = (0.01 - 0.02 + 0.03) / 3.0;
        let var = ((0.01f64 - mean).powi(2) + (-0.02f64 - mean).powi(2) + (0.03f64 - mean).powi(2))
            / 2.0;
        assert_approx(stat.mean, mean, DEFAULT_EPSILON);
        assert_approx(stat.std_dev, var.sqrt(), DEFAULT_EPSILON);
    }

    #[test]
    fn constant_window_is_undefined() {
        let r = [0.0, 0.01, 0.01, 0.01, 0.02];
        let stats = rolling_stats(&r, 3).unwrap();
        assert!(stats[2].is_some());
        assert!(stats[3].is_none(), "zero std must be undefined");
        assert!(stats[4].is_some());
    }

    #[test]
    fn window_longer_than_input_never_defined() {
        let r = [0.0, 0.01, -0.01, 0.02];
        assert!(rolling_stats(&r, 5).unwrap().iter().all(Option::is_none));
        assert!(rolling_stats(&r, 10).unwrap().iter().all(Option::is_none));
    }

    #[test]
    fn window_equal_to_length_defines_last_step_only() {
        let r = [0.0, 0.01, -0.01, 0.02];
        let stats = rolling_stats(&r, 4).unwrap();
        assert!(stats[..3].iter().all(Option::is_none));
        assert!(stats[3].is_some());
    }

    #[test]
    fn empty_input_gives_empty_output() {
        assert!(rolling_stats(&[], 5).unwrap().is_empty());
    }
}
