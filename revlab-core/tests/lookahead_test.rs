//! Look-ahead contamination tests.
//!
//! Invariant: the position at step t may depend only on prices[0..=t].
//!
//! Method 1: derive positions on a truncated series and on the full series and
//! assert the shared prefix is identical. Any difference means a later price
//! leaked into an earlier decision.
//!
//! Method 2: over a long seeded random walk, the position held at t must be
//! essentially uncorrelated with the return realized at t+1.

use revlab_core::{derive_position, derive_signal, generate, SignalParams};

fn params(window: usize, entry_z: f64, exit_z: f64) -> SignalParams {
    SignalParams::new(window, entry_z, exit_z).unwrap()
}

fn assert_prefix_stable(params: &SignalParams, n: usize, cut: usize, seed: u64) {
    let full = generate(n, seed).unwrap();
    let truncated = full.truncated(cut).unwrap();

    let full_positions = derive_position(&full, params).unwrap();
    let truncated_positions = derive_position(&truncated, params).unwrap();

    assert_eq!(truncated_positions.len(), cut);
    for t in 0..cut {
        assert_eq!(
            truncated_positions[t], full_positions[t],
            "look-ahead contamination at step {t} (window={}, seed={seed})",
            params.window
        );
    }
}

fn pearson(xs: &[f64], ys: &[f64]) -> f64 {
    let n = xs.len() as f64;
    let mx = xs.iter().sum::<f64>() / n;
    let my = ys.iter().sum::<f64>() / n;
    let mut cov = 0.0;
    let mut vx = 0.0;
    let mut vy = 0.0;
    for (x, y) in xs.iter().zip(ys) {
        cov += (x - mx) * (y - my);
        vx += (x - mx).powi(2);
        vy += (y - my).powi(2);
    }
    cov / (vx.sqrt() * vy.sqrt())
}

#[test]
fn lookahead_default_params() {
    assert_prefix_stable(&SignalParams::default(), 400, 200, 1);
}

#[test]
fn lookahead_short_window() {
    assert_prefix_stable(&params(2, 0.5, 0.1), 400, 137, 2);
    assert_prefix_stable(&params(5, 1.0, 0.2), 400, 50, 3);
}

#[test]
fn lookahead_every_cut_point() {
    let p = params(10, 1.0, 0.2);
    let full = generate(120, 11).unwrap();
    let full_positions = derive_position(&full, &p).unwrap();
    for cut in 1..=full.len() {
        let positions = derive_position(&full.truncated(cut).unwrap(), &p).unwrap();
        assert_eq!(positions[..], full_positions[..cut], "cut={cut}");
    }
}

#[test]
fn lookahead_z_scores_prefix_stable() {
    let p = SignalParams::default();
    let full = generate(300, 5).unwrap();
    let a = derive_signal(&full, &p).unwrap();
    let b = derive_signal(&full.truncated(150).unwrap(), &p).unwrap();
    assert_eq!(b.z_scores[..], a.z_scores[..150]);
}

#[test]
fn position_uncorrelated_with_next_return() {
    let prices = generate(1000, 2).unwrap();
    let positions = derive_position(&prices, &SignalParams::default()).unwrap();
    let returns = prices.returns();

    let held: Vec<f64> = positions[..positions.len() - 1]
        .iter()
        .map(|p| p.as_f64())
        .collect();
    let next: Vec<f64> = returns[1..].to_vec();

    assert!(held.iter().any(|&x| x != 0.0), "strategy never traded");
    let corr = pearson(&held, &next);
    assert!(corr.abs() < 0.2, "corr(positions[t], return[t+1]) = {corr}");
}
