//! Criterion benchmarks for the pipeline hot paths.
//!
//! Benchmarks:
//! 1. Price generation
//! 2. Signal derivation (rolling z-score + hysteresis)
//! 3. PnL simulation
//! 4. Signal, PnL and evaluation over a fixed price path
//!
//! Each group reports rows/sec via `Throughput::Elements`.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use revlab_core::{derive_position, evaluate, generate, simulate, CostModel, SignalParams};

const ROW_COUNTS: [usize; 3] = [1_000, 20_000, 100_000];

// ── 1. Price Generation ──────────────────────────────────────────────

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate");
    for &n in &ROW_COUNTS {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, &n| {
            b.iter(|| generate(black_box(n), black_box(0)).unwrap());
        });
    }
    group.finish();
}

// ── 2. Signal Derivation ─────────────────────────────────────────────

fn bench_signal(c: &mut Criterion) {
    let mut group = c.benchmark_group("derive_position");
    for &window in &[20usize, 100] {
        let params = SignalParams::new(window, 1.0, 0.2).unwrap();
        for &n in &ROW_COUNTS {
            let prices = generate(n, 0).unwrap();
            group.throughput(Throughput::Elements(n as u64));
            group.bench_with_input(
                BenchmarkId::new(format!("window_{window}"), n),
                &prices,
                |b, prices| {
                    b.iter(|| derive_position(black_box(prices), black_box(&params)).unwrap());
                },
            );
        }
    }
    group.finish();
}

// ── 3. PnL Simulation ────────────────────────────────────────────────

fn bench_simulate(c: &mut Criterion) {
    let mut group = c.benchmark_group("simulate");
    let costs = CostModel::default();
    for &n in &ROW_COUNTS {
        let prices = generate(n, 0).unwrap();
        let positions = derive_position(&prices, &SignalParams::default()).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| simulate(black_box(&prices), black_box(&positions), &costs).unwrap());
        });
    }
    group.finish();
}

// ── 4. Signal + PnL + Evaluation ─────────────────────────────────────

fn bench_signal_and_pnl(c: &mut Criterion) {
    let mut group = c.benchmark_group("signal_and_pnl");
    let params = SignalParams::default();
    let costs = CostModel::default();
    for &n in &ROW_COUNTS {
        let prices = generate(n, 0).unwrap();
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &prices, |b, prices| {
            b.iter(|| {
                let positions = derive_position(black_box(prices), &params).unwrap();
                let pnl = simulate(prices, &positions, &costs).unwrap();
                evaluate(&pnl).unwrap()
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_generate,
    bench_signal,
    bench_simulate,
    bench_signal_and_pnl,
);
criterion_main!(benches);
