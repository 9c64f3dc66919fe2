use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use transcendental::special::{gamma, incbet, incbi, jv};
use transcendental::ufunc::map1;

// ---------------------------------------------------------------------------
// Scalar evaluation
// ---------------------------------------------------------------------------

fn gamma_scalar(c: &mut Criterion) {
    let mut g = c.benchmark_group("gamma");

    g.bench_function("rational", |b| b.iter(|| gamma(black_box(2.7))));
    g.bench_function("stirling", |b| b.iter(|| gamma(black_box(57.3))));
    g.bench_function("reflected", |b| b.iter(|| gamma(black_box(-41.6))));

    g.finish();
}

fn incbet_scalar(c: &mut Criterion) {
    let mut g = c.benchmark_group("incbet");

    g.bench_function("continued_fraction", |b| {
        b.iter(|| incbet(black_box(12.5), black_box(7.25), black_box(0.6)))
    });
    g.bench_function("power_series", |b| {
        b.iter(|| incbet(black_box(0.5), black_box(0.8), black_box(0.05)))
    });

    g.finish();
}

fn incbi_scalar(c: &mut Criterion) {
    c.bench_function("incbi", |b| {
        b.iter(|| incbi(black_box(4.0), black_box(9.5), black_box(0.37)))
    });
}

fn jv_scalar(c: &mut Criterion) {
    let mut g = c.benchmark_group("jv");

    g.bench_function("series", |b| b.iter(|| jv(black_box(2.5), black_box(1.2))));
    g.bench_function("hankel", |b| b.iter(|| jv(black_box(2.5), black_box(80.0))));
    g.bench_function("uniform", |b| b.iter(|| jv(black_box(60.5), black_box(58.0))));

    g.finish();
}

// ---------------------------------------------------------------------------
// Slice evaluation
// ---------------------------------------------------------------------------

fn map_10k(c: &mut Criterion) {
    let mut g = c.benchmark_group("map1_gamma_10k");

    g.bench_function("f64", |b| {
        let x: Vec<f64> = (0..10_000).map(|i| 0.5 + i as f64 * 0.01).collect();
        let mut out = vec![0.0_f64; x.len()];
        b.iter(|| map1(gamma, black_box(&x), &mut out))
    });

    g.bench_function("f32", |b| {
        let x: Vec<f32> = (0..10_000).map(|i| 0.5 + i as f32 * 0.01).collect();
        let mut out = vec![0.0_f32; x.len()];
        b.iter(|| map1(gamma, black_box(&x), &mut out))
    });

    g.finish();
}

// ---------------------------------------------------------------------------

criterion_group!(benches, gamma_scalar, incbet_scalar, incbi_scalar, jv_scalar, map_10k);
criterion_main!(benches);
