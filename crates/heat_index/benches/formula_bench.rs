//! Criterion benchmarks for the heat index core.
//!
//! Benchmarks:
//!   - heat_index_fahrenheit at a single point
//!   - full assessment (policy + domain + round trip)
//!   - default chart curve set (6 x 20 points)
//!
//! Run with: cargo bench -p heat_index --bench formula_bench

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use heat_index::{
    assess, heat_index_fahrenheit, humidity_curves, CalculatorConfig, CurveSweep, TemperatureUnit,
};

fn bench_formula(c: &mut Criterion) {
    let mut group = c.benchmark_group("heat_index_formula");
    group.sample_size(1000);

    group.bench_function("heat_index_fahrenheit", |b| {
        b.iter(|| black_box(heat_index_fahrenheit(black_box(89.6), black_box(70.0))));
    });

    let config = CalculatorConfig::default();
    group.bench_function("assess", |b| {
        b.iter(|| black_box(assess(black_box(32.0), black_box(70.0), &config)));
    });

    group.finish();
}

fn bench_curves(c: &mut Criterion) {
    let sweep = CurveSweep::default();
    c.bench_function("humidity_curves_default", |b| {
        b.iter(|| black_box(humidity_curves(black_box(&sweep), TemperatureUnit::Celsius)));
    });
}

criterion_group!(benches, bench_formula, bench_curves);
criterion_main!(benches);
