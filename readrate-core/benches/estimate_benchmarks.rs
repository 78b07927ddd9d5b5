//! Benchmarks for reading time estimation

use criterion::{criterion_group, criterion_main, Criterion, Throughput};
use readrate_core::{RateSpec, ReadingRateEstimator};
use std::hint::black_box;

/// Generate test text of roughly `size_kb` kilobytes
fn generate_test_text(size_kb: usize) -> String {
    let base_text = "The quick brown fox jumps over the lazy dog.\n";
    let repetitions = size_kb * 1024 / base_text.len();

    base_text.repeat(repetitions)
}

fn benchmark_estimate(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate");
    let estimator = ReadingRateEstimator::new();

    for size_kb in [1, 64, 1024] {
        let text = generate_test_text(size_kb);
        group.throughput(Throughput::Bytes(text.len() as u64));
        group.bench_function(format!("{size_kb}KB"), |b| {
            b.iter(|| estimator.estimate(black_box(&text), "en"));
        });
    }

    group.finish();
}

fn benchmark_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve_rate");
    let estimator = ReadingRateEstimator::new();

    group.bench_function("table", |b| {
        b.iter(|| estimator.resolve_rate(black_box("sv")));
    });
    group.bench_function("override", |b| {
        b.iter(|| estimator.resolve_rate(black_box(RateSpec::Rate(250.0))));
    });
    group.bench_function("numeric_string", |b| {
        b.iter(|| estimator.resolve_rate(black_box("250")));
    });
    group.bench_function("default", |b| {
        b.iter(|| estimator.resolve_rate(black_box("unknown")));
    });

    group.finish();
}

criterion_group!(benches, benchmark_estimate, benchmark_resolve);
criterion_main!(benches);
