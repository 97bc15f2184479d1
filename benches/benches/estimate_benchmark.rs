//! Estimation and formatting benchmarks.
//!
//! Run with: `cargo bench --package ratecard-bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use ratecard_bench::{CATALOG_JSON, request_grid};
use ratecard_lib::prelude::*;
use std::hint::black_box;

fn catalog_benchmark(c: &mut Criterion) {
    c.bench_function("catalog/parse", |b| {
        b.iter(|| Catalog::from_json(black_box(CATALOG_JSON)))
    });
}

fn estimate_benchmark(c: &mut Criterion) {
    let catalog = Catalog::global();
    let estimator = Estimator::new(catalog);
    let requests = request_grid(catalog);

    let mut group = c.benchmark_group("estimate");

    let single = &requests[0];
    group.bench_function("single", |b| b.iter(|| estimator.estimate(black_box(single))));

    group.throughput(Throughput::Elements(requests.len() as u64));
    group.bench_function("grid", |b| {
        b.iter(|| {
            requests
                .iter()
                .map(|r| estimator.estimate(black_box(r)))
                .collect::<Result<Vec<_>>>()
        })
    });

    group.finish();
}

fn format_benchmark(c: &mut Criterion) {
    let catalog = Catalog::global();
    let estimator = Estimator::new(catalog);
    let estimates: Vec<Estimate> = request_grid(catalog)
        .iter()
        .filter_map(|r| estimator.estimate(r).ok())
        .collect();

    let mut group = c.benchmark_group("format");
    group.throughput(Throughput::Elements(estimates.len() as u64));

    group.bench_with_input(BenchmarkId::new("text", estimates.len()), &estimates, |b, e| {
        let formatter = TextFormatter::new().with_breakdown(true);
        b.iter(|| formatter.render(black_box(e)))
    });
    group.bench_with_input(BenchmarkId::new("json", estimates.len()), &estimates, |b, e| {
        let formatter = JsonFormatter::new();
        b.iter(|| formatter.render(black_box(e)))
    });
    group.bench_with_input(BenchmarkId::new("csv", estimates.len()), &estimates, |b, e| {
        let formatter = CsvFormatter::new();
        b.iter(|| formatter.render(black_box(e)))
    });

    group.finish();
}

criterion_group!(
    benches,
    catalog_benchmark,
    estimate_benchmark,
    format_benchmark
);
criterion_main!(benches);
