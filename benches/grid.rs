//! Benchmarks for the windowing and sort engines.
//!
//! Run with: cargo bench
//!
//! `compute_visible` runs at scroll cadence (every frame), the sort
//! permutation on every dataset or key change; both are measured on the
//! 50k-row sample dataset.
#![allow(clippy::expect_used, clippy::cast_possible_truncation)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use gridview::sample::sample_rows;
use gridview::sort::permutation;
use gridview::types::SortKey;
use gridview::window::compute_visible;

/// Benchmark the per-frame window computation across dataset sizes.
fn bench_compute_visible(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_visible");
    for count in [1_000usize, 50_000, 500_000] {
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            let offset = (count as f32 * 35.0) / 2.0;
            b.iter(|| {
                compute_visible(
                    black_box(offset),
                    black_box(600.0),
                    black_box(count),
                    black_box(35.0),
                    black_box(5),
                )
            })
        });
    }
    group.finish();
}

/// Benchmark the stable sort permutation on the demo dataset.
fn bench_sort_permutation(c: &mut Criterion) {
    let rows = sample_rows(50_000);

    c.bench_function("sort_single_key_50k", |b| {
        let keys = vec![SortKey::asc("firstName")];
        b.iter(|| permutation(black_box(&rows), black_box(&keys)))
    });

    c.bench_function("sort_multi_key_50k", |b| {
        let keys = vec![
            SortKey::asc("status"),
            SortKey::desc("age"),
            SortKey::asc("firstName"),
        ];
        b.iter(|| permutation(black_box(&rows), black_box(&keys)))
    });
}

criterion_group!(benches, bench_compute_visible, bench_sort_permutation);
criterion_main!(benches);
