//! Benchmarks for pipeline evaluation overhead against plain iterators.

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use lazypipe::Pipeline;
use std::hint::black_box;

fn bench_filter_map_count(c: &mut Criterion) {
    let mut group = c.benchmark_group("filter_map_count");

    for size in [100usize, 1_000, 10_000] {
        let input: Vec<i64> = (0..size as i64).collect();

        group.bench_with_input(BenchmarkId::new("pipeline", size), &input, |b, input| {
            b.iter(|| {
                let count = Pipeline::of(input.clone())
                    .filter(|v: &i64| v % 3 == 0)
                    .and_then(|p| p.map(|v: i64| v * 2))
                    .and_then(|p| p.count());
                black_box(count)
            })
        });

        group.bench_with_input(BenchmarkId::new("iterator", size), &input, |b, input| {
            b.iter(|| {
                let count = input
                    .clone()
                    .into_iter()
                    .filter(|v| v % 3 == 0)
                    .map(|v| v * 2)
                    .count();
                black_box(count)
            })
        });
    }

    group.finish();
}

fn bench_sorted_distinct(c: &mut Criterion) {
    let input: Vec<i64> = (0..5_000).map(|i| (i * 7919) % 1_000).collect();

    c.bench_function("sorted_distinct_5000", |b| {
        b.iter(|| {
            let values = Pipeline::of(input.clone())
                .distinct()
                .and_then(|p| p.sorted())
                .and_then(|p| p.to_array());
            black_box(values)
        })
    });
}

fn bench_short_circuit_infinite(c: &mut Criterion) {
    c.bench_function("iterate_find_first_match", |b| {
        b.iter(|| {
            let found = Pipeline::iterate(1i64, |n: &i64| n + 1)
                .and_then(|p| p.any_match(|v: &i64| *v > 10_000));
            black_box(found)
        })
    });
}

criterion_group!(
    benches,
    bench_filter_map_count,
    bench_sorted_distinct,
    bench_short_circuit_infinite
);
criterion_main!(benches);
