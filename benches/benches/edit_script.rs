//! Benchmarks for the edit-script solver and the granularity pass.
//!
//! Performance-critical paths:
//! - `diff`: the diagonal search plus backtrace, dominated by edit distance
//! - adapter entry points: `slices`, `chars`, `byte_strings`
//! - `granular`: single pass over a change list

#![allow(missing_docs)]

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use seqdiff::{adapters, diff, granular, SlicePair};

const AMBIGUOUS_A: &[i32] = &[1, 2, 3, 1, 2, 2, 1];
const AMBIGUOUS_B: &[i32] = &[3, 2, 1, 2, 1, 3];

const PROSE_A: &str = "lorem ipsum dolor sit amet consectetur";
const PROSE_B: &str = "lorem lovesum daenerys targaryen ami consecteture";

fn bench_solver(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_script/solver");

    group.bench_function("comparator_entry", |b| {
        let pair = SlicePair::new(AMBIGUOUS_A, AMBIGUOUS_B);
        b.iter(|| {
            diff(
                black_box(AMBIGUOUS_A.len()),
                black_box(AMBIGUOUS_B.len()),
                &pair,
            )
        });
    });

    group.bench_function("slices", |b| {
        b.iter(|| adapters::slices(black_box(AMBIGUOUS_A), black_box(AMBIGUOUS_B)));
    });

    group.finish();
}

fn bench_string_adapters(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_script/strings");

    group.throughput(Throughput::Bytes((PROSE_A.len() + PROSE_B.len()) as u64));
    group.bench_function("chars", |b| {
        b.iter(|| adapters::chars(black_box(PROSE_A), black_box(PROSE_B)));
    });
    group.bench_function("byte_strings", |b| {
        b.iter(|| adapters::byte_strings(black_box(PROSE_A), black_box(PROSE_B)));
    });

    group.finish();
}

fn bench_edit_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_script/density");

    // same length, growing fraction of changed elements: runtime scales with
    // the edit distance, not the sequence length
    let len = 512usize;
    for changed_every in [64usize, 16, 4] {
        let a: Vec<usize> = (0..len).collect();
        let b: Vec<usize> = (0..len)
            .map(|i| if i % changed_every == 0 { i + len } else { i })
            .collect();

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("1_in_{changed_every}")),
            &changed_every,
            |bench, _| bench.iter(|| adapters::slices(black_box(&a), black_box(&b))),
        );
    }

    group.finish();
}

fn bench_granularity(c: &mut Criterion) {
    let mut group = c.benchmark_group("edit_script/granular");

    let a: Vec<usize> = (0..512).collect();
    let b: Vec<usize> = (0..512).map(|i| if i % 8 == 0 { i + 512 } else { i }).collect();
    let changes = adapters::slices(&a, &b);

    for level in [0usize, 4, 16] {
        group.bench_with_input(
            BenchmarkId::from_parameter(level),
            &level,
            |bench, level| bench.iter(|| granular(black_box(*level), black_box(&changes))),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_solver,
    bench_string_adapters,
    bench_edit_density,
    bench_granularity
);
criterion_main!(benches);
