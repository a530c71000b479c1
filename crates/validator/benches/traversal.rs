//! Benchmarks for tree traversal and violation collection.

use std::collections::BTreeMap;
use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use trellis_validator::prelude::*;

// ============================================================================
// Elements over flat sequences
// ============================================================================

fn bench_elements(c: &mut Criterion) {
    let mut group = c.benchmark_group("elements");
    let constraint = Elements::new(Required);

    for size in [10_usize, 100, 1_000] {
        let all_valid: Vec<String> = (0..size).map(|i| format!("item-{i}")).collect();
        let half_empty: Vec<String> = (0..size)
            .map(|i| if i % 2 == 0 { String::new() } else { format!("item-{i}") })
            .collect();

        group.bench_with_input(BenchmarkId::new("valid", size), &all_valid, |b, items| {
            b.iter(|| validate(black_box(items), &constraint));
        });
        group.bench_with_input(BenchmarkId::new("half_empty", size), &half_empty, |b, items| {
            b.iter(|| validate(black_box(items), &constraint));
        });
    }

    group.finish();
}

// ============================================================================
// Nested mappings (path building dominates)
// ============================================================================

fn bench_nested_paths(c: &mut Criterion) {
    let nested: BTreeMap<String, Vec<String>> = (0..50)
        .map(|i| (format!("group-{i}"), vec![String::new(); 20]))
        .collect();
    let constraint = Elements::new(Elements::new(Required));

    c.bench_function("nested_paths_1000", |b| {
        b.iter(|| validate(black_box(&nested), &constraint));
    });
}

// ============================================================================
// Constraints lists
// ============================================================================

fn bench_constraints(c: &mut Criterion) {
    let list: Constraints = (0..16).map(|_| Required.boxed()).collect();
    let value = "present".to_owned();

    c.bench_function("constraints_16_members", |b| {
        b.iter(|| validate(black_box(&value), &list));
    });
}

criterion_group!(benches, bench_elements, bench_nested_paths, bench_constraints);
criterion_main!(benches);
