//! # Sparse-Set Storage Benchmark
//!
//! The contract under test:
//! - O(1) insert / lookup / remove at any fill level
//! - 0 allocations after store creation
//!
//! Run with: `cargo bench --package basilisk_core`

// Benchmarks don't need docs and may have intentionally unused code
#![allow(missing_docs)]
#![allow(dead_code)]

use basilisk_core::{ComponentStorage, EntityId, Position, DEFAULT_MAX_ENTITIES};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

/// Fill levels exercised by the parameterized benchmarks.
const FILL_LEVELS: [usize; 3] = [10_000, 100_000, DEFAULT_MAX_ENTITIES];

/// Benchmark: fill a store from empty.
fn bench_fill(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_fill");

    for count in FILL_LEVELS {
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, &count| {
            b.iter(|| {
                let mut storage = ComponentStorage::new(count);
                for raw in 0..count as u32 {
                    storage.insert(EntityId::new(raw), Position::new(1, 2));
                }
                storage.len()
            });
        });
    }

    group.finish();
}

/// Benchmark: random-ish lookups in a full store.
fn bench_lookup(c: &mut Criterion) {
    let mut storage = ComponentStorage::new(DEFAULT_MAX_ENTITIES);
    for raw in 0..DEFAULT_MAX_ENTITIES as u32 {
        storage.insert(EntityId::new(raw), Position::new(raw as i32, 0));
    }

    c.bench_function("storage_lookup_hit", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            // Stride through the universe to defeat trivial prefetching.
            for raw in (0..DEFAULT_MAX_ENTITIES as u32).step_by(1021) {
                if let Some(position) = storage.get(black_box(EntityId::new(raw))) {
                    sum += i64::from(position.x);
                }
            }
            sum
        });
    });
}

/// Benchmark: insert/remove churn, the swap-remove hot path.
fn bench_churn(c: &mut Criterion) {
    let mut storage = ComponentStorage::new(DEFAULT_MAX_ENTITIES);
    for raw in 0..DEFAULT_MAX_ENTITIES as u32 {
        storage.insert(EntityId::new(raw), Position::new(0, 0));
    }

    c.bench_function("storage_churn_remove_insert", |b| {
        b.iter(|| {
            for raw in 0..1_000u32 {
                let entity = EntityId::new(black_box(raw * 37));
                storage.remove(entity);
                storage.insert(entity, Position::new(1, 1));
            }
            storage.len()
        });
    });
}

/// Benchmark: dense iteration over every live value.
fn bench_iterate(c: &mut Criterion) {
    let mut storage = ComponentStorage::new(DEFAULT_MAX_ENTITIES);
    for raw in 0..DEFAULT_MAX_ENTITIES as u32 {
        storage.insert(EntityId::new(raw), Position::new(1, 1));
    }

    c.bench_function("storage_iterate_dense", |b| {
        b.iter(|| {
            let mut sum = 0i64;
            for position in storage.iter() {
                sum += i64::from(position.x);
            }
            black_box(sum)
        });
    });
}

criterion_group!(benches, bench_fill, bench_lookup, bench_churn, bench_iterate);
criterion_main!(benches);
