// Copyright 2025 John Brosnihan
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//! Benchmarks comparing packed storage against a plain HashMap baseline
//!
//! These benchmarks measure:
//! - Insert/remove/get performance
//! - Bulk iteration throughput over the dense array
//! - Removal churn with swap-remove repair

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use signet_ecs::{Entity, PackedStorage};
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Position {
    x: f64,
    y: f64,
    z: f64,
}

fn position(i: usize) -> Position {
    Position {
        x: i as f64,
        y: i as f64 * 2.0,
        z: i as f64 * 3.0,
    }
}

/// Benchmark: Insert N entities into storage
fn bench_storage_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_insert");

    for entity_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*entity_count as u64));

        group.bench_with_input(
            BenchmarkId::new("HashMap", entity_count),
            entity_count,
            |b, &count| {
                b.iter(|| {
                    let mut storage = HashMap::with_capacity(count);
                    for i in 0..count {
                        storage.insert(Entity::new(i as u32), position(i));
                    }
                    black_box(storage);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Packed", entity_count),
            entity_count,
            |b, &count| {
                b.iter(|| {
                    let mut storage = PackedStorage::with_capacity(count);
                    for i in 0..count {
                        storage
                            .insert(Entity::new(i as u32), position(i))
                            .expect("bench stays under capacity");
                    }
                    black_box(storage);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: Random access (get) performance
fn bench_storage_random_access(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_random_access");

    for entity_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*entity_count as u64));

        group.bench_with_input(
            BenchmarkId::new("Packed", entity_count),
            entity_count,
            |b, &count| {
                let mut storage = PackedStorage::with_capacity(count);
                for i in 0..count {
                    storage
                        .insert(Entity::new(i as u32), position(i))
                        .expect("bench stays under capacity");
                }

                // Stride through entities out of insertion order.
                b.iter(|| {
                    let mut sum = 0.0;
                    for i in (0..count).rev() {
                        let entity = Entity::new(i as u32);
                        sum += storage.get(entity).unwrap().x;
                    }
                    black_box(sum);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: Bulk iteration over all components
fn bench_storage_iteration(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_iteration");

    for entity_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*entity_count as u64));

        group.bench_with_input(
            BenchmarkId::new("HashMap", entity_count),
            entity_count,
            |b, &count| {
                let mut storage = HashMap::with_capacity(count);
                for i in 0..count {
                    storage.insert(Entity::new(i as u32), position(i));
                }

                b.iter(|| {
                    let sum: f64 = storage.values().map(|p| p.x).sum();
                    black_box(sum);
                });
            },
        );

        group.bench_with_input(
            BenchmarkId::new("Packed", entity_count),
            entity_count,
            |b, &count| {
                let mut storage = PackedStorage::with_capacity(count);
                for i in 0..count {
                    storage
                        .insert(Entity::new(i as u32), position(i))
                        .expect("bench stays under capacity");
                }

                // The dense slice is the cache-friendly path.
                b.iter(|| {
                    let sum: f64 = storage.components().iter().map(|p| p.x).sum();
                    black_box(sum);
                });
            },
        );
    }

    group.finish();
}

/// Benchmark: Removal churn (swap-remove with map repair)
fn bench_storage_churn(c: &mut Criterion) {
    let mut group = c.benchmark_group("storage_churn");

    for entity_count in [100, 1000, 10000].iter() {
        group.throughput(Throughput::Elements(*entity_count as u64));

        group.bench_with_input(
            BenchmarkId::new("Packed", entity_count),
            entity_count,
            |b, &count| {
                b.iter(|| {
                    let mut storage = PackedStorage::with_capacity(count);
                    for i in 0..count {
                        storage
                            .insert(Entity::new(i as u32), position(i))
                            .expect("bench stays under capacity");
                    }
                    // Remove every other entity from the middle outwards.
                    for i in (0..count).step_by(2) {
                        storage
                            .remove(Entity::new(i as u32))
                            .expect("entity was inserted above");
                    }
                    black_box(storage.len());
                });
            },
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_storage_insert,
    bench_storage_random_access,
    bench_storage_iteration,
    bench_storage_churn
);
criterion_main!(benches);
