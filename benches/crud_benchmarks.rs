use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use std::collections::BTreeMap;
use std::hint::black_box;
use avl_rank_tree::AvlTreeMap;

const N: usize = 10_000;

// ─── Helper functions to generate key sequences ─────────────────────────────

fn ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).collect()
}

fn reverse_ordered_keys(n: usize) -> Vec<i64> {
    (0..n as i64).rev().collect()
}

fn random_keys(n: usize) -> Vec<i64> {
    // Use a simple LCG for deterministic pseudo-random sequence
    let mut keys = Vec::with_capacity(n);
    let mut x: u64 = 12345;
    for _ in 0..n {
        x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
        keys.push((x >> 33) as i64);
    }
    keys
}

fn key_orders() -> [(&'static str, Vec<i64>); 3] {
    [
        ("ordered", ordered_keys(N)),
        ("reverse", reverse_ordered_keys(N)),
        ("random", random_keys(N)),
    ]
}

fn avl_map(keys: &[i64]) -> AvlTreeMap<i64, i64> {
    let mut map = AvlTreeMap::new();
    for &k in keys {
        map.insert(k, k);
    }
    map
}

fn btree_map(keys: &[i64]) -> BTreeMap<i64, i64> {
    keys.iter().map(|&k| (k, k)).collect()
}

// ─── Map Benchmarks ─────────────────────────────────────────────────────────

fn bench_map_insert(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_insert_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
            b.iter(|| avl_map(&keys));
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| btree_map(&keys));
        });

        group.finish();
    }
}

fn bench_map_get(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_get_{order}"));

        let map = avl_map(&keys);
        group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
            b.iter(|| {
                for k in &keys {
                    black_box(map.get(k));
                }
            });
        });

        let map = btree_map(&keys);
        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter(|| {
                for k in &keys {
                    black_box(map.get(k));
                }
            });
        });

        group.finish();
    }
}

fn bench_map_remove(c: &mut Criterion) {
    for (order, keys) in key_orders() {
        let mut group = c.benchmark_group(format!("map_remove_{order}"));

        group.bench_function(BenchmarkId::new("AvlTreeMap", N), |b| {
            b.iter_batched(
                || avl_map(&keys),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.bench_function(BenchmarkId::new("BTreeMap", N), |b| {
            b.iter_batched(
                || btree_map(&keys),
                |mut map| {
                    for k in &keys {
                        map.remove(k);
                    }
                    map
                },
                BatchSize::SmallInput,
            );
        });

        group.finish();
    }
}

// BTreeMap has no rank index, so it walks from the front.
fn bench_map_get_by_rank(c: &mut Criterion) {
    let keys = random_keys(N);
    let mut group = c.benchmark_group("map_get_by_rank");

    let map = avl_map(&keys);
    let len = map.len();
    group.bench_function(BenchmarkId::new("AvlTreeMap", len), |b| {
        b.iter(|| {
            for rank in (0..len).step_by(97) {
                black_box(map.get_by_rank(rank));
            }
        });
    });

    let map = btree_map(&keys);
    group.bench_function(BenchmarkId::new("BTreeMap", len), |b| {
        b.iter(|| {
            for rank in (0..len).step_by(97) {
                black_box(map.iter().nth(rank));
            }
        });
    });

    group.finish();
}

// ─── Criterion Groups ───────────────────────────────────────────────────────

criterion_group!(map_crud_benches, bench_map_insert, bench_map_get, bench_map_remove);

criterion_group!(map_rank_benches, bench_map_get_by_rank);

criterion_main!(map_crud_benches, map_rank_benches);
