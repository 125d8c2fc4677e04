//! Insert, search and delete throughput.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use memtree::{BTree, Key};

const SIZES: [u32; 3] = [1_000, 10_000, 100_000];

/// Deterministic scatter so inserts do not arrive in key order.
fn scattered(n: u32) -> Vec<Key> {
    (0..n).map(|i| i.wrapping_mul(2_654_435_761) % (n * 4)).collect()
}

fn build(keys: &[Key]) -> BTree {
    let mut tree = BTree::new().unwrap();
    for &key in keys {
        tree.insert(key).unwrap();
    }
    tree
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert");
    for n in SIZES {
        let keys = scattered(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| black_box(build(keys)));
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("search");
    for n in SIZES {
        let keys = scattered(n);
        let tree = build(&keys);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter(|| {
                let mut hits = 0usize;
                for &key in keys {
                    hits += usize::from(tree.search(black_box(key)));
                }
                hits
            });
        });
    }
    group.finish();
}

fn bench_delete(c: &mut Criterion) {
    let mut group = c.benchmark_group("delete");
    for n in SIZES {
        let keys = scattered(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &keys, |b, keys| {
            b.iter_batched(
                || build(keys),
                |mut tree| {
                    for &key in keys {
                        tree.delete(black_box(key));
                    }
                    tree
                },
                criterion::BatchSize::LargeInput,
            );
        });
    }
    group.finish();
}

criterion_group!(benches, bench_insert, bench_search, bench_delete);
criterion_main!(benches);
