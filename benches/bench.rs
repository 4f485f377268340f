use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use skipmap::{Random, RandomGenerator, SkipList};
use std::collections::BTreeMap;

const N: usize = 10_000;

fn random_keys(seed: u32) -> Vec<u32> {
    let rnd = Random::new(seed);
    (0..N).map(|_| rnd.next()).collect()
}

fn build_list(keys: &[u32]) -> SkipList<u32, u32> {
    let mut list = SkipList::with_seed(0xbeef);
    for &k in keys {
        list.insert(k, k);
    }
    list
}

fn build_map(keys: &[u32]) -> BTreeMap<u32, u32> {
    keys.iter().map(|&k| (k, k)).collect()
}

fn bench_insert(c: &mut Criterion) {
    let keys = random_keys(0xbead);
    c.bench_function("skiplist_insert_10k", |b| {
        b.iter(|| black_box(build_list(&keys).size()))
    });
    c.bench_function("btreemap_insert_10k", |b| {
        b.iter(|| black_box(build_map(&keys).len()))
    });
}

fn bench_find(c: &mut Criterion) {
    let keys = random_keys(0xbead);
    let list = build_list(&keys);
    let map = build_map(&keys);
    c.bench_function("skiplist_find_10k", |b| {
        b.iter(|| {
            let mut hits = 0;
            for k in &keys {
                if list.contains(k) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
    c.bench_function("btreemap_find_10k", |b| {
        b.iter(|| {
            let mut hits = 0;
            for k in &keys {
                if map.contains_key(k) {
                    hits += 1;
                }
            }
            black_box(hits)
        })
    });
}

fn bench_erase(c: &mut Criterion) {
    let keys = random_keys(0xbead);
    c.bench_function("skiplist_erase_10k", |b| {
        b.iter_batched(
            || build_list(&keys),
            |mut list| {
                for k in &keys {
                    list.erase(k);
                }
                black_box(list.size())
            },
            BatchSize::LargeInput,
        )
    });
    c.bench_function("btreemap_erase_10k", |b| {
        b.iter_batched(
            || build_map(&keys),
            |mut map| {
                for k in &keys {
                    map.remove(k);
                }
                black_box(map.len())
            },
            BatchSize::LargeInput,
        )
    });
}

criterion_group!(benches, bench_insert, bench_find, bench_erase);
criterion_main!(benches);
