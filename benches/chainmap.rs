#![allow(
    missing_docs,
    clippy::missing_docs_in_private_items,
    clippy::unwrap_used,
    clippy::similar_names
)]
use std::collections::HashMap;
use std::hint::black_box;

use chainmap::ChainedHashMap;
use criterion::{Criterion, criterion_group, criterion_main};
use proptest::{
    prelude::{Strategy, any},
    strategy::ValueTree,
    test_runner::TestRunner,
};

const ITEMS_AMOUNT: usize = 1000;
const SAMPLE_SIZE: usize = 10;
const BUCKETS: [usize; 3] = [100, 1000, 10_000];

fn hash_map_benches(c: &mut Criterion) {
    let mut runner = TestRunner::default();
    let items = proptest::collection::vec(any::<(String, String)>(), ITEMS_AMOUNT)
        .new_tree(&mut runner)
        .unwrap()
        .current();

    let mut group = c.benchmark_group("Hash map comparison benchmark");
    group.sample_size(SAMPLE_SIZE);

    for buckets in BUCKETS {
        let mut chained_map = ChainedHashMap::new(buckets).unwrap();
        group.bench_function(format!("chained insert ({buckets} buckets)"), |b| {
            b.iter(|| {
                for (key, value) in items.clone() {
                    chained_map.set(key, value);
                }
            });
        });
        group.bench_function(format!("chained get ({buckets} buckets)"), |b| {
            b.iter(|| {
                for (key, _) in &items {
                    let _ = black_box(chained_map.get(key));
                }
            });
        });
    }

    let mut rust_map = HashMap::new();
    group.bench_function("rust std insert", |b| {
        b.iter(|| {
            for (key, value) in items.clone() {
                rust_map.insert(key, value);
            }
        });
    });
    group.bench_function("rust std get", |b| {
        b.iter(|| {
            for (key, _) in &items {
                let _ = black_box(rust_map.get(key));
            }
        });
    });
    group.finish();
}

criterion_group!(benches, hash_map_benches);

criterion_main!(benches);
