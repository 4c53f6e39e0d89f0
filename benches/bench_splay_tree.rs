#[macro_use]
extern crate criterion;
extern crate rand;
extern crate splay_collections;

use criterion::{black_box, Criterion};
use rand::Rng;
use splay_collections::splay_tree::SplaySet;
use std::collections::BTreeSet;

const NUM_OF_OPERATIONS: usize = 100;

fn bench_btreeset_insert(c: &mut Criterion) {
    c.bench_function("bench btreeset insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = BTreeSet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_btreeset_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = BTreeSet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench btreeset contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_splay_set_insert(c: &mut Criterion) {
    c.bench_function("bench splay set insert", |b| {
        b.iter(|| {
            let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
            let mut set = SplaySet::new();
            for _ in 0..NUM_OF_OPERATIONS {
                set.insert(rng.next_u32());
            }
        })
    });
}

fn bench_splay_set_contains(c: &mut Criterion) {
    let mut rng: rand::XorShiftRng = rand::SeedableRng::from_seed([1, 1, 1, 1]);
    let mut set = SplaySet::new();
    let mut values = Vec::new();
    for _ in 0..NUM_OF_OPERATIONS {
        let value = rng.next_u32();
        set.insert(value);
        values.push(value);
    }

    c.bench_function("bench splay set contains", move |b| {
        b.iter(|| {
            for value in &values {
                black_box(set.contains(value));
            }
        })
    });
}

fn bench_splay_set_repeated_access(c: &mut Criterion) {
    let mut set: SplaySet<u32> = (0..10_000).collect();

    c.bench_function("bench splay set repeated access", move |b| {
        b.iter(|| {
            for _ in 0..NUM_OF_OPERATIONS {
                black_box(set.contains(&42));
            }
        })
    });
}

criterion_group!(
    benches,
    bench_btreeset_insert,
    bench_btreeset_contains,
    bench_splay_set_insert,
    bench_splay_set_contains,
    bench_splay_set_repeated_access
);
criterion_main!(benches);
