use std::hint::black_box;

use criterion::{Criterion, criterion_group, criterion_main};
use hofkit::prelude::*;

fn bench_filter(c: &mut Criterion) {
    let items: Vec<i64> = (0..10_000).collect();
    let above = greater_than(5_000);
    let evens = even();

    c.bench_function("filter_greater_than", |b| {
        b.iter(|| filter(black_box(&items), &above))
    });
    c.bench_function("filter_even", |b| b.iter(|| filter(black_box(&items), &evens)));
}

fn bench_map(c: &mut Criterion) {
    let items: Vec<String> = (0..1_000).map(|i| format!("Headline {i}")).collect();
    let h1 = tag_wrapper("h1").expect("non-empty tag");

    c.bench_function("map_all_tag_wrapper", |b| b.iter(|| map_all(black_box(&items), &h1)));
}

criterion_group!(benches, bench_filter, bench_map);
criterion_main!(benches);
