use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keel::MinHeap;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

fn bench_min_heap(c: &mut Criterion) {
    let mut group = c.benchmark_group("min_heap");

    group.bench_function("std_binary_heap_reverse_push", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in 0..1000 {
                heap.push(Reverse(black_box(i)));
            }
        });
    });

    group.bench_function("keel_min_heap_insert", |b| {
        b.iter(|| {
            let mut heap = MinHeap::new();
            for i in 0..1000 {
                heap.insert(black_box(i));
            }
        });
    });

    // Reverse-sorted input makes every insert sift all the way up.
    group.bench_function("std_binary_heap_reverse_push_pop", |b| {
        b.iter(|| {
            let mut heap = BinaryHeap::new();
            for i in (0..1000).rev() {
                heap.push(Reverse(i));
            }
            while let Some(x) = heap.pop() {
                black_box(x);
            }
        });
    });

    group.bench_function("keel_min_heap_insert_extract", |b| {
        b.iter(|| {
            let mut heap = MinHeap::new();
            for i in (0..1000).rev() {
                heap.insert(i);
            }
            while let Some(x) = heap.extract_min() {
                black_box(x);
            }
        });
    });

    group.bench_function("keel_min_heap_from_vec", |b| {
        b.iter(|| {
            let heap = MinHeap::from((0..1000).rev().collect::<Vec<u32>>());
            black_box(heap.peek().copied());
        });
    });

    group.finish();
}

criterion_group!(benches, bench_min_heap);
criterion_main!(benches);
