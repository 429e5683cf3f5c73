//! Benchmarks for RawList vs Vec
//!
//! Run with: `cargo bench --bench raw_list`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use rawlist::IntList;

fn bench_append(c: &mut Criterion) {
    let mut group = c.benchmark_group("append");

    for size in [16, 256, 4096] {
        group.bench_with_input(BenchmarkId::new("RawList", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = IntList::new();
                for i in 0..size {
                    list.append(black_box(i));
                }
                black_box(list);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<i32>::new();
                for i in 0..size {
                    vec.push(black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_insert_front(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_front");

    for size in [16, 256, 1024] {
        group.bench_with_input(BenchmarkId::new("RawList", size), &size, |b, &size| {
            b.iter(|| {
                let mut list = IntList::new();
                for i in 0..size {
                    list.insert(0, black_box(i));
                }
                black_box(list);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut vec = Vec::<i32>::new();
                for i in 0..size {
                    vec.insert(0, black_box(i));
                }
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_remove_range(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_range_middle");

    for size in [256, 4096] {
        let source: Vec<i32> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("RawList", size), &source, |b, source| {
            b.iter(|| {
                let mut list = IntList::from_slice(source);
                list.remove_range(black_box(source.len() / 4), black_box(source.len() / 2));
                black_box(list);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &source, |b, source| {
            b.iter(|| {
                let mut vec = source.clone();
                let start = black_box(source.len() / 4);
                vec.drain(start..start + black_box(source.len() / 2));
                black_box(vec);
            });
        });
    }

    group.finish();
}

fn bench_index_of(c: &mut Criterion) {
    let list: IntList = (0..4096).collect();

    c.bench_function("index_of_last", |b| {
        b.iter(|| black_box(list.index_of(black_box(&4095))));
    });
}

criterion_group!(benches, bench_append, bench_insert_front, bench_remove_range, bench_index_of);
criterion_main!(benches);
