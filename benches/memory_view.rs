//! Benchmarks for MemoryView access paths vs native slices
//!
//! Run with: `cargo bench --bench memory_view`

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use memview::{MemoryView, NPOS};

fn bench_sum(c: &mut Criterion) {
    let mut group = c.benchmark_group("sum");

    for size in [64usize, 4096, 65536] {
        let data: Vec<u64> = (0..size as u64).collect();
        let view = MemoryView::from(&data);

        group.bench_with_input(BenchmarkId::new("slice_iter", size), &size, |b, _| {
            b.iter(|| black_box(&data[..]).iter().sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("view_iter", size), &size, |b, _| {
            b.iter(|| black_box(view).iter().sum::<u64>());
        });

        group.bench_with_input(BenchmarkId::new("view_at", size), &size, |b, &size| {
            b.iter(|| {
                let v = black_box(view);
                let mut total = 0u64;
                for i in 0..size {
                    if let Ok(x) = v.at(i) {
                        total += *x;
                    }
                }
                total
            });
        });

        group.bench_with_input(BenchmarkId::new("view_get_unchecked", size), &size, |b, &size| {
            b.iter(|| {
                let v = black_box(view);
                let mut total = 0u64;
                for i in 0..size {
                    total += unsafe { *v.get_unchecked(i) };
                }
                total
            });
        });
    }

    group.finish();
}

fn bench_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("compare");

    for size in [64usize, 4096] {
        let a: Vec<u32> = (0..size as u32).collect();
        let b: Vec<u32> = (0..size as u32).collect();
        let (va, vb) = (MemoryView::from(&a), MemoryView::from(&b));

        group.bench_with_input(BenchmarkId::new("eq", size), &size, |bench, _| {
            bench.iter(|| black_box(va) == black_box(vb));
        });

        group.bench_with_input(BenchmarkId::new("cmp", size), &size, |bench, _| {
            bench.iter(|| black_box(va).cmp(&black_box(vb)));
        });
    }

    group.finish();
}

fn bench_subview(c: &mut Criterion) {
    let data: Vec<u8> = vec![0; 1 << 16];
    let view = MemoryView::from(&data);

    c.bench_function("view_halving", |b| {
        b.iter(|| {
            let mut v = black_box(view);
            while v.len() > 1 {
                v = v.view(v.len() / 2, NPOS).unwrap_or_default();
            }
            v.len()
        });
    });
}

criterion_group!(benches, bench_sum, bench_compare, bench_subview);
criterion_main!(benches);
