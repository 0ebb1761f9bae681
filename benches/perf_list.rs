//! Benchmarks for arena-backed list operations.
//!
//! Run with: cargo bench

use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};
use relink::{Arena, List};

const N: usize = 10_000;

// ============================================================================
// Push / pop churn
// ============================================================================

fn bench_push_pop(c: &mut Criterion) {
    let mut group = c.benchmark_group("push_pop");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("push_back_pop_front", |b| {
        let mut arena: Arena<u64> = Arena::with_capacity(N);
        let mut list: List<u64> = List::new();
        b.iter(|| {
            for i in 0..N as u64 {
                black_box(list.push_back(&mut arena, i));
            }
            while let Some(value) = list.pop_front(&mut arena) {
                black_box(value);
            }
        });
    });

    group.bench_function("push_front_pop_back", |b| {
        let mut arena: Arena<u64> = Arena::with_capacity(N);
        let mut list: List<u64> = List::new();
        b.iter(|| {
            for i in 0..N as u64 {
                black_box(list.push_front(&mut arena, i));
            }
            while let Some(value) = list.pop_back(&mut arena) {
                black_box(value);
            }
        });
    });

    group.finish();
}

// ============================================================================
// Removal through held handles
// ============================================================================

fn bench_remove_by_handle(c: &mut Criterion) {
    let mut group = c.benchmark_group("remove_by_handle");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("strided", |b| {
        let mut arena: Arena<u64> = Arena::with_capacity(N);
        let mut list: List<u64> = List::new();
        b.iter(|| {
            let handles: Vec<_> = (0..N as u64)
                .map(|i| list.push_back(&mut arena, i))
                .collect();
            // Strided order exercises removal from arbitrary positions.
            for step in 0..7 {
                for i in (step..N).step_by(7) {
                    list.remove_node(&mut arena, handles[i]);
                    arena.free(handles[i]);
                }
            }
        });
    });

    group.finish();
}

// ============================================================================
// Whole-list splicing
// ============================================================================

fn bench_splice(c: &mut Criterion) {
    let mut group = c.benchmark_group("splice");
    group.throughput(Throughput::Elements(N as u64));

    group.bench_function("append", |b| {
        let mut arena: Arena<u64> = Arena::with_capacity(2 * N);
        b.iter(|| {
            let mut a = List::from_values(&mut arena, 0..N as u64 / 2);
            let mut b_list = List::from_values(&mut arena, 0..N as u64 / 2);
            a.append(&mut arena, &mut b_list);
            black_box(a.len());
            a.clear(&mut arena);
        });
    });

    group.finish();
}

// ============================================================================
// Inversion and traversal
// ============================================================================

fn bench_invert(c: &mut Criterion) {
    let mut group = c.benchmark_group("invert");
    group.throughput(Throughput::Elements(N as u64));

    let mut arena: Arena<u64> = Arena::with_capacity(N);
    let mut list = List::from_values(&mut arena, 0..N as u64);

    group.bench_function("invert", |b| {
        b.iter(|| {
            list.invert(&mut arena);
            black_box(&list);
        });
    });

    group.finish();
}

fn bench_iter(c: &mut Criterion) {
    let mut group = c.benchmark_group("iter");
    group.throughput(Throughput::Elements(N as u64));

    let mut arena: Arena<u64> = Arena::with_capacity(N);
    let list = List::from_values(&mut arena, 0..N as u64);

    group.bench_function("sum", |b| {
        b.iter(|| {
            let sum: u64 = list.iter(&arena).sum();
            black_box(sum);
        });
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_push_pop,
    bench_remove_by_handle,
    bench_splice,
    bench_invert,
    bench_iter
);
criterion_main!(benches);
