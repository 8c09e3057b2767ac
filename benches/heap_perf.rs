//! Criterion benchmarks for the indexed D-ary heap
//!
//! Two workloads:
//!
//! - `insert_poll`: heap-sort style; fill the heap, then drain it. Run at
//!   several degrees and against `std::collections::BinaryHeap` (wrapped in
//!   `Reverse` for min-order) as a no-index baseline.
//! - `decrease_drain`: the Dijkstra-shaped workload; fill, apply many
//!   random strict decreases by key, then drain. The std heap has no
//!   counterpart here; this is the operation the index pays for.
//!
//! ```bash
//! cargo bench --bench heap_perf
//! ```

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use indexed_dary_heap::IndexedDaryHeap;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::hint::black_box;

const DEGREES: [usize; 3] = [2, 4, 8];
const SIZES: [usize; 2] = [1_000, 100_000];

fn random_values(n: usize, seed: u64) -> Vec<u64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| rng.gen()).collect()
}

fn bench_insert_poll(c: &mut Criterion) {
    let mut group = c.benchmark_group("insert_poll");

    for n in SIZES {
        let values = random_values(n, 7);

        for degree in DEGREES {
            group.bench_with_input(
                BenchmarkId::new(format!("indexed_d{degree}"), n),
                &values,
                |b, values| {
                    b.iter(|| {
                        let mut heap = IndexedDaryHeap::new(degree, values.len());
                        for (ki, &value) in values.iter().enumerate() {
                            heap.insert(ki, value).unwrap();
                        }
                        while let Ok(value) = heap.poll_min_value() {
                            black_box(value);
                        }
                    });
                },
            );
        }

        group.bench_with_input(BenchmarkId::new("std_binary", n), &values, |b, values| {
            b.iter(|| {
                let mut heap = BinaryHeap::with_capacity(values.len());
                for &value in values {
                    heap.push(Reverse(value));
                }
                while let Some(Reverse(value)) = heap.pop() {
                    black_box(value);
                }
            });
        });
    }

    group.finish();
}

fn bench_decrease_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("decrease_drain");

    for n in SIZES {
        // Start every key high so random low targets are strict decreases
        let initial: Vec<u64> = random_values(n, 11)
            .into_iter()
            .map(|value| (value >> 1) + u64::MAX / 2)
            .collect();

        let mut rng = StdRng::seed_from_u64(13);
        let decreases: Vec<(usize, u64)> = (0..n * 4)
            .map(|_| (rng.gen_range(0..n), rng.gen_range(0..u64::MAX / 2)))
            .collect();

        for degree in DEGREES {
            group.bench_with_input(
                BenchmarkId::new(format!("indexed_d{degree}"), n),
                &(&initial, &decreases),
                |b, (initial, decreases)| {
                    b.iter(|| {
                        let mut heap = IndexedDaryHeap::new(degree, initial.len());
                        for (ki, &value) in initial.iter().enumerate() {
                            heap.insert(ki, value).unwrap();
                        }
                        for &(ki, value) in decreases.iter() {
                            black_box(heap.decrease(ki, value).unwrap());
                        }
                        while let Ok(ki) = heap.poll_min_key_index() {
                            black_box(ki);
                        }
                    });
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_insert_poll, bench_decrease_drain);
criterion_main!(benches);
