// Benchmark suite for OrderedList algorithms
//
// Covers the O(n log n) sort, the O(n) structural transforms, and the
// positional searches over a sorted IndexedList.

use criterion::{
    black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput,
};
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;

use linkage::{IndexedList, OrderedList};

const SIZES: [usize; 3] = [100, 1000, 10000];

// =============================================================================
// Benchmark Helpers
// =============================================================================

/// Random values drawn from a range a tenth the size of the input, so runs repeat.
fn random_values(size: usize, seed: u64) -> Vec<i64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let range = (size / 10).max(1) as i64;
    return (0..size).map(|_| rng.gen_range(0..range)).collect();
}

// =============================================================================
// Sorting & Merging
// =============================================================================

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in SIZES {
        let values = random_values(size, 1);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("merge_sort", size), &values, |b, values| {
            b.iter(|| {
                let mut list = OrderedList::from_values(values);
                list.sort();
                black_box(list.head())
            });
        });
    }

    group.finish();
}

fn bench_merge_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_sorted");

    for size in SIZES {
        let mut left = random_values(size, 2);
        let mut right = random_values(size, 3);
        left.sort();
        right.sort();
        group.throughput(Throughput::Elements(2 * size as u64));

        group.bench_with_input(
            BenchmarkId::new("merge_sorted", size),
            &(left, right),
            |b, (left, right)| {
                b.iter(|| {
                    let merged = OrderedList::merge_sorted(
                        OrderedList::from_values(left),
                        OrderedList::from_values(right),
                    );
                    black_box(merged.head())
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// Structural Transforms
// =============================================================================

fn bench_transforms(c: &mut Criterion) {
    let mut group = c.benchmark_group("transforms");

    for size in SIZES {
        let values = random_values(size, 4);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("reverse", size), &values, |b, values| {
            let mut list = OrderedList::from_values(values);
            b.iter(|| {
                list.reverse();
                black_box(list.head())
            });
        });

        group.bench_with_input(BenchmarkId::new("rotate_right", size), &values, |b, values| {
            let mut list = OrderedList::from_values(values);
            let mut rng = StdRng::seed_from_u64(5);
            b.iter(|| {
                list.rotate_right(rng.gen_range(1..size));
                black_box(list.head())
            });
        });

        group.bench_with_input(BenchmarkId::new("swap_pairs", size), &values, |b, values| {
            let mut list = OrderedList::from_values(values);
            b.iter(|| black_box(list.swap_adjacent_pairs()));
        });

        group.bench_with_input(BenchmarkId::new("remove_duplicates", size), &values, |b, values| {
            b.iter(|| {
                let mut list = OrderedList::from_values(values);
                black_box(list.remove_duplicates())
            });
        });

        group.bench_with_input(BenchmarkId::new("has_cycle", size), &values, |b, values| {
            let list = OrderedList::from_values(values);
            b.iter(|| black_box(list.has_cycle()));
        });
    }

    group.finish();
}

// =============================================================================
// Positional Search
// =============================================================================

fn bench_positional_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("positional_search");

    for size in SIZES {
        let values = random_values(size, 6);
        let mut indexed = IndexedList::from_list(OrderedList::from_values(&values));
        indexed.sort();
        let range = (size / 10).max(1) as i64;

        group.bench_with_input(BenchmarkId::new("first_occurrence", size), &indexed, |b, indexed| {
            let mut rng = StdRng::seed_from_u64(7);
            b.iter(|| black_box(indexed.first_occurrence(rng.gen_range(0..range))));
        });

        group.bench_with_input(BenchmarkId::new("all_occurrences", size), &indexed, |b, indexed| {
            let mut rng = StdRng::seed_from_u64(8);
            b.iter(|| black_box(indexed.all_occurrences(rng.gen_range(0..range))));
        });

        group.bench_with_input(BenchmarkId::new("contains", size), &indexed, |b, indexed| {
            let mut rng = StdRng::seed_from_u64(9);
            b.iter(|| black_box(indexed.list().contains(rng.gen_range(0..range))));
        });
    }

    group.finish();
}

// =============================================================================
// Criterion Configuration
// =============================================================================

criterion_group!(
    benches,
    bench_sort,
    bench_merge_sorted,
    bench_transforms,
    bench_positional_search,
);

criterion_main!(benches);
