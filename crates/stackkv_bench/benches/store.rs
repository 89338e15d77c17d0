//! Store benchmarks.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use stackkv_bench::{generate_keys, random_store};

/// Benchmark point operations on a populated store.
fn bench_point_ops(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_ops");

    for size in [100, 1_000, 10_000].iter() {
        group.bench_with_input(BenchmarkId::new("get", size), size, |b, &size| {
            let store = random_store(size, 16);
            let keys = generate_keys(size);
            let mut i = 0;

            b.iter(|| {
                let value = store.get(black_box(&keys[i % size])).unwrap();
                black_box(value);
                i += 1;
            });
        });

        group.bench_with_input(BenchmarkId::new("set", size), size, |b, &size| {
            let mut store = random_store(size, 16);
            let keys = generate_keys(size);
            let mut i = 0;

            b.iter(|| {
                store.set(black_box(keys[i % size].as_str()), "v");
                i += 1;
            });
        });
    }

    group.finish();
}

/// Benchmark the value scans behind COUNTS and FIND.
fn bench_queries(c: &mut Criterion) {
    let mut group = c.benchmark_group("queries");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));
        let store = random_store(*size, 16);

        group.bench_with_input(BenchmarkId::new("counts", size), &store, |b, store| {
            b.iter(|| black_box(store.counts(black_box("7"))));
        });

        group.bench_with_input(BenchmarkId::new("find", size), &store, |b, store| {
            b.iter(|| black_box(store.find(black_box("7")).len()));
        });
    }

    group.finish();
}

/// Benchmark BEGIN followed by ROLLBACK or COMMIT.
fn bench_transactions(c: &mut Criterion) {
    let mut group = c.benchmark_group("transactions");

    for size in [100, 1_000, 10_000].iter() {
        group.throughput(Throughput::Elements(*size as u64));

        group.bench_with_input(BenchmarkId::new("begin_rollback", size), size, |b, &size| {
            let mut store = random_store(size, 16);
            b.iter(|| {
                store.begin_transaction();
                store.set("scratch", "1");
                store.rollback_transaction().unwrap();
            });
        });

        group.bench_with_input(BenchmarkId::new("begin_commit", size), size, |b, &size| {
            let mut store = random_store(size, 16);
            b.iter(|| {
                store.begin_transaction();
                store.set("scratch", "1");
                store.commit_transaction().unwrap();
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_point_ops, bench_queries, bench_transactions);
criterion_main!(benches);
