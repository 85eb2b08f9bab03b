use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use metatuple::prelude::*;

type Eight = (
    Leaf<u64>,
    Group<u64>,
    Leaf<u64>,
    Group<u64>,
    Leaf<u64>,
    Group<u64>,
    Leaf<u64>,
    Group<u64>,
);

fn eight() -> Eight {
    (
        Leaf(0),
        Group(1),
        Leaf(2),
        Group(3),
        Leaf(4),
        Group(5),
        Leaf(6),
        Group(7),
    )
}

fn any_eight() -> Vec<AnyEntry<u64, u64>> {
    (0..8)
        .map(|i| {
            if i % 2 == 0 {
                AnyEntry::Leaf(i)
            } else {
                AnyEntry::Group(i)
            }
        })
        .collect()
}

fn bench_compose(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose");
    group.throughput(Throughput::Elements(8));

    group.bench_function(BenchmarkId::new("typed", 8), |b| {
        b.iter(|| compose(black_box(eight())))
    });
    group.bench_function(BenchmarkId::new("sequence", 8), |b| {
        b.iter_batched(
            any_eight,
            |entries| compose_all(black_box(entries)),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

fn bench_erasure(c: &mut Criterion) {
    let mut group = c.benchmark_group("erasure");
    group.throughput(Throughput::Elements(8));

    group.bench_function(BenchmarkId::new("into_sequence", 8), |b| {
        b.iter(|| -> Sequence<u64, u64> { compose(black_box(eight())).into_sequence() })
    });
    group.bench_function(BenchmarkId::new("try_into_metadata", 8), |b| {
        b.iter_batched(
            || compose_all(any_eight()),
            |sequence| sequence.try_into_metadata::<Eight>().unwrap(),
            criterion::BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_compose, bench_erasure);
criterion_main!(benches);
