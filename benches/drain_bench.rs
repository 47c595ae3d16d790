//! Drain versus materializing the whole sequence

use bidi_iter::{drain, BiIterator};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_drain(c: &mut Criterion) {
    let mut group = c.benchmark_group("first_and_last");

    for len in [1_000usize, 100_000] {
        let values: Vec<u64> = (0..len as u64).collect();

        group.bench_with_input(BenchmarkId::new("drain", len), &values, |b, values| {
            b.iter(|| {
                let iter = BiIterator::new(values.as_slice()).expect("slice has a length");
                black_box(drain(iter, 1, 1).expect("counts are valid"))
            });
        });

        group.bench_with_input(BenchmarkId::new("collect", len), &values, |b, values| {
            b.iter(|| {
                let all: Vec<&u64> = values.iter().collect();
                black_box((all.first().copied(), all.last().copied(), all.len() - 2))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_drain);
criterion_main!(benches);
