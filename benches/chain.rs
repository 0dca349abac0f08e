use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use deferred_outcome::{DeferredResult, Outcome};
use std::hint::black_box;

fn build_chain(depth: usize) -> DeferredResult<u64, String> {
    let mut chain = DeferredResult::<u64, String>::from_value(0);
    for _ in 0..depth {
        chain = chain
            .map(|n| n + 1)
            .and_then(DeferredResult::<u64, String>::from_value);
    }
    chain
}

fn bench_start(c: &mut Criterion) {
    let mut group = c.benchmark_group("start");
    for depth in [1usize, 16, 128] {
        let chain = build_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &chain, |b, chain| {
            b.iter(|| {
                chain.start(|outcome: Outcome<u64, String>| {
                    black_box(outcome);
                })
            })
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    c.bench_function("build depth 128", |b| b.iter(|| black_box(build_chain(128))));
}

criterion_group!(benches, bench_start, bench_build);
criterion_main!(benches);
