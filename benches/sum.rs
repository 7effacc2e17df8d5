use criterion::black_box;
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::Criterion;
use rangesum::Executor;
use rangesum::SumMethod;
use std::num::NonZeroUsize;

pub fn bench(c: &mut Criterion) {
    let total = 100_000_000;

    let core_count = rangesum::default_workers().get();
    let mut group = c.benchmark_group("sum_iterative");

    for thread_count in [1, 2, 4, 8, 16, 24, 32, 40] {
        if core_count < thread_count {
            break;
        }
        let executor = Executor::new(NonZeroUsize::new(thread_count).unwrap())
            .method(SumMethod::Iterative);
        group.bench_function(&thread_count.to_string(), |b| {
            b.iter(|| executor.sum(black_box(total)).unwrap())
        });
    }
    group.finish();

    let executor = Executor::new(rangesum::default_workers());
    c.bench_function("sum_closed_form", |b| {
        b.iter(|| executor.sum(black_box(total)).unwrap())
    });
}

criterion_group!(benches, bench);
criterion_main!(benches);
