//! Criterion benchmarks comparing the multiplication strategies.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use matbench::harness::Dims;
use matbench::matrix::init::{random_fill, seeded_rng};
use matbench::strategy::Kind;

fn bench_strategies(crit: &mut Criterion) {
    let mut group = crit.benchmark_group("multiply");

    for &size in &[64usize, 128, 256] {
        let dims = Dims::new(size, size, size).unwrap();
        let mut rng = seeded_rng();
        let mut a = vec![0.0f64; dims.a_len()];
        let mut b = vec![0.0f64; dims.b_len()];
        random_fill(&mut a, &mut rng);
        random_fill(&mut b, &mut rng);

        group.throughput(Throughput::Elements(dims.flops() as u64));
        for kind in Kind::ALL {
            group.bench_with_input(BenchmarkId::new(kind.label(), size), &size, |bench, _| {
                bench.iter(|| {
                    let mut c = vec![0.0f64; dims.c_len()];
                    kind.run(black_box(&a), black_box(&b), &mut c, size, size, size)
                        .unwrap();
                    black_box(&c);
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_strategies);
criterion_main!(benches);
