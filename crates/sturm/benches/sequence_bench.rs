//! Criterion benchmarks for Sturm chain construction and root isolation.
//! Focus root counts: n in {2, 4, 8, 12}.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use sturm::rand::{draw_poly_from_roots, RootsCfg};
use sturm::{Bisection, Poly, Sequence};

fn poly_with_roots(n: usize, seed: u64) -> Poly {
    let cfg = RootsCfg {
        n_roots: n,
        ..RootsCfg::default()
    };
    draw_poly_from_roots(&cfg, seed).0
}

fn bench_sequence(c: &mut Criterion) {
    let mut group = c.benchmark_group("sequence");
    for &n in &[2usize, 4, 8, 12] {
        group.bench_with_input(BenchmarkId::new("build", n), &n, |b, &n| {
            let p = poly_with_roots(n, 43);
            b.iter(|| Sequence::build(&p).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("separate_roots", n), &n, |b, &n| {
            let p = poly_with_roots(n, 43);
            b.iter_batched(
                || Sequence::build(&p).unwrap(),
                |mut seq| seq.separate_roots_cauchy(),
                BatchSize::SmallInput,
            )
        });

        group.bench_with_input(BenchmarkId::new("refine_roots", n), &n, |b, &n| {
            let p = poly_with_roots(n, 43);
            let mut base = Sequence::build(&p).unwrap();
            base.separate_roots_cauchy();
            b.iter_batched(
                || base.clone(),
                |mut seq| {
                    let mut solver = Bisection::default();
                    seq.refine_roots(&mut solver).len()
                },
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_sequence);
criterion_main!(benches);
