use convalg::{
    algebra::{AddMonoidAlgebra, FreeMonoid, MonoidAlgebra},
    arithmetic_function::{moebius, zeta},
    ArithmeticFunction, OrdFiniteMap,
};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::{rngs::StdRng, Rng, SeedableRng};

type Poly = AddMonoidAlgebra<u64, i64>;
type Words = MonoidAlgebra<FreeMonoid<u8>, i64>;

fn random_poly(rng: &mut StdRng, degree: u64) -> Poly {
    let map: OrdFiniteMap<u64, i64> = (0..=degree)
        .map(|k| (k, rng.gen_range(-100..100)))
        .collect();
    Poly::from_map(map)
}

fn random_words(rng: &mut StdRng, terms: usize) -> Words {
    let map: OrdFiniteMap<FreeMonoid<u8>, i64> = (0..terms)
        .map(|_| {
            let len = rng.gen_range(0..6);
            let word: FreeMonoid<u8> = (0..len).map(|_| rng.gen_range(0..3)).collect();
            (word, rng.gen_range(-100..100))
        })
        .collect();
    Words::from_map(map)
}

fn bench_polynomials(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let mut group = c.benchmark_group("polynomial_product");

    for degree in [16u64, 64, 256] {
        let f = random_poly(&mut rng, degree);
        let g = random_poly(&mut rng, degree);
        group.bench_with_input(BenchmarkId::from_parameter(degree), &(f, g), |b, (f, g)| {
            b.iter(|| black_box(f * g));
        });
    }
    group.finish();

    let f = random_poly(&mut rng, 256);
    let g = random_poly(&mut rng, 256);
    c.bench_function("polynomial_mul_apply", |b| {
        b.iter(|| black_box(f.mul_apply(&g, black_box(&256))));
    });
    c.bench_function("polynomial_eval", |b| {
        b.iter(|| black_box(f.eval(black_box(&3i64))));
    });
}

fn bench_words(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    let f = random_words(&mut rng, 64);
    let g = random_words(&mut rng, 64);

    c.bench_function("free_monoid_product", |b| {
        b.iter(|| black_box(&f * &g));
    });
}

fn bench_dirichlet(c: &mut Criterion) {
    let mut group = c.benchmark_group("dirichlet_product");
    let mu = moebius();
    let zeta: ArithmeticFunction<i64> = zeta();

    for upto in [100u64, 1000] {
        group.bench_with_input(BenchmarkId::from_parameter(upto), &upto, |b, &upto| {
            b.iter(|| black_box((&mu * &zeta).tabulate(upto)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_polynomials, bench_words, bench_dirichlet);
criterion_main!(benches);
