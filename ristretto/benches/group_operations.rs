use criterion::{black_box, criterion_group, criterion_main, Criterion};
use ristretto::{double_scalar_mul_basepoint, random_scalar, Group, Point};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn bench_point_add(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let g = Point::generator();
    let h = Point::mul_generator(&random_scalar(&mut rng));
    c.bench_function("point_add", |bencher| {
        bencher.iter(|| black_box(black_box(g) + black_box(h)))
    });
}

fn bench_mul_generator(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let scalar = random_scalar(&mut rng);

    c.bench_function("mul_generator", |bencher| {
        bencher.iter(|| black_box(Point::mul_generator(black_box(&scalar))))
    });
}

fn bench_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = Point::mul_generator(&random_scalar(&mut rng));
    let scalar = random_scalar(&mut rng);

    c.bench_function("scalar_mul", |bencher| {
        bencher.iter(|| black_box(black_box(p).scalar_mul(black_box(&scalar))))
    });
}

fn bench_double_scalar_mul(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let p = Point::mul_generator(&random_scalar(&mut rng));
    let a = random_scalar(&mut rng);
    let b = random_scalar(&mut rng);

    c.bench_function("double_scalar_mul_basepoint", |bencher| {
        bencher.iter(|| {
            black_box(double_scalar_mul_basepoint(
                black_box(&a),
                black_box(&p),
                black_box(&b),
            ))
        })
    });
}

fn bench_decode(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(42);
    let bytes = Point::mul_generator(&random_scalar(&mut rng)).to_bytes();

    c.bench_function("point_decode", |bencher| {
        bencher.iter(|| black_box(Point::from_bytes(black_box(&bytes)).expect("decode")))
    });
}

criterion_group!(
    benches,
    bench_point_add,
    bench_mul_generator,
    bench_scalar_mul,
    bench_double_scalar_mul,
    bench_decode
);
criterion_main!(benches);
