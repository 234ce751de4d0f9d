//! Benchmarks for Poisson disc sampling.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::SeedableRng;
use rand_pcg::Pcg64;

use stipple::sampling::{poisson_disc_with_seed, DiscSampler, DEFAULT_MAX_ATTEMPTS};
use stipple::Rect;

fn bench_poisson_disc(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_disc");

    // Vary region size with fixed density
    for size in [10, 50, 100, 200] {
        let bounds = Rect::from_size(size as f64, size as f64);

        group.bench_with_input(BenchmarkId::new("region_size", size), &bounds, |b, &bounds| {
            b.iter(|| {
                poisson_disc_with_seed(
                    black_box(1.0),
                    black_box(bounds),
                    black_box(DEFAULT_MAX_ATTEMPTS),
                    black_box(12345),
                )
            })
        });
    }

    group.finish();
}

fn bench_poisson_disc_density(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_disc_density");

    let bounds = Rect::from_size(100.0, 100.0);

    for margin in [0.5, 1.0, 2.0, 5.0] {
        group.bench_with_input(
            BenchmarkId::new("margin", format!("{:.1}", margin)),
            &margin,
            |b, &margin| {
                b.iter(|| {
                    poisson_disc_with_seed(
                        black_box(margin),
                        black_box(bounds),
                        black_box(DEFAULT_MAX_ATTEMPTS),
                        black_box(12345),
                    )
                })
            },
        );
    }

    group.finish();
}

fn bench_poisson_disc_attempts(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_disc_attempts");

    // More attempts per pass also accept more neighbours per pass
    let sampler: DiscSampler<f64> = match DiscSampler::new(1.0, 0.0, 50.0, 0.0, 50.0) {
        Ok(sampler) => sampler,
        Err(err) => panic!("bench sampler: {err}"),
    };

    for attempts in [5, 10, 30, 50] {
        group.bench_with_input(
            BenchmarkId::new("max_attempts", attempts),
            &attempts,
            |b, &attempts| {
                b.iter(|| {
                    let mut rng = Pcg64::seed_from_u64(7);
                    sampler.generate(black_box(attempts), &mut rng)
                })
            },
        );
    }

    group.finish();
}

fn bench_poisson_f32_vs_f64(c: &mut Criterion) {
    let mut group = c.benchmark_group("poisson_f32_vs_f64");

    group.bench_function("f64", |b| {
        b.iter(|| {
            poisson_disc_with_seed::<f64>(
                black_box(1.0),
                black_box(Rect::from_size(100.0, 100.0)),
                black_box(DEFAULT_MAX_ATTEMPTS),
                black_box(12345),
            )
        })
    });

    group.bench_function("f32", |b| {
        b.iter(|| {
            poisson_disc_with_seed::<f32>(
                black_box(1.0),
                black_box(Rect::from_size(100.0, 100.0)),
                black_box(DEFAULT_MAX_ATTEMPTS),
                black_box(12345),
            )
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_poisson_disc,
    bench_poisson_disc_density,
    bench_poisson_disc_attempts,
    bench_poisson_f32_vs_f64
);
criterion_main!(benches);
