//! Benchmarks for polyline simplification.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use stipple::{simplify, Point2};

/// Generates a noisy sine wave polyline.
fn generate_sine_wave(num_points: usize) -> Vec<Point2<f64>> {
    (0..num_points)
        .map(|i| {
            let t = i as f64 / num_points as f64 * 4.0 * std::f64::consts::PI;
            let noise = ((i * 17) % 100) as f64 / 1000.0; // Deterministic "noise"
            Point2::new(t, t.sin() + noise)
        })
        .collect()
}

/// Generates a random walk polyline, like a hand-drawn stroke.
fn generate_random_walk(num_points: usize, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = Pcg64::seed_from_u64(seed);
    let mut p = Point2::new(0.0, 0.0);
    let mut points = Vec::with_capacity(num_points);

    for _ in 0..num_points {
        points.push(p);
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        p = p.polar_offset(angle, 0.1);
    }

    points
}

fn bench_simplify(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdp");

    for size in [100, 1000, 10000, 50000] {
        let points = generate_sine_wave(size);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("sine_wave", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(0.01)))
        });
    }

    for size in [1000, 10000] {
        let points = generate_random_walk(size, 12345);
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("random_walk", size), &points, |b, pts| {
            b.iter(|| simplify(black_box(pts), black_box(0.01)))
        });
    }

    group.finish();
}

fn bench_tolerance(c: &mut Criterion) {
    let mut group = c.benchmark_group("rdp_tolerance");

    // Tolerance as a fraction of the ~12.6 unit span
    let points = generate_sine_wave(10000);
    for fraction in [1e-4, 1e-3, 1e-2] {
        let tolerance = 4.0 * std::f64::consts::PI * fraction;
        group.bench_with_input(
            BenchmarkId::new("fraction_of_width", fraction),
            &tolerance,
            |b, &tolerance| b.iter(|| simplify(black_box(&points), black_box(tolerance))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_simplify, bench_tolerance);
criterion_main!(benches);
