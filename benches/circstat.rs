use circstat::{
    circular_correlation, circular_correlation_with, circular_mean_degrees, convert_all,
    AngleRange, CorrelationConfig,
};
use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

fn make_headings(n: usize, offset: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (((i * 37 + offset * 11) ^ (i * 5)) % 3600) as f64 / 10.0)
        .collect()
}

fn bench_circstat(c: &mut Criterion) {
    let n = 100_000;
    let x = make_headings(n, 0);
    let y: Vec<f64> = x
        .iter()
        .zip(make_headings(n, 3))
        .map(|(a, b)| (a + b / 20.0).rem_euclid(360.0) - 180.0)
        .collect();

    c.bench_function("convert_all_deg_to_signed_rad", |b| {
        b.iter(|| {
            black_box(convert_all(
                black_box(&x),
                AngleRange::Deg0To360,
                AngleRange::RadNegPiToPi,
            ))
        });
    });

    c.bench_function("circular_mean_degrees", |b| {
        b.iter(|| black_box(circular_mean_degrees(black_box(&x)).unwrap()));
    });

    c.bench_function("circular_correlation", |b| {
        b.iter(|| {
            black_box(
                circular_correlation(
                    black_box(&x),
                    AngleRange::Deg0To360,
                    black_box(&y),
                    AngleRange::DegNeg180To180,
                )
                .unwrap(),
            )
        });
    });

    let par_cfg = CorrelationConfig { parallel: true };
    c.bench_function("circular_correlation_parallel_flag", |b| {
        b.iter(|| {
            black_box(
                circular_correlation_with(
                    black_box(&x),
                    AngleRange::Deg0To360,
                    black_box(&y),
                    AngleRange::DegNeg180To180,
                    &par_cfg,
                )
                .unwrap(),
            )
        });
    });
}

criterion_group!(benches, bench_circstat);
criterion_main!(benches);
