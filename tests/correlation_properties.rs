use circstat::{circular_correlation, convert_all, AngleRange, CircStatError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Headings clustered around `center_deg` with a noisy copy, both in `[0, 360)`.
fn noisy_headings(
    seed: u64,
    n: usize,
    center_deg: f64,
    spread: f64,
    noise: f64,
) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut truth = Vec::with_capacity(n);
    let mut measured = Vec::with_capacity(n);
    for _ in 0..n {
        let t = (center_deg + rng.random_range(-spread..spread)).rem_euclid(360.0);
        let jitter = if noise > 0.0 {
            rng.random_range(-noise..noise)
        } else {
            0.0
        };
        let m = (t + jitter).rem_euclid(360.0);
        truth.push(t);
        measured.push(m);
    }
    (truth, measured)
}

#[test]
fn self_correlation_is_one() {
    let (x, _) = noisy_headings(1, 200, 30.0, 70.0, 0.0);
    let r = circular_correlation(&x, AngleRange::Deg0To360, &x, AngleRange::Deg0To360).unwrap();
    assert!((r - 1.0).abs() < 1e-12, "got {r}");
}

#[test]
fn noisy_copy_across_the_wrap_is_strongly_correlated() {
    // centred on north so the samples straddle 0/360
    let (truth, measured) = noisy_headings(7, 400, 0.0, 60.0, 10.0);
    let calc = convert_all(&truth, AngleRange::Deg0To360, AngleRange::DegNeg180To180);
    let r = circular_correlation(
        &calc,
        AngleRange::DegNeg180To180,
        &measured,
        AngleRange::Deg0To360,
    )
    .unwrap();
    assert!(r > 0.8 && r <= 1.0 + 1e-12, "got {r}");
}

#[test]
fn mirrored_sequence_is_negatively_correlated() {
    let (x, _) = noisy_headings(3, 300, 90.0, 50.0, 0.0);
    let y: Vec<f64> = x.iter().map(|v| (360.0 - v).rem_euclid(360.0)).collect();
    let r = circular_correlation(&x, AngleRange::Deg0To360, &y, AngleRange::Deg0To360).unwrap();
    assert!(r < -0.99, "got {r}");
}

#[test]
fn coefficient_is_bounded_for_random_pairs() {
    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..50 {
        let x: Vec<f64> = (0..64).map(|_| rng.random_range(0.0..360.0)).collect();
        let y: Vec<f64> = (0..64).map(|_| rng.random_range(-180.0..180.0)).collect();
        let r = circular_correlation(&x, AngleRange::Deg0To360, &y, AngleRange::DegNeg180To180)
            .unwrap();
        assert!((-1.0 - 1e-12..=1.0 + 1e-12).contains(&r), "got {r}");
    }
}

#[test]
fn swapping_arguments_gives_identical_result() {
    let (x, y) = noisy_headings(11, 128, 200.0, 90.0, 25.0);
    let x_rad = convert_all(&x, AngleRange::Deg0To360, AngleRange::RadNegPiToPi);
    let a = circular_correlation(&x_rad, AngleRange::RadNegPiToPi, &y, AngleRange::Deg0To360)
        .unwrap();
    let b = circular_correlation(&y, AngleRange::Deg0To360, &x_rad, AngleRange::RadNegPiToPi)
        .unwrap();
    assert_eq!(a, b);
}

#[test]
fn range_tag_does_not_change_the_answer() {
    let (x, y) = noisy_headings(5, 100, 300.0, 80.0, 30.0);
    let reference =
        circular_correlation(&x, AngleRange::Deg0To360, &y, AngleRange::Deg0To360).unwrap();
    for range in AngleRange::ALL {
        let x_conv = convert_all(&x, AngleRange::Deg0To360, range);
        let r = circular_correlation(&x_conv, range, &y, AngleRange::Deg0To360).unwrap();
        assert!((r - reference).abs() < 1e-9, "{range}: {r} vs {reference}");
    }
}

#[test]
fn mismatched_lengths_are_rejected() {
    let err = circular_correlation(
        &[1.0, 2.0, 3.0],
        AngleRange::Rad0To2Pi,
        &[1.0, 2.0],
        AngleRange::Rad0To2Pi,
    )
    .unwrap_err();
    assert_eq!(err, CircStatError::LengthMismatch { x_len: 3, y_len: 2 });
}
