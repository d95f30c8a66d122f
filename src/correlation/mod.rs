//! Circular correlation between two angle sequences.
//!
//! Both sequences are mapped into `[0, 2π)`, centred on their circular means,
//! and linearised with `sin` of the signed residual. The coefficient is the
//! cosine of the angle between the two residual vectors, so it lies in
//! `[-1, 1]` for non-degenerate input.

use crate::distance::angle_distance_radians;
use crate::mean::mean_of_radians;
use crate::range::{convert_all, AngleRange};
use crate::trace::{trace_event, trace_span};
use crate::util::{CircStatError, CircStatResult};

/// Mean squared residual at or below which a sequence is treated as constant.
const MIN_RESIDUAL_ENERGY: f64 = 1e-20;

#[cfg(feature = "rayon")]
pub mod rayon;

/// Configuration for correlation runs.
#[derive(Clone, Debug, Default)]
pub struct CorrelationConfig {
    /// Use the rayon path when the `rayon` feature is enabled.
    pub parallel: bool,
}

/// Computes the circular correlation coefficient of `x` (in `x_range`) and
/// `y` (in `y_range`).
///
/// The two sequences are paired by index and may be expressed in different
/// ranges. Fails with [`CircStatError::LengthMismatch`] before any work when
/// the lengths differ, [`CircStatError::EmptyInput`] on empty input, and
/// [`CircStatError::DegenerateCorrelation`] when either sequence has zero
/// residual energy (e.g. a constant sequence).
pub fn circular_correlation(
    x: &[f64],
    x_range: AngleRange,
    y: &[f64],
    y_range: AngleRange,
) -> CircStatResult<f64> {
    circular_correlation_with(x, x_range, y, y_range, &CorrelationConfig::default())
}

/// [`circular_correlation`] with explicit configuration.
pub fn circular_correlation_with(
    x: &[f64],
    x_range: AngleRange,
    y: &[f64],
    y_range: AngleRange,
    cfg: &CorrelationConfig,
) -> CircStatResult<f64> {
    validate_pair(x, y)?;

    let _span = trace_span!(
        "circular_correlation",
        samples = x.len(),
        parallel = cfg.parallel
    )
    .entered();

    if cfg.parallel {
        return correlate_parallel(x, x_range, y, y_range);
    }

    let (x_mean, x_res) = residuals(x, x_range);
    let (y_mean, y_res) = residuals(y, y_range);
    trace_event!("correlation_means", x_mean = x_mean, y_mean = y_mean);

    let sums = x_res
        .iter()
        .zip(&y_res)
        .fold(ResidualSums::default(), |acc, (&a, &b)| {
            acc.merge(ResidualSums::of(a, b))
        });
    let r = sums.coefficient()?;
    trace_event!("correlation_coefficient", r = r);
    Ok(r)
}

pub(crate) fn validate_pair(x: &[f64], y: &[f64]) -> CircStatResult<()> {
    if x.len() != y.len() {
        return Err(CircStatError::LengthMismatch {
            x_len: x.len(),
            y_len: y.len(),
        });
    }
    if x.is_empty() {
        return Err(CircStatError::EmptyInput {
            context: "circular correlation",
        });
    }
    Ok(())
}

/// Maps `values` into `[0, 2π)` and returns the circular mean together with
/// the sine of each signed residual from it.
fn residuals(values: &[f64], range: AngleRange) -> (f64, Vec<f64>) {
    let radians = convert_all(values, range, AngleRange::Rad0To2Pi);
    let mean = mean_of_radians(radians.iter().copied(), radians.len());
    let res = radians
        .iter()
        .map(|&angle| angle_distance_radians(mean, angle).sin())
        .collect();
    (mean, res)
}

#[cfg(feature = "rayon")]
fn correlate_parallel(
    x: &[f64],
    x_range: AngleRange,
    y: &[f64],
    y_range: AngleRange,
) -> CircStatResult<f64> {
    self::rayon::circular_correlation_par(x, x_range, y, y_range)
}

#[cfg(not(feature = "rayon"))]
fn correlate_parallel(
    x: &[f64],
    x_range: AngleRange,
    y: &[f64],
    y_range: AngleRange,
) -> CircStatResult<f64> {
    circular_correlation_with(x, x_range, y, y_range, &CorrelationConfig { parallel: false })
}

/// Running sums of the residual cross product and the two squared norms.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct ResidualSums {
    count: usize,
    cross: f64,
    xx: f64,
    yy: f64,
}

impl ResidualSums {
    #[inline]
    pub(crate) fn of(a: f64, b: f64) -> Self {
        Self {
            count: 1,
            cross: a * b,
            xx: a * a,
            yy: b * b,
        }
    }

    #[inline]
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            count: self.count + other.count,
            cross: self.cross + other.cross,
            xx: self.xx + other.xx,
            yy: self.yy + other.yy,
        }
    }

    /// `cross / sqrt(xx * yy)`; the product is taken before the root.
    ///
    /// A constant sequence leaves rounding-level residuals rather than exact
    /// zeros, so the energy check is against a small floor per sample.
    pub(crate) fn coefficient(self) -> CircStatResult<f64> {
        let floor = MIN_RESIDUAL_ENERGY * self.count as f64;
        if self.count == 0 || self.xx <= floor || self.yy <= floor {
            return Err(CircStatError::DegenerateCorrelation);
        }
        let r = self.cross / (self.xx * self.yy).sqrt();
        if !r.is_finite() {
            return Err(CircStatError::DegenerateCorrelation);
        }
        Ok(r)
    }
}
