//! Rayon-parallel conversion and correlation (feature-gated).
//!
//! Elementwise conversion and the residual map are embarrassingly parallel;
//! the sums are reduced in rayon's tree order, so results agree with the
//! sequential path up to floating-point reassociation.

use super::{validate_pair, ResidualSums};
use crate::distance::angle_distance_radians;
use crate::range::{convert_angle, AngleRange};
use crate::trace::{trace_event, trace_span};
use crate::util::{CircStatError, CircStatResult};
use rayon::prelude::*;

/// Parallel [`convert_all`](crate::range::convert_all).
pub fn convert_all_par(values: &[f64], from: AngleRange, to: AngleRange) -> Vec<f64> {
    values
        .par_iter()
        .map(|&value| convert_angle(value, from, to))
        .collect()
}

/// Parallel [`circular_mean_radians`](crate::circular_mean_radians).
pub fn circular_mean_radians_par(values: &[f64]) -> CircStatResult<f64> {
    if values.is_empty() {
        return Err(CircStatError::EmptyInput {
            context: "circular mean",
        });
    }
    Ok(mean_of_radians_par(values))
}

/// Parallel [`circular_correlation`](crate::circular_correlation).
pub fn circular_correlation_par(
    x: &[f64],
    x_range: AngleRange,
    y: &[f64],
    y_range: AngleRange,
) -> CircStatResult<f64> {
    validate_pair(x, y)?;

    let _span = trace_span!("circular_correlation_par", samples = x.len()).entered();

    let (x_mean, x_res) = residuals_par(x, x_range);
    let (y_mean, y_res) = residuals_par(y, y_range);
    trace_event!("correlation_means", x_mean = x_mean, y_mean = y_mean);

    let sums = x_res
        .par_iter()
        .zip(y_res.par_iter())
        .map(|(&a, &b)| ResidualSums::of(a, b))
        .reduce(ResidualSums::default, ResidualSums::merge);
    let r = sums.coefficient()?;
    trace_event!("correlation_coefficient", r = r);
    Ok(r)
}

fn mean_of_radians_par(radians: &[f64]) -> f64 {
    let (sum_sin, sum_cos) = radians
        .par_iter()
        .map(|angle| angle.sin_cos())
        .reduce(|| (0.0, 0.0), |(s1, c1), (s2, c2)| (s1 + s2, c1 + c2));
    let inv_n = 1.0 / radians.len() as f64;
    (inv_n * sum_sin).atan2(inv_n * sum_cos)
}

fn residuals_par(values: &[f64], range: AngleRange) -> (f64, Vec<f64>) {
    let radians = convert_all_par(values, range, AngleRange::Rad0To2Pi);
    let mean = mean_of_radians_par(&radians);
    let res = radians
        .par_iter()
        .map(|&angle| angle_distance_radians(mean, angle).sin())
        .collect();
    (mean, res)
}
