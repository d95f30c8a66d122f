//! Circular mean: direction of the resultant of unit vectors.

use crate::range::{convert_angle, AngleRange};
use crate::util::math::{deg_to_rad, rad_to_deg};
use crate::util::{CircStatError, CircStatResult};

/// Returns the circular mean of angles given in radians.
///
/// Works for values in either `[0, 2π)` or `[-π, π)`; the result is in
/// `[-π, π]` as produced by `atan2`. When the unit vectors cancel exactly
/// (for example two antipodal angles) the resultant is the zero vector and
/// the result is `atan2(0, 0) = 0`, which carries no directional meaning.
pub fn circular_mean_radians(values: &[f64]) -> CircStatResult<f64> {
    if values.is_empty() {
        return Err(CircStatError::EmptyInput {
            context: "circular mean",
        });
    }
    Ok(mean_of_radians(values.iter().copied(), values.len()))
}

/// Returns the circular mean of angles given in degrees, in degrees.
pub fn circular_mean_degrees(values: &[f64]) -> CircStatResult<f64> {
    if values.is_empty() {
        return Err(CircStatError::EmptyInput {
            context: "circular mean",
        });
    }
    let mean_rad = mean_of_radians(values.iter().map(|&v| deg_to_rad(v)), values.len());
    Ok(rad_to_deg(mean_rad))
}

/// Returns the circular mean of `values` expressed in `range`.
pub fn circular_mean(values: &[f64], range: AngleRange) -> CircStatResult<f64> {
    if values.is_empty() {
        return Err(CircStatError::EmptyInput {
            context: "circular mean",
        });
    }
    let radians = values
        .iter()
        .map(|&v| convert_angle(v, range, AngleRange::RadNegPiToPi));
    let mean_rad = mean_of_radians(radians, values.len());
    Ok(convert_angle(mean_rad, AngleRange::RadNegPiToPi, range))
}

/// `atan2` of the averaged sine and cosine components. `n` must be non-zero.
pub(crate) fn mean_of_radians(values: impl Iterator<Item = f64>, n: usize) -> f64 {
    let (sum_sin, sum_cos) = values.fold((0.0f64, 0.0f64), |(s, c), angle| {
        let (sin, cos) = angle.sin_cos();
        (s + sin, c + cos)
    });
    let inv_n = 1.0 / n as f64;
    (inv_n * sum_sin).atan2(inv_n * sum_cos)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn empty_input_is_rejected() {
        assert_eq!(
            circular_mean_radians(&[]),
            Err(CircStatError::EmptyInput {
                context: "circular mean"
            })
        );
        assert!(circular_mean_degrees(&[]).is_err());
        assert!(circular_mean(&[], AngleRange::Deg0To360).is_err());
    }

    #[test]
    fn antipodal_pair_falls_back_to_atan2_origin() {
        assert_eq!(0.0f64.atan2(0.0), 0.0);
        // rounding residue in sin(π) leaves a tiny resultant, so only finiteness holds
        let mean = circular_mean_radians(&[0.0, PI]).unwrap();
        assert!(mean.is_finite());
    }

    #[test]
    fn mean_in_range_uses_that_range() {
        let mean = circular_mean(&[350.0, 20.0], AngleRange::Deg0To360).unwrap();
        assert!((mean - 5.0).abs() < 1e-9);

        let mean = circular_mean(&[170.0, -160.0], AngleRange::DegNeg180To180).unwrap();
        assert!((mean + 175.0).abs() < 1e-9);

        let mean = circular_mean(&[1.9 * PI, 0.3 * PI], AngleRange::Rad0To2Pi).unwrap();
        assert!((mean - 0.1 * PI).abs() < 1e-9);
    }
}
