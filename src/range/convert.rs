//! Conversion of angle values between canonical ranges.

use super::AngleRange;
use crate::util::math::{
    deg_to_rad, rad_to_deg, shift_deg_positive_to_signed, shift_deg_signed_to_positive,
    shift_rad_positive_to_signed, shift_rad_signed_to_positive,
};

/// Converts `value` from range `from` to range `to`.
///
/// Every conversion is at most one degree/radian scale plus one wrap shift.
/// The shifts wrap strictly past the positive boundary, so `180` stays `180`
/// under `Deg0To360 -> DegNeg180To180` and `π` stays `π` under
/// `Rad0To2Pi -> RadNegPiToPi`. Values outside `from` are not validated.
pub fn convert_angle(value: f64, from: AngleRange, to: AngleRange) -> f64 {
    use AngleRange::*;

    match (from, to) {
        (Deg0To360, Deg0To360)
        | (DegNeg180To180, DegNeg180To180)
        | (Rad0To2Pi, Rad0To2Pi)
        | (RadNegPiToPi, RadNegPiToPi) => value,

        (Deg0To360, DegNeg180To180) => shift_deg_positive_to_signed(value),
        (Deg0To360, Rad0To2Pi) => deg_to_rad(value),
        (Deg0To360, RadNegPiToPi) => shift_rad_positive_to_signed(deg_to_rad(value)),

        (DegNeg180To180, Deg0To360) => shift_deg_signed_to_positive(value),
        (DegNeg180To180, Rad0To2Pi) => deg_to_rad(shift_deg_signed_to_positive(value)),
        (DegNeg180To180, RadNegPiToPi) => deg_to_rad(value),

        (Rad0To2Pi, Deg0To360) => rad_to_deg(value),
        (Rad0To2Pi, DegNeg180To180) => shift_deg_positive_to_signed(rad_to_deg(value)),
        (Rad0To2Pi, RadNegPiToPi) => shift_rad_positive_to_signed(value),

        (RadNegPiToPi, Deg0To360) => rad_to_deg(shift_rad_signed_to_positive(value)),
        (RadNegPiToPi, DegNeg180To180) => rad_to_deg(value),
        (RadNegPiToPi, Rad0To2Pi) => shift_rad_signed_to_positive(value),
    }
}

/// Converts every value of `values` from `from` to `to`, preserving order.
pub fn convert_all(values: &[f64], from: AngleRange, to: AngleRange) -> Vec<f64> {
    if from == to {
        return values.to_vec();
    }
    values
        .iter()
        .map(|&value| convert_angle(value, from, to))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn identity_returns_input_unchanged() {
        for range in AngleRange::ALL {
            assert_eq!(convert_angle(1.25, range, range), 1.25);
        }
    }

    #[test]
    fn positive_boundary_maps_to_itself() {
        assert_eq!(
            convert_angle(180.0, AngleRange::Deg0To360, AngleRange::DegNeg180To180),
            180.0
        );
        assert_eq!(
            convert_angle(PI, AngleRange::Rad0To2Pi, AngleRange::RadNegPiToPi),
            PI
        );
    }

    #[test]
    fn convert_all_keeps_order() {
        let out = convert_all(
            &[10.0, 190.0, 350.0],
            AngleRange::Deg0To360,
            AngleRange::DegNeg180To180,
        );
        assert_eq!(out, vec![10.0, -170.0, -10.0]);
        assert!(convert_all(&[], AngleRange::Deg0To360, AngleRange::Rad0To2Pi).is_empty());
    }
}
