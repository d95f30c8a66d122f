//! Primitive shifts and unit scales shared by the angle converters.

use std::f64::consts::{PI, TAU};

/// Maps `[0, 360)` onto `[-180, 180)`; values strictly above 180 wrap.
#[inline]
pub(crate) fn shift_deg_positive_to_signed(angle_deg: f64) -> f64 {
    if angle_deg > 180.0 {
        angle_deg - 360.0
    } else {
        angle_deg
    }
}

/// Maps `[-180, 180)` onto `[0, 360)`.
#[inline]
pub(crate) fn shift_deg_signed_to_positive(angle_deg: f64) -> f64 {
    if angle_deg < 0.0 {
        angle_deg + 360.0
    } else {
        angle_deg
    }
}

/// Maps `[0, 2π)` onto `[-π, π)`; values strictly above π wrap.
#[inline]
pub(crate) fn shift_rad_positive_to_signed(angle_rad: f64) -> f64 {
    if angle_rad > PI {
        angle_rad - TAU
    } else {
        angle_rad
    }
}

/// Maps `[-π, π)` onto `[0, 2π)`.
#[inline]
pub(crate) fn shift_rad_signed_to_positive(angle_rad: f64) -> f64 {
    if angle_rad < 0.0 {
        angle_rad + TAU
    } else {
        angle_rad
    }
}

/// Converts degrees to radians.
#[inline]
pub(crate) fn deg_to_rad(angle_deg: f64) -> f64 {
    angle_deg.to_radians()
}

/// Converts radians to degrees.
#[inline]
pub(crate) fn rad_to_deg(angle_rad: f64) -> f64 {
    angle_rad.to_degrees()
}
