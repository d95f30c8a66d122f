//! Shortest signed distance between two points on a ring.

use crate::range::AngleRange;
use std::f64::consts::TAU;

/// Returns the shortest signed walk from `from` to `to` on a ring of length
/// `circumference`.
///
/// The result lies in `[-circumference / 2, circumference / 2)`: a walk of
/// exactly half a turn is reported as negative. Inputs are expected to lie in
/// a canonical range; the result is only correct modulo `circumference`
/// otherwise.
#[inline]
pub fn signed_distance(from: f64, to: f64, circumference: f64) -> f64 {
    let half = circumference / 2.0;
    let distance = to - from;
    if distance < -half {
        distance + circumference
    } else if distance >= half {
        distance - circumference
    } else {
        distance
    }
}

/// Signed distance in degrees, in `[-180, 180)`.
#[inline]
pub fn angle_distance_degrees(from_deg: f64, to_deg: f64) -> f64 {
    signed_distance(from_deg, to_deg, 360.0)
}

/// Signed distance in radians, in `[-π, π)`.
#[inline]
pub fn angle_distance_radians(from_rad: f64, to_rad: f64) -> f64 {
    signed_distance(from_rad, to_rad, TAU)
}

/// Signed distance between two values of `range`, in that range's unit.
#[inline]
pub fn angle_distance(from: f64, to: f64, range: AngleRange) -> f64 {
    signed_distance(from, to, range.circumference())
}
