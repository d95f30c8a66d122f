//! Canonical angular ranges and conversion between them.
//!
//! An angle value is a bare `f64`; the range it lives in is carried alongside
//! it by the caller as an [`AngleRange`]. Converting between ranges is a pure
//! function of the value and the ordered pair of ranges.

mod convert;

pub use convert::{convert_all, convert_angle};

use crate::util::{CircStatError, CircStatResult};
use std::f64::consts::{PI, TAU};
use std::fmt;
use std::str::FromStr;

const BOUND_TOLERANCE: f64 = 1e-9;

/// Unit an angle range is expressed in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleUnit {
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Length of a full turn in this unit.
    pub fn circumference(self) -> f64 {
        match self {
            AngleUnit::Degrees => 360.0,
            AngleUnit::Radians => TAU,
        }
    }
}

/// One of the four canonical angular ranges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AngleRange {
    /// Degrees in `[0, 360)`.
    Deg0To360,
    /// Degrees in `[-180, 180)`.
    DegNeg180To180,
    /// Radians in `[0, 2π)`.
    Rad0To2Pi,
    /// Radians in `[-π, π)`.
    RadNegPiToPi,
}

impl AngleRange {
    /// All canonical ranges, in declaration order.
    pub const ALL: [AngleRange; 4] = [
        AngleRange::Deg0To360,
        AngleRange::DegNeg180To180,
        AngleRange::Rad0To2Pi,
        AngleRange::RadNegPiToPi,
    ];

    /// Returns the unit values in this range are expressed in.
    pub fn unit(self) -> AngleUnit {
        match self {
            AngleRange::Deg0To360 | AngleRange::DegNeg180To180 => AngleUnit::Degrees,
            AngleRange::Rad0To2Pi | AngleRange::RadNegPiToPi => AngleUnit::Radians,
        }
    }

    /// Returns the length of a full turn (360 or 2π).
    pub fn circumference(self) -> f64 {
        self.unit().circumference()
    }

    /// Returns the `(lower, upper)` bounds of the range.
    pub fn bounds(self) -> (f64, f64) {
        match self {
            AngleRange::Deg0To360 => (0.0, 360.0),
            AngleRange::DegNeg180To180 => (-180.0, 180.0),
            AngleRange::Rad0To2Pi => (0.0, TAU),
            AngleRange::RadNegPiToPi => (-PI, PI),
        }
    }

    /// Returns true if `value` lies in `[lower, upper)`.
    pub fn contains(self, value: f64) -> bool {
        let (lower, upper) = self.bounds();
        value >= lower && value < upper
    }

    /// Returns true if the range is the signed (zero-centred) one of its unit.
    pub fn is_signed(self) -> bool {
        matches!(self, AngleRange::DegNeg180To180 | AngleRange::RadNegPiToPi)
    }

    /// Looks up a range by its numeric bounds, e.g. `(-180.0, 180.0)`.
    pub fn from_bounds(lower: f64, upper: f64) -> CircStatResult<Self> {
        AngleRange::ALL
            .into_iter()
            .find(|range| {
                let (lo, hi) = range.bounds();
                (lo - lower).abs() <= BOUND_TOLERANCE && (hi - upper).abs() <= BOUND_TOLERANCE
            })
            .ok_or_else(|| CircStatError::InvalidRangeTag {
                tag: format!("({lower}, {upper})"),
            })
    }

    /// Returns the short textual tag used by [`FromStr`] and [`fmt::Display`].
    pub fn tag(self) -> &'static str {
        match self {
            AngleRange::Deg0To360 => "deg0_360",
            AngleRange::DegNeg180To180 => "deg_neg180_180",
            AngleRange::Rad0To2Pi => "rad0_2pi",
            AngleRange::RadNegPiToPi => "rad_negpi_pi",
        }
    }
}

impl fmt::Display for AngleRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for AngleRange {
    type Err = CircStatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        AngleRange::ALL
            .into_iter()
            .find(|range| range.tag() == needle)
            .ok_or_else(|| CircStatError::InvalidRangeTag { tag: s.to_string() })
    }
}

impl TryFrom<(f64, f64)> for AngleRange {
    type Error = CircStatError;

    fn try_from((lower, upper): (f64, f64)) -> Result<Self, Self::Error> {
        AngleRange::from_bounds(lower, upper)
    }
}
