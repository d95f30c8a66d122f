//! Circstat computes statistics over circular quantities such as compass
//! bearings and phase angles.
//!
//! Values are plain `f64`s tagged externally with one of four canonical
//! [`AngleRange`]s. The crate provides range conversion, shortest signed
//! distance, circular mean and circular correlation, with optional
//! parallelism via the `rayon` feature and spans/events via `tracing`.

pub mod correlation;
pub mod distance;
pub mod mean;
pub mod range;
mod trace;
pub mod util;

pub use correlation::{circular_correlation, circular_correlation_with, CorrelationConfig};
pub use distance::{
    angle_distance, angle_distance_degrees, angle_distance_radians, signed_distance,
};
pub use mean::{circular_mean, circular_mean_degrees, circular_mean_radians};
pub use range::{convert_all, convert_angle, AngleRange, AngleUnit};
pub use util::{CircStatError, CircStatResult};

#[cfg(feature = "rayon")]
pub use correlation::rayon::{
    circular_correlation_par, circular_mean_radians_par, convert_all_par,
};
