//! Python bindings for the circstat circular statistics library.
//!
//! Angle sequences are taken as 1D float64 numpy arrays. Ranges may be given
//! either as a tag string (`"deg0_360"`, `"deg_neg180_180"`, `"rad0_2pi"`,
//! `"rad_negpi_pi"`) or as a `(lower, upper)` bounds tuple.

use numpy::{IntoPyArray, PyArray1, PyReadonlyArray1};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use circstat::{AngleRange, CircStatError, CorrelationConfig};

/// Convert a CircStatError to a Python exception.
fn to_py_err(err: CircStatError) -> PyErr {
    PyValueError::new_err(err.to_string())
}

fn parse_range(obj: &Bound<'_, PyAny>) -> PyResult<AngleRange> {
    if let Ok(tag) = obj.extract::<String>() {
        return tag.parse::<AngleRange>().map_err(to_py_err);
    }
    let (lower, upper): (f64, f64) = obj.extract().map_err(|_| {
        PyValueError::new_err("range must be a tag string or a (lower, upper) tuple")
    })?;
    AngleRange::from_bounds(lower, upper).map_err(to_py_err)
}

fn to_vec(values: &PyReadonlyArray1<'_, f64>) -> Vec<f64> {
    values.as_array().to_vec()
}

/// Signed shortest distance from `a` to `b` in degrees, in [-180, 180).
#[pyfunction]
fn angle_distance_degrees(a: f64, b: f64) -> f64 {
    circstat::angle_distance_degrees(a, b)
}

/// Signed shortest distance from `a` to `b` in radians, in [-pi, pi).
#[pyfunction]
fn angle_distance_radians(a: f64, b: f64) -> f64 {
    circstat::angle_distance_radians(a, b)
}

/// Convert a single angle between canonical ranges.
#[pyfunction]
fn convert_angle(
    value: f64,
    from_range: &Bound<'_, PyAny>,
    to_range: &Bound<'_, PyAny>,
) -> PyResult<f64> {
    let from = parse_range(from_range)?;
    let to = parse_range(to_range)?;
    Ok(circstat::convert_angle(value, from, to))
}

/// Convert an array of angles between canonical ranges.
#[pyfunction]
fn convert_angles<'py>(
    py: Python<'py>,
    values: PyReadonlyArray1<'py, f64>,
    from_range: &Bound<'py, PyAny>,
    to_range: &Bound<'py, PyAny>,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let from = parse_range(from_range)?;
    let to = parse_range(to_range)?;
    let out = circstat::convert_all(&to_vec(&values), from, to);
    Ok(out.into_pyarray(py))
}

/// Circular mean of angles in radians.
#[pyfunction]
fn circular_mean_radians(values: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    circstat::circular_mean_radians(&to_vec(&values)).map_err(to_py_err)
}

/// Circular mean of angles in degrees.
#[pyfunction]
fn circular_mean_degrees(values: PyReadonlyArray1<'_, f64>) -> PyResult<f64> {
    circstat::circular_mean_degrees(&to_vec(&values)).map_err(to_py_err)
}

/// Circular correlation coefficient between two paired angle arrays.
///
/// Args:
///     x: first angle array
///     x_range: range of `x`
///     y: second angle array, same length as `x`
///     y_range: range of `y`
///     parallel: use the parallel implementation (default: False)
#[pyfunction]
#[pyo3(signature = (x, x_range, y, y_range, parallel = false))]
fn circular_correlation(
    x: PyReadonlyArray1<'_, f64>,
    x_range: &Bound<'_, PyAny>,
    y: PyReadonlyArray1<'_, f64>,
    y_range: &Bound<'_, PyAny>,
    parallel: bool,
) -> PyResult<f64> {
    let rx = parse_range(x_range)?;
    let ry = parse_range(y_range)?;
    circstat::circular_correlation_with(
        &to_vec(&x),
        rx,
        &to_vec(&y),
        ry,
        &CorrelationConfig { parallel },
    )
    .map_err(to_py_err)
}

/// Python module for circstat.
#[pymodule]
fn _circstat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(angle_distance_degrees, m)?)?;
    m.add_function(wrap_pyfunction!(angle_distance_radians, m)?)?;
    m.add_function(wrap_pyfunction!(convert_angle, m)?)?;
    m.add_function(wrap_pyfunction!(convert_angles, m)?)?;
    m.add_function(wrap_pyfunction!(circular_mean_radians, m)?)?;
    m.add_function(wrap_pyfunction!(circular_mean_degrees, m)?)?;
    m.add_function(wrap_pyfunction!(circular_correlation, m)?)?;

    m.add("__version__", env!("CARGO_PKG_VERSION"))?;

    Ok(())
}
