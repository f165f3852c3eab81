//! utils — boundary helpers shared by the Python bindings and the engine.
//!
//! - Python inputs (`python-bindings`): coerce arrays/Series/sequences into
//!   contiguous `f64` buffers and assemble [`EMOptions`] / [`EMSeed`] from
//!   keyword arguments, mapping [`EMError`] into `ValueError`.
//! - Logging (`obs_slog`): build the asynchronous terminal logger used when
//!   `EMOptions::verbose` is set.
#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::clustering::core::{
    options::{EMOptions, LossFunction},
    seed::EMSeed,
};

#[cfg(feature = "python-bindings")]
use numpy::{
    IntoPyArray,    // Vec → PyArray
    PyArrayMethods, // .readonly()
    PyReadonlyArray1,
};

#[cfg(feature = "python-bindings")]
#[inline]
pub fn extract_f64_array<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>,
) -> PyResult<PyReadonlyArray1<'py, f64>> {
    if let Ok(arr_ro) = raw_data.extract::<PyReadonlyArray1<f64>>() {
        if arr_ro.as_slice().is_ok() {
            return Ok(arr_ro);
        }
    }

    if let Ok(obj) = raw_data.call_method("to_numpy", (false,), None) {
        if let Ok(series_ro) = obj.extract::<PyReadonlyArray1<f64>>() {
            if series_ro.as_slice().is_ok() {
                return Ok(series_ro);
            }
        }
    }

    let vec: Vec<f64> = raw_data.extract().map_err(|_| {
        pyo3::exceptions::PyTypeError::new_err(
            "expected a 1-D numpy.ndarray, pandas.Series, or sequence of float64",
        )
    })?;
    Ok(vec.into_pyarray(py).readonly())
}

/// Copy a Python 1-D float input into an owned vector.
///
/// `name` only labels the error message.
#[cfg(feature = "python-bindings")]
pub fn extract_f64_vec<'py>(
    py: Python<'py>, raw_data: &Bound<'py, PyAny>, name: &str,
) -> PyResult<Vec<f64>> {
    let arr = extract_f64_array(py, raw_data)?;
    let slice = arr.as_slice().map_err(|_| {
        PyValueError::new_err(format!("{name} must be a 1-D contiguous float64 array or sequence"))
    })?;
    Ok(slice.to_vec())
}

/// Build validated [`EMOptions`] from optional keyword overrides.
///
/// Unset arguments keep the three-cluster defaults. `loss` accepts the short
/// names understood by [`LossFunction`]'s `FromStr`.
///
/// Errors
/// ------
/// - `ValueError` for an unknown loss name or any option out of range.
#[cfg(feature = "python-bindings")]
#[allow(clippy::too_many_arguments)]
pub fn build_em_options(
    n_clusters: usize, max_iter: Option<usize>, tolerance: Option<f64>, tail_cut: Option<f64>,
    confidence_threshold: Option<f64>, drop_threshold: Option<f64>, use_weight: Option<bool>,
    loss: Option<&str>, verbose: Option<bool>,
) -> PyResult<EMOptions> {
    use std::str::FromStr;

    let defaults = EMOptions::with_clusters(n_clusters);
    let loss_function = match loss {
        Some(name) => LossFunction::from_str(name)?,
        None => defaults.loss_function,
    };

    let opts = EMOptions {
        max_iter: max_iter.unwrap_or(defaults.max_iter),
        tolerance: tolerance.unwrap_or(defaults.tolerance),
        tail_cut: tail_cut.unwrap_or(defaults.tail_cut),
        confidence_threshold: confidence_threshold.unwrap_or(defaults.confidence_threshold),
        cluster_drop_threshold: drop_threshold.unwrap_or(defaults.cluster_drop_threshold),
        use_weight: use_weight.unwrap_or(defaults.use_weight),
        verbose: verbose.unwrap_or(defaults.verbose),
        loss_function,
        ..defaults
    };
    opts.validate()?;
    Ok(opts)
}

/// Assemble an [`EMSeed`] from its seven per-cluster arrays.
///
/// Order: mean, std, weight, min_mean, max_mean, min_std, max_std. Length
/// agreement is checked later by the engine against the cluster count.
#[cfg(feature = "python-bindings")]
pub fn extract_seed<'py>(py: Python<'py>, parts: [&Bound<'py, PyAny>; 7]) -> PyResult<EMSeed> {
    const NAMES: [&str; 7] = ["mean", "std", "weight", "min_mean", "max_mean", "min_std", "max_std"];

    let mut columns = Vec::with_capacity(7);
    for (raw, name) in parts.into_iter().zip(NAMES) {
        columns.push(extract_f64_vec(py, raw, name)?);
    }
    let mut it = columns.into_iter();
    let mut next = || it.next().unwrap_or_default();
    Ok(EMSeed::new(next(), next(), next(), next(), next(), next(), next()))
}

/// Non-blocking terminal logger: compact `slog-term` output drained through
/// `slog-async`, so engine logging never waits on the terminal.
#[cfg(feature = "obs_slog")]
pub fn terminal_logger() -> slog::Logger {
    use slog::{Drain, o};

    let decorator = slog_term::TermDecorator::new().build();
    let drain = slog_term::FullFormat::new(decorator).build().fuse();
    let drain = slog_async::Async::new(drain).build().fuse();
    slog::Logger::root(drain, o!("component" => "prime_em"))
}
