//! rust_genotyping — constrained EM genotype clustering with Python bindings.
//!
//! Purpose
//! -------
//! Serve as the crate root for Rust callers and as the PyO3 bridge that
//! exposes the genotype clustering engine to Python via the
//! `_rust_genotyping` extension module. When the `python-bindings` feature
//! is enabled, this module defines the Python-facing class and functions
//! used by the `rust_genotyping` package.
//!
//! Key behaviors
//! -------------
//! - Re-export the core Rust modules (`clustering` and `utils`) as the public
//!   crate surface.
//! - Define the `GenotypeEM` `#[pyclass]` wrapper around
//!   [`PrimeEM`](crate::clustering::PrimeEM), contrast/QC `#[pyfunction]`s,
//!   and the `#[pymodule]` initializer.
//! - Register the `clustering` submodule in `sys.modules` so dotted imports
//!   work as expected.
//!
//! Invariants & assumptions
//! ------------------------
//! - All numerical work happens in `clustering`; this file performs only FFI
//!   glue, input conversion and error mapping.
//! - `EMError` values surface in Python as `ValueError`.
//!
//! Conventions
//! -----------
//! - Genotype calls cross the boundary as integer codes: 0 = AA, 1 = AB,
//!   2 = BB, −1 = no call.
//! - Undefined FLD/separation scores are returned as `None` rather than the
//!   internal sentinel.
//!
//! Downstream usage
//! ----------------
//! - Native Rust code should depend on `clustering` directly and can ignore
//!   the items guarded by `python-bindings`.
//!
//! Testing notes
//! -------------
//! - Numerical behavior is covered by unit tests in the inner modules and by
//!   the reference-data integration tests under `tests/`.

pub mod clustering;
pub mod utils;

#[cfg(feature = "python-bindings")]
use numpy::{IntoPyArray, PyArray1};

#[cfg(feature = "python-bindings")]
use pyo3::{exceptions::PyValueError, prelude::*, types::PyAny};

#[cfg(feature = "python-bindings")]
use crate::{
    clustering::{
        core::{contrast::contrast_series, density::NA, estimate::EMEstimate},
        engine::{em::PrimeEM, peaks},
    },
    utils::{build_em_options, extract_f64_array, extract_f64_vec, extract_seed},
};

/// GenotypeEM — Python-facing wrapper for the constrained EM clusterer.
///
/// Purpose
/// -------
/// Expose [`PrimeEM`] to Python callers: configure once, fit contrast values
/// either through the empirical seed search or from an explicit seed, then
/// read calls, confidences and cluster parameters as properties.
///
/// Parameters
/// ----------
/// Constructed from Python via `GenotypeEM(n_clusters=3, ...)`:
/// - `n_clusters`: `usize`
///   Number of clusters (1–3); seed search requires 3.
/// - `max_iter`, `tolerance`, `tail_cut`, `confidence_threshold`,
///   `drop_threshold`, `use_weight`: optional overrides of the defaults.
/// - `loss`: `Option<&str>`
///   Model-selection loss: `"ml"`, `"aic"`, `"bic"` or `"bic_sep"`.
/// - `verbose`: `Option<bool>`
///   Log fit progress to the terminal (requires the `obs_slog` feature).
///
/// Fields
/// ------
/// - `inner`: [`PrimeEM`]
///   Engine holding the data, options and the last estimate.
///
/// Notes
/// -----
/// - Getters read the most recent estimate; before any fit they return the
///   empty initial estimate.
#[cfg(feature = "python-bindings")]
#[pyclass(module = "rust_genotyping.clustering")]
pub struct GenotypeEM {
    inner: PrimeEM,
}

#[cfg(feature = "python-bindings")]
impl GenotypeEM {
    fn est(&self) -> &EMEstimate {
        self.inner.estimate()
    }
}

#[cfg(feature = "python-bindings")]
#[pymethods]
impl GenotypeEM {
    #[new]
    #[pyo3(
        signature = (
            n_clusters = 3,
            max_iter = None,
            tolerance = None,
            tail_cut = None,
            confidence_threshold = None,
            drop_threshold = None,
            use_weight = None,
            loss = None,
            verbose = None,
        ),
        text_signature = "(n_clusters=3, /, max_iter=None, tolerance=None, tail_cut=None, \
                          confidence_threshold=None, drop_threshold=None, use_weight=None, \
                          loss=None, verbose=None)"
    )]
    pub fn new(
        n_clusters: usize, max_iter: Option<usize>, tolerance: Option<f64>, tail_cut: Option<f64>,
        confidence_threshold: Option<f64>, drop_threshold: Option<f64>, use_weight: Option<bool>,
        loss: Option<&str>, verbose: Option<bool>,
    ) -> PyResult<Self> {
        let opts = build_em_options(
            n_clusters,
            max_iter,
            tolerance,
            tail_cut,
            confidence_threshold,
            drop_threshold,
            use_weight,
            loss,
            verbose,
        )?;
        Ok(GenotypeEM { inner: PrimeEM::new(opts)? })
    }

    /// Fit `data` with the empirical seed search and keep the best model.
    #[pyo3(text_signature = "(self, data, /)")]
    pub fn fit<'py>(&mut self, py: Python<'py>, data: &Bound<'py, PyAny>) -> PyResult<()> {
        let values = extract_f64_vec(py, data, "data")?;
        self.inner.set_data(&values)?;
        self.inner.go_prime_em()?;
        Ok(())
    }

    /// Fit `data` from an explicit seed (one entry per cluster in each array).
    #[pyo3(
        signature = (data, mean, std, weight, min_mean, max_mean, min_std, max_std),
        text_signature = "(self, data, mean, std, weight, min_mean, max_mean, min_std, max_std, /)"
    )]
    #[allow(clippy::too_many_arguments)]
    pub fn fit_seed<'py>(
        &mut self, py: Python<'py>, data: &Bound<'py, PyAny>, mean: &Bound<'py, PyAny>,
        std: &Bound<'py, PyAny>, weight: &Bound<'py, PyAny>, min_mean: &Bound<'py, PyAny>,
        max_mean: &Bound<'py, PyAny>, min_std: &Bound<'py, PyAny>, max_std: &Bound<'py, PyAny>,
    ) -> PyResult<()> {
        let values = extract_f64_vec(py, data, "data")?;
        let seed = extract_seed(py, [mean, std, weight, min_mean, max_mean, min_std, max_std])?;
        self.inner.set_data(&values)?;
        self.inner.em_estimate(&seed)?;
        Ok(())
    }

    /// Fit paired allele intensities through the contrast transform.
    #[pyo3(signature = (a, b, k = 4.0), text_signature = "(self, a, b, /, k=4.0)")]
    pub fn fit_intensities<'py>(
        &mut self, py: Python<'py>, a: &Bound<'py, PyAny>, b: &Bound<'py, PyAny>, k: f64,
    ) -> PyResult<()> {
        let a = extract_f64_vec(py, a, "a")?;
        let b = extract_f64_vec(py, b, "b")?;
        let values = contrast_series(&a, &b, k)?;
        self.inner.set_data(&values)?;
        self.inner.go_prime_em()?;
        Ok(())
    }

    /// Genotype codes per sample (0 = AA, 1 = AB, 2 = BB, −1 = no call).
    #[getter]
    pub fn calls(&self) -> Vec<i8> {
        self.est().call_codes()
    }

    /// Confidence per sample (lower is better).
    #[getter]
    pub fn confidences<'py>(&self, py: Python<'py>) -> Bound<'py, PyArray1<f64>> {
        self.est().confidence.to_vec().into_pyarray(py)
    }

    #[getter]
    pub fn mean(&self) -> Vec<f64> {
        self.est().mean.to_vec()
    }

    #[getter]
    pub fn std(&self) -> Vec<f64> {
        self.est().std.to_vec()
    }

    #[getter]
    pub fn weight(&self) -> Vec<f64> {
        self.est().weight.to_vec()
    }

    #[getter]
    pub fn active(&self) -> Vec<bool> {
        self.est().active.clone()
    }

    #[getter]
    pub fn fld1(&self) -> Option<f64> {
        defined(self.est().fld1)
    }

    #[getter]
    pub fn fld2(&self) -> Option<f64> {
        defined(self.est().fld2)
    }

    #[getter]
    pub fn separation(&self) -> Option<f64> {
        defined(self.est().separation)
    }

    /// Summed, capped negative log-likelihood of the selected fit.
    #[getter]
    pub fn log_likelihood(&self) -> f64 {
        self.est().log_likelihood
    }

    #[getter]
    pub fn iterations(&self) -> usize {
        self.est().iterations
    }

    #[getter]
    pub fn converged(&self) -> bool {
        self.est().converged
    }

    /// Number of seeds tried by the last seed search.
    #[getter]
    pub fn n_seeds(&self) -> usize {
        self.inner.seeds().len()
    }
}

#[cfg(feature = "python-bindings")]
fn defined(value: f64) -> Option<f64> {
    if value == NA { None } else { Some(value) }
}

/// Contrast values `asinh(k·(a − b)/(a + b))/asinh(k)` of paired intensities.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(signature = (a, b, k = 4.0), text_signature = "(a, b, /, k=4.0)")]
fn contrast<'py>(
    py: Python<'py>, a: &Bound<'py, PyAny>, b: &Bound<'py, PyAny>, k: f64,
) -> PyResult<Bound<'py, PyArray1<f64>>> {
    let a = extract_f64_vec(py, a, "a")?;
    let b = extract_f64_vec(py, b, "b")?;
    Ok(contrast_series(&a, &b, k)?.into_pyarray(py))
}

/// Hom-hi-lo statistic of a contrast sequence as `(min, max)`.
#[cfg(feature = "python-bindings")]
#[pyfunction]
#[pyo3(
    signature = (contrast, threshold = 0.05, bin_size = 0.1),
    text_signature = "(contrast, /, threshold=0.05, bin_size=0.1)"
)]
fn hom_hi_lo<'py>(
    py: Python<'py>, contrast: &Bound<'py, PyAny>, threshold: f64, bin_size: f64,
) -> PyResult<(f64, f64)> {
    if !(threshold.is_finite()) {
        return Err(PyValueError::new_err("threshold must be finite"));
    }
    let arr = extract_f64_array(py, contrast)?;
    let values = arr
        .as_slice()
        .map_err(|_| PyValueError::new_err("contrast must be a 1-D contiguous float64 array"))?;
    let stat = peaks::hom_hi_lo(values, threshold, bin_size)?;
    Ok((stat.min_hom_hi_lo, stat.max_hom_hi_lo))
}

/// _rust_genotyping — PyO3 module initializer for the Python extension.
///
/// Creates the `clustering` submodule holding `GenotypeEM`, `contrast` and
/// `hom_hi_lo`, attaches it to the parent module and registers it in
/// `sys.modules` so `rust_genotyping.clustering` imports resolve.
///
/// Errors
/// ------
/// - `PyErr` if creating the submodule or touching `sys.modules` fails.
#[cfg(feature = "python-bindings")]
#[pymodule]
fn _rust_genotyping<'py>(py: Python<'py>, m: &Bound<'py, PyModule>) -> PyResult<()> {
    let clustering_mod = PyModule::new(py, "clustering")?;
    clustering_mod.add_class::<GenotypeEM>()?;
    clustering_mod.add_function(wrap_pyfunction!(contrast, &clustering_mod)?)?;
    clustering_mod.add_function(wrap_pyfunction!(hom_hi_lo, &clustering_mod)?)?;
    m.add_submodule(&clustering_mod)?;

    py.import("sys")?
        .getattr("modules")?
        .set_item("rust_genotyping.clustering", clustering_mod)?;
    Ok(())
}
