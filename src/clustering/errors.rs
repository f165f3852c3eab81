//! Errors for the constrained EM genotype clustering engine (data validation,
//! seed/prior consistency, configuration checks, and contrast inputs).
//!
//! This module defines the engine error type, [`EMError`], used across the
//! Python-facing API and the internal Rust core. It implements
//! `Display`/`Error` and converts to `PyErr` when the `python-bindings`
//! feature is enabled.
//!
//! ## Conventions
//! - **Indices are 0-based** (match Rust/NumPy).
//! - Consistency failures are reported *before* any engine state is touched,
//!   so a failed call leaves the previous estimate intact.
//! - Numeric degeneracy (zero variance, overflowing probability ratios) and
//!   non-convergence are **not** errors; they are clamped or tolerated by the
//!   engine itself.
#[cfg(feature = "python-bindings")]
use pyo3::{PyErr, exceptions::PyValueError};

/// Crate-wide result alias for EM operations that may produce [`EMError`].
pub type EMResult<T> = Result<T, EMError>;

/// Unified error type for EM genotype clustering.
///
/// Covers input/data validation, seed and prior consistency against the
/// configured cluster count, configuration checks, and contrast-transform
/// inputs. Implements `Display`/`Error` and converts to a Python `ValueError`
/// at PyO3 boundaries.
#[derive(Debug, Clone, PartialEq)]
pub enum EMError {
    // ---- Input/data validation ----
    /// Sample sequence is empty.
    EmptyData,

    /// A sample value is NaN/±inf.
    NonFiniteData { index: usize, value: f64 },

    // ---- Contrast inputs ----
    /// Allele intensity sequences must have equal length.
    IntensityLengthMismatch { a_len: usize, b_len: usize },

    /// Allele intensities must be finite and strictly positive.
    NonPositiveIntensity { index: usize, a: f64, b: f64 },

    // ---- Seed / prior consistency ----
    /// A seed array does not have one entry per configured cluster.
    SeedLengthMismatch { field: &'static str, expected: usize, actual: usize },

    /// A prior array does not have one entry per configured cluster.
    PriorLengthMismatch { field: &'static str, expected: usize, actual: usize },

    // ---- Options validation ----
    /// Cluster count must be 1, 2, or 3.
    InvalidClusterCount { n_clusters: usize, reason: &'static str },

    /// A numeric option is outside its admissible range.
    InvalidOption { name: &'static str, value: f64, reason: &'static str },

    /// Unknown loss-function name.
    InvalidLossFunction { name: String },

    // ---- Engine ----
    /// Operation is only defined for a specific cluster count.
    UnsupportedClusterCount { n_clusters: usize, operation: &'static str },

    /// Fitted cluster peaks are not strictly increasing (BB < AB < AA).
    UnorderedPeaks { peaks: [f64; 3] },
}

impl std::error::Error for EMError {}

impl std::fmt::Display for EMError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // ---- Input/data validation ----
            EMError::EmptyData => write!(f, "Sample sequence must not be empty."),
            EMError::NonFiniteData { index, value } => {
                write!(f, "Sample at index {index} must be finite, got {value}")
            }

            // ---- Contrast inputs ----
            EMError::IntensityLengthMismatch { a_len, b_len } => {
                write!(f, "Allele intensity length mismatch: A has {a_len}, B has {b_len}")
            }
            EMError::NonPositiveIntensity { index, a, b } => {
                write!(
                    f,
                    "Allele intensities at index {index} must be finite and > 0, got A = {a}, B = {b}"
                )
            }

            // ---- Seed / prior consistency ----
            EMError::SeedLengthMismatch { field, expected, actual } => {
                write!(f, "Seed '{field}' length mismatch: expected {expected}, got {actual}")
            }
            EMError::PriorLengthMismatch { field, expected, actual } => {
                write!(f, "Prior '{field}' length mismatch: expected {expected}, got {actual}")
            }

            // ---- Options validation ----
            EMError::InvalidClusterCount { n_clusters, reason } => {
                write!(f, "Invalid cluster count {n_clusters}: {reason}")
            }
            EMError::InvalidOption { name, value, reason } => {
                write!(f, "Invalid option '{name}' = {value}: {reason}")
            }
            EMError::InvalidLossFunction { name } => {
                write!(f, "Unknown loss function '{name}' (expected ml, aic, bic or bic_sep)")
            }

            // ---- Engine ----
            EMError::UnsupportedClusterCount { n_clusters, operation } => {
                write!(f, "{operation} is not supported for {n_clusters} cluster(s)")
            }
            EMError::UnorderedPeaks { peaks } => {
                write!(f, "Cluster peaks are not in order: {}, {}, {}", peaks[0], peaks[1], peaks[2])
            }
        }
    }
}

/// Convert an [`EMError`] into a Python `ValueError` with the error message.
///
/// This is used at the Rust↔Python boundary to surface domain errors cleanly.
#[cfg(feature = "python-bindings")]
impl std::convert::From<EMError> for PyErr {
    fn from(err: EMError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}
