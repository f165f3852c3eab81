//! Validation helpers for EM inputs.
//!
//! Purpose
//! -------
//! Centralize the checks that run before any engine state is touched: the
//! sample sequence must be non-empty and finite, and a seed must have one
//! entry per configured cluster. [`validate_seed`] additionally clamps the
//! seed into its own bounds and produces the starting [`EMEstimate`].
//!
//! Conventions
//! -----------
//! - Bounds are applied with "max first" semantics ([`clamp_to_bounds`]): a
//!   value above `max` becomes `max`, otherwise a value below `min` becomes
//!   `min`. With inverted bounds this resolves to `max` for large values and
//!   `min` for small ones, and never panics (unlike `f64::clamp`).
use crate::clustering::{
    core::{estimate::EMEstimate, seed::EMSeed},
    errors::{EMError, EMResult},
};

/// Require a non-empty, all-finite sample sequence.
///
/// Errors
/// ------
/// - `EMError::EmptyData` for an empty slice.
/// - `EMError::NonFiniteData` for the first NaN/±inf value.
pub fn validate_data(data: &[f64]) -> EMResult<()> {
    if data.is_empty() {
        return Err(EMError::EmptyData);
    }
    if let Some((index, &value)) = data.iter().enumerate().find(|(_, v)| !v.is_finite()) {
        return Err(EMError::NonFiniteData { index, value });
    }
    Ok(())
}

/// Clamp `value` into `[min, max]`, checking the upper bound first.
#[inline]
pub fn clamp_to_bounds(value: f64, min: f64, max: f64) -> f64 {
    if value > max {
        max
    } else if value < min {
        min
    } else {
        value
    }
}

/// Validate a seed and build the starting estimate for a run.
///
/// Parameters
/// ----------
/// - `seed`: candidate starting point; not modified.
/// - `n_clusters`: configured cluster count `K`.
/// - `n_samples`: number of samples `N` (sizes the per-sample outputs).
///
/// Returns
/// -------
/// `EMResult<EMEstimate>`
///   An estimate whose active clusters (positive seed weight) have their
///   mean and σ clamped into the seed bounds. Inactive clusters keep their
///   seed values untouched.
///
/// Errors
/// ------
/// - `EMError::SeedLengthMismatch` when any seed array length differs from
///   `n_clusters`.
///
/// Notes
/// -----
/// - Idempotent: validating the same seed twice yields identical estimates.
pub fn validate_seed(seed: &EMSeed, n_clusters: usize, n_samples: usize) -> EMResult<EMEstimate> {
    seed.check_consistency(n_clusters)?;

    let mut est = EMEstimate::from_seed(seed, n_samples);
    for j in 0..n_clusters {
        if est.active[j] {
            est.mean[j] = clamp_to_bounds(est.mean[j], est.min_mean[j], est.max_mean[j]);
            est.std[j] = clamp_to_bounds(est.std[j], est.min_std[j], est.max_std[j]);
        }
    }
    Ok(est)
}
