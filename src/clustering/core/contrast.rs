//! Contrast transform — the one-dimensional signal the EM engine clusters.
//!
//! Two allele intensities `a` and `b` are folded into
//! `asinh(k·(a − b)/(a + b)) / asinh(k)`, which lies in `(−1, 1)`: strongly
//! B-dominant samples sit near −1, balanced (heterozygous) samples near 0
//! and A-dominant samples near +1. The scale `k` controls how much the
//! transform stretches the centre of the axis; genotyping uses `k = 4`.
use crate::clustering::errors::{EMError, EMResult};

/// Contrast of a single intensity pair.
///
/// Both intensities must be finite and strictly positive (not checked here;
/// see [`contrast_series`] for the validated form). `k` must be nonzero.
#[inline]
pub fn contrast_transform(a: f64, b: f64, k: f64) -> f64 {
    let r = k * (a - b) / (a + b);
    r.asinh() / k.asinh()
}

/// Contrast of paired allele-intensity sequences.
///
/// Errors
/// ------
/// - `EMError::InvalidOption` when `k` is zero or not finite.
/// - `EMError::IntensityLengthMismatch` when the sequences differ in length.
/// - `EMError::NonPositiveIntensity` at the first pair with a non-finite or
///   non-positive intensity.
pub fn contrast_series(a: &[f64], b: &[f64], k: f64) -> EMResult<Vec<f64>> {
    if !k.is_finite() || k == 0.0 {
        return Err(EMError::InvalidOption {
            name: "contrast_scale",
            value: k,
            reason: "must be finite and nonzero",
        });
    }
    if a.len() != b.len() {
        return Err(EMError::IntensityLengthMismatch { a_len: a.len(), b_len: b.len() });
    }

    a.iter()
        .zip(b)
        .enumerate()
        .map(|(index, (&ai, &bi))| {
            let ok = ai.is_finite() && bi.is_finite() && ai > 0.0 && bi > 0.0;
            if ok {
                Ok(contrast_transform(ai, bi, k))
            } else {
                Err(EMError::NonPositiveIntensity { index, a: ai, b: bi })
            }
        })
        .collect()
}
