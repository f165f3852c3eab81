//! density — Gaussian kernel with an exponential tail, plus numeric sentinels.
//!
//! Purpose
//! -------
//! Provide the scalar density used by every E-step and posterior evaluation:
//! a Gaussian bump whose log-density switches from quadratic to linear decay
//! past a configurable z-score (the *tail cut*). Linear decay keeps outlying
//! samples from dominating the cluster assignments.
//!
//! Key behaviors
//! -------------
//! - [`gaussian_tail`] evaluates `exp(exponent)` with
//!   `exponent = -0.5·z²·factor` inside the cut and
//!   `exponent = -0.5·z_cut·|z|·factor` outside it, floored at
//!   [`EXPONENT_FLOOR`].
//! - [`probability`] standardizes a sample against a cluster and returns the
//!   std-normalized kernel, optionally scaled by the cluster weight.
//! - [`NA`], [`MAX_VALUE`] and [`EPSILON`] name the sentinels shared by the
//!   engine (NA is a real number, not NaN, and is compared directly).
//!
//! Invariants & assumptions
//! ------------------------
//! - `gaussian_tail` is total: it accepts any real `z` and never panics.
//! - `probability` does not guard `std == 0`; callers pass clamped,
//!   strictly positive standard deviations.
//!
//! Conventions
//! -----------
//! - The kernel is unnormalized (`gaussian_tail(0, ..) == 1`); the `1/√(2π)`
//!   constant is dropped since every consumer either normalizes across
//!   clusters or takes ratios.

/// "Not applicable" sentinel for unset scalar diagnostics (FLDs, separation).
pub const NA: f64 = -f64::MAX;

/// Largest representable magnitude; used to clamp overflowing ratios and as
/// the "impossible" negative log-probability of an inactive cluster.
pub const MAX_VALUE: f64 = f64::MAX;

/// Machine epsilon; population std-devs below it are treated as degenerate.
pub const EPSILON: f64 = f64::EPSILON;

/// Lower bound applied to the kernel exponent before exponentiation.
pub const EXPONENT_FLOOR: f64 = -200.0;

/// Gaussian kernel with an exponential tail.
///
/// Parameters
/// ----------
/// - `z`: `f64`
///   Standardized distance `(mean − x)/std`; the sign is irrelevant.
/// - `z_cut`: `f64`
///   Absolute z-score beyond which the decay becomes linear in `|z|`.
/// - `factor`: `f64`
///   Multiplier on the exponent; `1.0` for likelihoods, the configured
///   confidence factor for per-sample raw probabilities.
///
/// Returns
/// -------
/// `f64`
///   `exp(max(exponent, -200))`, in `(0, 1]` for non-negative `factor`.
///
/// Notes
/// -----
/// - A NaN `z` propagates (the floor comparison is false for NaN).
#[inline]
pub fn gaussian_tail(z: f64, z_cut: f64, factor: f64) -> f64 {
    let abs_z = z.abs();
    let mut exponent =
        if abs_z < z_cut { -0.5 * abs_z * abs_z * factor } else { -0.5 * z_cut * abs_z * factor };
    if exponent < EXPONENT_FLOOR {
        exponent = EXPONENT_FLOOR;
    }
    exponent.exp()
}

/// Density of `x` under one cluster, normalized by the cluster std.
///
/// Parameters
/// ----------
/// - `x`: sample value.
/// - `mean`, `std`: cluster location and scale (`std > 0`).
/// - `weight`: cluster mixing weight, applied only when `use_weight` is set.
/// - `z_cut`: tail cut forwarded to [`gaussian_tail`].
/// - `use_weight`: multiply the density by `weight`.
///
/// Returns
/// -------
/// `f64`
///   `[weight ·] gaussian_tail((mean − x)/std, z_cut, 1)/std`.
#[inline]
pub fn probability(x: f64, mean: f64, std: f64, weight: f64, z_cut: f64, use_weight: bool) -> f64 {
    let z = (mean - x) / std;
    let kernel = gaussian_tail(z, z_cut, 1.0);
    if use_weight { weight * kernel / std } else { kernel / std }
}
