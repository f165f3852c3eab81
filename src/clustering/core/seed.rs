//! EM seed — starting point and hard bounds for one constrained EM run.
//!
//! Purpose
//! -------
//! Describe the initial per-cluster mean/σ/weight together with the box
//! constraints `[min_mean, max_mean]` and `[min_std, max_std]` that every
//! iterate is clamped into.
//!
//! Key behaviors
//! -------------
//! - [`EMSeed::new`] builds a seed from explicit per-cluster vectors.
//! - [`EMSeed::check_consistency`] verifies that all seven arrays have one
//!   entry per configured cluster.
//! - [`EMSeed::peak_finding`] returns the fixed three-cluster seed used to
//!   locate cluster peaks on contrast data.
//!
//! Invariants & assumptions
//! ------------------------
//! - A non-positive `weight[i]` marks cluster `i` as inactive for the run.
//! - Bounds are taken as given; a seed with `min > max` is not rejected, the
//!   clamp simply resolves to one side.
//!
//! Conventions
//! -----------
//! - Seeds compare with exact `f64` equality (`PartialEq`); the seed search
//!   relies on this to drop duplicate candidates.
use crate::clustering::errors::{EMError, EMResult};
use ndarray::{Array1, array};

/// Starting values and box constraints for one EM run.
///
/// Fields
/// ------
/// - `mean`, `std`, `weight`: initial cluster parameters.
/// - `min_mean`, `max_mean`: bounds on each cluster mean.
/// - `min_std`, `max_std`: bounds on each cluster σ. `max_std` also serves
///   as the reference ceiling when σ bounds are tightened between iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct EMSeed {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
    pub weight: Array1<f64>,
    pub min_mean: Array1<f64>,
    pub max_mean: Array1<f64>,
    pub min_std: Array1<f64>,
    pub max_std: Array1<f64>,
}

impl EMSeed {
    /// Build a seed from per-cluster vectors.
    ///
    /// Parameters
    /// ----------
    /// - `mean`, `std`, `weight`: initial values.
    /// - `min_mean`, `max_mean`: mean bounds.
    /// - `min_std`, `max_std`: σ bounds.
    ///
    /// Notes
    /// -----
    /// - Lengths are not checked here; [`EMSeed::check_consistency`] runs when
    ///   the seed is handed to the engine.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        mean: Vec<f64>, std: Vec<f64>, weight: Vec<f64>, min_mean: Vec<f64>, max_mean: Vec<f64>,
        min_std: Vec<f64>, max_std: Vec<f64>,
    ) -> Self {
        EMSeed {
            mean: Array1::from(mean),
            std: Array1::from(std),
            weight: Array1::from(weight),
            min_mean: Array1::from(min_mean),
            max_mean: Array1::from(max_mean),
            min_std: Array1::from(min_std),
            max_std: Array1::from(max_std),
        }
    }

    /// All-zero seed for `n_clusters` clusters (every cluster inactive).
    pub fn zeros(n_clusters: usize) -> Self {
        let z = Array1::zeros(n_clusters);
        EMSeed {
            mean: z.clone(),
            std: z.clone(),
            weight: z.clone(),
            min_mean: z.clone(),
            max_mean: z.clone(),
            min_std: z.clone(),
            max_std: z,
        }
    }

    /// Fixed three-cluster seed for locating cluster peaks.
    ///
    /// Means start at `[−0.66, 0, 0.66]` with σ = 0.1 and weights
    /// `[0.33, 0.34, 0.33]`. The homozygote means are kept at least
    /// `min_center` away from zero (`[−2, −c]` and `[c, 2]`), the heterozygote
    /// mean stays within `±0.05`, and every σ is bounded to `[0.02, 0.3]`.
    pub fn peak_finding(min_center: f64) -> Self {
        EMSeed {
            mean: array![-0.66, 0.0, 0.66],
            std: array![0.1, 0.1, 0.1],
            weight: array![0.33, 0.34, 0.33],
            min_mean: array![-2.0, -0.05, min_center],
            max_mean: array![-min_center, 0.05, 2.0],
            min_std: array![0.02, 0.02, 0.02],
            max_std: array![0.3, 0.3, 0.3],
        }
    }

    /// Number of clusters described by the `mean` array.
    pub fn n_clusters(&self) -> usize {
        self.mean.len()
    }

    /// Require all seven arrays to hold `n_clusters` entries.
    ///
    /// Errors
    /// ------
    /// - `EMError::SeedLengthMismatch` naming the first mismatching array.
    pub fn check_consistency(&self, n_clusters: usize) -> EMResult<()> {
        for (field, len) in [
            ("mean", self.mean.len()),
            ("std", self.std.len()),
            ("weight", self.weight.len()),
            ("min_mean", self.min_mean.len()),
            ("max_mean", self.max_mean.len()),
            ("min_std", self.min_std.len()),
            ("max_std", self.max_std.len()),
        ] {
            if len != n_clusters {
                return Err(EMError::SeedLengthMismatch { field, expected: n_clusters, actual: len });
            }
        }
        Ok(())
    }
}
