//! EM prior — expected cluster locations and spreads for seed search.
//!
//! The prior only drives empirical seed generation: candidate means are
//! laid out on a grid of `mean ± k·mean_spread`, and σ bounds come from
//! `std ± std_spread`. EM itself never reads it.
use crate::clustering::errors::{EMError, EMResult};
use ndarray::{Array1, array};

/// Per-cluster prior used to build empirical seeds.
///
/// Fields
/// ------
/// - `mean`: expected cluster centers on the contrast axis.
/// - `mean_spread`: standard deviation of each center across markers.
/// - `std`: expected within-cluster standard deviation.
/// - `std_spread`: standard deviation of each within-cluster σ.
///
/// Notes
/// -----
/// - `EMPrior::default()` is the calibrated three-cluster prior
///   (`mean = [−0.66, 0, 0.66]`). For other cluster counts
///   [`EMPrior::for_clusters`] returns zero-filled arrays, which is a valid
///   shape but carries no information.
#[derive(Debug, Clone, PartialEq)]
pub struct EMPrior {
    pub mean: Array1<f64>,
    pub mean_spread: Array1<f64>,
    pub std: Array1<f64>,
    pub std_spread: Array1<f64>,
}

impl Default for EMPrior {
    fn default() -> Self {
        EMPrior {
            mean: array![-0.66, 0.0, 0.66],
            mean_spread: array![0.125, 0.175, 0.125],
            std: array![0.065, 0.085, 0.065],
            std_spread: array![0.035, 0.015, 0.035],
        }
    }
}

impl EMPrior {
    /// Build a prior from explicit per-cluster arrays.
    pub fn new(
        mean: Vec<f64>, mean_spread: Vec<f64>, std: Vec<f64>, std_spread: Vec<f64>,
    ) -> Self {
        EMPrior {
            mean: Array1::from(mean),
            mean_spread: Array1::from(mean_spread),
            std: Array1::from(std),
            std_spread: Array1::from(std_spread),
        }
    }

    /// Default prior for `n_clusters`: calibrated for three, zeros otherwise.
    pub fn for_clusters(n_clusters: usize) -> Self {
        if n_clusters == 3 {
            return EMPrior::default();
        }
        let zeros = Array1::zeros(n_clusters);
        EMPrior {
            mean: zeros.clone(),
            mean_spread: zeros.clone(),
            std: zeros.clone(),
            std_spread: zeros,
        }
    }

    /// Number of clusters described by the `mean` array.
    pub fn n_clusters(&self) -> usize {
        self.mean.len()
    }

    /// Require all four arrays to have one entry per cluster.
    ///
    /// Errors
    /// ------
    /// - `EMError::PriorLengthMismatch` naming the first array whose length
    ///   differs from `n_clusters`.
    pub fn check_consistency(&self, n_clusters: usize) -> EMResult<()> {
        for (field, len) in [
            ("mean", self.mean.len()),
            ("mean_spread", self.mean_spread.len()),
            ("std", self.std.len()),
            ("std_spread", self.std_spread.len()),
        ] {
            if len != n_clusters {
                return Err(EMError::PriorLengthMismatch { field, expected: n_clusters, actual: len });
            }
        }
        Ok(())
    }
}
