//! Convergence check between consecutive EM iterations.
use crate::clustering::core::estimate::{ClusterParams, EMEstimate};

/// Whether the fit is still moving.
///
/// Always `true` on iteration 0. Afterwards, `true` as soon as any active
/// cluster's weight, mean or σ differs from `prev` by more than `tolerance`;
/// `false` signals convergence. Inactive clusters are ignored.
pub fn has_changed(prev: &ClusterParams, est: &EMEstimate, tolerance: f64, iteration: usize) -> bool {
    if iteration == 0 {
        return true;
    }
    (0..est.n_clusters()).filter(|&j| est.active[j]).any(|j| {
        (prev.weight[j] - est.weight[j]).abs() > tolerance
            || (prev.mean[j] - est.mean[j]).abs() > tolerance
            || (prev.std[j] - est.std[j]).abs() > tolerance
    })
}
