//! E-step — per-sample responsibilities and cluster dropping.
//!
//! Purpose
//! -------
//! Evaluate the tail-robust density of every sample under every active
//! cluster, normalize across clusters, and accumulate per-cluster mass. In
//! non-final passes, clusters whose mass falls below the drop threshold are
//! deactivated for the rest of the run.
//!
//! Key behaviors
//! -------------
//! - Non-final passes skip density evaluation (raw density 0) for samples
//!   more than [`FAR_TAIL_Z`] standard deviations from a cluster mean.
//! - Samples whose raw densities are all zero get zero responsibilities.
//! - The final pass evaluates every density and never drops clusters.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only the probability buffers and the `active` mask change; cluster
//!   means, σs and weights are untouched.
//! - Inactive clusters contribute nothing to the normalization and keep
//!   stale columns in the buffers.
use crate::clustering::core::{
    density::probability, estimate::EMEstimate, options::EMOptions, workspace::FitState,
};
use ndarray::{Array1, ArrayView1};

/// z-score beyond which non-final passes treat the density as zero.
pub const FAR_TAIL_Z: f64 = 50.0;

/// Run one E-step.
///
/// Parameters
/// ----------
/// - `data`: sample sequence (length `N`).
/// - `est`: current estimate; its `active` mask may be narrowed.
/// - `opts`: supplies `tail_cut`, `use_weight` and `cluster_drop_threshold`.
/// - `state`: probability buffers, overwritten for active clusters.
/// - `final_pass`: evaluate all densities and skip cluster dropping.
///
/// Returns
/// -------
/// `Vec<usize>`
///   Indices of clusters deactivated by this pass (always empty for the
///   final pass).
pub fn e_step(
    data: ArrayView1<'_, f64>, est: &mut EMEstimate, opts: &EMOptions, state: &mut FitState,
    final_pass: bool,
) -> Vec<usize> {
    let n_clusters = est.n_clusters();
    let mut sum_p = Array1::<f64>::zeros(data.len());

    for j in (0..n_clusters).filter(|&j| est.active[j]) {
        let (mean, std, weight) = (est.mean[j], est.std[j], est.weight[j]);
        for (i, &x) in data.iter().enumerate() {
            let z = (x - mean).abs() / std;
            let p = if final_pass || z < FAR_TAIL_Z {
                probability(x, mean, std, weight, opts.tail_cut, opts.use_weight)
            } else {
                0.0
            };
            state.p[[i, j]] = p;
            sum_p[i] += p;
        }
    }

    state.sum_np = 0.0;
    state.cluster_np.fill(0.0);
    for j in (0..n_clusters).filter(|&j| est.active[j]) {
        for i in 0..data.len() {
            let np = if sum_p[i] > 0.0 { state.p[[i, j]] / sum_p[i] } else { 0.0 };
            state.np[[i, j]] = np;
            state.cluster_np[j] += np;
        }
        state.sum_np += state.cluster_np[j];
    }

    let mut dropped = Vec::new();
    if !final_pass {
        for j in 0..n_clusters {
            if state.cluster_np[j] < opts.cluster_drop_threshold && est.active[j] {
                est.active[j] = false;
                dropped.push(j);
            }
        }
    }
    dropped
}
