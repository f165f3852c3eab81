//! EM fit state — scratch buffers threaded through the E/M steps.
//!
//! Purpose
//! -------
//! Own the per-sample/per-cluster probability matrices and the per-cluster
//! mass totals produced by the E-step and consumed by the M-step and the
//! posterior. Keeping them in an explicit value (rather than on the engine)
//! makes the step ordering visible at each call site and lets the steps be
//! exercised in isolation.
//!
//! Key behaviors
//! -------------
//! - [`FitState::new`] allocates `N × K` matrices once per run.
//! - The E-step overwrites `p`, `np`, `cluster_np` and `sum_np` for active
//!   clusters; columns of inactive clusters keep whatever the last E-step
//!   that saw them active wrote (all zeros for a fresh state).
//!
//! Invariants & assumptions
//! ------------------------
//! - `p.dim() == np.dim() == (N, K)` and `cluster_np.len() == K`.
//! - After an E-step, each row of `np` restricted to active clusters sums to
//!   one, or to zero when every raw density of that sample was zero.
//!
//! Conventions
//! -----------
//! - Row index = sample, column index = cluster.
//! - `sum_np` is the total normalized mass over active clusters, i.e. the
//!   number of samples with at least one nonzero density.
use ndarray::{Array1, Array2};

/// Scratch buffers for one EM run.
///
/// Fields
/// ------
/// - `p`: raw densities `p[i][j]` of sample `i` under cluster `j`.
/// - `np`: per-sample normalized responsibilities.
/// - `cluster_np`: column sums of `np` (per-cluster mass).
/// - `sum_np`: sum of `cluster_np` over active clusters.
#[derive(Debug, Clone, PartialEq)]
pub struct FitState {
    pub p: Array2<f64>,
    pub np: Array2<f64>,
    pub cluster_np: Array1<f64>,
    pub sum_np: f64,
}

impl FitState {
    /// Zeroed buffers for `n_samples` samples and `n_clusters` clusters.
    pub fn new(n_samples: usize, n_clusters: usize) -> Self {
        FitState {
            p: Array2::zeros((n_samples, n_clusters)),
            np: Array2::zeros((n_samples, n_clusters)),
            cluster_np: Array1::zeros(n_clusters),
            sum_np: 0.0,
        }
    }

    pub fn n_samples(&self) -> usize {
        self.p.nrows()
    }

    pub fn n_clusters(&self) -> usize {
        self.p.ncols()
    }
}
