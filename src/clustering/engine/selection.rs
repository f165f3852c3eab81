//! Model selection between EM fits started from different seeds.
use crate::clustering::core::{estimate::EMEstimate, options::LossFunction};

/// Whether `candidate` beats `incumbent` under `loss`.
///
/// Both fits are scored with the candidate's active-cluster count, so the
/// cluster-count penalty only matters through the separation term. The
/// comparison is strict: a tie keeps the incumbent.
///
/// Parameters
/// ----------
/// - `lambda`: penalty scale `√N`.
pub fn is_better(
    candidate: &EMEstimate, incumbent: &EMEstimate, loss: LossFunction, lambda: f64,
) -> bool {
    let n = candidate.n_active();
    let challenger = loss.score(candidate.log_likelihood, candidate.separation, lambda, n);
    let holder = loss.score(incumbent.log_likelihood, incumbent.separation, lambda, n);
    challenger < holder
}
