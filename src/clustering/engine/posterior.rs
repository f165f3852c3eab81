//! Posterior — per-sample genotype calls, confidences and log-likelihood.
//!
//! Purpose
//! -------
//! Turn the responsibilities of the final E-step into hard calls. Each sample
//! is assigned the most responsible active cluster, subject to a geometric
//! consistency check against the runner-up clusters, and gets a confidence
//! score (lower is better) that combines how well the best cluster explains
//! it with how decisively it beats the runner-up.
//!
//! Key behaviors
//! -------------
//! - Active clusters are ranked by `−ln(np[i][j])` (a zero responsibility and
//!   every inactive cluster rank at [`MAX_VALUE`]); ties keep cluster order.
//! - With two or more active clusters, if the sample lies on the far side of
//!   the runner-up (negative dot product), best and runner-up swap. With
//!   three, the same check against the third-ranked cluster rotates it to
//!   the front.
//! - `log_likelihood` sums `−ln(gaussian_tail(z, tail_cut, 1))` at the best
//!   cluster, each sample contributing at most [`LOG_LIKELIHOOD_CAP`].
//! - Samples whose confidence exceeds `confidence_threshold` become no-calls.
//!
//! Invariants & assumptions
//! ------------------------
//! - `state` holds the responsibilities of a final-pass E-step on `data`.
//! - Nothing happens when no cluster is active; the estimate keeps its
//!   initial no-calls and `log_likelihood`.
use crate::clustering::core::{
    density::{MAX_VALUE, gaussian_tail},
    estimate::{EMEstimate, GenotypeCall},
    options::EMOptions,
    workspace::FitState,
};
use ndarray::ArrayView1;

/// Largest contribution of one sample to the negative log-likelihood.
pub const LOG_LIKELIHOOD_CAP: f64 = 20.0;

/// Fill calls, confidences, probabilities and the log-likelihood.
///
/// Parameters
/// ----------
/// - `data`: sample sequence (length `N`).
/// - `est`: fitted estimate; per-sample outputs and `log_likelihood` are
///   overwritten.
/// - `state`: final-pass responsibilities.
/// - `opts`: supplies `tail_cut`, `confidence_factor` and
///   `confidence_threshold`.
pub fn compute_optimal_estimates(
    data: ArrayView1<'_, f64>, est: &mut EMEstimate, state: &FitState, opts: &EMOptions,
) {
    let n_active = est.n_active();
    if n_active == 0 {
        return;
    }
    let n_clusters = est.n_clusters();
    let single = est.active.iter().position(|&a| a).unwrap_or(0);
    let mut ranking: Vec<(f64, usize)> = Vec::with_capacity(n_clusters);

    est.log_likelihood = 0.0;
    for (i, &x) in data.iter().enumerate() {
        let mut best = single;
        let mut second = single;

        if n_active > 1 {
            ranking.clear();
            ranking.extend((0..n_clusters).map(|j| {
                let np = state.np[[i, j]];
                let score = if est.active[j] && np > 0.0 { -np.ln() } else { MAX_VALUE };
                (score, j)
            }));
            ranking.sort_by(|a, b| a.0.total_cmp(&b.0));

            best = ranking[0].1;
            second = ranking[1].1;
            if (x - est.mean[second]) * (est.mean[best] - est.mean[second]) < 0.0 {
                std::mem::swap(&mut best, &mut second);
            }
            if n_active > 2 {
                let third = ranking[2].1;
                if (x - est.mean[third]) * (est.mean[best] - est.mean[third]) < 0.0 {
                    second = best;
                    best = third;
                }
            }
        }

        let ratio = if n_active > 1 {
            let denom = state.np[[i, second]];
            let r = if denom == 0.0 { 0.0 } else { state.np[[i, best]] / denom };
            if r.is_infinite() || r > MAX_VALUE { MAX_VALUE } else { r }
        } else {
            0.0
        };
        est.probability_ratio[i] = ratio;

        let z = (x - est.mean[best]) / est.std[best];
        let raw = gaussian_tail(z, opts.tail_cut, opts.confidence_factor);
        est.raw_probability[i] = raw;

        let nll = -gaussian_tail(z, opts.tail_cut, 1.0).ln();
        est.log_likelihood += nll.min(LOG_LIKELIHOOD_CAP);

        let confidence = if n_active > 1 { 1.0 - raw * (ratio / (ratio + 1.0)) } else { 1.0 - raw };
        est.confidence[i] = confidence;
        est.calls[i] = if confidence > opts.confidence_threshold {
            GenotypeCall::NoCall
        } else {
            GenotypeCall::from_cluster(best)
        };
    }
}
