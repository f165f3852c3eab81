//! Fisher's linear discriminants and the combined separation score.
//!
//! `fld1` measures the BB/AB gap and `fld2` the AB/AA gap, each as the mean
//! difference over the pooled σ. When the heterozygote cluster has been
//! dropped from a three-cluster fit, `fld2` falls back to the BB/AA gap
//! divided by [`HOM_ONLY_PENALTY`]. The separation score is the geometric mean
//! of the two discriminants when both exist, else whichever exists, else
//! [`NA`].
use crate::clustering::core::{density::NA, estimate::EMEstimate};

/// Divisor applied to the homozygote-only discriminant.
pub const HOM_ONLY_PENALTY: f64 = 4.0;

fn discriminant(est: &EMEstimate, lo: usize, hi: usize) -> f64 {
    (est.mean[hi] - est.mean[lo]) / (est.std[hi] * est.std[hi] + est.std[lo] * est.std[lo]).sqrt()
}

/// Set `fld1`, `fld2` and `separation` on a finished estimate.
///
/// Only two- and three-cluster fits are scored; every other cluster count
/// leaves all three values at [`NA`].
pub fn compute_fld(est: &mut EMEstimate) {
    est.fld1 = NA;
    est.fld2 = NA;
    est.separation = NA;

    let k = est.n_clusters();
    if !(2..=3).contains(&k) {
        return;
    }
    let active = est.active.clone();

    if active[0] && active[1] {
        est.fld1 = discriminant(est, 0, 1);
    }
    if k == 3 {
        if active[1] && active[2] {
            est.fld2 = discriminant(est, 1, 2);
        }
        if active[0] && active[2] && !active[1] {
            est.fld2 = discriminant(est, 0, 2) / HOM_ONLY_PENALTY;
        }
    }

    est.separation = match (est.fld1 != NA, est.fld2 != NA) {
        (true, true) => (est.fld1 * est.fld2).sqrt(),
        (true, false) => est.fld1,
        (false, true) => est.fld2,
        (false, false) => NA,
    };
}
