//! M-step — constrained parameter updates from E-step responsibilities.
//!
//! Purpose
//! -------
//! Re-estimate cluster means, weights and σs from the responsibilities of
//! the latest E-step, then pull them back into their bounds. The σ
//! adjustment additionally tightens the σ ceilings of clusters whose means
//! sit close together, so neighbouring genotype clusters cannot swallow
//! each other by inflating their spread.
//!
//! Key behaviors
//! -------------
//! - [`m_step`] runs [`update_mu`] → [`adjust_mu`] → [`update_weight`] →
//!   [`update_sigma`] → [`adjust_sigma`] in that order.
//! - [`update_mu`] zeroes the means of inactive clusters before updating the
//!   active ones; inactive weights and σs are left as they were.
//! - [`adjust_sigma`] is a no-op for `K ≠ 3`.
//!
//! Invariants & assumptions
//! ------------------------
//! - Active clusters have `cluster_np[j] > 0` (the E-step drops clusters
//!   whose mass falls below the drop threshold).
//! - The seed passed to [`adjust_sigma`] is the one the run started from; its
//!   `max_std`/`min_std` are the reference σ ceiling and floor.
//!
//! Conventions
//! -----------
//! - Cluster 1 is the heterozygote; clusters 0 and 2 are homozygotes. The
//!   gap `diff1 = |μ1 − μ0|` drives shrinkage of cluster 0 (and possibly 1),
//!   `diff2 = |μ2 − μ1|` that of cluster 2 (and possibly 1).
use crate::clustering::core::{
    estimate::EMEstimate,
    options::{EMOptions, GeoClamp},
    seed::EMSeed,
    validation::clamp_to_bounds,
    workspace::FitState,
};
use ndarray::ArrayView1;

/// Run the full M-step sequence.
pub fn m_step(
    data: ArrayView1<'_, f64>, est: &mut EMEstimate, state: &FitState, seed: &EMSeed,
    opts: &EMOptions,
) {
    update_mu(data, est, state);
    adjust_mu(est);
    update_weight(est, state);
    update_sigma(data, est, state);
    adjust_sigma(est, seed, opts);
}

/// Responsibility-weighted mean of each active cluster.
pub fn update_mu(data: ArrayView1<'_, f64>, est: &mut EMEstimate, state: &FitState) {
    est.mean.fill(0.0);
    for j in (0..est.n_clusters()).filter(|&j| est.active[j]) {
        let mut acc = 0.0;
        for (i, &x) in data.iter().enumerate() {
            acc += state.np[[i, j]] * x;
        }
        est.mean[j] = acc / state.cluster_np[j];
    }
}

/// Clamp active means and σs into their current bounds.
pub fn adjust_mu(est: &mut EMEstimate) {
    for j in (0..est.n_clusters()).filter(|&j| est.active[j]) {
        est.mean[j] = clamp_to_bounds(est.mean[j], est.min_mean[j], est.max_mean[j]);
        est.std[j] = clamp_to_bounds(est.std[j], est.min_std[j], est.max_std[j]);
    }
}

/// Mixing weight of each active cluster: its share of the total mass.
pub fn update_weight(est: &mut EMEstimate, state: &FitState) {
    for j in (0..est.n_clusters()).filter(|&j| est.active[j]) {
        est.weight[j] = state.cluster_np[j] / state.sum_np;
    }
}

/// Responsibility-weighted σ of each active cluster around its new mean.
pub fn update_sigma(data: ArrayView1<'_, f64>, est: &mut EMEstimate, state: &FitState) {
    for j in (0..est.n_clusters()).filter(|&j| est.active[j]) {
        let mean = est.mean[j];
        let mut s2 = 0.0;
        for (i, &x) in data.iter().enumerate() {
            s2 += state.np[[i, j]] * (x - mean) * (x - mean);
        }
        est.std[j] = (s2 / state.cluster_np[j]).sqrt();
    }
}

/// Tighten σ ceilings of close clusters and clamp extreme σs (K = 3 only).
///
/// Parameters
/// ----------
/// - `est`: current estimate; `max_std` and active `std` entries may change.
/// - `seed`: the run's seed; supplies the reference σ ceiling and floor.
/// - `opts`: supplies the [`SigmaShrinkage`](crate::clustering::core::SigmaShrinkage)
///   coefficients.
///
/// Notes
/// -----
/// - Gaps are measured only between clusters with nonzero weight, which
///   includes the stale weights of dropped clusters.
/// - For a gap `d < 1`, a ceiling shrinks by
///   `coef · max · (1 − d^power)` (capped at `max`) scaled by the weight
///   share of the neighbouring cluster. The heterozygote ceiling shrinks once,
///   using the smaller nonzero gap; it falls back to `diff2` when `diff1` is
///   zero or not the smaller one, unless `diff2` is zero or ≥ 1.
/// - Finally the geometric-mean clamp selected by
///   [`GeoClamp`](crate::clustering::core::GeoClamp) runs. The default
///   `IntegerExponent` variant never moves an active σ within its bounds and
///   only raises inactive σs; `ActiveGeometricMean` keeps active σs within
///   `[g/div_j, mult_j·g]` of their geometric mean `g`.
pub fn adjust_sigma(est: &mut EMEstimate, seed: &EMSeed, opts: &EMOptions) {
    if est.n_clusters() != 3 {
        return;
    }
    let shrink = &opts.shrinkage;

    if est.weight.sum() > 0.0 {
        let w = &est.weight;
        let mu = &est.mean;
        let diff1 = if w[0] != 0.0 && w[1] != 0.0 { (mu[1] - mu[0]).abs() } else { 0.0 };
        let diff2 = if w[1] != 0.0 && w[2] != 0.0 { (mu[2] - mu[1]).abs() } else { 0.0 };
        let mut sigma_max = seed.max_std.clone();

        let reduction = |coef: f64, ceiling: f64, gap: f64| -> f64 {
            (coef * ceiling * (1.0 - gap.powf(shrink.sigma_power))).min(ceiling)
        };
        let shrinks = |gap: f64| gap != 0.0 && gap < 1.0;

        if shrinks(diff1) {
            let red = reduction(shrink.hom_reduction_coef, sigma_max[0], diff1);
            sigma_max[0] -= red * (w[1] / (w[0] + w[1]));
        }
        if shrinks(diff2) {
            let red = reduction(shrink.hom_reduction_coef, sigma_max[2], diff2);
            sigma_max[2] -= red * (w[1] / (w[1] + w[2]));
        }

        let mut het_adjusted = false;
        let prefer_diff1 = (diff1 != 0.0 && diff1 < diff2) || diff2 == 0.0 || diff2 >= 1.0;
        if prefer_diff1 && shrinks(diff1) {
            let red = reduction(shrink.het_reduction_coef, sigma_max[1], diff1);
            sigma_max[1] -= red * (w[0] / (w[0] + w[1]));
            het_adjusted = true;
        }
        if !het_adjusted && shrinks(diff2) {
            let red = reduction(shrink.het_reduction_coef, sigma_max[1], diff2);
            sigma_max[1] -= red * (w[2] / (w[2] + w[1]));
        }

        for j in 0..3 {
            if sigma_max[j] > seed.max_std[j] {
                sigma_max[j] = seed.max_std[j];
            }
            if sigma_max[j] < seed.min_std[j] {
                sigma_max[j] = seed.min_std[j];
            }
        }
        est.max_std = sigma_max;
    }

    // Floor first: the shrunken ceiling may not undercut the floor.
    for j in (0..3).filter(|&j| est.active[j]) {
        if est.std[j] < est.min_std[j] {
            est.std[j] = est.min_std[j];
        } else if est.std[j] > est.max_std[j] {
            est.std[j] = est.max_std[j];
        }
    }

    let n_active = est.n_active();
    if n_active == 0 {
        return;
    }
    let product: f64 = (0..3).filter(|&j| est.active[j]).map(|j| est.std[j]).product();

    match shrink.geo_clamp {
        GeoClamp::IntegerExponent => {
            let geo_mean = if n_active == 1 { product } else { 1.0 };
            for j in 0..3 {
                if est.active[j] {
                    let upper = shrink.geo_ratio_multiplier[j] * geo_mean;
                    if est.std[j] > upper {
                        est.std[j] = upper.min(est.max_std[j]);
                    }
                } else {
                    let lower = geo_mean / shrink.geo_ratio_divisor[j];
                    if est.std[j] < lower {
                        est.std[j] = lower.max(est.min_std[j]);
                    }
                }
            }
        }
        GeoClamp::ActiveGeometricMean => {
            let geo_mean = product.powf(1.0 / n_active as f64);
            for j in (0..3).filter(|&j| est.active[j]) {
                let upper = shrink.geo_ratio_multiplier[j] * geo_mean;
                let lower = geo_mean / shrink.geo_ratio_divisor[j];
                if est.std[j] > upper {
                    est.std[j] = clamp_to_bounds(upper, est.min_std[j], est.max_std[j]);
                } else if est.std[j] < lower {
                    est.std[j] = clamp_to_bounds(lower, est.min_std[j], est.max_std[j]);
                }
            }
        }
    }
}
