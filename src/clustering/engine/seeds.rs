//! Empirical seed generation — grid search over prior-shifted cluster means.
//!
//! Purpose
//! -------
//! Produce starting points for three-cluster EM that already reflect the
//! data. Candidate means are laid out on a 3 × 3 × 5 grid around the prior,
//! each candidate carves the sorted sample into per-cluster windows, and the
//! windows' empirical moments become the seed. A clearly separated candidate
//! short-circuits the search; otherwise every surviving candidate is returned
//! together with three generic fallback seeds.
//!
//! Key behaviors
//! -------------
//! - Grid offsets (in units of `mean_spread`): cluster 0 shifts by
//!   `{0, 1, 2}`, cluster 1 by `{−2, …, 2}`, cluster 2 by `{0, −1, −2}`,
//!   i.e. homozygotes only move towards the centre.
//! - Mean bounds split each neighbouring gap in proportion to the prior
//!   spreads, inset by `bound_epsilon`; the outer bounds are
//!   `±`[`GRID_MEAN_LIMIT`].
//! - A cluster's window holds the samples strictly inside its mean bounds.
//!   Non-empty windows give count-based weight, mean and population σ
//!   (σ below machine epsilon falls back to the prior σ floor); empty
//!   windows keep the prior mean and σ with zero weight.
//! - Candidates are skipped when bounds overlap, when no sample is covered,
//!   or when adjacent fitted means are closer than [`MIN_MEAN_GAP`]
//!   (homozygote-only candidates: [`HOM_ONLY_GAP_FACTOR`] times that).
//! - A candidate becomes the single result when its smallest adjacent FLD
//!   exceeds [`SHORT_CIRCUIT_FLD`], it covers more than [`MIN_COVERAGE`] of
//!   the samples, has homozygote weight, and its heterozygote weight is at
//!   least half the smaller homozygote weight.
//!
//! Invariants & assumptions
//! ------------------------
//! - Only `K = 3` is supported; the prior must describe three clusters.
//! - Seed σ bounds are `std ± std_spread` from the prior for every seed.
//! - Exact duplicates are removed, keeping the first occurrence, so the
//!   result order is grid order followed by the fallbacks.
//!
//! Conventions
//! -----------
//! - FLDs here are computed on raw window moments, before any EM iteration,
//!   and are only used to rank candidates.
use crate::clustering::{
    core::{density::EPSILON, options::EMOptions, prior::EMPrior, seed::EMSeed},
    errors::{EMError, EMResult},
};
use ndarray::{Array1, array};
use statrs::statistics::Statistics;

/// Outer mean bound of the two homozygote clusters during the grid search.
pub const GRID_MEAN_LIMIT: f64 = 1.25;

/// Minimum gap between adjacent fitted means of a candidate.
pub const MIN_MEAN_GAP: f64 = 0.25;

/// Gap multiplier for candidates whose heterozygote window is empty.
pub const HOM_ONLY_GAP_FACTOR: f64 = 3.0;

/// FLD above which the best candidate is returned on its own.
pub const SHORT_CIRCUIT_FLD: f64 = 3.0;

/// Fraction of samples a short-circuit candidate must cover.
pub const MIN_COVERAGE: f64 = 0.9;

const FALLBACK_WEIGHTS: [[f64; 3]; 3] = [[0.33, 0.34, 0.33], [0.75, 0.25, 0.0], [0.0, 0.25, 0.75]];

/// Per-run constants derived from the prior.
struct Grid<'a> {
    prior: &'a EMPrior,
    ratio_lo: f64,
    ratio_hi: f64,
    epsilon: f64,
    min_std: Array1<f64>,
    max_std: Array1<f64>,
}

impl<'a> Grid<'a> {
    fn new(prior: &'a EMPrior, epsilon: f64) -> Self {
        let s = &prior.mean_spread;
        Grid {
            prior,
            ratio_lo: s[0] / (s[0] + s[1]),
            ratio_hi: s[2] / (s[2] + s[1]),
            epsilon,
            min_std: &prior.std - &prior.std_spread,
            max_std: &prior.std + &prior.std_spread,
        }
    }

    /// Mean bounds for cluster centres `mu`.
    fn mean_bounds(&self, mu: &[f64; 3]) -> ([f64; 3], [f64; 3]) {
        let (r1, r2, eps) = (self.ratio_lo, self.ratio_hi, self.epsilon);
        let lower = [
            -GRID_MEAN_LIMIT,
            mu[1] - (1.0 - r1) * (mu[1] - mu[0]) + eps,
            mu[2] - r2 * (mu[2] - mu[1]) + eps,
        ];
        let upper = [
            mu[0] + r1 * (mu[1] - mu[0]) - eps,
            mu[1] + (1.0 - r2) * (mu[2] - mu[1]) - eps,
            GRID_MEAN_LIMIT,
        ];
        (lower, upper)
    }

    /// Fit one grid point; `None` when the candidate is skipped.
    fn candidate(&self, sorted: &[f64], offsets: [f64; 3]) -> Option<(EMSeed, f64)> {
        let prior = self.prior;
        let mut mu: [f64; 3] =
            std::array::from_fn(|k| prior.mean[k] + prior.mean_spread[k] * offsets[k]);
        let (lower, upper) = self.mean_bounds(&mu);
        if upper[0] > lower[1] || upper[1] > lower[2] {
            return None;
        }

        let mut std = [0.0; 3];
        let mut weight = [0.0; 3];
        let mut covered = 0usize;
        for k in 0..3 {
            let lo = sorted.partition_point(|&x| x <= lower[k]);
            let hi = sorted.partition_point(|&x| x < upper[k]);
            let count = hi.saturating_sub(lo);
            if count > 0 {
                let window = &sorted[lo..hi];
                mu[k] = window.mean();
                std[k] = window.population_std_dev();
                if std[k] < EPSILON {
                    std[k] = self.min_std[k];
                }
                weight[k] = count as f64;
            } else {
                mu[k] = prior.mean[k];
                std[k] = prior.std[k];
            }
            covered += count;
        }
        if covered == 0 {
            return None;
        }
        for w in &mut weight {
            *w /= covered as f64;
        }

        let (lower, upper) = self.mean_bounds(&mu);
        let fld = |a: usize, b: usize| (mu[b] - mu[a]) / (std[a] * std[a] + std[b] * std[b]).sqrt();
        let mut adjacent: Vec<f64> = Vec::with_capacity(2);
        let mut hom_only = None;
        if weight[0] > 0.0 && weight[1] > 0.0 {
            if upper[0] > lower[1] || mu[1] - mu[0] < MIN_MEAN_GAP {
                return None;
            }
            adjacent.push(fld(0, 1));
        }
        if weight[1] > 0.0 && weight[2] > 0.0 {
            if upper[1] > lower[2] || mu[2] - mu[1] < MIN_MEAN_GAP {
                return None;
            }
            adjacent.push(fld(1, 2));
        }
        if weight[0] > 0.0 && weight[2] > 0.0 && weight[1] == 0.0 {
            if mu[2] - mu[0] < HOM_ONLY_GAP_FACTOR * MIN_MEAN_GAP {
                return None;
            }
            hom_only = Some(fld(0, 2));
        }
        let best_fld = adjacent.iter().copied().reduce(f64::min).or(hom_only);

        let coverage = covered as f64 / sorted.len() as f64;
        let het = weight[1];
        let hom = weight[0].min(weight[2]);
        let score = match best_fld {
            Some(f) if coverage > MIN_COVERAGE && het >= 0.5 * hom && hom > 0.0 => f,
            _ => 0.0,
        };

        let seed = EMSeed {
            mean: Array1::from(mu.to_vec()),
            std: Array1::from(std.to_vec()),
            weight: Array1::from(weight.to_vec()),
            min_mean: Array1::from(lower.to_vec()),
            max_mean: Array1::from(upper.to_vec()),
            min_std: self.min_std.clone(),
            max_std: self.max_std.clone(),
        };
        Some((seed, score))
    }

    /// Generic prior-centred seeds appended when no candidate short-circuits.
    fn fallbacks(&self) -> impl Iterator<Item = EMSeed> + '_ {
        let prior = self.prior;
        FALLBACK_WEIGHTS.iter().map(move |w| EMSeed {
            mean: prior.mean.clone(),
            std: prior.std.clone(),
            weight: array![w[0], w[1], w[2]],
            min_mean: Array1::zeros(3),
            max_mean: &prior.mean - &prior.mean_spread,
            min_std: self.min_std.clone(),
            max_std: self.max_std.clone(),
        })
    }
}

/// Build the empirical seed list for a three-cluster fit.
///
/// Parameters
/// ----------
/// - `data`: sample sequence; it is copied and sorted, not modified.
/// - `prior`: three-cluster prior the grid is built around.
/// - `opts`: supplies `n_clusters` (must be 3) and `bound_epsilon`.
///
/// Returns
/// -------
/// `EMResult<Vec<EMSeed>>`
///   Either the single best candidate, or every surviving candidate followed
///   by the three fallback seeds, without exact duplicates.
///
/// Errors
/// ------
/// - `EMError::UnsupportedClusterCount` when `opts.n_clusters != 3`.
/// - `EMError::PriorLengthMismatch` when the prior does not describe three
///   clusters.
pub fn generate_empirical_seeds(
    data: &[f64], prior: &EMPrior, opts: &EMOptions,
) -> EMResult<Vec<EMSeed>> {
    if opts.n_clusters != 3 {
        return Err(EMError::UnsupportedClusterCount {
            n_clusters: opts.n_clusters,
            operation: "empirical seed generation",
        });
    }
    prior.check_consistency(3)?;

    let grid = Grid::new(prior, opts.bound_epsilon);
    let mut sorted = data.to_vec();
    sorted.sort_by(f64::total_cmp);

    let mut seeds = Vec::new();
    let mut best: Option<EMSeed> = None;
    let mut best_fld = 0.0;
    for hom_hi in 0..3 {
        for hom_lo in 0..3 {
            for het in -2..=2 {
                let offsets = [hom_lo as f64, het as f64, -(hom_hi as f64)];
                let Some((seed, score)) = grid.candidate(&sorted, offsets) else {
                    continue;
                };
                if score > best_fld {
                    best_fld = score;
                    best = Some(seed.clone());
                }
                seeds.push(seed);
            }
        }
    }

    if best_fld > SHORT_CIRCUIT_FLD {
        if let Some(seed) = best {
            return Ok(vec![seed]);
        }
    }

    seeds.extend(grid.fallbacks());
    let mut unique: Vec<EMSeed> = Vec::with_capacity(seeds.len());
    for seed in seeds {
        if !unique.contains(&seed) {
            unique.push(seed);
        }
    }
    Ok(unique)
}
