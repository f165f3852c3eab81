//! EM estimate — per-cluster fit state and per-sample genotype calls.
//!
//! Purpose
//! -------
//! Hold everything one EM run produces: the current cluster parameters and
//! bounds (mutated in place across iterations), the active-cluster mask, and
//! after finalization the per-sample calls, confidences and probabilities
//! together with the scalar diagnostics used for model selection and QC.
//!
//! Key behaviors
//! -------------
//! - [`EMEstimate::from_seed`] creates a fresh estimate from a clamped seed;
//!   scalar diagnostics start at their "unset" values (`log_likelihood = −1`,
//!   FLDs and separation = [`NA`]).
//! - [`GenotypeCall`] maps posterior classes to genotypes with the integer
//!   codes used by downstream reports (0 = AA, 1 = AB, 2 = BB, −1 = no call).
//! - [`ClusterParams`] snapshots the (weight, mean, σ) triple used by the
//!   convergence check.
//!
//! Invariants & assumptions
//! ------------------------
//! - All per-cluster arrays have length `K`; all per-sample arrays have
//!   length `N` and are overwritten by the posterior step.
//! - An estimate is never reused across seeds.
use crate::clustering::core::{density::NA, seed::EMSeed};
use ndarray::Array1;

/// Genotype class of one sample.
///
/// The contrast axis puts allele-B-dominant samples at negative values, so
/// the lowest-mean cluster (index 0) is BB and the highest (index 2) is AA.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GenotypeCall {
    AA,
    AB,
    BB,
    #[default]
    NoCall,
}

impl GenotypeCall {
    /// Integer code: 0 = AA, 1 = AB, 2 = BB, −1 = no call.
    pub fn code(&self) -> i8 {
        match self {
            GenotypeCall::AA => 0,
            GenotypeCall::AB => 1,
            GenotypeCall::BB => 2,
            GenotypeCall::NoCall => -1,
        }
    }

    /// Inverse of [`GenotypeCall::code`]; any other value is a no-call.
    pub fn from_code(code: i8) -> Self {
        match code {
            0 => GenotypeCall::AA,
            1 => GenotypeCall::AB,
            2 => GenotypeCall::BB,
            _ => GenotypeCall::NoCall,
        }
    }

    /// Call for a raw cluster index: class `2 − index`, no call if that falls
    /// outside `0..=2`.
    pub fn from_cluster(index: usize) -> Self {
        match index {
            0 => GenotypeCall::BB,
            1 => GenotypeCall::AB,
            2 => GenotypeCall::AA,
            _ => GenotypeCall::NoCall,
        }
    }

    pub fn is_call(&self) -> bool {
        !matches!(self, GenotypeCall::NoCall)
    }
}

/// Weight/mean/σ snapshot compared between consecutive iterations.
#[derive(Debug, Clone, PartialEq)]
pub struct ClusterParams {
    pub weight: Array1<f64>,
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
}

/// Result of one EM run.
///
/// Fields
/// ------
/// - `mean`, `std`, `weight`, `min_mean`, `max_mean`, `min_std`, `max_std`:
///   per-cluster parameters and bounds. `max_std` is tightened by the σ
///   adjustment step and may end below the seed's value.
/// - `active`: per-cluster flag; dropped clusters stay inactive for the rest
///   of the run.
/// - `calls`, `confidence`, `raw_probability`, `probability_ratio`:
///   per-sample posterior outputs. Confidence is "lower is better".
/// - `log_likelihood`: summed, capped per-sample negative log-likelihood
///   (`−1` until the posterior step runs).
/// - `fld1`, `fld2`, `separation`: Fisher discriminants and their combined
///   score, [`NA`] when undefined.
/// - `iterations`: E/M iterations performed.
/// - `converged`: tolerance reached before the iteration cap.
#[derive(Debug, Clone, PartialEq)]
pub struct EMEstimate {
    pub mean: Array1<f64>,
    pub std: Array1<f64>,
    pub weight: Array1<f64>,
    pub min_mean: Array1<f64>,
    pub max_mean: Array1<f64>,
    pub min_std: Array1<f64>,
    pub max_std: Array1<f64>,
    pub active: Vec<bool>,
    pub calls: Vec<GenotypeCall>,
    pub confidence: Array1<f64>,
    pub raw_probability: Array1<f64>,
    pub probability_ratio: Array1<f64>,
    pub log_likelihood: f64,
    pub fld1: f64,
    pub fld2: f64,
    pub separation: f64,
    pub iterations: usize,
    pub converged: bool,
}

impl EMEstimate {
    /// Empty estimate for `n_clusters` clusters and `n_samples` samples.
    pub fn new(n_clusters: usize, n_samples: usize) -> Self {
        let k = Array1::zeros(n_clusters);
        EMEstimate {
            mean: k.clone(),
            std: k.clone(),
            weight: k.clone(),
            min_mean: k.clone(),
            max_mean: k.clone(),
            min_std: k.clone(),
            max_std: k,
            active: vec![false; n_clusters],
            calls: vec![GenotypeCall::NoCall; n_samples],
            confidence: Array1::ones(n_samples),
            raw_probability: Array1::zeros(n_samples),
            probability_ratio: Array1::zeros(n_samples),
            log_likelihood: -1.0,
            fld1: NA,
            fld2: NA,
            separation: NA,
            iterations: 0,
            converged: false,
        }
    }

    /// Fresh estimate seeded from (already clamped) seed values.
    ///
    /// Clusters with positive seed weight start active. Per-sample outputs
    /// start as no-calls with confidence 1.
    pub fn from_seed(seed: &EMSeed, n_samples: usize) -> Self {
        let mut est = EMEstimate::new(seed.n_clusters(), n_samples);
        est.mean.assign(&seed.mean);
        est.std.assign(&seed.std);
        est.weight.assign(&seed.weight);
        est.min_mean.assign(&seed.min_mean);
        est.max_mean.assign(&seed.max_mean);
        est.min_std.assign(&seed.min_std);
        est.max_std.assign(&seed.max_std);
        est.active = seed.weight.iter().map(|&w| w > 0.0).collect();
        est
    }

    pub fn n_clusters(&self) -> usize {
        self.mean.len()
    }

    pub fn n_samples(&self) -> usize {
        self.calls.len()
    }

    /// Number of active clusters.
    pub fn n_active(&self) -> usize {
        self.active.iter().filter(|&&a| a).count()
    }

    /// Snapshot of the parameters compared by the convergence check.
    pub fn params(&self) -> ClusterParams {
        ClusterParams { weight: self.weight.clone(), mean: self.mean.clone(), std: self.std.clone() }
    }

    /// Integer genotype codes, one per sample.
    pub fn call_codes(&self) -> Vec<i8> {
        self.calls.iter().map(GenotypeCall::code).collect()
    }
}
