//! EM options — configuration for constrained genotype clustering runs.
//!
//! Purpose
//! -------
//! Collect every tuning knob of the EM engine in one validated record:
//! iteration limits, convergence tolerance, tail cut, cluster dropping,
//! no-call threshold, σ-shrinkage coefficients and the model-selection loss.
//!
//! Key behaviors
//! -------------
//! - [`EMOptions`] carries the run configuration with calibrated defaults
//!   (`EMOptions::default()` is the three-cluster genotyping setup).
//! - [`SigmaShrinkage`] groups the coefficients used by the σ adjustment
//!   step (homozygote/heterozygote reduction and geometric-mean ratios).
//! - [`LossFunction`] selects how competing fits from different seeds are
//!   scored; it parses from short names for configuration files and Python.
//!
//! Invariants & assumptions
//! ------------------------
//! - `n_clusters ∈ {1, 2, 3}`; the geometric ratio arrays always have three
//!   entries (one per genotype cluster) and are indexed by cluster.
//! - [`EMOptions::validate`] is the single place range checks happen; the
//!   engine assumes a validated configuration afterwards.
//!
//! Conventions
//! -----------
//! - Cluster index 0 is the lowest-mean cluster (BB on the contrast axis),
//!   index 2 the highest (AA).
//! - `confidence_threshold` is an upper bound on the "lower is better"
//!   confidence score; anything above it becomes a no-call.
//!
//! Testing notes
//! -------------
//! - Unit tests cover defaults, loss-name parsing and rejection of each
//!   out-of-range option.
use crate::clustering::errors::{EMError, EMResult};
use std::str::FromStr;

/// Criterion used to pick the best estimate among several seeds.
///
/// Lower scores win. `n` is the number of active clusters and `λ = √N` for
/// `N` samples:
///
/// | variant | score |
/// |---|---|
/// | `MaxLikelihood` | `ML` |
/// | `Aic` | `2·ML + 2·n` |
/// | `Bic` | `2·ML + 2·λ·n` |
/// | `BicWithSeparation` | `2·ML + 2·λ·(n − separation)` |
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LossFunction {
    MaxLikelihood,
    Aic,
    Bic,
    #[default]
    BicWithSeparation,
}

impl LossFunction {
    /// Score a fit given its negative log-likelihood and separation.
    ///
    /// Parameters
    /// ----------
    /// - `log_likelihood`: summed per-sample negative log-likelihood (`ML`).
    /// - `separation`: combined FLD separation of the fit.
    /// - `lambda`: BIC penalty scale, `√N`.
    /// - `n_active`: active-cluster count used in the penalty.
    ///
    /// Returns
    /// -------
    /// `f64`
    ///   The loss; lower is better.
    pub fn score(&self, log_likelihood: f64, separation: f64, lambda: f64, n_active: usize) -> f64 {
        let n = n_active as f64;
        match self {
            LossFunction::MaxLikelihood => log_likelihood,
            LossFunction::Aic => 2.0 * log_likelihood + 2.0 * n,
            LossFunction::Bic => 2.0 * log_likelihood + 2.0 * lambda * n,
            LossFunction::BicWithSeparation => {
                2.0 * log_likelihood + 2.0 * lambda * (n - separation)
            }
        }
    }

    /// Short configuration name (`ml`, `aic`, `bic`, `bic_sep`).
    pub fn as_str(&self) -> &'static str {
        match self {
            LossFunction::MaxLikelihood => "ml",
            LossFunction::Aic => "aic",
            LossFunction::Bic => "bic",
            LossFunction::BicWithSeparation => "bic_sep",
        }
    }
}

impl FromStr for LossFunction {
    type Err = EMError;

    fn from_str(s: &str) -> EMResult<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ml" | "max_likelihood" => Ok(LossFunction::MaxLikelihood),
            "aic" => Ok(LossFunction::Aic),
            "bic" => Ok(LossFunction::Bic),
            "bic_sep" | "bic_with_separation" => Ok(LossFunction::BicWithSeparation),
            _ => Err(EMError::InvalidLossFunction { name: s.to_string() }),
        }
    }
}

/// Coefficients of the σ adjustment step.
///
/// Fields
/// ------
/// - `hom_reduction_coef`: scale of the max-σ shrink applied to a homozygote
///   cluster when its mean gap to the heterozygote is below one.
/// - `het_reduction_coef`: same, for the heterozygote cluster.
/// - `sigma_power`: exponent on the gap in `1 − gap^power`.
/// - `geo_ratio_multiplier` / `geo_ratio_divisor`: per-cluster upper/lower
///   ratios against the geometric mean of active σs.
/// - `geo_clamp`: how those ratios are applied, see [`GeoClamp`].
#[derive(Debug, Clone, PartialEq)]
pub struct SigmaShrinkage {
    pub hom_reduction_coef: f64,
    pub het_reduction_coef: f64,
    pub sigma_power: f64,
    pub geo_ratio_multiplier: [f64; 3],
    pub geo_ratio_divisor: [f64; 3],
    pub geo_clamp: GeoClamp,
}

/// Variant of the geometric-mean σ clamp at the end of the σ adjustment.
///
/// - `IntegerExponent` (default): the product of active σs is raised to the
///   integer quotient `1/n`, i.e. the product itself for one active cluster
///   and `1` otherwise. Active σs are only capped at `min(mult_j·g, max_j)`;
///   the lower ratio `g/div_j` raises inactive σs only (floored at their
///   minimum). The calibrated genotyping results are produced this way; in
///   practice active σs are left alone.
/// - `ActiveGeometricMean`: `g` is the true geometric mean of active σs and
///   every active σ is kept within `[g/div_j, mult_j·g]` and its own bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GeoClamp {
    #[default]
    IntegerExponent,
    ActiveGeometricMean,
}

impl Default for SigmaShrinkage {
    fn default() -> Self {
        SigmaShrinkage {
            hom_reduction_coef: 2.0,
            het_reduction_coef: 1.2,
            sigma_power: 0.8,
            geo_ratio_multiplier: [2.5, 3.0, 2.5],
            geo_ratio_divisor: [2.5, 2.0, 2.5],
            geo_clamp: GeoClamp::default(),
        }
    }
}

/// EMOptions — run configuration for the EM engine.
///
/// Fields
/// ------
/// - `n_clusters`: number of clusters `K` (1–3).
/// - `max_iter`: hard cap on E/M iterations; `0` skips the loop entirely.
/// - `tolerance`: per-cluster change in weight, mean or σ below which the
///   fit is considered converged.
/// - `tail_cut`: z-score where the density switches to linear decay.
/// - `use_weight`: weight densities by cluster mixing weight in the E-step.
/// - `confidence_factor`: exponent factor of the per-sample raw probability.
/// - `bound_epsilon`: inset applied to derived mean bounds during seed search.
/// - `loss_function`: model-selection criterion across seeds.
/// - `cluster_drop_threshold`: minimum normalized mass for a cluster to stay
///   active between iterations.
/// - `confidence_threshold`: confidences above this become no-calls.
/// - `shrinkage`: σ adjustment coefficients.
/// - `verbose`: request a terminal logger (`obs_slog` feature).
#[derive(Debug, Clone, PartialEq)]
pub struct EMOptions {
    pub n_clusters: usize,
    pub max_iter: usize,
    pub tolerance: f64,
    pub tail_cut: f64,
    pub use_weight: bool,
    pub confidence_factor: f64,
    pub bound_epsilon: f64,
    pub loss_function: LossFunction,
    pub cluster_drop_threshold: f64,
    pub confidence_threshold: f64,
    pub shrinkage: SigmaShrinkage,
    pub verbose: bool,
}

impl Default for EMOptions {
    fn default() -> Self {
        EMOptions {
            n_clusters: 3,
            max_iter: 50,
            tolerance: 0.001,
            tail_cut: 2.5,
            use_weight: false,
            confidence_factor: 0.01,
            bound_epsilon: 0.005,
            loss_function: LossFunction::default(),
            cluster_drop_threshold: 0.8,
            confidence_threshold: 0.05,
            shrinkage: SigmaShrinkage::default(),
            verbose: false,
        }
    }
}

impl EMOptions {
    /// Defaults with a different cluster count.
    pub fn with_clusters(n_clusters: usize) -> Self {
        EMOptions { n_clusters, ..EMOptions::default() }
    }

    /// Check every option against its admissible range.
    ///
    /// Errors
    /// ------
    /// - `EMError::InvalidClusterCount` when `n_clusters` is outside `1..=3`.
    /// - `EMError::InvalidOption` naming the first offending field otherwise.
    pub fn validate(&self) -> EMResult<()> {
        if self.n_clusters == 0 || self.n_clusters > 3 {
            return Err(EMError::InvalidClusterCount {
                n_clusters: self.n_clusters,
                reason: "must be 1, 2 or 3",
            });
        }
        check_finite_non_negative("tolerance", self.tolerance)?;
        check_finite_positive("tail_cut", self.tail_cut)?;
        check_finite_positive("confidence_factor", self.confidence_factor)?;
        check_finite_non_negative("bound_epsilon", self.bound_epsilon)?;
        check_finite_non_negative("cluster_drop_threshold", self.cluster_drop_threshold)?;
        if !self.confidence_threshold.is_finite() {
            return Err(EMError::InvalidOption {
                name: "confidence_threshold",
                value: self.confidence_threshold,
                reason: "must be finite",
            });
        }

        let s = &self.shrinkage;
        check_finite_non_negative("hom_reduction_coef", s.hom_reduction_coef)?;
        check_finite_non_negative("het_reduction_coef", s.het_reduction_coef)?;
        check_finite_positive("sigma_power", s.sigma_power)?;
        for &m in &s.geo_ratio_multiplier {
            check_finite_positive("geo_ratio_multiplier", m)?;
        }
        for &d in &s.geo_ratio_divisor {
            check_finite_positive("geo_ratio_divisor", d)?;
        }
        Ok(())
    }
}

fn check_finite_positive(name: &'static str, value: f64) -> EMResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(EMError::InvalidOption { name, value, reason: "must be finite and > 0" });
    }
    Ok(())
}

fn check_finite_non_negative(name: &'static str, value: f64) -> EMResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(EMError::InvalidOption { name, value, reason: "must be finite and >= 0" });
    }
    Ok(())
}
