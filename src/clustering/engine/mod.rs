//! engine — the constrained EM iteration, posterior, scoring and seed search.
//!
//! Purpose
//! -------
//! Build the genotype clustering pipeline on top of `clustering::core`:
//! one E-step/M-step pair per iteration, a tolerance-based stopping rule, a
//! final posterior that turns responsibilities into calls and confidences,
//! Fisher-discriminant QC scores, an empirical seed grid, and loss-based
//! selection among the fits started from each seed. [`PrimeEM`] drives it
//! all for one sample sequence.
//!
//! Key behaviors
//! -------------
//! - [`e_step`] computes responsibilities and drops clusters whose mass
//!   falls below the drop threshold.
//! - [`m_step`] updates and re-bounds means, weights and σs, shrinking the
//!   σ ceilings of close three-cluster fits.
//! - [`compute_optimal_estimates`] assigns calls with a geometric
//!   consistency check and accumulates the capped negative log-likelihood.
//! - [`compute_fld`] scores cluster separation; [`is_better`] compares fits
//!   under the configured [`LossFunction`](crate::clustering::core::LossFunction).
//! - [`generate_empirical_seeds`] searches the 45-point prior grid.
//! - [`cluster_peaks`], [`cluster_valley`], [`contrast_density`] and
//!   [`hom_hi_lo`] reuse the engine for sample-level contrast QC.
//!
//! Invariants & assumptions
//! ------------------------
//! - Step functions take the scratch [`FitState`](crate::clustering::core::FitState)
//!   explicitly; the required order is E-step → M-step per iteration and a
//!   final-pass E-step before the posterior.
//! - Seed search and the σ-ceiling shrinkage are three-cluster only; every
//!   other step works for `K ∈ {1, 2, 3}`.
//! - All computations are deterministic.
//!
//! Conventions
//! -----------
//! - Step functions are free functions over `ndarray` views and the records
//!   from `clustering::core`; only [`PrimeEM`] holds state and logs.
//!
//! Downstream usage
//! ----------------
//! - Most callers construct a [`PrimeEM`], call `set_data`, then either
//!   `go_prime_em` or `em_estimate(&seed)`, and read `estimate()`.
//! - The step functions are public for callers that need to drive or
//!   inspect individual iterations.

pub mod convergence;
pub mod em;
pub mod estep;
pub mod fld;
pub mod mstep;
pub mod peaks;
pub mod posterior;
pub mod seeds;
pub mod selection;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::convergence::has_changed;
pub use self::em::PrimeEM;
pub use self::estep::{FAR_TAIL_Z, e_step};
pub use self::fld::compute_fld;
pub use self::mstep::{adjust_mu, adjust_sigma, m_step, update_mu, update_sigma, update_weight};
pub use self::peaks::{HomHiLo, cluster_peaks, cluster_valley, contrast_density, hom_hi_lo};
pub use self::posterior::{LOG_LIKELIHOOD_CAP, compute_optimal_estimates};
pub use self::seeds::generate_empirical_seeds;
pub use self::selection::is_better;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::em::PrimeEM;
    pub use super::peaks::{HomHiLo, cluster_peaks, hom_hi_lo};
}
