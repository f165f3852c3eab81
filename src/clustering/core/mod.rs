//! core — shared EM data records, density kernel, and input validation.
//!
//! Purpose
//! -------
//! Collect the leaf building blocks of the constrained EM genotype clusterer:
//! the tail-robust density, the configuration/prior/seed/estimate records,
//! the scratch workspace threaded through the E/M steps, and the contrast
//! transform that produces the engine's input signal. The engine module
//! builds the iteration, posterior and seed search on top of these.
//!
//! Key behaviors
//! -------------
//! - Evaluate the Gaussian-with-exponential-tail kernel ([`gaussian_tail`],
//!   [`probability`]) and expose the shared sentinels ([`NA`], [`MAX_VALUE`],
//!   [`EPSILON`]).
//! - Describe a run: [`EMOptions`] (with [`LossFunction`] and
//!   [`SigmaShrinkage`]), the seed-search [`EMPrior`], a starting [`EMSeed`],
//!   and the resulting [`EMEstimate`] with its [`GenotypeCall`]s.
//! - Validate inputs ([`validate_data`], [`validate_seed`]) before any state
//!   is mutated, clamping seeds into their own bounds.
//! - Hold per-run scratch matrices in a [`FitState`].
//!
//! Invariants & assumptions
//! ------------------------
//! - Cluster count `K ∈ {1, 2, 3}`; per-cluster arrays have length `K` and
//!   per-sample arrays length `N`. Length mismatches are reported as
//!   `EMError` values rather than truncated.
//! - Cluster indices are ordered by expected mean: 0 = BB, 1 = AB, 2 = AA.
//! - Standard deviations handed to the density are strictly positive; the
//!   seed bounds are the only guard.
//!
//! Conventions
//! -----------
//! - This module performs no logging and no I/O; everything is `f64` on
//!   `ndarray` containers.
//!
//! Downstream usage
//! ----------------
//! - Callers construct options/prior/seed here, hand them to
//!   `clustering::engine::PrimeEM`, and read back an [`EMEstimate`].
//! - Most callers import the [`prelude`].

pub mod contrast;
pub mod density;
pub mod estimate;
pub mod options;
pub mod prior;
pub mod seed;
pub mod validation;
pub mod workspace;

// ---- Re-exports (primary public surface) ----------------------------------

pub use self::contrast::{contrast_series, contrast_transform};
pub use self::density::{EPSILON, MAX_VALUE, NA, gaussian_tail, probability};
pub use self::estimate::{ClusterParams, EMEstimate, GenotypeCall};
pub use self::options::{EMOptions, GeoClamp, LossFunction, SigmaShrinkage};
pub use self::prior::EMPrior;
pub use self::seed::EMSeed;
pub use self::validation::{clamp_to_bounds, validate_data, validate_seed};
pub use self::workspace::FitState;

// ---- Optional convenience prelude for downstream crates -------------------

pub mod prelude {
    pub use super::contrast::{contrast_series, contrast_transform};
    pub use super::density::{NA, gaussian_tail, probability};
    pub use super::estimate::{EMEstimate, GenotypeCall};
    pub use super::options::{EMOptions, GeoClamp, LossFunction, SigmaShrinkage};
    pub use super::prior::EMPrior;
    pub use super::seed::EMSeed;
    pub use super::workspace::FitState;
}
