//! clustering — constrained EM genotype clustering on a one-dimensional signal.
//!
//! Purpose
//! -------
//! Assign AA/AB/BB/no-call genotypes to samples from their allele contrast
//! values by fitting a bounded mixture of tail-robust Gaussians with EM.
//! Starting points come either from the caller or from an empirical search
//! over a prior grid, and competing fits are ranked by a configurable loss.
//!
//! Key behaviors
//! -------------
//! - `core` holds the records (options, prior, seed, estimate), the density
//!   kernel, validation and the contrast transform.
//! - `engine` holds the E/M steps, posterior, FLD scoring, seed search,
//!   model selection and the [`PrimeEM`] driver.
//! - `errors` defines [`EMError`] and [`EMResult`].
//!
//! Invariants & assumptions
//! ------------------------
//! - One to three clusters, ordered BB, AB, AA by expected contrast.
//! - Inputs are validated before any engine state changes.
//!
//! Downstream usage
//! ----------------
//! - `use rust_genotyping::clustering::prelude::*;` brings the records, the
//!   driver and the error types into scope.

pub mod core;
pub mod engine;
pub mod errors;

pub use self::engine::PrimeEM;
pub use self::errors::{EMError, EMResult};

pub mod prelude {
    pub use super::core::prelude::*;
    pub use super::engine::prelude::*;
    pub use super::errors::{EMError, EMResult};
}
