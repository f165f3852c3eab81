//! PrimeEM — the constrained EM driver and seed-search orchestration.
//!
//! Purpose
//! -------
//! Own one sample sequence together with its options and prior, and run the
//! full fitting pipeline on it: from an explicit seed ([`PrimeEM::em_estimate`]),
//! without iterating ([`PrimeEM::posterior_from_seed`]), or from the
//! empirical seed search with loss-based model selection
//! ([`PrimeEM::go_prime_em`]).
//!
//! Key behaviors
//! -------------
//! - A run validates the seed, alternates E- and M-steps until the
//!   parameters stop moving or `max_iter` is reached, then performs a final
//!   E-step, the posterior and FLD scoring.
//! - Every fit is built on a fresh estimate and only stored once it has
//!   finished, so a failed call leaves the previous estimate in place.
//! - Model selection scores fits with `λ = √N`; the first seed's fit is the
//!   initial incumbent and only strictly better fits replace it.
//!
//! Invariants & assumptions
//! ------------------------
//! - Data are non-empty and finite (enforced by [`PrimeEM::set_data`]).
//! - Options are validated on construction and on every replacement.
//! - The engine is single-threaded; independent markers use independent
//!   engines.
//!
//! Conventions
//! -----------
//! - Logging goes through an injected `slog::Logger`, discarded by default.
//!   With the `obs_slog` feature and `verbose = true` the engine builds its
//!   own terminal logger.
use crate::clustering::{
    core::{
        estimate::EMEstimate,
        options::EMOptions,
        prior::EMPrior,
        seed::EMSeed,
        validation::{validate_data, validate_seed},
        workspace::FitState,
    },
    engine::{
        convergence::has_changed, estep::e_step, fld::compute_fld, mstep::m_step,
        posterior::compute_optimal_estimates, seeds::generate_empirical_seeds,
        selection::is_better,
    },
    errors::{EMError, EMResult},
};
use ndarray::ArrayView1;
use slog::{Discard, Logger, debug, o, trace};

/// Constrained EM genotype clusterer for one sample sequence.
///
/// Fields are private; use the setters so that options stay validated and
/// the stored estimate is reset consistently.
#[derive(Debug, Clone)]
pub struct PrimeEM {
    data: Vec<f64>,
    options: EMOptions,
    prior: EMPrior,
    estimate: EMEstimate,
    seeds: Vec<EMSeed>,
    logger: Logger,
}

impl PrimeEM {
    /// Engine with validated `options`, the default prior for its cluster
    /// count, and no data.
    ///
    /// Errors
    /// ------
    /// - Any `EMError` from [`EMOptions::validate`].
    pub fn new(options: EMOptions) -> EMResult<Self> {
        options.validate()?;
        let k = options.n_clusters;
        let logger = default_logger(&options);
        Ok(PrimeEM {
            data: Vec::new(),
            prior: EMPrior::for_clusters(k),
            estimate: EMEstimate::new(k, 0),
            seeds: Vec::new(),
            options,
            logger,
        })
    }

    /// Replace the sample sequence and clear the stored estimate.
    ///
    /// Errors
    /// ------
    /// - `EMError::EmptyData` / `EMError::NonFiniteData`; nothing is replaced.
    pub fn set_data(&mut self, data: &[f64]) -> EMResult<()> {
        validate_data(data)?;
        self.data = data.to_vec();
        self.estimate = EMEstimate::new(self.options.n_clusters, self.data.len());
        self.seeds.clear();
        Ok(())
    }

    /// Replace the options.
    ///
    /// The prior is reset to [`EMPrior::for_clusters`] for the new cluster
    /// count and the stored estimate is cleared.
    pub fn set_options(&mut self, options: EMOptions) -> EMResult<()> {
        options.validate()?;
        #[cfg(feature = "obs_slog")]
        if options.verbose && !self.options.verbose {
            self.logger = default_logger(&options);
        }
        self.prior = EMPrior::for_clusters(options.n_clusters);
        self.estimate = EMEstimate::new(options.n_clusters, self.data.len());
        self.seeds.clear();
        self.options = options;
        Ok(())
    }

    /// Replace the prior used by the seed search and clear the estimate.
    ///
    /// Consistency with the cluster count is checked when the prior is used.
    pub fn set_prior(&mut self, prior: EMPrior) {
        self.prior = prior;
        self.estimate = EMEstimate::new(self.options.n_clusters, self.data.len());
    }

    /// Set the confidence above which samples become no-calls.
    ///
    /// Errors
    /// ------
    /// - `EMError::InvalidOption` when `threshold` is not finite; the
    ///   previous threshold is kept.
    pub fn set_threshold(&mut self, threshold: f64) -> EMResult<()> {
        if !threshold.is_finite() {
            return Err(EMError::InvalidOption {
                name: "confidence_threshold",
                value: threshold,
                reason: "must be finite",
            });
        }
        self.options.confidence_threshold = threshold;
        Ok(())
    }

    /// Route engine events to `logger`.
    pub fn set_logger(&mut self, logger: Logger) {
        self.logger = logger;
    }

    /// Require every prior array to match the configured cluster count.
    pub fn check_prior(&self) -> EMResult<()> {
        self.prior.check_consistency(self.options.n_clusters)
    }

    /// Run EM from `seed` and store the finished estimate.
    ///
    /// Errors
    /// ------
    /// - `EMError::EmptyData` when no data have been set.
    /// - `EMError::SeedLengthMismatch` when the seed does not match the
    ///   cluster count.
    pub fn em_estimate(&mut self, seed: &EMSeed) -> EMResult<&EMEstimate> {
        self.estimate = self.fit(seed, true)?;
        Ok(&self.estimate)
    }

    /// Score `seed` as-is: validation, final E-step, posterior and FLD, with
    /// no EM iterations.
    pub fn posterior_from_seed(&mut self, seed: &EMSeed) -> EMResult<&EMEstimate> {
        self.estimate = self.fit(seed, false)?;
        Ok(&self.estimate)
    }

    /// Build and store the empirical seed list for the current data.
    ///
    /// Errors
    /// ------
    /// - `EMError::EmptyData`, `EMError::UnsupportedClusterCount` or
    ///   `EMError::PriorLengthMismatch`.
    pub fn generate_empirical_seeds(&mut self) -> EMResult<&[EMSeed]> {
        self.require_data()?;
        self.seeds = generate_empirical_seeds(&self.data, &self.prior, &self.options)?;
        debug!(self.logger, "empirical seeds generated"; "seeds" => self.seeds.len());
        Ok(&self.seeds)
    }

    /// Seed search followed by one EM run per seed, keeping the best fit.
    ///
    /// Returns
    /// -------
    /// `EMResult<&EMEstimate>`
    ///   The selected estimate, also stored on the engine.
    ///
    /// Errors
    /// ------
    /// - `EMError::PriorLengthMismatch` when the prior is inconsistent.
    /// - Any error of [`PrimeEM::generate_empirical_seeds`].
    pub fn go_prime_em(&mut self) -> EMResult<&EMEstimate> {
        self.check_prior()?;
        self.generate_empirical_seeds()?;

        let lambda = self.lambda();
        let mut best: Option<(usize, EMEstimate)> = None;
        for (index, seed) in self.seeds.iter().enumerate() {
            let fit = self.fit(seed, true)?;
            let replace = match &best {
                None => true,
                Some((_, incumbent)) => {
                    is_better(&fit, incumbent, self.options.loss_function, lambda)
                }
            };
            if replace {
                best = Some((index, fit));
            }
        }

        let (index, estimate) = best.ok_or(EMError::EmptyData)?;
        debug!(self.logger, "best seed selected";
            "seed" => index,
            "candidates" => self.seeds.len(),
            "loss" => self.options.loss_function.as_str()
        );
        self.estimate = estimate;
        Ok(&self.estimate)
    }

    /// The most recently stored estimate.
    pub fn estimate(&self) -> &EMEstimate {
        &self.estimate
    }

    /// Seeds from the last seed search.
    pub fn seeds(&self) -> &[EMSeed] {
        &self.seeds
    }

    pub fn options(&self) -> &EMOptions {
        &self.options
    }

    pub fn prior(&self) -> &EMPrior {
        &self.prior
    }

    pub fn data(&self) -> &[f64] {
        &self.data
    }

    /// BIC penalty scale `√N`.
    pub fn lambda(&self) -> f64 {
        (self.data.len() as f64).sqrt()
    }

    fn require_data(&self) -> EMResult<()> {
        if self.data.is_empty() { Err(EMError::EmptyData) } else { Ok(()) }
    }

    /// One full fit from `seed`; `iterate = false` skips the EM loop.
    fn fit(&self, seed: &EMSeed, iterate: bool) -> EMResult<EMEstimate> {
        self.require_data()?;
        let opts = &self.options;
        let n = self.data.len();
        let data = ArrayView1::from(self.data.as_slice());

        let mut est = validate_seed(seed, opts.n_clusters, n)?;
        let mut state = FitState::new(n, opts.n_clusters);

        let max_iter = if iterate { opts.max_iter } else { 0 };
        let mut prev = est.params();
        let mut iteration = 0;
        while iteration < max_iter {
            let dropped = e_step(data, &mut est, opts, &mut state, false);
            if !dropped.is_empty() {
                trace!(self.logger, "clusters dropped";
                    "iteration" => iteration, "clusters" => ?dropped);
            }
            m_step(data, &mut est, &state, seed, opts);

            if !has_changed(&prev, &est, opts.tolerance, iteration) {
                est.converged = true;
                break;
            }
            prev = est.params();
            iteration += 1;
        }
        est.iterations = if est.converged { iteration + 1 } else { iteration };

        e_step(data, &mut est, opts, &mut state, true);
        compute_optimal_estimates(data, &mut est, &state, opts);
        compute_fld(&mut est);

        debug!(self.logger, "EM fit finished";
            "iterations" => est.iterations,
            "converged" => est.converged,
            "active" => est.n_active(),
            "log_likelihood" => est.log_likelihood,
            "separation" => est.separation
        );
        Ok(est)
    }
}

#[cfg(feature = "obs_slog")]
fn default_logger(options: &EMOptions) -> Logger {
    if options.verbose {
        crate::utils::terminal_logger()
    } else {
        Logger::root(Discard, o!())
    }
}

#[cfg(not(feature = "obs_slog"))]
fn default_logger(_options: &EMOptions) -> Logger {
    Logger::root(Discard, o!())
}
