//! Synthetic period sampling.
//!
//! Perturbs reference periods with independent multiplicative log-normal
//! noise to produce observed-period mappings for scoring. The noise scale
//! is controlled by a caller-supplied spread factor; a spread of 0.0
//! reproduces the reference periods exactly.
//!
//! The random source is owned by the sampler and seedable for reproducible
//! tests, never a shared global. Each call returns a fresh mapping.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, LogNormal, Normal};
use tracing::debug;

use crate::error::{CoherenceError, CoherenceResult};
use crate::types::CycleMap;

/// Log-space standard deviation of the multiplicative noise at nominal
/// spread (`spread_factor == 1.0`).
pub const NOISE_SIGMA: f64 = 0.3;

/// Draws perturbed period estimates from a set of reference periods.
pub struct PeriodSampler {
    /// Random number generator.
    rng: StdRng,
}

impl PeriodSampler {
    /// Create a sampler seeded from system entropy.
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Replace the random source with a deterministic seed (for testing
    /// and reproducible runs).
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// Sample one perturbed period per reference cycle.
    ///
    /// - `reference_periods`: mapping of cycle name to reference period.
    /// - `spread_factor`: non-negative scale applied to the log-normal
    ///   sigma. 1.0 is nominal spread, 0.0 reproduces the reference
    ///   periods exactly, values above 1.0 widen the distribution.
    ///
    /// Each cycle's noise factor is drawn independently; no cross-cycle
    /// correlation is modeled. The returned mapping has the same key set
    /// as the input and strictly positive values (log-normal support
    /// excludes zero and negatives).
    ///
    /// # Errors
    ///
    /// Returns [`CoherenceError::InvalidValue`] for a negative or
    /// non-finite spread factor, and [`CoherenceError::NoiseModel`] if the
    /// noise distribution cannot be constructed.
    pub fn sample_periods(
        &mut self,
        reference_periods: &CycleMap,
        spread_factor: f64,
    ) -> CoherenceResult<CycleMap> {
        if !spread_factor.is_finite() || spread_factor < 0.0 {
            return Err(CoherenceError::invalid_value(
                "spread_factor",
                format!("must be finite and >= 0.0, got {spread_factor}"),
            ));
        }

        let sigma = NOISE_SIGMA * spread_factor;
        let noise = LogNormal::new(0.0, sigma)
            .map_err(|e| CoherenceError::noise_model(format!("log-normal(0, {sigma}): {e}")))?;

        let mut observed = CycleMap::new();
        for (name, &period) in reference_periods {
            let factor = noise.sample(&mut self.rng);
            observed.insert(name.clone(), period * factor);
        }

        debug!(
            "sampled {} periods at spread factor {spread_factor}",
            observed.len()
        );
        Ok(observed)
    }

    /// Sample one quality factor per reference cycle from a normal
    /// distribution, clamped to be non-negative.
    ///
    /// - `reference_periods`: supplies the cycle-name key set.
    /// - `q_mean`: mean quality factor. Non-negative.
    /// - `q_sigma`: standard deviation of the draw. Non-negative; 0.0
    ///   yields exactly `q_mean` for every cycle.
    ///
    /// # Errors
    ///
    /// Returns [`CoherenceError::InvalidValue`] for negative or non-finite
    /// parameters, and [`CoherenceError::NoiseModel`] if the distribution
    /// cannot be constructed.
    pub fn sample_quality_factors(
        &mut self,
        reference_periods: &CycleMap,
        q_mean: f64,
        q_sigma: f64,
    ) -> CoherenceResult<CycleMap> {
        if !q_mean.is_finite() || q_mean < 0.0 {
            return Err(CoherenceError::invalid_value(
                "q_mean",
                format!("must be finite and >= 0.0, got {q_mean}"),
            ));
        }
        if !q_sigma.is_finite() || q_sigma < 0.0 {
            return Err(CoherenceError::invalid_value(
                "q_sigma",
                format!("must be finite and >= 0.0, got {q_sigma}"),
            ));
        }

        let noise = Normal::new(q_mean, q_sigma)
            .map_err(|e| CoherenceError::noise_model(format!("normal({q_mean}, {q_sigma}): {e}")))?;

        let mut qualities = CycleMap::new();
        for name in reference_periods.keys() {
            let q: f64 = noise.sample(&mut self.rng);
            qualities.insert(name.clone(), q.max(0.0));
        }
        Ok(qualities)
    }
}

impl Default for PeriodSampler {
    fn default() -> Self {
        Self::new()
    }
}
