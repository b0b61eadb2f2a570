//! Engine configuration.
//!
//! [`EngineConfig`] is the single immutable parameter container for a
//! scoring session: the decay sensitivity, the quality-sampling moments,
//! and the cycle catalog. It is constructed explicitly and passed by
//! reference into sampler and scorer calls; there is no process-wide
//! default state.
//!
//! The struct is serializable via [`serde`] so an external configuration
//! layer can persist it. The core itself never reads files or environment
//! variables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{CoherenceError, CoherenceResult};
use crate::registry::{natural_cycles, validate_entry, CycleRegistry};
use crate::scorer::DEFAULT_ALPHA;
use crate::types::CycleEntry;

/// Complete configuration for a coherence scoring session.
///
/// All fields have documented defaults. Use [`EngineConfig::default()`] as
/// a starting point and override individual fields as needed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Decay sensitivity of the resonance kernel. Strictly positive.
    /// Default: **8.0**.
    pub alpha: f64,

    /// Mean of the sampled quality-factor distribution. Default: **0.8**.
    pub q_mean: f64,

    /// Standard deviation of the sampled quality-factor distribution.
    /// Default: **0.12**.
    pub q_sigma: f64,

    /// Cycle catalog: reference period, weight, and quality factor per
    /// named cycle. Default: the built-in natural-cycle catalog.
    pub cycles: BTreeMap<String, CycleEntry>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            alpha: DEFAULT_ALPHA,
            q_mean: 0.8,
            q_sigma: 0.12,
            cycles: natural_cycles(),
        }
    }
}

impl EngineConfig {
    /// Validate all fields and return an error describing the first
    /// problem found, or `Ok(())` if the configuration is coherent.
    ///
    /// # Validated invariants
    ///
    /// - `alpha` must be finite and strictly positive.
    /// - `q_mean` must be finite and non-negative.
    /// - `q_sigma` must be finite and non-negative.
    /// - `cycles` must be non-empty, and every entry must satisfy the
    ///   registry rules (positive finite period, finite weight,
    ///   non-negative finite quality).
    pub fn validate(&self) -> CoherenceResult<()> {
        if !self.alpha.is_finite() || self.alpha <= 0.0 {
            return Err(CoherenceError::invalid_value(
                "alpha",
                format!("must be finite and > 0.0, got {}", self.alpha),
            ));
        }
        if !self.q_mean.is_finite() || self.q_mean < 0.0 {
            return Err(CoherenceError::invalid_value(
                "q_mean",
                format!("must be finite and >= 0.0, got {}", self.q_mean),
            ));
        }
        if !self.q_sigma.is_finite() || self.q_sigma < 0.0 {
            return Err(CoherenceError::invalid_value(
                "q_sigma",
                format!("must be finite and >= 0.0, got {}", self.q_sigma),
            ));
        }
        if self.cycles.is_empty() {
            return Err(CoherenceError::invalid_value(
                "cycles",
                "at least one cycle must be configured",
            ));
        }
        for (name, entry) in &self.cycles {
            validate_entry(name, entry)?;
        }
        Ok(())
    }

    /// Build the validated [`CycleRegistry`] described by this
    /// configuration.
    pub fn registry(&self) -> CoherenceResult<CycleRegistry> {
        CycleRegistry::new(self.cycles.clone())
    }
}
