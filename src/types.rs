//! Domain types for cycle coherence scoring.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-cycle mapping from cycle name to a scalar value (periods in days,
/// weights, or quality factors).
///
/// A `BTreeMap` gives deterministic iteration order, but consumers must not
/// attach meaning to the ordering; all per-cycle mappings are simply keyed
/// by the same cycle-name universe.
pub type CycleMap = BTreeMap<String, f64>;

/// One row of the reference cycle registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CycleEntry {
    /// Nominal duration of one cycle, in days. Strictly positive.
    pub period_days: f64,
    /// Relative importance of the cycle in the aggregate score. May be
    /// negative, zero, or positive.
    pub weight: f64,
    /// Reliability multiplier capping the cycle's maximum contribution.
    /// Non-negative.
    pub quality: f64,
}

impl CycleEntry {
    /// Create an entry with unit weight and unit quality.
    #[must_use]
    pub fn new(period_days: f64) -> Self {
        Self {
            period_days,
            weight: 1.0,
            quality: 1.0,
        }
    }
}
