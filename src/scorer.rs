//! Resonance coherence scoring.
//!
//! Computes a single normalized score expressing how closely a set of
//! observed periods matches a set of reference periods. Each cycle
//! contributes an exponential resonance term weighted by its importance and
//! quality factor; terms are aggregated and normalized by the total
//! absolute-weight budget onto a nominal 0-100 band.
//!
//! The scorer is a stateless pure function over its input mappings. Numeric
//! edge cases (missing keys, degenerate periods, a zero weight budget)
//! resolve to documented fallback values rather than errors; callers that
//! want strict behavior can run [`validate_reference_periods`] first.

use crate::error::{CoherenceError, CoherenceResult};
use crate::registry::CycleRegistry;
use crate::types::CycleMap;

/// Default decay sensitivity of the resonance kernel.
pub const DEFAULT_ALPHA: f64 = 8.0;

/// Guard against division by near-zero periods and frequencies.
pub const PERIOD_EPSILON: f64 = 1e-12;

/// Neutral fallback for a cycle missing from the observed mapping.
///
/// Deliberately 1.0 rather than 0.0 so a missing observation yields a
/// finite frequency instead of a division blow-up.
pub const DEFAULT_OBSERVED_PERIOD: f64 = 1.0;

/// Resonance kernel: `exp(-alpha * rel_error)` where `rel_error` is the
/// squared relative frequency deviation between the observed and reference
/// periods.
///
/// Equals 1.0 at a perfect frequency match and decays toward 0 as the
/// mismatch grows; `alpha` controls how sharply. An observed period at or
/// below [`PERIOD_EPSILON`] maps to zero frequency. A reference period at
/// or below [`PERIOD_EPSILON`] collapses the error term to 0.0, so the
/// kernel reports a full match for a degenerate reference. That is a
/// neutral fallback, not a genuine resonance.
#[must_use]
pub fn resonance_kernel(observed_period: f64, reference_period: f64, alpha: f64) -> f64 {
    let freq = if observed_period > PERIOD_EPSILON {
        1.0 / observed_period
    } else {
        0.0
    };
    let freq_ref = if reference_period > PERIOD_EPSILON {
        1.0 / reference_period
    } else {
        0.0
    };
    let rel_error = if freq_ref > PERIOD_EPSILON {
        let diff = freq - freq_ref;
        (diff * diff) / (freq_ref * freq_ref)
    } else {
        0.0
    };
    (-alpha * rel_error).exp()
}

/// Compute the aggregate coherence score over the reference key set.
///
/// - `observed_periods`: sampled or externally measured periods (days).
///   Missing cycles default to [`DEFAULT_OBSERVED_PERIOD`].
/// - `reference_periods`: authoritative key set; a cycle absent here is
///   never scored even if present in the other mappings.
/// - `weights`: per-cycle importance. Missing cycles default to 0.0 and
///   therefore contribute nothing.
/// - `quality_factors`: per-cycle reliability multipliers. Missing cycles
///   default to 1.0.
/// - `alpha`: decay sensitivity of the resonance kernel.
///
/// The result is `100 * sum(weight * quality * kernel) / sum(|weight|)`,
/// or 0.0 when the absolute-weight budget is zero. A perfect match across
/// all cycles yields exactly 100.0 only when every quality factor is 1.0;
/// otherwise the ceiling is `100 * sum(weight * quality) / sum(|weight|)`.
#[must_use]
pub fn coherence_score(
    observed_periods: &CycleMap,
    reference_periods: &CycleMap,
    weights: &CycleMap,
    quality_factors: &CycleMap,
    alpha: f64,
) -> f64 {
    let mut raw = 0.0;
    let mut max_possible = 0.0;

    for (name, &reference_period) in reference_periods {
        let observed = observed_periods
            .get(name)
            .copied()
            .unwrap_or(DEFAULT_OBSERVED_PERIOD);
        let weight = weights.get(name).copied().unwrap_or(0.0);
        let quality = quality_factors.get(name).copied().unwrap_or(1.0);

        raw += weight * quality * resonance_kernel(observed, reference_period, alpha);
        max_possible += weight.abs();
    }

    if max_possible > 0.0 {
        100.0 * raw / max_possible
    } else {
        0.0
    }
}

/// Score observed periods against a [`CycleRegistry`].
///
/// Equivalent to [`coherence_score`] with the registry's reference periods,
/// weights, and quality factors, without materializing the intermediate
/// mappings.
#[must_use]
pub fn score_with_registry(
    registry: &CycleRegistry,
    observed_periods: &CycleMap,
    alpha: f64,
) -> f64 {
    let mut raw = 0.0;
    let mut max_possible = 0.0;

    for (name, entry) in registry.entries() {
        let observed = observed_periods
            .get(name)
            .copied()
            .unwrap_or(DEFAULT_OBSERVED_PERIOD);
        raw += entry.weight * entry.quality * resonance_kernel(observed, entry.period_days, alpha);
        max_possible += entry.weight.abs();
    }

    if max_possible > 0.0 {
        100.0 * raw / max_possible
    } else {
        0.0
    }
}

/// Strict validation mode for reference periods.
///
/// Flags the first cycle whose reference period is non-finite or at or
/// below [`PERIOD_EPSILON`]. [`coherence_score`] itself never rejects such
/// entries; it degrades them to a zero-error term.
pub fn validate_reference_periods(reference_periods: &CycleMap) -> CoherenceResult<()> {
    for (name, &period) in reference_periods {
        if !period.is_finite() || period <= PERIOD_EPSILON {
            return Err(CoherenceError::invalid_cycle(
                name.clone(),
                format!("reference period must be finite and > {PERIOD_EPSILON:e}, got {period}"),
            ));
        }
    }
    Ok(())
}
