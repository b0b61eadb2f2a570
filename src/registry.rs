//! Reference cycle registry.
//!
//! Holds the canonical set of named natural cycles with their reference
//! periods, a-priori weights, and quality factors. The registry is a
//! passive data holder: constructed once, validated at the boundary, and
//! read-only thereafter.

use std::collections::BTreeMap;

use crate::error::{CoherenceError, CoherenceResult};
use crate::scorer::PERIOD_EPSILON;
use crate::types::{CycleEntry, CycleMap};

/// Built-in catalog of natural cycles with reference periods in days.
const NATURAL_CYCLES: [(&str, f64); 5] = [
    ("planetary_rotation", 1.0),
    ("lunation", 29.53),
    ("planetary_orbit", 365.25),
    ("stellar_rotation", 25.0),
    ("galactic_year", 230.0e6 * 365.0),
];

/// Immutable table of named cycles.
#[derive(Debug, Clone)]
pub struct CycleRegistry {
    entries: BTreeMap<String, CycleEntry>,
}

impl CycleRegistry {
    /// Create a registry from a set of cycle entries.
    ///
    /// Every entry is validated at this boundary: reference periods must be
    /// finite and greater than [`PERIOD_EPSILON`], weights must be finite,
    /// and quality factors must be finite and non-negative. Degenerate
    /// periods are rejected here rather than silently carried into the
    /// sampler.
    pub fn new(entries: BTreeMap<String, CycleEntry>) -> CoherenceResult<Self> {
        for (name, entry) in &entries {
            validate_entry(name, entry)?;
        }
        Ok(Self { entries })
    }

    /// Create the built-in natural-cycle registry (planetary rotation,
    /// lunation, planetary orbit, stellar rotation, galactic year), each
    /// with unit weight and unit quality.
    #[must_use]
    pub fn natural() -> Self {
        Self {
            entries: natural_cycles(),
        }
    }

    /// Full entry table, keyed by cycle name.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, CycleEntry> {
        &self.entries
    }

    /// Look up a single cycle by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CycleEntry> {
        self.entries.get(name)
    }

    /// Fresh mapping of cycle name to reference period (days).
    #[must_use]
    pub fn reference_periods(&self) -> CycleMap {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.period_days))
            .collect()
    }

    /// Fresh mapping of cycle name to weight.
    #[must_use]
    pub fn weights(&self) -> CycleMap {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.weight))
            .collect()
    }

    /// Fresh mapping of cycle name to quality factor.
    #[must_use]
    pub fn quality_factors(&self) -> CycleMap {
        self.entries
            .iter()
            .map(|(name, entry)| (name.clone(), entry.quality))
            .collect()
    }

    /// Number of registered cycles.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the registry contains no cycles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether a cycle with the given name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }
}

/// Build the built-in catalog as an entry table.
pub(crate) fn natural_cycles() -> BTreeMap<String, CycleEntry> {
    NATURAL_CYCLES
        .iter()
        .map(|&(name, period_days)| (name.to_string(), CycleEntry::new(period_days)))
        .collect()
}

/// Validate one registry entry, naming the offending cycle on failure.
pub(crate) fn validate_entry(name: &str, entry: &CycleEntry) -> CoherenceResult<()> {
    if !entry.period_days.is_finite() || entry.period_days <= PERIOD_EPSILON {
        return Err(CoherenceError::invalid_cycle(
            name,
            format!(
                "period_days must be finite and > {PERIOD_EPSILON:e}, got {}",
                entry.period_days
            ),
        ));
    }
    if !entry.weight.is_finite() {
        return Err(CoherenceError::invalid_cycle(
            name,
            format!("weight must be finite, got {}", entry.weight),
        ));
    }
    if !entry.quality.is_finite() || entry.quality < 0.0 {
        return Err(CoherenceError::invalid_cycle(
            name,
            format!("quality must be finite and >= 0.0, got {}", entry.quality),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn natural_registry_has_five_cycles() {
        let registry = CycleRegistry::natural();
        assert_eq!(registry.len(), 5);
        assert!(!registry.is_empty());
        assert!(registry.contains("lunation"));
        assert!(registry.contains("galactic_year"));
        assert!(!registry.contains("tidal_bulge"));
    }

    #[test]
    fn natural_registry_periods_match_catalog() {
        let registry = CycleRegistry::natural();
        let lunation = registry.get("lunation").unwrap();
        assert!((lunation.period_days - 29.53).abs() < f64::EPSILON);
        let orbit = registry.get("planetary_orbit").unwrap();
        assert!((orbit.period_days - 365.25).abs() < f64::EPSILON);
    }

    #[test]
    fn natural_registry_has_unit_weights_and_qualities() {
        let registry = CycleRegistry::natural();
        for entry in registry.entries().values() {
            assert!((entry.weight - 1.0).abs() < f64::EPSILON);
            assert!((entry.quality - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn map_views_share_the_key_set() {
        let registry = CycleRegistry::natural();
        let periods = registry.reference_periods();
        let weights = registry.weights();
        let qualities = registry.quality_factors();
        assert_eq!(periods.len(), registry.len());
        for name in periods.keys() {
            assert!(weights.contains_key(name));
            assert!(qualities.contains_key(name));
        }
    }

    #[test]
    fn zero_period_is_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert("flat".to_string(), CycleEntry::new(0.0));
        let err = CycleRegistry::new(entries).unwrap_err();
        assert!(err.to_string().contains("flat"), "error should name the cycle");
    }

    #[test]
    fn negative_period_is_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert("backwards".to_string(), CycleEntry::new(-1.0));
        assert!(CycleRegistry::new(entries).is_err());
    }

    #[test]
    fn nan_weight_is_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "noisy".to_string(),
            CycleEntry {
                period_days: 1.0,
                weight: f64::NAN,
                quality: 1.0,
            },
        );
        assert!(CycleRegistry::new(entries).is_err());
    }

    #[test]
    fn negative_quality_is_rejected() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "dubious".to_string(),
            CycleEntry {
                period_days: 1.0,
                weight: 1.0,
                quality: -0.1,
            },
        );
        assert!(CycleRegistry::new(entries).is_err());
    }

    #[test]
    fn negative_weight_is_allowed() {
        let mut entries = BTreeMap::new();
        entries.insert(
            "anticorrelated".to_string(),
            CycleEntry {
                period_days: 10.0,
                weight: -0.5,
                quality: 1.0,
            },
        );
        assert!(CycleRegistry::new(entries).is_ok());
    }

    #[test]
    fn empty_registry_is_allowed() {
        let registry = CycleRegistry::new(BTreeMap::new()).unwrap();
        assert!(registry.is_empty());
    }
}
