//! Validation tests to prove correctness of the coherence pipeline
//!
//! These tests run the registry, sampler, and scorer together and compare
//! the results against known mathematical values.

use cycle_coherence::{
    coherence_score, score_with_registry, CycleEntry, CycleMap, CycleRegistry, EngineConfig,
    PeriodSampler, DEFAULT_ALPHA,
};
use std::collections::BTreeMap;

fn registry_of(pairs: &[(&str, f64)]) -> CycleRegistry {
    let entries: BTreeMap<String, CycleEntry> = pairs
        .iter()
        .map(|&(name, period)| (name.to_string(), CycleEntry::new(period)))
        .collect();
    CycleRegistry::new(entries).expect("test catalog is valid")
}

/// Validate the full pipeline at zero spread against a perfect match
#[test]
fn validate_pipeline_exactness_at_zero_spread() {
    let registry = CycleRegistry::natural();
    let mut sampler = PeriodSampler::new().with_seed(11);

    let observed = sampler
        .sample_periods(&registry.reference_periods(), 0.0)
        .unwrap();
    let ct = score_with_registry(&registry, &observed, DEFAULT_ALPHA);

    println!("Zero-spread pipeline: Ct = {ct:.6}");
    assert!(
        (ct - 100.0).abs() < 1e-9,
        "zero spread must score a perfect match: {ct}"
    );
}

/// Validate that the pipeline stays inside the nominal band for
/// non-negative weights and unit qualities
#[test]
fn validate_pipeline_band_under_nominal_spread() {
    let registry = CycleRegistry::natural();
    let mut sampler = PeriodSampler::new().with_seed(23);

    for _ in 0..100 {
        let observed = sampler
            .sample_periods(&registry.reference_periods(), 1.0)
            .unwrap();
        let ct = score_with_registry(&registry, &observed, DEFAULT_ALPHA);
        assert!(
            (0.0..=100.0).contains(&ct),
            "score left the nominal band: {ct}"
        );
    }
}

/// Validate the documented two-cycle scenario: doubling one period
/// yields Ct ~ 56.77
#[test]
fn validate_doubled_period_scenario_end_to_end() {
    let registry = registry_of(&[("a", 10.0), ("b", 20.0)]);
    let mut observed = CycleMap::new();
    observed.insert("a".to_string(), 20.0);
    observed.insert("b".to_string(), 20.0);

    let ct = score_with_registry(&registry, &observed, 8.0);
    let expected = 100.0 * (1.0 + (-2.0_f64).exp()) / 2.0;

    println!("Doubled-period scenario: expected={expected:.4}, got={ct:.4}");
    assert!((ct - expected).abs() < 1e-9);
}

/// Validate that seeded pipelines are fully reproducible
#[test]
fn validate_seeded_pipeline_reproducibility() {
    let registry = CycleRegistry::natural();

    let run = |seed: u64| {
        let mut sampler = PeriodSampler::new().with_seed(seed);
        let observed = sampler
            .sample_periods(&registry.reference_periods(), 1.0)
            .unwrap();
        score_with_registry(&registry, &observed, DEFAULT_ALPHA)
    };

    let first = run(42);
    let second = run(42);
    assert!(
        (first - second).abs() < f64::EPSILON,
        "same seed must give the same score: {first} vs {second}"
    );
}

/// Validate sampled quality factors against the quality-ceiling formula
#[test]
fn validate_quality_ceiling_with_sampled_factors() {
    let registry = registry_of(&[("a", 10.0), ("b", 20.0)]);
    let reference = registry.reference_periods();
    let mut sampler = PeriodSampler::new().with_seed(5);

    // Zero sigma pins every quality factor at the mean.
    let qualities = sampler.sample_quality_factors(&reference, 0.8, 0.0).unwrap();
    let ct = coherence_score(
        &reference,
        &reference,
        &registry.weights(),
        &qualities,
        DEFAULT_ALPHA,
    );

    // Perfect frequency match, so the score sits exactly at the ceiling:
    // 100 * sum(w * q) / sum(|w|) = 100 * 1.6 / 2.0.
    println!("Quality ceiling: Ct = {ct:.4}");
    assert!((ct - 80.0).abs() < 1e-9, "expected 80.0, got {ct}");
}

/// Validate that a configured catalog drives the same pipeline as the
/// built-in registry
#[test]
fn validate_config_driven_pipeline() {
    let cfg = EngineConfig::default();
    cfg.validate().expect("default config is valid");

    let registry = cfg.registry().unwrap();
    let mut sampler = PeriodSampler::new().with_seed(17);
    let observed = sampler
        .sample_periods(&registry.reference_periods(), 0.0)
        .unwrap();

    let ct = score_with_registry(&registry, &observed, cfg.alpha);
    assert!((ct - 100.0).abs() < 1e-9);
}

/// Validate that widening the spread degrades the expected score
///
/// Individual draws are noisy, so compare means over many draws.
#[test]
fn validate_wider_spread_lowers_mean_score() {
    let registry = CycleRegistry::natural();
    let reference = registry.reference_periods();

    let mean_score = |spread: f64, seed: u64| {
        let mut sampler = PeriodSampler::new().with_seed(seed);
        let runs = 200;
        let total: f64 = (0..runs)
            .map(|_| {
                let observed = sampler.sample_periods(&reference, spread).unwrap();
                score_with_registry(&registry, &observed, DEFAULT_ALPHA)
            })
            .sum();
        total / f64::from(runs)
    };

    let tight = mean_score(0.2, 31);
    let wide = mean_score(2.0, 31);
    println!("Mean score: spread 0.2 -> {tight:.2}, spread 2.0 -> {wide:.2}");
    assert!(
        wide < tight,
        "wider spread should lower the mean score: {wide} !< {tight}"
    );
}
