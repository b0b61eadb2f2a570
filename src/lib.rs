//! Cycle coherence engine.
//!
//! Computes a normalized coherence score expressing how closely a set of
//! observed or sampled periodic signals matches a catalog of reference
//! natural cycles (planetary rotation, lunation, orbital period, stellar
//! rotation, galactic year).
//!
//! # Architecture
//!
//! Three components, in dependency order:
//!
//! 1. **Registry** ([`CycleRegistry`]): immutable table of named cycles,
//!    each with a reference period, an importance weight, and a quality
//!    factor. Entries are validated at construction.
//! 2. **Sampler** ([`PeriodSampler`]): perturbs reference periods with
//!    independent multiplicative log-normal noise, scaled by a spread
//!    factor. Seedable for reproducible runs.
//! 3. **Scorer** ([`coherence_score`] / [`score_with_registry`]): a pure
//!    function aggregating per-cycle exponential resonance terms into a
//!    single score on a nominal 0-100 band.
//!
//! Externally measured periods can be fed straight to the scorer in place
//! of the sampler's synthetic output; the contract is identical either way.
//!
//! # Example
//!
//! ```
//! use cycle_coherence::{score_with_registry, CycleRegistry, PeriodSampler, DEFAULT_ALPHA};
//!
//! let registry = CycleRegistry::natural();
//! let mut sampler = PeriodSampler::new().with_seed(42);
//!
//! let observed = sampler
//!     .sample_periods(&registry.reference_periods(), 1.0)
//!     .expect("spread factor is valid");
//! let ct = score_with_registry(&registry, &observed, DEFAULT_ALPHA);
//! assert!(ct <= 100.0);
//!
//! // Zero spread reproduces the references exactly: a perfect match.
//! let exact = sampler
//!     .sample_periods(&registry.reference_periods(), 0.0)
//!     .expect("spread factor is valid");
//! let ct = score_with_registry(&registry, &exact, DEFAULT_ALPHA);
//! assert!((ct - 100.0).abs() < 1e-9);
//! ```

pub mod config;
pub mod cosmology;
pub mod error;
pub mod registry;
pub mod sampler;
pub mod scorer;
pub mod types;

pub use config::EngineConfig;
pub use cosmology::{synthetic_coherence_curve, w_cpl};
pub use error::{CoherenceError, CoherenceResult};
pub use registry::CycleRegistry;
pub use sampler::{PeriodSampler, NOISE_SIGMA};
pub use scorer::{
    coherence_score, resonance_kernel, score_with_registry, validate_reference_periods,
    DEFAULT_ALPHA, DEFAULT_OBSERVED_PERIOD, PERIOD_EPSILON,
};
pub use types::{CycleEntry, CycleMap};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
