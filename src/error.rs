//! Error types for the cycle coherence engine.
//!
//! This module is the single source of truth for all error types in the
//! crate. Every module that produces an error imports its error type from
//! here rather than defining it inline.
//!
//! Numeric edge cases inside the scorer (missing keys, degenerate reference
//! periods, a zero weight budget) never surface here; they resolve to the
//! documented fallback values. Errors are reserved for malformed
//! configuration caught at the boundary and for a broken noise model in the
//! sampler.

use thiserror::Error;

/// Convenient `Result` alias used throughout the crate.
pub type CoherenceResult<T> = Result<T, CoherenceError>;

/// Top-level error type for the cycle coherence engine.
#[derive(Debug, Error)]
pub enum CoherenceError {
    /// A configuration field or call parameter has an invalid value.
    #[error("Invalid value for `{field}`: {reason}")]
    InvalidValue {
        /// Name of the field or parameter.
        field: &'static str,
        /// Human-readable reason.
        reason: String,
    },

    /// A registry cycle entry is malformed.
    #[error("Invalid cycle `{name}`: {reason}")]
    InvalidCycle {
        /// Name of the offending cycle.
        name: String,
        /// Human-readable reason.
        reason: String,
    },

    /// The sampler's noise distribution could not be constructed.
    ///
    /// This indicates a broken caller (e.g. a non-finite sigma reaching the
    /// distribution), not a data edge case, and is the only condition the
    /// sampler treats as a hard failure.
    #[error("Noise model error: {message}")]
    NoiseModel {
        /// Description of the failure.
        message: String,
    },
}

impl CoherenceError {
    /// Construct a [`CoherenceError::InvalidValue`].
    pub fn invalid_value<S: Into<String>>(field: &'static str, reason: S) -> Self {
        CoherenceError::InvalidValue {
            field,
            reason: reason.into(),
        }
    }

    /// Construct a [`CoherenceError::InvalidCycle`].
    pub fn invalid_cycle<N: Into<String>, S: Into<String>>(name: N, reason: S) -> Self {
        CoherenceError::InvalidCycle {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Construct a [`CoherenceError::NoiseModel`].
    pub fn noise_model<S: Into<String>>(message: S) -> Self {
        CoherenceError::NoiseModel {
            message: message.into(),
        }
    }
}
