//! Cosmology demonstration curves.
//!
//! Curve generators consumed by an external display layer: the CPL
//! dark-energy equation of state and a synthetic coherence-vs-redshift
//! demonstration signal. Pure functions, no I/O.

/// Default CPL equation-of-state value today (`w0`).
pub const DEFAULT_W0: f64 = -1.0;

/// Default CPL evolution parameter (`wa`).
pub const DEFAULT_WA: f64 = 0.2;

/// CPL parametrisation of the dark-energy equation of state:
/// `w(z) = w0 + wa * z / (1 + z)`.
#[must_use]
pub fn w_cpl(z: f64, w0: f64, wa: f64) -> f64 {
    w0 + wa * z / (1.0 + z)
}

/// Synthetic coherence-vs-redshift demonstration curve:
/// `50 + 50 * exp(-z / 1.2) * cos(2 z + 0.3)`.
///
/// A damped oscillation centred on 50 that stays inside the nominal
/// 0-100 coherence band for non-negative redshifts.
#[must_use]
pub fn synthetic_coherence_curve(z_values: &[f64]) -> Vec<f64> {
    z_values
        .iter()
        .map(|&z| 50.0 + 50.0 * (-z / 1.2).exp() * (2.0 * z + 0.3).cos())
        .collect()
}
