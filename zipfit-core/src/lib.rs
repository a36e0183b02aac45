//! Zipfit core library - power-law (Zipf) trendline fitting
//!
//! Fits a least-squares line to counts in log-log space and reports the
//! slope, the coefficient of determination (R2), and the y-intercept of the
//! trendline. The rank-frequency distribution plots counts against
//! automatically generated ranks (1 = largest); the size-frequency
//! distribution plots counts against caller-supplied size keys.

#![deny(warnings)]

// Global invariants enforced in this crate:
// - Every fit is a pure function of its input dataset
// - Caller-owned data is never mutated; rank synthesis sorts a copy
// - No global mutable state, no I/O, no randomness
// - Identical input yields bit-identical results

pub mod error;
pub mod histogram;
pub mod observation;
pub mod rank;
pub mod regression;
pub mod report;
pub mod validate;

pub use error::FitError;
pub use histogram::Histogram;
pub use observation::Observation;
pub use regression::{log_log_regression, FitResult};
pub use report::{render_json, render_text, FitMode, FitReport};

/// Fit the rank-frequency distribution of `magnitudes`.
///
/// Magnitudes may arrive in any order; a sorted copy is paired with
/// synthetic descending ranks so the largest magnitude gets rank 1.
pub fn by_rank(magnitudes: &[f64]) -> Result<FitResult, FitError> {
    let observations = rank::rank_observations(magnitudes);
    validate::validate_observations(&observations)?;
    Ok(regression::log_log_regression(&observations))
}

/// Fit the size-frequency distribution of caller-aligned `sizes` and
/// `magnitudes`.
///
/// `sizes[i]` corresponds to `magnitudes[i]`; no sorting or rank synthesis
/// is performed.
pub fn by_size(sizes: &[u64], magnitudes: &[f64]) -> Result<FitResult, FitError> {
    validate::validate(sizes, magnitudes)?;
    let observations = observation::pair(sizes, magnitudes);
    Ok(regression::log_log_regression(&observations))
}

/// Fit an already-paired dataset as-is.
pub fn fit_observations(observations: &[Observation]) -> Result<FitResult, FitError> {
    validate::validate_observations(observations)?;
    Ok(regression::log_log_regression(observations))
}
