//! Fit dataset validation
//!
//! Every check runs before any regression arithmetic. Violations are
//! returned as typed errors for the caller to handle; nothing is printed
//! and no partial result is produced.

use crate::error::FitError;
use crate::observation::Observation;

/// Validate caller-aligned ranks and counts slices.
///
/// Checks, in order:
/// 1. counts is non-empty
/// 2. ranks is non-empty
/// 3. ranks and counts have the same length
/// 4. every rank is strictly positive
/// 5. every count is strictly positive
pub fn validate(ranks: &[u64], counts: &[f64]) -> Result<(), FitError> {
    if counts.is_empty() {
        return Err(FitError::EmptyCounts);
    }
    if ranks.is_empty() {
        return Err(FitError::EmptyRanks);
    }
    if ranks.len() != counts.len() {
        return Err(FitError::SizeMismatch {
            ranks: ranks.len(),
            counts: counts.len(),
        });
    }
    check_ranks(ranks.iter().copied())?;
    check_counts(counts.iter().copied())?;
    Ok(())
}

/// Validate an already-paired dataset.
///
/// Lengths are structurally equal, so only emptiness and strict positivity
/// apply.
pub fn validate_observations(observations: &[Observation]) -> Result<(), FitError> {
    if observations.is_empty() {
        return Err(FitError::EmptyCounts);
    }
    check_ranks(observations.iter().map(|obs| obs.position))?;
    check_counts(observations.iter().map(|obs| obs.magnitude))?;
    Ok(())
}

fn check_ranks(ranks: impl Iterator<Item = u64>) -> Result<(), FitError> {
    for (index, rank) in ranks.enumerate() {
        if rank == 0 {
            return Err(FitError::NonPositiveRank { index, value: 0 });
        }
    }
    Ok(())
}

fn check_counts(counts: impl Iterator<Item = f64>) -> Result<(), FitError> {
    for (index, count) in counts.enumerate() {
        // NaN is rejected along with zero and negative counts.
        if count <= 0.0 || count.is_nan() {
            return Err(FitError::NonPositiveCount {
                index,
                value: count,
            });
        }
    }
    Ok(())
}
