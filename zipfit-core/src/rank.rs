//! Rank synthesis for the rank-frequency distribution
//!
//! Global invariants enforced:
//! - Caller-owned data is never mutated; sorting happens on a copy
//! - Deterministic ordering via a total order over floats

use crate::observation::Observation;

/// Pair magnitudes with synthetic descending ranks.
///
/// The input is copied and sorted ascending; sorted index `i` receives
/// position `len - i`, so the largest magnitude ends up with rank 1 and the
/// smallest with rank `len`. Callers are not required to pre-rank anything.
pub fn rank_observations(magnitudes: &[f64]) -> Vec<Observation> {
    let mut sorted = magnitudes.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);

    let len = sorted.len();
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, magnitude)| Observation::new((len - i) as u64, magnitude))
        .collect()
}
