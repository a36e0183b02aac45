//! Occurrence-count histograms over raw event streams
//!
//! A fit consumes counts, not events. This module turns a raw sequence of
//! integer events into the counts the adapters expect: occurrence counts
//! keyed by event value, ready for a rank-frequency fit (counts alone) or a
//! size-frequency fit (event value as the size key).

use std::collections::BTreeMap;

use crate::error::FitError;
use crate::observation::Observation;

/// Occurrence counts per event value, ordered by event value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Histogram {
    counts: BTreeMap<i64, u64>,
}

impl Histogram {
    /// Count occurrences of each event value.
    pub fn from_events(events: &[i64]) -> Self {
        let mut counts: BTreeMap<i64, u64> = BTreeMap::new();
        for &event in events {
            *counts.entry(event).or_insert(0) += 1;
        }
        Histogram { counts }
    }

    /// Number of distinct event values.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Occurrence counts ordered by event value, for a rank-frequency fit.
    pub fn counts(&self) -> Vec<f64> {
        self.counts.values().map(|&count| count as f64).collect()
    }

    /// (event value, occurrence count) pairs for a size-frequency fit.
    ///
    /// Event values act as size keys and must be strictly positive.
    pub fn observations(&self) -> Result<Vec<Observation>, FitError> {
        let mut observations = Vec::with_capacity(self.counts.len());
        for (index, (&event, &count)) in self.counts.iter().enumerate() {
            if event <= 0 {
                return Err(FitError::NonPositiveRank {
                    index,
                    value: event,
                });
            }
            observations.push(Observation::new(event as u64, count as f64));
        }
        Ok(observations)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_events_counts_occurrences() {
        // 1 appears twice, 2 appears once, 3 appears four times
        let histogram = Histogram::from_events(&[3, 1, 3, 2, 3, 1, 3]);

        assert_eq!(histogram.len(), 3);
        assert_eq!(histogram.counts(), vec![2.0, 1.0, 4.0]);
    }

    #[test]
    fn test_observations_use_event_as_size() {
        let histogram = Histogram::from_events(&[2, 2, 5]);
        let observations = histogram.observations().unwrap();

        assert_eq!(observations, vec![
            Observation::new(2, 2.0),
            Observation::new(5, 1.0),
        ]);
    }

    #[test]
    fn test_non_positive_event_rejected_as_size() {
        let histogram = Histogram::from_events(&[-1, 4, 4]);
        let result = histogram.observations();

        assert_eq!(
            result,
            Err(FitError::NonPositiveRank {
                index: 0,
                value: -1,
            })
        );
    }

    #[test]
    fn test_empty_events() {
        let histogram = Histogram::from_events(&[]);
        assert!(histogram.is_empty());
        assert!(histogram.counts().is_empty());
    }
}
