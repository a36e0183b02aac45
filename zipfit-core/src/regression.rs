//! Log-log least-squares regression
//!
//! Global invariants enforced:
//! - Pure function of the input dataset, no failure mode on validated input
//! - Division-by-zero paths are guarded and fall back to 0, never NaN/Inf
//! - Deterministic: identical input yields bit-identical results

use crate::observation::Observation;

/// Fitted trendline parameters in log-log space.
///
/// All values are `f64`. The regression accumulates in double precision and
/// the result is stored at the same width; no narrowing is performed, so
/// fitted values are reproducible across platforms.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FitResult {
    /// Regression coefficient of log10(magnitude) on log10(position).
    pub slope: f64,
    /// Coefficient of determination of the fitted line, in [0, 1].
    pub r2: f64,
    /// Intercept of the fitted line in log-log space.
    pub y_intercept: f64,
}

/// Fit a least-squares line to log10(magnitude) against log10(position).
///
/// Input must already be validated (non-empty, strictly positive).
///
/// Two regimes are reported without fitting:
/// - A single observation cannot determine a slope: slope = 0, r2 = 0.
/// - Uniform magnitudes are a horizontal line: slope = 0, r2 = 1,
///   distinguishing "no rank effect" from "insufficient data".
///
/// The y-intercept is `(Sy - slope * Sx) / n` in every case; the degenerate
/// regimes accumulate no sums, so their intercept is 0.
pub fn log_log_regression(observations: &[Observation]) -> FitResult {
    let n = observations.len() as f64;

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_xy = 0.0;
    let mut sum_x2 = 0.0;
    let mut sum_y2 = 0.0;

    let (slope, r2) = if observations.len() == 1 {
        (0.0, 0.0)
    } else if all_magnitudes_equal(observations) {
        (0.0, 1.0)
    } else {
        for obs in observations {
            let x = (obs.position as f64).log10();
            let y = obs.magnitude.log10();

            sum_x += x;
            sum_y += y;
            sum_xy += x * y;
            sum_x2 += x * x;
            sum_y2 += y * y;
        }

        // All positions identical leaves no horizontal spread
        let slope_denominator = n * sum_x2 - sum_x * sum_x;
        let slope = if slope_denominator == 0.0 {
            0.0
        } else {
            (n * sum_xy - sum_x * sum_y) / slope_denominator
        };

        let r_denominator = (slope_denominator * (n * sum_y2 - sum_y * sum_y)).sqrt();
        let r2 = if r_denominator == 0.0 {
            0.0
        } else {
            let r = (n * sum_xy - sum_x * sum_y) / r_denominator;
            r * r
        };

        (slope, r2)
    };

    let y_intercept = (sum_y - slope * sum_x) / n;

    FitResult {
        slope,
        r2,
        y_intercept,
    }
}

/// Exact equality over consecutive magnitudes, short-circuiting on the
/// first inequality.
fn all_magnitudes_equal(observations: &[Observation]) -> bool {
    observations
        .windows(2)
        .all(|pair| pair[0].magnitude == pair[1].magnitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::observation::pair;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_exact_power_law_recovered() {
        // magnitude = 1000 * position^-1.5 over positions 1..=10
        let positions: Vec<u64> = (1..=10).collect();
        let magnitudes: Vec<f64> = positions
            .iter()
            .map(|&p| 1000.0 * (p as f64).powf(-1.5))
            .collect();

        let result = log_log_regression(&pair(&positions, &magnitudes));

        assert!((result.slope - (-1.5)).abs() < EPSILON);
        assert!((result.r2 - 1.0).abs() < EPSILON);
        // y-intercept is log10(1000) = 3
        assert!((result.y_intercept - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_single_observation() {
        let result = log_log_regression(&[Observation::new(1, 42.0)]);

        assert_eq!(result.slope, 0.0);
        assert_eq!(result.r2, 0.0);
        // No sums are accumulated in this regime
        assert_eq!(result.y_intercept, 0.0);
    }

    #[test]
    fn test_uniform_magnitudes() {
        // Same count for every position: horizontal line, perfect fit
        let result = log_log_regression(&pair(&[1, 2, 3, 4], &[7.0, 7.0, 7.0, 7.0]));

        assert_eq!(result.slope, 0.0);
        assert_eq!(result.r2, 1.0);
        assert_eq!(result.y_intercept, 0.0);
    }

    #[test]
    fn test_uniform_check_is_exact() {
        // A single differing element defeats the uniform shortcut
        let result = log_log_regression(&pair(&[1, 2, 3], &[7.0, 7.0, 7.0000001]));
        assert!(result.slope != 0.0 || result.r2 != 1.0);
    }

    #[test]
    fn test_identical_positions_guarded() {
        // No horizontal spread: slope and r2 fall back to 0, the intercept
        // becomes the mean of the log counts
        let result = log_log_regression(&pair(&[7, 7, 7], &[10.0, 100.0, 1000.0]));

        assert_eq!(result.slope, 0.0);
        assert_eq!(result.r2, 0.0);
        let expected = (1.0 + 2.0 + 3.0) / 3.0;
        assert!((result.y_intercept - expected).abs() < EPSILON);
    }

    #[test]
    fn test_result_is_finite_on_noisy_input() {
        let result = log_log_regression(&pair(&[1, 2, 3, 4, 5], &[90.0, 40.0, 45.0, 10.0, 12.0]));

        assert!(result.slope.is_finite());
        assert!(result.r2.is_finite());
        assert!(result.y_intercept.is_finite());
        assert!((0.0..=1.0).contains(&result.r2));
        assert!(result.slope < 0.0, "decreasing counts should fit a negative slope");
    }
}
