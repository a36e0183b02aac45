//! Reporting and output generation
//!
//! Global invariants enforced:
//! - Deterministic output ordering
//! - Byte-for-byte identical output across runs

use serde::{Deserialize, Serialize};

use crate::regression::FitResult;

/// Which distribution a fit was computed over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FitMode {
    /// Rank-frequency: ranks synthesized from sorted magnitudes.
    Rank,
    /// Size-frequency: caller-supplied size keys.
    Size,
}

impl FitMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            FitMode::Rank => "rank",
            FitMode::Size => "size",
        }
    }
}

/// Fit outcome in report format
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "snake_case")]
pub struct FitReport {
    pub mode: String,
    pub n: usize,
    pub slope: f64,
    pub r2: f64,
    pub y_intercept: f64,
}

impl FitReport {
    pub fn new(mode: FitMode, n: usize, result: &FitResult) -> Self {
        FitReport {
            mode: mode.as_str().to_string(),
            n,
            slope: result.slope,
            r2: result.r2,
            y_intercept: result.y_intercept,
        }
    }
}

/// Render reports as text output
pub fn render_text(reports: &[FitReport]) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{:<8} {:<6} {:<12} {:<12} {}\n",
        "MODE", "N", "SLOPE", "R2", "Y-INTERCEPT"
    ));

    for report in reports {
        let slope_str = format!("{:.4}", report.slope);
        let r2_str = format!("{:.4}", report.r2);
        let y_intercept_str = format!("{:.4}", report.y_intercept);
        output.push_str(&format!(
            "{:<8} {:<6} {:<12} {:<12} {}\n",
            report.mode, report.n, slope_str, r2_str, y_intercept_str,
        ));
    }

    output
}

/// Render reports as JSON output
pub fn render_json(reports: &[FitReport]) -> String {
    serde_json::to_string_pretty(reports).unwrap_or_else(|_| "[]".to_string())
}
