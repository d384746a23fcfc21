// ABOUTME: Short-horizon strength trends: weekly improvement summary and stagnation detection
// ABOUTME: Works on chronological e1RM series for a single exercise
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::{AnalyticsConfig, ProgressionConfig};
use crate::round_to_tenth;
use pierre_strength_core::constants::progression::STAGNATION_WINDOW;
use pierre_strength_core::models::WeightUnit;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

#[allow(clippy::cast_precision_loss)]
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Direction of strength between two trend windows
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "direction", rename_all = "snake_case")]
pub enum WeeklyTrend {
    /// Recent window averages higher
    Up {
        /// Difference of window means, rounded to one decimal
        diff: f64,
        /// Unit for rendering
        unit: WeightUnit,
    },
    /// Recent window averages lower
    Down {
        /// Absolute difference of window means, rounded to one decimal
        diff: f64,
        /// Unit for rendering
        unit: WeightUnit,
    },
    /// Window means agree to one decimal
    Steady,
}

impl WeeklyTrend {
    /// Compare the mean of a recent window against the window before it
    ///
    /// Returns `None` when either window is empty.
    #[must_use]
    pub fn between(recent: &[f64], prior: &[f64], unit: WeightUnit) -> Option<Self> {
        if recent.is_empty() || prior.is_empty() {
            return None;
        }

        let diff = round_to_tenth(mean(recent) - mean(prior));
        debug!(diff, recent = recent.len(), prior = prior.len(), "Weekly trend computed");

        Some(if diff > 0.0 {
            Self::Up { diff, unit }
        } else if diff < 0.0 {
            Self::Down {
                diff: diff.abs(),
                unit,
            }
        } else {
            Self::Steady
        })
    }
}

impl fmt::Display for WeeklyTrend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Up { diff, unit } => {
                write!(f, "Estimated strength up ~{diff} {unit} over past 2 weeks.")
            }
            Self::Down { diff, unit } => {
                write!(
                    f,
                    "Estimated strength down ~{diff} {unit}. Consider more recovery."
                )
            }
            Self::Steady => f.write_str("Strength holding steady."),
        }
    }
}

/// Summarize strength change between two windows of session e1RMs
///
/// Empty string when either window has no sessions.
#[must_use]
pub fn weekly_improvement(recent_e1rms: &[f64], prior_e1rms: &[f64]) -> String {
    weekly_improvement_with(recent_e1rms, prior_e1rms, AnalyticsConfig::global())
}

/// Weekly improvement summary with an explicit configuration
#[must_use]
pub fn weekly_improvement_with(
    recent_e1rms: &[f64],
    prior_e1rms: &[f64],
    config: &AnalyticsConfig,
) -> String {
    WeeklyTrend::between(recent_e1rms, prior_e1rms, config.unit)
        .map(|trend| trend.to_string())
        .unwrap_or_default()
}

/// Stagnation detector
pub struct StagnationDetector;

impl StagnationDetector {
    /// Whether the most recent three e1RMs are flat
    ///
    /// Flat means both consecutive absolute changes are strictly below the
    /// tolerance. Fewer than three values is never stagnant.
    #[must_use]
    pub fn is_stagnant(e1rms: &[f64], config: &ProgressionConfig) -> bool {
        let Some(window) = e1rms
            .len()
            .checked_sub(STAGNATION_WINDOW)
            .map(|start| &e1rms[start..])
        else {
            return false;
        };

        let stagnant = window
            .windows(2)
            .all(|pair| (pair[1] - pair[0]).abs() < config.stagnation_tolerance);
        debug!(?window, stagnant, "Stagnation check");
        stagnant
    }
}

/// Stagnation check with the global analytics configuration
#[must_use]
pub fn is_stagnant(e1rms: &[f64]) -> bool {
    is_stagnant_with(e1rms, AnalyticsConfig::global())
}

/// Stagnation check with an explicit configuration
#[must_use]
pub fn is_stagnant_with(e1rms: &[f64], config: &AnalyticsConfig) -> bool {
    StagnationDetector::is_stagnant(e1rms, &config.progression)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_latest_window_is_considered() {
        let config = ProgressionConfig::default();
        // Early volatility must not mask a flat tail
        assert!(StagnationDetector::is_stagnant(
            &[150.0, 180.0, 200.0, 200.4, 200.8],
            &config
        ));
        assert!(!StagnationDetector::is_stagnant(
            &[200.0, 200.0, 200.0, 210.0],
            &config
        ));
    }

    #[test]
    fn test_delta_of_exactly_tolerance_is_progress() {
        let config = ProgressionConfig::default();
        assert!(!StagnationDetector::is_stagnant(
            &[100.0, 101.0, 101.5],
            &config
        ));
    }

    #[test]
    fn test_trend_rounds_before_classifying() {
        let trend = WeeklyTrend::between(&[200.04], &[200.0], WeightUnit::Lb);
        assert_eq!(trend, Some(WeeklyTrend::Steady));
    }
}
