// ABOUTME: Progressive overload advice: session comparison, load-increase advisory, and target suggestion
// ABOUTME: Turns the latest and previous session bests into coaching messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progressive Overload
//!
//! Comparison priority, first match wins:
//!
//! 1. load went up
//! 2. reps went up (at equal or lower load)
//! 3. load and reps unchanged (plateau)
//! 4. reps went down
//!
//! Load progress is reported even when reps also changed.

use crate::config::{AnalyticsConfig, ProgressionConfig};
use pierre_strength_core::models::{QualityLabel, SessionBest, WeightUnit};
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// Round a load for display, keeping fractional plates like 1.25
fn display_weight(weight: f64) -> f64 {
    (weight * 100.0).round() / 100.0
}

/// Outcome of comparing a session's best set against the previous session's
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SessionComparison {
    /// Load increased
    WeightIncrease {
        /// Load added since last session
        delta: f64,
        /// Unit for rendering
        unit: WeightUnit,
    },
    /// Reps increased at equal or lower load
    RepIncrease {
        /// Reps added since last session
        delta: u32,
    },
    /// Same load, same reps
    Plateau,
    /// Fewer reps than last session
    RepDecrease {
        /// Reps lost since last session
        deficit: u32,
    },
}

impl SessionComparison {
    /// Compare two session bests
    ///
    /// Returns `None` when nothing meaningful can be said, which only happens
    /// when the load dropped while reps stayed the same.
    #[must_use]
    pub fn between(current: &SessionBest, previous: &SessionBest, unit: WeightUnit) -> Option<Self> {
        let weight_diff = current.weight - previous.weight;
        let rep_diff = i64::from(current.reps) - i64::from(previous.reps);

        let comparison = if weight_diff > 0.0 {
            Some(Self::WeightIncrease {
                delta: display_weight(weight_diff),
                unit,
            })
        } else if rep_diff > 0 {
            Some(Self::RepIncrease {
                delta: current.reps - previous.reps,
            })
        } else if rep_diff == 0 && weight_diff.abs() < f64::EPSILON {
            Some(Self::Plateau)
        } else if rep_diff < 0 {
            Some(Self::RepDecrease {
                deficit: previous.reps - current.reps,
            })
        } else {
            None
        };

        debug!(weight_diff, rep_diff, ?comparison, "Compared session bests");
        comparison
    }

    /// Whether the comparison shows progress
    #[must_use]
    pub const fn is_progress(&self) -> bool {
        matches!(self, Self::WeightIncrease { .. } | Self::RepIncrease { .. })
    }
}

impl fmt::Display for SessionComparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WeightIncrease { delta, unit } => {
                write!(f, "+{delta} {unit} at similar reps. Great progress!")
            }
            Self::RepIncrease { delta } => {
                write!(f, "+{delta} reps at same weight. Keep pushing!")
            }
            Self::Plateau => f.write_str("Same as last time. Aim for +1 rep or improve tempo."),
            Self::RepDecrease { deficit } => {
                write!(f, "-{deficit} reps vs last time. Check recovery and sleep.")
            }
        }
    }
}

/// Compare the current session best against the previous one
///
/// Returns an empty message when either session is missing (the expected
/// state for a first-ever session) or when there is nothing to report.
#[must_use]
pub fn compare_sessions(current: Option<&SessionBest>, previous: Option<&SessionBest>) -> String {
    compare_sessions_with(current, previous, AnalyticsConfig::global())
}

/// Compare session bests with an explicit configuration
#[must_use]
pub fn compare_sessions_with(
    current: Option<&SessionBest>,
    previous: Option<&SessionBest>,
    config: &AnalyticsConfig,
) -> String {
    match (current, previous) {
        (Some(current), Some(previous)) => SessionComparison::between(current, previous, config.unit)
            .map(|comparison| comparison.to_string())
            .unwrap_or_default(),
        _ => String::new(),
    }
}

/// A concrete load and rep target for the next session
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetSuggestion {
    /// Suggested load
    pub weight: f64,
    /// Lowest suggested reps
    pub rep_min: u32,
    /// Highest suggested reps (equal to `rep_min` for a single target)
    pub rep_max: u32,
    /// Unit for rendering
    pub unit: WeightUnit,
}

impl fmt::Display for TargetSuggestion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let weight = display_weight(self.weight);
        if self.rep_min == self.rep_max {
            write!(f, "Try {weight} {} for {} reps", self.unit, self.rep_min)
        } else {
            write!(
                f,
                "Try {weight} {} for {}–{} reps",
                self.unit, self.rep_min, self.rep_max
            )
        }
    }
}

/// Progressive overload advisor
pub struct ProgressionAdvisor;

impl ProgressionAdvisor {
    /// Whether the athlete should add load next session
    ///
    /// True when the top of the rep range was reached with reserve capacity
    /// and acceptable form. Low-quality sets are excluded because their rep
    /// count may be inflated by poor form.
    #[must_use]
    pub const fn should_increase_weight(
        reps: u32,
        target_rep_max: u32,
        rir: i32,
        quality_label: QualityLabel,
        config: &ProgressionConfig,
    ) -> bool {
        reps >= target_rep_max
            && rir <= config.max_rir_for_increase
            && !matches!(quality_label, QualityLabel::Low)
    }

    /// Build the next-session target
    ///
    /// With an increase: previous load plus the increment, for the bottom of
    /// the rep range up to `rep_window_span` more. Without: same load for one
    /// more rep, never above the range ceiling.
    #[must_use]
    pub fn suggest_target(
        last_weight: f64,
        last_reps: u32,
        target_rep_min: u32,
        target_rep_max: u32,
        should_increase: bool,
        config: &ProgressionConfig,
        unit: WeightUnit,
    ) -> TargetSuggestion {
        if should_increase {
            TargetSuggestion {
                weight: last_weight + config.weight_increment,
                rep_min: target_rep_min,
                rep_max: target_rep_min.saturating_add(config.rep_window_span),
                unit,
            }
        } else {
            let reps = last_reps.saturating_add(1).min(target_rep_max);
            TargetSuggestion {
                weight: last_weight,
                rep_min: reps,
                rep_max: reps,
                unit,
            }
        }
    }
}

/// Load-increase advisory with the global analytics configuration
#[must_use]
pub fn should_increase_weight(
    reps: u32,
    target_rep_max: u32,
    rir: i32,
    quality_label: QualityLabel,
) -> bool {
    should_increase_weight_with(
        reps,
        target_rep_max,
        rir,
        quality_label,
        AnalyticsConfig::global(),
    )
}

/// Load-increase advisory with an explicit configuration
#[must_use]
pub const fn should_increase_weight_with(
    reps: u32,
    target_rep_max: u32,
    rir: i32,
    quality_label: QualityLabel,
    config: &AnalyticsConfig,
) -> bool {
    ProgressionAdvisor::should_increase_weight(
        reps,
        target_rep_max,
        rir,
        quality_label,
        &config.progression,
    )
}

/// Next-session target message with the global analytics configuration
#[must_use]
pub fn suggest_target(
    last_weight: f64,
    last_reps: u32,
    target_rep_min: u32,
    target_rep_max: u32,
    should_increase: bool,
) -> String {
    suggest_target_with(
        last_weight,
        last_reps,
        target_rep_min,
        target_rep_max,
        should_increase,
        AnalyticsConfig::global(),
    )
}

/// Next-session target message with an explicit configuration
#[must_use]
pub fn suggest_target_with(
    last_weight: f64,
    last_reps: u32,
    target_rep_min: u32,
    target_rep_max: u32,
    should_increase: bool,
    config: &AnalyticsConfig,
) -> String {
    ProgressionAdvisor::suggest_target(
        last_weight,
        last_reps,
        target_rep_min,
        target_rep_max,
        should_increase,
        &config.progression,
        config.unit,
    )
    .to_string()
}
