// ABOUTME: Strength analytics engine: set quality, e1RM, progression advice, trends, and prediction
// ABOUTME: Pure synchronous functions over training-log values, tunable through AnalyticsConfig
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength Intelligence
//!
//! Every analytics function is total: invalid input degrades to a sentinel
//! (`0.0`, an empty message, `false`, or an absent projection) instead of an
//! error. Only configuration loading and string parsing return errors.
//!
//! Each operation is available in two forms. The plain free function reads
//! [`AnalyticsConfig::global`]; the `*_with` variant takes an explicit
//! configuration.
//!
//! ```rust
//! use pierre_strength_intelligence::{assess_quality, estimate_one_rep_max};
//! use pierre_strength_core::models::{QualityLabel, Tempo};
//!
//! let quality = assess_quality(Tempo::Controlled, 2);
//! assert_eq!(quality.score, 68);
//! assert_eq!(quality.label, QualityLabel::Medium);
//! assert!((estimate_one_rep_max(100.0, 5) - 116.7).abs() < 1e-9);
//! ```

/// One-rep-max formula selection
pub mod algorithms;

/// Analytics configuration with environment overrides
pub mod config;

/// Progressive overload comparison, advisory, and targets
pub mod progression;

/// Tempo and RIR based set quality
pub mod quality;

/// Per-session e1RM and best-set selection
pub mod session_metrics;

/// Least-squares trend fitting
pub mod statistical_analysis;

/// Multi-horizon strength projection
pub mod strength_prediction;

/// Weekly improvement and stagnation
pub mod trend_analysis;

pub use algorithms::OneRepMaxAlgorithm;
pub use config::{AnalyticsConfig, ConfigError};
pub use progression::{
    compare_sessions, compare_sessions_with, should_increase_weight, should_increase_weight_with,
    suggest_target, suggest_target_with, ProgressionAdvisor, SessionComparison, TargetSuggestion,
};
pub use quality::{assess_quality, assess_quality_with, SetQualityScorer};
pub use session_metrics::{
    estimate_one_rep_max, estimate_one_rep_max_with, session_best, session_best_with, RankedSet,
    SessionBestSelector,
};
pub use statistical_analysis::{RegressionResult, StatisticalAnalyzer};
pub use strength_prediction::{
    has_one_month_span, predict_strength, predict_strength_with, StrengthPredictor,
    StrengthProjection,
};
pub use trend_analysis::{
    is_stagnant, is_stagnant_with, weekly_improvement, weekly_improvement_with,
    StagnationDetector, WeeklyTrend,
};

/// Round to one decimal place, ties away from zero
pub(crate) fn round_to_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
