// ABOUTME: Intelligence module re-exports from pierre-strength-intelligence
// ABOUTME: Adds the repository-backed progress analyzer on top of the pure analytics
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Intelligence Module
//!
//! Re-exports the analytics engine and adds the local modules that need the
//! history repository.

// Re-export all public items from pierre-strength-intelligence
pub use pierre_strength_intelligence::*;

// Re-export submodules for path-based access (e.g., crate::intelligence::config::AnalyticsConfig)
pub use pierre_strength_intelligence::{
    algorithms, config, progression, quality, session_metrics, statistical_analysis,
    strength_prediction, trend_analysis,
};

/// Repository-backed forecasts and coaching reports
pub mod progress_analyzer;

pub use progress_analyzer::{
    CoachingReport, ExerciseHistory, ProgressAnalyzer, SessionSummary, StrengthForecast,
};
