// ABOUTME: Progressive overload configuration for advisories, suggestions, and trend windows
// ABOUTME: Holds the weight increment, RIR ceiling, stagnation tolerance, and weekly window length
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength_core::constants::progression;
use serde::{Deserialize, Serialize};

/// Progression advice configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProgressionConfig {
    /// Highest RIR that still qualifies for a load increase
    pub max_rir_for_increase: i32,
    /// Load added when suggesting an increase
    pub weight_increment: f64,
    /// Width of the suggested rep window after an increase
    pub rep_window_span: u32,
    /// Absolute e1RM change below which sessions count as flat
    pub stagnation_tolerance: f64,
    /// Days in each window compared by the weekly trend summary
    pub trend_window_days: i64,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            max_rir_for_increase: progression::MAX_RIR_FOR_INCREASE,
            weight_increment: progression::WEIGHT_INCREMENT,
            rep_window_span: progression::REP_WINDOW_SPAN,
            stagnation_tolerance: progression::STAGNATION_TOLERANCE,
            trend_window_days: progression::TREND_WINDOW_DAYS,
        }
    }
}
