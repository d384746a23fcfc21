// ABOUTME: Strength prediction configuration: horizons, recovery discount, and confidence tiers
// ABOUTME: The recovery discount is a heuristic knob, not a fitted parameter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength_core::constants::prediction;
use serde::{Deserialize, Serialize};

/// Strength predictor configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionConfig {
    /// History points required before projecting
    pub min_history_points: usize,
    /// Weeks in the short horizon
    pub three_month_weeks: u32,
    /// Weeks in the long horizon
    pub one_year_weeks: u32,
    /// Recovery factor before rest-day credit
    pub recovery_base: f64,
    /// Recovery factor credit per declared rest day
    pub recovery_per_rest_day: f64,
    /// History points needed for Medium confidence
    pub medium_confidence_points: usize,
    /// History points needed for High confidence
    pub high_confidence_points: usize,
    /// First-to-last session span that unlocks the long horizon
    pub one_month_span_secs: i64,
}

impl Default for PredictionConfig {
    fn default() -> Self {
        Self {
            min_history_points: prediction::MIN_HISTORY_POINTS,
            three_month_weeks: prediction::THREE_MONTH_WEEKS,
            one_year_weeks: prediction::ONE_YEAR_WEEKS,
            recovery_base: prediction::RECOVERY_BASE,
            recovery_per_rest_day: prediction::RECOVERY_PER_REST_DAY,
            medium_confidence_points: prediction::MEDIUM_CONFIDENCE_POINTS,
            high_confidence_points: prediction::HIGH_CONFIDENCE_POINTS,
            one_month_span_secs: prediction::ONE_MONTH_SPAN_SECS,
        }
    }
}
