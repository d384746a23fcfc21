// ABOUTME: Stateless analytics commands for pierre-strength-cli
// ABOUTME: Handles quality scoring, e1RM estimation, and prediction from a history file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength::{
    errors::AppResult,
    history_import::load_history,
    intelligence::{assess_quality, AnalyticsConfig, StrengthPredictor},
    models::Tempo,
};
use std::path::Path;
use tracing::info;

use crate::helpers::display::{display_e1rm, display_json, display_quality};

/// Score a set
pub fn quality(tempo: Tempo, rir: i32) {
    let assessment = assess_quality(tempo, rir);
    display_quality(tempo, rir, &assessment);
}

/// Estimate a one-rep max with the configured formula
pub fn e1rm(weight: f64, reps: u32) {
    let algorithm = AnalyticsConfig::global().one_rep_max_algorithm();
    let estimate = algorithm.estimate(weight, reps);
    display_e1rm(weight, reps, algorithm, estimate);
}

/// Project strength from a JSON history file
pub async fn predict(history: &Path, rest_days: u32, one_month: bool) -> AppResult<()> {
    let points = load_history(history).await?;
    info!(points = points.len(), rest_days, one_month, "Projecting strength");

    let prediction = StrengthPredictor::predict(
        &points,
        rest_days,
        one_month,
        &AnalyticsConfig::global().prediction,
    );
    display_json(&prediction)
}
