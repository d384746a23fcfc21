// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-strength-cli
// ABOUTME: Provides consistent display functions for scores, estimates, and JSON reports

use pierre_strength::{
    errors::AppResult,
    intelligence::OneRepMaxAlgorithm,
    models::{QualityAssessment, Tempo},
};
use serde::Serialize;

/// Display a set quality assessment
pub fn display_quality(tempo: Tempo, rir: i32, assessment: &QualityAssessment) {
    println!("Set quality ({tempo}, RIR {rir})");
    println!("{}", "=".repeat(40));
    println!("   Score: {}", assessment.score);
    println!("   Label: {}", assessment.label);
}

/// Display an estimated one-rep max
pub fn display_e1rm(weight: f64, reps: u32, algorithm: OneRepMaxAlgorithm, estimate: f64) {
    println!("Estimated 1RM ({})", algorithm.name());
    println!("{}", "=".repeat(40));
    println!("   Set: {weight} x {reps}");
    println!("   Formula: {}", algorithm.formula());
    if estimate > 0.0 {
        println!("   e1RM: {estimate}");
    } else {
        println!("   e1RM: no valid lift");
    }
}

/// Print any serializable value as pretty JSON
pub fn display_json<T: Serialize + ?Sized>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
