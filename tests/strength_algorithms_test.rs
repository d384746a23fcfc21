// ABOUTME: Integration tests for set quality scoring, e1RM estimation, and session best selection
// ABOUTME: Pins the scoring table, label thresholds, and e1RM sentinels exposed by the crate root
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_strength::intelligence::{
    assess_quality, assess_quality_with, estimate_one_rep_max, estimate_one_rep_max_with,
    session_best, AnalyticsConfig, OneRepMaxAlgorithm,
};
use pierre_strength::models::{QualityLabel, SetRecord, Tempo};

fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}

// ============================================================================
// Set quality
// ============================================================================

#[test]
fn test_quality_scoring_table() {
    let cases = [
        (Tempo::Slow, 0, 95, QualityLabel::High),
        (Tempo::Controlled, 0, 85, QualityLabel::High),
        (Tempo::Controlled, 2, 68, QualityLabel::Medium),
        (Tempo::Slow, 5, 48, QualityLabel::Medium),
        (Tempo::Fast, 0, 40, QualityLabel::Medium),
        (Tempo::Fast, 1, 36, QualityLabel::Low),
        (Tempo::VeryFast, 0, 15, QualityLabel::Low),
        (Tempo::VeryFast, 6, 6, QualityLabel::Low),
    ];

    for (tempo, rir, score, label) in cases {
        let quality = assess_quality(tempo, rir);
        assert_eq!(quality.score, score, "{tempo} at RIR {rir}");
        assert_eq!(quality.label, label, "{tempo} at RIR {rir}");
    }
}

#[test]
fn test_quality_score_is_clamped() {
    let beyond_failure = assess_quality(Tempo::Controlled, -50);
    assert_eq!(beyond_failure.score, 100);
    assert_eq!(beyond_failure.label, QualityLabel::High);

    let far_from_failure = assess_quality(Tempo::Slow, 50);
    assert_eq!(far_from_failure.score, 0);
    assert_eq!(far_from_failure.label, QualityLabel::Low);

    assert_eq!(assess_quality(Tempo::Controlled, 10).score, 0);
}

#[test]
fn test_quality_thresholds_follow_config() {
    let mut config = AnalyticsConfig::default();
    config.quality.high_threshold = 90;
    config.quality.low_threshold = 20;

    assert_eq!(
        assess_quality_with(Tempo::Controlled, 0, &config).label,
        QualityLabel::Medium
    );
    assert_eq!(
        assess_quality_with(Tempo::VeryFast, 0, &config).label,
        QualityLabel::Low
    );
    assert_eq!(
        assess_quality_with(Tempo::Slow, 0, &config).label,
        QualityLabel::High
    );
}

#[test]
fn test_tempo_parses_cli_spellings() {
    assert_eq!("controlled".parse::<Tempo>().unwrap(), Tempo::Controlled);
    assert_eq!("Very-Fast".parse::<Tempo>().unwrap(), Tempo::VeryFast);
    assert_eq!("very_fast".parse::<Tempo>().unwrap(), Tempo::VeryFast);
    assert!("explosive".parse::<Tempo>().is_err());
}

// ============================================================================
// Estimated one-rep max
// ============================================================================

#[test]
fn test_epley_estimates_are_rounded_to_tenths() {
    assert_close(estimate_one_rep_max(100.0, 5), 116.7);
    assert_close(estimate_one_rep_max(200.0, 10), 266.7);
    assert_close(estimate_one_rep_max(225.0, 5), 262.5);
    assert_close(estimate_one_rep_max(135.0, 8), 171.0);
}

#[test]
fn test_single_rep_returns_weight() {
    assert_close(estimate_one_rep_max(315.0, 1), 315.0);
}

#[test]
fn test_invalid_lifts_yield_zero() {
    assert_close(estimate_one_rep_max(100.0, 0), 0.0);
    assert_close(estimate_one_rep_max(0.0, 5), 0.0);
    assert_close(estimate_one_rep_max(-20.0, 5), 0.0);
    assert_close(estimate_one_rep_max(f64::NAN, 5), 0.0);
}

#[test]
fn test_estimate_increases_with_reps() {
    for weight in [20.0, 100.0, 142.5] {
        let estimates: Vec<f64> = (1..=30)
            .map(|reps| estimate_one_rep_max(weight, reps))
            .collect();
        for pair in estimates.windows(2) {
            assert!(pair[1] > pair[0], "{weight}: {} then {}", pair[0], pair[1]);
        }
    }
}

#[test]
fn test_configured_formula_is_used() {
    let mut config = AnalyticsConfig::default();
    config.algorithms.one_rep_max = "brzycki".into();

    assert_eq!(config.one_rep_max_algorithm(), OneRepMaxAlgorithm::Brzycki);
    // 100 x 36 / 32
    assert_close(estimate_one_rep_max_with(100.0, 5, &config), 112.5);
}

// ============================================================================
// Session best
// ============================================================================

#[test]
fn test_session_best_picks_highest_e1rm() {
    let sets = [
        SetRecord::new(185.0, 8, 2, Tempo::Controlled),
        SetRecord::new(205.0, 5, 1, Tempo::Fast),
        SetRecord::new(175.0, 10, 0, Tempo::Slow),
    ];

    // 185x8 = 234.3, 205x5 = 239.2, 175x10 = 233.3
    let best = session_best(&sets).unwrap();
    assert_close(best.weight, 205.0);
    assert_eq!(best.reps, 5);
    assert_eq!(best.rir, 1);
    assert_eq!(best.quality_score, 36);
}

#[test]
fn test_session_best_tie_keeps_first_set() {
    let sets = [
        SetRecord::new(200.0, 8, 3, Tempo::Controlled),
        SetRecord::new(200.0, 8, 0, Tempo::Slow),
    ];

    let best = session_best(&sets).unwrap();
    assert_eq!(best.rir, 3);
}

#[test]
fn test_session_without_valid_lift_has_no_best() {
    let sets = [
        SetRecord::new(0.0, 8, 2, Tempo::Controlled),
        SetRecord::new(100.0, 0, 2, Tempo::Controlled),
    ];
    assert!(session_best(&sets).is_none());
    assert!(session_best(&[]).is_none());
}
