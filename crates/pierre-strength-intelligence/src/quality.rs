// ABOUTME: Set quality scorer combining tempo control with reps-in-reserve effort
// ABOUTME: Produces a clamped 0-100 score and a Low/Medium/High label for a logged set
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Set Quality
//!
//! `score = round(tempo_base × (1 − rir × attenuation))`, clamped to `[0, 100]`.
//!
//! Tempo stands in for control and time under tension; reps in reserve
//! attenuate the score so a set taken close to failure keeps most of its
//! tempo base. Out-of-range RIR never panics: it only drives the score to a
//! boundary.

use crate::config::{AnalyticsConfig, QualityConfig};
use pierre_strength_core::constants::quality::MAX_SCORE;
use pierre_strength_core::models::{QualityAssessment, QualityLabel, SetRecord, Tempo};
use tracing::debug;

/// Set quality scorer
pub struct SetQualityScorer;

impl SetQualityScorer {
    /// Score a set from its tempo and reps in reserve
    #[must_use]
    pub fn assess(tempo: Tempo, rir: i32, config: &QualityConfig) -> QualityAssessment {
        let base = config.tempo_base.for_tempo(tempo);
        // Unfused: RIR 5 must attenuate by exactly 0.5 to match stored scores
        #[allow(clippy::suboptimal_flops)]
        let factor = 1.0 - f64::from(rir) * config.rir_attenuation;
        let raw = (base * factor).round();

        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let score = raw.clamp(0.0, MAX_SCORE) as u8;
        let label = Self::label_for(score, config);

        debug!(%tempo, rir, score, %label, "Set quality assessed");
        QualityAssessment { score, label }
    }

    /// Map a score onto its label using the configured thresholds
    #[must_use]
    pub const fn label_for(score: u8, config: &QualityConfig) -> QualityLabel {
        if score >= config.high_threshold {
            QualityLabel::High
        } else if score < config.low_threshold {
            QualityLabel::Low
        } else {
            QualityLabel::Medium
        }
    }

    /// Score a logged set
    #[must_use]
    pub fn assess_record(record: &SetRecord, config: &QualityConfig) -> QualityAssessment {
        Self::assess(record.tempo, record.rir, config)
    }
}

/// Score a set with the global analytics configuration
#[must_use]
pub fn assess_quality(tempo: Tempo, rir: i32) -> QualityAssessment {
    assess_quality_with(tempo, rir, AnalyticsConfig::global())
}

/// Score a set with an explicit configuration
#[must_use]
pub fn assess_quality_with(tempo: Tempo, rir: i32, config: &AnalyticsConfig) -> QualityAssessment {
    SetQualityScorer::assess(tempo, rir, &config.quality)
}
