// ABOUTME: Set quality scoring configuration: tempo base scores, RIR attenuation, and label thresholds
// ABOUTME: Defaults come from the named constants in the core crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_strength_core::constants::quality;
use pierre_strength_core::models::Tempo;
use serde::{Deserialize, Serialize};

/// Base score awarded to each tempo before RIR attenuation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TempoBaseScores {
    /// Base for `slow`
    pub slow: f64,
    /// Base for `controlled`
    pub controlled: f64,
    /// Base for `fast`
    pub fast: f64,
    /// Base for `very-fast`
    pub very_fast: f64,
}

impl TempoBaseScores {
    /// Look up the base score for a tempo
    #[must_use]
    pub const fn for_tempo(&self, tempo: Tempo) -> f64 {
        match tempo {
            Tempo::Slow => self.slow,
            Tempo::Controlled => self.controlled,
            Tempo::Fast => self.fast,
            Tempo::VeryFast => self.very_fast,
        }
    }
}

impl Default for TempoBaseScores {
    fn default() -> Self {
        Self {
            slow: quality::TEMPO_BASE_SLOW,
            controlled: quality::TEMPO_BASE_CONTROLLED,
            fast: quality::TEMPO_BASE_FAST,
            very_fast: quality::TEMPO_BASE_VERY_FAST,
        }
    }
}

/// Set quality scorer configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    /// Per-tempo base scores
    pub tempo_base: TempoBaseScores,
    /// Fraction of the base removed per rep in reserve
    pub rir_attenuation: f64,
    /// Minimum score labelled High
    pub high_threshold: u8,
    /// Scores below this are labelled Low
    pub low_threshold: u8,
}

impl Default for QualityConfig {
    fn default() -> Self {
        Self {
            tempo_base: TempoBaseScores::default(),
            rir_attenuation: quality::RIR_ATTENUATION,
            high_threshold: quality::HIGH_THRESHOLD,
            low_threshold: quality::LOW_THRESHOLD,
        }
    }
}
