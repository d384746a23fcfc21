// ABOUTME: Logged set models: tempo choice, set record, quality label, and session best
// ABOUTME: Defines the strongly-typed inputs consumed by the set quality and e1RM algorithms
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifting tempo reported for a set
///
/// Tempo is a proxy for control and time under tension, so slower tempos score
/// higher in the quality model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Tempo {
    /// Deliberately slow eccentric and concentric
    Slow,
    /// Controlled, full range of motion
    Controlled,
    /// Quick reps with some loss of control
    Fast,
    /// Rushed or bounced reps
    VeryFast,
}

impl Tempo {
    /// All tempo choices in display order
    pub const ALL: [Self; 4] = [Self::Controlled, Self::Slow, Self::Fast, Self::VeryFast];

    /// Wire name used in storage and CLI arguments
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Slow => "slow",
            Self::Controlled => "controlled",
            Self::Fast => "fast",
            Self::VeryFast => "very-fast",
        }
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tempo {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "slow" => Ok(Self::Slow),
            "controlled" => Ok(Self::Controlled),
            "fast" => Ok(Self::Fast),
            "very-fast" | "very_fast" => Ok(Self::VeryFast),
            other => Err(AppError::invalid_input(format!(
                "Unknown tempo: '{other}'. Valid options: slow, controlled, fast, very-fast"
            ))),
        }
    }
}

/// One completed set as logged by the athlete
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SetRecord {
    /// Load lifted, in the caller's unit
    pub weight: f64,
    /// Completed repetitions
    pub reps: u32,
    /// Reps in reserve (0 = failure). Expected 0-6 but not enforced here
    pub rir: i32,
    /// Tempo the set was performed at
    pub tempo: Tempo,
}

impl SetRecord {
    /// Create a set record
    #[must_use]
    pub const fn new(weight: f64, reps: u32, rir: i32, tempo: Tempo) -> Self {
        Self {
            weight,
            reps,
            rir,
            tempo,
        }
    }
}

/// Coarse classification of a set's quality score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum QualityLabel {
    /// Score below the low threshold
    Low,
    /// Score between the thresholds
    Medium,
    /// Score at or above the high threshold
    High,
}

impl QualityLabel {
    /// Display name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for QualityLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QualityLabel {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown quality label: '{other}'. Valid options: Low, Medium, High"
            ))),
        }
    }
}

/// Quality score derived from a set's tempo and reps in reserve
///
/// Recomputed on demand; never the authoritative record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityAssessment {
    /// Score in `[0, 100]`
    pub score: u8,
    /// Label assigned from the score thresholds
    pub label: QualityLabel,
}

/// Best set of one exercise within one workout session
///
/// "Best" is the set with the highest estimated one-rep max; comparing best
/// efforts session to session is the progressive-overload signal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SessionBest {
    /// Load of the best set
    pub weight: f64,
    /// Reps of the best set
    pub reps: u32,
    /// Reps in reserve of the best set
    pub rir: i32,
    /// Quality score of the best set
    pub quality_score: u8,
}

impl SessionBest {
    /// Build a session best from a set and its quality score
    #[must_use]
    pub const fn from_record(record: &SetRecord, quality_score: u8) -> Self {
        Self {
            weight: record.weight,
            reps: record.reps,
            rir: record.rir,
            quality_score,
        }
    }
}
