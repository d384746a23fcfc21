// ABOUTME: Strength prediction models: e1RM history points, confidence, and projection results
// ABOUTME: Transient values produced by the regression-based strength predictor
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Estimated one-rep max for one session of one exercise
///
/// `session_index` is the ordinal position among the athlete's sessions for
/// the exercise, not a calendar offset.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct E1rmHistoryPoint {
    /// Ordinal session position (ascending)
    pub session_index: u32,
    /// Estimated one-rep max of the session's best set
    pub e1rm: f64,
}

impl E1rmHistoryPoint {
    /// Create a history point
    #[must_use]
    pub const fn new(session_index: u32, e1rm: f64) -> Self {
        Self {
            session_index,
            e1rm,
        }
    }
}

/// Confidence attached to a strength projection, based on sample count
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Confidence {
    /// Few data points
    Low,
    /// Moderate history
    Medium,
    /// Long history
    High,
}

impl fmt::Display for Confidence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        })
    }
}

impl FromStr for Confidence {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(AppError::invalid_input(format!(
                "Unknown confidence: '{other}'. Valid options: Low, Medium, High"
            ))),
        }
    }
}

/// Multi-horizon strength projection
///
/// `one_year` is only populated when the caller asserts at least one month of
/// history, regardless of how many points exist.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Projected e1RM twelve weeks out
    pub three_month: Option<f64>,
    /// Projected e1RM fifty-two weeks out
    pub one_year: Option<f64>,
    /// Sample-count based confidence
    pub confidence: Confidence,
}

impl PredictionResult {
    /// Result returned when history is too sparse to project
    #[must_use]
    pub const fn insufficient() -> Self {
        Self {
            three_month: None,
            one_year: None,
            confidence: Confidence::Low,
        }
    }

    /// Whether any projection was produced
    #[must_use]
    pub const fn has_projection(&self) -> bool {
        self.three_month.is_some()
    }
}
