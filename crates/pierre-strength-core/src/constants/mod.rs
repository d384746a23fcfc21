// ABOUTME: Named tuning constants for the strength analytics algorithms
// ABOUTME: Defaults for quality scoring, progression advice, and strength prediction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Tuning constants
//!
//! These are product-tuning knobs, not empirically fitted parameters. They
//! seed the defaults of the analytics configuration, which can override each
//! of them at runtime.

/// Set quality scoring
pub mod quality {
    /// Base score for a slow tempo
    pub const TEMPO_BASE_SLOW: f64 = 95.0;
    /// Base score for a controlled tempo
    pub const TEMPO_BASE_CONTROLLED: f64 = 85.0;
    /// Base score for a fast tempo
    pub const TEMPO_BASE_FAST: f64 = 40.0;
    /// Base score for a very fast tempo
    pub const TEMPO_BASE_VERY_FAST: f64 = 15.0;

    /// Fraction of the tempo base removed per rep in reserve
    ///
    /// RIR 0 keeps the full base, RIR 6 keeps 40% of it.
    pub const RIR_ATTENUATION: f64 = 0.1;

    /// Scores at or above this are labelled High
    pub const HIGH_THRESHOLD: u8 = 70;
    /// Scores below this are labelled Low
    pub const LOW_THRESHOLD: u8 = 40;

    /// Upper bound of the score scale
    pub const MAX_SCORE: f64 = 100.0;
}

/// Progressive overload advice
pub mod progression {
    /// Highest reps in reserve that still qualifies for a load increase
    pub const MAX_RIR_FOR_INCREASE: i32 = 3;
    /// Load added when the athlete tops out the rep range
    pub const WEIGHT_INCREMENT: f64 = 5.0;
    /// Width of the suggested rep window after a load increase
    pub const REP_WINDOW_SPAN: u32 = 2;
    /// Session-to-session e1RM change treated as flat
    pub const STAGNATION_TOLERANCE: f64 = 1.0;
    /// Number of recent sessions inspected for stagnation
    pub const STAGNATION_WINDOW: usize = 3;
    /// Length of each window compared by the weekly trend summary
    pub const TREND_WINDOW_DAYS: i64 = 14;

    /// Default bottom of a new exercise's rep range
    pub const DEFAULT_TARGET_REP_MIN: u32 = 8;
    /// Default top of a new exercise's rep range
    pub const DEFAULT_TARGET_REP_MAX: u32 = 12;
    /// Default planned working sets for a new exercise
    pub const DEFAULT_PLANNED_SETS: u32 = 3;
}

/// Strength prediction
pub mod prediction {
    /// Minimum history points before any projection is made
    pub const MIN_HISTORY_POINTS: usize = 3;
    /// Weeks covered by the short horizon
    pub const THREE_MONTH_WEEKS: u32 = 12;
    /// Weeks covered by the long horizon
    pub const ONE_YEAR_WEEKS: u32 = 52;
    /// Days in a training week
    pub const DAYS_PER_WEEK: u32 = 7;

    /// Recovery factor before rest-day credit
    ///
    /// Heuristic discount applied to the raw regression projection.
    pub const RECOVERY_BASE: f64 = 0.85;
    /// Recovery factor credit per declared rest day
    pub const RECOVERY_PER_REST_DAY: f64 = 0.05;

    /// History points needed for Medium confidence
    pub const MEDIUM_CONFIDENCE_POINTS: usize = 5;
    /// History points needed for High confidence
    pub const HIGH_CONFIDENCE_POINTS: usize = 10;

    /// Span between first and last session that unlocks the one-year horizon
    pub const ONE_MONTH_SPAN_SECS: i64 = 30 * 24 * 60 * 60;

    /// Rest days assumed when a user has not configured any
    pub const DEFAULT_REST_DAYS_PER_WEEK: u32 = 2;
}

/// Environment variable names for analytics configuration overrides
pub mod env_config {
    /// One-rep-max formula selection
    pub const ONE_REP_MAX_ALGORITHM: &str = "PIERRE_STRENGTH_E1RM_ALGORITHM";
    /// Weight unit used in messages
    pub const WEIGHT_UNIT: &str = "PIERRE_STRENGTH_WEIGHT_UNIT";
    /// Load increment for target suggestions
    pub const WEIGHT_INCREMENT: &str = "PIERRE_STRENGTH_WEIGHT_INCREMENT";
    /// RIR ceiling for load increases
    pub const MAX_RIR_FOR_INCREASE: &str = "PIERRE_STRENGTH_MAX_RIR_FOR_INCREASE";
    /// Stagnation tolerance
    pub const STAGNATION_TOLERANCE: &str = "PIERRE_STRENGTH_STAGNATION_TOLERANCE";
    /// Quality high threshold
    pub const QUALITY_HIGH_THRESHOLD: &str = "PIERRE_STRENGTH_QUALITY_HIGH_THRESHOLD";
    /// Quality low threshold
    pub const QUALITY_LOW_THRESHOLD: &str = "PIERRE_STRENGTH_QUALITY_LOW_THRESHOLD";
    /// RIR attenuation per rep in reserve
    pub const RIR_ATTENUATION: &str = "PIERRE_STRENGTH_RIR_ATTENUATION";
    /// Minimum history points for prediction
    pub const MIN_HISTORY_POINTS: &str = "PIERRE_STRENGTH_MIN_HISTORY_POINTS";
    /// Recovery factor base
    pub const RECOVERY_BASE: &str = "PIERRE_STRENGTH_RECOVERY_BASE";
    /// Recovery factor credit per rest day
    pub const RECOVERY_PER_REST_DAY: &str = "PIERRE_STRENGTH_RECOVERY_PER_REST_DAY";
}

/// Service identity used in structured logs
pub mod service_names {
    /// Name reported by the CLI and library logging
    pub const PIERRE_STRENGTH: &str = "pierre-strength";
}
