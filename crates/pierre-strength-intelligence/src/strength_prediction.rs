// ABOUTME: Strength predictor projecting e1RM forward with a recovery-discounted linear trend
// ABOUTME: Converts calendar horizons into sessions via the declared training frequency
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Strength Prediction
//!
//! The horizon is measured in sessions, not days: `7 − rest_days` sessions
//! per week, times 12 or 52 weeks, added to the last session index.
//!
//! The projection is multiplied by `recovery_base + rest_days × recovery_per_rest_day`.
//! That factor is a tuning heuristic and is not fitted to the athlete's data.
//!
//! Confidence depends on sample count alone. The fit's R² is reported for
//! diagnostics but never changes the rating.

use crate::config::{AnalyticsConfig, PredictionConfig};
use crate::round_to_tenth;
use crate::statistical_analysis::{RegressionResult, StatisticalAnalyzer};
use chrono::{DateTime, Utc};
use pierre_strength_core::constants::prediction::DAYS_PER_WEEK;
use pierre_strength_core::models::{Confidence, E1rmHistoryPoint, PredictionResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prediction together with the inputs that shaped it
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrengthProjection {
    /// The rounded projections and confidence
    pub prediction: PredictionResult,
    /// The fitted trend; `None` below the minimum history
    pub regression: Option<RegressionResult>,
    /// Discount applied to the raw projection
    pub recovery_factor: f64,
    /// Sessions per week assumed when converting horizons
    pub training_days_per_week: u32,
}

/// Strength predictor
pub struct StrengthPredictor;

impl StrengthPredictor {
    /// Project e1RM three months and one year ahead
    ///
    /// `history` must be in ascending session order. Below
    /// `min_history_points` the result carries no projection and `Low`
    /// confidence. The one-year projection additionally requires
    /// `has_one_month_data`.
    #[must_use]
    pub fn predict(
        history: &[E1rmHistoryPoint],
        rest_days_per_week: u32,
        has_one_month_data: bool,
        config: &PredictionConfig,
    ) -> PredictionResult {
        Self::project(history, rest_days_per_week, has_one_month_data, config).prediction
    }

    /// Same as [`Self::predict`], keeping the regression and recovery factor
    ///
    /// Training days per week are `7 - rest_days_per_week`, saturating at
    /// zero. With more than seven rest days both projections are the fitted
    /// value at the last session index scaled by the recovery factor.
    #[must_use]
    pub fn project(
        history: &[E1rmHistoryPoint],
        rest_days_per_week: u32,
        has_one_month_data: bool,
        config: &PredictionConfig,
    ) -> StrengthProjection {
        let recovery_factor = Self::recovery_factor(rest_days_per_week, config);
        let training_days_per_week = DAYS_PER_WEEK.saturating_sub(rest_days_per_week);

        let last = match history.last() {
            Some(last) if history.len() >= config.min_history_points => last,
            _ => {
                debug!(
                    points = history.len(),
                    required = config.min_history_points,
                    "Not enough history to project strength"
                );
                return StrengthProjection {
                    prediction: PredictionResult::insufficient(),
                    regression: None,
                    recovery_factor,
                    training_days_per_week,
                };
            }
        };

        let regression = StatisticalAnalyzer::linear_regression(history);
        let last_index = f64::from(last.session_index);
        let project_weeks = |weeks: u32| {
            let sessions = f64::from(training_days_per_week) * f64::from(weeks);
            round_to_tenth(regression.value_at(last_index + sessions) * recovery_factor)
        };

        let three_month = project_weeks(config.three_month_weeks);
        let one_year = has_one_month_data.then(|| project_weeks(config.one_year_weeks));
        let confidence = Self::confidence(history.len(), config);

        debug!(
            slope = regression.slope,
            r_squared = regression.r_squared,
            recovery_factor,
            three_month,
            ?one_year,
            %confidence,
            "Strength projected"
        );

        StrengthProjection {
            prediction: PredictionResult {
                three_month: Some(three_month),
                one_year,
                confidence,
            },
            regression: Some(regression),
            recovery_factor,
            training_days_per_week,
        }
    }

    /// Heuristic discount for declared recovery
    #[must_use]
    #[allow(clippy::suboptimal_flops)]
    pub fn recovery_factor(rest_days_per_week: u32, config: &PredictionConfig) -> f64 {
        config.recovery_base + f64::from(rest_days_per_week) * config.recovery_per_rest_day
    }

    /// Confidence tier from the number of history points
    #[must_use]
    pub const fn confidence(points: usize, config: &PredictionConfig) -> Confidence {
        if points >= config.high_confidence_points {
            Confidence::High
        } else if points >= config.medium_confidence_points {
            Confidence::Medium
        } else {
            Confidence::Low
        }
    }

    /// Whether the first and last sessions are at least the configured span apart
    #[must_use]
    pub fn has_one_month_span(
        first: DateTime<Utc>,
        last: DateTime<Utc>,
        config: &PredictionConfig,
    ) -> bool {
        (last - first).num_seconds() >= config.one_month_span_secs
    }
}

/// Strength prediction with the global analytics configuration
#[must_use]
pub fn predict_strength(
    history: &[E1rmHistoryPoint],
    rest_days_per_week: u32,
    has_one_month_data: bool,
) -> PredictionResult {
    predict_strength_with(
        history,
        rest_days_per_week,
        has_one_month_data,
        AnalyticsConfig::global(),
    )
}

/// Strength prediction with an explicit configuration
#[must_use]
pub fn predict_strength_with(
    history: &[E1rmHistoryPoint],
    rest_days_per_week: u32,
    has_one_month_data: bool,
    config: &AnalyticsConfig,
) -> PredictionResult {
    StrengthPredictor::predict(
        history,
        rest_days_per_week,
        has_one_month_data,
        &config.prediction,
    )
}

/// One-month gate for the long horizon, computed from session timestamps
#[must_use]
pub fn has_one_month_span(first: DateTime<Utc>, last: DateTime<Utc>) -> bool {
    StrengthPredictor::has_one_month_span(first, last, &AnalyticsConfig::global().prediction)
}
