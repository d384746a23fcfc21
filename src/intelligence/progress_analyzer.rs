// ABOUTME: Progress analyzer turning a stored training log into forecasts and coaching reports
// ABOUTME: Bridges the history repository with the pure analytics in pierre-strength-intelligence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progress Analyzer
//!
//! Session indexes count every session of the exercise, including sessions
//! without a valid lift. Those sessions produce no history point but still
//! advance the index, so gaps in valid data flatten the fitted slope.
//!
//! The one-month gate for the long-horizon projection is computed from the
//! first and last session timestamps.

use crate::database_plugins::HistoryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{
    E1rmHistoryPoint, Exercise, ExerciseSession, PredictionResult, SessionBest,
};
use chrono::{DateTime, Duration, Utc};
use pierre_strength_intelligence::{
    AnalyticsConfig, ProgressionAdvisor, SessionBestSelector, SessionComparison,
    SetQualityScorer, StagnationDetector, StrengthPredictor, WeeklyTrend,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

/// Best set of one session of an exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSummary {
    /// Workout the session belongs to
    pub workout_id: Uuid,
    /// When the workout was performed
    pub performed_at: DateTime<Utc>,
    /// Ordinal position among all sessions of the exercise
    pub session_index: u32,
    /// Highest-e1RM set of the session
    pub best: SessionBest,
    /// Estimated one-rep max of the best set
    pub e1rm: f64,
}

/// Chronological history of one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseHistory {
    /// The exercise definition
    pub exercise: Exercise,
    /// Sessions with a valid lift, oldest first
    pub sessions: Vec<SessionSummary>,
    /// Sessions recorded, with or without a valid lift
    pub total_sessions: usize,
    /// First session timestamp
    pub first_session_at: Option<DateTime<Utc>>,
    /// Last session timestamp
    pub last_session_at: Option<DateTime<Utc>>,
    /// Whether first and last sessions span the one-month threshold
    pub has_one_month_data: bool,
}

impl ExerciseHistory {
    /// e1RM history points for the strength predictor
    #[must_use]
    pub fn points(&self) -> Vec<E1rmHistoryPoint> {
        self.sessions
            .iter()
            .map(|session| E1rmHistoryPoint::new(session.session_index, session.e1rm))
            .collect()
    }

    /// e1RM of each valid session, oldest first
    #[must_use]
    pub fn e1rms(&self) -> Vec<f64> {
        self.sessions.iter().map(|session| session.e1rm).collect()
    }

    /// Most recent valid session
    #[must_use]
    pub fn latest(&self) -> Option<&SessionSummary> {
        self.sessions.last()
    }

    /// Valid session before the most recent one
    #[must_use]
    pub fn previous(&self) -> Option<&SessionSummary> {
        self.sessions.len().checked_sub(2).and_then(|i| self.sessions.get(i))
    }
}

/// Strength projection for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrengthForecast {
    /// Exercise identifier
    pub exercise_id: String,
    /// e1RM of the most recent valid session
    pub current_e1rm: Option<f64>,
    /// History points used for the fit
    pub data_points: usize,
    /// Declared rest days per week
    pub rest_days_per_week: u32,
    /// Whether the long horizon was unlocked
    pub has_one_month_data: bool,
    /// Projections and confidence
    pub prediction: PredictionResult,
    /// Goodness of fit, for diagnostics only
    pub r_squared: Option<f64>,
}

/// Session-over-session coaching for one exercise
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CoachingReport {
    /// Exercise identifier
    pub exercise_id: String,
    /// Most recent valid session
    pub latest: Option<SessionSummary>,
    /// Valid session before it
    pub previous: Option<SessionSummary>,
    /// Structured comparison of latest against previous
    pub comparison: Option<SessionComparison>,
    /// Rendered comparison, empty when there is nothing to compare
    pub comparison_message: String,
    /// Whether the previous session earned a load increase
    pub should_increase_weight: bool,
    /// Target the previous session implied for the latest one
    pub suggestion: String,
    /// Target for the session after the latest one
    pub next_suggestion: String,
    /// Whether the last three sessions are flat
    pub is_stagnant: bool,
    /// Trend between the recent window and the one before
    pub weekly_trend: Option<WeeklyTrend>,
    /// Rendered weekly trend, empty when a window has no sessions
    pub weekly_message: String,
}

/// Analyzer over a history repository
pub struct ProgressAnalyzer<R: HistoryRepository> {
    repository: R,
    config: AnalyticsConfig,
}

impl<R: HistoryRepository> ProgressAnalyzer<R> {
    /// Create an analyzer using the global analytics configuration
    pub fn new(repository: R) -> Self {
        Self::with_config(repository, AnalyticsConfig::global().clone())
    }

    /// Create an analyzer with an explicit configuration
    pub const fn with_config(repository: R, config: AnalyticsConfig) -> Self {
        Self { repository, config }
    }

    /// The underlying repository
    pub const fn repository(&self) -> &R {
        &self.repository
    }

    /// The analytics configuration in use
    pub const fn config(&self) -> &AnalyticsConfig {
        &self.config
    }

    async fn require_exercise(&self, user_id: Uuid, exercise_id: &str) -> AppResult<Exercise> {
        self.repository
            .get_exercise(user_id, exercise_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Exercise {exercise_id}")))
    }

    fn summarize(&self, index: usize, session: &ExerciseSession) -> Option<SessionSummary> {
        let ranked = SessionBestSelector::best_set(
            session.records(),
            self.config.one_rep_max_algorithm(),
        )?;
        let quality = SetQualityScorer::assess_record(ranked.record, &self.config.quality);

        Some(SessionSummary {
            workout_id: session.workout_id,
            performed_at: session.performed_at,
            session_index: u32::try_from(index).unwrap_or(u32::MAX),
            best: SessionBest::from_record(ranked.record, quality.score),
            e1rm: ranked.e1rm,
        })
    }

    /// Build the chronological history of an exercise
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise, or a storage error
    pub async fn exercise_history(
        &self,
        user_id: Uuid,
        exercise_id: &str,
    ) -> AppResult<ExerciseHistory> {
        let exercise = self.require_exercise(user_id, exercise_id).await?;
        let raw_sessions = self
            .repository
            .exercise_sessions(user_id, exercise_id)
            .await?;

        let sessions: Vec<SessionSummary> = raw_sessions
            .iter()
            .enumerate()
            .filter_map(|(index, session)| self.summarize(index, session))
            .collect();

        let first_session_at = raw_sessions.first().map(|session| session.performed_at);
        let last_session_at = raw_sessions.last().map(|session| session.performed_at);
        let has_one_month_data = match (first_session_at, last_session_at) {
            (Some(first), Some(last)) => {
                StrengthPredictor::has_one_month_span(first, last, &self.config.prediction)
            }
            _ => false,
        };

        debug!(
            %user_id,
            exercise_id,
            total_sessions = raw_sessions.len(),
            valid_sessions = sessions.len(),
            has_one_month_data,
            "Exercise history built"
        );

        Ok(ExerciseHistory {
            exercise,
            sessions,
            total_sessions: raw_sessions.len(),
            first_session_at,
            last_session_at,
            has_one_month_data,
        })
    }

    /// Project strength for an exercise using the user's declared rest days
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise, or a storage error
    pub async fn predict(&self, user_id: Uuid, exercise_id: &str) -> AppResult<StrengthForecast> {
        let history = self.exercise_history(user_id, exercise_id).await?;
        let settings = self.repository.get_settings(user_id).await?;
        let points = history.points();

        let projection = StrengthPredictor::project(
            &points,
            settings.rest_days_per_week,
            history.has_one_month_data,
            &self.config.prediction,
        );

        info!(
            %user_id,
            exercise_id,
            data_points = points.len(),
            confidence = %projection.prediction.confidence,
            "Strength forecast computed"
        );

        Ok(StrengthForecast {
            exercise_id: exercise_id.to_owned(),
            current_e1rm: history.latest().map(|session| session.e1rm),
            data_points: points.len(),
            rest_days_per_week: settings.rest_days_per_week,
            has_one_month_data: history.has_one_month_data,
            prediction: projection.prediction,
            r_squared: projection.regression.map(|regression| regression.r_squared),
        })
    }

    /// Target message derived from a session best, or the starting advice
    fn target_after(&self, exercise: &Exercise, best: Option<&SessionBest>) -> (bool, String) {
        let Some(best) = best else {
            return (
                false,
                format!(
                    "Start with a comfortable weight for {}–{} reps",
                    exercise.target_rep_min, exercise.target_rep_max
                ),
            );
        };

        let label = SetQualityScorer::label_for(best.quality_score, &self.config.quality);
        let increase = ProgressionAdvisor::should_increase_weight(
            best.reps,
            exercise.target_rep_max,
            best.rir,
            label,
            &self.config.progression,
        );
        let target = ProgressionAdvisor::suggest_target(
            best.weight,
            best.reps,
            exercise.target_rep_min,
            exercise.target_rep_max,
            increase,
            &self.config.progression,
            self.config.unit,
        );
        (increase, target.to_string())
    }

    /// Compare the recent trend window against the one before it
    fn weekly_trend(&self, history: &ExerciseHistory) -> Option<WeeklyTrend> {
        let anchor = history.latest()?.performed_at;
        let window = Duration::days(self.config.progression.trend_window_days);
        let recent_start = anchor - window;
        let prior_start = recent_start - window;

        let in_window = |start: DateTime<Utc>, end: DateTime<Utc>| -> Vec<f64> {
            history
                .sessions
                .iter()
                .filter(|session| session.performed_at > start && session.performed_at <= end)
                .map(|session| session.e1rm)
                .collect()
        };

        WeeklyTrend::between(
            &in_window(recent_start, anchor),
            &in_window(prior_start, recent_start),
            self.config.unit,
        )
    }

    /// Coach the latest session of an exercise against the one before
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` for an unknown exercise, or a storage error
    pub async fn coach(&self, user_id: Uuid, exercise_id: &str) -> AppResult<CoachingReport> {
        let history = self.exercise_history(user_id, exercise_id).await?;
        let latest = history.latest().cloned();
        let previous = history.previous().cloned();

        let comparison = match (&latest, &previous) {
            (Some(latest), Some(previous)) => {
                SessionComparison::between(&latest.best, &previous.best, self.config.unit)
            }
            _ => None,
        };
        let comparison_message = comparison.map(|c| c.to_string()).unwrap_or_default();

        let (should_increase_weight, suggestion) = self.target_after(
            &history.exercise,
            previous.as_ref().map(|session| &session.best),
        );
        let (_, next_suggestion) =
            self.target_after(&history.exercise, latest.as_ref().map(|session| &session.best));

        let is_stagnant =
            StagnationDetector::is_stagnant(&history.e1rms(), &self.config.progression);
        let weekly_trend = self.weekly_trend(&history);
        let weekly_message = weekly_trend.map(|t| t.to_string()).unwrap_or_default();

        info!(
            %user_id,
            exercise_id,
            should_increase_weight,
            is_stagnant,
            "Coaching report built"
        );

        Ok(CoachingReport {
            exercise_id: exercise_id.to_owned(),
            latest,
            previous,
            comparison,
            comparison_message,
            should_increase_weight,
            suggestion,
            next_suggestion,
            is_stagnant,
            weekly_trend,
            weekly_message,
        })
    }
}
