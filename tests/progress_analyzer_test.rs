// ABOUTME: Integration tests for the progress analyzer over a stored training log
// ABOUTME: Verifies history building, strength forecasts, and coaching reports end to end
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use chrono::{DateTime, Duration, TimeZone, Utc};
use pierre_strength::database_plugins::{HistoryRepository, InMemoryHistoryRepository};
use pierre_strength::errors::ErrorCode;
use pierre_strength::intelligence::{
    predict_strength_with, AnalyticsConfig, ProgressAnalyzer, SessionComparison, WeeklyTrend,
};
use pierre_strength::models::{
    Confidence, Exercise, SetLog, SetRecord, Tempo, TrainingSettings, WeightUnit, Workout,
};
use uuid::Uuid;

const BENCH: &str = "bench-press";

fn day(offset: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 2, 3, 18, 0, 0).unwrap() + Duration::days(offset)
}

async fn setup() -> Result<(InMemoryHistoryRepository, Uuid)> {
    let repository = InMemoryHistoryRepository::new();
    let user_id = Uuid::new_v4();
    repository
        .upsert_exercise(user_id, &Exercise::new(BENCH, "Bench Press"))
        .await?;
    Ok((repository, user_id))
}

async fn log_session(
    repository: &InMemoryHistoryRepository,
    user_id: Uuid,
    performed_at: DateTime<Utc>,
    sets: &[(f64, u32, i32)],
) -> Result<Workout> {
    let workout = Workout::new(performed_at);
    repository.record_workout(user_id, &workout).await?;
    for (number, &(weight, reps, rir)) in (1_u32..).zip(sets) {
        let set = SetLog {
            workout_id: workout.id,
            exercise_id: BENCH.to_owned(),
            set_number: number,
            record: SetRecord::new(weight, reps, rir, Tempo::Controlled),
            rest_time_seconds: None,
        };
        repository.log_set(user_id, &set).await?;
    }
    Ok(workout)
}

// ============================================================================
// History
// ============================================================================

#[tokio::test]
async fn test_history_uses_best_set_per_session() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(185.0, 8, 2), (185.0, 7, 1)]).await?;
    log_session(&repository, user_id, day(3), &[(175.0, 10, 2), (195.0, 5, 1)]).await?;

    let analyzer = ProgressAnalyzer::new(repository);
    let history = analyzer.exercise_history(user_id, BENCH).await?;

    assert_eq!(history.total_sessions, 2);
    assert_eq!(history.e1rms(), vec![234.3, 233.3]);
    let latest = history.latest().unwrap();
    assert!((latest.best.weight - 175.0).abs() < f64::EPSILON);
    assert_eq!(latest.best.quality_score, 68);
    assert_eq!(history.first_session_at, Some(day(0)));
    assert_eq!(history.last_session_at, Some(day(3)));
    assert!(!history.has_one_month_data);
    Ok(())
}

#[tokio::test]
async fn test_session_index_counts_sessions_without_valid_lift() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(0.0, 8, 2)]).await?;
    log_session(&repository, user_id, day(2), &[(185.0, 8, 2)]).await?;
    log_session(&repository, user_id, day(30), &[(190.0, 8, 2)]).await?;

    let analyzer = ProgressAnalyzer::new(repository);
    let history = analyzer.exercise_history(user_id, BENCH).await?;

    assert_eq!(history.total_sessions, 3);
    let indexes: Vec<u32> = history.points().iter().map(|p| p.session_index).collect();
    assert_eq!(indexes, vec![1, 2]);
    // The span runs from the first recorded session, valid or not
    assert!(history.has_one_month_data);
    Ok(())
}

#[tokio::test]
async fn test_unknown_exercise_is_not_found() -> Result<()> {
    let (repository, user_id) = setup().await?;
    let analyzer = ProgressAnalyzer::new(repository);

    let error = analyzer.coach(user_id, "snatch").await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    assert!(error.message.contains("snatch"));

    let error = analyzer.predict(Uuid::new_v4(), BENCH).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);
    Ok(())
}

// ============================================================================
// Coaching
// ============================================================================

#[tokio::test]
async fn test_coach_without_sessions_gives_starting_advice() -> Result<()> {
    let (repository, user_id) = setup().await?;
    let analyzer = ProgressAnalyzer::new(repository);

    let report = analyzer.coach(user_id, BENCH).await?;
    assert!(report.latest.is_none());
    assert!(report.comparison.is_none());
    assert_eq!(report.comparison_message, "");
    assert!(!report.should_increase_weight);
    assert_eq!(
        report.suggestion,
        "Start with a comfortable weight for 8–12 reps"
    );
    assert_eq!(report.next_suggestion, report.suggestion);
    assert!(!report.is_stagnant);
    assert_eq!(report.weekly_message, "");
    Ok(())
}

#[tokio::test]
async fn test_coach_first_session() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(185.0, 9, 2)]).await?;
    let analyzer = ProgressAnalyzer::new(repository);

    let report = analyzer.coach(user_id, BENCH).await?;
    assert!(report.previous.is_none());
    assert_eq!(report.comparison_message, "");
    assert_eq!(
        report.suggestion,
        "Start with a comfortable weight for 8–12 reps"
    );
    assert_eq!(report.next_suggestion, "Try 185 lbs for 10 reps");
    Ok(())
}

#[tokio::test]
async fn test_coach_rep_progression_to_load_increase() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(185.0, 8, 2), (185.0, 7, 1)]).await?;
    log_session(&repository, user_id, day(3), &[(185.0, 10, 2)]).await?;
    log_session(&repository, user_id, day(6), &[(185.0, 12, 2)]).await?;
    let analyzer = ProgressAnalyzer::new(repository);

    let report = analyzer.coach(user_id, BENCH).await?;
    assert_eq!(
        report.comparison,
        Some(SessionComparison::RepIncrease { delta: 2 })
    );
    assert_eq!(
        report.comparison_message,
        "+2 reps at same weight. Keep pushing!"
    );

    // Advice for the latest session comes from the one before it
    assert!(!report.should_increase_weight);
    assert_eq!(report.suggestion, "Try 185 lbs for 11 reps");
    assert_eq!(report.next_suggestion, "Try 190 lbs for 8–10 reps");

    assert!(!report.is_stagnant);
    // Everything falls inside the recent window
    assert!(report.weekly_trend.is_none());
    Ok(())
}

#[tokio::test]
async fn test_coach_detects_stagnation() -> Result<()> {
    let (repository, user_id) = setup().await?;
    for offset in [0, 3, 6] {
        log_session(&repository, user_id, day(offset), &[(200.0, 6, 2)]).await?;
    }
    let analyzer = ProgressAnalyzer::new(repository);

    let report = analyzer.coach(user_id, BENCH).await?;
    assert!(report.is_stagnant);
    assert_eq!(report.comparison, Some(SessionComparison::Plateau));
    assert_eq!(
        report.comparison_message,
        "Same as last time. Aim for +1 rep or improve tempo."
    );
    Ok(())
}

#[tokio::test]
async fn test_coach_weekly_trend_windows() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(200.0, 5, 2)]).await?;
    log_session(&repository, user_id, day(10), &[(200.0, 6, 2)]).await?;
    log_session(&repository, user_id, day(20), &[(205.0, 6, 2)]).await?;
    log_session(&repository, user_id, day(31), &[(210.0, 6, 2)]).await?;
    let analyzer = ProgressAnalyzer::new(repository);

    // Recent (day 17, day 31]: 246.0 and 252.0; prior (day 3, day 17]: 240.0
    let report = analyzer.coach(user_id, BENCH).await?;
    assert_eq!(
        report.weekly_trend,
        Some(WeeklyTrend::Up {
            diff: 9.0,
            unit: WeightUnit::Lb
        })
    );
    assert_eq!(
        report.weekly_message,
        "Estimated strength up ~9 lbs over past 2 weeks."
    );
    Ok(())
}

#[tokio::test]
async fn test_coach_respects_configured_unit() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(80.0, 8, 2)]).await?;
    log_session(&repository, user_id, day(2), &[(82.5, 8, 2)]).await?;

    let config = AnalyticsConfig {
        unit: WeightUnit::Kg,
        ..AnalyticsConfig::default()
    };
    let analyzer = ProgressAnalyzer::with_config(repository, config);

    let report = analyzer.coach(user_id, BENCH).await?;
    assert_eq!(
        report.comparison_message,
        "+2.5 kg at similar reps. Great progress!"
    );
    assert_eq!(analyzer.config().unit, WeightUnit::Kg);
    Ok(())
}

// ============================================================================
// Forecast
// ============================================================================

#[tokio::test]
async fn test_forecast_uses_saved_rest_days() -> Result<()> {
    let (repository, user_id) = setup().await?;
    repository
        .save_settings(
            user_id,
            &TrainingSettings {
                rest_days_per_week: 3,
            },
        )
        .await?;
    log_session(&repository, user_id, day(0), &[(200.0, 5, 2)]).await?;
    log_session(&repository, user_id, day(10), &[(200.0, 6, 2)]).await?;
    log_session(&repository, user_id, day(20), &[(205.0, 6, 2)]).await?;
    log_session(&repository, user_id, day(31), &[(210.0, 6, 2)]).await?;
    let analyzer = ProgressAnalyzer::new(repository);

    let forecast = analyzer.predict(user_id, BENCH).await?;
    assert_eq!(forecast.exercise_id, BENCH);
    assert_eq!(forecast.rest_days_per_week, 3);
    assert_eq!(forecast.data_points, 4);
    assert_eq!(forecast.current_e1rm, Some(252.0));
    assert!(forecast.has_one_month_data);
    assert_eq!(forecast.prediction.confidence, Confidence::Low);

    let three_month = forecast.prediction.three_month.unwrap();
    let one_year = forecast.prediction.one_year.unwrap();
    assert!(three_month > 252.0);
    assert!(one_year > three_month);
    assert!(forecast.r_squared.unwrap() > 0.9);

    let history = analyzer.exercise_history(user_id, BENCH).await?;
    let direct = predict_strength_with(&history.points(), 3, true, analyzer.config());
    assert_eq!(forecast.prediction, direct);
    Ok(())
}

#[tokio::test]
async fn test_forecast_with_sparse_history() -> Result<()> {
    let (repository, user_id) = setup().await?;
    log_session(&repository, user_id, day(0), &[(185.0, 8, 2)]).await?;
    log_session(&repository, user_id, day(40), &[(190.0, 8, 2)]).await?;
    let analyzer = ProgressAnalyzer::new(repository);

    let forecast = analyzer.predict(user_id, BENCH).await?;
    assert_eq!(forecast.rest_days_per_week, 2);
    assert!(forecast.has_one_month_data);
    assert!(!forecast.prediction.has_projection());
    assert_eq!(forecast.prediction.one_year, None);
    assert_eq!(forecast.r_squared, None);
    Ok(())
}
