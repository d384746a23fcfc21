// ABOUTME: Contract tests shared by every training history backend
// ABOUTME: Runs the same scenarios against the in-memory store, in-memory SQLite, and a SQLite file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use anyhow::Result;
use chrono::{Duration, TimeZone, Utc};
#[cfg(feature = "sqlite")]
use pierre_strength::database_plugins::SqliteHistoryRepository;
use pierre_strength::database_plugins::{HistoryRepository, InMemoryHistoryRepository};
use pierre_strength::errors::ErrorCode;
use pierre_strength::models::{Exercise, SetLog, SetRecord, Tempo, TrainingSettings, Workout};
#[cfg(feature = "sqlite")]
use tempfile::TempDir;
use uuid::Uuid;

fn set(workout: &Workout, exercise_id: &str, set_number: u32, weight: f64, reps: u32) -> SetLog {
    SetLog {
        workout_id: workout.id,
        exercise_id: exercise_id.to_owned(),
        set_number,
        record: SetRecord::new(weight, reps, 2, Tempo::Controlled),
        rest_time_seconds: Some(90),
    }
}

// ============================================================================
// Shared scenarios
// ============================================================================

async fn settings_default_then_saved<R: HistoryRepository>(repository: &R) -> Result<()> {
    let user_id = Uuid::new_v4();
    assert_eq!(
        repository.get_settings(user_id).await?,
        TrainingSettings::default()
    );

    let settings = TrainingSettings {
        rest_days_per_week: 3,
    };
    repository.save_settings(user_id, &settings).await?;
    assert_eq!(repository.get_settings(user_id).await?, settings);

    // Other users keep the defaults
    assert_eq!(
        repository.get_settings(Uuid::new_v4()).await?,
        TrainingSettings::default()
    );
    Ok(())
}

async fn exercise_upsert_and_validation<R: HistoryRepository>(repository: &R) -> Result<()> {
    let user_id = Uuid::new_v4();
    assert!(repository.get_exercise(user_id, "squat").await?.is_none());

    let squat = Exercise::new("squat", "Back Squat").with_rep_range(5, 8);
    repository.upsert_exercise(user_id, &squat).await?;
    assert_eq!(repository.get_exercise(user_id, "squat").await?, Some(squat));

    let renamed = Exercise::new("squat", "High-Bar Squat").with_rep_range(6, 10);
    repository.upsert_exercise(user_id, &renamed).await?;
    assert_eq!(
        repository.get_exercise(user_id, "squat").await?,
        Some(renamed)
    );

    let inverted = Exercise::new("deadlift", "Deadlift").with_rep_range(8, 5);
    let error = repository
        .upsert_exercise(user_id, &inverted)
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::InvalidInput);
    assert!(repository.get_exercise(user_id, "deadlift").await?.is_none());

    // Exercise IDs are scoped per user
    assert!(repository
        .get_exercise(Uuid::new_v4(), "squat")
        .await?
        .is_none());
    Ok(())
}

async fn sessions_are_chronological<R: HistoryRepository>(repository: &R) -> Result<()> {
    let user_id = Uuid::new_v4();
    let start = Utc.with_ymd_and_hms(2025, 3, 1, 7, 30, 0).unwrap();
    repository
        .upsert_exercise(user_id, &Exercise::new("bench", "Bench Press"))
        .await?;

    let late = Workout::new(start + Duration::days(4));
    let early = Workout::new(start);
    let middle = Workout::new(start + Duration::days(2));
    for workout in [&late, &early, &middle] {
        repository.record_workout(user_id, workout).await?;
    }

    // Sets logged out of order
    repository.log_set(user_id, &set(&late, "bench", 2, 190.0, 6)).await?;
    repository.log_set(user_id, &set(&late, "bench", 1, 190.0, 8)).await?;
    repository.log_set(user_id, &set(&early, "bench", 1, 185.0, 8)).await?;
    repository.log_set(user_id, &set(&middle, "row", 1, 135.0, 10)).await?;

    let sessions = repository.exercise_sessions(user_id, "bench").await?;
    assert_eq!(sessions.len(), 2, "workouts without the exercise are skipped");
    assert_eq!(sessions[0].workout_id, early.id);
    assert_eq!(sessions[0].performed_at, start);
    assert_eq!(sessions[1].workout_id, late.id);

    let numbers: Vec<u32> = sessions[1].sets.iter().map(|s| s.set_number).collect();
    assert_eq!(numbers, vec![1, 2]);
    assert_eq!(sessions[1].sets[0].record.reps, 8);
    assert_eq!(sessions[1].sets[0].rest_time_seconds, Some(90));

    let rows = repository.exercise_sessions(user_id, "row").await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].workout_id, middle.id);
    Ok(())
}

async fn relogging_a_set_replaces_it<R: HistoryRepository>(repository: &R) -> Result<()> {
    let user_id = Uuid::new_v4();
    let workout = Workout::new(Utc::now());
    repository.record_workout(user_id, &workout).await?;

    repository.log_set(user_id, &set(&workout, "ohp", 1, 95.0, 8)).await?;
    repository.log_set(user_id, &set(&workout, "ohp", 1, 100.0, 6)).await?;

    let sessions = repository.exercise_sessions(user_id, "ohp").await?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].sets.len(), 1);
    assert!((sessions[0].sets[0].record.weight - 100.0).abs() < f64::EPSILON);
    Ok(())
}

async fn workouts_are_owned<R: HistoryRepository>(repository: &R) -> Result<()> {
    let owner = Uuid::new_v4();
    let intruder = Uuid::new_v4();
    let workout = Workout::new(Utc::now());
    repository.record_workout(owner, &workout).await?;

    // Unknown workout
    let orphan = Workout::new(Utc::now());
    let error = repository
        .log_set(owner, &set(&orphan, "bench", 1, 185.0, 8))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    // Someone else's workout
    let error = repository
        .log_set(intruder, &set(&workout, "bench", 1, 185.0, 8))
        .await
        .unwrap_err();
    assert_eq!(error.code, ErrorCode::ResourceNotFound);

    assert!(repository.record_workout(intruder, &workout).await.is_err());
    assert!(repository
        .exercise_sessions(intruder, "bench")
        .await?
        .is_empty());
    Ok(())
}

async fn rerecording_moves_the_workout<R: HistoryRepository>(repository: &R) -> Result<()> {
    let user_id = Uuid::new_v4();
    let start = Utc.with_ymd_and_hms(2025, 5, 10, 18, 0, 0).unwrap();
    let first = Workout::new(start);
    let mut second = Workout::new(start + Duration::days(1));

    for workout in [&first, &second] {
        repository.record_workout(user_id, workout).await?;
        repository
            .log_set(user_id, &set(workout, "bench", 1, 185.0, 8))
            .await?;
    }

    second.performed_at = start - Duration::days(1);
    repository.record_workout(user_id, &second).await?;

    let sessions = repository.exercise_sessions(user_id, "bench").await?;
    assert_eq!(sessions[0].workout_id, second.id);
    assert_eq!(sessions[0].performed_at, second.performed_at);
    assert_eq!(sessions[1].workout_id, first.id);
    Ok(())
}

async fn run_contract<R: HistoryRepository>(repository: &R) -> Result<()> {
    settings_default_then_saved(repository).await?;
    exercise_upsert_and_validation(repository).await?;
    sessions_are_chronological(repository).await?;
    relogging_a_set_replaces_it(repository).await?;
    workouts_are_owned(repository).await?;
    rerecording_moves_the_workout(repository).await?;
    Ok(())
}

// ============================================================================
// Backends
// ============================================================================

#[tokio::test]
async fn test_in_memory_backend() -> Result<()> {
    run_contract(&InMemoryHistoryRepository::new()).await
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_sqlite_memory_backend() -> Result<()> {
    let repository = SqliteHistoryRepository::new("sqlite::memory:").await?;
    run_contract(&repository).await
}

#[cfg(feature = "sqlite")]
#[tokio::test]
async fn test_sqlite_file_backend_persists() -> Result<()> {
    let dir = TempDir::new()?;
    let url = format!("sqlite:{}", dir.path().join("strength.db").display());
    let user_id = Uuid::new_v4();
    let workout = Workout::new(Utc.with_ymd_and_hms(2025, 6, 1, 6, 0, 0).unwrap());

    {
        let repository = SqliteHistoryRepository::new(&url).await?;
        run_contract(&repository).await?;

        repository
            .upsert_exercise(user_id, &Exercise::new("bench", "Bench Press"))
            .await?;
        repository.record_workout(user_id, &workout).await?;
        repository
            .log_set(user_id, &set(&workout, "bench", 1, 185.0, 8))
            .await?;
        repository.pool().close().await;
    }

    let reopened = SqliteHistoryRepository::new(&url).await?;
    let sessions = reopened.exercise_sessions(user_id, "bench").await?;
    assert_eq!(sessions.len(), 1);
    assert_eq!(sessions[0].performed_at, workout.performed_at);
    assert!(reopened.get_exercise(user_id, "bench").await?.is_some());
    Ok(())
}

#[tokio::test]
async fn test_in_memory_clones_share_storage() -> Result<()> {
    let repository = InMemoryHistoryRepository::new();
    let clone = repository.clone();
    let user_id = Uuid::new_v4();

    clone
        .save_settings(
            user_id,
            &TrainingSettings {
                rest_days_per_week: 1,
            },
        )
        .await?;
    assert_eq!(repository.get_settings(user_id).await?.rest_days_per_week, 1);
    Ok(())
}
