// ABOUTME: Training-log commands for pierre-strength-cli
// ABOUTME: Handles exercise definitions, settings, set logging, and coaching reports against SQLite
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::Utc;
use pierre_strength::{
    database_plugins::{HistoryRepository, SqliteHistoryRepository},
    errors::AppResult,
    intelligence::{assess_quality, ProgressAnalyzer},
    models::{Exercise, SetLog, SetRecord, Tempo, TrainingSettings, Workout},
};
use serde_json::json;
use tracing::info;
use uuid::Uuid;

use crate::helpers::display::display_json;

/// Arguments of the `log` command
pub struct LogSetArgs {
    pub exercise_id: String,
    pub weight: f64,
    pub reps: u32,
    pub rir: i32,
    pub tempo: Tempo,
    pub workout_id: Option<Uuid>,
    pub rest_time_seconds: Option<u32>,
}

/// Open the history database
pub async fn connect(database_url: &str) -> AppResult<SqliteHistoryRepository> {
    info!("Connecting to database: {}", database_url);
    SqliteHistoryRepository::new(database_url).await
}

/// Create or update an exercise
pub async fn define_exercise(
    repository: &SqliteHistoryRepository,
    user_id: Uuid,
    id: String,
    name: Option<String>,
    rep_min: u32,
    rep_max: u32,
    planned_sets: u32,
) -> AppResult<()> {
    let name = name.unwrap_or_else(|| id.clone());
    let mut exercise = Exercise::new(id, name).with_rep_range(rep_min, rep_max);
    exercise.planned_set_count = planned_sets;

    repository.upsert_exercise(user_id, &exercise).await?;
    info!(exercise_id = %exercise.id, "Exercise saved");
    display_json(&exercise)
}

/// Store the declared rest days per week
pub async fn settings(
    repository: &SqliteHistoryRepository,
    user_id: Uuid,
    rest_days_per_week: u32,
) -> AppResult<()> {
    let settings = TrainingSettings { rest_days_per_week };
    repository.save_settings(user_id, &settings).await?;
    display_json(&settings)
}

/// Log one set, creating the exercise and workout when needed
pub async fn log_set(
    repository: &SqliteHistoryRepository,
    user_id: Uuid,
    args: LogSetArgs,
) -> AppResult<()> {
    if repository
        .get_exercise(user_id, &args.exercise_id)
        .await?
        .is_none()
    {
        let exercise = Exercise::new(args.exercise_id.clone(), args.exercise_id.clone());
        repository.upsert_exercise(user_id, &exercise).await?;
        info!(exercise_id = %exercise.id, "Exercise created with default rep range");
    }

    let workout_id = if let Some(workout_id) = args.workout_id {
        workout_id
    } else {
        let workout = Workout::new(Utc::now());
        repository.record_workout(user_id, &workout).await?;
        info!(workout_id = %workout.id, "Workout recorded");
        workout.id
    };

    let logged_sets = repository
        .exercise_sessions(user_id, &args.exercise_id)
        .await?
        .into_iter()
        .find(|session| session.workout_id == workout_id)
        .map_or(0, |session| session.sets.len());
    let set_number = u32::try_from(logged_sets).unwrap_or(u32::MAX).saturating_add(1);

    let set = SetLog {
        workout_id,
        exercise_id: args.exercise_id,
        set_number,
        record: SetRecord::new(args.weight, args.reps, args.rir, args.tempo),
        rest_time_seconds: args.rest_time_seconds,
    };
    repository.log_set(user_id, &set).await?;

    let quality = assess_quality(set.record.tempo, set.record.rir);
    display_json(&json!({
        "set": set,
        "quality": quality,
    }))
}

/// Print forecast and coaching for an exercise
pub async fn report(
    repository: SqliteHistoryRepository,
    user_id: Uuid,
    exercise_id: &str,
) -> AppResult<()> {
    let analyzer = ProgressAnalyzer::new(repository);
    let forecast = analyzer.predict(user_id, exercise_id).await?;
    let coaching = analyzer.coach(user_id, exercise_id).await?;

    display_json(&json!({
        "forecast": forecast,
        "coaching": coaching,
    }))
}
