// ABOUTME: Training history storage abstraction with in-memory and SQLite backends
// ABOUTME: Persists settings, exercises, workouts, and set logs consumed by the progress analyzer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::errors::AppResult;
use crate::models::{Exercise, ExerciseSession, SetLog, TrainingSettings, Workout};
use async_trait::async_trait;
use uuid::Uuid;

pub mod memory;
#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use memory::InMemoryHistoryRepository;
#[cfg(feature = "sqlite")]
pub use sqlite::SqliteHistoryRepository;

/// Storage for one athlete's training log
///
/// Every call is scoped to a user; data never leaks between users.
#[async_trait]
pub trait HistoryRepository: Send + Sync {
    // ================================
    // Settings
    // ================================

    /// Store the user's training settings, replacing any previous value
    async fn save_settings(&self, user_id: Uuid, settings: &TrainingSettings) -> AppResult<()>;

    /// Get the user's training settings, or the defaults if none were saved
    async fn get_settings(&self, user_id: Uuid) -> AppResult<TrainingSettings>;

    // ================================
    // Exercises
    // ================================

    /// Create or replace an exercise definition
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` if the rep range is inconsistent
    async fn upsert_exercise(&self, user_id: Uuid, exercise: &Exercise) -> AppResult<()>;

    /// Get an exercise definition by ID
    async fn get_exercise(&self, user_id: Uuid, exercise_id: &str) -> AppResult<Option<Exercise>>;

    // ================================
    // Training log
    // ================================

    /// Record a workout, replacing the timestamp if it already exists
    async fn record_workout(&self, user_id: Uuid, workout: &Workout) -> AppResult<()>;

    /// Log a set, replacing any set with the same workout, exercise, and number
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the workout was never recorded for this user
    async fn log_set(&self, user_id: Uuid, set: &SetLog) -> AppResult<()>;

    /// All sessions of an exercise
    ///
    /// Only workouts with at least one set of the exercise are returned,
    /// ordered by `performed_at` ascending, with sets ordered by `set_number`.
    async fn exercise_sessions(
        &self,
        user_id: Uuid,
        exercise_id: &str,
    ) -> AppResult<Vec<ExerciseSession>>;
}
