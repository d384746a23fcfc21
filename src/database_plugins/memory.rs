// ABOUTME: In-memory training history backend built on sharded concurrent maps
// ABOUTME: Used by tests, benchmarks, and callers that do not need persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::HistoryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseSession, SetLog, TrainingSettings, Workout};
use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

/// Owner and timestamp of a stored workout
#[derive(Debug, Clone, Copy)]
struct StoredWorkout {
    user_id: Uuid,
    workout: Workout,
}

/// In-memory history repository
///
/// `DashMap` gives sharded locking, so concurrent writers for different
/// users rarely contend. Cloning shares the underlying storage.
#[derive(Clone, Default)]
pub struct InMemoryHistoryRepository {
    settings: Arc<DashMap<Uuid, TrainingSettings>>,
    exercises: Arc<DashMap<(Uuid, String), Exercise>>,
    workouts: Arc<DashMap<Uuid, StoredWorkout>>,
    /// Sets keyed by workout ID
    sets: Arc<DashMap<Uuid, Vec<SetLog>>>,
}

impl InMemoryHistoryRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn workouts_of(&self, user_id: Uuid) -> Vec<Workout> {
        self.workouts
            .iter()
            .filter(|entry| entry.user_id == user_id)
            .map(|entry| entry.workout)
            .collect()
    }
}

#[async_trait]
impl HistoryRepository for InMemoryHistoryRepository {
    async fn save_settings(&self, user_id: Uuid, settings: &TrainingSettings) -> AppResult<()> {
        self.settings.insert(user_id, *settings);
        Ok(())
    }

    async fn get_settings(&self, user_id: Uuid) -> AppResult<TrainingSettings> {
        Ok(self
            .settings
            .get(&user_id)
            .map(|entry| *entry)
            .unwrap_or_default())
    }

    async fn upsert_exercise(&self, user_id: Uuid, exercise: &Exercise) -> AppResult<()> {
        exercise.validate()?;
        self.exercises
            .insert((user_id, exercise.id.clone()), exercise.clone());
        Ok(())
    }

    async fn get_exercise(&self, user_id: Uuid, exercise_id: &str) -> AppResult<Option<Exercise>> {
        Ok(self
            .exercises
            .get(&(user_id, exercise_id.to_owned()))
            .map(|entry| entry.clone()))
    }

    async fn record_workout(&self, user_id: Uuid, workout: &Workout) -> AppResult<()> {
        if let Some(existing) = self.workouts.get(&workout.id) {
            if existing.user_id != user_id {
                return Err(AppError::invalid_input(format!(
                    "Workout {} belongs to another user",
                    workout.id
                )));
            }
        }
        self.workouts.insert(
            workout.id,
            StoredWorkout {
                user_id,
                workout: *workout,
            },
        );
        Ok(())
    }

    async fn log_set(&self, user_id: Uuid, set: &SetLog) -> AppResult<()> {
        let owned = self
            .workouts
            .get(&set.workout_id)
            .is_some_and(|entry| entry.user_id == user_id);
        if !owned {
            return Err(AppError::not_found(format!("Workout {}", set.workout_id)));
        }

        let mut sets = self.sets.entry(set.workout_id).or_default();
        sets.retain(|existing| {
            existing.exercise_id != set.exercise_id || existing.set_number != set.set_number
        });
        sets.push(set.clone());
        debug!(
            workout_id = %set.workout_id,
            exercise_id = %set.exercise_id,
            set_number = set.set_number,
            "Set logged in memory"
        );
        Ok(())
    }

    async fn exercise_sessions(
        &self,
        user_id: Uuid,
        exercise_id: &str,
    ) -> AppResult<Vec<ExerciseSession>> {
        let mut sessions: Vec<ExerciseSession> = self
            .workouts_of(user_id)
            .into_iter()
            .filter_map(|workout| {
                let mut sets: Vec<SetLog> = self
                    .sets
                    .get(&workout.id)?
                    .iter()
                    .filter(|set| set.exercise_id == exercise_id)
                    .cloned()
                    .collect();
                if sets.is_empty() {
                    return None;
                }
                sets.sort_by_key(|set| set.set_number);
                Some(ExerciseSession {
                    workout_id: workout.id,
                    performed_at: workout.performed_at,
                    sets,
                })
            })
            .collect();

        sessions.sort_by(|a, b| {
            a.performed_at
                .cmp(&b.performed_at)
                .then_with(|| a.workout_id.cmp(&b.workout_id))
        });
        Ok(sessions)
    }
}
