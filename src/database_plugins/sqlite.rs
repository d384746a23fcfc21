// ABOUTME: SQLite training history backend using sqlx with idempotent schema migrations
// ABOUTME: Stores timestamps as fixed-width RFC3339 so SQL ordering matches chronological order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::HistoryRepository;
use crate::errors::{AppError, AppResult};
use crate::models::{
    Exercise, ExerciseSession, SetLog, SetRecord, Tempo, TrainingSettings, Workout,
};
use async_trait::async_trait;
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Row, SqlitePool};
use tracing::{debug, info};
use uuid::Uuid;

/// SQLite history repository
#[derive(Clone)]
pub struct SqliteHistoryRepository {
    pool: SqlitePool,
}

impl SqliteHistoryRepository {
    /// Connect to a database and run migrations
    ///
    /// File URLs are opened in read-write-create mode. In-memory URLs use a
    /// single connection, since every SQLite memory connection is its own
    /// database.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection or a migration fails
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = if database_url.contains(":memory:") {
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await?
        } else {
            // Ensure SQLite creates the database file if it doesn't exist
            let connection_options = if database_url.starts_with("sqlite:")
                && !database_url.contains("mode=")
            {
                format!("{database_url}?mode=rwc")
            } else {
                database_url.to_owned()
            };
            SqlitePool::connect(&connection_options).await?
        };

        let repository = Self { pool };
        repository.migrate().await?;
        info!(database_url, "History database ready");
        Ok(repository)
    }

    /// Get a reference to the connection pool
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create tables and indexes if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if a statement fails
    pub async fn migrate(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS training_settings (
                user_id TEXT PRIMARY KEY,
                rest_days_per_week INTEGER NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                user_id TEXT NOT NULL,
                id TEXT NOT NULL,
                name TEXT NOT NULL,
                target_rep_min INTEGER NOT NULL,
                target_rep_max INTEGER NOT NULL,
                planned_set_count INTEGER NOT NULL,
                PRIMARY KEY (user_id, id)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                user_id TEXT NOT NULL,
                performed_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS set_logs (
                workout_id TEXT NOT NULL REFERENCES workouts(id) ON DELETE CASCADE,
                exercise_id TEXT NOT NULL,
                set_number INTEGER NOT NULL,
                weight REAL NOT NULL,
                reps INTEGER NOT NULL,
                rir INTEGER NOT NULL,
                tempo TEXT NOT NULL,
                rest_time_seconds INTEGER,
                PRIMARY KEY (workout_id, exercise_id, set_number)
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS idx_workouts_user_time ON workouts(user_id, performed_at)")
            .execute(&self.pool)
            .await?;
        sqlx::query("CREATE INDEX IF NOT EXISTS idx_set_logs_exercise ON set_logs(exercise_id)")
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn format_timestamp(timestamp: DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(value: &str) -> AppResult<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(value)
        .map(|timestamp| timestamp.with_timezone(&Utc))
        .map_err(|e| AppError::invalid_format(format!("Invalid timestamp '{value}': {e}")))
}

fn parse_uuid(value: &str) -> AppResult<Uuid> {
    Uuid::parse_str(value)
        .map_err(|e| AppError::invalid_format(format!("Invalid UUID '{value}': {e}")))
}

fn column_u32(row: &SqliteRow, column: &str) -> AppResult<u32> {
    let value: i64 = row.try_get(column)?;
    u32::try_from(value)
        .map_err(|_| AppError::invalid_format(format!("Column {column} out of range: {value}")))
}

fn row_to_exercise(row: &SqliteRow) -> AppResult<Exercise> {
    Ok(Exercise {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        target_rep_min: column_u32(row, "target_rep_min")?,
        target_rep_max: column_u32(row, "target_rep_max")?,
        planned_set_count: column_u32(row, "planned_set_count")?,
    })
}

fn row_to_set_log(row: &SqliteRow, workout_id: Uuid, exercise_id: &str) -> AppResult<SetLog> {
    let tempo: String = row.try_get("tempo")?;
    let rir: i64 = row.try_get("rir")?;
    let rest_time_seconds: Option<i64> = row.try_get("rest_time_seconds")?;

    Ok(SetLog {
        workout_id,
        exercise_id: exercise_id.to_owned(),
        set_number: column_u32(row, "set_number")?,
        record: SetRecord {
            weight: row.try_get("weight")?,
            reps: column_u32(row, "reps")?,
            rir: i32::try_from(rir)
                .map_err(|_| AppError::invalid_format(format!("Column rir out of range: {rir}")))?,
            tempo: tempo.parse::<Tempo>()?,
        },
        rest_time_seconds: rest_time_seconds
            .map(|seconds| {
                u32::try_from(seconds).map_err(|_| {
                    AppError::invalid_format(format!(
                        "Column rest_time_seconds out of range: {seconds}"
                    ))
                })
            })
            .transpose()?,
    })
}

#[async_trait]
impl HistoryRepository for SqliteHistoryRepository {
    async fn save_settings(&self, user_id: Uuid, settings: &TrainingSettings) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO training_settings (user_id, rest_days_per_week)
            VALUES ($1, $2)
            ON CONFLICT(user_id) DO UPDATE SET rest_days_per_week = excluded.rest_days_per_week
            ",
        )
        .bind(user_id.to_string())
        .bind(i64::from(settings.rest_days_per_week))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_settings(&self, user_id: Uuid) -> AppResult<TrainingSettings> {
        let row = sqlx::query("SELECT rest_days_per_week FROM training_settings WHERE user_id = $1")
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        row.map_or_else(
            || Ok(TrainingSettings::default()),
            |row| {
                Ok(TrainingSettings {
                    rest_days_per_week: column_u32(&row, "rest_days_per_week")?,
                })
            },
        )
    }

    async fn upsert_exercise(&self, user_id: Uuid, exercise: &Exercise) -> AppResult<()> {
        exercise.validate()?;
        sqlx::query(
            r"
            INSERT INTO exercises (user_id, id, name, target_rep_min, target_rep_max, planned_set_count)
            VALUES ($1, $2, $3, $4, $5, $6)
            ON CONFLICT(user_id, id) DO UPDATE SET
                name = excluded.name,
                target_rep_min = excluded.target_rep_min,
                target_rep_max = excluded.target_rep_max,
                planned_set_count = excluded.planned_set_count
            ",
        )
        .bind(user_id.to_string())
        .bind(&exercise.id)
        .bind(&exercise.name)
        .bind(i64::from(exercise.target_rep_min))
        .bind(i64::from(exercise.target_rep_max))
        .bind(i64::from(exercise.planned_set_count))
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    async fn get_exercise(&self, user_id: Uuid, exercise_id: &str) -> AppResult<Option<Exercise>> {
        let row = sqlx::query(
            r"
            SELECT id, name, target_rep_min, target_rep_max, planned_set_count
            FROM exercises
            WHERE user_id = $1 AND id = $2
            ",
        )
        .bind(user_id.to_string())
        .bind(exercise_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| row_to_exercise(&r)).transpose()
    }

    async fn record_workout(&self, user_id: Uuid, workout: &Workout) -> AppResult<()> {
        let result = sqlx::query(
            r"
            INSERT INTO workouts (id, user_id, performed_at)
            VALUES ($1, $2, $3)
            ON CONFLICT(id) DO UPDATE SET performed_at = excluded.performed_at
            WHERE workouts.user_id = excluded.user_id
            ",
        )
        .bind(workout.id.to_string())
        .bind(user_id.to_string())
        .bind(format_timestamp(workout.performed_at))
        .execute(&self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::invalid_input(format!(
                "Workout {} belongs to another user",
                workout.id
            )));
        }
        Ok(())
    }

    async fn log_set(&self, user_id: Uuid, set: &SetLog) -> AppResult<()> {
        let owned = sqlx::query("SELECT 1 FROM workouts WHERE id = $1 AND user_id = $2")
            .bind(set.workout_id.to_string())
            .bind(user_id.to_string())
            .fetch_optional(&self.pool)
            .await?
            .is_some();
        if !owned {
            return Err(AppError::not_found(format!("Workout {}", set.workout_id)));
        }

        sqlx::query(
            r"
            INSERT OR REPLACE INTO set_logs
                (workout_id, exercise_id, set_number, weight, reps, rir, tempo, rest_time_seconds)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ",
        )
        .bind(set.workout_id.to_string())
        .bind(&set.exercise_id)
        .bind(i64::from(set.set_number))
        .bind(set.record.weight)
        .bind(i64::from(set.record.reps))
        .bind(i64::from(set.record.rir))
        .bind(set.record.tempo.as_str())
        .bind(set.rest_time_seconds.map(i64::from))
        .execute(&self.pool)
        .await?;

        debug!(
            workout_id = %set.workout_id,
            exercise_id = %set.exercise_id,
            set_number = set.set_number,
            "Set logged"
        );
        Ok(())
    }

    async fn exercise_sessions(
        &self,
        user_id: Uuid,
        exercise_id: &str,
    ) -> AppResult<Vec<ExerciseSession>> {
        let rows = sqlx::query(
            r"
            SELECT w.id AS workout_id, w.performed_at, s.set_number, s.weight, s.reps,
                   s.rir, s.tempo, s.rest_time_seconds
            FROM set_logs s
            JOIN workouts w ON w.id = s.workout_id
            WHERE w.user_id = $1 AND s.exercise_id = $2
            ORDER BY w.performed_at ASC, w.id ASC, s.set_number ASC
            ",
        )
        .bind(user_id.to_string())
        .bind(exercise_id)
        .fetch_all(&self.pool)
        .await?;

        let mut sessions: Vec<ExerciseSession> = Vec::new();
        for row in &rows {
            let workout_id = parse_uuid(&row.try_get::<String, _>("workout_id")?)?;
            let set = row_to_set_log(row, workout_id, exercise_id)?;

            match sessions.last_mut() {
                Some(session) if session.workout_id == workout_id => session.sets.push(set),
                _ => {
                    let performed_at = parse_timestamp(&row.try_get::<String, _>("performed_at")?)?;
                    sessions.push(ExerciseSession {
                        workout_id,
                        performed_at,
                        sets: vec![set],
                    });
                }
            }
        }

        Ok(sessions)
    }
}
