// ABOUTME: Training log models persisted by history stores: exercises, workouts, and set logs
// ABOUTME: Also carries per-user training settings and the display weight unit
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SetRecord;
use crate::constants::{prediction, progression};
use crate::errors::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Unit used when rendering weights in coaching messages
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightUnit {
    /// Pounds
    #[default]
    Lb,
    /// Kilograms
    Kg,
}

impl WeightUnit {
    /// Suffix appended to weights in messages
    #[must_use]
    pub const fn suffix(&self) -> &'static str {
        match self {
            Self::Lb => "lbs",
            Self::Kg => "kg",
        }
    }
}

impl fmt::Display for WeightUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for WeightUnit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "lb" | "lbs" => Ok(Self::Lb),
            "kg" | "kgs" => Ok(Self::Kg),
            other => Err(AppError::invalid_input(format!(
                "Unknown weight unit: '{other}'. Valid options: lb, kg"
            ))),
        }
    }
}

/// Per-user training preferences that feed the strength predictor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainingSettings {
    /// Declared rest days per week (1-3 in practice)
    pub rest_days_per_week: u32,
}

impl Default for TrainingSettings {
    fn default() -> Self {
        Self {
            rest_days_per_week: prediction::DEFAULT_REST_DAYS_PER_WEEK,
        }
    }
}

/// Exercise template with its prescribed rep range
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Exercise {
    /// Stable identifier (e.g. `bench-press`)
    pub id: String,
    /// Display name
    pub name: String,
    /// Bottom of the prescribed rep range
    pub target_rep_min: u32,
    /// Top of the prescribed rep range
    pub target_rep_max: u32,
    /// Planned working sets per session
    pub planned_set_count: u32,
}

impl Exercise {
    /// Create an exercise with the default rep range
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            target_rep_min: progression::DEFAULT_TARGET_REP_MIN,
            target_rep_max: progression::DEFAULT_TARGET_REP_MAX,
            planned_set_count: progression::DEFAULT_PLANNED_SETS,
        }
    }

    /// Set the prescribed rep range
    #[must_use]
    pub const fn with_rep_range(mut self, min: u32, max: u32) -> Self {
        self.target_rep_min = min;
        self.target_rep_max = max;
        self
    }

    /// Reject templates whose rep range is empty or inverted
    ///
    /// # Errors
    ///
    /// Returns `AppError::InvalidInput` if the range is inverted or starts at zero
    pub fn validate(&self) -> Result<(), AppError> {
        if self.target_rep_min == 0 || self.target_rep_min > self.target_rep_max {
            return Err(AppError::invalid_input(format!(
                "Invalid rep range {}-{} for exercise '{}'",
                self.target_rep_min, self.target_rep_max, self.id
            )));
        }
        Ok(())
    }
}

/// One training session on a given date
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workout {
    /// Workout identifier
    pub id: Uuid,
    /// When the session was performed
    pub performed_at: DateTime<Utc>,
}

impl Workout {
    /// Create a workout with a fresh identifier
    #[must_use]
    pub fn new(performed_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            performed_at,
        }
    }
}

/// A set as stored in the training log
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    /// Workout the set belongs to
    pub workout_id: Uuid,
    /// Exercise the set belongs to
    pub exercise_id: String,
    /// 1-based position within the exercise for this workout
    pub set_number: u32,
    /// The set itself
    pub record: SetRecord,
    /// Rest taken before the set, if timed
    pub rest_time_seconds: Option<u32>,
}

/// All sets of one exercise within one workout, in set order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseSession {
    /// Workout identifier
    pub workout_id: Uuid,
    /// When the workout was performed
    pub performed_at: DateTime<Utc>,
    /// Sets ordered by `set_number`
    pub sets: Vec<SetLog>,
}

impl ExerciseSession {
    /// Iterate over the raw set records
    pub fn records(&self) -> impl Iterator<Item = &SetRecord> {
        self.sets.iter().map(|set| &set.record)
    }
}
