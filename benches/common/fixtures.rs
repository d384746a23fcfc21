// ABOUTME: Benchmark fixtures for generating realistic strength-training data
// ABOUTME: Provides deterministic set, session, and e1RM history generation for reproducible runs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Benchmark fixtures for generating realistic strength-training data.

#![allow(dead_code)]

use chrono::{DateTime, Duration, Utc};
use pierre_strength::models::{E1rmHistoryPoint, SetLog, SetRecord, Tempo, Workout};

/// Predefined history sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum HistoryBatchSize {
    /// A few weeks of training
    Small,
    /// Roughly a year of training
    Medium,
    /// Several years of training
    Large,
}

impl HistoryBatchSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Small => 10,
            Self::Medium => 150,
            Self::Large => 1000,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

/// Tempo rotation so quality scores vary across sets
const fn tempo_for(index: usize) -> Tempo {
    match index % 4 {
        0 => Tempo::Controlled,
        1 => Tempo::Slow,
        2 => Tempo::Fast,
        _ => Tempo::VeryFast,
    }
}

/// Generate the sets of one session with slowly rising load
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_sets(count: usize) -> Vec<SetRecord> {
    (0..count)
        .map(|index| {
            let weight = 135.0 + (index % 20) as f64 * 5.0;
            let reps = 5 + (index % 8) as u32;
            let rir = (index % 4) as i32;
            SetRecord::new(weight, reps, rir, tempo_for(index))
        })
        .collect()
}

/// Generate an ascending e1RM history with a small sawtooth
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
#[must_use]
pub fn generate_history(count: usize) -> Vec<E1rmHistoryPoint> {
    (0..count)
        .map(|index| {
            let trend = (index as f64).mul_add(1.5, 200.0);
            let noise = ((index * 7) % 5) as f64 - 2.0;
            E1rmHistoryPoint::new(index as u32, trend + noise)
        })
        .collect()
}

/// Generate workouts two days apart, ending at `base_date`
#[allow(clippy::cast_possible_wrap)]
#[must_use]
pub fn generate_workouts(count: usize, base_date: DateTime<Utc>) -> Vec<Workout> {
    (0..count)
        .map(|index| {
            let days_ago = ((count - index) * 2) as i64;
            Workout::new(base_date - Duration::days(days_ago))
        })
        .collect()
}

/// Generate `sets_per_workout` logged sets of one exercise for each workout
#[allow(clippy::cast_possible_truncation)]
#[must_use]
pub fn generate_set_logs(
    workouts: &[Workout],
    exercise_id: &str,
    sets_per_workout: usize,
) -> Vec<SetLog> {
    workouts
        .iter()
        .enumerate()
        .flat_map(|(index, workout)| {
            generate_sets(sets_per_workout)
                .into_iter()
                .enumerate()
                .map(move |(set_index, record)| SetLog {
                    workout_id: workout.id,
                    exercise_id: exercise_id.to_owned(),
                    set_number: set_index as u32 + 1,
                    record: SetRecord {
                        weight: record.weight + (index / 3) as f64 * 5.0,
                        ..record
                    },
                    rest_time_seconds: Some(120),
                })
        })
        .collect()
}
