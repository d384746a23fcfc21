// ABOUTME: Core data models for strength-training analytics
// ABOUTME: Re-exports set, prediction, and training log types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `SetRecord`, `Tempo`: a logged set and how it was performed
//! - `QualityAssessment`, `QualityLabel`: derived set quality
//! - `SessionBest`: best set of an exercise within a session
//! - `E1rmHistoryPoint`, `PredictionResult`, `Confidence`: prediction inputs and outputs
//! - `Exercise`, `Workout`, `SetLog`, `ExerciseSession`, `TrainingSettings`: the training log

mod prediction;
mod set;
mod training;

pub use prediction::{Confidence, E1rmHistoryPoint, PredictionResult};
pub use set::{QualityAssessment, QualityLabel, SessionBest, SetRecord, Tempo};
pub use training::{
    Exercise, ExerciseSession, SetLog, TrainingSettings, WeightUnit, Workout,
};
