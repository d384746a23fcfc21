// ABOUTME: Training-log and analytics models re-exported from the core crate
// ABOUTME: Sets, session bests, exercises, workouts, and prediction values
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_strength_core::models::*;
