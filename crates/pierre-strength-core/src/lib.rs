// ABOUTME: Core types and constants for Pierre strength-training analytics
// ABOUTME: Foundation crate with error handling, training-log models, and tuning constants
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength Core
//!
//! Foundation crate shared by the analytics engine, the history stores, and
//! the CLI. It changes rarely, which keeps incremental builds of the
//! workspace cheap.
//!
//! ## Modules
//!
//! - **errors**: `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: set records, quality, session bests, prediction values, training log
//! - **constants**: named tuning constants for every heuristic

/// Unified error handling with standard error codes
pub mod errors;

/// Tuning constants organized by analytics domain
pub mod constants;

/// Training log and analytics data models
pub mod models;
