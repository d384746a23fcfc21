// ABOUTME: Main library entry point for Pierre Strength workout analytics
// ABOUTME: Wires the analytics engine to training-history storage, logging, and the CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Strength
//!
//! Workout analytics for strength training: set quality, estimated one-rep
//! max, session-over-session comparison, load-increase advice, stagnation
//! detection, and regression-based strength prediction.
//!
//! ## Architecture
//!
//! - **`pierre-strength-core`**: errors, models, and tuning constants
//! - **`pierre-strength-intelligence`**: pure analytics functions and configuration
//! - **this crate**: history storage, the progress analyzer, logging, and the CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_strength::database_plugins::InMemoryHistoryRepository;
//! use pierre_strength::errors::AppResult;
//! use pierre_strength::intelligence::ProgressAnalyzer;
//! use uuid::Uuid;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let analyzer = ProgressAnalyzer::new(InMemoryHistoryRepository::new());
//!     let forecast = analyzer.predict(Uuid::new_v4(), "bench-press").await?;
//!     println!("confidence: {}", forecast.prediction.confidence);
//!     Ok(())
//! }
//! ```

/// Tuning constants and environment variable names
pub mod constants;

/// Training history storage backends
pub mod database_plugins;

/// Unified error handling
pub mod errors;

/// e1RM history files for offline prediction
pub mod history_import;

/// Analytics engine and the repository-backed progress analyzer
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Training-log and analytics data models
pub mod models;
