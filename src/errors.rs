// ABOUTME: Error types re-exported from the core crate
// ABOUTME: Keeps crate::errors paths stable for the repository, analyzer, and CLI
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! `AppError` carries an `ErrorCode`, a message, and an optional source.
//! Analytics functions never return it; only boundaries do.

pub use pierre_strength_core::errors::*;
