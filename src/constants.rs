// ABOUTME: Tuning constants and environment variable names re-exported from the core crate
// ABOUTME: Single import point for binaries and integration tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use pierre_strength_core::constants::*;
