// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Re-exports command modules for pierre-strength-cli
// ABOUTME: Provides stateless analytics commands and training-log commands

pub mod analytics;
pub mod history;
