// ABOUTME: Algorithm selection configuration for strength calculations
// ABOUTME: Selects the one-rep-max estimation formula by name
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Algorithm Selection Configuration
//!
//! Algorithms are stored by name so configuration stays plain data; the name
//! is resolved to an enum during validation.
//!
//! ```bash
//! export PIERRE_STRENGTH_E1RM_ALGORITHM=brzycki
//! ```

use serde::{Deserialize, Serialize};

/// Algorithm Selection Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlgorithmConfig {
    /// One-rep-max formula: `epley`, `brzycki`, or `lombardi`
    #[serde(default = "default_one_rep_max_algorithm")]
    pub one_rep_max: String,
}

/// Default e1RM algorithm (epley, as logged history was computed with it)
fn default_one_rep_max_algorithm() -> String {
    "epley".to_owned()
}

impl Default for AlgorithmConfig {
    fn default() -> Self {
        Self {
            one_rep_max: default_one_rep_max_algorithm(),
        }
    }
}
