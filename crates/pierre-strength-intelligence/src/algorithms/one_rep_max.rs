// ABOUTME: Estimated one-rep-max algorithms using rep-based formulas
// ABOUTME: Implements Epley (default), Brzycki, and Lombardi with shared sentinel and 1-rep rules

use crate::round_to_tenth;
use pierre_strength_core::errors::AppError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::trace;

/// Reps at which the Brzycki denominator reaches zero
const BRZYCKI_REP_LIMIT: u32 = 37;

/// Estimated one-rep-max algorithm
///
/// - `Epley`: `w × (1 + r/30)`, the formula every stored history was computed with
/// - `Brzycki`: `w × 36 / (37 − r)`, tighter for low rep sets, capped at 36 reps
/// - `Lombardi`: `w × r^0.10`, flatter for high rep sets
///
/// All formulas share the same edge policy: a non-positive weight or zero
/// reps yields `0.0` ("no valid lift"), and a single rep returns the weight
/// itself. Results are rounded to one decimal.
///
/// # Scientific References
///
/// - Epley, B. (1985). "Poundage chart." *Boyd Epley Workout*.
/// - Brzycki, M. (1993). "Strength testing: predicting a one-rep max from reps-to-fatigue." *JOPERD*, 64(1), 88-90.
/// - Lombardi, V.P. (1989). *Beginning Weight Training*. W.C. Brown.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum OneRepMaxAlgorithm {
    /// Epley formula: w × (1 + r/30)
    #[default]
    Epley,
    /// Brzycki formula: w × 36 / (37 − r)
    Brzycki,
    /// Lombardi formula: w × r^0.10
    Lombardi,
}

impl OneRepMaxAlgorithm {
    /// Estimate a one-rep max from a submaximal set
    ///
    /// Total function: invalid input degrades to the `0.0` sentinel.
    ///
    /// ```rust
    /// use pierre_strength_intelligence::algorithms::OneRepMaxAlgorithm;
    ///
    /// assert!((OneRepMaxAlgorithm::Epley.estimate(200.0, 10) - 266.7).abs() < 1e-9);
    /// assert!((OneRepMaxAlgorithm::Epley.estimate(200.0, 1) - 200.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn estimate(&self, weight: f64, reps: u32) -> f64 {
        if reps == 0 || weight <= 0.0 || !weight.is_finite() {
            return 0.0;
        }
        if reps == 1 {
            return weight;
        }

        let reps_f64 = f64::from(reps);
        let raw = match self {
            Self::Epley => weight * (1.0 + reps_f64 / 30.0),
            Self::Brzycki => {
                let capped = f64::from(reps.min(BRZYCKI_REP_LIMIT - 1));
                weight * 36.0 / (f64::from(BRZYCKI_REP_LIMIT) - capped)
            }
            Self::Lombardi => weight * reps_f64.powf(0.1),
        };

        let estimate = round_to_tenth(raw);
        trace!(algorithm = self.name(), weight, reps, estimate, "e1RM estimated");
        estimate
    }

    /// Get algorithm name for logging and debugging
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Epley => "epley",
            Self::Brzycki => "brzycki",
            Self::Lombardi => "lombardi",
        }
    }

    /// Get the formula as a string
    #[must_use]
    pub const fn formula(&self) -> &'static str {
        match self {
            Self::Epley => "w x (1 + r/30)",
            Self::Brzycki => "w x 36 / (37 - r)",
            Self::Lombardi => "w x r^0.10",
        }
    }
}

impl FromStr for OneRepMaxAlgorithm {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "epley" => Ok(Self::Epley),
            "brzycki" => Ok(Self::Brzycki),
            "lombardi" => Ok(Self::Lombardi),
            other => Err(AppError::invalid_input(format!(
                "Unknown e1RM algorithm: '{other}'. Valid options: epley, brzycki, lombardi"
            ))),
        }
    }
}
