// ABOUTME: Analytics configuration for set quality, progression advice, and strength prediction
// ABOUTME: Orchestrates domain-specific configs and provides env overrides, validation, and a global instance
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Analytics Configuration Module
//!
//! Every heuristic constant of the analytics engine is exposed here so it can
//! be tuned without touching the algorithms.
//!
//! # Module Structure
//!
//! - `quality` - tempo base scores, RIR attenuation, label thresholds
//! - `progression` - load increment, RIR ceiling, stagnation, trend windows
//! - `prediction` - horizons, recovery discount, confidence tiers
//! - `algorithms` - one-rep-max formula selection
//!
//! # Loading order
//!
//! 1. Defaults from `pierre_strength_core::constants`
//! 2. `PIERRE_STRENGTH_*` environment overrides
//! 3. Validation

pub mod algorithms;
pub mod error;
pub mod prediction;
pub mod progression;
pub mod quality;

pub use algorithms::AlgorithmConfig;
pub use error::ConfigError;
pub use prediction::PredictionConfig;
pub use progression::ProgressionConfig;
pub use quality::{QualityConfig, TempoBaseScores};

use crate::algorithms::OneRepMaxAlgorithm;
use pierre_strength_core::constants::env_config;
use pierre_strength_core::models::WeightUnit;
use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static ANALYTICS_CONFIG: OnceLock<AnalyticsConfig> = OnceLock::new();

/// Main analytics configuration container
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnalyticsConfig {
    /// Set quality scoring
    pub quality: QualityConfig,
    /// Progressive overload advice
    pub progression: ProgressionConfig,
    /// Strength prediction
    pub prediction: PredictionConfig,
    /// Algorithm selection
    pub algorithms: AlgorithmConfig,
    /// Unit used when rendering weights in messages
    #[serde(default)]
    pub unit: WeightUnit,
}

impl AnalyticsConfig {
    /// Get the global configuration instance
    ///
    /// Loaded once from the environment; falls back to defaults if the
    /// environment holds invalid values.
    pub fn global() -> &'static Self {
        ANALYTICS_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load analytics config: {}, using defaults", e);
                Self::default()
            })
        })
    }

    /// Load configuration from defaults and environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if environment variables contain invalid values or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Resolve the configured one-rep-max formula
    ///
    /// Unknown names fall back to the default formula; `validate` rejects them
    /// up front for loaded configurations.
    #[must_use]
    pub fn one_rep_max_algorithm(&self) -> OneRepMaxAlgorithm {
        OneRepMaxAlgorithm::from_str(&self.algorithms.one_rep_max).unwrap_or_else(|_| {
            warn!(
                algorithm = %self.algorithms.one_rep_max,
                "Unknown e1RM algorithm, using default"
            );
            OneRepMaxAlgorithm::default()
        })
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error describing the first invalid field
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_quality()?;
        self.validate_progression()?;
        self.validate_prediction()?;

        OneRepMaxAlgorithm::from_str(&self.algorithms.one_rep_max)
            .map_err(|e| ConfigError::Parse(e.message))?;

        Ok(())
    }

    fn validate_quality(&self) -> Result<(), ConfigError> {
        let quality = &self.quality;
        let bases = [
            quality.tempo_base.slow,
            quality.tempo_base.controlled,
            quality.tempo_base.fast,
            quality.tempo_base.very_fast,
        ];
        if bases.iter().any(|base| !(0.0..=100.0).contains(base)) {
            return Err(ConfigError::ValueOutOfRange(
                "tempo base scores must be within 0-100",
            ));
        }
        if !(0.0..=1.0).contains(&quality.rir_attenuation) {
            return Err(ConfigError::ValueOutOfRange(
                "rir_attenuation must be within 0.0-1.0",
            ));
        }
        if quality.low_threshold >= quality.high_threshold {
            return Err(ConfigError::InvalidRange(
                "quality low_threshold must be below high_threshold",
            ));
        }
        if quality.high_threshold > 100 {
            return Err(ConfigError::ValueOutOfRange(
                "quality high_threshold must be at most 100",
            ));
        }
        Ok(())
    }

    fn validate_progression(&self) -> Result<(), ConfigError> {
        let progression = &self.progression;
        if progression.weight_increment <= 0.0 || !progression.weight_increment.is_finite() {
            return Err(ConfigError::ValueOutOfRange(
                "weight_increment must be a positive number",
            ));
        }
        if progression.max_rir_for_increase < 0 {
            return Err(ConfigError::ValueOutOfRange(
                "max_rir_for_increase must not be negative",
            ));
        }
        if progression.stagnation_tolerance < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "stagnation_tolerance must not be negative",
            ));
        }
        if progression.trend_window_days <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "trend_window_days must be positive",
            ));
        }
        Ok(())
    }

    fn validate_prediction(&self) -> Result<(), ConfigError> {
        let prediction = &self.prediction;
        if prediction.min_history_points == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "min_history_points must be at least 1",
            ));
        }
        if prediction.three_month_weeks >= prediction.one_year_weeks {
            return Err(ConfigError::InvalidRange(
                "three_month_weeks must be shorter than one_year_weeks",
            ));
        }
        if prediction.medium_confidence_points > prediction.high_confidence_points {
            return Err(ConfigError::InvalidRange(
                "medium_confidence_points must not exceed high_confidence_points",
            ));
        }
        if prediction.recovery_base <= 0.0 || prediction.recovery_per_rest_day < 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "recovery factor terms must be positive",
            ));
        }
        if prediction.one_month_span_secs <= 0 {
            return Err(ConfigError::ValueOutOfRange(
                "one_month_span_secs must be positive",
            ));
        }
        Ok(())
    }

    /// Helper function to parse and apply an environment variable override
    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    /// Apply environment variable overrides
    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            env_config::ONE_REP_MAX_ALGORITHM,
            &mut self.algorithms.one_rep_max,
        )?;
        Self::apply_env_var(env_config::WEIGHT_UNIT, &mut self.unit)?;

        // Quality overrides
        Self::apply_env_var(
            env_config::RIR_ATTENUATION,
            &mut self.quality.rir_attenuation,
        )?;
        Self::apply_env_var(
            env_config::QUALITY_HIGH_THRESHOLD,
            &mut self.quality.high_threshold,
        )?;
        Self::apply_env_var(
            env_config::QUALITY_LOW_THRESHOLD,
            &mut self.quality.low_threshold,
        )?;

        // Progression overrides
        Self::apply_env_var(
            env_config::WEIGHT_INCREMENT,
            &mut self.progression.weight_increment,
        )?;
        Self::apply_env_var(
            env_config::MAX_RIR_FOR_INCREASE,
            &mut self.progression.max_rir_for_increase,
        )?;
        Self::apply_env_var(
            env_config::STAGNATION_TOLERANCE,
            &mut self.progression.stagnation_tolerance,
        )?;

        // Prediction overrides
        Self::apply_env_var(
            env_config::MIN_HISTORY_POINTS,
            &mut self.prediction.min_history_points,
        )?;
        Self::apply_env_var(
            env_config::RECOVERY_BASE,
            &mut self.prediction.recovery_base,
        )?;
        Self::apply_env_var(
            env_config::RECOVERY_PER_REST_DAY,
            &mut self.prediction.recovery_per_rest_day,
        )?;

        Ok(self)
    }
}
