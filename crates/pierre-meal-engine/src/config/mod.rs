// ABOUTME: Configuration module for pierre-meal-engine crate
// ABOUTME: Global planner configuration with environment overrides and validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Configuration error types
pub mod error;
/// Scoring weights and suggestion settings
pub mod scoring;

pub use error::ConfigError;
pub use scoring::{
    ConditionBonuses, HealthNoteMessages, MacroBands, PercentBand, ScoringConfig,
    SuggestionConfig,
};

use serde::{Deserialize, Serialize};
use std::env;
use std::str::FromStr;
use std::sync::OnceLock;
use tracing::warn;

/// Global configuration singleton
static PLANNER_CONFIG: OnceLock<PlannerConfig> = OnceLock::new();

/// Main planner configuration container
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PlannerConfig {
    /// Scorer weights and thresholds
    pub scoring: ScoringConfig,
    /// Suggestion generation settings
    pub suggestions: SuggestionConfig,
}

impl PlannerConfig {
    /// Get the global configuration instance
    pub fn global() -> &'static Self {
        PLANNER_CONFIG.get_or_init(|| {
            Self::load().unwrap_or_else(|e| {
                warn!("Failed to load planner config: {e}, using defaults");
                Self::default()
            })
        })
    }

    /// Load configuration from defaults plus environment overrides
    ///
    /// # Errors
    ///
    /// Returns an error if an environment variable holds an invalid value or validation fails
    pub fn load() -> Result<Self, ConfigError> {
        let config = Self::default().apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a weight is negative or not finite, or a macro band is malformed
    pub fn validate(&self) -> Result<(), ConfigError> {
        let scoring = &self.scoring;
        let bonuses = &scoring.condition_bonuses;
        let weights = [
            (scoring.base_score, "base_score must be finite and non-negative"),
            (
                scoring.calorie_proximity_weight,
                "calorie_proximity_weight must be finite and non-negative",
            ),
            (scoring.balance_bonus, "balance_bonus must be finite and non-negative"),
            (scoring.fiber_bonus, "fiber_bonus must be finite and non-negative"),
            (
                scoring.fiber_threshold_g,
                "fiber_threshold_g must be finite and non-negative",
            ),
            (
                bonuses.anemia_iron_rich,
                "anemia_iron_rich bonus must be finite and non-negative",
            ),
            (
                bonuses.diabetes_low_glycemic,
                "diabetes_low_glycemic bonus must be finite and non-negative",
            ),
            (
                bonuses.hypertension_low_sodium,
                "hypertension_low_sodium bonus must be finite and non-negative",
            ),
            (
                bonuses.heart_healthy,
                "heart_healthy bonus must be finite and non-negative",
            ),
        ];
        if let Some((_, message)) = weights
            .iter()
            .find(|(value, _)| !value.is_finite() || *value < 0.0)
        {
            return Err(ConfigError::ValueOutOfRange(*message));
        }
        let bands = &scoring.balanced_macros;
        if !(bands.carbs_percent.is_valid()
            && bands.protein_percent.is_valid()
            && bands.fat_percent.is_valid())
        {
            return Err(ConfigError::InvalidRange(
                "macro bands must satisfy 0 <= min <= max <= 100",
            ));
        }
        if self.suggestions.default_count == 0 {
            return Err(ConfigError::ValueOutOfRange(
                "default suggestion count must be at least 1",
            ));
        }
        Ok(())
    }

    fn apply_env_var<T: FromStr>(env_var_name: &str, target: &mut T) -> Result<(), ConfigError> {
        if let Ok(val) = env::var(env_var_name) {
            *target = val
                .parse()
                .map_err(|_| ConfigError::Parse(format!("Invalid {env_var_name}")))?;
        }
        Ok(())
    }

    fn apply_env_overrides(mut self) -> Result<Self, ConfigError> {
        Self::apply_env_var(
            "MEAL_PLANNER_DEFAULT_COUNT",
            &mut self.suggestions.default_count,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_CALORIE_WEIGHT",
            &mut self.scoring.calorie_proximity_weight,
        )?;
        Self::apply_env_var(
            "MEAL_PLANNER_FIBER_THRESHOLD_G",
            &mut self.scoring.fiber_threshold_g,
        )?;
        Ok(self)
    }
}
