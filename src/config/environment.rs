// ABOUTME: Environment configuration for the meal planner runtime
// ABOUTME: Resolves the catalog path and validated engine configuration from environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based runtime configuration

use crate::errors::AppResult;
use pierre_meal_engine::PlannerConfig;
use std::env;
use std::path::PathBuf;
use tracing::info;

/// Environment variable naming a JSON catalog file to use instead of the built-in one
pub const CATALOG_PATH_ENV: &str = "MEAL_CATALOG_PATH";

/// Runtime settings for the planner
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlannerSettings {
    /// Catalog file; `None` selects the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Engine configuration after environment overrides
    pub planner: PlannerConfig,
}

impl PlannerSettings {
    /// Load settings from environment variables
    ///
    /// Engine overrides (`MEAL_PLANNER_DEFAULT_COUNT`, `MEAL_PLANNER_CALORIE_WEIGHT`,
    /// `MEAL_PLANNER_FIBER_THRESHOLD_G`) are applied and validated here, so an
    /// invalid value is reported instead of silently replaced by defaults.
    ///
    /// # Errors
    ///
    /// Returns an error if an engine override cannot be parsed or fails validation
    pub fn from_env() -> AppResult<Self> {
        let catalog_path = env::var(CATALOG_PATH_ENV)
            .ok()
            .map(|p| p.trim().to_owned())
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);
        let planner = PlannerConfig::load()?;

        info!(
            catalog = catalog_path
                .as_ref()
                .map_or_else(|| "built-in".to_owned(), |p| p.display().to_string()),
            default_count = planner.suggestions.default_count,
            "Loaded planner settings"
        );

        Ok(Self {
            catalog_path,
            planner,
        })
    }

    /// Replace the catalog path, e.g. from a command-line flag
    #[must_use]
    pub fn with_catalog_path(mut self, path: Option<PathBuf>) -> Self {
        if path.is_some() {
            self.catalog_path = path;
        }
        self
    }
}
