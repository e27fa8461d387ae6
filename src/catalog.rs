// ABOUTME: Built-in meal catalog embedded at compile time and catalog loading by settings
// ABOUTME: Chooses between the embedded JSON and a user-supplied catalog file
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::config::PlannerSettings;
use crate::errors::AppResult;
use pierre_meal_core::errors::CatalogResult;
use pierre_meal_core::models::MealCatalog;
use std::sync::Arc;
use tracing::info;

/// Catalog JSON shipped with the crate
pub const BUILTIN_CATALOG_JSON: &str = include_str!("../data/meal_catalog.json");

/// Parse the built-in catalog
///
/// # Errors
///
/// Returns an error if the embedded JSON fails validation
pub fn builtin_catalog() -> CatalogResult<MealCatalog> {
    MealCatalog::from_json_str(BUILTIN_CATALOG_JSON)
}

/// Load the catalog selected by `settings`
///
/// # Errors
///
/// Returns an error if the catalog file is missing, malformed, or invalid
pub fn load_catalog(settings: &PlannerSettings) -> AppResult<Arc<MealCatalog>> {
    let catalog = match &settings.catalog_path {
        Some(path) => {
            let catalog = MealCatalog::from_path(path)?;
            info!(path = %path.display(), templates = catalog.len(), "Loaded meal catalog from file");
            catalog
        }
        None => {
            let catalog = builtin_catalog()?;
            info!(templates = catalog.len(), "Loaded built-in meal catalog");
            catalog
        }
    };
    Ok(Arc::new(catalog))
}
