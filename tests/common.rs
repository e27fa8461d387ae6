// ABOUTME: Shared test utilities and fixtures for meal planner integration tests
// ABOUTME: Provides template and profile builders, deterministic engines, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `pierre_meal_planner`

use pierre_meal_planner::catalog::builtin_catalog;
use pierre_meal_planner::models::{
    DietType, Gender, GlycemicIndex, HealthCondition, Macros, MealCatalog, MealSlot, MealTemplate,
    MemberProfile, Severity,
};
use pierre_meal_planner::{MealEngine, PlannerConfig, SequentialIdGenerator};
use std::env;
use std::sync::{Arc, Once};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Fixed timestamp stamped into every test suggestion id
pub const TEST_TIMESTAMP_MILLIS: i64 = 1_700_000_000_000;

/// Initialize quiet logging for tests; `TEST_LOG=DEBUG` shows engine traces
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Balanced, scalable vegetarian template with no tags or allergens
pub fn template(id: &str, slot: MealSlot) -> MealTemplate {
    MealTemplate {
        id: id.to_owned(),
        name: format!("Test meal {id}"),
        slot,
        cuisine: "North Indian".to_owned(),
        diet_type: DietType::Vegetarian,
        base_calories: 400,
        ingredients: vec!["1 cup rice".to_owned(), "2 tbsp oil".to_owned()],
        macros: Macros {
            carbs: 60.0,
            protein: 20.0,
            fat: 20.0,
            fiber: 4.0,
        },
        health_tags: Vec::new(),
        allergens: Vec::new(),
        glycemic_index: GlycemicIndex::Medium,
        preparation_time: 20,
        scalable: true,
    }
}

/// `template` with the given health tags
pub fn tagged(id: &str, slot: MealSlot, tags: &[&str]) -> MealTemplate {
    let mut meal = template(id, slot);
    meal.health_tags = tags.iter().map(|t| (*t).to_owned()).collect();
    meal
}

/// Adult member with no restrictions
pub fn profile() -> MemberProfile {
    MemberProfile {
        age: 35,
        gender: Gender::Female,
        ..MemberProfile::default()
    }
}

/// Adult member declaring the named conditions at moderate severity
pub fn profile_with_conditions(names: &[&str]) -> MemberProfile {
    MemberProfile {
        health_conditions: names
            .iter()
            .map(|name| HealthCondition::new(*name, Severity::Moderate))
            .collect(),
        ..profile()
    }
}

/// Adult member with a dietary preference
pub fn profile_with_diet(diet: DietType) -> MemberProfile {
    MemberProfile {
        dietary_preference: Some(diet),
        ..profile()
    }
}

/// Built-in catalog shared behind an `Arc`
pub fn builtin() -> Arc<MealCatalog> {
    Arc::new(builtin_catalog().expect("built-in catalog must be valid"))
}

/// Engine over the built-in catalog with default config and deterministic ids
pub fn builtin_engine() -> MealEngine<SequentialIdGenerator> {
    init_test_logging();
    MealEngine::with_config(builtin(), PlannerConfig::default())
        .with_id_generator(SequentialIdGenerator::new(TEST_TIMESTAMP_MILLIS))
}

/// Engine over the given templates with default config and deterministic ids
pub fn engine_with(templates: Vec<MealTemplate>) -> MealEngine<SequentialIdGenerator> {
    init_test_logging();
    let catalog = MealCatalog::from_templates(templates).expect("test catalog must be valid");
    MealEngine::with_config(Arc::new(catalog), PlannerConfig::default())
        .with_id_generator(SequentialIdGenerator::new(TEST_TIMESTAMP_MILLIS))
}
