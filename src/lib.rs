// ABOUTME: Main library entry point for the Pierre household meal planner
// ABOUTME: Re-exports the core and engine crates and adds catalog, config, errors, and logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Planner
//!
//! Personalized meal recommendations for the members of a household. Given a
//! member's health profile and a calorie target, the planner narrows a static
//! catalog of meal templates by hard constraints (slot, diet, cuisine,
//! allergens, health conditions, exclusions), ranks the survivors, and returns
//! calorie-scaled suggestions with a short health note.
//!
//! ## Architecture
//!
//! - **`pierre-meal-core`**: domain models, constants, and calorie tables
//! - **`pierre-meal-engine`**: filter pipeline, scorer, suggestion builder, calorie policy
//! - **this crate**: built-in catalog, runtime settings, unified errors, logging, CLI
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_meal_planner::catalog::builtin_catalog;
//! use pierre_meal_planner::models::{MealSlot, MemberProfile};
//! use pierre_meal_planner::MealEngine;
//! use std::sync::Arc;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let engine = MealEngine::new(Arc::new(builtin_catalog()?));
//! let profile = MemberProfile { age: 34, ..MemberProfile::default() };
//! let suggestions = engine.generate_default(500.0, MealSlot::Breakfast, &profile, &[]);
//! for suggestion in &suggestions {
//!     println!("{} ({} kcal): {}", suggestion.name, suggestion.calories, suggestion.health_note);
//! }
//! # Ok(())
//! # }
//! ```

/// Built-in catalog and catalog loading
pub mod catalog;

/// Runtime settings from environment variables
pub mod config;

/// Unified error handling
pub mod errors;

/// Logging configuration
pub mod logging;

pub use pierre_meal_core::{constants, models};
pub use pierre_meal_engine::{
    calorie_policy, distribute_daily_calories, filter, require_safe_meal_calories, scorer,
    suggestion_builder, validate_daily_calories, validate_meal_calories, AlternativeSuggestion, HouseholdMember,
    IdGenerator, MealEngine, MemberPlan, MoreSuggestions, PlannerConfig, PlanningError,
    SequentialIdGenerator, TimestampIdGenerator,
};
