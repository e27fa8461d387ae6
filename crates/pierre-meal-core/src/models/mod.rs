// ABOUTME: Core data models and types for the Pierre household meal planner
// ABOUTME: Re-exports MealTemplate, MealCatalog, MemberProfile, Suggestion and calorie results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! ## Design Principles
//!
//! - **Catalog-owned templates**: `MealTemplate` values never change after the catalog is built
//! - **Caller-owned state**: profiles, exclusion lists, and suggestions belong to the caller
//! - **Serializable**: everything round-trips through JSON for the CLI and for catalog files
//!
//! ## Core Models
//!
//! - `MealTemplate`: a generic meal before personalization or scaling
//! - `MealCatalog`: validated, ordered collection of templates
//! - `MemberProfile`: health attributes of one household member
//! - `Suggestion`: calorie-scaled, uniquely identified instance of a template
//! - `CalorieValidation` / `DailyCalorieSplit`: calorie policy results

mod calories;
mod catalog;
mod meal;
mod plan;
mod profile;
mod suggestion;

pub use calories::{CalorieRange, CalorieValidation, DailyCalorieSplit};
pub use catalog::MealCatalog;
pub use meal::{DietType, GlycemicIndex, Macros, MealSlot, MealTemplate};
pub use plan::{DayPlan, SlotExclusions};
pub use profile::{CuisinePreference, Gender, HealthCondition, MemberProfile, Severity};
pub use suggestion::{template_id_of, ScaledMacros, Suggestion};
