// ABOUTME: Meal recommendation engine for the Pierre household meal planner
// ABOUTME: Filter pipeline, scorer, suggestion builder, calorie policy, and engine orchestration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Engine
//!
//! Turns a static catalog of meal templates into ranked, calorie-scaled,
//! personalized, non-repeating suggestions for one household member.
//!
//! Every operation is a pure function of its inputs apart from the suggestion
//! id, which mixes in wall-clock time and a random suffix. The id source sits
//! behind [`IdGenerator`] so tests can make it deterministic.

/// Daily and per-meal calorie validation and the daily split
pub mod calorie_policy;
/// Scoring weights, health note messages, and environment overrides
pub mod config;
/// Engine orchestration over an immutable catalog
pub mod engine;
/// Planning error types
pub mod errors;
/// Hard-constraint filter pipeline
pub mod filter;
/// Suggestion id generation
pub mod id_generator;
/// Suitability scoring and ranking
pub mod scorer;
/// Template to suggestion conversion
pub mod suggestion_builder;

pub use calorie_policy::{
    distribute_daily_calories, require_safe_meal_calories, validate_daily_calories,
    validate_meal_calories,
};
pub use config::{ConfigError, PlannerConfig, ScoringConfig, SuggestionConfig};
pub use engine::{
    AlternativeSuggestion, HouseholdMember, MealEngine, MemberPlan, MoreSuggestions,
};
pub use errors::{PlanningError, PlanningResult};
pub use filter::filter_candidates;
pub use id_generator::{IdGenerator, SequentialIdGenerator, TimestampIdGenerator};
pub use scorer::{rank_candidates, score_meal, ScoredMeal};
pub use suggestion_builder::build_suggestion;
