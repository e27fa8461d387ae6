// ABOUTME: Recommendation commands for meal-planner-cli
// ABOUTME: Single-slot suggestions, full-day plans, and household plans over the selected catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{print_json, read_json};
use pierre_meal_planner::catalog::load_catalog;
use pierre_meal_planner::config::PlannerSettings;
use pierre_meal_planner::errors::{AppError, AppResult};
use pierre_meal_planner::models::{MealSlot, MemberProfile, SlotExclusions};
use pierre_meal_planner::{
    require_safe_meal_calories, validate_meal_calories, HouseholdMember, MealEngine,
};
use serde_json::json;
use std::path::Path;
use tracing::{info, warn};

fn engine(settings: &PlannerSettings) -> AppResult<MealEngine> {
    let catalog = load_catalog(settings)?;
    Ok(MealEngine::with_config(catalog, settings.planner.clone()))
}

/// Parameters of the `suggest` command
pub struct SuggestRequest<'a> {
    pub slot: MealSlot,
    pub calories: f64,
    pub count: Option<usize>,
    pub excluded: &'a [String],
    /// Skip the blocking slot-limit check
    pub force: bool,
}

pub fn suggest(
    settings: &PlannerSettings,
    profile_path: &Path,
    request: &SuggestRequest<'_>,
) -> AppResult<()> {
    let SuggestRequest {
        slot,
        calories,
        count,
        excluded,
        force,
    } = *request;
    if !calories.is_finite() || calories <= 0.0 {
        return Err(AppError::invalid_input(format!(
            "calorie target must be a positive number, got {calories}"
        )));
    }
    let validation = if force {
        let validation = validate_meal_calories(calories, slot);
        if !validation.is_valid {
            warn!(%slot, calories, "Meal calorie target outside slot limits, continuing");
        }
        validation
    } else {
        require_safe_meal_calories(calories, slot)?
    };
    let profile: MemberProfile = read_json(profile_path)?;
    let engine = engine(settings)?;

    let count = count.unwrap_or(settings.planner.suggestions.default_count);
    let suggestions = engine.generate_suggestions(calories, slot, &profile, excluded, count);
    info!(returned = suggestions.len(), "Suggestions ready");

    print_json(&json!({
        "validation": validation,
        "suggestions": suggestions,
    }))
}

pub fn plan(
    settings: &PlannerSettings,
    profile_path: &Path,
    calories: u32,
    exclusions_path: Option<&Path>,
) -> AppResult<()> {
    let profile: MemberProfile = read_json(profile_path)?;
    let exclusions: SlotExclusions = match exclusions_path {
        Some(path) => read_json(path)?,
        None => SlotExclusions::default(),
    };
    let engine = engine(settings)?;

    let plan = engine.plan_day(calories, &profile, &exclusions)?;
    if !plan.is_complete() {
        warn!("No suitable meal found for at least one slot");
    }
    print_json(&plan)
}

pub fn household(settings: &PlannerSettings, members_path: &Path) -> AppResult<()> {
    let members: Vec<HouseholdMember> = read_json(members_path)?;
    if members.is_empty() {
        return Err(AppError::invalid_input("household file lists no members"));
    }
    let engine = engine(settings)?;

    let plans: Vec<_> = engine
        .plan_household(&members)
        .into_iter()
        .map(|member| match member.plan {
            Ok(plan) => json!({ "name": member.name, "plan": plan }),
            Err(error) => json!({ "name": member.name, "error": error.to_string() }),
        })
        .collect();
    info!(members = plans.len(), "Household plans ready");
    print_json(&plans)
}
