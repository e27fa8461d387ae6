// ABOUTME: Hard-constraint filter pipeline narrowing the meal catalog to eligible candidates
// ABOUTME: Applies slot, diet, cuisine, allergen, health-condition, and exclusion filters in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Filter Pipeline
//!
//! Each stage narrows the output of the previous one; no stage ever widens the
//! pool and an empty result is returned as-is, never relaxed. Stages are public
//! so callers and tests can exercise them individually, but
//! [`filter_candidates`] is the only place that fixes their order.
//!
//! Two health rules are pool-relative rather than per-item predicates: "if any
//! remaining candidate has property X, keep only candidates with X". They are
//! implemented as an explicit check-then-retain over the current pool.

use pierre_meal_core::constants::conditions::{BLOOD_PRESSURE_NAMES, DIABETES, DIGESTIVE_NAMES};
use pierre_meal_core::constants::health_tags::{EASY_DIGEST, LIGHT, LOW_SODIUM};
use pierre_meal_core::models::{
    CuisinePreference, DietType, GlycemicIndex, MealSlot, MealTemplate, MemberProfile,
};
use tracing::debug;

/// Run the full pipeline over `templates` in catalog order
///
/// Returns the surviving templates, preserving catalog order.
#[must_use]
pub fn filter_candidates<'a>(
    templates: &'a [MealTemplate],
    slot: MealSlot,
    profile: &MemberProfile,
    excluded_ids: &[String],
) -> Vec<&'a MealTemplate> {
    let candidates = by_slot(templates, slot);
    let after_slot = candidates.len();

    let candidates = by_diet(candidates, profile.dietary_preference);
    let after_diet = candidates.len();

    let candidates = by_cuisine(candidates, profile.cuisine_preference.as_ref());
    let after_cuisine = candidates.len();

    let candidates = without_allergens(candidates, &profile.food_allergies);
    let after_allergens = candidates.len();

    let candidates = by_health_conditions(candidates, profile);
    let after_health = candidates.len();

    let candidates = without_excluded(candidates, excluded_ids);

    debug!(
        slot = %slot,
        after_slot,
        after_diet,
        after_cuisine,
        after_allergens,
        after_health,
        after_exclusions = candidates.len(),
        "Filtered meal candidates"
    );

    candidates
}

/// Keep templates served in `slot`
#[must_use]
pub fn by_slot(templates: &[MealTemplate], slot: MealSlot) -> Vec<&MealTemplate> {
    templates.iter().filter(|t| t.slot == slot).collect()
}

/// Whether a member with `preference` may eat a meal classified as `meal`
///
/// Vegan members get vegan meals only, vegetarians get vegetarian or vegan,
/// non-vegetarians are unrestricted.
#[must_use]
pub const fn diet_allows(preference: DietType, meal: DietType) -> bool {
    match preference {
        DietType::Vegan => matches!(meal, DietType::Vegan),
        DietType::Vegetarian => matches!(meal, DietType::Vegetarian | DietType::Vegan),
        DietType::NonVegetarian => true,
    }
}

/// Keep templates compatible with the dietary preference
#[must_use]
pub fn by_diet(candidates: Vec<&MealTemplate>, preference: Option<DietType>) -> Vec<&MealTemplate> {
    match preference {
        Some(preference) => candidates
            .into_iter()
            .filter(|t| diet_allows(preference, t.diet_type))
            .collect(),
        None => candidates,
    }
}

/// Keep templates whose cuisine mentions the preferred region
///
/// Matching is a case-insensitive substring test of the region token (the
/// preference key without its `-indian` suffix) against the cuisine text.
#[must_use]
pub fn by_cuisine<'a>(
    candidates: Vec<&'a MealTemplate>,
    preference: Option<&CuisinePreference>,
) -> Vec<&'a MealTemplate> {
    let Some(token) = preference.and_then(CuisinePreference::region_token) else {
        return candidates;
    };
    candidates
        .into_iter()
        .filter(|t| t.cuisine.to_lowercase().contains(&token))
        .collect()
}

/// Drop templates containing any of the member's allergens
#[must_use]
pub fn without_allergens<'a>(
    candidates: Vec<&'a MealTemplate>,
    allergies: &[String],
) -> Vec<&'a MealTemplate> {
    if allergies.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|t| !t.contains_any_allergen(allergies))
        .collect()
}

/// Apply condition-specific restrictions for every declared condition
///
/// Rules run in a fixed order (diabetes, blood pressure, digestive). Condition
/// names nobody recognises have no effect.
#[must_use]
pub fn by_health_conditions<'a>(
    mut candidates: Vec<&'a MealTemplate>,
    profile: &MemberProfile,
) -> Vec<&'a MealTemplate> {
    if !profile.has_conditions() {
        return candidates;
    }

    if profile.has_condition(DIABETES) {
        candidates = restrict_if_any(candidates, |t| t.glycemic_index == GlycemicIndex::Low);
    }

    if profile.has_any_condition(&BLOOD_PRESSURE_NAMES) {
        candidates = restrict_if_any(candidates, |t| t.has_tag(LOW_SODIUM));
    }

    if profile.has_any_condition(&DIGESTIVE_NAMES) {
        candidates.retain(|t| t.has_tag(EASY_DIGEST) || t.has_tag(LIGHT));
    }

    candidates
}

/// Drop templates whose id is in `excluded_ids`
#[must_use]
pub fn without_excluded<'a>(
    candidates: Vec<&'a MealTemplate>,
    excluded_ids: &[String],
) -> Vec<&'a MealTemplate> {
    if excluded_ids.is_empty() {
        return candidates;
    }
    candidates
        .into_iter()
        .filter(|t| !excluded_ids.iter().any(|id| *id == t.id))
        .collect()
}

/// If any candidate satisfies `keep`, retain only those that do; otherwise leave the pool alone
fn restrict_if_any<'a, F>(mut candidates: Vec<&'a MealTemplate>, keep: F) -> Vec<&'a MealTemplate>
where
    F: Fn(&MealTemplate) -> bool,
{
    let pool_has_match = candidates.iter().any(|t| keep(t));
    if pool_has_match {
        candidates.retain(|t| keep(t));
    }
    candidates
}
