// ABOUTME: Deterministic suitability scoring and ranking of filtered meal candidates
// ABOUTME: Calorie proximity, condition bonuses, macro balance, and fiber bonuses
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Meal scorer
//!
//! The score is an explainable sum: a base value, calorie proximity (the
//! heaviest factor), additive condition bonuses, a macro balance bonus, and a
//! fiber bonus. Ranking is a stable descending sort, so equal scores keep
//! catalog order.

use crate::config::ScoringConfig;
use pierre_meal_core::constants::conditions::{ANEMIA, BLOOD_PRESSURE_NAMES, DIABETES, HEART};
use pierre_meal_core::constants::health_tags::{HEART_HEALTHY, IRON_RICH, LOW_SODIUM};
use pierre_meal_core::models::{GlycemicIndex, MealTemplate, MemberProfile};
use std::cmp::Ordering;

/// Candidate paired with its score
#[derive(Debug, Clone, Copy)]
pub struct ScoredMeal<'a> {
    /// Candidate template
    pub template: &'a MealTemplate,
    /// Suitability score
    pub score: f64,
}

/// Score one template against a calorie target and profile
#[must_use]
pub fn score_meal(
    template: &MealTemplate,
    calorie_target: f64,
    profile: &MemberProfile,
    config: &ScoringConfig,
) -> f64 {
    let mut score = config.base_score;

    score += calorie_proximity(template.base_calories, calorie_target)
        * config.calorie_proximity_weight;
    score += condition_bonus(template, profile, config);

    if is_nutritionally_balanced(template, config) {
        score += config.balance_bonus;
    }

    if template.macros.fiber >= config.fiber_threshold_g {
        score += config.fiber_bonus;
    }

    score
}

/// Closeness of `base_calories` to `target` on a 0-100 scale
///
/// `100 - |base - target| / target * 100`, floored at zero. A non-positive
/// target has no meaningful proximity and scores zero.
#[must_use]
pub fn calorie_proximity(base_calories: u32, target: f64) -> f64 {
    if target <= 0.0 || !target.is_finite() {
        return 0.0;
    }
    let diff = (f64::from(base_calories) - target).abs();
    (100.0 - diff / target * 100.0).max(0.0)
}

/// Sum of the condition bonuses that apply; they stack
#[must_use]
pub fn condition_bonus(
    template: &MealTemplate,
    profile: &MemberProfile,
    config: &ScoringConfig,
) -> f64 {
    if !profile.has_conditions() {
        return 0.0;
    }
    let bonuses = &config.condition_bonuses;
    let mut bonus = 0.0;

    if profile.has_condition(ANEMIA) && template.has_tag(IRON_RICH) {
        bonus += bonuses.anemia_iron_rich;
    }
    if profile.has_condition(DIABETES) && template.glycemic_index == GlycemicIndex::Low {
        bonus += bonuses.diabetes_low_glycemic;
    }
    if profile.has_any_condition(&BLOOD_PRESSURE_NAMES) && template.has_tag(LOW_SODIUM) {
        bonus += bonuses.hypertension_low_sodium;
    }
    if profile.has_condition_mentioning(HEART) && template.has_tag(HEART_HEALTHY) {
        bonus += bonuses.heart_healthy;
    }

    bonus
}

/// Whether the carb/protein/fat split falls inside the balanced bands
#[must_use]
pub fn is_nutritionally_balanced(template: &MealTemplate, config: &ScoringConfig) -> bool {
    let bands = &config.balanced_macros;
    template
        .macros
        .energy_percentages()
        .is_some_and(|(carbs, protein, fat)| {
            bands.carbs_percent.contains(carbs)
                && bands.protein_percent.contains(protein)
                && bands.fat_percent.contains(fat)
        })
}

/// Score and rank candidates, returning at most `count` in descending score order
///
/// Ties keep their incoming (catalog) order.
#[must_use]
pub fn rank_candidates<'a>(
    candidates: &[&'a MealTemplate],
    calorie_target: f64,
    profile: &MemberProfile,
    count: usize,
    config: &ScoringConfig,
) -> Vec<ScoredMeal<'a>> {
    let mut scored: Vec<ScoredMeal<'a>> = candidates
        .iter()
        .map(|&template| ScoredMeal {
            template,
            score: score_meal(template, calorie_target, profile, config),
        })
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    scored.truncate(count);
    scored
}
