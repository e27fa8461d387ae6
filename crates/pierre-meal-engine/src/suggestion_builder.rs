// ABOUTME: Converts a chosen meal template into a calorie-scaled, personalized suggestion
// ABOUTME: Scales calories, macros, and ingredient quantities and writes the health note
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Suggestion Builder
//!
//! Scaling is linear: `factor = target / base_calories` for scalable templates,
//! `1` otherwise. Calories and each macro are rounded independently, so scaled
//! macros are not renormalized against scaled calories.
//!
//! Ingredient scaling is purely textual. Every integer or decimal substring in
//! an ingredient line is multiplied and rewritten with one decimal place, with
//! no notion of units. Numbers that are not quantities get scaled too.

use crate::config::{HealthNoteMessages, SuggestionConfig};
use crate::id_generator::IdGenerator;
use pierre_meal_core::constants::conditions::{
    ANEMIA, BLOOD_PRESSURE_NAMES, CHOLESTEROL, DIABETES, DIGESTIVE_NAMES, HEART,
};
use pierre_meal_core::constants::health_tags::{
    EASY_DIGEST, HEART_HEALTHY, HIGH_FIBER, HIGH_PROTEIN, IRON_RICH, LOW_FAT, LOW_SODIUM,
    LOW_SUGAR,
};
use pierre_meal_core::models::{
    GlycemicIndex, Macros, MealTemplate, MemberProfile, ScaledMacros, Suggestion,
};
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Integer or decimal number anywhere in an ingredient line
static QUANTITY_PATTERN: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"\d+(?:\.\d+)?").ok());

/// Build a suggestion from `template` for `calorie_target`
#[must_use]
pub fn build_suggestion(
    template: &MealTemplate,
    calorie_target: f64,
    profile: &MemberProfile,
    ids: &dyn IdGenerator,
    config: &SuggestionConfig,
) -> Suggestion {
    let factor = scale_factor(template, calorie_target);

    let ingredients = if template.scalable && (factor - 1.0).abs() > f64::EPSILON {
        template
            .ingredients
            .iter()
            .map(|line| scale_ingredient(line, factor))
            .collect()
    } else {
        template.ingredients.clone()
    };

    Suggestion {
        id: ids.suggestion_id(&template.id),
        name: template.name.clone(),
        slot: template.slot,
        cuisine: template.cuisine.clone(),
        diet_type: template.diet_type,
        calories: round_to_u32(f64::from(template.base_calories) * factor),
        ingredients,
        macros: scale_macros(&template.macros, factor),
        health_note: health_note(template, profile, config),
        preparation_time: template.preparation_time,
    }
}

/// Linear scale factor for a template
///
/// `1.0` for non-scalable templates and for targets that are not positive.
#[must_use]
pub fn scale_factor(template: &MealTemplate, calorie_target: f64) -> f64 {
    if !template.scalable || calorie_target <= 0.0 || !calorie_target.is_finite() {
        return 1.0;
    }
    calorie_target / f64::from(template.base_calories)
}

/// Multiply each macro by `factor` and round to whole grams
#[must_use]
pub fn scale_macros(macros: &Macros, factor: f64) -> ScaledMacros {
    ScaledMacros {
        carbs: round_to_u32(macros.carbs * factor),
        protein: round_to_u32(macros.protein * factor),
        fat: round_to_u32(macros.fat * factor),
        fiber: round_to_u32(macros.fiber * factor),
    }
}

/// Rewrite every number in `line` multiplied by `factor`, formatted to one decimal
#[must_use]
pub fn scale_ingredient(line: &str, factor: f64) -> String {
    let Some(pattern) = QUANTITY_PATTERN.as_ref() else {
        return line.to_owned();
    };
    pattern
        .replace_all(line, |caps: &Captures<'_>| {
            caps[0]
                .parse::<f64>()
                .map_or_else(|_| caps[0].to_owned(), |n| format!("{:.1}", n * factor))
        })
        .into_owned()
}

/// Personalized note explaining why the meal suits the member
///
/// Clauses follow a fixed category order: diabetes, blood pressure, anemia,
/// heart/cholesterol, digestive, then the condition-independent fiber and
/// protein clauses.
#[must_use]
pub fn health_note(
    template: &MealTemplate,
    profile: &MemberProfile,
    config: &SuggestionConfig,
) -> String {
    let messages = &config.messages;
    if !profile.has_conditions() {
        return messages.general.clone();
    }

    let clauses = health_note_clauses(template, profile, messages);
    if clauses.is_empty() {
        messages.fallback.clone()
    } else {
        clauses.join(&config.note_separator)
    }
}

fn health_note_clauses<'m>(
    template: &MealTemplate,
    profile: &MemberProfile,
    messages: &'m HealthNoteMessages,
) -> Vec<&'m str> {
    let mut clauses = Vec::new();

    if profile.has_condition(DIABETES) {
        if template.glycemic_index == GlycemicIndex::Low {
            clauses.push(messages.low_glycemic.as_str());
        }
        if template.has_tag(LOW_SUGAR) {
            clauses.push(messages.low_sugar.as_str());
        }
    }

    if profile.has_any_condition(&BLOOD_PRESSURE_NAMES) && template.has_tag(LOW_SODIUM) {
        clauses.push(messages.low_sodium.as_str());
    }

    if profile.has_condition(ANEMIA) && template.has_tag(IRON_RICH) {
        clauses.push(messages.iron_rich.as_str());
    }

    if profile.has_condition_mentioning(HEART) || profile.has_condition_mentioning(CHOLESTEROL) {
        if template.has_tag(HEART_HEALTHY) {
            clauses.push(messages.heart_healthy.as_str());
        }
        if template.has_tag(LOW_FAT) {
            clauses.push(messages.low_fat.as_str());
        }
    }

    if profile.has_any_condition(&DIGESTIVE_NAMES) && template.has_tag(EASY_DIGEST) {
        clauses.push(messages.easy_digest.as_str());
    }

    if template.has_tag(HIGH_FIBER) {
        clauses.push(messages.high_fiber.as_str());
    }
    if template.has_tag(HIGH_PROTEIN) {
        clauses.push(messages.high_protein.as_str());
    }

    clauses
}

fn round_to_u32(value: f64) -> u32 {
    if value.is_finite() && value > 0.0 {
        value.round() as u32
    } else {
        0
    }
}
