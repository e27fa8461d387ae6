// ABOUTME: Suggestion models produced by the recommendation engine for one request
// ABOUTME: Suggestion, ScaledMacros, and template-id recovery from suggestion ids
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::{DietType, MealSlot};
use crate::constants::suggestion_ids::SEPARATOR;
use serde::{Deserialize, Serialize};

/// Macronutrients after scaling, rounded to whole grams
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ScaledMacros {
    /// Carbohydrates (g)
    pub carbs: u32,
    /// Protein (g)
    pub protein: u32,
    /// Fat (g)
    pub fat: u32,
    /// Fiber (g)
    pub fiber: u32,
}

/// Personalized, calorie-scaled meal suggestion
///
/// Created fresh on every generation and never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Suggestion {
    /// `{template_id}_{timestamp_millis}_{random_suffix}`
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot
    pub slot: MealSlot,
    /// Regional cuisine tag
    pub cuisine: String,
    /// Diet classification
    pub diet_type: DietType,
    /// Scaled calories
    pub calories: u32,
    /// Ingredient lines with quantities scaled
    pub ingredients: Vec<String>,
    /// Scaled macros
    pub macros: ScaledMacros,
    /// Personalized explanatory note
    pub health_note: String,
    /// Preparation time in minutes (not scaled)
    pub preparation_time: u32,
}

impl Suggestion {
    /// Id of the template this suggestion was built from
    #[must_use]
    pub fn template_id(&self) -> &str {
        template_id_of(&self.id)
    }
}

/// Recover the template id from a suggestion id
///
/// Everything before the first `_`; the whole string if there is none.
#[must_use]
pub fn template_id_of(suggestion_id: &str) -> &str {
    suggestion_id
        .split_once(SEPARATOR)
        .map_or(suggestion_id, |(template_id, _)| template_id)
}
