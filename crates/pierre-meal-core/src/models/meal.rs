// ABOUTME: Meal template models describing catalog entries before personalization
// ABOUTME: MealSlot, DietType, GlycemicIndex, Macros, and MealTemplate definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Meal-time category
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MealSlot {
    /// Breakfast meal
    Breakfast,
    /// Lunch meal
    Lunch,
    /// Dinner meal
    Dinner,
    /// Snack between meals
    Snack,
}

impl MealSlot {
    /// All slots in day order
    pub const ALL: [Self; 4] = [Self::Breakfast, Self::Lunch, Self::Dinner, Self::Snack];

    /// Lowercase name used in messages and JSON
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Breakfast => "breakfast",
            Self::Lunch => "lunch",
            Self::Dinner => "dinner",
            Self::Snack => "snack",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(Self::Breakfast),
            "lunch" => Ok(Self::Lunch),
            "dinner" => Ok(Self::Dinner),
            "snack" | "snacks" => Ok(Self::Snack),
            other => Err(format!("unknown meal slot: {other}")),
        }
    }
}

/// Diet classification of a meal (and dietary preference of a member)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum DietType {
    /// No meat or fish
    Vegetarian,
    /// May contain meat, fish, or eggs
    NonVegetarian,
    /// No animal products
    Vegan,
}

impl FromStr for DietType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "vegetarian" => Ok(Self::Vegetarian),
            "non-vegetarian" | "non_vegetarian" => Ok(Self::NonVegetarian),
            "vegan" => Ok(Self::Vegan),
            other => Err(format!("unknown diet type: {other}")),
        }
    }
}

/// Categorical blood-sugar impact rating
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum GlycemicIndex {
    /// Low glycemic index
    Low,
    /// Medium glycemic index
    Medium,
    /// High glycemic index
    High,
}

/// Macronutrients in grams at the canonical serving
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
pub struct Macros {
    /// Carbohydrates (g)
    pub carbs: f64,
    /// Protein (g)
    pub protein: f64,
    /// Fat (g)
    pub fat: f64,
    /// Fiber (g), not part of the energy macros
    pub fiber: f64,
}

impl Macros {
    /// Carbs, protein, and fat as percentages of their combined weight
    ///
    /// Fiber is excluded from the denominator. Returns `None` when the three
    /// energy macros sum to zero.
    #[must_use]
    pub fn energy_percentages(&self) -> Option<(f64, f64, f64)> {
        let total = self.carbs + self.protein + self.fat;
        if total <= 0.0 {
            return None;
        }
        Some((
            self.carbs / total * 100.0,
            self.protein / total * 100.0,
            self.fat / total * 100.0,
        ))
    }

    /// True when every value is a finite, non-negative number
    #[must_use]
    pub fn is_valid(&self) -> bool {
        [self.carbs, self.protein, self.fat, self.fiber]
            .iter()
            .all(|v| v.is_finite() && *v >= 0.0)
    }
}

/// Catalog entry describing a generic meal before personalization
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MealTemplate {
    /// Globally unique id; never contains `_`
    pub id: String,
    /// Display name
    pub name: String,
    /// Meal slot this template is served in
    pub slot: MealSlot,
    /// Free-text regional cuisine tag (e.g. "North Indian")
    pub cuisine: String,
    /// Diet classification
    pub diet_type: DietType,
    /// Calories at the canonical serving
    pub base_calories: u32,
    /// Ingredient lines, optionally with a leading quantity
    pub ingredients: Vec<String>,
    /// Macronutrients at the canonical serving
    pub macros: Macros,
    /// Health labels such as "low-sodium" or "iron-rich"
    #[serde(default)]
    pub health_tags: Vec<String>,
    /// Allergens present in the meal
    #[serde(default)]
    pub allergens: Vec<String>,
    /// Glycemic index rating
    pub glycemic_index: GlycemicIndex,
    /// Preparation time in minutes
    pub preparation_time: u32,
    /// Whether quantities may be scaled linearly to a calorie target
    pub scalable: bool,
}

impl MealTemplate {
    /// Whether the template carries the given health tag
    #[must_use]
    pub fn has_tag(&self, tag: &str) -> bool {
        self.health_tags.iter().any(|t| t.eq_ignore_ascii_case(tag))
    }

    /// Whether any of the template's allergens appears in `allergies` (case-insensitive)
    #[must_use]
    pub fn contains_any_allergen<S: AsRef<str>>(&self, allergies: &[S]) -> bool {
        self.allergens.iter().any(|allergen| {
            allergies
                .iter()
                .any(|allergy| allergen.to_lowercase() == allergy.as_ref().to_lowercase())
        })
    }
}
