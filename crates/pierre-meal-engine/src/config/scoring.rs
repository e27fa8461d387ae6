// ABOUTME: Scoring and suggestion configuration for the meal recommendation engine
// ABOUTME: Configures score weights, condition bonuses, macro bands, and health note messages
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Scoring and Suggestion Configuration
//!
//! Defaults reproduce the documented heuristic exactly: base 100, calorie
//! proximity weighted x2, condition bonuses of 30/30/30/25, +20 for balanced
//! macros, +15 for fiber at or above 6 g.

use serde::{Deserialize, Serialize};

/// Weights and thresholds used by the scorer
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ScoringConfig {
    /// Score every candidate starts from
    pub base_score: f64,
    /// Multiplier applied to the 0-100 calorie proximity score
    pub calorie_proximity_weight: f64,
    /// Bonuses for condition-matching templates
    pub condition_bonuses: ConditionBonuses,
    /// Bonus for nutritionally balanced templates
    pub balance_bonus: f64,
    /// Bonus for high-fiber templates
    pub fiber_bonus: f64,
    /// Fiber (g) at or above which the fiber bonus applies
    pub fiber_threshold_g: f64,
    /// Macro percentage bands defining a balanced meal
    pub balanced_macros: MacroBands,
}

/// Additive bonuses applied when a declared condition meets a matching template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConditionBonuses {
    /// Anemia and an "iron-rich" tag
    pub anemia_iron_rich: f64,
    /// Diabetes and a low glycemic index
    pub diabetes_low_glycemic: f64,
    /// Hypertension and a "low-sodium" tag
    pub hypertension_low_sodium: f64,
    /// Heart-related condition and a "heart-healthy" tag
    pub heart_healthy: f64,
}

/// Inclusive percentage band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct PercentBand {
    /// Lower bound (%)
    pub min: f64,
    /// Upper bound (%)
    pub max: f64,
}

impl PercentBand {
    /// Create a band
    #[must_use]
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Whether `value` lies in the band
    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        value >= self.min && value <= self.max
    }

    pub(crate) fn is_valid(&self) -> bool {
        self.min.is_finite()
            && self.max.is_finite()
            && self.min >= 0.0
            && self.max <= 100.0
            && self.min <= self.max
    }
}

/// Share of carbs+protein+fat (fiber excluded) each macro may take in a balanced meal
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MacroBands {
    /// Carbohydrate band
    pub carbs_percent: PercentBand,
    /// Protein band
    pub protein_percent: PercentBand,
    /// Fat band
    pub fat_percent: PercentBand,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_score: 100.0,
            calorie_proximity_weight: 2.0,
            condition_bonuses: ConditionBonuses::default(),
            balance_bonus: 20.0,
            fiber_bonus: 15.0,
            fiber_threshold_g: 6.0,
            balanced_macros: MacroBands::default(),
        }
    }
}

impl Default for ConditionBonuses {
    fn default() -> Self {
        Self {
            anemia_iron_rich: 30.0,
            diabetes_low_glycemic: 30.0,
            hypertension_low_sodium: 30.0,
            heart_healthy: 25.0,
        }
    }
}

impl Default for MacroBands {
    fn default() -> Self {
        Self {
            carbs_percent: PercentBand::new(40.0, 70.0),
            protein_percent: PercentBand::new(10.0, 35.0),
            fat_percent: PercentBand::new(15.0, 40.0),
        }
    }
}

/// Suggestion generation settings
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SuggestionConfig {
    /// Suggestions returned when the caller does not specify a count
    pub default_count: usize,
    /// Separator placed between health note clauses
    pub note_separator: String,
    /// Health note text
    pub messages: HealthNoteMessages,
}

/// Fixed sentences and clauses used to build health notes
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthNoteMessages {
    /// Note when the member declares no conditions
    pub general: String,
    /// Note when conditions exist but no clause applies
    pub fallback: String,
    /// Diabetes and a low glycemic index
    pub low_glycemic: String,
    /// Diabetes and a "low-sugar" tag
    pub low_sugar: String,
    /// Blood pressure condition and a "low-sodium" tag
    pub low_sodium: String,
    /// Anemia and an "iron-rich" tag
    pub iron_rich: String,
    /// Heart or cholesterol condition and a "heart-healthy" tag
    pub heart_healthy: String,
    /// Heart or cholesterol condition and a "low-fat" tag
    pub low_fat: String,
    /// Digestive condition and an "easy-digest" tag
    pub easy_digest: String,
    /// "high-fiber" tag, regardless of conditions
    pub high_fiber: String,
    /// "high-protein" tag, regardless of conditions
    pub high_protein: String,
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self {
            default_count: 3,
            note_separator: " \u{2022} ".to_owned(),
            messages: HealthNoteMessages::default(),
        }
    }
}

impl Default for HealthNoteMessages {
    fn default() -> Self {
        Self {
            general: "Nutritionally balanced meal suitable for general health".into(),
            fallback: "Balanced meal suitable for your health profile".into(),
            low_glycemic: "Low glycemic index - helps manage blood sugar".into(),
            low_sugar: "Low sugar content".into(),
            low_sodium: "Low sodium - good for blood pressure management".into(),
            iron_rich: "Rich in iron - helps with anemia".into(),
            heart_healthy: "Heart-healthy option".into(),
            low_fat: "Low in saturated fats".into(),
            easy_digest: "Easy to digest".into(),
            high_fiber: "High fiber content".into(),
            high_protein: "Good protein source".into(),
        }
    }
}
