// ABOUTME: Calorie policy result types for validators and the daily split
// ABOUTME: CalorieRange, CalorieValidation, and DailyCalorieSplit definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealSlot;
use serde::{Deserialize, Serialize};

/// Inclusive calorie range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieRange {
    /// Lower bound
    pub min: u32,
    /// Upper bound
    pub max: u32,
}

impl CalorieRange {
    /// Create a range
    #[must_use]
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    /// Build from a `(min, max)` table entry
    #[must_use]
    pub const fn from_pair(pair: (u32, u32)) -> Self {
        Self {
            min: pair.0,
            max: pair.1,
        }
    }

    /// Whether `calories` lies within the range
    #[must_use]
    pub fn contains(&self, calories: f64) -> bool {
        calories >= f64::from(self.min) && calories <= f64::from(self.max)
    }
}

/// Advisory result of a calorie validator
///
/// `is_valid == false` is not an error; the caller decides whether to block or warn.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CalorieValidation {
    /// Whether the value passed the hard bounds
    pub is_valid: bool,
    /// Human-readable reason when rejected
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Recommended range for display
    pub suggested_range: CalorieRange,
}

impl CalorieValidation {
    /// Accepted value
    #[must_use]
    pub const fn accepted(suggested_range: CalorieRange) -> Self {
        Self {
            is_valid: true,
            message: None,
            suggested_range,
        }
    }

    /// Rejected value with a message
    #[must_use]
    pub fn rejected(message: impl Into<String>, suggested_range: CalorieRange) -> Self {
        Self {
            is_valid: false,
            message: Some(message.into()),
            suggested_range,
        }
    }
}

/// A day's calories partitioned across slots
///
/// Each part is rounded independently, so the parts may not sum to the total.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct DailyCalorieSplit {
    /// Breakfast calories
    pub breakfast: u32,
    /// Lunch calories
    pub lunch: u32,
    /// Dinner calories
    pub dinner: u32,
    /// Snack calories
    pub snacks: u32,
}

impl DailyCalorieSplit {
    /// Calories assigned to a slot
    #[must_use]
    pub const fn for_slot(&self, slot: MealSlot) -> u32 {
        match slot {
            MealSlot::Breakfast => self.breakfast,
            MealSlot::Lunch => self.lunch,
            MealSlot::Dinner => self.dinner,
            MealSlot::Snack => self.snacks,
        }
    }

    /// Sum of the four parts, saturating at `u32::MAX`
    #[must_use]
    pub const fn total(&self) -> u32 {
        self.breakfast
            .saturating_add(self.lunch)
            .saturating_add(self.dinner)
            .saturating_add(self.snacks)
    }
}
