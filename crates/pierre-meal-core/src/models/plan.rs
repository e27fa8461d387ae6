// ABOUTME: Full-day plan models and per-slot exclusion lists owned by callers
// ABOUTME: DayPlan and SlotExclusions definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::calories::DailyCalorieSplit;
use super::meal::MealSlot;
use super::suggestion::Suggestion;
use serde::{Deserialize, Serialize};

/// Template ids excluded per slot, accumulated by the caller across generations
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct SlotExclusions {
    /// Excluded breakfast template ids
    #[serde(default)]
    pub breakfast: Vec<String>,
    /// Excluded lunch template ids
    #[serde(default)]
    pub lunch: Vec<String>,
    /// Excluded dinner template ids
    #[serde(default)]
    pub dinner: Vec<String>,
    /// Excluded snack template ids
    #[serde(default)]
    pub snacks: Vec<String>,
}

impl SlotExclusions {
    /// Exclusion list for a slot
    #[must_use]
    pub fn for_slot(&self, slot: MealSlot) -> &[String] {
        match slot {
            MealSlot::Breakfast => &self.breakfast,
            MealSlot::Lunch => &self.lunch,
            MealSlot::Dinner => &self.dinner,
            MealSlot::Snack => &self.snacks,
        }
    }

    /// Mutable exclusion list for a slot
    pub fn for_slot_mut(&mut self, slot: MealSlot) -> &mut Vec<String> {
        match slot {
            MealSlot::Breakfast => &mut self.breakfast,
            MealSlot::Lunch => &mut self.lunch,
            MealSlot::Dinner => &mut self.dinner,
            MealSlot::Snack => &mut self.snacks,
        }
    }
}

/// One suggestion per slot for a whole day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DayPlan {
    /// Daily calorie total the plan was built for
    pub total_calories: u32,
    /// Per-slot calorie targets
    pub split: DailyCalorieSplit,
    /// Breakfast, if any candidate survived filtering
    pub breakfast: Option<Suggestion>,
    /// Lunch, if any candidate survived filtering
    pub lunch: Option<Suggestion>,
    /// Dinner, if any candidate survived filtering
    pub dinner: Option<Suggestion>,
    /// Snack, if any candidate survived filtering
    pub snacks: Option<Suggestion>,
}

impl DayPlan {
    /// Suggestion planned for a slot
    #[must_use]
    pub const fn for_slot(&self, slot: MealSlot) -> Option<&Suggestion> {
        match slot {
            MealSlot::Breakfast => self.breakfast.as_ref(),
            MealSlot::Lunch => self.lunch.as_ref(),
            MealSlot::Dinner => self.dinner.as_ref(),
            MealSlot::Snack => self.snacks.as_ref(),
        }
    }

    /// Whether every slot received a suggestion
    #[must_use]
    pub const fn is_complete(&self) -> bool {
        self.breakfast.is_some()
            && self.lunch.is_some()
            && self.dinner.is_some()
            && self.snacks.is_some()
    }
}
