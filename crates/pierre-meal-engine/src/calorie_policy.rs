// ABOUTME: Calorie input validation for whole days and single meals, plus the daily split
// ABOUTME: Pure advisory validators returning suggested ranges alongside accept/reject results
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie policy
//!
//! Daily totals are only rejected outside the absolute safety bounds; the
//! age/gender band returned with the result is informational. Per-meal values
//! are checked against fixed slot limits, and the range returned is a separate,
//! narrower recommendation table.

use crate::errors::{PlanningError, PlanningResult};
use pierre_meal_core::constants::calories::{
    daily_split, meal_limits, meal_recommended, AGE_BRACKET_MIDDLE, AGE_BRACKET_YOUNG,
    DAILY_MAX_SAFE, DAILY_MIN_SAFE, FEMALE_DAILY_BANDS, MALE_DAILY_BANDS,
};
use pierre_meal_core::models::{
    CalorieRange, CalorieValidation, DailyCalorieSplit, Gender, MealSlot,
};

/// Message for daily totals below the safety floor
pub const DAILY_TOO_LOW_MESSAGE: &str =
    "Daily calorie intake too low - this may be unsafe. Please enter at least 800 calories.";
/// Message for daily totals above the safety ceiling
pub const DAILY_TOO_HIGH_MESSAGE: &str =
    "Daily calorie intake very high - please consult a nutritionist for such high calorie needs.";

/// Recommended daily band for an age and gender
#[must_use]
pub fn recommended_daily_range(age: u32, gender: Gender) -> CalorieRange {
    let bands = match gender {
        Gender::Female => &FEMALE_DAILY_BANDS,
        Gender::Male | Gender::Other => &MALE_DAILY_BANDS,
    };
    let bracket = if age < AGE_BRACKET_YOUNG {
        0
    } else if age < AGE_BRACKET_MIDDLE {
        1
    } else {
        2
    };
    CalorieRange::from_pair(bands[bracket])
}

/// Validate a whole-day calorie total
///
/// Rejects below 800 and above 4000. Values inside that window are accepted
/// even when they fall outside the recommended band.
#[must_use]
pub fn validate_daily_calories(calories: f64, age: u32, gender: Gender) -> CalorieValidation {
    let suggested_range = recommended_daily_range(age, gender);

    if calories < DAILY_MIN_SAFE {
        return CalorieValidation::rejected(DAILY_TOO_LOW_MESSAGE, suggested_range);
    }
    if calories > DAILY_MAX_SAFE {
        return CalorieValidation::rejected(DAILY_TOO_HIGH_MESSAGE, suggested_range);
    }
    CalorieValidation::accepted(suggested_range)
}

/// Hard limits for a single meal in `slot`
#[must_use]
pub const fn meal_calorie_limits(slot: MealSlot) -> CalorieRange {
    CalorieRange::from_pair(match slot {
        MealSlot::Breakfast => meal_limits::BREAKFAST,
        MealSlot::Lunch => meal_limits::LUNCH,
        MealSlot::Dinner => meal_limits::DINNER,
        MealSlot::Snack => meal_limits::SNACK,
    })
}

/// Recommended range for a single meal in `slot`
#[must_use]
pub const fn recommended_meal_range(slot: MealSlot) -> CalorieRange {
    CalorieRange::from_pair(match slot {
        MealSlot::Breakfast => meal_recommended::BREAKFAST,
        MealSlot::Lunch => meal_recommended::LUNCH,
        MealSlot::Dinner => meal_recommended::DINNER,
        MealSlot::Snack => meal_recommended::SNACK,
    })
}

/// Validate calories for a single meal
#[must_use]
pub fn validate_meal_calories(calories: f64, slot: MealSlot) -> CalorieValidation {
    let limits = meal_calorie_limits(slot);
    let suggested_range = recommended_meal_range(slot);

    if calories < f64::from(limits.min) {
        return CalorieValidation::rejected(
            format!(
                "Too low for {slot}. Minimum {} calories recommended.",
                limits.min
            ),
            suggested_range,
        );
    }
    if calories > f64::from(limits.max) {
        return CalorieValidation::rejected(
            format!(
                "Too high for {slot}. Maximum {} calories recommended.",
                limits.max
            ),
            suggested_range,
        );
    }
    CalorieValidation::accepted(suggested_range)
}

/// Blocking form of [`validate_meal_calories`] for callers that refuse unsafe targets
///
/// # Errors
///
/// Returns `PlanningError::UnsafeMealCalories` when `calories` is outside the
/// slot's hard limits.
pub fn require_safe_meal_calories(
    calories: f64,
    slot: MealSlot,
) -> PlanningResult<CalorieValidation> {
    let validation = validate_meal_calories(calories, slot);
    if validation.is_valid {
        return Ok(validation);
    }
    Err(PlanningError::UnsafeMealCalories {
        slot,
        message: validation.message.unwrap_or_default(),
        suggested_range: validation.suggested_range,
    })
}

/// Split a daily total 25/35/30/10 across breakfast, lunch, dinner, and snacks
///
/// Each share is rounded on its own; the parts may differ from the total by a
/// few calories.
#[must_use]
pub fn distribute_daily_calories(total: u32) -> DailyCalorieSplit {
    let total = f64::from(total);
    let share = |fraction: f64| (total * fraction).round() as u32;
    DailyCalorieSplit {
        breakfast: share(daily_split::BREAKFAST),
        lunch: share(daily_split::LUNCH),
        dinner: share(daily_split::DINNER),
        snacks: share(daily_split::SNACKS),
    }
}
