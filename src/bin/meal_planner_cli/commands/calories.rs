// ABOUTME: Calorie commands for meal-planner-cli
// ABOUTME: Daily and per-meal validation plus the daily calorie split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::print_json;
use pierre_meal_planner::errors::AppResult;
use pierre_meal_planner::models::{Gender, MealSlot};
use pierre_meal_planner::{
    distribute_daily_calories, validate_daily_calories, validate_meal_calories,
};

pub fn validate_daily(calories: f64, age: u32, gender: &str) -> AppResult<()> {
    let validation = validate_daily_calories(calories, age, Gender::from_str_lossy(gender));
    print_json(&validation)
}

pub fn validate_meal(calories: f64, slot: MealSlot) -> AppResult<()> {
    print_json(&validate_meal_calories(calories, slot))
}

pub fn split(calories: u32) -> AppResult<()> {
    print_json(&distribute_daily_calories(calories))
}
