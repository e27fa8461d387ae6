// ABOUTME: Error types for multi-step planning operations in the meal engine
// ABOUTME: Planning fails only when a daily total or a meal target is rejected as unsafe
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_core::models::{CalorieRange, MealSlot};
use thiserror::Error;

/// Result alias for planning operations
pub type PlanningResult<T> = Result<T, PlanningError>;

/// Errors raised by planning and by blocking calorie checks
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanningError {
    /// The daily validator rejected the requested total
    #[error("{message}")]
    UnsafeDailyCalories {
        /// Validator message describing the violated bound
        message: String,
        /// Recommended band for the member
        suggested_range: CalorieRange,
    },

    /// The per-meal validator rejected a slot's calorie target
    #[error("{message}")]
    UnsafeMealCalories {
        /// Slot whose limits were violated
        slot: MealSlot,
        /// Validator message describing the violated bound
        message: String,
        /// Recommended range for the slot
        suggested_range: CalorieRange,
    },
}
