// ABOUTME: Calorie policy tables for daily and per-meal validation
// ABOUTME: Daily safety bounds, age/gender bands, per-slot limits, and the daily split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! The per-slot hard limits and the per-slot recommended ranges are two separate
//! tables. They are tuned independently; do not derive one from the other.

/// Absolute daily minimum; anything lower is rejected as unsafe
pub const DAILY_MIN_SAFE: f64 = 800.0;
/// Absolute daily maximum; anything higher needs professional advice
pub const DAILY_MAX_SAFE: f64 = 4000.0;

/// Age brackets: under 30, under 50, 50 and over
pub const AGE_BRACKET_YOUNG: u32 = 30;
/// Upper (exclusive) bound of the middle age bracket
pub const AGE_BRACKET_MIDDLE: u32 = 50;

/// Recommended daily (min, max) for women by age bracket (young, middle, senior)
pub const FEMALE_DAILY_BANDS: [(u32, u32); 3] = [(1800, 2400), (1600, 2200), (1400, 2000)];
/// Recommended daily (min, max) for men and unspecified genders by age bracket
pub const MALE_DAILY_BANDS: [(u32, u32); 3] = [(2200, 3000), (2000, 2800), (1800, 2400)];

/// Hard per-meal limits (min, max)
pub mod meal_limits {
    /// Breakfast hard limits
    pub const BREAKFAST: (u32, u32) = (250, 600);
    /// Lunch hard limits
    pub const LUNCH: (u32, u32) = (400, 800);
    /// Dinner hard limits
    pub const DINNER: (u32, u32) = (400, 800);
    /// Snack hard limits
    pub const SNACK: (u32, u32) = (50, 300);
}

/// Recommended per-meal ranges (min, max) returned alongside validation
pub mod meal_recommended {
    /// Breakfast recommended range
    pub const BREAKFAST: (u32, u32) = (300, 500);
    /// Lunch recommended range
    pub const LUNCH: (u32, u32) = (500, 700);
    /// Dinner recommended range
    pub const DINNER: (u32, u32) = (500, 700);
    /// Snack recommended range
    pub const SNACK: (u32, u32) = (100, 200);
}

/// Share of the daily total assigned to each slot
pub mod daily_split {
    /// Breakfast share
    pub const BREAKFAST: f64 = 0.25;
    /// Lunch share
    pub const LUNCH: f64 = 0.35;
    /// Dinner share
    pub const DINNER: f64 = 0.30;
    /// Snacks share
    pub const SNACKS: f64 = 0.10;
}
