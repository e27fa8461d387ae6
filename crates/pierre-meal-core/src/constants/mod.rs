// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Health tags, condition keywords, and calorie policy tables for the meal planner
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped by domain. The calorie tables live in [`calories`]; the
//! tag and condition vocabularies shared between catalog data and the engine are
//! defined inline below.

/// Calorie policy tables (daily bands, per-slot limits, daily split)
pub mod calories;

/// Health tags carried by meal templates
pub mod health_tags {
    /// Suitable for iron deficiency
    pub const IRON_RICH: &str = "iron-rich";
    /// Low sodium content
    pub const LOW_SODIUM: &str = "low-sodium";
    /// Low sugar content
    pub const LOW_SUGAR: &str = "low-sugar";
    /// Heart-healthy fats and ingredients
    pub const HEART_HEALTHY: &str = "heart-healthy";
    /// Low in saturated fat
    pub const LOW_FAT: &str = "low-fat";
    /// Gentle on the digestive system
    pub const EASY_DIGEST: &str = "easy-digest";
    /// Light meal
    pub const LIGHT: &str = "light";
    /// High fiber content
    pub const HIGH_FIBER: &str = "high-fiber";
    /// High protein content
    pub const HIGH_PROTEIN: &str = "high-protein";
}

/// Health condition keywords matched (case-insensitively) against member profiles
pub mod conditions {
    /// Diabetes
    pub const DIABETES: &str = "diabetes";
    /// Hypertension
    pub const HYPERTENSION: &str = "hypertension";
    /// Alternate name for hypertension
    pub const HIGH_BLOOD_PRESSURE: &str = "high blood pressure";
    /// Anemia
    pub const ANEMIA: &str = "anemia";
    /// Substring identifying heart-related conditions ("Heart Disease", "heart")
    pub const HEART: &str = "heart";
    /// Cholesterol
    pub const CHOLESTEROL: &str = "cholesterol";
    /// Generic digestive issues
    pub const DIGESTIVE: &str = "digestive";
    /// Irritable bowel syndrome
    pub const IBS: &str = "ibs";
    /// Acidity
    pub const ACIDITY: &str = "acidity";

    /// Names treated as blood-pressure conditions
    pub const BLOOD_PRESSURE_NAMES: [&str; 2] = [HYPERTENSION, HIGH_BLOOD_PRESSURE];
    /// Names treated as digestive conditions
    pub const DIGESTIVE_NAMES: [&str; 3] = [DIGESTIVE, IBS, ACIDITY];
}

/// Cuisine preference keys
pub mod cuisine {
    /// Sentinel meaning "no regional restriction"
    pub const ALL_CUISINES: &str = "all-indian";
    /// Suffix stripped from a preference key to obtain the region token
    pub const REGION_SUFFIX: &str = "-indian";
}

/// Suggestion identity
pub mod suggestion_ids {
    /// Separator between template id, timestamp, and random suffix
    pub const SEPARATOR: char = '_';
    /// Length of the random alphanumeric suffix
    pub const RANDOM_SUFFIX_LEN: usize = 9;
}
