// ABOUTME: Member profile models supplied by callers on every recommendation request
// ABOUTME: Gender, Severity, HealthCondition, CuisinePreference, and MemberProfile definitions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::DietType;
use crate::constants::cuisine::{ALL_CUISINES, REGION_SUFFIX};
use serde::{Deserialize, Serialize};

/// Gender used to pick the recommended daily calorie band
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(from = "String", rename_all = "lowercase")]
pub enum Gender {
    /// Male
    Male,
    /// Female
    Female,
    /// Other or unspecified; uses the male table
    #[default]
    Other,
}

impl Gender {
    /// Parse gender from free text, falling back to `Other`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Self::Female,
            "male" | "m" => Self::Male,
            _ => Self::Other,
        }
    }
}

impl From<String> for Gender {
    fn from(value: String) -> Self {
        Self::from_str_lossy(&value)
    }
}

/// Severity of a declared health condition
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    /// Mild
    Mild,
    /// Moderate
    #[default]
    Moderate,
    /// Severe
    Severe,
}

/// A declared health condition
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HealthCondition {
    /// Condition name as entered (matched case-insensitively)
    pub name: String,
    /// Severity; informational only
    #[serde(default)]
    pub severity: Severity,
}

impl HealthCondition {
    /// Create a condition with the given name and severity
    #[must_use]
    pub fn new(name: impl Into<String>, severity: Severity) -> Self {
        Self {
            name: name.into(),
            severity,
        }
    }
}

/// Regional cuisine preference
///
/// Serialized as its key, e.g. `"north-indian"` or the `"all-indian"` sentinel.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(from = "String", into = "String")]
pub enum CuisinePreference {
    /// No regional restriction
    All,
    /// Preference key such as `north-indian`
    Region(String),
}

impl CuisinePreference {
    /// Region token matched against template cuisines
    ///
    /// The key is lowercased and the `-indian` suffix is stripped, so
    /// `north-indian` yields `north`. `None` for the all-cuisines sentinel.
    #[must_use]
    pub fn region_token(&self) -> Option<String> {
        match self {
            Self::All => None,
            Self::Region(key) => {
                let key = key.trim().to_lowercase();
                Some(key.strip_suffix(REGION_SUFFIX).unwrap_or(&key).to_owned())
            }
        }
    }
}

impl From<String> for CuisinePreference {
    fn from(value: String) -> Self {
        if value.trim().eq_ignore_ascii_case(ALL_CUISINES) {
            Self::All
        } else {
            Self::Region(value)
        }
    }
}

impl From<CuisinePreference> for String {
    fn from(value: CuisinePreference) -> Self {
        match value {
            CuisinePreference::All => ALL_CUISINES.to_owned(),
            CuisinePreference::Region(key) => key,
        }
    }
}

/// Health attributes of one household member
///
/// Read-only to the engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct MemberProfile {
    /// Age in years
    pub age: u32,
    /// Gender
    #[serde(default)]
    pub gender: Gender,
    /// Dietary preference; `None` places no restriction
    #[serde(default)]
    pub dietary_preference: Option<DietType>,
    /// Cuisine preference; `None` places no restriction
    #[serde(default)]
    pub cuisine_preference: Option<CuisinePreference>,
    /// Declared health conditions
    #[serde(default)]
    pub health_conditions: Vec<HealthCondition>,
    /// Food allergies
    #[serde(default)]
    pub food_allergies: Vec<String>,
}

impl MemberProfile {
    /// Whether any health condition is declared
    #[must_use]
    pub fn has_conditions(&self) -> bool {
        !self.health_conditions.is_empty()
    }

    /// Lowercased condition names in declaration order
    #[must_use]
    pub fn condition_names(&self) -> Vec<String> {
        self.health_conditions
            .iter()
            .map(|c| c.name.trim().to_lowercase())
            .collect()
    }

    /// Whether a condition with exactly this name (case-insensitive) is declared
    #[must_use]
    pub fn has_condition(&self, name: &str) -> bool {
        self.health_conditions
            .iter()
            .any(|c| c.name.trim().eq_ignore_ascii_case(name))
    }

    /// Whether any of the given condition names is declared
    #[must_use]
    pub fn has_any_condition(&self, names: &[&str]) -> bool {
        names.iter().any(|name| self.has_condition(name))
    }

    /// Whether any declared condition name contains `fragment` (case-insensitive)
    #[must_use]
    pub fn has_condition_mentioning(&self, fragment: &str) -> bool {
        let fragment = fragment.to_lowercase();
        self.condition_names()
            .iter()
            .any(|name| name.contains(&fragment))
    }
}
