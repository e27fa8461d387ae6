// ABOUTME: Benchmark fixtures generating synthetic meal catalogs and household members
// ABOUTME: Deterministic data so repeated runs measure the same workload
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Deterministic fixtures for meal engine benchmarks.

use pierre_meal_planner::models::{
    CuisinePreference, DietType, Gender, GlycemicIndex, HealthCondition, Macros, MealCatalog,
    MealSlot, MealTemplate, MemberProfile, Severity, SlotExclusions,
};
use pierre_meal_planner::HouseholdMember;

const CUISINES: [&str; 4] = ["North Indian", "South Indian", "East Indian", "West Indian"];
const TAGS: [&str; 6] = [
    "low-sodium",
    "iron-rich",
    "heart-healthy",
    "easy-digest",
    "high-fiber",
    "light",
];
const ALLERGENS: [&str; 4] = ["Dairy", "Peanuts", "Wheat/Gluten", "Eggs"];

/// Synthetic catalog of `count` templates spread evenly over slots and regions
#[allow(clippy::cast_possible_truncation)]
pub fn synthetic_catalog(count: usize) -> MealCatalog {
    let templates = (0..count)
        .map(|index| {
            let slot = MealSlot::ALL[index % 4];
            let diet_type = match index % 3 {
                0 => DietType::Vegan,
                1 => DietType::Vegetarian,
                _ => DietType::NonVegetarian,
            };
            let glycemic_index = match index % 3 {
                0 => GlycemicIndex::Low,
                1 => GlycemicIndex::Medium,
                _ => GlycemicIndex::High,
            };
            MealTemplate {
                id: format!("bench-meal-{index}"),
                name: format!("Benchmark Meal {index}"),
                slot,
                cuisine: CUISINES[(index / 4) % 4].to_owned(),
                diet_type,
                base_calories: 150 + ((index * 37) % 600) as u32,
                ingredients: vec![
                    format!("{} cup rice", 1 + index % 3),
                    "0.5 cup dal".to_owned(),
                    "1 tbsp oil".to_owned(),
                ],
                macros: Macros {
                    carbs: 40.0 + (index % 30) as f64,
                    protein: 10.0 + (index % 15) as f64,
                    fat: 8.0 + (index % 12) as f64,
                    fiber: (index % 10) as f64,
                },
                health_tags: vec![
                    TAGS[index % TAGS.len()].to_owned(),
                    TAGS[(index / 2) % TAGS.len()].to_owned(),
                ],
                allergens: if index % 5 == 0 {
                    vec![ALLERGENS[index % ALLERGENS.len()].to_owned()]
                } else {
                    Vec::new()
                },
                glycemic_index,
                preparation_time: 10 + (index % 40) as u32,
                scalable: index % 7 != 0,
            }
        })
        .collect();
    MealCatalog::from_templates(templates).unwrap_or_else(|e| panic!("invalid fixture: {e}"))
}

/// Member with a typical restriction mix: vegetarian, diabetic, one allergy
pub fn restricted_profile() -> MemberProfile {
    MemberProfile {
        age: 52,
        gender: Gender::Female,
        dietary_preference: Some(DietType::Vegetarian),
        cuisine_preference: Some(CuisinePreference::All),
        health_conditions: vec![
            HealthCondition::new("Diabetes", Severity::Moderate),
            HealthCondition::new("Hypertension", Severity::Mild),
        ],
        food_allergies: vec!["Peanuts".to_owned()],
    }
}

/// Household of `count` members cycling through profile variants
pub fn household(count: usize) -> Vec<HouseholdMember> {
    (0..count)
        .map(|index| {
            let profile = if index % 2 == 0 {
                restricted_profile()
            } else {
                MemberProfile {
                    age: 20 + (index as u32 % 50),
                    ..MemberProfile::default()
                }
            };
            HouseholdMember {
                name: format!("member-{index}"),
                profile,
                daily_calories: 1600 + (index as u32 % 8) * 100,
                exclusions: SlotExclusions::default(),
            }
        })
        .collect()
}
