// ABOUTME: End-to-end tests for the meal engine over the built-in catalog
// ABOUTME: Hard constraints, generate-more, alternatives, full-day and household planning
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod common;

use common::{
    builtin_engine, engine_with, profile, profile_with_conditions, profile_with_diet, template,
};
use pierre_meal_planner::models::{
    CuisinePreference, DietType, GlycemicIndex, MealSlot, MemberProfile, SlotExclusions,
};
use pierre_meal_planner::{HouseholdMember, PlanningError};
use std::collections::HashSet;

// ============================================================================
// Hard Constraints
// ============================================================================

#[test]
fn test_vegan_member_only_gets_vegan_meals() {
    let engine = builtin_engine();
    let member = profile_with_diet(DietType::Vegan);

    for slot in MealSlot::ALL {
        let suggestions = engine.generate_suggestions(400.0, slot, &member, &[], 10);
        assert!(!suggestions.is_empty(), "no vegan {slot} in catalog");
        for suggestion in &suggestions {
            assert_eq!(suggestion.diet_type, DietType::Vegan, "{}", suggestion.name);
        }
    }
}

#[test]
fn test_vegetarian_member_never_gets_non_vegetarian_meals() {
    let engine = builtin_engine();
    let member = profile_with_diet(DietType::Vegetarian);

    for slot in MealSlot::ALL {
        for suggestion in engine.generate_suggestions(500.0, slot, &member, &[], 10) {
            assert_ne!(suggestion.diet_type, DietType::NonVegetarian, "{}", suggestion.name);
        }
    }
}

#[test]
fn test_allergens_are_never_suggested() {
    let engine = builtin_engine();
    let member = MemberProfile {
        food_allergies: vec!["dairy".to_owned(), "Peanuts".to_owned()],
        ..profile()
    };

    for slot in MealSlot::ALL {
        for suggestion in engine.generate_suggestions(500.0, slot, &member, &[], 10) {
            let meal = engine.catalog().get(suggestion.template_id()).unwrap();
            assert!(
                !meal.contains_any_allergen(member.food_allergies.as_slice()),
                "{} contains an allergen",
                meal.id
            );
        }
    }
}

#[test]
fn test_diabetic_breakfast_is_low_glycemic() {
    let engine = builtin_engine();
    let member = profile_with_conditions(&["Diabetes"]);

    let suggestions = engine.generate_suggestions(450.0, MealSlot::Breakfast, &member, &[], 3);
    assert_eq!(suggestions.len(), 3);
    for suggestion in &suggestions {
        let meal = engine.catalog().get(suggestion.template_id()).unwrap();
        assert_eq!(meal.glycemic_index, GlycemicIndex::Low, "{}", meal.id);
    }
}

#[test]
fn test_cuisine_preference_restricts_region() {
    let engine = builtin_engine();
    let member = MemberProfile {
        cuisine_preference: Some(CuisinePreference::Region("south-indian".to_owned())),
        ..profile()
    };

    let suggestions = engine.generate_suggestions(600.0, MealSlot::Dinner, &member, &[], 10);
    assert!(!suggestions.is_empty());
    assert!(suggestions
        .iter()
        .all(|s| s.cuisine.to_lowercase().contains("south")));
}

#[test]
fn test_excluded_templates_never_returned() {
    let engine = builtin_engine();
    let excluded = vec!["poha".to_owned(), "ragi-dosa".to_owned()];

    let suggestions =
        engine.generate_suggestions(350.0, MealSlot::Breakfast, &profile(), &excluded, 10);
    assert!(suggestions
        .iter()
        .all(|s| !excluded.iter().any(|id| id == s.template_id())));
}

// ============================================================================
// Counts, Ids, and Determinism
// ============================================================================

#[test]
fn test_returns_at_most_count_and_at_most_pool_size() {
    let engine = builtin_engine();
    let pool = engine.candidates(MealSlot::Breakfast, &profile(), &[]).len();

    assert_eq!(
        engine
            .generate_suggestions(400.0, MealSlot::Breakfast, &profile(), &[], 2)
            .len(),
        2
    );
    assert_eq!(
        engine
            .generate_suggestions(400.0, MealSlot::Breakfast, &profile(), &[], 50)
            .len(),
        pool
    );
    assert!(engine
        .generate_suggestions(400.0, MealSlot::Breakfast, &profile(), &[], 0)
        .is_empty());
}

#[test]
fn test_default_count_is_three() {
    let engine = builtin_engine();
    let suggestions = engine.generate_default(650.0, MealSlot::Lunch, &profile(), &[]);
    assert_eq!(suggestions.len(), 3);
}

#[test]
fn test_empty_pool_returns_empty_list() {
    let engine = builtin_engine();
    let everything: Vec<String> = engine
        .catalog()
        .iter()
        .map(|meal| meal.id.clone())
        .collect();

    assert!(engine
        .generate_suggestions(200.0, MealSlot::Snack, &profile(), &everything, 3)
        .is_empty());
}

#[test]
fn test_suggestion_ids_are_unique_across_calls() {
    let engine = builtin_engine();
    let mut seen = HashSet::new();
    for _ in 0..5 {
        for suggestion in engine.generate_default(500.0, MealSlot::Dinner, &profile(), &[]) {
            assert!(seen.insert(suggestion.id.clone()), "duplicate id {}", suggestion.id);
        }
    }
    assert_eq!(seen.len(), 15);
}

#[test]
fn test_selection_is_deterministic_apart_from_ids() {
    let first = builtin_engine();
    let second = builtin_engine();
    let member = profile_with_conditions(&["Anemia"]);

    let a: Vec<String> = first
        .generate_default(600.0, MealSlot::Lunch, &member, &[])
        .iter()
        .map(|s| s.template_id().to_owned())
        .collect();
    let b: Vec<String> = second
        .generate_default(600.0, MealSlot::Lunch, &member, &[])
        .iter()
        .map(|s| s.template_id().to_owned())
        .collect();
    assert_eq!(a, b);
}

#[test]
fn test_suggestion_calories_track_target_for_scalable_meals() {
    let engine = builtin_engine();
    let suggestions = engine.generate_suggestions(275.0, MealSlot::Breakfast, &profile(), &[], 10);
    for suggestion in suggestions {
        let meal = engine.catalog().get(suggestion.template_id()).unwrap();
        if meal.scalable {
            assert_eq!(suggestion.calories, 275, "{}", meal.id);
        } else {
            assert_eq!(suggestion.calories, meal.base_calories, "{}", meal.id);
        }
    }
}

// ============================================================================
// Generate More and Alternatives
// ============================================================================

#[test]
fn test_generate_more_is_disjoint_from_previous_batch() {
    let engine = builtin_engine();
    let member = profile();

    let first = engine.generate_default(400.0, MealSlot::Breakfast, &member, &[]);
    let more = engine.generate_more(&first, 400.0, MealSlot::Breakfast, &member, &[], None);

    assert_eq!(more.suggestions.len(), first.len());
    let shown: HashSet<&str> = first.iter().map(|s| s.template_id()).collect();
    for suggestion in &more.suggestions {
        assert!(!shown.contains(suggestion.template_id()));
    }
    for id in &shown {
        assert!(more.excluded_ids.iter().any(|e| e == *id));
    }
}

#[test]
fn test_generate_more_accumulates_exclusions() {
    let engine = builtin_engine();
    let member = profile();

    let first = engine.generate_default(400.0, MealSlot::Breakfast, &member, &[]);
    let second = engine.generate_more(&first, 400.0, MealSlot::Breakfast, &member, &[], None);
    let third = engine.generate_more(
        &second.suggestions,
        400.0,
        MealSlot::Breakfast,
        &member,
        &second.excluded_ids,
        None,
    );

    assert_eq!(third.excluded_ids.len(), 6);
    let breakfasts = engine.candidates(MealSlot::Breakfast, &member, &[]).len();
    assert_eq!(third.suggestions.len(), breakfasts - 6);
}

#[test]
fn test_generate_more_uses_default_count_unless_given() {
    let engine = builtin_engine();
    let member = profile();

    let single = engine.generate_suggestions(400.0, MealSlot::Breakfast, &member, &[], 1);
    let more = engine.generate_more(&single, 400.0, MealSlot::Breakfast, &member, &[], None);
    assert_eq!(more.suggestions.len(), 3, "batch size follows the default count");

    let two = engine.generate_more(&single, 400.0, MealSlot::Breakfast, &member, &[], Some(2));
    assert_eq!(two.suggestions.len(), 2);
}

#[test]
fn test_alternative_replaces_current_meal() {
    let engine = builtin_engine();
    let member = profile();
    let current = engine
        .generate_suggestions(600.0, MealSlot::Dinner, &member, &[], 1)
        .remove(0);

    let alternative = engine
        .alternative_for(&current, 600.0, &member, &[])
        .expect("dinner has more than one option");

    assert_ne!(alternative.suggestion.template_id(), current.template_id());
    assert_eq!(alternative.suggestion.slot, MealSlot::Dinner);
    assert_eq!(alternative.excluded_ids, vec![current.template_id().to_owned()]);
}

#[test]
fn test_alternative_none_when_pool_exhausted() {
    let engine = engine_with(vec![template("only-lunch", MealSlot::Lunch)]);
    let current = engine
        .generate_suggestions(500.0, MealSlot::Lunch, &profile(), &[], 1)
        .remove(0);

    assert!(engine.alternative_for(&current, 500.0, &profile(), &[]).is_none());
}

// ============================================================================
// Full-Day and Household Planning
// ============================================================================

#[test]
fn test_plan_day_fills_every_slot_from_the_split() {
    let engine = builtin_engine();
    let plan = engine
        .plan_day(2000, &profile(), &SlotExclusions::default())
        .unwrap();

    assert_eq!(plan.total_calories, 2000);
    assert_eq!(plan.split.lunch, 700);
    assert!(plan.is_complete());
    for slot in MealSlot::ALL {
        let suggestion = plan.for_slot(slot).unwrap();
        assert_eq!(suggestion.slot, slot);
    }
}

#[test]
fn test_plan_day_rejects_unsafe_total() {
    let engine = builtin_engine();
    let error = engine
        .plan_day(700, &profile(), &SlotExclusions::default())
        .unwrap_err();

    let (message, suggested_range) = match error {
        PlanningError::UnsafeDailyCalories {
            message,
            suggested_range,
        } => (message, suggested_range),
        other => panic!("expected an unsafe daily total, got {other:?}"),
    };
    assert!(message.contains("too low"));
    assert_eq!(suggested_range.min, 1600);
}

#[test]
fn test_plan_day_honours_slot_exclusions() {
    let engine = builtin_engine();
    let member = profile();
    let first = engine
        .plan_day(1800, &member, &SlotExclusions::default())
        .unwrap();
    let lunch_id = first.lunch.as_ref().unwrap().template_id().to_owned();

    let mut exclusions = SlotExclusions::default();
    exclusions.for_slot_mut(MealSlot::Lunch).push(lunch_id.clone());
    let second = engine.plan_day(1800, &member, &exclusions).unwrap();

    assert_ne!(second.lunch.as_ref().unwrap().template_id(), lunch_id);
    assert_eq!(
        second.breakfast.as_ref().unwrap().template_id(),
        first.breakfast.as_ref().unwrap().template_id(),
        "exclusions are per slot"
    );
}

#[test]
fn test_plan_household_keeps_order_and_isolates_failures() {
    let engine = builtin_engine();
    let members = vec![
        HouseholdMember {
            name: "Asha".to_owned(),
            profile: profile_with_conditions(&["Diabetes"]),
            daily_calories: 1800,
            exclusions: SlotExclusions::default(),
        },
        HouseholdMember {
            name: "Ravi".to_owned(),
            profile: profile(),
            daily_calories: 500,
            exclusions: SlotExclusions::default(),
        },
        HouseholdMember {
            name: "Meera".to_owned(),
            profile: profile_with_diet(DietType::Vegan),
            daily_calories: 2200,
            exclusions: SlotExclusions::default(),
        },
    ];

    let plans = engine.plan_household(&members);
    let names: Vec<&str> = plans.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["Asha", "Ravi", "Meera"]);

    assert!(plans[0].plan.is_ok());
    assert!(plans[1].plan.is_err());
    let vegan_plan = plans[2].plan.as_ref().unwrap();
    for slot in MealSlot::ALL {
        if let Some(suggestion) = vegan_plan.for_slot(slot) {
            assert_eq!(suggestion.diet_type, DietType::Vegan);
        }
    }
}
