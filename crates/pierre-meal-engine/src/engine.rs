// ABOUTME: Meal recommendation engine orchestrating filter, scorer, and suggestion builder
// ABOUTME: Single-meal generation, "generate more", slot alternatives, and full-day planning
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Meal Engine
//!
//! Data flows one way: profile and target go through the filter pipeline, the
//! survivors are scored and ranked, and the top entries become suggestions.
//!
//! The engine holds only immutable state (catalog, configuration, id
//! generator). Exclusion lists belong to the caller, which must thread the
//! accumulated list into every call. Operations that extend an exclusion list
//! return the extended copy instead of mutating anything.

use crate::calorie_policy::{distribute_daily_calories, validate_daily_calories};
use crate::config::PlannerConfig;
use crate::errors::{PlanningError, PlanningResult};
use crate::filter::filter_candidates;
use crate::id_generator::{IdGenerator, TimestampIdGenerator};
use crate::scorer::rank_candidates;
use crate::suggestion_builder::build_suggestion;
use pierre_meal_core::models::{
    DayPlan, MealCatalog, MealSlot, MealTemplate, MemberProfile, SlotExclusions, Suggestion,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tracing::debug;

/// Fresh batch of suggestions together with the exclusion list that produced it
#[derive(Debug, Clone, PartialEq)]
pub struct MoreSuggestions {
    /// Newly generated suggestions
    pub suggestions: Vec<Suggestion>,
    /// Caller's exclusion list extended with the previously shown template ids
    pub excluded_ids: Vec<String>,
}

/// Replacement suggestion for one slot
#[derive(Debug, Clone, PartialEq)]
pub struct AlternativeSuggestion {
    /// The replacement
    pub suggestion: Suggestion,
    /// Slot exclusion list extended with the replaced template id
    pub excluded_ids: Vec<String>,
}

/// One member's full-day planning request
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HouseholdMember {
    /// Display name, echoed back in the plan
    pub name: String,
    /// Health profile
    pub profile: MemberProfile,
    /// Daily calorie total
    pub daily_calories: u32,
    /// Per-slot exclusions accumulated for this member
    #[serde(default)]
    pub exclusions: SlotExclusions,
}

/// Planning outcome for one household member
#[derive(Debug, Clone, PartialEq)]
pub struct MemberPlan {
    /// Member name
    pub name: String,
    /// The plan, or why none could be made
    pub plan: PlanningResult<DayPlan>,
}

/// Stateless meal recommendation engine over an immutable catalog
pub struct MealEngine<G: IdGenerator = TimestampIdGenerator> {
    catalog: Arc<MealCatalog>,
    config: PlannerConfig,
    ids: G,
}

impl MealEngine {
    /// Create an engine with the global configuration and wall-clock ids
    #[must_use]
    pub fn new(catalog: Arc<MealCatalog>) -> Self {
        Self::with_config(catalog, PlannerConfig::global().clone())
    }

    /// Create an engine with a custom configuration and wall-clock ids
    #[must_use]
    pub fn with_config(catalog: Arc<MealCatalog>, config: PlannerConfig) -> Self {
        Self {
            catalog,
            config,
            ids: TimestampIdGenerator,
        }
    }
}

impl<G: IdGenerator> MealEngine<G> {
    /// Replace the suggestion id generator
    #[must_use]
    pub fn with_id_generator<H: IdGenerator>(self, ids: H) -> MealEngine<H> {
        MealEngine {
            catalog: self.catalog,
            config: self.config,
            ids,
        }
    }

    /// Catalog this engine recommends from
    #[must_use]
    pub fn catalog(&self) -> &MealCatalog {
        &self.catalog
    }

    /// Active configuration
    #[must_use]
    pub const fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Templates surviving the filter pipeline, in catalog order
    #[must_use]
    pub fn candidates(
        &self,
        slot: MealSlot,
        profile: &MemberProfile,
        excluded_ids: &[String],
    ) -> Vec<&MealTemplate> {
        filter_candidates(self.catalog.templates(), slot, profile, excluded_ids)
    }

    /// Generate up to `count` ranked, scaled suggestions
    ///
    /// Fewer are returned when candidates are scarce; an empty pool yields an
    /// empty list.
    #[must_use]
    pub fn generate_suggestions(
        &self,
        calorie_target: f64,
        slot: MealSlot,
        profile: &MemberProfile,
        excluded_ids: &[String],
        count: usize,
    ) -> Vec<Suggestion> {
        let candidates = self.candidates(slot, profile, excluded_ids);
        let ranked = rank_candidates(
            &candidates,
            calorie_target,
            profile,
            count,
            &self.config.scoring,
        );

        let suggestions: Vec<Suggestion> = ranked
            .iter()
            .map(|scored| {
                build_suggestion(
                    scored.template,
                    calorie_target,
                    profile,
                    &self.ids,
                    &self.config.suggestions,
                )
            })
            .collect();

        debug!(
            slot = %slot,
            calorie_target,
            candidates = candidates.len(),
            requested = count,
            returned = suggestions.len(),
            ids = ?suggestions.iter().map(|s| s.id.as_str()).collect::<Vec<_>>(),
            "Generated meal suggestions"
        );

        suggestions
    }

    /// Generate the configured default number of suggestions
    #[must_use]
    pub fn generate_default(
        &self,
        calorie_target: f64,
        slot: MealSlot,
        profile: &MemberProfile,
        excluded_ids: &[String],
    ) -> Vec<Suggestion> {
        self.generate_suggestions(
            calorie_target,
            slot,
            profile,
            excluded_ids,
            self.config.suggestions.default_count,
        )
    }

    /// Generate a new batch that avoids everything already shown
    ///
    /// The template ids of `previous` are appended to `excluded_ids`. The batch
    /// holds `count` suggestions, or the configured default when `count` is `None`.
    #[must_use]
    pub fn generate_more(
        &self,
        previous: &[Suggestion],
        calorie_target: f64,
        slot: MealSlot,
        profile: &MemberProfile,
        excluded_ids: &[String],
        count: Option<usize>,
    ) -> MoreSuggestions {
        let excluded_ids =
            extend_exclusions(excluded_ids, previous.iter().map(Suggestion::template_id));
        let count = count.unwrap_or(self.config.suggestions.default_count);
        let suggestions =
            self.generate_suggestions(calorie_target, slot, profile, &excluded_ids, count);
        MoreSuggestions {
            suggestions,
            excluded_ids,
        }
    }

    /// Replace `current` with the best remaining meal for its slot
    ///
    /// Returns `None` when nothing else qualifies; the caller then keeps its
    /// current suggestion and exclusion list.
    #[must_use]
    pub fn alternative_for(
        &self,
        current: &Suggestion,
        calorie_target: f64,
        profile: &MemberProfile,
        excluded_ids: &[String],
    ) -> Option<AlternativeSuggestion> {
        let excluded_ids = extend_exclusions(excluded_ids, [current.template_id()]);
        let suggestion = self
            .generate_suggestions(calorie_target, current.slot, profile, &excluded_ids, 1)
            .into_iter()
            .next()?;
        Some(AlternativeSuggestion {
            suggestion,
            excluded_ids,
        })
    }

    /// Plan one suggestion per slot for a whole day
    ///
    /// # Errors
    ///
    /// Returns `PlanningError::UnsafeDailyCalories` when the daily validator
    /// rejects `total_calories`.
    pub fn plan_day(
        &self,
        total_calories: u32,
        profile: &MemberProfile,
        exclusions: &SlotExclusions,
    ) -> PlanningResult<DayPlan> {
        let validation =
            validate_daily_calories(f64::from(total_calories), profile.age, profile.gender);
        if !validation.is_valid {
            return Err(PlanningError::UnsafeDailyCalories {
                message: validation.message.unwrap_or_default(),
                suggested_range: validation.suggested_range,
            });
        }

        let split = distribute_daily_calories(total_calories);
        let pick = |slot: MealSlot| {
            self.generate_suggestions(
                f64::from(split.for_slot(slot)),
                slot,
                profile,
                exclusions.for_slot(slot),
                1,
            )
            .into_iter()
            .next()
        };

        Ok(DayPlan {
            total_calories,
            split,
            breakfast: pick(MealSlot::Breakfast),
            lunch: pick(MealSlot::Lunch),
            dinner: pick(MealSlot::Dinner),
            snacks: pick(MealSlot::Snack),
        })
    }

    /// Plan full days for several members in parallel
    ///
    /// Members are independent; results come back in input order.
    #[must_use]
    pub fn plan_household(&self, members: &[HouseholdMember]) -> Vec<MemberPlan> {
        members
            .par_iter()
            .map(|member| MemberPlan {
                name: member.name.clone(),
                plan: self.plan_day(member.daily_calories, &member.profile, &member.exclusions),
            })
            .collect()
    }
}

fn extend_exclusions<'a>(
    excluded_ids: &[String],
    template_ids: impl IntoIterator<Item = &'a str>,
) -> Vec<String> {
    let mut extended = excluded_ids.to_vec();
    for id in template_ids {
        if !id.is_empty() && !extended.iter().any(|existing| existing == id) {
            extended.push(id.to_owned());
        }
    }
    extended
}
