// ABOUTME: Core types and constants for the Pierre household meal planner
// ABOUTME: Foundation crate with meal catalog models, member profiles, and calorie tables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Meal Core
//!
//! Foundation crate providing the shared vocabulary of the meal planner. Nothing in
//! here makes decisions: the recommendation logic lives in `pierre-meal-engine`,
//! which depends on these types.
//!
//! ## Modules
//!
//! - **models**: Meal templates, catalog, member profiles, suggestions, calorie results
//! - **constants**: Health tags, condition names, and calorie policy tables
//! - **errors**: Catalog loading and validation errors

/// Catalog loading and validation errors
pub mod errors;

/// Health tags, condition keywords, and calorie policy tables
pub mod constants;

/// Core data models (`MealTemplate`, `MemberProfile`, `Suggestion`, etc.)
pub mod models;
