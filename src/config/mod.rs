// ABOUTME: Configuration module for the meal planner application layer
// ABOUTME: Runtime settings resolved from environment variables on top of engine defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the Pierre Meal Planner
//!
//! - **Environment**: catalog location and engine configuration from environment variables
//!
//! Scoring weights and health-note text live with the engine in
//! `pierre_meal_engine::config`; this layer only decides where the catalog
//! comes from and which engine configuration to run with.

/// Environment-based runtime settings
pub mod environment;

pub use environment::PlannerSettings;
