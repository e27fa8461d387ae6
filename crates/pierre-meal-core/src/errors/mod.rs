// ABOUTME: Error types for the meal planner foundation crate
// ABOUTME: Re-exports catalog loading and validation errors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Catalog loading and validation errors
pub mod catalog;

pub use catalog::{CatalogError, CatalogResult};
