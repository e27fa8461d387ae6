// ABOUTME: Catalog-specific error types raised while loading meal templates
// ABOUTME: Covers JSON parse failures, duplicate or malformed ids, and invalid template fields
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Catalog Error Types
//!
//! Raised only while a catalog is being built. Once a `MealCatalog` exists it is
//! immutable and every template in it has passed validation.

use std::io;
use thiserror::Error;

/// Result alias for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors raised while loading or validating a meal catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Catalog JSON could not be parsed
    #[error("Failed to parse meal catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Catalog file could not be read
    #[error("Failed to read meal catalog: {0}")]
    Io(#[from] io::Error),

    /// Two templates share the same id
    #[error("Duplicate template id: {0}")]
    DuplicateId(String),

    /// Template id is empty or contains the suggestion id separator
    #[error("Invalid template id '{0}': ids must be non-empty and must not contain '_'")]
    InvalidId(String),

    /// Template field violates a catalog invariant
    #[error("Invalid template '{id}': {reason}")]
    InvalidTemplate {
        /// Offending template id
        id: String,
        /// What was wrong with it
        reason: &'static str,
    },
}

impl CatalogError {
    /// Create an "invalid template" error
    #[must_use]
    pub fn invalid_template(id: impl Into<String>, reason: &'static str) -> Self {
        Self::InvalidTemplate {
            id: id.into(),
            reason,
        }
    }
}
