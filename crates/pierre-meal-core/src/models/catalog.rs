// ABOUTME: Immutable, validated collection of meal templates in catalog order
// ABOUTME: Loads templates from JSON and enforces id and field invariants on construction
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::meal::MealTemplate;
use crate::constants::suggestion_ids::SEPARATOR;
use crate::errors::{CatalogError, CatalogResult};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::slice;

/// Validated meal catalog
///
/// Order is preserved from the source; the scorer uses it as the tiebreak.
#[derive(Debug, Clone, PartialEq)]
pub struct MealCatalog {
    templates: Vec<MealTemplate>,
}

impl MealCatalog {
    /// Build a catalog from templates, validating every entry
    ///
    /// # Errors
    ///
    /// Returns an error if an id is duplicated, empty, or contains `_`, or if a
    /// template has zero calories, zero preparation time, or invalid macros.
    pub fn from_templates(templates: Vec<MealTemplate>) -> CatalogResult<Self> {
        let mut seen = HashSet::with_capacity(templates.len());
        for template in &templates {
            validate_template(template)?;
            if !seen.insert(template.id.as_str()) {
                return Err(CatalogError::DuplicateId(template.id.clone()));
            }
        }
        Ok(Self { templates })
    }

    /// Parse a JSON array of templates
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a template is invalid
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let templates: Vec<MealTemplate> = serde_json::from_str(json)?;
        Self::from_templates(templates)
    }

    /// Read and parse a JSON catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its contents are invalid
    pub fn from_path(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Templates in catalog order
    #[must_use]
    pub fn templates(&self) -> &[MealTemplate] {
        &self.templates
    }

    /// Iterate templates in catalog order
    pub fn iter(&self) -> slice::Iter<'_, MealTemplate> {
        self.templates.iter()
    }

    /// Look up a template by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MealTemplate> {
        self.templates.iter().find(|t| t.id == id)
    }

    /// Number of templates
    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    /// Whether the catalog has no templates
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}

impl<'a> IntoIterator for &'a MealCatalog {
    type Item = &'a MealTemplate;
    type IntoIter = slice::Iter<'a, MealTemplate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_template(template: &MealTemplate) -> CatalogResult<()> {
    if template.id.trim().is_empty() || template.id.contains(SEPARATOR) {
        return Err(CatalogError::InvalidId(template.id.clone()));
    }
    if template.base_calories == 0 {
        return Err(CatalogError::invalid_template(
            &template.id,
            "base_calories must be positive",
        ));
    }
    if template.preparation_time == 0 {
        return Err(CatalogError::invalid_template(
            &template.id,
            "preparation_time must be positive",
        ));
    }
    if !template.macros.is_valid() {
        return Err(CatalogError::invalid_template(
            &template.id,
            "macros must be finite and non-negative",
        ));
    }
    Ok(())
}
