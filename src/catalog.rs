// ABOUTME: Recipe catalog ingestion from JSON with load-time validation
// ABOUTME: Rejects malformed recipes so the matcher never sees an empty ingredient list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Recipe catalog
//!
//! The catalog is a fixed, versioned sequence of recipes. It accepts either a
//! bare JSON array of recipes or an object `{ "version": "...", "recipes": [...] }`.

use crate::logging::AppLogger;
use serde::Deserialize;
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use tajine_core::errors::{AppError, AppResult};
use tajine_core::models::Recipe;
use tracing::debug;

/// Version reported for catalogs loaded from a bare array
pub const UNVERSIONED: &str = "unversioned";

#[derive(Deserialize)]
struct VersionedDocument {
    version: String,
    recipes: Vec<Recipe>,
}

/// Validated, immutable recipe catalog
#[derive(Debug, Clone, PartialEq)]
pub struct RecipeCatalog {
    version: String,
    recipes: Vec<Recipe>,
}

impl RecipeCatalog {
    /// Build a catalog from already parsed recipes
    ///
    /// # Errors
    ///
    /// Returns an error if any recipe fails validation
    pub fn new(version: impl Into<String>, recipes: Vec<Recipe>) -> AppResult<Self> {
        validate_recipes(&recipes)?;
        Ok(Self {
            version: version.into(),
            recipes,
        })
    }

    /// Parse and validate a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or a recipe fails validation
    pub fn from_json_str(json: &str) -> AppResult<Self> {
        // Pick the shape up front so serde_json reports the failing field and position
        let catalog = if json.trim_start().starts_with('[') {
            Self::new(UNVERSIONED, serde_json::from_str::<Vec<Recipe>>(json)?)?
        } else {
            let document: VersionedDocument = serde_json::from_str(json)?;
            Self::new(document.version, document.recipes)?
        };
        debug!(
            version = %catalog.version,
            recipes = catalog.len(),
            "parsed recipe catalog"
        );
        Ok(catalog)
    }

    /// Read, parse, and validate a catalog file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or its content is invalid
    pub fn from_path(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|e| {
            AppError::storage(format!("cannot read catalog {}", path.display())).with_source(e)
        })?;
        let catalog = Self::from_json_str(&json)?;
        AppLogger::log_catalog_loaded(&catalog.version, catalog.len(), &path.display().to_string());
        Ok(catalog)
    }

    /// Catalog version, usable as an external memoization key
    #[must_use]
    pub fn version(&self) -> &str {
        &self.version
    }

    /// All recipes in catalog order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look a recipe up by id
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id == id)
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipe
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn validate_recipes(recipes: &[Recipe]) -> AppResult<()> {
    let mut ids = HashSet::with_capacity(recipes.len());
    for recipe in recipes {
        validate_recipe(recipe)?;
        if !ids.insert(recipe.id.as_str()) {
            return Err(AppError::already_exists(format!("recipe {}", recipe.id))
                .with_resource_id(recipe.id.clone()));
        }
    }
    Ok(())
}

fn validate_recipe(recipe: &Recipe) -> AppResult<()> {
    if recipe.id.trim().is_empty() {
        return Err(AppError::missing_field("id"));
    }
    if recipe.ingredients.is_empty() {
        return Err(
            AppError::invalid_input("recipe has no ingredients").with_resource_id(recipe.id.clone())
        );
    }
    if recipe.ingredients.iter().any(|i| i.trim().is_empty()) {
        return Err(AppError::invalid_input("recipe has an empty ingredient")
            .with_resource_id(recipe.id.clone()));
    }
    let mut seen = HashSet::with_capacity(recipe.ingredients.len());
    if let Some(duplicate) = recipe
        .ingredients
        .iter()
        .find(|ingredient| !seen.insert(ingredient.to_lowercase()))
    {
        return Err(
            AppError::invalid_input(format!("duplicate ingredient {duplicate}"))
                .with_resource_id(recipe.id.clone()),
        );
    }
    if recipe.calories == 0 {
        return Err(AppError::value_out_of_range("calories must be positive")
            .with_resource_id(recipe.id.clone()));
    }
    if recipe.servings == 0 {
        return Err(AppError::value_out_of_range("servings must be positive")
            .with_resource_id(recipe.id.clone()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tajine_core::errors::ErrorCode;

    const TWO_RECIPES: &str = r#"{
        "version": "2024-06",
        "recipes": [
            {"id": "tagine", "name": "طاجين", "ingredients": ["دجاج", "بصل"], "calories": 450, "servings": 4},
            {"id": "harira", "name": "حريرة", "ingredients": ["عدس", "حمص"], "calories": 300, "servings": 6}
        ]
    }"#;

    #[test]
    fn test_versioned_document() {
        let catalog = RecipeCatalog::from_json_str(TWO_RECIPES).unwrap();
        assert_eq!(catalog.version(), "2024-06");
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("harira").map(|r| r.calories), Some(300));
        assert!(catalog.get("missing").is_none());
    }

    #[test]
    fn test_bare_array_is_unversioned() {
        let json = r#"[{"id": "a", "name": "A", "ingredients": ["x"], "calories": 100, "servings": 1}]"#;
        let catalog = RecipeCatalog::from_json_str(json).unwrap();
        assert_eq!(catalog.version(), UNVERSIONED);
    }

    #[test]
    fn test_parse_error_names_the_field() {
        let json = r#"{"version": "v1", "recipes": [{"id": "a", "name": "A", "ingredients": ["x"], "servings": 1}]}"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("missing field `calories`"), "{}", err.message);
        assert!(err.message.contains("line 1"), "{}", err.message);
    }

    #[test]
    fn test_negative_calories_reported_with_value() {
        let json = r#"[{"id": "a", "name": "A", "ingredients": ["x"], "calories": -5, "servings": 1}]"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
        assert!(err.message.contains("-5"), "{}", err.message);
    }

    #[test]
    fn test_zero_ingredient_recipe_rejected() {
        let json = r#"[{"id": "a", "name": "A", "ingredients": [], "calories": 100, "servings": 1}]"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidInput);
        assert_eq!(err.resource_id.as_deref(), Some("a"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let json = r#"[
            {"id": "a", "name": "A", "ingredients": ["x"], "calories": 100, "servings": 1},
            {"id": "a", "name": "B", "ingredients": ["y"], "calories": 100, "servings": 1}
        ]"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::ResourceAlreadyExists);
    }

    #[test]
    fn test_duplicate_ingredient_rejected() {
        let json = r#"[{"id": "a", "name": "A", "ingredients": ["Salt", "salt"], "calories": 100, "servings": 1}]"#;
        assert!(RecipeCatalog::from_json_str(json).is_err());
    }

    #[test]
    fn test_zero_calories_rejected() {
        let json = r#"[{"id": "a", "name": "A", "ingredients": ["x"], "calories": 0, "servings": 1}]"#;
        let err = RecipeCatalog::from_json_str(json).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_malformed_json_is_invalid_format() {
        let err = RecipeCatalog::from_json_str("{not json").unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFormat);
    }
}
