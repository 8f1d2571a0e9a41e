// ABOUTME: Ingredient matcher output types and display tiers
// ABOUTME: Defines MatchResult, MatchTier, and the ScanMode category filter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use super::recipe::Recipe;
use serde::{Deserialize, Serialize};

/// Overlap between one catalog recipe and the available ingredients
///
/// Borrowed from the catalog; recomputed on every query and never persisted.
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult<'a> {
    /// The matched recipe
    pub recipe: &'a Recipe,
    /// Rounded share of the recipe's ingredients that are available (0-100)
    pub match_percentage: u8,
    /// Available ingredients, in recipe order
    pub matched_ingredients: Vec<&'a str>,
    /// Unavailable ingredients, in recipe order
    pub missing_ingredients: Vec<&'a str>,
}

impl MatchResult<'_> {
    /// Whether every recipe ingredient is available
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.missing_ingredients.is_empty()
    }
}

/// Display bucket of a match result
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum MatchTier {
    /// All ingredients available
    Perfect,
    /// Most ingredients available
    Near,
    /// Some ingredients available
    Partial,
}

/// Which recipes a search is about
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum ScanMode {
    /// Whole catalog
    #[default]
    General,
    /// Desserts and beverages only
    Sweets,
}

impl ScanMode {
    /// Whether a recipe is visible in this mode
    #[must_use]
    pub const fn includes(self, recipe: &Recipe) -> bool {
        match self {
            Self::General => true,
            Self::Sweets => recipe.category.is_sweet(),
        }
    }
}
