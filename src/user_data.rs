// ABOUTME: Per-user shopping list and favorite recipes with JSON file persistence
// ABOUTME: Deduplicating, order-preserving list operations and favorite toggling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! User data
//!
//! Field names on disk are `shoppingList` and `favoriteRecipes`.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use tajine_core::errors::{AppError, AppResult};
use tracing::debug;

/// Shopping list and favorites of one user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    /// Ingredients to buy, in insertion order
    #[serde(default)]
    pub shopping_list: Vec<String>,
    /// Favorite recipe ids, in insertion order
    #[serde(default)]
    pub favorite_recipes: Vec<String>,
}

impl UserData {
    /// Append items not already on the list, returning the ones added
    pub fn add_to_shopping_list<I, S>(&mut self, items: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut added = Vec::new();
        for item in items {
            let item = item.into();
            if !self.shopping_list.contains(&item) {
                self.shopping_list.push(item.clone());
                added.push(item);
            }
        }
        added
    }

    /// Remove an item, returning whether it was present
    pub fn remove_from_shopping_list(&mut self, item: &str) -> bool {
        let before = self.shopping_list.len();
        self.shopping_list.retain(|existing| existing != item);
        before != self.shopping_list.len()
    }

    /// Empty the shopping list
    pub fn clear_shopping_list(&mut self) {
        self.shopping_list.clear();
    }

    /// Flip a recipe's favorite state, returning the new state
    pub fn toggle_favorite(&mut self, recipe_id: &str) -> bool {
        if let Some(pos) = self.favorite_recipes.iter().position(|id| id == recipe_id) {
            self.favorite_recipes.remove(pos);
            false
        } else {
            self.favorite_recipes.push(recipe_id.to_owned());
            true
        }
    }

    /// Whether a recipe is a favorite
    #[must_use]
    pub fn is_favorite(&self, recipe_id: &str) -> bool {
        self.favorite_recipes.iter().any(|id| id == recipe_id)
    }

    /// Missing ingredients that are not on the shopping list yet
    #[must_use]
    pub fn missing_not_in_shopping_list<'a>(&self, missing: &[&'a str]) -> Vec<&'a str> {
        missing
            .iter()
            .copied()
            .filter(|item| !self.shopping_list.iter().any(|existing| existing == item))
            .collect()
    }

    /// Load user data from a JSON file; a missing file is empty data
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed
    pub fn load(path: impl AsRef<Path>) -> AppResult<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => Ok(serde_json::from_str(&json)?),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no user data file, starting empty");
                Ok(Self::default())
            }
            Err(e) => Err(AppError::storage(format!(
                "cannot read user data {}",
                path.display()
            ))
            .with_source(e)),
        }
    }

    /// Write user data as JSON
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails
    pub fn save(&self, path: impl AsRef<Path>) -> AppResult<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}
