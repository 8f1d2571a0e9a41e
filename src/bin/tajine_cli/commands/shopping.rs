// ABOUTME: Shopping list command for tajine-cli
// ABOUTME: Adds a recipe's missing ingredients to the stored shopping list
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use serde_json::json;
use std::path::Path;
use tajine::catalog::RecipeCatalog;
use tajine::user_data::UserData;
use tajine_core::errors::{AppError, AppResult};
use tajine_intelligence::{EngineConfig, IngredientMatcher};
use tracing::info;

use crate::helpers::display::print_json;

/// Add the ingredients of `recipe_id` that are not available to the shopping list
pub fn add_missing(
    catalog: &RecipeCatalog,
    recipe_id: &str,
    available: &[String],
    data_path: &Path,
    json: bool,
    config: EngineConfig,
) -> AppResult<()> {
    let recipe = catalog
        .get(recipe_id)
        .ok_or_else(|| AppError::not_found(format!("recipe {recipe_id}")).with_resource_id(recipe_id))?;

    let result = IngredientMatcher::new(config.matcher).evaluate(recipe, available);
    let mut data = UserData::load(data_path)?;
    let to_add = data.missing_not_in_shopping_list(&result.missing_ingredients);
    let added = data.add_to_shopping_list(to_add);
    data.save(data_path)?;

    info!(recipe_id, added = added.len(), "updated shopping list");

    if json {
        return print_json(&json!({
            "added": added,
            "shoppingList": data.shopping_list,
        }));
    }
    if added.is_empty() {
        println!("Nothing to add: every missing ingredient is already on the list");
    } else {
        println!("Added to shopping list:");
        for item in &added {
            println!("  - {item}");
        }
    }
    Ok(())
}
