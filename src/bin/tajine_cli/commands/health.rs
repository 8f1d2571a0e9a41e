// ABOUTME: Health commands for tajine-cli
// ABOUTME: Handles daily calorie targets and single-recipe health assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use serde_json::json;
use std::path::Path;
use tajine::catalog::RecipeCatalog;
use tajine::session::ProfileSession;
use tajine_core::errors::{AppError, AppResult};
use tajine_intelligence::nutrition_calculator::{
    age_group, calculate_daily_calorie_breakdown, meal_calories,
};
use tajine_intelligence::{EngineConfig, HealthEngine};

use super::profile_snapshot;
use crate::helpers::display::{print_assessment, print_json};

/// Print the calorie breakdown of a profile
pub fn calories(profile_path: &Path, json: bool, config: EngineConfig) -> AppResult<()> {
    let session = ProfileSession::from_path(profile_path)?;
    let profile = session
        .current()
        .ok_or_else(|| AppError::missing_field("profile"))?;

    let breakdown = calculate_daily_calorie_breakdown(profile, &config.nutrition);
    let meal = meal_calories(Some(profile), &config.nutrition);
    let group = age_group(Some(profile));

    if json {
        return print_json(&json!({
            "breakdown": breakdown,
            "dailyCalories": breakdown.daily_calories,
            "mealCalories": meal,
            "ageGroup": group,
        }));
    }

    println!("BMR:            {:.1} kcal", breakdown.bmr);
    println!("TDEE:           {:.1} kcal", breakdown.tdee);
    println!("Daily target:   {} kcal", breakdown.daily_calories);
    println!("Per meal:       ~{meal} kcal");
    if let Some(group) = group {
        println!("Age group:      {}", group.label());
    }
    Ok(())
}

/// Print the health assessment of one recipe
pub fn assess(
    catalog: &RecipeCatalog,
    recipe_id: &str,
    profile_path: Option<&Path>,
    json: bool,
    config: EngineConfig,
) -> AppResult<()> {
    let recipe = catalog
        .get(recipe_id)
        .ok_or_else(|| AppError::not_found(format!("recipe {recipe_id}")).with_resource_id(recipe_id))?;
    let profile = profile_snapshot(profile_path)?;

    let assessment = HealthEngine::new(config).assess(profile.as_ref(), recipe);
    if json {
        return print_json(&assessment);
    }
    print_assessment(recipe, &assessment);
    Ok(())
}
