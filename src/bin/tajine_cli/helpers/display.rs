// ABOUTME: Output formatting helpers for tajine-cli
// ABOUTME: Provides consistent text display for recommendations and assessments
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use serde::Serialize;
use tajine::recommendations::RecipeRecommendation;
use tajine_core::errors::AppResult;
use tajine_core::models::{MatchTier, Recipe};
use tajine_intelligence::{RecipeAssessment, Tiered};

/// Print any serializable value as pretty JSON
pub fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

const fn tier_heading(tier: MatchTier) -> &'static str {
    match tier {
        MatchTier::Perfect => "You have everything",
        MatchTier::Near => "Almost there",
        MatchTier::Partial => "Worth a trip to the shop",
    }
}

/// Print tiered recommendations
pub fn print_recommendations(tiered: &Tiered<RecipeRecommendation<'_>>) {
    if tiered.is_empty() {
        println!("No matching recipes.");
        return;
    }

    let mut current = None;
    for (tier, item) in tiered.iter() {
        if current != Some(tier) {
            println!("\n{}", tier_heading(tier));
            println!("{}", "=".repeat(60));
            current = Some(tier);
        }
        let assessment = &item.assessment;
        println!(
            "{:>3}%  {}  [{} kcal, {}]  score {} ({})",
            item.matched.match_percentage,
            item.matched.recipe.name,
            item.matched.recipe.calories,
            assessment.calorie_band.label(),
            assessment.health_score,
            assessment.rating.label(),
        );
        if !item.matched.missing_ingredients.is_empty() {
            println!("      missing: {}", item.matched.missing_ingredients.join(", "));
        }
    }

    if tiered.hidden > 0 {
        println!("\n{} more recipes matched too few ingredients to show", tiered.hidden);
    }
}

/// Print a single recipe assessment
pub fn print_assessment(recipe: &Recipe, assessment: &RecipeAssessment) {
    println!("{} ({})", recipe.name, recipe.id);
    println!("{}", "=".repeat(60));
    println!(
        "Calories: {} ({}), {}% of daily needs",
        recipe.calories,
        assessment.calorie_band.label(),
        assessment.daily_share_percent
    );
    println!(
        "Health score: {} ({})",
        assessment.health_score,
        assessment.rating.label()
    );
    for warning in &assessment.warnings {
        println!("\n{} {}", warning.icon, warning.title);
        println!("   {}", warning.message);
    }
}
