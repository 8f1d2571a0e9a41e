// ABOUTME: Per-recipe health assessment against a health profile snapshot
// ABOUTME: Ordered warnings, 0-100 health score, rating, and parallel batch assessment
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! # Health Engine
//!
//! Pure functions over `(profile, recipe calories, ingredients)`. An absent
//! profile is a valid input: no warnings, neutral score.
//!
//! Warning order is part of the display contract:
//! calorie tier, age bracket, one entry per listed condition (profile order), goal.
//!
//! Allergies are carried on the profile and intentionally not assessed.

use crate::config::EngineConfig;
use crate::messages::{self, icons};
use crate::nutrition_calculator;
use rayon::prelude::*;
use serde::Serialize;
use tajine_core::conditions::HealthCondition;
use tajine_core::constants::{neutral, round_half_up, score};
use tajine_core::models::{
    CalorieBand, Goal, HealthProfile, HealthRating, HealthWarning, Recipe, WarningKind,
};
use tracing::{debug, trace};

/// Health assessment of one recipe for one profile snapshot
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RecipeAssessment {
    /// Assessed recipe id
    pub recipe_id: String,
    /// Health score (0-100)
    pub health_score: u8,
    /// Rating derived from the score
    pub rating: HealthRating,
    /// Ordered warnings, empty without a profile
    pub warnings: Vec<HealthWarning>,
    /// Calorie band of one serving
    pub calorie_band: CalorieBand,
    /// Share of the daily calorie target covered by one serving
    pub daily_share_percent: i64,
}

/// Health engine bound to an engine configuration
#[derive(Debug, Clone, Copy, Default)]
pub struct HealthEngine {
    config: EngineConfig,
}

impl HealthEngine {
    /// Create an engine with the given configuration
    #[must_use]
    pub const fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    /// Configuration in use
    #[must_use]
    pub const fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Daily calorie target, 2000 without a profile
    #[must_use]
    pub fn daily_calories(&self, profile: Option<&HealthProfile>) -> i64 {
        nutrition_calculator::daily_calories(profile, &self.config.nutrition)
    }

    /// Build the ordered warning list for a recipe
    #[must_use]
    pub fn health_warnings<A: AsRef<str>>(
        &self,
        profile: Option<&HealthProfile>,
        recipe_calories: u32,
        ingredients: &[A],
    ) -> Vec<HealthWarning> {
        let Some(profile) = profile else {
            return Vec::new();
        };

        let scoring = &self.config.scoring;
        let daily = self.daily_calories(Some(profile));
        let meal_target = nutrition_calculator::meal_calorie_target(
            Some(profile),
            &self.config.nutrition,
        );
        let meal_rounded = round_half_up(meal_target);
        let calories = f64::from(recipe_calories);

        let mut warnings = Vec::with_capacity(3 + profile.conditions.len());

        if calories > meal_target * scoring.high_calorie_ratio {
            warnings.push(HealthWarning::new(
                WarningKind::Warning,
                icons::HIGH_CALORIE,
                messages::HIGH_CALORIE_TITLE,
                messages::high_calorie_message(recipe_calories, meal_rounded, profile.age),
            ));
        } else if calories <= meal_target {
            warnings.push(HealthWarning::new(
                WarningKind::Success,
                icons::CALORIES_OK,
                messages::CALORIES_OK_TITLE,
                messages::calories_ok_message(daily, meal_rounded),
            ));
        }

        if let Some(advice) = age_advice(profile.age) {
            warnings.push(advice);
        }

        let text = ingredients_text(ingredients);
        for key in &profile.conditions {
            let condition = key.condition();
            let found = bad_ingredients_in(condition, &text);
            if found.is_empty() {
                warnings.push(HealthWarning::new(
                    WarningKind::Success,
                    icons::CONDITION_CLEAR,
                    messages::condition_clear_title(condition.label),
                    messages::CONDITION_CLEAR_MESSAGE,
                ));
            } else {
                warnings.push(HealthWarning::new(
                    WarningKind::Danger,
                    icons::CONDITION_DANGER,
                    messages::condition_danger_title(condition.label),
                    messages::condition_danger_message(&found, condition.primary_warning()),
                ));
            }
        }

        match profile.goal {
            Goal::Lose if recipe_calories > scoring.lose_goal_calorie_limit => {
                warnings.push(HealthWarning::new(
                    WarningKind::Warning,
                    icons::LOSE_GOAL,
                    messages::LOSE_GOAL_TITLE,
                    messages::LOSE_GOAL_MESSAGE,
                ));
            }
            Goal::Gain if recipe_calories < scoring.gain_goal_calorie_floor => {
                warnings.push(HealthWarning::new(
                    WarningKind::Info,
                    icons::GAIN_GOAL,
                    messages::GAIN_GOAL_TITLE,
                    messages::GAIN_GOAL_MESSAGE,
                ));
            }
            _ => {}
        }

        trace!(recipe_calories, warnings = warnings.len(), "built health warnings");
        warnings
    }

    /// Health score in `[0, 100]`, 100 without a profile
    #[must_use]
    pub fn health_score<A: AsRef<str>>(
        &self,
        profile: Option<&HealthProfile>,
        recipe_calories: u32,
        ingredients: &[A],
    ) -> u8 {
        let Some(profile) = profile else {
            return neutral::HEALTH_SCORE;
        };

        let scoring = &self.config.scoring;
        let meal_target = nutrition_calculator::meal_calorie_target(
            Some(profile),
            &self.config.nutrition,
        );
        let calories = f64::from(recipe_calories);

        let mut total = score::MAX;
        if calories > meal_target * scoring.very_high_calorie_ratio {
            total -= scoring.very_high_calorie_penalty;
        } else if calories > meal_target * scoring.high_calorie_ratio {
            total -= scoring.high_calorie_penalty;
        }

        let text = ingredients_text(ingredients);
        for key in &profile.conditions {
            let hits = bad_ingredients_in(key.condition(), &text).len() as i64;
            total -= scoring.bad_ingredient_penalty * hits;
        }

        total.clamp(score::MIN, score::MAX) as u8
    }

    /// Rating band for a score
    #[must_use]
    pub const fn rating(&self, health_score: u8) -> HealthRating {
        if health_score >= self.config.scoring.suitable_min_score {
            HealthRating::Suitable
        } else if health_score >= self.config.scoring.caution_min_score {
            HealthRating::Caution
        } else {
            HealthRating::Unsuitable
        }
    }

    /// Contraindicated ingredient substrings of `condition` present in the recipe
    #[must_use]
    pub fn find_bad_ingredients<A: AsRef<str>>(
        condition: &HealthCondition,
        ingredients: &[A],
    ) -> Vec<&'static str> {
        bad_ingredients_in(condition, &ingredients_text(ingredients))
    }

    /// Assess a single recipe
    #[must_use]
    pub fn assess(&self, profile: Option<&HealthProfile>, recipe: &Recipe) -> RecipeAssessment {
        let health_score = self.health_score(profile, recipe.calories, &recipe.ingredients);
        RecipeAssessment {
            recipe_id: recipe.id.clone(),
            health_score,
            rating: self.rating(health_score),
            warnings: self.health_warnings(profile, recipe.calories, &recipe.ingredients),
            calorie_band: recipe.calorie_band(),
            daily_share_percent: nutrition_calculator::daily_share_percent(
                profile,
                recipe.calories,
                &self.config.nutrition,
            ),
        }
    }

    /// Assess recipes in parallel, returning assessments in input order
    #[must_use]
    pub fn assess_batch(
        &self,
        profile: Option<&HealthProfile>,
        recipes: &[&Recipe],
    ) -> Vec<RecipeAssessment> {
        debug!(
            recipes = recipes.len(),
            has_profile = profile.is_some(),
            "assessing recipe batch"
        );
        recipes
            .par_iter()
            .map(|recipe| self.assess(profile, recipe))
            .collect()
    }
}

fn age_advice(age: u32) -> Option<HealthWarning> {
    let (icon, title, message) = match age {
        0..=11 => (icons::CHILD, messages::CHILD_TITLE, messages::CHILD_MESSAGE),
        12..=17 => (icons::TEEN, messages::TEEN_TITLE, messages::TEEN_MESSAGE),
        61.. => (icons::SENIOR, messages::SENIOR_TITLE, messages::SENIOR_MESSAGE),
        _ => return None,
    };
    Some(HealthWarning::new(WarningKind::Info, icon, title, message))
}

/// All ingredient strings joined by a space, lowercased
fn ingredients_text<A: AsRef<str>>(ingredients: &[A]) -> String {
    ingredients
        .iter()
        .map(AsRef::as_ref)
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

fn bad_ingredients_in(condition: &HealthCondition, text: &str) -> Vec<&'static str> {
    condition
        .bad_ingredients
        .iter()
        .copied()
        .filter(|bad| text.contains(&bad.to_lowercase()))
        .collect()
}

/// Daily calorie target with the default configuration
#[must_use]
pub fn daily_calories(profile: Option<&HealthProfile>) -> i64 {
    HealthEngine::default().daily_calories(profile)
}

/// Ordered health warnings with the default configuration
#[must_use]
pub fn health_warnings<A: AsRef<str>>(
    profile: Option<&HealthProfile>,
    recipe_calories: u32,
    ingredients: &[A],
) -> Vec<HealthWarning> {
    HealthEngine::default().health_warnings(profile, recipe_calories, ingredients)
}

/// Health score with the default configuration
#[must_use]
pub fn health_score<A: AsRef<str>>(
    profile: Option<&HealthProfile>,
    recipe_calories: u32,
    ingredients: &[A],
) -> u8 {
    HealthEngine::default().health_score(profile, recipe_calories, ingredients)
}
