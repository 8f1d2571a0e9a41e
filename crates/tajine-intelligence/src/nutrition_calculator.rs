// ABOUTME: Daily calorie target calculation from a health profile snapshot
// ABOUTME: Mifflin-St Jeor BMR, activity multiplier, goal offset, age correction, and meal split
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Nutrition Calculator Module
//!
//! Computes the daily calorie target shown to the user and used to judge recipe
//! portions. The pipeline order is fixed and must not be rearranged, since the
//! rounded result is displayed and compared downstream:
//!
//! 1. BMR (Mifflin-St Jeor)
//! 2. multiply by the activity factor
//! 3. add the goal offset
//! 4. multiply by the age correction
//! 5. round half up
//!
//! No input validation happens here: the profile form validates before saving.
//!
//! # Scientific References
//!
//! - Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
//!   *American Journal of Clinical Nutrition*, 51(2), 241-247.
//!   <https://doi.org/10.1093/ajcn/51.2.241>

use crate::config::{
    ActivityFactorsConfig, AgeAdjustmentConfig, BmrConfig, GoalAdjustmentConfig, NutritionConfig,
};
use serde::{Deserialize, Serialize};
use tajine_core::constants::{neutral, round_half_up, MEALS_PER_DAY};
use tajine_core::models::{ActivityLevel, AgeGroup, Gender, Goal, HealthProfile};

/// Intermediate values of a daily calorie calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct DailyCalorieBreakdown {
    /// Basal Metabolic Rate (BMR) in kcal/day
    pub bmr: f64,
    /// Total Daily Energy Expenditure (TDEE) in kcal/day
    pub tdee: f64,
    /// TDEE after the goal offset
    pub goal_adjusted: f64,
    /// Goal-adjusted value after the age correction, unrounded
    pub target: f64,
    /// Rounded daily calorie target
    pub daily_calories: i64,
}

/// Calculate Basal Metabolic Rate using Mifflin-St Jeor equation (1990)
///
/// Formula: BMR = (10 x `weight_kg`) + (6.25 x `height_cm`) - (5 x age) + `gender_offset`
/// - Men: +5
/// - Women: -161
///
/// # Reference
/// Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
#[must_use]
pub fn calculate_mifflin_st_jeor(
    weight_kg: f64,
    height_cm: f64,
    age: u32,
    gender: Gender,
    config: &BmrConfig,
) -> f64 {
    let weight_component = config.msj_weight_coef * weight_kg;
    let height_component = config.msj_height_coef * height_cm;
    let age_component = config.msj_age_coef * f64::from(age);

    let gender_constant = match gender {
        Gender::Male => config.msj_male_constant,
        Gender::Female => config.msj_female_constant,
    };

    weight_component + height_component + age_component + gender_constant
}

/// Activity multiplier for a level
#[must_use]
pub const fn activity_factor(activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    match activity_level {
        ActivityLevel::Sedentary => config.sedentary,
        ActivityLevel::Light => config.light,
        ActivityLevel::Moderate => config.moderate,
        ActivityLevel::Active => config.active,
        ActivityLevel::VeryActive => config.very_active,
    }
}

/// Calculate Total Daily Energy Expenditure (TDEE)
///
/// Formula: TDEE = BMR x Activity Factor
#[must_use]
pub fn calculate_tdee(bmr: f64, activity_level: ActivityLevel, config: &ActivityFactorsConfig) -> f64 {
    bmr * activity_factor(activity_level, config)
}

/// Additive calorie offset for a goal
#[must_use]
pub const fn goal_offset(goal: Goal, config: &GoalAdjustmentConfig) -> f64 {
    match goal {
        Goal::Lose => config.lose,
        Goal::Maintain => config.maintain,
        Goal::Gain => config.gain,
    }
}

/// Age-bracket multiplier, 1.0 for adults
#[must_use]
pub fn age_multiplier(age: u32, config: &AgeAdjustmentConfig) -> f64 {
    if age < config.growth_below_age {
        config.growth_multiplier
    } else if age > config.senior_above_age {
        config.senior_multiplier
    } else {
        1.0
    }
}

/// Run the full calorie pipeline for a profile
#[must_use]
pub fn calculate_daily_calorie_breakdown(
    profile: &HealthProfile,
    config: &NutritionConfig,
) -> DailyCalorieBreakdown {
    let bmr = calculate_mifflin_st_jeor(
        profile.weight,
        profile.height,
        profile.age,
        profile.gender,
        &config.bmr,
    );
    let tdee = calculate_tdee(bmr, profile.activity_level, &config.activity_factors);
    let goal_adjusted = tdee + goal_offset(profile.goal, &config.goal_adjustments);

    let target = goal_adjusted * age_multiplier(profile.age, &config.age_adjustments);

    DailyCalorieBreakdown {
        bmr,
        tdee,
        goal_adjusted,
        target,
        daily_calories: round_half_up(target),
    }
}

/// Daily calorie target, or the neutral 2000 kcal when no profile is present
#[must_use]
pub fn daily_calories(profile: Option<&HealthProfile>, config: &NutritionConfig) -> i64 {
    profile.map_or(neutral::DAILY_CALORIES, |profile| {
        calculate_daily_calorie_breakdown(profile, config).daily_calories
    })
}

/// Per-meal calorie target: the rounded daily target split evenly, unrounded
#[must_use]
pub fn meal_calorie_target(profile: Option<&HealthProfile>, config: &NutritionConfig) -> f64 {
    daily_calories(profile, config) as f64 / MEALS_PER_DAY
}

/// Per-meal calorie target rounded for display
#[must_use]
pub fn meal_calories(profile: Option<&HealthProfile>, config: &NutritionConfig) -> i64 {
    round_half_up(meal_calorie_target(profile, config))
}

/// Share of the daily target covered by one serving, in rounded percent
#[must_use]
pub fn daily_share_percent(
    profile: Option<&HealthProfile>,
    recipe_calories: u32,
    config: &NutritionConfig,
) -> i64 {
    let daily = daily_calories(profile, config);
    if daily <= 0 {
        return 0;
    }
    round_half_up(f64::from(recipe_calories) / daily as f64 * 100.0)
}

/// Display age bracket, `None` without a profile
#[must_use]
pub fn age_group(profile: Option<&HealthProfile>) -> Option<AgeGroup> {
    profile.map(HealthProfile::age_group)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tajine_core::models::{ActivityLevel, Goal};

    fn reference_profile() -> HealthProfile {
        HealthProfile {
            age: 30,
            gender: Gender::Male,
            weight: 70.0,
            height: 170.0,
            conditions: vec![],
            allergies: vec![],
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_no_profile_returns_neutral_default() {
        assert_eq!(daily_calories(None, &NutritionConfig::default()), 2000);
    }

    #[test]
    fn test_reference_breakdown() {
        let breakdown =
            calculate_daily_calorie_breakdown(&reference_profile(), &NutritionConfig::default());
        assert!((breakdown.bmr - 1617.5).abs() < 1e-9);
        assert!((breakdown.tdee - 2507.125).abs() < 1e-9);
        assert_eq!(breakdown.daily_calories, 2507);
    }

    #[test]
    fn test_female_constant() {
        let bmr = calculate_mifflin_st_jeor(60.0, 165.0, 25, Gender::Female, &BmrConfig::default());
        assert!((bmr - 1345.25).abs() < 1e-9);
    }

    #[test]
    fn test_age_multiplier_brackets() {
        let config = AgeAdjustmentConfig::default();
        assert!((age_multiplier(17, &config) - 1.1).abs() < f64::EPSILON);
        assert!((age_multiplier(18, &config) - 1.0).abs() < f64::EPSILON);
        assert!((age_multiplier(60, &config) - 1.0).abs() < f64::EPSILON);
        assert!((age_multiplier(61, &config) - 0.9).abs() < f64::EPSILON);
    }

    #[test]
    fn test_meal_split_uses_rounded_daily_target() {
        let config = NutritionConfig::default();
        let profile = reference_profile();
        assert!((meal_calorie_target(Some(&profile), &config) - 2507.0 / 3.0).abs() < 1e-9);
        assert_eq!(meal_calories(Some(&profile), &config), 836);
        assert_eq!(meal_calories(None, &config), 667);
    }

    #[test]
    fn test_daily_share_percent() {
        let config = NutritionConfig::default();
        assert_eq!(daily_share_percent(None, 500, &config), 25);
        assert_eq!(daily_share_percent(None, 333, &config), 17);
    }

    #[test]
    fn test_age_group_without_profile() {
        assert_eq!(age_group(None), None);
        assert_eq!(age_group(Some(&reference_profile())), Some(AgeGroup::Adult));
    }
}
