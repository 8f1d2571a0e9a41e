// ABOUTME: Nutrition configuration for daily calorie target calculation
// ABOUTME: Configures Mifflin-St Jeor coefficients, activity factors, goal offsets, and age corrections
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Nutrition Configuration
//!
//! # Scientific References
//!
//! - BMR: Mifflin et al. (1990) DOI: 10.1093/ajcn/51.2.241
//! - Activity factors: `McArdle`, Katch & Katch (2010), Exercise Physiology

use super::error::ConfigError;
use serde::{Deserialize, Serialize};

/// Daily calorie target configuration
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct NutritionConfig {
    /// Basal Metabolic Rate (BMR) formula coefficients
    pub bmr: BmrConfig,
    /// Activity factor multipliers for TDEE calculation
    pub activity_factors: ActivityFactorsConfig,
    /// Additive calorie offsets per goal, applied after the activity multiplier
    pub goal_adjustments: GoalAdjustmentConfig,
    /// Multiplicative corrections for young and senior profiles, applied last
    pub age_adjustments: AgeAdjustmentConfig,
}

/// BMR (Basal Metabolic Rate) calculation configuration
///
/// Reference: Mifflin, M.D., et al. (1990). A new predictive equation for resting energy expenditure.
/// American Journal of Clinical Nutrition, 51(2), 241-247. DOI: 10.1093/ajcn/51.2.241
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct BmrConfig {
    /// Mifflin-St Jeor weight coefficient (10.0)
    pub msj_weight_coef: f64,
    /// Mifflin-St Jeor height coefficient (6.25)
    pub msj_height_coef: f64,
    /// Mifflin-St Jeor age coefficient (-5.0)
    pub msj_age_coef: f64,
    /// Mifflin-St Jeor male constant (+5)
    pub msj_male_constant: f64,
    /// Mifflin-St Jeor female constant (-161)
    pub msj_female_constant: f64,
}

/// Activity factor multipliers for TDEE calculation
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct ActivityFactorsConfig {
    /// Sedentary (desk work, no exercise): 1.2
    pub sedentary: f64,
    /// Light (1-3 days/week): 1.375
    pub light: f64,
    /// Moderate (3-5 days/week): 1.55
    pub moderate: f64,
    /// Active (6-7 days/week): 1.725
    pub active: f64,
    /// Very active (hard daily training): 1.9
    pub very_active: f64,
}

/// Goal-based calorie offsets (kcal/day)
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct GoalAdjustmentConfig {
    /// Weight loss offset: -500
    pub lose: f64,
    /// Maintenance offset: 0
    pub maintain: f64,
    /// Weight gain offset: +400
    pub gain: f64,
}

/// Age-bracket multipliers applied after the goal offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct AgeAdjustmentConfig {
    /// Profiles strictly younger than this get the growth allowance: 18
    pub growth_below_age: u32,
    /// Growth allowance multiplier: 1.10
    pub growth_multiplier: f64,
    /// Profiles strictly older than this get the reduced requirement: 60
    pub senior_above_age: u32,
    /// Reduced requirement multiplier: 0.90
    pub senior_multiplier: f64,
}

impl Default for BmrConfig {
    fn default() -> Self {
        Self {
            msj_weight_coef: 10.0,
            msj_height_coef: 6.25,
            msj_age_coef: -5.0,
            msj_male_constant: 5.0,
            msj_female_constant: -161.0,
        }
    }
}

impl Default for ActivityFactorsConfig {
    fn default() -> Self {
        Self {
            sedentary: 1.2,
            light: 1.375,
            moderate: 1.55,
            active: 1.725,
            very_active: 1.9,
        }
    }
}

impl Default for GoalAdjustmentConfig {
    fn default() -> Self {
        Self {
            lose: -500.0,
            maintain: 0.0,
            gain: 400.0,
        }
    }
}

impl Default for AgeAdjustmentConfig {
    fn default() -> Self {
        Self {
            growth_below_age: 18,
            growth_multiplier: 1.1,
            senior_above_age: 60,
            senior_multiplier: 0.9,
        }
    }
}

impl NutritionConfig {
    /// Validate the nutrition configuration
    ///
    /// # Errors
    ///
    /// Returns an error if a multiplier is not positive or the age brackets overlap
    pub fn validate(&self) -> Result<(), ConfigError> {
        let factors = &self.activity_factors;
        let all_factors = [
            factors.sedentary,
            factors.light,
            factors.moderate,
            factors.active,
            factors.very_active,
        ];
        if all_factors.iter().any(|factor| *factor <= 0.0) {
            return Err(ConfigError::ValueOutOfRange(
                "activity factors must be positive",
            ));
        }

        let ages = &self.age_adjustments;
        if ages.growth_multiplier <= 0.0 || ages.senior_multiplier <= 0.0 {
            return Err(ConfigError::ValueOutOfRange(
                "age multipliers must be positive",
            ));
        }
        if ages.growth_below_age > ages.senior_above_age {
            return Err(ConfigError::InvalidRange(
                "growth_below_age must be <= senior_above_age",
            ));
        }

        Ok(())
    }
}
