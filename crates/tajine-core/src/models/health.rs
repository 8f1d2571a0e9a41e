// ABOUTME: Health profile model supplied by the profile form and consumed as a snapshot
// ABOUTME: Defines HealthProfile, Gender, ActivityLevel, Goal, ConditionKey, AllergyKey, AgeGroup
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Deserializer, Serialize};

/// Gender, used only to select the BMR formula constant
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    /// Male constant (+5)
    Male,
    /// Female constant (-161)
    Female,
}

/// Activity level selecting the TDEE multiplier
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum ActivityLevel {
    /// Desk work, no exercise
    Sedentary,
    /// Light walking 1-3 days/week
    Light,
    /// Exercise 3-5 days/week
    #[default]
    Moderate,
    /// Exercise 6-7 days/week
    Active,
    /// Hard daily training
    VeryActive,
}

impl ActivityLevel {
    /// Parse activity level from string, falling back to `Moderate`
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "sedentary" => Self::Sedentary,
            "light" => Self::Light,
            "active" => Self::Active,
            "very_active" => Self::VeryActive,
            _ => Self::Moderate,
        }
    }
}

/// Weight goal selecting the additive calorie offset
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum Goal {
    /// Caloric deficit
    Lose,
    /// Caloric balance
    #[default]
    Maintain,
    /// Caloric surplus
    Gain,
}

/// Key into the fixed medical condition catalog
///
/// Unknown keys fail deserialization: a profile naming a condition the catalog
/// does not know is rejected at ingestion instead of being silently skipped.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum ConditionKey {
    /// Diabetes
    Diabetes,
    /// High blood pressure
    Hypertension,
    /// High cholesterol
    Cholesterol,
    /// Heart disease
    HeartDisease,
    /// Kidney disease
    Kidney,
    /// Gout
    Gout,
    /// Gluten intolerance
    Celiac,
    /// Lactose intolerance
    Lactose,
    /// Obesity
    Obesity,
    /// Anemia
    Anemia,
}

impl ConditionKey {
    /// Every condition key in catalog order
    pub const ALL: [Self; 10] = [
        Self::Diabetes,
        Self::Hypertension,
        Self::Cholesterol,
        Self::HeartDisease,
        Self::Kidney,
        Self::Gout,
        Self::Celiac,
        Self::Lactose,
        Self::Obesity,
        Self::Anemia,
    ];
}

/// Allergy collected by the profile form
///
/// Informational only: no scoring or warning consumes allergies.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(rename_all = "snake_case")]
pub enum AllergyKey {
    /// Tree nuts and peanuts
    Nuts,
    /// Fish and shellfish
    Seafood,
    /// Eggs
    Eggs,
    /// Milk
    Milk,
    /// Wheat
    Wheat,
    /// Soy
    Soy,
    /// Honey
    Honey,
    /// Spicy food
    Spicy,
}

/// Accepted ranges enforced when a profile is saved from the form
mod limits {
    /// Youngest accepted age (years)
    pub const MIN_AGE: u32 = 5;
    /// Oldest accepted age (years)
    pub const MAX_AGE: u32 = 100;
    /// Lightest accepted weight (kg)
    pub const MIN_WEIGHT_KG: f64 = 20.0;
    /// Heaviest accepted weight (kg)
    pub const MAX_WEIGHT_KG: f64 = 250.0;
    /// Shortest accepted height (cm)
    pub const MIN_HEIGHT_CM: f64 = 100.0;
    /// Tallest accepted height (cm)
    pub const MAX_HEIGHT_CM: f64 = 250.0;
}

/// A user's health profile
///
/// The engines treat this as an immutable snapshot and never validate it;
/// [`HealthProfile::validate`] is the form-layer check applied before saving.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HealthProfile {
    /// Age in years
    pub age: u32,
    /// BMR formula selector
    pub gender: Gender,
    /// Body weight in kilograms
    pub weight: f64,
    /// Height in centimeters
    pub height: f64,
    /// Medical conditions, in the order the user listed them
    #[serde(default)]
    pub conditions: Vec<ConditionKey>,
    /// Allergies, informational only
    #[serde(default)]
    pub allergies: Vec<AllergyKey>,
    /// Activity level; missing or unrecognized values mean `Moderate`
    #[serde(default, deserialize_with = "deserialize_activity_level")]
    pub activity_level: ActivityLevel,
    /// Weight goal
    #[serde(default)]
    pub goal: Goal,
}

fn deserialize_activity_level<'de, D>(deserializer: D) -> Result<ActivityLevel, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.map_or_else(ActivityLevel::default, |raw| {
        ActivityLevel::from_str_lossy(&raw)
    }))
}

impl HealthProfile {
    /// Validate the profile the way the profile form does before saving
    ///
    /// # Errors
    ///
    /// Returns an error if age, weight, or height fall outside the form's ranges,
    /// or if a condition or allergy is listed twice.
    pub fn validate(&self) -> AppResult<()> {
        if !(limits::MIN_AGE..=limits::MAX_AGE).contains(&self.age) {
            return Err(AppError::value_out_of_range(format!(
                "Age must be between {} and {} years",
                limits::MIN_AGE,
                limits::MAX_AGE
            ))
            .with_resource_id("age"));
        }
        if !(limits::MIN_WEIGHT_KG..=limits::MAX_WEIGHT_KG).contains(&self.weight) {
            return Err(AppError::value_out_of_range(format!(
                "Weight must be between {} and {} kg",
                limits::MIN_WEIGHT_KG,
                limits::MAX_WEIGHT_KG
            ))
            .with_resource_id("weight"));
        }
        if !(limits::MIN_HEIGHT_CM..=limits::MAX_HEIGHT_CM).contains(&self.height) {
            return Err(AppError::value_out_of_range(format!(
                "Height must be between {} and {} cm",
                limits::MIN_HEIGHT_CM,
                limits::MAX_HEIGHT_CM
            ))
            .with_resource_id("height"));
        }

        let mut conditions = self.conditions.clone();
        conditions.sort_unstable();
        conditions.dedup();
        if conditions.len() != self.conditions.len() {
            return Err(AppError::invalid_input("Conditions must not repeat")
                .with_resource_id("conditions"));
        }

        let mut allergies = self.allergies.clone();
        allergies.sort_unstable();
        allergies.dedup();
        if allergies.len() != self.allergies.len() {
            return Err(
                AppError::invalid_input("Allergies must not repeat").with_resource_id("allergies")
            );
        }

        Ok(())
    }

    /// Age bracket of this profile
    #[must_use]
    pub const fn age_group(&self) -> AgeGroup {
        AgeGroup::from_age(self.age)
    }
}

/// Display age bracket
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// Under 12
    Child,
    /// 12 to 17
    Teen,
    /// 18 to 29
    Young,
    /// 30 to 49
    Adult,
    /// 50 to 64
    Mature,
    /// 65 and over
    Senior,
}

impl AgeGroup {
    /// Classify an age in years
    #[must_use]
    pub const fn from_age(age: u32) -> Self {
        match age {
            0..=11 => Self::Child,
            12..=17 => Self::Teen,
            18..=29 => Self::Young,
            30..=49 => Self::Adult,
            50..=64 => Self::Mature,
            _ => Self::Senior,
        }
    }

    /// Arabic display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Child => "طفل",
            Self::Teen => "مراهق",
            Self::Young => "شاب",
            Self::Adult => "بالغ",
            Self::Mature => "كبير",
            Self::Senior => "مسن",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> HealthProfile {
        HealthProfile {
            age: 30,
            gender: Gender::Male,
            weight: 70.0,
            height: 170.0,
            conditions: vec![ConditionKey::Diabetes],
            allergies: vec![],
            activity_level: ActivityLevel::Moderate,
            goal: Goal::Maintain,
        }
    }

    #[test]
    fn test_profile_round_trips_persisted_field_names() {
        let json = serde_json::to_value(profile()).unwrap();
        assert_eq!(json["activityLevel"], "moderate");
        assert_eq!(json["conditions"][0], "diabetes");
        let back: HealthProfile = serde_json::from_value(json).unwrap();
        assert_eq!(back, profile());
    }

    #[test]
    fn test_unknown_activity_level_falls_back_to_moderate() {
        let json = r#"{"age":40,"gender":"female","weight":60,"height":160,
            "activityLevel":"couch","goal":"lose"}"#;
        let parsed: HealthProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.activity_level, ActivityLevel::Moderate);
        assert_eq!(parsed.goal, Goal::Lose);
        assert!(parsed.conditions.is_empty());
    }

    #[test]
    fn test_missing_activity_level_is_moderate() {
        let json = r#"{"age":40,"gender":"female","weight":60,"height":160}"#;
        let parsed: HealthProfile = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.activity_level, ActivityLevel::Moderate);
        assert_eq!(parsed.goal, Goal::Maintain);
    }

    #[test]
    fn test_unknown_condition_rejected() {
        let json = r#"{"age":40,"gender":"male","weight":80,"height":180,
            "conditions":["migraine"]}"#;
        assert!(serde_json::from_str::<HealthProfile>(json).is_err());
    }

    #[test]
    fn test_validate_ranges() {
        assert!(profile().validate().is_ok());

        let mut young = profile();
        young.age = 4;
        assert_eq!(young.validate().unwrap_err().resource_id.as_deref(), Some("age"));

        let mut heavy = profile();
        heavy.weight = 251.0;
        assert!(heavy.validate().is_err());

        let mut short = profile();
        short.height = 99.5;
        assert!(short.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_duplicate_conditions() {
        let mut dup = profile();
        dup.conditions = vec![ConditionKey::Gout, ConditionKey::Gout];
        assert!(dup.validate().is_err());
    }

    #[test]
    fn test_age_groups() {
        assert_eq!(AgeGroup::from_age(11), AgeGroup::Child);
        assert_eq!(AgeGroup::from_age(12), AgeGroup::Teen);
        assert_eq!(AgeGroup::from_age(29), AgeGroup::Young);
        assert_eq!(AgeGroup::from_age(49), AgeGroup::Adult);
        assert_eq!(AgeGroup::from_age(64), AgeGroup::Mature);
        assert_eq!(AgeGroup::from_age(65), AgeGroup::Senior);
    }
}
