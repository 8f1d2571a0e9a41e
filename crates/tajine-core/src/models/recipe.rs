// ABOUTME: Recipe catalog record and category tags used by the matcher and health engine
// ABOUTME: Defines Recipe, RecipeCategory, and the display-only CalorieBand classification
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use serde::{Deserialize, Serialize};

/// Category tag of a catalog recipe
///
/// Catalogs may use either the snake-case key or the Arabic label that the
/// bundled dataset is written in. Unrecognized tags deserialize as `Other`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "snake_case")]
pub enum RecipeCategory {
    /// Tagines, couscous, and other main courses
    #[serde(alias = "أطباق رئيسية")]
    MainDish,
    /// Harira and other soups
    #[serde(alias = "شوربات")]
    Soup,
    /// Cooked and raw salads
    #[serde(alias = "سلطات")]
    Salad,
    /// Pastilla, briouats, and savoury pastries
    #[serde(alias = "معجنات")]
    Pastry,
    /// Msemen, baghrir, and breads
    #[serde(alias = "خبز")]
    Bread,
    /// Cookies, chebakia, and sweets
    #[serde(alias = "حلويات")]
    Dessert,
    /// Tea, juices, and other drinks
    #[serde(alias = "مشروبات")]
    Beverage,
    /// Anything else
    #[default]
    #[serde(other)]
    Other,
}

impl RecipeCategory {
    /// Whether recipes of this category are shown in sweets mode
    #[must_use]
    pub const fn is_sweet(self) -> bool {
        matches!(self, Self::Dessert | Self::Beverage)
    }
}

/// A single immutable record of the static recipe catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Recipe {
    /// Unique stable identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Display description
    #[serde(default)]
    pub description: String,
    /// Category tag used for mode-based filtering
    #[serde(default)]
    pub category: RecipeCategory,
    /// Ordered ingredient tokens in the catalog's script
    pub ingredients: Vec<String>,
    /// Calories per serving
    pub calories: u32,
    /// Number of servings
    pub servings: u32,
    /// Display-only cooking time
    #[serde(default)]
    pub cook_time: String,
    /// Display-only difficulty
    #[serde(default)]
    pub difficulty: String,
    /// Ordered preparation steps
    #[serde(default)]
    pub instructions: Vec<String>,
    /// Ordered cooking tips
    #[serde(default)]
    pub tips: Vec<String>,
}

impl Recipe {
    /// Classify this recipe's calories per serving
    #[must_use]
    pub const fn calorie_band(&self) -> CalorieBand {
        CalorieBand::from_calories(self.calories)
    }
}

/// Coarse per-serving calorie classification shown next to a recipe
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum CalorieBand {
    /// Under 250 kcal
    Light,
    /// 250 to 399 kcal
    Moderate,
    /// 400 to 599 kcal
    Medium,
    /// 600 kcal and above
    Rich,
}

impl CalorieBand {
    /// Upper bound (exclusive) of the light band
    pub const LIGHT_BELOW: u32 = 250;
    /// Upper bound (exclusive) of the moderate band
    pub const MODERATE_BELOW: u32 = 400;
    /// Upper bound (exclusive) of the medium band
    pub const MEDIUM_BELOW: u32 = 600;

    /// Classify a per-serving calorie count
    #[must_use]
    pub const fn from_calories(calories: u32) -> Self {
        if calories < Self::LIGHT_BELOW {
            Self::Light
        } else if calories < Self::MODERATE_BELOW {
            Self::Moderate
        } else if calories < Self::MEDIUM_BELOW {
            Self::Medium
        } else {
            Self::Rich
        }
    }

    /// Arabic display label
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Light => "خفيف",
            Self::Moderate => "معتدل",
            Self::Medium => "متوسط",
            Self::Rich => "غني",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_accepts_arabic_alias() {
        let category: RecipeCategory = serde_json::from_str("\"حلويات\"").unwrap();
        assert_eq!(category, RecipeCategory::Dessert);
        assert!(category.is_sweet());

        let category: RecipeCategory = serde_json::from_str("\"main_dish\"").unwrap();
        assert_eq!(category, RecipeCategory::MainDish);
        assert!(!category.is_sweet());
    }

    #[test]
    fn test_unknown_category_is_other() {
        let category: RecipeCategory = serde_json::from_str("\"street_food\"").unwrap();
        assert_eq!(category, RecipeCategory::Other);
    }

    #[test]
    fn test_calorie_band_boundaries() {
        assert_eq!(CalorieBand::from_calories(249), CalorieBand::Light);
        assert_eq!(CalorieBand::from_calories(250), CalorieBand::Moderate);
        assert_eq!(CalorieBand::from_calories(399), CalorieBand::Moderate);
        assert_eq!(CalorieBand::from_calories(400), CalorieBand::Medium);
        assert_eq!(CalorieBand::from_calories(600), CalorieBand::Rich);
    }

    #[test]
    fn test_recipe_deserializes_camel_case_fields() {
        let json = r#"{
            "id": "harira",
            "name": "حريرة",
            "category": "شوربات",
            "ingredients": ["طماطم", "عدس", "حمص"],
            "calories": 320,
            "servings": 6,
            "cookTime": "60 دقيقة"
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert_eq!(recipe.category, RecipeCategory::Soup);
        assert_eq!(recipe.cook_time, "60 دقيقة");
        assert!(recipe.tips.is_empty());
        assert_eq!(recipe.calorie_band(), CalorieBand::Moderate);
    }
}
