// ABOUTME: Benchmark fixtures for generating recipe catalogs and health profiles
// ABOUTME: Provides deterministic data generation for reproducible performance measurements
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

//! Deterministic recipe catalog generation.

use tajine_core::models::{
    ActivityLevel, ConditionKey, Gender, Goal, HealthProfile, Recipe, RecipeCategory,
};

/// Ingredient pool drawn from when generating recipes
const PANTRY: [&str; 24] = [
    "دجاج",
    "لحم أحمر",
    "بصل",
    "ثوم",
    "طماطم",
    "زيت زيتون",
    "زيتون",
    "حامض مصير",
    "ملح",
    "كمون",
    "عدس",
    "حمص",
    "دقيق",
    "عسل",
    "سمسم",
    "لوز",
    "سكر",
    "زبدة",
    "كسكس",
    "جزر",
    "كوسة",
    "باذنجان",
    "نعناع",
    "شاي أخضر",
];

/// Predefined catalog sizes for benchmark scenarios
#[derive(Debug, Clone, Copy)]
pub enum CatalogSize {
    /// Bundled dataset scale
    Bundled,
    /// Larger community catalog
    Large,
}

impl CatalogSize {
    #[must_use]
    pub const fn count(self) -> usize {
        match self {
            Self::Bundled => 50,
            Self::Large => 1000,
        }
    }
}

const fn category_for(index: usize) -> RecipeCategory {
    match index % 6 {
        0 | 1 => RecipeCategory::MainDish,
        2 => RecipeCategory::Soup,
        3 => RecipeCategory::Salad,
        4 => RecipeCategory::Dessert,
        _ => RecipeCategory::Beverage,
    }
}

#[allow(clippy::cast_possible_truncation)]
fn generate_recipe(index: usize) -> Recipe {
    let ingredient_count = 4 + index % 7;
    let ingredients = (0..ingredient_count)
        .map(|offset| PANTRY[(index * 5 + offset * 3) % PANTRY.len()].to_owned())
        .collect::<Vec<_>>();

    let mut unique = Vec::with_capacity(ingredients.len());
    for ingredient in ingredients {
        if !unique.contains(&ingredient) {
            unique.push(ingredient);
        }
    }

    Recipe {
        id: format!("bench-recipe-{index}"),
        name: format!("وصفة {index}"),
        description: String::new(),
        category: category_for(index),
        ingredients: unique,
        calories: 120 + ((index * 37) % 900) as u32,
        servings: 2 + (index % 6) as u32,
        cook_time: String::new(),
        difficulty: String::new(),
        instructions: Vec::new(),
        tips: Vec::new(),
    }
}

/// Generate a catalog of the given size
#[must_use]
pub fn generate_catalog(size: CatalogSize) -> Vec<Recipe> {
    (0..size.count()).map(generate_recipe).collect()
}

/// A typical fridge scan
#[must_use]
pub fn available_ingredients() -> Vec<&'static str> {
    vec!["بصل", "ثوم", "طماطم", "زيت", "دقيق", "عسل", "ملح", "دجاج"]
}

/// Profile with several conditions so every warning branch runs
#[must_use]
pub fn busy_profile() -> HealthProfile {
    HealthProfile {
        age: 67,
        gender: Gender::Female,
        weight: 74.0,
        height: 158.0,
        conditions: vec![
            ConditionKey::Diabetes,
            ConditionKey::Hypertension,
            ConditionKey::Celiac,
            ConditionKey::Anemia,
        ],
        allergies: vec![],
        activity_level: ActivityLevel::Light,
        goal: Goal::Lose,
    }
}
