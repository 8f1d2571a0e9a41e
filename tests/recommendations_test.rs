// ABOUTME: Integration tests for tiered recipe recommendations with health assessments
// ABOUTME: Covers scan modes, tier attachment, profile-dependent scores, and JSON output shape
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use tajine::recommendations::{RecipeRecommendation, RecommendationService};
use tajine_core::models::{ConditionKey, HealthRating, MatchTier, ScanMode, WarningKind};
use tajine_intelligence::{EngineConfig, ExactTokenStrategy};

const BAKING_SHELF: [&str; 4] = ["دقيق", "عسل", "سمسم", "زيت"];

fn ids(items: &[RecipeRecommendation<'_>]) -> Vec<String> {
    items.iter().map(|r| r.matched.recipe.id.clone()).collect()
}

#[test]
fn test_general_mode_tiers_carry_assessments() {
    common::init_test_logging();
    let catalog = common::fixture_catalog();
    let service = RecommendationService::new(EngineConfig::default());

    let tiered = service.recommend(catalog.recipes(), &BAKING_SHELF, ScanMode::General, None);

    assert_eq!(ids(&tiered.perfect), vec!["chebakia"]);
    assert!(tiered.near.is_empty());
    assert_eq!(ids(&tiered.partial), vec!["chicken-tagine", "zaalouk"]);
    assert_eq!(tiered.hidden, 1);

    for (tier, item) in tiered.iter() {
        assert_eq!(item.tier, tier);
        assert_eq!(item.assessment.recipe_id, item.matched.recipe.id);
        assert_eq!(item.assessment.health_score, 100);
        assert!(item.assessment.warnings.is_empty());
    }
}

#[test]
fn test_sweets_mode_hides_savory_recipes() {
    let catalog = common::fixture_catalog();
    let service = RecommendationService::new(EngineConfig::default());

    let tiered = service.recommend(catalog.recipes(), &BAKING_SHELF, ScanMode::Sweets, None);

    assert_eq!(ids(&tiered.perfect), vec!["chebakia"]);
    assert!(tiered.partial.is_empty());
    assert_eq!(tiered.hidden, 0);
}

#[test]
fn test_sweets_mode_keeps_beverages() {
    let catalog = common::fixture_catalog();
    let service = RecommendationService::new(EngineConfig::default());

    let tiered = service.recommend(
        catalog.recipes(),
        &["سكر", "نعناع", "شاي أخضر"],
        ScanMode::Sweets,
        None,
    );
    assert_eq!(ids(&tiered.perfect), vec!["mint-tea"]);
    assert_eq!(tiered.perfect[0].matched.match_percentage, 100);
}

#[test]
fn test_diabetes_profile_lowers_dessert_score() {
    let catalog = common::fixture_catalog();
    let service = RecommendationService::new(EngineConfig::default());
    let profile = common::profile_with_conditions(&[ConditionKey::Diabetes]);

    let tiered = service.recommend(
        catalog.recipes(),
        &BAKING_SHELF,
        ScanMode::General,
        Some(&profile),
    );

    let chebakia = &tiered.perfect[0];
    assert_eq!(chebakia.assessment.health_score, 90);
    assert_eq!(chebakia.assessment.rating, HealthRating::Suitable);
    let dangers: Vec<_> = chebakia
        .assessment
        .warnings
        .iter()
        .filter(|w| w.kind == WarningKind::Danger)
        .collect();
    assert_eq!(dangers.len(), 1);
    assert!(dangers[0].message.contains("عسل"));

    // 520 kcal out of 2507
    assert_eq!(chebakia.assessment.daily_share_percent, 21);
}

#[test]
fn test_exact_strategy_service() {
    let catalog = common::fixture_catalog();
    let service = RecommendationService::with_strategy(EngineConfig::default(), ExactTokenStrategy);

    let tiered = service.recommend(catalog.recipes(), &["زيت"], ScanMode::General, None);
    assert!(tiered.perfect.is_empty());
    assert!(tiered.near.is_empty());
    // one of four chebakia ingredients sits exactly on the partial floor
    assert_eq!(ids(&tiered.partial), vec!["chebakia"]);
    assert_eq!(tiered.partial[0].matched.match_percentage, 25);
    assert_eq!(tiered.hidden, 0);
    assert_eq!(tiered.displayed(), 1);
}

#[test]
fn test_recommendation_json_shape() {
    let catalog = common::fixture_catalog();
    let service = RecommendationService::new(EngineConfig::default());
    let tiered = service.recommend(catalog.recipes(), &BAKING_SHELF, ScanMode::General, None);

    let json = serde_json::to_value(&tiered.perfect[0]).unwrap();
    assert_eq!(json["matchPercentage"], 100);
    assert_eq!(json["tier"], "perfect");
    assert_eq!(json["recipe"]["id"], "chebakia");
    assert_eq!(json["assessment"]["healthScore"], 100);
    assert!(json["missingIngredients"].as_array().unwrap().is_empty());
    assert_eq!(tiered.perfect[0].tier, MatchTier::Perfect);
}
