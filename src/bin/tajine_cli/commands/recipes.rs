// ABOUTME: Recipe commands for tajine-cli
// ABOUTME: Handles ingredient matching queries and catalog validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

use std::path::Path;
use tajine::catalog::RecipeCatalog;
use tajine::recommendations::RecommendationService;
use tajine_core::errors::AppResult;
use tajine_core::models::{HealthProfile, ScanMode};
use tajine_intelligence::{EngineConfig, ExactTokenStrategy, MatchStrategy};
use tracing::info;

use super::profile_snapshot;
use crate::helpers::display::{print_json, print_recommendations};

/// Find recipes for the available ingredients
pub fn find(
    catalog: &RecipeCatalog,
    ingredients: &[String],
    mode: ScanMode,
    profile_path: Option<&Path>,
    exact: bool,
    json: bool,
    config: EngineConfig,
) -> AppResult<()> {
    let profile = profile_snapshot(profile_path)?;
    info!(
        ingredients = ingredients.len(),
        exact,
        catalog_version = catalog.version(),
        "matching recipes"
    );

    if exact {
        let service = RecommendationService::with_strategy(config, ExactTokenStrategy);
        run(&service, catalog, ingredients, mode, profile.as_ref(), json)
    } else {
        let service = RecommendationService::new(config);
        run(&service, catalog, ingredients, mode, profile.as_ref(), json)
    }
}

fn run<S: MatchStrategy>(
    service: &RecommendationService<S>,
    catalog: &RecipeCatalog,
    ingredients: &[String],
    mode: ScanMode,
    profile: Option<&HealthProfile>,
    json: bool,
) -> AppResult<()> {
    let tiered = service.recommend(catalog.recipes(), ingredients, mode, profile);
    if json {
        print_json(&tiered)
    } else {
        print_recommendations(&tiered);
        Ok(())
    }
}

/// Report a catalog that loaded and validated
pub fn validate(catalog: &RecipeCatalog, json: bool) -> AppResult<()> {
    if json {
        return print_json(&serde_json::json!({
            "valid": true,
            "version": catalog.version(),
            "recipes": catalog.len(),
        }));
    }
    println!(
        "Catalog OK: {} recipes (version {})",
        catalog.len(),
        catalog.version()
    );
    Ok(())
}
