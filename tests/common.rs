// ABOUTME: Shared test utilities and fixtures for integration tests
// ABOUTME: Provides a fixture recipe catalog, profile builders, and quiet test logging
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used,
    clippy::expect_used
)]
//! Shared test utilities for `tajine`

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Once;
use tajine::catalog::RecipeCatalog;
use tajine_core::models::{ActivityLevel, ConditionKey, Gender, Goal, HealthProfile};
use tracing::Level;

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => Level::TRACE,
            Ok("DEBUG") => Level::DEBUG,
            Ok("INFO") => Level::INFO,
            _ => Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixture catalog: six recipes across main dishes, soup, salad, dessert, and beverage
pub const FIXTURE_CATALOG: &str = r#"{
  "version": "fixture-1",
  "recipes": [
    {
      "id": "chicken-tagine",
      "name": "طاجين الدجاج بالزيتون",
      "category": "أطباق رئيسية",
      "ingredients": ["دجاج", "بصل", "زيتون", "حامض مصير", "زيت زيتون", "ملح"],
      "calories": 450,
      "servings": 4
    },
    {
      "id": "harira",
      "name": "حريرة",
      "category": "شوربات",
      "ingredients": ["طماطم", "عدس", "حمص", "بصل", "كرفس", "دقيق"],
      "calories": 300,
      "servings": 6
    },
    {
      "id": "couscous",
      "name": "كسكس باللحم والخضر",
      "category": "أطباق رئيسية",
      "ingredients": ["كسكس", "لحم أحمر", "جزر", "كوسة", "بصل", "سمن"],
      "calories": 650,
      "servings": 6
    },
    {
      "id": "zaalouk",
      "name": "زعلوك",
      "category": "سلطات",
      "ingredients": ["باذنجان", "طماطم", "ثوم", "زيت زيتون"],
      "calories": 180,
      "servings": 4
    },
    {
      "id": "chebakia",
      "name": "شباكية",
      "category": "حلويات",
      "ingredients": ["دقيق", "عسل", "سمسم", "زيت"],
      "calories": 520,
      "servings": 10
    },
    {
      "id": "mint-tea",
      "name": "أتاي بالنعناع",
      "category": "مشروبات",
      "ingredients": ["شاي أخضر", "نعناع", "سكر"],
      "calories": 90,
      "servings": 4
    }
  ]
}"#;

/// Parsed fixture catalog
pub fn fixture_catalog() -> RecipeCatalog {
    RecipeCatalog::from_json_str(FIXTURE_CATALOG).expect("fixture catalog is valid")
}

/// Write `contents` to `name` inside `dir`
pub fn write_file(dir: &Path, name: &str, contents: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).expect("write fixture file");
    path
}

/// 30 year old male, 70 kg, 170 cm, moderate, maintain (2507 kcal/day)
pub fn reference_profile() -> HealthProfile {
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

/// Reference profile with the given conditions
pub fn profile_with_conditions(conditions: &[ConditionKey]) -> HealthProfile {
    HealthProfile {
        conditions: conditions.to_vec(),
        ..reference_profile()
    }
}
