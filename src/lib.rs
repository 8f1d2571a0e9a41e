// ABOUTME: Main library entry point for the Tajine recipe finder
// ABOUTME: Catalog ingestion, profile session, user data, and tiered health-aware recommendations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

#![deny(unsafe_code)]

//! # Tajine
//!
//! Finds recipes a user can cook with the ingredients they have, and assesses
//! each one against an optional health profile.
//!
//! ## Architecture
//!
//! - **tajine-core**: errors, domain models, condition catalog
//! - **tajine-intelligence**: ingredient matcher, calorie calculator, health engine
//! - **this crate**: catalog files, configuration, logging, profile session,
//!   shopping list and favorites, and the recommendation service
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use tajine::catalog::RecipeCatalog;
//! use tajine::config::AppConfig;
//! use tajine::recommendations::RecommendationService;
//! use tajine_core::errors::AppResult;
//! use tajine_core::models::ScanMode;
//!
//! fn main() -> AppResult<()> {
//!     let config = AppConfig::global();
//!     let catalog = RecipeCatalog::from_path("recipes.json")?;
//!     let service = RecommendationService::new(config.engine);
//!     let tiered = service.recommend(catalog.recipes(), &["دجاج", "بصل"], ScanMode::General, None);
//!     println!("{} recipes", tiered.displayed());
//!     Ok(())
//! }
//! ```

/// Recipe catalog loading and validation
pub mod catalog;

/// Application configuration and environment overrides
pub mod config;

/// Structured logging setup
pub mod logging;

/// Tiered recommendations with health assessments
pub mod recommendations;

/// Health profile session lifecycle
pub mod session;

/// Shopping list and favorites
pub mod user_data;

pub use tajine_core::errors::{AppError, AppResult, ErrorCode};
