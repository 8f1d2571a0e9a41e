// ABOUTME: Core types and constants for the Tajine recipe engine
// ABOUTME: Foundation crate with error handling, domain models, and the condition catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors

#![deny(unsafe_code)]

//! # Tajine Core
//!
//! Foundation crate providing shared types and constants for the Tajine recipe
//! matching and health scoring engine. This crate is designed to change
//! infrequently, enabling incremental compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: Neutral defaults and rounding helpers shared by the engines
//! - **models**: Recipe, health profile, warning, and match result types
//! - **conditions**: Static catalog of medical conditions and contraindicated ingredients

/// Unified error handling system with standard error codes
pub mod errors;

/// Engine constants and numeric helpers
pub mod constants;

/// Core data models (Recipe, `HealthProfile`, `HealthWarning`, `MatchResult`)
pub mod models;

/// Medical condition catalog keyed by `ConditionKey`
pub mod conditions;
