// ABOUTME: Tajine CLI - find recipes from available ingredients and assess them for a health profile
// ABOUTME: Handles matching, calorie targets, single-recipe assessment, catalog checks, and shopping lists
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Tajine Contributors
//!
//! Usage:
//! ```bash
//! # Recipes for what is in the fridge
//! tajine-cli --catalog recipes.json match دجاج بصل زيتون
//!
//! # Desserts only, assessed for a saved profile, as JSON
//! tajine-cli --catalog recipes.json --json match --mode sweets --profile me.json سكر دقيق
//!
//! # Daily calorie target
//! tajine-cli calories --profile me.json
//!
//! # Health assessment of one recipe
//! tajine-cli --catalog recipes.json assess chicken-tagine --profile me.json
//!
//! # Check a catalog file
//! tajine-cli --catalog recipes.json validate-catalog
//!
//! # Put a recipe's missing ingredients on the shopping list
//! tajine-cli --catalog recipes.json shop chicken-tagine --data user.json دجاج بصل
//! ```

mod commands;
mod helpers;

use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tajine::catalog::RecipeCatalog;
use tajine::config::AppConfig;
use tajine_core::models::ScanMode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "tajine-cli",
    about = "Tajine recipe finder",
    long_about = "Find recipes from the ingredients you have and check them against your health profile."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe catalog file (overrides `TAJINE_CATALOG_PATH`)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    General,
    Sweets,
}

impl From<ModeArg> for ScanMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::General => Self::General,
            ModeArg::Sweets => Self::Sweets,
        }
    }
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Find recipes matching the available ingredients
    Match {
        /// Available ingredients
        #[arg(required = true, num_args = 1..)]
        ingredients: Vec<String>,

        /// Recipe scope
        #[arg(long, value_enum, default_value_t = ModeArg::General)]
        mode: ModeArg,

        /// Health profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,

        /// Require exact ingredient names instead of substring matching
        #[arg(long)]
        exact: bool,
    },

    /// Show the daily calorie target of a profile
    Calories {
        /// Health profile JSON file
        #[arg(long)]
        profile: PathBuf,
    },

    /// Assess one recipe for a profile
    Assess {
        /// Recipe id
        recipe_id: String,

        /// Health profile JSON file
        #[arg(long)]
        profile: Option<PathBuf>,
    },

    /// Load and validate the catalog
    ValidateCatalog,

    /// Add a recipe's missing ingredients to the shopping list
    Shop {
        /// Recipe id
        recipe_id: String,

        /// Available ingredients
        ingredients: Vec<String>,

        /// User data JSON file, created if absent
        #[arg(long)]
        data: PathBuf,
    },
}

fn load_catalog(cli_path: Option<PathBuf>, config: &AppConfig) -> Result<RecipeCatalog> {
    let path = cli_path
        .or_else(|| config.catalog_path.clone())
        .ok_or_else(|| anyhow!("no catalog given: pass --catalog or set TAJINE_CATALOG_PATH"))?;
    Ok(RecipeCatalog::from_path(path)?)
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::global();

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".into();
    }
    logging.init()?;
    info!("Tajine CLI");

    let engine = config.engine;
    match cli.command {
        Command::Match {
            ingredients,
            mode,
            profile,
            exact,
        } => {
            let catalog = load_catalog(cli.catalog, config)?;
            commands::recipes::find(
                &catalog,
                &ingredients,
                mode.into(),
                profile.as_deref(),
                exact,
                cli.json,
                engine,
            )?;
        }
        Command::Calories { profile } => {
            commands::health::calories(&profile, cli.json, engine)?;
        }
        Command::Assess { recipe_id, profile } => {
            let catalog = load_catalog(cli.catalog, config)?;
            commands::health::assess(&catalog, &recipe_id, profile.as_deref(), cli.json, engine)?;
        }
        Command::ValidateCatalog => {
            let catalog = load_catalog(cli.catalog, config)?;
            commands::recipes::validate(&catalog, cli.json)?;
        }
        Command::Shop {
            recipe_id,
            ingredients,
            data,
        } => {
            let catalog = load_catalog(cli.catalog, config)?;
            commands::shopping::add_missing(
                &catalog,
                &recipe_id,
                &ingredients,
                &data,
                cli.json,
                engine,
            )?;
        }
    }

    Ok(())
}
