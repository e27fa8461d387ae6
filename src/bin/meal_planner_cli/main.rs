// ABOUTME: Meal planner CLI - command-line front end for the household meal recommendation engine
// ABOUTME: Suggests meals, plans full days, and validates calorie inputs with JSON output
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Three breakfast suggestions around 450 kcal
//! meal-planner-cli suggest --profile member.json --slot breakfast --calories 450
//!
//! # A 900 kcal snack is refused unless forced
//! meal-planner-cli suggest --profile member.json --slot snack --calories 900 --force
//!
//! # Next batch, skipping templates already shown
//! meal-planner-cli suggest --profile member.json --slot breakfast --calories 450 \
//!     --exclude moong-dal-chilla --exclude ragi-dosa
//!
//! # Full-day plan for 2000 kcal
//! meal-planner-cli plan --profile member.json --calories 2000
//!
//! # Plans for every member listed in a household file
//! meal-planner-cli household --members household.json
//!
//! # Calorie checks and the daily split
//! meal-planner-cli validate-daily --calories 1800 --age 42 --gender female
//! meal-planner-cli validate-meal --calories 900 --slot snack
//! meal-planner-cli split --calories 2000
//! ```

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use pierre_meal_planner::config::PlannerSettings;
use pierre_meal_planner::errors::AppError;
use pierre_meal_planner::logging::LoggingConfig;
use pierre_meal_planner::models::MealSlot;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::info;

#[derive(Parser)]
#[command(
    name = "meal-planner-cli",
    about = "Pierre Household Meal Planner",
    long_about = "Personalized meal suggestions and full-day plans for household members, with calorie safety checks."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Meal catalog JSON file (defaults to MEAL_CATALOG_PATH, then the built-in catalog)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    verbose: bool,
}

#[non_exhaustive]
#[derive(Subcommand)]
enum Command {
    /// Suggest meals for one slot
    Suggest {
        /// Member profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long)]
        slot: MealSlot,

        /// Calorie target for the meal
        #[arg(long)]
        calories: f64,

        /// Number of suggestions (defaults to the configured count)
        #[arg(long)]
        count: Option<usize>,

        /// Template ids to skip (repeatable)
        #[arg(long = "exclude")]
        excluded: Vec<String>,

        /// Suggest even when the calorie target is outside the slot limits
        #[arg(long)]
        force: bool,
    },

    /// Plan breakfast, lunch, dinner, and a snack for one day
    Plan {
        /// Member profile JSON file
        #[arg(long)]
        profile: PathBuf,

        /// Daily calorie total
        #[arg(long)]
        calories: u32,

        /// Per-slot exclusions JSON file
        #[arg(long)]
        exclusions: Option<PathBuf>,
    },

    /// Plan full days for every member in a household file
    Household {
        /// JSON array of members with name, profile, and daily calories
        #[arg(long)]
        members: PathBuf,
    },

    /// Check a daily calorie total against safety limits
    ValidateDaily {
        /// Daily calorie total
        #[arg(long)]
        calories: f64,

        /// Age in years
        #[arg(long)]
        age: u32,

        /// Gender (male, female, other)
        #[arg(long, default_value = "other")]
        gender: String,
    },

    /// Check a single meal's calories against the slot limits
    ValidateMeal {
        /// Meal calories
        #[arg(long)]
        calories: f64,

        /// Meal slot (breakfast, lunch, dinner, snack)
        #[arg(long)]
        slot: MealSlot,
    },

    /// Split a daily total across breakfast, lunch, dinner, and snacks
    Split {
        /// Daily calorie total
        #[arg(long)]
        calories: u32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error:#}");
            let code = error
                .downcast_ref::<AppError>()
                .map_or(1, |app_error| app_error.code.exit_code());
            ExitCode::from(code)
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level("debug");
    }
    logging.init()?;

    match cli.command {
        Command::Suggest {
            profile,
            slot,
            calories,
            count,
            excluded,
            force,
        } => {
            let settings = PlannerSettings::from_env()?.with_catalog_path(cli.catalog);
            info!(%slot, calories, "Generating meal suggestions");
            let request = commands::recommend::SuggestRequest {
                slot,
                calories,
                count,
                excluded: &excluded,
                force,
            };
            commands::recommend::suggest(&settings, &profile, &request)?;
        }
        Command::Plan {
            profile,
            calories,
            exclusions,
        } => {
            let settings = PlannerSettings::from_env()?.with_catalog_path(cli.catalog);
            info!(calories, "Planning full day");
            commands::recommend::plan(&settings, &profile, calories, exclusions.as_deref())?;
        }
        Command::Household { members } => {
            let settings = PlannerSettings::from_env()?.with_catalog_path(cli.catalog);
            commands::recommend::household(&settings, &members)?;
        }
        Command::ValidateDaily {
            calories,
            age,
            gender,
        } => commands::calories::validate_daily(calories, age, &gender)?,
        Command::ValidateMeal { calories, slot } => {
            commands::calories::validate_meal(calories, slot)?;
        }
        Command::Split { calories } => commands::calories::split(calories)?,
    }

    Ok(())
}
