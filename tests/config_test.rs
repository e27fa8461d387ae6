// ABOUTME: Integration tests for planner configuration, environment overrides, and logging config
// ABOUTME: Serialized because the tests mutate process environment variables
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_meal_planner::config::environment::CATALOG_PATH_ENV;
use pierre_meal_planner::config::PlannerSettings;
use pierre_meal_planner::errors::{ConfigError, ErrorCode};
use pierre_meal_planner::logging::{LogFormat, LoggingConfig};
use pierre_meal_planner::PlannerConfig;
use serial_test::serial;
use std::env;
use std::path::PathBuf;

const OVERRIDE_VARS: [&str; 4] = [
    "MEAL_PLANNER_DEFAULT_COUNT",
    "MEAL_PLANNER_CALORIE_WEIGHT",
    "MEAL_PLANNER_FIBER_THRESHOLD_G",
    CATALOG_PATH_ENV,
];

fn clear_overrides() {
    for var in OVERRIDE_VARS {
        env::remove_var(var);
    }
}

// ============================================================================
// Defaults and Validation
// ============================================================================

#[test]
fn test_defaults_match_documented_heuristic() {
    let config = PlannerConfig::default();
    let scoring = &config.scoring;

    assert!((scoring.base_score - 100.0).abs() < f64::EPSILON);
    assert!((scoring.calorie_proximity_weight - 2.0).abs() < f64::EPSILON);
    assert!((scoring.condition_bonuses.anemia_iron_rich - 30.0).abs() < f64::EPSILON);
    assert!((scoring.condition_bonuses.heart_healthy - 25.0).abs() < f64::EPSILON);
    assert!((scoring.balance_bonus - 20.0).abs() < f64::EPSILON);
    assert!((scoring.fiber_bonus - 15.0).abs() < f64::EPSILON);
    assert!((scoring.fiber_threshold_g - 6.0).abs() < f64::EPSILON);
    assert_eq!(config.suggestions.default_count, 3);
    assert_eq!(config.suggestions.note_separator, " \u{2022} ");
    assert!(config.validate().is_ok());
}

#[test]
fn test_validate_rejects_malformed_values() {
    let mut config = PlannerConfig::default();
    config.scoring.calorie_proximity_weight = -1.0;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PlannerConfig::default();
    config.scoring.balanced_macros.fat_percent.min = 50.0;
    config.scoring.balanced_macros.fat_percent.max = 10.0;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));

    let mut config = PlannerConfig::default();
    config.suggestions.default_count = 0;
    assert!(config.validate().is_err());
}

// ============================================================================
// Environment Overrides
// ============================================================================

#[test]
#[serial]
fn test_env_overrides_are_applied() {
    clear_overrides();
    env::set_var("MEAL_PLANNER_DEFAULT_COUNT", "5");
    env::set_var("MEAL_PLANNER_CALORIE_WEIGHT", "3.5");
    env::set_var("MEAL_PLANNER_FIBER_THRESHOLD_G", "8");

    let config = PlannerConfig::load().unwrap();
    clear_overrides();

    assert_eq!(config.suggestions.default_count, 5);
    assert!((config.scoring.calorie_proximity_weight - 3.5).abs() < f64::EPSILON);
    assert!((config.scoring.fiber_threshold_g - 8.0).abs() < f64::EPSILON);
}

#[test]
#[serial]
fn test_unparsable_override_is_an_error() {
    clear_overrides();
    env::set_var("MEAL_PLANNER_DEFAULT_COUNT", "many");

    let result = PlannerConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::Parse(_))));
}

#[test]
#[serial]
fn test_override_failing_validation_is_an_error() {
    clear_overrides();
    env::set_var("MEAL_PLANNER_CALORIE_WEIGHT", "-2");

    let result = PlannerConfig::load();
    clear_overrides();

    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
#[serial]
fn test_non_finite_override_is_rejected() {
    for value in ["NaN", "inf", "-inf"] {
        clear_overrides();
        env::set_var("MEAL_PLANNER_CALORIE_WEIGHT", value);
        let result = PlannerConfig::load();
        clear_overrides();
        assert!(
            matches!(result, Err(ConfigError::ValueOutOfRange(_))),
            "{value} was accepted"
        );
    }

    env::set_var("MEAL_PLANNER_FIBER_THRESHOLD_G", "NaN");
    let result = PlannerConfig::load();
    clear_overrides();
    assert!(matches!(result, Err(ConfigError::ValueOutOfRange(_))));
}

#[test]
fn test_validate_rejects_non_finite_weights_and_bands() {
    let mut config = PlannerConfig::default();
    config.scoring.base_score = f64::NAN;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PlannerConfig::default();
    config.scoring.condition_bonuses.heart_healthy = f64::INFINITY;
    assert!(matches!(
        config.validate(),
        Err(ConfigError::ValueOutOfRange(_))
    ));

    let mut config = PlannerConfig::default();
    config.scoring.balanced_macros.protein_percent.min = f64::NAN;
    assert!(matches!(config.validate(), Err(ConfigError::InvalidRange(_))));
}

#[test]
#[serial]
fn test_settings_read_catalog_path() {
    clear_overrides();
    env::set_var(CATALOG_PATH_ENV, "/tmp/catalog.json");
    let settings = PlannerSettings::from_env().unwrap();
    clear_overrides();
    assert_eq!(
        settings.catalog_path,
        Some(PathBuf::from("/tmp/catalog.json"))
    );

    env::set_var(CATALOG_PATH_ENV, "   ");
    let settings = PlannerSettings::from_env().unwrap();
    clear_overrides();
    assert_eq!(settings.catalog_path, None, "blank path selects the built-in catalog");
}

#[test]
#[serial]
fn test_settings_surface_config_errors() {
    clear_overrides();
    env::set_var("MEAL_PLANNER_FIBER_THRESHOLD_G", "lots");

    let error = PlannerSettings::from_env().unwrap_err();
    clear_overrides();

    assert_eq!(error.code, ErrorCode::ConfigError);
}

#[test]
fn test_cli_flag_overrides_catalog_path() {
    let settings = PlannerSettings {
        catalog_path: Some(PathBuf::from("from-env.json")),
        ..PlannerSettings::default()
    };

    let kept = settings.clone().with_catalog_path(None);
    assert_eq!(kept.catalog_path, Some(PathBuf::from("from-env.json")));

    let replaced = settings.with_catalog_path(Some(PathBuf::from("from-flag.json")));
    assert_eq!(replaced.catalog_path, Some(PathBuf::from("from-flag.json")));
}

// ============================================================================
// Logging Configuration
// ============================================================================

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("LOG_FORMAT", "json");
    env::remove_var("RUST_LOG");
    let config = LoggingConfig::from_env();
    env::remove_var("LOG_FORMAT");

    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.level, "warn");
    assert_eq!(config.with_level("debug").level, "debug");
}

#[test]
fn test_log_format_parsing_defaults_to_compact() {
    assert_eq!(LogFormat::from_str_or_default("PRETTY"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("xml"), LogFormat::Compact);
}
