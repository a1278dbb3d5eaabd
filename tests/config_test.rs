// ABOUTME: Tests for environment-driven session and logging configuration
// ABOUTME: Runs serially because each test mutates process environment variables
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use std::env;
use std::time::Duration;

use serial_test::serial;
use workout_player::config::SessionConfig;
use workout_player::errors::ErrorCode;
use workout_player::logging::{LogFormat, LoggingConfig};

const VARS: [&str; 3] = [
    "WORKOUT_TICK_INTERVAL_MS",
    "WORKOUT_BODY_WEIGHT_KG",
    "WORKOUT_USER_ID",
];

fn clear_env() {
    for var in VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_when_unset() {
    clear_env();
    let config = SessionConfig::from_env().unwrap();
    assert_eq!(config, SessionConfig::default());
    assert_eq!(config.tick_interval, Duration::from_secs(1));
    assert_eq!(config.body_weight_kg, 70.0);
    assert_eq!(config.user_id, None);
}

#[test]
#[serial]
fn test_reads_all_variables() {
    clear_env();
    env::set_var("WORKOUT_TICK_INTERVAL_MS", "250");
    env::set_var("WORKOUT_BODY_WEIGHT_KG", "82.5");
    env::set_var("WORKOUT_USER_ID", " athlete-7 ");

    let config = SessionConfig::from_env().unwrap();
    assert_eq!(config.tick_interval, Duration::from_millis(250));
    assert_eq!(config.body_weight_kg, 82.5);
    assert_eq!(config.user_id.as_deref(), Some("athlete-7"));
    assert_eq!(config.calorie_estimator().body_weight_kg(), 82.5);
    clear_env();
}

#[test]
#[serial]
fn test_blank_user_id_is_none() {
    clear_env();
    env::set_var("WORKOUT_USER_ID", "   ");
    assert_eq!(SessionConfig::from_env().unwrap().user_id, None);
    clear_env();
}

#[test]
#[serial]
fn test_malformed_tick_interval_is_config_error() {
    clear_env();
    env::set_var("WORKOUT_TICK_INTERVAL_MS", "fast");
    let error = SessionConfig::from_env().unwrap_err();
    assert_eq!(error.code, ErrorCode::ConfigInvalid);
    assert!(error.message.contains("WORKOUT_TICK_INTERVAL_MS"));
    clear_env();
}

#[test]
#[serial]
fn test_out_of_range_values_are_config_errors() {
    clear_env();
    env::set_var("WORKOUT_TICK_INTERVAL_MS", "0");
    assert_eq!(
        SessionConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );

    clear_env();
    env::set_var("WORKOUT_BODY_WEIGHT_KG", "5");
    assert_eq!(
        SessionConfig::from_env().unwrap_err().code,
        ErrorCode::ConfigInvalid
    );
    clear_env();
}

#[test]
fn test_builder_overrides_validate() {
    let config = SessionConfig::default()
        .with_tick_interval(Duration::from_millis(100))
        .with_body_weight_kg(60.0)
        .with_user_id("runner");
    assert!(config.validate().is_ok());

    let too_slow = SessionConfig::default().with_tick_interval(Duration::from_secs(120));
    assert_eq!(too_slow.validate().unwrap_err().code, ErrorCode::ConfigInvalid);
}

#[test]
#[serial]
fn test_logging_config_from_env() {
    env::set_var("RUST_LOG", "debug");
    env::set_var("LOG_FORMAT", "json");
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "debug");
    assert_eq!(config.format, LogFormat::Json);
    assert_eq!(config.service_name, "workout-player");

    env::remove_var("RUST_LOG");
    env::remove_var("LOG_FORMAT");
    let config = LoggingConfig::from_env();
    assert_eq!(config.level, "warn");
    assert_eq!(config.format, LogFormat::Compact);
    assert_eq!(config.verbose().level, "debug");
}

#[test]
fn test_log_format_parsing() {
    assert_eq!(LogFormat::from_str_or_default("PRETTY"), LogFormat::Pretty);
    assert_eq!(LogFormat::from_str_or_default("json"), LogFormat::Json);
    assert_eq!(LogFormat::from_str_or_default("plain"), LogFormat::Compact);
}
