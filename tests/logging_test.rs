// ABOUTME: Tests for logging configuration derived from the environment and CLI flags
// ABOUTME: Env-mutating tests run serially; subscriber installation is checked once per process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use pierre_strength::logging::{LogFormat, LoggingConfig};
use serial_test::serial;
use std::env;

const LOGGING_VARS: [&str; 5] = [
    "RUST_LOG",
    "LOG_FORMAT",
    "ENVIRONMENT",
    "LOG_INCLUDE_LOCATION",
    "SERVICE_NAME",
];

fn clear_logging_env() {
    for var in LOGGING_VARS {
        env::remove_var(var);
    }
}

#[test]
#[serial]
fn test_defaults_without_environment() {
    clear_logging_env();
    let config = LoggingConfig::from_env();

    assert_eq!(config.level, "info");
    assert_eq!(config.format, LogFormat::Pretty);
    assert_eq!(config.environment, "development");
    assert_eq!(config.service_name, "pierre-strength");
    assert!(!config.include_location);
}

#[test]
#[serial]
fn test_production_enables_detail() {
    clear_logging_env();
    env::set_var("ENVIRONMENT", "production");
    env::set_var("LOG_FORMAT", "json");

    let config = LoggingConfig::from_env();
    clear_logging_env();

    assert_eq!(config.format, LogFormat::Json);
    assert!(config.include_location);
    assert!(config.include_thread);
}

#[test]
#[serial]
fn test_cli_config_is_quiet_unless_verbose() {
    clear_logging_env();

    let quiet = LoggingConfig::for_cli(false);
    assert_eq!(quiet.level, "warn");
    assert_eq!(quiet.format, LogFormat::Compact);

    let verbose = LoggingConfig::for_cli(true);
    assert_eq!(verbose.level, "debug");
}

#[test]
#[serial]
fn test_env_filter_keeps_dependency_noise_down() {
    clear_logging_env();
    let filter = LoggingConfig::for_cli(true).env_filter().to_string();

    assert!(filter.contains("sqlx=warn"));
    assert!(filter.contains("pierre_strength=debug"));
}

#[test]
#[serial]
fn test_second_init_is_an_error() {
    clear_logging_env();
    let config = LoggingConfig::for_cli(false);

    assert!(config.init().is_ok());
    assert!(config.init().is_err());
}
