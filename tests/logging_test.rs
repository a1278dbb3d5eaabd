// ABOUTME: Tests for global tracing subscriber installation
// ABOUTME: Installs the multi-line pretty format once per test binary and rejects a second install
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use workout_player::logging::{LogFormat, LoggingConfig};

#[test]
fn test_pretty_format_installs_once() {
    let config = LoggingConfig {
        level: "debug".into(),
        format: LogFormat::Pretty,
        include_location: true,
        ..LoggingConfig::default()
    };
    config.init().unwrap();
    tracing::debug!(format = "pretty", "pretty subscriber installed");

    // The global subscriber can only be set once per process
    assert!(config.init().is_err());
}
