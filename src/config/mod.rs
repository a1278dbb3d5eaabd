// ABOUTME: Configuration management for the workout player
// ABOUTME: Environment-only configuration, overridable by command-line flags
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration is read from environment variables only; there is no config
//! file. The `workout-player` binary layers its command-line flags on top.

/// Session settings: tick cadence, body weight, user id
pub mod session;

pub use session::SessionConfig;

use std::env;

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
