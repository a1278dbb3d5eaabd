// ABOUTME: Constants module with domain-separated organization
// ABOUTME: Timer cadence, energy expenditure tables, and player defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module
//!
//! Constants are grouped into logical domains rather than being in a single large file.

/// MET values per workout type for calorie estimation
pub mod energy;

/// Countdown timer cadence
pub mod timer {
    /// Production tick period in milliseconds (one countdown second)
    pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;
    /// Fastest tick period accepted from configuration
    pub const MIN_TICK_INTERVAL_MS: u64 = 1;
    /// Slowest tick period accepted from configuration
    pub const MAX_TICK_INTERVAL_MS: u64 = 60_000;
}

/// Defaults used when the caller supplies no user profile
pub mod defaults {
    /// Reference body weight (kg) for calorie estimates
    pub const DEFAULT_BODY_WEIGHT_KG: f64 = 70.0;
    /// Lower bound for a plausible body weight (kg)
    pub const MIN_BODY_WEIGHT_KG: f64 = 20.0;
    /// Upper bound for a plausible body weight (kg)
    pub const MAX_BODY_WEIGHT_KG: f64 = 350.0;
}

/// Service identifiers used in structured logs
pub mod service_names {
    /// Name of the terminal player binary
    pub const WORKOUT_PLAYER: &str = "workout-player";
}

/// Environment variable names read by configuration
pub mod env_config {
    /// Countdown tick period override (milliseconds)
    pub const TICK_INTERVAL_MS: &str = "WORKOUT_TICK_INTERVAL_MS";
    /// Body weight used for calorie estimates (kg)
    pub const BODY_WEIGHT_KG: &str = "WORKOUT_BODY_WEIGHT_KG";
    /// User identifier attached to completed workouts
    pub const USER_ID: &str = "WORKOUT_USER_ID";
}
