// ABOUTME: Workout intelligence: energy expenditure and planned-duration estimates
// ABOUTME: Pure calculations with no I/O, used by the session engine and the catalog listing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// MET-based calorie estimation
pub mod calories;

/// Planned duration and calories for a full playthrough
pub mod planning;

pub use calories::CalorieEstimator;
pub use planning::{planned_calories, planned_duration_seconds};
