// ABOUTME: Core types and constants for the guided workout player
// ABOUTME: Foundation crate with error handling, workout models, constants, and formatters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Core
//!
//! Foundation crate providing shared types for the workout player. It changes
//! infrequently, so the engine crate can be rebuilt without touching it.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `AppResult`
//! - **models**: `WorkoutPlan`, `ExercisePlan`, `SetTarget`, `CompletedWorkout`
//! - **constants**: Timer cadence, MET table, and defaults
//! - **formatters**: Countdown and progress display helpers

/// Unified error handling system with standard error codes
pub mod errors;

/// Application constants organized by domain
pub mod constants;

/// Workout plan and completion models
pub mod models;

/// Countdown and progress display helpers
pub mod formatters;
