// ABOUTME: Main library entry point for the guided workout player
// ABOUTME: Session state machine, timer ownership, progress recording, and catalog
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Workout Player
//!
//! Plays a structured workout plan one set at a time: timed sets and rests
//! count down, rep-based sets wait for the user, and the whole session can be
//! paused, stepped back, skipped forward, or abandoned.
//!
//! ## Architecture
//!
//! - **session**: the playback state machine, timer sources, and async driver
//! - **recorder**: progress recorders notified once per completed workout
//! - **catalog**: where workout plans come from
//! - **intelligence**: calorie and planned-duration estimates
//! - **config**: environment-driven session settings
//! - **logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use workout_player::catalog::{InMemoryWorkoutCatalog, WorkoutCatalog, BUILTIN_WORKOUT_ID};
//! use workout_player::config::SessionConfig;
//! use workout_player::errors::AppResult;
//! use workout_player::recorder::TracingProgressRecorder;
//! use workout_player::session::SessionDriver;
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let plan = InMemoryWorkoutCatalog::with_builtin().get(BUILTIN_WORKOUT_ID)?;
//!     let config = SessionConfig::from_env()?;
//!     let (driver, _snapshots) =
//!         SessionDriver::start(plan, &config, Arc::new(TracingProgressRecorder))?;
//!     let (_intents_tx, intents) = tokio::sync::mpsc::channel(16);
//!     let outcome = driver.run(intents).await;
//!     println!("completed: {}", outcome.is_completed());
//!     Ok(())
//! }
//! ```

/// Workout plan sources
pub mod catalog;

/// Environment-driven configuration
pub mod config;

/// Unified error handling (re-exported from workout-core)
pub mod errors;

/// Calorie and planned-duration estimates
pub mod intelligence;

/// Structured logging setup
pub mod logging;

/// Workout models (re-exported from workout-core)
pub mod models;

/// Progress recorders notified on completion
pub mod recorder;

/// Guided playback engine
pub mod session;
