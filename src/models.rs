// ABOUTME: Re-exports workout models from workout-core for unified type identity
// ABOUTME: Plans, set targets, and completed-workout summaries shared by engine and hosts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

pub use workout_core::models::*;
