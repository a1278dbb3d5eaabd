// ABOUTME: Core data models for workout playback
// ABOUTME: Re-exports plan definitions and the completed workout summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

mod completion;
mod plan;

pub use completion::CompletedWorkout;
pub use plan::{Difficulty, ExercisePlan, SetTarget, WorkoutPlan, WorkoutType};
