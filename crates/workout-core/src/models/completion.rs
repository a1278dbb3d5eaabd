// ABOUTME: Completed workout summary handed to the progress recorder
// ABOUTME: Carries elapsed duration, calorie estimate, and completion timestamp
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Summary of a workout played through to the end
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompletedWorkout {
    /// Unique id of this history entry
    pub id: Uuid,
    /// Catalog id of the workout that was played
    pub workout_id: String,
    /// User the workout belongs to, when known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    /// Wall-clock time spent in the session, excluding pauses
    pub elapsed_seconds: u64,
    /// Estimated energy expenditure in kcal
    pub calories_estimate: f64,
    /// Number of exercises in the plan
    pub exercises_completed: u32,
    /// Number of sets in the plan
    pub sets_completed: u32,
    /// When the final set finished
    pub completed_at: DateTime<Utc>,
}

impl CompletedWorkout {
    /// Elapsed time in whole minutes, rounded to nearest
    #[must_use]
    pub fn elapsed_minutes(&self) -> u64 {
        (self.elapsed_seconds + 30) / 60
    }
}
