// ABOUTME: Planned-duration and planned-calorie estimates shown before a workout starts
// ABOUTME: Sums work and rest time over every set the session engine will play
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use workout_core::models::{SetTarget, WorkoutPlan};

use super::calories::CalorieEstimator;

/// Assumed time to perform one repetition
pub const SECONDS_PER_REP: u32 = 3;

/// Expected session length if every set and rest is played in full
///
/// Rest is counted after every set except the last set of each exercise,
/// matching what the session engine actually plays.
#[must_use]
pub fn planned_duration_seconds(plan: &WorkoutPlan) -> u64 {
    plan.exercises
        .iter()
        .map(|exercise| {
            let work_per_set = match exercise.target {
                SetTarget::Reps(reps) => reps.saturating_mul(SECONDS_PER_REP),
                SetTarget::DurationSeconds(seconds) => seconds,
            };
            let sets = u64::from(exercise.set_count);
            let rests = sets.saturating_sub(1);
            sets * u64::from(work_per_set) + rests * u64::from(exercise.rest_seconds)
        })
        .sum()
}

/// Calorie estimate for a full playthrough of the plan
#[must_use]
pub fn planned_calories(plan: &WorkoutPlan, estimator: &CalorieEstimator) -> f64 {
    estimator.estimate(plan.workout_type, planned_duration_seconds(plan))
}
