// ABOUTME: Tests for MET-based calorie estimates and planned workout duration
// ABOUTME: Checks the MET table, rounding, weight validation, and rest accounting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use workout_player::catalog::builtin_full_body_strength;
use workout_player::errors::ErrorCode;
use workout_player::intelligence::planning::SECONDS_PER_REP;
use workout_player::intelligence::{planned_calories, planned_duration_seconds, CalorieEstimator};
use workout_player::models::{ExercisePlan, WorkoutPlan, WorkoutType};

#[test]
fn test_one_hour_of_strength_at_reference_weight() {
    let estimator = CalorieEstimator::default();
    assert_eq!(estimator.body_weight_kg(), 70.0);
    assert_eq!(estimator.estimate(WorkoutType::Strength, 3600), 350.0);
}

#[test]
fn test_estimate_scales_with_weight_and_type() {
    let estimator = CalorieEstimator::new(80.0).unwrap();
    assert_eq!(estimator.estimate(WorkoutType::Cardio, 1800), 320.0);
    assert_eq!(estimator.estimate(WorkoutType::Strength, 0), 0.0);
}

#[test]
fn test_estimate_rounds_to_one_decimal() {
    let estimator = CalorieEstimator::default();
    // 2.3 MET * 70 kg * 600/3600 h = 26.83 kcal
    assert_eq!(estimator.estimate(WorkoutType::Flexibility, 600), 26.8);
}

#[test]
fn test_met_ordering() {
    assert!(
        CalorieEstimator::met_for(WorkoutType::Hiit)
            > CalorieEstimator::met_for(WorkoutType::Strength)
    );
    assert!(
        CalorieEstimator::met_for(WorkoutType::Strength)
            > CalorieEstimator::met_for(WorkoutType::Flexibility)
    );
}

#[test]
fn test_rejects_implausible_weights() {
    for weight in [0.0, 10.0, 500.0, f64::NAN, f64::INFINITY] {
        let error = CalorieEstimator::new(weight).unwrap_err();
        assert_eq!(error.code, ErrorCode::ValueOutOfRange);
    }
}

#[test]
fn test_planned_duration_counts_rest_between_sets_only() {
    let plan = WorkoutPlan::new(
        "mini",
        "Mini",
        vec![
            ExercisePlan::reps("push-ups", "Push-ups", 2, 10, 30),
            ExercisePlan::timed("plank", "Plank", 1, 30, 45),
        ],
    );
    // 2 * 10 reps * 3 s + one 30 s rest, then a 30 s plank with no trailing rest
    assert_eq!(SECONDS_PER_REP, 3);
    assert_eq!(planned_duration_seconds(&plan), 120);
}

#[test]
fn test_builtin_plan_estimates() {
    let plan = builtin_full_body_strength();
    assert_eq!(planned_duration_seconds(&plan), 921);
    assert_eq!(planned_calories(&plan, &CalorieEstimator::default()), 89.5);
}
