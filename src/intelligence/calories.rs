// ABOUTME: MET-based energy expenditure estimate for a completed workout session
// ABOUTME: kcal = MET(workout type) x body weight (kg) x elapsed hours
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Calorie Estimation
//!
//! One MET is defined as 1 kcal per kilogram of body weight per hour, so the
//! estimate is the product of the activity MET, body weight and duration.
//! See [`workout_core::constants::energy`] for the MET table and its source.

use workout_core::constants::defaults::{
    DEFAULT_BODY_WEIGHT_KG, MAX_BODY_WEIGHT_KG, MIN_BODY_WEIGHT_KG,
};
use workout_core::constants::energy::{
    MET_CARDIO, MET_CUSTOM, MET_FLEXIBILITY, MET_HIIT, MET_STRENGTH, SECONDS_PER_HOUR,
};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::WorkoutType;

/// Estimates kcal burned from workout type, body weight and elapsed time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalorieEstimator {
    body_weight_kg: f64,
}

impl CalorieEstimator {
    /// Create an estimator for a given body weight
    ///
    /// # Errors
    ///
    /// Returns `VALUE_OUT_OF_RANGE` when the weight is not finite or outside
    /// the plausible adult range.
    pub fn new(body_weight_kg: f64) -> AppResult<Self> {
        if !body_weight_kg.is_finite()
            || !(MIN_BODY_WEIGHT_KG..=MAX_BODY_WEIGHT_KG).contains(&body_weight_kg)
        {
            return Err(AppError::out_of_range(format!(
                "body weight {body_weight_kg} kg must be between {MIN_BODY_WEIGHT_KG} and {MAX_BODY_WEIGHT_KG}"
            )));
        }
        Ok(Self { body_weight_kg })
    }

    /// Body weight used for estimates
    #[must_use]
    pub const fn body_weight_kg(&self) -> f64 {
        self.body_weight_kg
    }

    /// MET value for a workout type
    #[must_use]
    pub const fn met_for(workout_type: WorkoutType) -> f64 {
        match workout_type {
            WorkoutType::Strength => MET_STRENGTH,
            WorkoutType::Cardio => MET_CARDIO,
            WorkoutType::Flexibility => MET_FLEXIBILITY,
            WorkoutType::Hiit => MET_HIIT,
            WorkoutType::Custom => MET_CUSTOM,
        }
    }

    /// Estimated kcal, rounded to one decimal place
    #[must_use]
    pub fn estimate(&self, workout_type: WorkoutType, elapsed_seconds: u64) -> f64 {
        let hours = elapsed_seconds as f64 / SECONDS_PER_HOUR;
        let kcal = Self::met_for(workout_type) * self.body_weight_kg * hours;
        (kcal * 10.0).round() / 10.0
    }
}

impl Default for CalorieEstimator {
    fn default() -> Self {
        Self {
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
        }
    }
}
