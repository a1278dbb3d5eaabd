// ABOUTME: Session configuration loaded from environment variables
// ABOUTME: Tick cadence, body weight for calorie estimates, and the user id attached to history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use workout_core::constants::defaults::DEFAULT_BODY_WEIGHT_KG;
use workout_core::constants::env_config;
use workout_core::constants::timer::{
    DEFAULT_TICK_INTERVAL_MS, MAX_TICK_INTERVAL_MS, MIN_TICK_INTERVAL_MS,
};
use workout_core::errors::{AppError, AppResult};

use super::env_var_or;
use crate::intelligence::CalorieEstimator;

/// Settings for one playback session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Real time between countdown ticks (one countdown second)
    pub tick_interval: Duration,
    /// Body weight used for the calorie estimate
    pub body_weight_kg: f64,
    /// User id attached to completed workouts
    pub user_id: Option<String>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_INTERVAL_MS),
            body_weight_kg: DEFAULT_BODY_WEIGHT_KG,
            user_id: None,
        }
    }
}

impl SessionConfig {
    /// Load configuration from environment variables
    ///
    /// Unset variables fall back to defaults; set but malformed ones are errors.
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if a variable cannot be parsed or is out of range
    pub fn from_env() -> AppResult<Self> {
        let raw_tick = env_var_or(
            env_config::TICK_INTERVAL_MS,
            &DEFAULT_TICK_INTERVAL_MS.to_string(),
        );
        let tick_ms: u64 = raw_tick.trim().parse().map_err(|e| {
            AppError::config(format!(
                "{} must be an integer number of milliseconds, got '{raw_tick}'",
                env_config::TICK_INTERVAL_MS
            ))
            .with_source(e)
        })?;

        let raw_weight = env_var_or(
            env_config::BODY_WEIGHT_KG,
            &DEFAULT_BODY_WEIGHT_KG.to_string(),
        );
        let body_weight_kg: f64 = raw_weight.trim().parse().map_err(|e| {
            AppError::config(format!(
                "{} must be a number of kilograms, got '{raw_weight}'",
                env_config::BODY_WEIGHT_KG
            ))
            .with_source(e)
        })?;

        let user_id = env::var(env_config::USER_ID)
            .ok()
            .map(|id| id.trim().to_owned())
            .filter(|id| !id.is_empty());

        let config = Self {
            tick_interval: Duration::from_millis(tick_ms),
            body_weight_kg,
            user_id,
        };
        config.validate()?;
        Ok(config)
    }

    /// Check ranges
    ///
    /// # Errors
    ///
    /// Returns `CONFIG_INVALID` if the tick interval or body weight is out of range
    pub fn validate(&self) -> AppResult<()> {
        let tick_ms = self.tick_interval.as_millis();
        if !(u128::from(MIN_TICK_INTERVAL_MS)..=u128::from(MAX_TICK_INTERVAL_MS)).contains(&tick_ms)
        {
            return Err(AppError::config(format!(
                "tick interval {tick_ms} ms must be between {MIN_TICK_INTERVAL_MS} and {MAX_TICK_INTERVAL_MS} ms"
            )));
        }
        CalorieEstimator::new(self.body_weight_kg)
            .map_err(|e| AppError::config(e.message))?;
        Ok(())
    }

    /// Calorie estimator for the configured body weight
    ///
    /// Falls back to the reference weight if the configured one was never validated.
    #[must_use]
    pub fn calorie_estimator(&self) -> CalorieEstimator {
        CalorieEstimator::new(self.body_weight_kg).unwrap_or_default()
    }

    /// Override the tick interval
    #[must_use]
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    /// Override the body weight
    #[must_use]
    pub fn with_body_weight_kg(mut self, body_weight_kg: f64) -> Self {
        self.body_weight_kg = body_weight_kg;
        self
    }

    /// Override the user id
    #[must_use]
    pub fn with_user_id(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = Some(user_id.into());
        self
    }
}
