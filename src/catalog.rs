// ABOUTME: Workout catalog supplying validated plans to the session engine
// ABOUTME: In-memory catalog with a built-in plan and JSON file loading
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::{Difficulty, ExercisePlan, WorkoutPlan, WorkoutType};

/// Id of the plan every catalog ships with
pub const BUILTIN_WORKOUT_ID: &str = "full-body-strength";

/// Source of workout plans
pub trait WorkoutCatalog: Send + Sync {
    /// All plans, ordered by id
    fn list(&self) -> Vec<WorkoutPlan>;

    /// Plan with the given id
    ///
    /// # Errors
    ///
    /// Returns `RESOURCE_NOT_FOUND` if no plan has this id
    fn get(&self, workout_id: &str) -> AppResult<WorkoutPlan>;
}

/// On-disk catalog format
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogFile {
    /// Plans in the file
    pub workouts: Vec<WorkoutPlan>,
}

/// Catalog held entirely in memory
#[derive(Debug, Clone, Default)]
pub struct InMemoryWorkoutCatalog {
    plans: BTreeMap<String, WorkoutPlan>,
}

impl InMemoryWorkoutCatalog {
    /// Empty catalog
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog containing only the built-in plan
    #[must_use]
    pub fn with_builtin() -> Self {
        let mut catalog = Self::new();
        let plan = builtin_full_body_strength();
        catalog.plans.insert(plan.id.clone(), plan);
        catalog
    }

    /// Add a plan, replacing any plan with the same id
    ///
    /// # Errors
    ///
    /// Returns an error if the plan fails validation
    pub fn insert(&mut self, plan: WorkoutPlan) -> AppResult<()> {
        plan.validate()?;
        debug!(workout_id = %plan.id, "catalog plan added");
        self.plans.insert(plan.id.clone(), plan);
        Ok(())
    }

    /// Parse a catalog from JSON text
    ///
    /// # Errors
    ///
    /// Returns `SERIALIZATION_ERROR` for malformed JSON and `INVALID_INPUT`
    /// for plans that fail validation or share an id.
    pub fn from_json(json: &str) -> AppResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        let mut catalog = Self::new();
        for plan in file.workouts {
            if catalog.plans.contains_key(&plan.id) {
                return Err(AppError::invalid_input(format!(
                    "duplicate workout id '{}'",
                    plan.id
                )));
            }
            catalog.insert(plan)?;
        }
        Ok(catalog)
    }

    /// Load a catalog from a JSON file
    ///
    /// # Errors
    ///
    /// Returns `STORAGE_ERROR` if the file cannot be read, otherwise as [`Self::from_json`]
    pub fn from_json_file(path: &Path) -> AppResult<Self> {
        let json = fs::read_to_string(path)?;
        let catalog = Self::from_json(&json)?;
        info!(path = %path.display(), workouts = catalog.len(), "Workout catalog loaded");
        Ok(catalog)
    }

    /// Number of plans
    #[must_use]
    pub fn len(&self) -> usize {
        self.plans.len()
    }

    /// No plans at all
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}

impl WorkoutCatalog for InMemoryWorkoutCatalog {
    fn list(&self) -> Vec<WorkoutPlan> {
        self.plans.values().cloned().collect()
    }

    fn get(&self, workout_id: &str) -> AppResult<WorkoutPlan> {
        self.plans
            .get(workout_id)
            .cloned()
            .ok_or_else(|| AppError::not_found(format!("Workout '{workout_id}'")))
    }
}

/// Four-exercise full body session: three rep-based lifts and a timed plank
#[must_use]
pub fn builtin_full_body_strength() -> WorkoutPlan {
    let mut plan = WorkoutPlan::new(
        BUILTIN_WORKOUT_ID,
        "Full Body Strength",
        vec![
            ExercisePlan::reps("push-ups", "Push-ups", 3, 15, 60).with_muscle_group("chest"),
            ExercisePlan::reps("squats", "Squats", 3, 12, 60).with_muscle_group("legs"),
            ExercisePlan::timed("plank", "Plank", 3, 30, 60).with_muscle_group("core"),
            ExercisePlan::reps("dumbbell-rows", "Dumbbell Rows", 3, 12, 60)
                .with_muscle_group("back"),
        ],
    )
    .with_type(WorkoutType::Strength)
    .with_difficulty(Difficulty::Beginner);
    plan.description = Some("Bodyweight and dumbbell circuit covering every major muscle group".to_owned());
    plan
}
