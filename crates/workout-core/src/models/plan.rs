// ABOUTME: Workout plan models supplied by the catalog and consumed by the session engine
// ABOUTME: Defines WorkoutPlan, ExercisePlan, SetTarget, and plan validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};

/// Workout category, used to pick an energy expenditure rate
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum WorkoutType {
    /// Resistance training
    #[default]
    Strength,
    /// Continuous cardiovascular work
    Cardio,
    /// Stretching and mobility
    Flexibility,
    /// High-intensity interval training
    Hiit,
    /// User-built workout
    Custom,
}

/// Difficulty rating shown in the catalog
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    /// Entry level
    #[default]
    Beginner,
    /// Some training experience
    Intermediate,
    /// Experienced athletes
    Advanced,
}

/// What a single set of an exercise asks for
///
/// Rep-based sets have no countdown: the user signals completion. Timed sets
/// count down from the target duration and complete on their own.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum SetTarget {
    /// Perform this many repetitions
    Reps(u32),
    /// Hold or repeat for this many seconds
    DurationSeconds(u32),
}

impl SetTarget {
    /// Countdown seed for a set of this kind, `None` for rep-based sets
    #[must_use]
    pub const fn countdown_seconds(&self) -> Option<u32> {
        match self {
            Self::Reps(_) => None,
            Self::DurationSeconds(seconds) => Some(*seconds),
        }
    }

    /// Whether the set is measured by duration
    #[must_use]
    pub const fn is_timed(&self) -> bool {
        matches!(self, Self::DurationSeconds(_))
    }
}

/// One exercise in a workout, performed for `set_count` sets
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExercisePlan {
    /// Catalog identifier
    pub id: String,
    /// Display name
    pub name: String,
    /// Primary muscle group, if known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub muscle_group: Option<String>,
    /// Number of sets, at least one
    pub set_count: u32,
    /// Rep count or duration per set
    pub target: SetTarget,
    /// Rest after each set, in seconds
    #[serde(default)]
    pub rest_seconds: u32,
}

impl ExercisePlan {
    /// Rep-based exercise
    pub fn reps(
        id: impl Into<String>,
        name: impl Into<String>,
        set_count: u32,
        reps: u32,
        rest_seconds: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            muscle_group: None,
            set_count,
            target: SetTarget::Reps(reps),
            rest_seconds,
        }
    }

    /// Timed exercise
    pub fn timed(
        id: impl Into<String>,
        name: impl Into<String>,
        set_count: u32,
        duration_seconds: u32,
        rest_seconds: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            muscle_group: None,
            set_count,
            target: SetTarget::DurationSeconds(duration_seconds),
            rest_seconds,
        }
    }

    /// Attach a muscle group
    #[must_use]
    pub fn with_muscle_group(mut self, muscle_group: impl Into<String>) -> Self {
        self.muscle_group = Some(muscle_group.into());
        self
    }

    /// Index of the final set
    #[must_use]
    pub const fn last_set_index(&self) -> usize {
        self.set_count.saturating_sub(1) as usize
    }

    fn validate(&self, position: usize) -> AppResult<()> {
        if self.set_count == 0 {
            return Err(AppError::invalid_input(format!(
                "exercise {position} ('{}') must have at least one set",
                self.name
            )));
        }
        match self.target {
            SetTarget::Reps(0) => Err(AppError::invalid_input(format!(
                "exercise {position} ('{}') has a zero rep target",
                self.name
            ))),
            SetTarget::DurationSeconds(0) => Err(AppError::invalid_input(format!(
                "exercise {position} ('{}') has a zero duration target",
                self.name
            ))),
            _ => Ok(()),
        }
    }
}

/// Ordered list of exercises making up one workout
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkoutPlan {
    /// Catalog identifier, reported to the progress recorder
    pub id: String,
    /// Display name
    pub name: String,
    /// Optional long description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Workout category
    #[serde(default)]
    pub workout_type: WorkoutType,
    /// Difficulty rating
    #[serde(default)]
    pub difficulty: Difficulty,
    /// Exercises in playback order
    pub exercises: Vec<ExercisePlan>,
}

impl WorkoutPlan {
    /// Create a plan with default type and difficulty
    pub fn new(id: impl Into<String>, name: impl Into<String>, exercises: Vec<ExercisePlan>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: None,
            workout_type: WorkoutType::default(),
            difficulty: Difficulty::default(),
            exercises,
        }
    }

    /// Set the workout category
    #[must_use]
    pub fn with_type(mut self, workout_type: WorkoutType) -> Self {
        self.workout_type = workout_type;
        self
    }

    /// Set the difficulty rating
    #[must_use]
    pub fn with_difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Reject plans the session engine cannot play back faithfully
    ///
    /// # Errors
    ///
    /// Returns `MISSING_REQUIRED_FIELD` for an empty id and `INVALID_INPUT`
    /// for an empty exercise list, a zero set count, or a zero target.
    pub fn validate(&self) -> AppResult<()> {
        if self.id.trim().is_empty() {
            return Err(AppError::missing_field("workout id"));
        }
        if self.exercises.is_empty() {
            return Err(AppError::invalid_input(format!(
                "workout '{}' has no exercises",
                self.name
            )));
        }
        self.exercises
            .iter()
            .enumerate()
            .try_for_each(|(position, exercise)| exercise.validate(position))
    }

    /// Total sets across all exercises
    #[must_use]
    pub fn total_sets(&self) -> u32 {
        self.exercises.iter().map(|e| e.set_count).sum()
    }

    /// Index of the final exercise
    #[must_use]
    pub fn last_exercise_index(&self) -> usize {
        self.exercises.len().saturating_sub(1)
    }
}
