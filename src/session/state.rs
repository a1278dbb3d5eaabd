// ABOUTME: Session phase, mutable playback position, user intents, and the observable snapshot
// ABOUTME: Pure data types owned by the session engine and read by the presentation layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use workout_core::models::SetTarget;

/// Mode of the session engine, independent of the pause overlay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// Performing the current set
    Active,
    /// Resting after the current set
    Resting,
    /// Every set of every exercise is done
    Complete,
    /// The user quit before the end
    Abandoned,
}

impl Phase {
    /// No further transitions are possible
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Complete | Self::Abandoned)
    }

    /// Phase can carry a countdown and be paused
    #[must_use]
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Active | Self::Resting)
    }
}

/// Playback position and countdown, mutated only by the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SessionState {
    pub(crate) exercise_index: usize,
    pub(crate) set_index: usize,
    pub(crate) phase: Phase,
    pub(crate) paused: bool,
    pub(crate) remaining_seconds: Option<u32>,
}

impl SessionState {
    pub(crate) const fn initial(countdown: Option<u32>) -> Self {
        Self {
            exercise_index: 0,
            set_index: 0,
            phase: Phase::Active,
            paused: false,
            remaining_seconds: countdown,
        }
    }

    /// Zero-based index of the current exercise
    #[must_use]
    pub const fn exercise_index(&self) -> usize {
        self.exercise_index
    }

    /// Zero-based index of the current set within the exercise
    #[must_use]
    pub const fn set_index(&self) -> usize {
        self.set_index
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Whether the countdown is frozen by a pause
    #[must_use]
    pub const fn is_paused(&self) -> bool {
        self.paused
    }

    /// Seconds left on the countdown, `None` when nothing counts down
    #[must_use]
    pub const fn remaining_seconds(&self) -> Option<u32> {
        self.remaining_seconds
    }

    /// A countdown exists and is running
    #[must_use]
    pub const fn is_counting(&self) -> bool {
        self.phase.is_playing() && !self.paused && self.remaining_seconds.is_some()
    }
}

/// User intent forwarded by the presentation layer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionIntent {
    /// Freeze the countdown
    Pause,
    /// Unfreeze the countdown
    Resume,
    /// Pause when running, resume when paused
    TogglePause,
    /// Signal that the current set is done
    CompleteSet,
    /// End the rest early
    SkipRest,
    /// Go back one set
    Previous,
    /// Go forward past the current set or rest
    Next,
    /// Open the exit confirmation, pausing the countdown
    RequestQuit,
    /// Close the exit confirmation and carry on
    CancelQuit,
    /// Accept the open exit confirmation; ignored when none is open
    ConfirmQuit,
    /// Abandon the session
    Quit,
}

/// Everything the presentation layer renders, recomputed after each command
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    /// Catalog id of the workout
    pub workout_id: String,
    /// Workout display name
    pub workout_name: String,
    /// Current phase
    pub phase: Phase,
    /// Pause overlay flag
    pub paused: bool,
    /// Exit confirmation is open
    pub quit_requested: bool,
    /// Zero-based exercise index
    pub exercise_index: usize,
    /// Number of exercises in the plan
    pub exercise_count: usize,
    /// Current exercise name
    pub exercise_name: String,
    /// Zero-based set index
    pub set_index: usize,
    /// Sets in the current exercise
    pub set_count: u32,
    /// Rep or duration target of the current set
    pub target: SetTarget,
    /// Rest after each set of the current exercise
    pub rest_seconds: u32,
    /// Countdown value, when something counts down
    pub remaining_seconds: Option<u32>,
    /// Countdown rendered as `m:ss`
    pub remaining_display: Option<String>,
    /// `100 * exercise_index / exercise_count`
    pub exercise_progress_percent: f64,
    /// `100 * (exercise_index + set_index / set_count) / exercise_count`
    pub overall_progress_percent: f64,
    /// Completing the current set ends the workout
    pub is_last_set_of_workout: bool,
    /// Complete or abandoned
    pub is_terminal: bool,
}

impl SessionSnapshot {
    /// Header label such as `Exercise 2/4`
    #[must_use]
    pub fn exercise_label(&self) -> String {
        format!("Exercise {}/{}", self.exercise_index + 1, self.exercise_count)
    }

    /// Set label such as `Set 1 of 3`
    #[must_use]
    pub fn set_label(&self) -> String {
        format!("Set {} of {}", self.set_index + 1, self.set_count)
    }
}
