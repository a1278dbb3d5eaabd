// ABOUTME: Shared fixtures for workout player integration tests
// ABOUTME: Sample plans, a manually driven session builder, and a failing progress recorder
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(dead_code)]
#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use workout_player::errors::{AppError, AppResult};
use workout_player::models::{CompletedWorkout, ExercisePlan, WorkoutPlan};
use workout_player::recorder::{InMemoryProgressRecorder, ProgressRecorder};
use workout_player::session::{ManualTimerSource, SessionOptions, WorkoutSession};

/// Push-ups 2x10 with 30 s rest, then a single 30 s plank
pub fn pushups_then_plank() -> WorkoutPlan {
    WorkoutPlan::new(
        "pushups-plank",
        "Push-ups and Plank",
        vec![
            ExercisePlan::reps("push-ups", "Push-ups", 2, 10, 30),
            ExercisePlan::timed("plank", "Plank", 1, 30, 0),
        ],
    )
}

/// Timed side plank 2x20 s with 10 s rest, then squats 3x12 without rest
pub fn timed_then_reps() -> WorkoutPlan {
    WorkoutPlan::new(
        "timed-reps",
        "Side Plank and Squats",
        vec![
            ExercisePlan::timed("side-plank", "Side Plank", 2, 20, 10),
            ExercisePlan::reps("squats", "Squats", 3, 12, 0),
        ],
    )
}

/// Session driven by a manual timer, plus handles to inspect the timer and recorder
pub struct Harness {
    pub session: WorkoutSession<ManualTimerSource>,
    pub timer: ManualTimerSource,
    pub recorder: InMemoryProgressRecorder,
}

impl Harness {
    pub fn start(plan: WorkoutPlan) -> Self {
        Self::start_with(plan, SessionOptions::default())
    }

    pub fn start_with(plan: WorkoutPlan, options: SessionOptions) -> Self {
        let timer = ManualTimerSource::new();
        let recorder = InMemoryProgressRecorder::new();
        let session = WorkoutSession::start(
            plan,
            timer.clone(),
            Arc::new(recorder.clone()),
            options,
        )
        .expect("plan should be valid");
        Self {
            session,
            timer,
            recorder,
        }
    }

    pub fn tick_n(&mut self, count: u32) {
        for _ in 0..count {
            self.session.tick();
        }
    }

    /// (exercise index, set index)
    pub fn position(&self) -> (usize, usize) {
        let state = self.session.state();
        (state.exercise_index(), state.set_index())
    }
}

/// Recorder that rejects every entry and counts the attempts
#[derive(Debug, Default)]
pub struct FailingRecorder {
    calls: AtomicUsize,
}

impl FailingRecorder {
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ProgressRecorder for FailingRecorder {
    fn record(&self, _completion: &CompletedWorkout) -> AppResult<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Err(AppError::external_service("history", "backend offline"))
    }
}
