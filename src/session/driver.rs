// ABOUTME: Async host loop feeding timer ticks and user intents into one session engine
// ABOUTME: Publishes a snapshot after every event and resolves to the session outcome
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Driver
//!
//! Timer ticks and user intents arrive on separate channels but are applied to
//! the engine one at a time from a single task, so no locking is needed and a
//! tick can never interleave with an intent. Ticks from a timer handle the
//! engine has already dropped are discarded by the engine itself.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tracing::debug;
use workout_core::errors::AppResult;
use workout_core::models::{CompletedWorkout, WorkoutPlan};

use super::engine::{SessionOptions, WorkoutSession};
use super::state::{Phase, SessionIntent, SessionSnapshot};
use super::timer::{IntervalTimerSource, TimerSource, TimerTick};
use crate::config::SessionConfig;
use crate::recorder::ProgressRecorder;

/// How a driven session ended
#[derive(Debug, Clone, PartialEq)]
pub enum SessionOutcome {
    /// Played through; the summary handed to the progress recorder
    Completed(CompletedWorkout),
    /// The user quit, or the intent channel closed
    Abandoned,
}

impl SessionOutcome {
    /// Whether the workout was played to the end
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Runs one session to a terminal phase
pub struct SessionDriver<T: TimerSource> {
    session: WorkoutSession<T>,
    ticks: mpsc::UnboundedReceiver<TimerTick>,
    snapshots: watch::Sender<SessionSnapshot>,
}

impl SessionDriver<IntervalTimerSource> {
    /// Start a tokio-timed session for `plan`
    ///
    /// Must be called from inside a tokio runtime: a timed first exercise
    /// starts its countdown immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if the plan fails validation
    pub fn start(
        plan: WorkoutPlan,
        config: &SessionConfig,
        recorder: Arc<dyn ProgressRecorder>,
    ) -> AppResult<(Self, watch::Receiver<SessionSnapshot>)> {
        let (source, ticks) = IntervalTimerSource::new(config.tick_interval);
        let session = WorkoutSession::start(plan, source, recorder, SessionOptions::from(config))?;
        Ok(Self::new(session, ticks))
    }
}

impl<T: TimerSource> SessionDriver<T> {
    /// Drive an existing session from a tick channel
    #[must_use]
    pub fn new(
        session: WorkoutSession<T>,
        ticks: mpsc::UnboundedReceiver<TimerTick>,
    ) -> (Self, watch::Receiver<SessionSnapshot>) {
        let (snapshots, receiver) = watch::channel(session.snapshot());
        (
            Self {
                session,
                ticks,
                snapshots,
            },
            receiver,
        )
    }

    /// Session being driven
    #[must_use]
    pub const fn session(&self) -> &WorkoutSession<T> {
        &self.session
    }

    /// Apply ticks and intents until the session is complete or abandoned
    ///
    /// A closed intent channel counts as quitting.
    pub async fn run(mut self, mut intents: mpsc::Receiver<SessionIntent>) -> SessionOutcome {
        while !self.session.is_terminal() {
            tokio::select! {
                Some(tick) = self.ticks.recv() => {
                    self.session.on_timer_tick(tick);
                }
                intent = intents.recv() => {
                    if let Some(intent) = intent {
                        debug!(?intent, "applying intent");
                        self.session.apply(intent);
                    } else {
                        debug!("intent channel closed, quitting session");
                        self.session.quit();
                    }
                }
            }
            self.publish();
        }

        match (self.session.phase(), self.session.completion()) {
            (Phase::Complete, Some(completion)) => SessionOutcome::Completed(completion.clone()),
            _ => SessionOutcome::Abandoned,
        }
    }

    fn publish(&self) {
        let snapshot = self.session.snapshot();
        self.snapshots.send_if_modified(|current| {
            if *current == snapshot {
                false
            } else {
                *current = snapshot;
                true
            }
        });
    }
}
