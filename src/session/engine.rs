// ABOUTME: Guided workout session engine driving one exercise set at a time
// ABOUTME: Owns the playback state machine, the countdown timer handle, and completion reporting
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Session Engine
//!
//! The engine steps through a [`WorkoutPlan`] set by set:
//!
//! ```text
//!            complete_set (more sets)            complete_rest / skip_rest
//!  Active(i,s) ─────────────────────► Resting(i,s) ─────────────────────► Active(i,s+1)
//!      │  complete_set (last set, more exercises)
//!      ├────────────────────────────────────────────────────────────────► Active(i+1,0)
//!      │  complete_set (last set of last exercise)
//!      └────────────────────────────────────────────────────────────────► Complete
//! ```
//!
//! Pause is an overlay flag on `Active`/`Resting`; it freezes the countdown
//! without touching the position. Timed sets and rests count down through
//! [`WorkoutSession::tick`]; rep-based sets wait for an explicit
//! [`WorkoutSession::complete_set`] (or [`WorkoutSession::next`]).
//!
//! The engine owns at most one [`TimerHandle`]. Any transition that stops or
//! reseeds the countdown drops the old handle before starting a new one, and
//! reaching a terminal phase drops it for good.

use std::fmt;
use std::sync::Arc;

use chrono::{DateTime, Duration as ChronoDuration, Utc};
use tracing::{debug, info, trace, warn};
use uuid::Uuid;
use workout_core::errors::AppResult;
use workout_core::formatters::format_clock;
use workout_core::models::{CompletedWorkout, ExercisePlan, WorkoutPlan};

use super::state::{Phase, SessionIntent, SessionSnapshot, SessionState};
use super::timer::{TimerHandle, TimerSource, TimerTick};
use crate::config::SessionConfig;
use crate::intelligence::CalorieEstimator;
use crate::recorder::ProgressRecorder;

/// Per-session settings that do not come from the plan
#[derive(Debug, Clone, Default)]
pub struct SessionOptions {
    /// User the completed workout is attributed to
    pub user_id: Option<String>,
    /// Calorie estimator for the completion summary
    pub calories: CalorieEstimator,
}

impl From<&SessionConfig> for SessionOptions {
    fn from(config: &SessionConfig) -> Self {
        Self {
            user_id: config.user_id.clone(),
            calories: config.calorie_estimator(),
        }
    }
}

/// Wall-clock bookkeeping for the elapsed-duration estimate
#[derive(Debug, Clone)]
struct SessionClock {
    started_at: DateTime<Utc>,
    paused_since: Option<DateTime<Utc>>,
    paused_total: ChronoDuration,
}

impl SessionClock {
    fn start(now: DateTime<Utc>) -> Self {
        Self {
            started_at: now,
            paused_since: None,
            paused_total: ChronoDuration::zero(),
        }
    }

    fn pause(&mut self, now: DateTime<Utc>) {
        if self.paused_since.is_none() {
            self.paused_since = Some(now);
        }
    }

    fn resume(&mut self, now: DateTime<Utc>) {
        if let Some(since) = self.paused_since.take() {
            self.paused_total += now - since;
        }
    }

    fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        let current_pause = self
            .paused_since
            .map_or_else(ChronoDuration::zero, |since| now - since);
        let active = now - self.started_at - self.paused_total - current_pause;
        u64::try_from(active.num_seconds()).unwrap_or(0)
    }
}

/// One guided playback of a workout plan
///
/// Commands are synchronous and return nothing; read the updated state with
/// [`WorkoutSession::state`] or [`WorkoutSession::snapshot`] afterwards.
/// Commands that do not apply to the current phase are ignored.
pub struct WorkoutSession<T: TimerSource> {
    plan: WorkoutPlan,
    state: SessionState,
    timer_source: T,
    timer: Option<TimerHandle>,
    next_generation: u64,
    recorder: Arc<dyn ProgressRecorder>,
    options: SessionOptions,
    clock: SessionClock,
    quit_requested: bool,
    paused_for_quit: bool,
    completion: Option<CompletedWorkout>,
}

impl<T: TimerSource> WorkoutSession<T> {
    /// Start a session at the first set of the first exercise
    ///
    /// If the first exercise is timed its countdown starts immediately.
    ///
    /// # Errors
    ///
    /// Returns `INVALID_INPUT` (or `MISSING_REQUIRED_FIELD`) when the plan
    /// fails [`WorkoutPlan::validate`].
    pub fn start(
        plan: WorkoutPlan,
        timer_source: T,
        recorder: Arc<dyn ProgressRecorder>,
        options: SessionOptions,
    ) -> AppResult<Self> {
        plan.validate()?;

        let countdown = plan.exercises[0].target.countdown_seconds();
        let mut session = Self {
            state: SessionState::initial(countdown),
            plan,
            timer_source,
            timer: None,
            next_generation: 0,
            recorder,
            options,
            clock: SessionClock::start(Utc::now()),
            quit_requested: false,
            paused_for_quit: false,
            completion: None,
        };

        info!(
            workout_id = %session.plan.id,
            exercises = session.plan.exercises.len(),
            sets = session.plan.total_sets(),
            "Workout session started"
        );
        session.restart_timer();
        Ok(session)
    }

    // ------------------------------------------------------------------
    // Commands
    // ------------------------------------------------------------------

    /// Advance the countdown by one second
    ///
    /// No-op while paused, in a terminal phase, or during a rep-based set.
    /// When the countdown reaches zero the set (or rest) completes in the
    /// same call.
    pub fn tick(&mut self) {
        if !self.state.is_counting() {
            return;
        }
        let Some(remaining) = self.state.remaining_seconds else {
            return;
        };

        let remaining = remaining.saturating_sub(1);
        self.state.remaining_seconds = Some(remaining);
        trace!(remaining, phase = ?self.state.phase, "tick");

        if remaining == 0 {
            match self.state.phase {
                Phase::Active => self.complete_set(),
                Phase::Resting => self.complete_rest(),
                Phase::Complete | Phase::Abandoned => {}
            }
        }
    }

    /// Apply a tick from a timer source, discarding ticks from dropped handles
    pub fn on_timer_tick(&mut self, tick: TimerTick) {
        if self.timer.as_ref().is_some_and(|handle| handle.owns(tick)) {
            self.tick();
        } else {
            trace!(generation = tick.generation, "discarding stale timer tick");
        }
    }

    /// The current set's work is done
    ///
    /// Valid only in `Active`. Moves to a rest if the exercise has more sets,
    /// otherwise to the next exercise, otherwise to `Complete`.
    pub fn complete_set(&mut self) {
        if self.state.phase != Phase::Active {
            return;
        }

        let exercise = self.current_exercise();
        if self.state.set_index < exercise.last_set_index() {
            // A zero-second rest still runs for one tick
            let rest = exercise.rest_seconds;
            self.enter_resting(rest);
        } else if self.state.exercise_index < self.plan.last_exercise_index() {
            self.enter_active(self.state.exercise_index + 1, 0);
        } else {
            self.enter_complete();
        }
    }

    /// The rest after the current set is over
    ///
    /// Valid only in `Resting`.
    pub fn complete_rest(&mut self) {
        if self.state.phase != Phase::Resting {
            return;
        }
        self.advance_to_next_set();
    }

    /// End the current rest now, whatever is left on the countdown
    pub fn skip_rest(&mut self) {
        if self.state.phase != Phase::Resting {
            return;
        }
        debug!(
            remaining = ?self.state.remaining_seconds,
            "rest skipped"
        );
        self.complete_rest();
    }

    /// Freeze the countdown; idempotent
    pub fn pause(&mut self) {
        if !self.state.phase.is_playing() || self.state.paused {
            return;
        }
        self.state.paused = true;
        self.clock.pause(Utc::now());
        self.stop_timer();
        debug!(remaining = ?self.state.remaining_seconds, "session paused");
    }

    /// Unfreeze the countdown; idempotent
    pub fn resume(&mut self) {
        if !self.state.phase.is_playing() || !self.state.paused {
            return;
        }
        self.state.paused = false;
        self.paused_for_quit = false;
        self.clock.resume(Utc::now());
        self.restart_timer();
        debug!(remaining = ?self.state.remaining_seconds, "session resumed");
    }

    /// Pause when running, resume when paused
    pub fn toggle_pause(&mut self) {
        if self.state.paused {
            self.resume();
        } else {
            self.pause();
        }
    }

    /// Go back one set, restarting it from its full duration
    ///
    /// From the first set of an exercise this lands on the last set of the
    /// previous exercise. No-op at the very first set and in terminal phases.
    pub fn previous(&mut self) {
        if self.state.phase.is_terminal() {
            return;
        }

        let (exercise_index, set_index) = if self.state.set_index > 0 {
            (self.state.exercise_index, self.state.set_index - 1)
        } else if self.state.exercise_index > 0 {
            let prior = self.state.exercise_index - 1;
            (prior, self.plan.exercises[prior].last_set_index())
        } else {
            return;
        };

        debug!(exercise_index, set_index, "stepping back one set");
        self.enter_active(exercise_index, set_index);
    }

    /// Manual forward skip: completes the set when active, skips the rest when resting
    pub fn next(&mut self) {
        match self.state.phase {
            Phase::Active => self.complete_set(),
            Phase::Resting => self.skip_rest(),
            Phase::Complete | Phase::Abandoned => {}
        }
    }

    /// Open the exit confirmation, pausing the countdown while it is shown
    pub fn request_quit(&mut self) {
        if self.state.phase.is_terminal() || self.quit_requested {
            return;
        }
        self.quit_requested = true;
        if !self.state.paused {
            self.pause();
            self.paused_for_quit = true;
        }
    }

    /// Close the exit confirmation; resumes only a pause the request caused
    pub fn cancel_quit(&mut self) {
        if !self.quit_requested {
            return;
        }
        self.quit_requested = false;
        if self.paused_for_quit {
            self.resume();
        }
    }

    /// Abandon the session without reporting progress
    ///
    /// The timer is released before this returns. Ignored once complete.
    pub fn quit(&mut self) {
        if self.state.phase.is_terminal() {
            return;
        }
        self.stop_timer();
        self.state.phase = Phase::Abandoned;
        self.state.paused = false;
        self.state.remaining_seconds = None;
        self.quit_requested = false;
        self.paused_for_quit = false;
        info!(
            workout_id = %self.plan.id,
            exercise_index = self.state.exercise_index,
            set_index = self.state.set_index,
            "Workout session abandoned"
        );
    }

    /// Abandon the session only if an exit confirmation is open
    pub fn confirm_quit(&mut self) {
        if self.quit_requested {
            self.quit();
        } else {
            debug!("quit confirmation without a pending request ignored");
        }
    }

    /// Dispatch a user intent
    pub fn apply(&mut self, intent: SessionIntent) {
        match intent {
            SessionIntent::Pause => self.pause(),
            SessionIntent::Resume => self.resume(),
            SessionIntent::TogglePause => self.toggle_pause(),
            SessionIntent::CompleteSet => self.complete_set(),
            SessionIntent::SkipRest => self.skip_rest(),
            SessionIntent::Previous => self.previous(),
            SessionIntent::Next => self.next(),
            SessionIntent::RequestQuit => self.request_quit(),
            SessionIntent::CancelQuit => self.cancel_quit(),
            SessionIntent::ConfirmQuit => self.confirm_quit(),
            SessionIntent::Quit => self.quit(),
        }
    }

    // ------------------------------------------------------------------
    // Observable state
    // ------------------------------------------------------------------

    /// Current position, phase and countdown
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Plan being played
    #[must_use]
    pub const fn plan(&self) -> &WorkoutPlan {
        &self.plan
    }

    /// Current phase
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.state.phase
    }

    /// Complete or abandoned
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.state.phase.is_terminal()
    }

    /// Exit confirmation is open
    #[must_use]
    pub const fn is_quit_requested(&self) -> bool {
        self.quit_requested
    }

    /// Exercise at the current position
    #[must_use]
    pub fn current_exercise(&self) -> &ExercisePlan {
        &self.plan.exercises[self.state.exercise_index]
    }

    /// Summary reported on completion, once `Complete`
    #[must_use]
    pub const fn completion(&self) -> Option<&CompletedWorkout> {
        self.completion.as_ref()
    }

    /// Generation of the live timer handle, if a countdown is running
    #[must_use]
    pub fn timer_generation(&self) -> Option<u64> {
        self.timer.as_ref().map(TimerHandle::generation)
    }

    /// `100 * exercise_index / exercise_count`, 100 once complete
    #[must_use]
    pub fn exercise_progress_percent(&self) -> f64 {
        if self.state.phase == Phase::Complete {
            return 100.0;
        }
        100.0 * self.state.exercise_index as f64 / self.plan.exercises.len() as f64
    }

    /// `100 * (exercise_index + set_index / set_count) / exercise_count`, 100 once complete
    #[must_use]
    pub fn overall_progress_percent(&self) -> f64 {
        if self.state.phase == Phase::Complete {
            return 100.0;
        }
        let exercise = self.current_exercise();
        let within = self.state.set_index as f64 / f64::from(exercise.set_count);
        100.0 * (self.state.exercise_index as f64 + within) / self.plan.exercises.len() as f64
    }

    /// Completing the current set ends the workout
    #[must_use]
    pub fn is_last_set_of_workout(&self) -> bool {
        self.state.exercise_index == self.plan.last_exercise_index()
            && self.state.set_index == self.current_exercise().last_set_index()
    }

    /// Everything the presentation layer renders
    #[must_use]
    pub fn snapshot(&self) -> SessionSnapshot {
        let exercise = self.current_exercise();
        SessionSnapshot {
            workout_id: self.plan.id.clone(),
            workout_name: self.plan.name.clone(),
            phase: self.state.phase,
            paused: self.state.paused,
            quit_requested: self.quit_requested,
            exercise_index: self.state.exercise_index,
            exercise_count: self.plan.exercises.len(),
            exercise_name: exercise.name.clone(),
            set_index: self.state.set_index,
            set_count: exercise.set_count,
            target: exercise.target,
            rest_seconds: exercise.rest_seconds,
            remaining_seconds: self.state.remaining_seconds,
            remaining_display: self.state.remaining_seconds.map(format_clock),
            exercise_progress_percent: self.exercise_progress_percent(),
            overall_progress_percent: self.overall_progress_percent(),
            is_last_set_of_workout: self.is_last_set_of_workout(),
            is_terminal: self.is_terminal(),
        }
    }

    // ------------------------------------------------------------------
    // Transitions
    // ------------------------------------------------------------------

    fn advance_to_next_set(&mut self) {
        if self.state.set_index < self.current_exercise().last_set_index() {
            self.enter_active(self.state.exercise_index, self.state.set_index + 1);
        } else if self.state.exercise_index < self.plan.last_exercise_index() {
            self.enter_active(self.state.exercise_index + 1, 0);
        } else {
            self.enter_complete();
        }
    }

    fn enter_active(&mut self, exercise_index: usize, set_index: usize) {
        self.state.exercise_index = exercise_index;
        self.state.set_index = set_index;
        self.state.phase = Phase::Active;
        self.state.remaining_seconds = self.current_exercise().target.countdown_seconds();
        debug!(
            exercise_index,
            set_index,
            exercise = %self.current_exercise().name,
            countdown = ?self.state.remaining_seconds,
            "set started"
        );
        self.restart_timer();
    }

    fn enter_resting(&mut self, rest_seconds: u32) {
        self.state.phase = Phase::Resting;
        self.state.remaining_seconds = Some(rest_seconds);
        debug!(
            exercise_index = self.state.exercise_index,
            set_index = self.state.set_index,
            rest_seconds,
            "rest started"
        );
        self.restart_timer();
    }

    fn enter_complete(&mut self) {
        self.stop_timer();
        let now = Utc::now();
        self.clock.resume(now);

        self.state.phase = Phase::Complete;
        self.state.paused = false;
        self.state.remaining_seconds = None;
        self.quit_requested = false;
        self.paused_for_quit = false;

        let elapsed_seconds = self.clock.elapsed_seconds(now);
        let completion = CompletedWorkout {
            id: Uuid::new_v4(),
            workout_id: self.plan.id.clone(),
            user_id: self.options.user_id.clone(),
            elapsed_seconds,
            calories_estimate: self
                .options
                .calories
                .estimate(self.plan.workout_type, elapsed_seconds),
            exercises_completed: u32::try_from(self.plan.exercises.len()).unwrap_or(u32::MAX),
            sets_completed: self.plan.total_sets(),
            completed_at: now,
        };

        info!(
            workout_id = %completion.workout_id,
            elapsed_seconds,
            calories = completion.calories_estimate,
            "Workout session complete"
        );

        if let Err(error) = self.recorder.record(&completion) {
            warn!(
                workout_id = %completion.workout_id,
                error = %error,
                "Failed to record completed workout"
            );
        }
        self.completion = Some(completion);
    }

    // ------------------------------------------------------------------
    // Timer ownership
    // ------------------------------------------------------------------

    /// Drop any live handle, then start a fresh one if the state counts down
    fn restart_timer(&mut self) {
        self.stop_timer();
        if self.state.is_counting() {
            let generation = self.next_generation;
            self.next_generation += 1;
            self.timer = Some(self.timer_source.start(generation));
        }
    }

    fn stop_timer(&mut self) {
        // Dropping the handle cancels the periodic source
        self.timer = None;
    }
}

impl<T: TimerSource> fmt::Debug for WorkoutSession<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkoutSession")
            .field("workout_id", &self.plan.id)
            .field("state", &self.state)
            .field("timer", &self.timer)
            .field("quit_requested", &self.quit_requested)
            .finish_non_exhaustive()
    }
}
