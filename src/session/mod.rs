// ABOUTME: Guided workout playback: state machine, timer sources, and async driver
// ABOUTME: Re-exports the session engine API used by hosts and presentation layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Async loop combining timer ticks and user intents
pub mod driver;

/// The session state machine
pub mod engine;

/// Phase, position, intents, and snapshots
pub mod state;

/// Countdown timer sources and handles
pub mod timer;

pub use driver::{SessionDriver, SessionOutcome};
pub use engine::{SessionOptions, WorkoutSession};
pub use state::{Phase, SessionIntent, SessionSnapshot, SessionState};
pub use timer::{IntervalTimerSource, ManualTimerSource, TimerHandle, TimerSource, TimerTick};
