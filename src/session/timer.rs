// ABOUTME: Countdown timer sources and the single-owner handle that cancels them on drop
// ABOUTME: Provides a tokio interval source for hosts and a manual source for embedding and tests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Timer Sources
//!
//! The session engine never sleeps. A [`TimerSource`] produces a periodic
//! stream of [`TimerTick`]s and hands back a [`TimerHandle`]; the engine keeps
//! at most one handle alive and drops it on every transition that stops or
//! reseeds the countdown. Dropping the handle cancels the periodic source.
//!
//! Every handle carries a generation number. Ticks are stamped with the
//! generation of the handle that produced them, so a tick already in flight
//! when its handle is dropped is recognised as stale and discarded.

use std::fmt;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{self, Instant, MissedTickBehavior};
use tracing::trace;

/// One countdown second elapsed for the handle with this generation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerTick {
    /// Generation of the handle that produced this tick
    pub generation: u64,
}

/// Exclusive ownership of a running periodic source
///
/// Dropping the handle cancels the source. The handle is not `Clone`: exactly
/// one owner decides when the countdown stops.
pub struct TimerHandle {
    generation: u64,
    cancel: Option<Box<dyn FnOnce() + Send>>,
}

impl TimerHandle {
    /// Wrap a cancellation callback that runs when the handle is dropped
    pub fn new(generation: u64, cancel: impl FnOnce() + Send + 'static) -> Self {
        Self {
            generation,
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Generation stamped on ticks from this handle
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether a tick was produced by this handle
    #[must_use]
    pub const fn owns(&self, tick: TimerTick) -> bool {
        self.generation == tick.generation
    }
}

impl Drop for TimerHandle {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            trace!(generation = self.generation, "cancelling countdown timer");
            cancel();
        }
    }
}

impl fmt::Debug for TimerHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandle")
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}

/// Something that can start a periodic one-second countdown source
pub trait TimerSource {
    /// Start a periodic source whose ticks carry `generation`
    fn start(&mut self, generation: u64) -> TimerHandle;
}

impl<T: TimerSource + ?Sized> TimerSource for Box<T> {
    fn start(&mut self, generation: u64) -> TimerHandle {
        (**self).start(generation)
    }
}

/// Tokio-backed source: one spawned interval task per handle
///
/// Ticks are delivered over the unbounded channel returned by
/// [`IntervalTimerSource::new`]. `start` must be called from inside a tokio
/// runtime.
#[derive(Debug, Clone)]
pub struct IntervalTimerSource {
    period: Duration,
    sender: mpsc::UnboundedSender<TimerTick>,
}

impl IntervalTimerSource {
    /// Create a source ticking every `period`, plus the receiving end of its ticks
    #[must_use]
    pub fn new(period: Duration) -> (Self, mpsc::UnboundedReceiver<TimerTick>) {
        let (sender, receiver) = mpsc::unbounded_channel();
        (Self { period, sender }, receiver)
    }

    /// Tick period
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }
}

impl TimerSource for IntervalTimerSource {
    fn start(&mut self, generation: u64) -> TimerHandle {
        let sender = self.sender.clone();
        let period = self.period;

        let task = tokio::spawn(async move {
            // First tick one full period after start, not immediately
            let mut interval = time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                if sender.send(TimerTick { generation }).is_err() {
                    break;
                }
            }
        });

        TimerHandle::new(generation, move || task.abort())
    }
}

#[derive(Debug, Default)]
struct ManualTimerState {
    live: usize,
    started: usize,
    active_generation: Option<u64>,
}

/// Host-driven source that only records which handle is live
///
/// Used when the host already owns a periodic callback (a UI frame loop, a
/// platform timer) and for tests. Clones share the same bookkeeping, so a
/// caller can keep one clone to inspect while the engine owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualTimerSource {
    state: Arc<Mutex<ManualTimerState>>,
}

impl ManualTimerSource {
    /// Create a source with no live handles
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of handles currently alive (never more than one under the engine)
    #[must_use]
    pub fn live_handles(&self) -> usize {
        self.lock().live
    }

    /// Number of handles started since creation
    #[must_use]
    pub fn total_started(&self) -> usize {
        self.lock().started
    }

    /// Tick for the live handle, if any
    #[must_use]
    pub fn current_tick(&self) -> Option<TimerTick> {
        self.lock()
            .active_generation
            .map(|generation| TimerTick { generation })
    }

    fn lock(&self) -> MutexGuard<'_, ManualTimerState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl TimerSource for ManualTimerSource {
    fn start(&mut self, generation: u64) -> TimerHandle {
        {
            let mut state = self.lock();
            state.live += 1;
            state.started += 1;
            state.active_generation = Some(generation);
        }

        let shared = Arc::clone(&self.state);
        TimerHandle::new(generation, move || {
            let mut state = shared.lock().unwrap_or_else(PoisonError::into_inner);
            state.live = state.live.saturating_sub(1);
            if state.active_generation == Some(generation) {
                state.active_generation = None;
            }
        })
    }
}
