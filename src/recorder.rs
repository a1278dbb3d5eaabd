// ABOUTME: Progress recorder collaborators notified once when a workout completes
// ABOUTME: In-memory, tracing, and fire-and-forget background recorders plus a JSON lines history
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Progress Recording
//!
//! The session engine calls [`ProgressRecorder::record`] exactly once, when it
//! enters `Complete`. The call is best-effort: an error is logged by the
//! engine and never changes the session outcome. Recorders that talk to slow
//! backends implement [`AsyncProgressRecorder`] and are wrapped in a
//! [`BackgroundProgressRecorder`], which spawns the write and returns at once;
//! its `flush` waits for those writes before shutdown.

use std::mem;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use async_trait::async_trait;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::runtime::Handle;
use tokio::task::{JoinError, JoinSet};
use tracing::{info, warn};
use workout_core::errors::{AppError, AppResult};
use workout_core::models::CompletedWorkout;

/// Receives the summary of a completed workout
pub trait ProgressRecorder: Send + Sync {
    /// Record a completed workout
    ///
    /// # Errors
    ///
    /// Returns an error if the recorder could not accept the entry. The
    /// engine logs it and carries on.
    fn record(&self, completion: &CompletedWorkout) -> AppResult<()>;
}

/// Recorder backed by an I/O-bound service
#[async_trait]
pub trait AsyncProgressRecorder: Send + Sync + 'static {
    /// Persist a completed workout
    ///
    /// # Errors
    ///
    /// Returns an error if the backend rejects or cannot store the entry
    async fn record(&self, completion: CompletedWorkout) -> AppResult<()>;
}

/// Keeps every recorded workout in memory for later inspection
#[derive(Debug, Clone, Default)]
pub struct InMemoryProgressRecorder {
    history: Arc<Mutex<Vec<CompletedWorkout>>>,
}

impl InMemoryProgressRecorder {
    /// Create an empty recorder
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far
    #[must_use]
    pub fn history(&self) -> Vec<CompletedWorkout> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Number of recorded workouts
    #[must_use]
    pub fn len(&self) -> usize {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Nothing recorded yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl ProgressRecorder for InMemoryProgressRecorder {
    fn record(&self, completion: &CompletedWorkout) -> AppResult<()> {
        self.history
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(completion.clone());
        Ok(())
    }
}

#[async_trait]
impl AsyncProgressRecorder for InMemoryProgressRecorder {
    async fn record(&self, completion: CompletedWorkout) -> AppResult<()> {
        ProgressRecorder::record(self, &completion)
    }
}

/// Emits one structured log event per completed workout
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingProgressRecorder;

impl ProgressRecorder for TracingProgressRecorder {
    fn record(&self, completion: &CompletedWorkout) -> AppResult<()> {
        info!(
            record_id = %completion.id,
            workout_id = %completion.workout_id,
            user_id = completion.user_id.as_deref().unwrap_or("anonymous"),
            elapsed_seconds = completion.elapsed_seconds,
            calories = completion.calories_estimate,
            sets = completion.sets_completed,
            "Workout completed"
        );
        Ok(())
    }
}

/// Appends each completed workout as one JSON line to a local history file
#[derive(Debug, Clone)]
pub struct JsonLinesHistory {
    path: PathBuf,
}

impl JsonLinesHistory {
    /// History stored at `path`, created on first write
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File the history is written to
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl AsyncProgressRecorder for JsonLinesHistory {
    async fn record(&self, completion: CompletedWorkout) -> AppResult<()> {
        let mut line = serde_json::to_vec(&completion)?;
        line.push(b'\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(&line).await?;
        file.flush().await?;
        Ok(())
    }
}

/// Fire-and-forget adapter: spawns the async write and returns immediately
///
/// Must be used from inside a tokio runtime. Spawned writes are tracked so a
/// caller about to shut the runtime down can [`flush`](Self::flush) them.
/// Failures are logged; they cannot reach the session engine.
#[derive(Debug)]
pub struct BackgroundProgressRecorder<R> {
    inner: Arc<R>,
    pending: Mutex<JoinSet<PendingWrite>>,
}

/// Outcome of one spawned write, tagged with the workout it belongs to
type PendingWrite = (String, AppResult<()>);

impl<R: AsyncProgressRecorder> BackgroundProgressRecorder<R> {
    /// Wrap an async recorder
    pub fn new(inner: R) -> Self {
        Self {
            inner: Arc::new(inner),
            pending: Mutex::new(JoinSet::new()),
        }
    }

    /// The wrapped recorder
    #[must_use]
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Number of spawned writes not yet collected by [`flush`](Self::flush)
    #[must_use]
    pub fn pending_writes(&self) -> usize {
        self.lock_pending().len()
    }

    /// Wait for every spawned write to finish
    ///
    /// Each failed write is logged. Returns how many of them failed.
    pub async fn flush(&self) -> usize {
        let mut pending = mem::take(&mut *self.lock_pending());
        let mut failed = 0;
        while let Some(joined) = pending.join_next().await {
            if !log_write_outcome(joined) {
                failed += 1;
            }
        }
        if failed > 0 {
            warn!(failed, "Some background progress writes failed");
        }
        failed
    }

    fn lock_pending(&self) -> MutexGuard<'_, JoinSet<PendingWrite>> {
        self.pending.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Log a finished write; `true` when it succeeded
fn log_write_outcome(joined: Result<PendingWrite, JoinError>) -> bool {
    match joined {
        Ok((_, Ok(()))) => true,
        Ok((workout_id, Err(error))) => {
            warn!(workout_id = %workout_id, error = %error, "Background progress recording failed");
            false
        }
        Err(error) => {
            warn!(error = %error, "Background progress task did not finish");
            false
        }
    }
}

impl<R: AsyncProgressRecorder> ProgressRecorder for BackgroundProgressRecorder<R> {
    fn record(&self, completion: &CompletedWorkout) -> AppResult<()> {
        let handle = Handle::try_current().map_err(|e| {
            AppError::external_service("progress recorder", "no async runtime available")
                .with_source(e)
        })?;

        let inner = Arc::clone(&self.inner);
        let completion = completion.clone();
        let mut pending = self.lock_pending();

        // Reap writes that already finished so the set does not grow unbounded
        while let Some(joined) = pending.try_join_next() {
            log_write_outcome(joined);
        }

        pending.spawn_on(
            async move {
                let workout_id = completion.workout_id.clone();
                let outcome = inner.record(completion).await;
                (workout_id, outcome)
            },
            &handle,
        );
        drop(pending);
        Ok(())
    }
}

impl<R> Drop for BackgroundProgressRecorder<R> {
    fn drop(&mut self) {
        // Writes nobody flushed keep running instead of being aborted
        self.pending
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner)
            .detach_all();
    }
}
