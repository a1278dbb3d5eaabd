// ABOUTME: Tests for progress recorders: in-memory, JSON lines history, and background adapter
// ABOUTME: Verifies persisted entries and that background recording never blocks the caller
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use chrono::Utc;
use uuid::Uuid;
use workout_player::errors::ErrorCode;
use workout_player::models::CompletedWorkout;
use workout_player::recorder::{
    AsyncProgressRecorder, BackgroundProgressRecorder, InMemoryProgressRecorder, JsonLinesHistory,
    ProgressRecorder, TracingProgressRecorder,
};

fn sample_completion(workout_id: &str) -> CompletedWorkout {
    CompletedWorkout {
        id: Uuid::new_v4(),
        workout_id: workout_id.to_owned(),
        user_id: Some("athlete-1".to_owned()),
        elapsed_seconds: 1_250,
        calories_estimate: 121.5,
        exercises_completed: 4,
        sets_completed: 12,
        completed_at: Utc::now(),
    }
}

#[test]
fn test_in_memory_recorder_keeps_history() {
    let recorder = InMemoryProgressRecorder::new();
    assert!(recorder.is_empty());

    let completion = sample_completion("full-body-strength");
    ProgressRecorder::record(&recorder, &completion).unwrap();

    assert_eq!(recorder.len(), 1);
    assert_eq!(recorder.history(), vec![completion]);
}

#[test]
fn test_in_memory_recorder_clones_share_history() {
    let recorder = InMemoryProgressRecorder::new();
    let shared = recorder.clone();
    ProgressRecorder::record(&shared, &sample_completion("a")).unwrap();
    assert_eq!(recorder.len(), 1);
}

#[test]
fn test_tracing_recorder_accepts_entries() {
    assert!(TracingProgressRecorder
        .record(&sample_completion("full-body-strength"))
        .is_ok());
}

#[test]
fn test_completion_minutes_round_to_nearest() {
    let completion = sample_completion("a");
    assert_eq!(completion.elapsed_minutes(), 21);
}

#[tokio::test]
async fn test_json_lines_history_appends() {
    let dir = tempfile::tempdir().unwrap();
    let history = JsonLinesHistory::new(dir.path().join("history.jsonl"));

    history.record(sample_completion("first")).await.unwrap();
    history.record(sample_completion("second")).await.unwrap();

    let contents = tokio::fs::read_to_string(history.path()).await.unwrap();
    let entries: Vec<CompletedWorkout> = contents
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0].workout_id, "first");
    assert_eq!(entries[1].workout_id, "second");
    assert_eq!(entries[1].user_id.as_deref(), Some("athlete-1"));
}

#[tokio::test]
async fn test_json_lines_history_reports_storage_errors() {
    let dir = tempfile::tempdir().unwrap();
    let history = JsonLinesHistory::new(dir.path().join("missing").join("history.jsonl"));

    let error = history.record(sample_completion("a")).await.unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[tokio::test]
async fn test_background_recorder_flush_waits_for_writes() {
    let recorder = BackgroundProgressRecorder::new(InMemoryProgressRecorder::new());
    ProgressRecorder::record(&recorder, &sample_completion("background")).unwrap();
    assert_eq!(recorder.pending_writes(), 1);

    assert_eq!(recorder.flush().await, 0);
    assert_eq!(recorder.pending_writes(), 0);
    assert_eq!(recorder.inner().len(), 1);
    assert_eq!(recorder.inner().history()[0].workout_id, "background");
}

#[tokio::test]
async fn test_background_history_lands_after_flush() {
    let dir = tempfile::tempdir().unwrap();
    let recorder = BackgroundProgressRecorder::new(JsonLinesHistory::new(
        dir.path().join("history.jsonl"),
    ));
    ProgressRecorder::record(&recorder, &sample_completion("first")).unwrap();
    ProgressRecorder::record(&recorder, &sample_completion("second")).unwrap();

    assert_eq!(recorder.flush().await, 0);
    let contents = tokio::fs::read_to_string(recorder.inner().path())
        .await
        .unwrap();
    assert_eq!(contents.lines().count(), 2);
}

#[tokio::test]
async fn test_background_flush_counts_failed_writes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing").join("history.jsonl");
    let recorder = BackgroundProgressRecorder::new(JsonLinesHistory::new(&path));

    // Failure stays in the background; the caller still gets Ok
    ProgressRecorder::record(&recorder, &sample_completion("lost")).unwrap();

    assert_eq!(recorder.flush().await, 1);
    assert!(!path.exists());
    assert_eq!(recorder.flush().await, 0);
}

#[test]
fn test_background_recorder_without_runtime_fails_softly() {
    let recorder = BackgroundProgressRecorder::new(InMemoryProgressRecorder::new());
    let error = ProgressRecorder::record(&recorder, &sample_completion("a")).unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(recorder.inner().is_empty());
}
