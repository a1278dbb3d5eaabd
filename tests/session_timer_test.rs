// ABOUTME: Tests for countdown timer ownership, cancellation, and stale tick handling
// ABOUTME: Verifies at most one live handle and that dropped handles stop ticking
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use common::{pushups_then_plank, timed_then_reps, Harness};
use workout_player::session::{IntervalTimerSource, TimerHandle, TimerSource, TimerTick};

#[test]
fn test_timer_handle_cancels_once_on_drop() {
    let cancelled = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&cancelled);
    let handle = TimerHandle::new(3, move || {
        counter.fetch_add(1, Ordering::SeqCst);
    });

    assert_eq!(handle.generation(), 3);
    assert!(handle.owns(TimerTick { generation: 3 }));
    assert!(!handle.owns(TimerTick { generation: 2 }));
    assert_eq!(cancelled.load(Ordering::SeqCst), 0);

    drop(handle);
    assert_eq!(cancelled.load(Ordering::SeqCst), 1);
}

#[test]
fn test_at_most_one_live_handle_through_playthrough() {
    let mut h = Harness::start(timed_then_reps());
    assert_eq!(h.timer.live_handles(), 1);

    while !h.session.is_terminal() {
        if h.session.state().remaining_seconds().is_some() {
            h.session.tick();
        } else {
            h.session.complete_set();
        }
        assert!(h.timer.live_handles() <= 1);
        assert_eq!(
            h.timer.live_handles() == 1,
            h.session.state().is_counting()
        );
    }

    assert_eq!(h.timer.live_handles(), 0);
    assert_eq!(h.recorder.len(), 1);
}

#[test]
fn test_each_countdown_gets_a_fresh_handle() {
    let mut h = Harness::start(timed_then_reps());
    assert_eq!(h.timer.total_started(), 1);
    let first = h.session.timer_generation().unwrap();

    // Set -> rest -> set, each reseeding the countdown
    h.tick_n(20);
    let rest = h.session.timer_generation().unwrap();
    h.tick_n(10);
    let second = h.session.timer_generation().unwrap();

    assert!(first < rest && rest < second);
    assert_eq!(h.timer.total_started(), 3);
    assert_eq!(h.timer.live_handles(), 1);
}

#[test]
fn test_quit_releases_timer() {
    let mut h = Harness::start(timed_then_reps());
    h.tick_n(4);
    assert_eq!(h.timer.live_handles(), 1);

    h.session.quit();
    assert_eq!(h.timer.live_handles(), 0);
    assert_eq!(h.session.timer_generation(), None);
}

#[test]
fn test_dropping_session_releases_timer() {
    let h = Harness::start(timed_then_reps());
    let timer = h.timer.clone();
    assert_eq!(timer.live_handles(), 1);

    drop(h);
    assert_eq!(timer.live_handles(), 0);
}

#[test]
fn test_pause_releases_and_resume_restarts_timer() {
    let mut h = Harness::start(timed_then_reps());
    h.session.pause();
    assert_eq!(h.timer.live_handles(), 0);
    assert_eq!(h.timer.current_tick(), None);

    h.session.resume();
    assert_eq!(h.timer.live_handles(), 1);
    assert_eq!(h.timer.total_started(), 2);
}

#[test]
fn test_rep_sets_run_without_timer() {
    let h = Harness::start(pushups_then_plank());
    assert_eq!(h.timer.live_handles(), 0);
    assert_eq!(h.timer.total_started(), 0);
}

#[test]
fn test_stale_tick_is_discarded() {
    let mut h = Harness::start(timed_then_reps());
    let stale = h.timer.current_tick().unwrap();

    h.tick_n(20);
    assert_eq!(h.session.state().remaining_seconds(), Some(10));

    h.session.on_timer_tick(stale);
    assert_eq!(h.session.state().remaining_seconds(), Some(10));

    let live = h.timer.current_tick().unwrap();
    h.session.on_timer_tick(live);
    assert_eq!(h.session.state().remaining_seconds(), Some(9));
}

#[test]
fn test_tick_while_paused_is_discarded() {
    let mut h = Harness::start(timed_then_reps());
    let tick = h.timer.current_tick().unwrap();
    h.session.pause();

    h.session.on_timer_tick(tick);
    assert_eq!(h.session.state().remaining_seconds(), Some(20));
}

#[tokio::test(start_paused = true)]
async fn test_interval_source_ticks_until_handle_dropped() {
    let (mut source, mut ticks) = IntervalTimerSource::new(Duration::from_secs(1));
    assert_eq!(source.period(), Duration::from_secs(1));

    let handle = source.start(7);
    let first = ticks.recv().await.unwrap();
    assert_eq!(first, TimerTick { generation: 7 });
    let second = ticks.recv().await.unwrap();
    assert_eq!(second.generation, 7);

    drop(handle);
    tokio::time::sleep(Duration::from_secs(5)).await;
    assert!(ticks.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_interval_source_first_tick_after_one_period() {
    let (mut source, mut ticks) = IntervalTimerSource::new(Duration::from_millis(500));
    let _handle = source.start(0);

    tokio::time::sleep(Duration::from_millis(100)).await;
    assert!(ticks.try_recv().is_err());

    tokio::time::sleep(Duration::from_millis(450)).await;
    assert_eq!(ticks.try_recv().unwrap().generation, 0);
}
