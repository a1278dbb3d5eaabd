// ABOUTME: Terminal front end for the guided workout player
// ABOUTME: Loads a plan, drives a session from stdin commands, and prints each snapshot
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Play the built-in full body workout
//! workout-player
//!
//! # List plans in a catalog file
//! workout-player --catalog plans.json --list
//!
//! # Play a plan from a catalog file, appending the result to a history file
//! workout-player --catalog plans.json --workout morning-hiit --history history.jsonl
//! ```
//!
//! While playing, type a command letter and press enter:
//! `n` next, `s` skip rest, `b` previous set, `p` pause/resume,
//! `q` quit (then `y` to confirm or `c` to carry on).

use std::io::{self, BufRead};
use std::path::PathBuf;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tokio::sync::{mpsc, watch};
use tracing::{debug, info};
use workout_core::formatters::{format_clock, format_percent};
use workout_player::catalog::{InMemoryWorkoutCatalog, WorkoutCatalog, BUILTIN_WORKOUT_ID};
use workout_player::config::SessionConfig;
use workout_player::intelligence::{planned_calories, planned_duration_seconds};
use workout_player::logging::LoggingConfig;
use workout_player::models::SetTarget;
use workout_player::recorder::{
    BackgroundProgressRecorder, JsonLinesHistory, ProgressRecorder, TracingProgressRecorder,
};
use workout_player::session::{Phase, SessionDriver, SessionIntent, SessionOutcome, SessionSnapshot};

/// Capacity of the stdin intent channel
const INTENT_BUFFER: usize = 16;

#[derive(Parser)]
#[command(
    name = "workout-player",
    about = "Guided workout player",
    long_about = "Plays a structured workout one set at a time with countdowns, rests, pause and skip."
)]
struct Cli {
    /// Workout id to play
    #[arg(long, short = 'w', default_value = BUILTIN_WORKOUT_ID)]
    workout: String,

    /// JSON catalog file with additional workouts
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// List available workouts and exit
    #[arg(long)]
    list: bool,

    /// Body weight in kilograms for the calorie estimate
    #[arg(long)]
    body_weight: Option<f64>,

    /// Milliseconds per countdown second
    #[arg(long)]
    tick_ms: Option<u64>,

    /// User id attached to the completed workout
    #[arg(long)]
    user_id: Option<String>,

    /// Append completed workouts to this JSON lines file
    #[arg(long)]
    history: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let logging = LoggingConfig::from_env();
    let logging = if cli.verbose { logging.verbose() } else { logging };
    logging.init()?;

    let config = session_config(&cli)?;
    let catalog = load_catalog(&cli)?;

    if cli.list {
        print_catalog(&catalog, &config);
        return Ok(());
    }

    let plan = catalog.get(&cli.workout)?;
    let history = cli.history.as_ref().map(|path| {
        info!(path = %path.display(), "Recording completed workouts to history file");
        Arc::new(BackgroundProgressRecorder::new(JsonLinesHistory::new(path)))
    });
    let recorder: Arc<dyn ProgressRecorder> = match &history {
        Some(history) => history.clone(),
        None => Arc::new(TracingProgressRecorder),
    };

    let (driver, snapshots) = SessionDriver::start(plan, &config, recorder)?;
    let (intents_tx, intents) = mpsc::channel(INTENT_BUFFER);

    println!("Commands: n next, s skip rest, b previous, p pause/resume, q quit");
    spawn_command_reader(intents_tx);
    let printer = tokio::spawn(print_snapshots(snapshots));

    let outcome = driver.run(intents).await;
    printer.await?;

    match outcome {
        SessionOutcome::Completed(summary) => {
            println!(
                "Workout complete: {} sets in {} ({} kcal)",
                summary.sets_completed,
                format_clock(u32::try_from(summary.elapsed_seconds).unwrap_or(u32::MAX)),
                summary.calories_estimate
            );
        }
        SessionOutcome::Abandoned => println!("Workout abandoned"),
    }

    if let Some(history) = history {
        // The history write must land before the runtime shuts down
        if history.flush().await > 0 {
            eprintln!("Could not append to {}", history.inner().path().display());
        }
    }
    Ok(())
}

fn session_config(cli: &Cli) -> Result<SessionConfig> {
    let mut config = SessionConfig::from_env()?;
    if let Some(tick_ms) = cli.tick_ms {
        config = config.with_tick_interval(Duration::from_millis(tick_ms));
    }
    if let Some(weight) = cli.body_weight {
        config = config.with_body_weight_kg(weight);
    }
    if let Some(user_id) = &cli.user_id {
        config = config.with_user_id(user_id.clone());
    }
    config.validate()?;
    Ok(config)
}

fn load_catalog(cli: &Cli) -> Result<InMemoryWorkoutCatalog> {
    let mut catalog = InMemoryWorkoutCatalog::with_builtin();
    if let Some(path) = &cli.catalog {
        let extra = InMemoryWorkoutCatalog::from_json_file(path)?;
        for plan in extra.list() {
            catalog.insert(plan)?;
        }
    }
    Ok(catalog)
}

fn print_catalog(catalog: &InMemoryWorkoutCatalog, config: &SessionConfig) {
    let estimator = config.calorie_estimator();
    for plan in catalog.list() {
        let minutes = planned_duration_seconds(&plan).div_ceil(60);
        println!(
            "{:<24} {:<28} {:?}/{:?}  {} exercises, {} sets, ~{} min, ~{} kcal",
            plan.id,
            plan.name,
            plan.workout_type,
            plan.difficulty,
            plan.exercises.len(),
            plan.total_sets(),
            minutes,
            planned_calories(&plan, &estimator)
        );
    }
}

/// Map one line of user input to an intent
fn parse_command(line: &str) -> Option<SessionIntent> {
    match line.trim().to_lowercase().as_str() {
        "n" | "next" | "done" => Some(SessionIntent::Next),
        "s" | "skip" => Some(SessionIntent::SkipRest),
        "b" | "back" | "previous" => Some(SessionIntent::Previous),
        "p" | "pause" | "resume" => Some(SessionIntent::TogglePause),
        "q" | "quit" => Some(SessionIntent::RequestQuit),
        "y" | "yes" => Some(SessionIntent::ConfirmQuit),
        "c" | "continue" => Some(SessionIntent::CancelQuit),
        _ => None,
    }
}

/// Read stdin on a plain thread so a pending read never holds up runtime shutdown
fn spawn_command_reader(intents: mpsc::Sender<SessionIntent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Some(intent) => {
                    if intents.blocking_send(intent).is_err() {
                        break;
                    }
                }
                None => debug!(input = %line, "unrecognised command"),
            }
        }
    });
}

async fn print_snapshots(mut snapshots: watch::Receiver<SessionSnapshot>) {
    print_snapshot(&snapshots.borrow_and_update().clone());
    while snapshots.changed().await.is_ok() {
        let snapshot = snapshots.borrow_and_update().clone();
        print_snapshot(&snapshot);
        if snapshot.is_terminal {
            break;
        }
    }
}

fn print_snapshot(snapshot: &SessionSnapshot) {
    let countdown = snapshot.remaining_display.as_deref().unwrap_or("-:--");
    let status = match snapshot.phase {
        Phase::Complete | Phase::Abandoned => return,
        _ if snapshot.quit_requested => "QUIT? (y/c)",
        _ if snapshot.paused => "PAUSED",
        Phase::Resting => "REST",
        Phase::Active => "GO",
    };
    let target = match snapshot.target {
        SetTarget::Reps(reps) => format!("{reps} reps"),
        SetTarget::DurationSeconds(seconds) => format_clock(seconds),
    };
    println!(
        "[{}] {} {} | {} | {} | {} | overall {}",
        status,
        snapshot.exercise_label(),
        snapshot.exercise_name,
        snapshot.set_label(),
        target,
        countdown,
        format_percent(snapshot.overall_progress_percent)
    );
}
