// ABOUTME: Display helpers for countdowns and progress shown to the presentation layer
// ABOUTME: Formats remaining seconds as m:ss and percentages as whole numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// Format a countdown as `m:ss` (`90` becomes `1:30`)
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Format a percentage for a progress bar label, clamped to 0..=100
#[must_use]
pub fn format_percent(percent: f64) -> String {
    format!("{:.0}%", percent.clamp(0.0, 100.0))
}
