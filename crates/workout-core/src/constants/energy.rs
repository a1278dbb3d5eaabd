// ABOUTME: Metabolic equivalent (MET) values used to estimate workout energy expenditure
// ABOUTME: Values follow the Compendium of Physical Activities for comparable activities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # References
//!
//! - Ainsworth, B.E., et al. (2011). 2011 Compendium of Physical Activities.
//!   *Medicine & Science in Sports & Exercise*, 43(8), 1575-1581.
//!   <https://doi.org/10.1249/MSS.0b013e31821ece12>

/// Resistance training, multiple exercises, 8-15 reps (code 02054)
pub const MET_STRENGTH: f64 = 5.0;

/// Calisthenics, vigorous effort (code 02020)
pub const MET_CARDIO: f64 = 8.0;

/// Stretching, mild (code 02101)
pub const MET_FLEXIBILITY: f64 = 2.3;

/// Circuit training with minimal rest (code 02040)
pub const MET_HIIT: f64 = 8.0;

/// Health club exercise, general (code 02050)
pub const MET_CUSTOM: f64 = 5.5;

/// Seconds per hour, for converting elapsed seconds into MET-hours
pub const SECONDS_PER_HOUR: f64 = 3_600.0;
