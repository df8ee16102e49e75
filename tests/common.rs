// ABOUTME: Shared fixtures for workout export integration tests
// ABOUTME: Sample workouts, a fixed clock, and in-memory record encoders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::unwrap_used
)]
//! Shared test utilities for `pierre_workout_export`

use std::sync::Mutex;

use chrono::{DateTime, TimeZone, Utc};
use pierre_workout_export::errors::{AppError, AppResult};
use pierre_workout_export::models::{
    FitRecord, StepDescription, WorkoutDescription, WorkoutSport,
};
use pierre_workout_export::workout::{FixedClock, RecordEncoder};

/// Instant used by every fixed clock in the tests
pub fn fixed_instant() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 6, 30, 0).unwrap()
}

/// Clock pinned to [`fixed_instant`]
pub fn fixed_clock() -> FixedClock {
    FixedClock(fixed_instant())
}

/// Single 30-minute run with a speed target
pub fn easy_run() -> WorkoutDescription {
    WorkoutDescription {
        name: "Easy Run".into(),
        sport: WorkoutSport::Running,
        sub_sport: "generic".into(),
        steps: vec![StepDescription::new("Run", 1800)
            .with_intensity("active")
            .with_target("speed", 8.0, 10.0)],
    }
}

/// Six-step heart rate interval session
pub fn hiit_session() -> WorkoutDescription {
    let step = |name: &str, duration: u64, intensity: &str, min: f64, max: f64| {
        StepDescription::new(name, duration)
            .with_intensity(intensity)
            .with_target("heartRate", min, max)
    };

    WorkoutDescription {
        name: "HIIT Session".into(),
        sport: WorkoutSport::Running,
        sub_sport: "trail".into(),
        steps: vec![
            step("Warm up", 300, "warmup", 110.0, 130.0),
            step("Sprint", 60, "active", 160.0, 175.0),
            step("Rest", 60, "rest", 100.0, 120.0),
            step("Sprint", 60, "active", 160.0, 175.0),
            step("Rest", 60, "rest", 100.0, 120.0),
            step("Cool down", 300, "cooldown", 110.0, 130.0),
        ],
    }
}

/// Cycling session mixing heart rate and power targets
pub fn bike_session() -> WorkoutDescription {
    WorkoutDescription {
        name: "Bike Session".into(),
        sport: WorkoutSport::Cycling,
        sub_sport: "road".into(),
        steps: vec![
            StepDescription::new("Warm up", 600)
                .with_intensity("warmup")
                .with_target("heartRate", 100.0, 130.0),
            StepDescription::new("Tempo", 1200)
                .with_intensity("active")
                .with_target("power", 150.0, 200.0),
            StepDescription::new("Cool down", 300)
                .with_intensity("cooldown")
                .with_target("heartRate", 90.0, 110.0),
        ],
    }
}

/// Workout whose only step has no target
pub fn untargeted_walk() -> WorkoutDescription {
    WorkoutDescription {
        name: "Walk".into(),
        sport: WorkoutSport::Walking,
        sub_sport: "generic".into(),
        steps: vec![StepDescription::new("Stroll", 900)],
    }
}

/// Encoder that remembers the records it received and returns fixed bytes
#[derive(Default)]
pub struct RecordingEncoder {
    pub received: Mutex<Vec<FitRecord>>,
}

/// Bytes returned by [`RecordingEncoder`]
pub const ENCODED_BYTES: &[u8] = b"\x0e\x10FIT-test-bytes";

impl RecordEncoder for RecordingEncoder {
    fn encode(&self, records: &[FitRecord]) -> AppResult<Vec<u8>> {
        self.received.lock().unwrap().extend_from_slice(records);
        Ok(ENCODED_BYTES.to_vec())
    }
}

/// Encoder that always fails
pub struct FailingEncoder;

impl RecordEncoder for FailingEncoder {
    fn encode(&self, _records: &[FitRecord]) -> AppResult<Vec<u8>> {
        Err(AppError::external_service("FIT encoder", "boom"))
    }
}
