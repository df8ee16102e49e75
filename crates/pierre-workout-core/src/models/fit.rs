// ABOUTME: Typed records handed to the binary workout encoder
// ABOUTME: File identity, workout header, and per-step records with FIT date-time stamps
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Binary Record Model
//!
//! The encoder is an external collaborator. These records fix the *content*
//! and *order* of what it receives; the byte layout is its concern. Records
//! serialize as a JSON array tagged by `message` so a separate encoder
//! process can consume them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One record of the binary workout stream
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "message", rename_all = "snake_case")]
pub enum FitRecord {
    /// File identity, always first
    FileId(FileIdRecord),
    /// Workout header, always second
    Workout(WorkoutRecord),
    /// One step, in input order
    WorkoutStep(WorkoutStepRecord),
}

impl FitRecord {
    /// Step payload when this is a step record
    #[must_use]
    pub const fn as_step(&self) -> Option<&WorkoutStepRecord> {
        match self {
            Self::WorkoutStep(step) => Some(step),
            Self::FileId(_) | Self::Workout(_) => None,
        }
    }
}

/// File identity record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileIdRecord {
    /// File type tag
    pub file_type: String,
    /// Manufacturer tag
    pub manufacturer: String,
    /// Product number
    pub product: u16,
    /// Creation time, serialized as FIT date-time
    #[serde(with = "fit_datetime")]
    pub time_created: DateTime<Utc>,
    /// Serial number
    pub serial_number: u32,
}

/// Workout header record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkoutRecord {
    /// Sport key
    pub sport: String,
    /// Sub-sport key
    pub sub_sport: String,
    /// Workout name
    pub name: String,
    /// Number of step records that follow
    pub num_steps: u32,
    /// Number of valid steps
    pub num_valid_steps: u32,
}

/// Workout step record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutStepRecord {
    /// Zero-based position of the step in the workout
    pub message_index: u32,
    /// Step label
    pub name: String,
    /// Duration kind tag
    pub duration_type: String,
    /// Duration value
    pub duration_value: f64,
    /// Intensity code
    pub intensity: u8,
    /// Target block, present only when the step declared a target
    #[serde(flatten)]
    pub target: Option<StepTarget>,
}

/// Target block of a step record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StepTarget {
    /// Target code
    pub target_type: u8,
    /// Lower bound
    pub target_value_low: f64,
    /// Upper bound
    pub target_value_high: f64,
}

/// Serde adapter for FIT date-time values (seconds since 1989-12-31T00:00:00Z)
pub mod fit_datetime {
    use chrono::{DateTime, Utc};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::constants::fit::FIT_EPOCH_OFFSET_SECS;

    /// Seconds since the FIT epoch, clamped to the representable range
    #[must_use]
    pub fn to_fit_seconds(time: &DateTime<Utc>) -> u32 {
        let seconds = time.timestamp() - FIT_EPOCH_OFFSET_SECS;
        u32::try_from(seconds.max(0)).unwrap_or(u32::MAX)
    }

    /// Instant for a FIT date-time value
    #[must_use]
    pub fn from_fit_seconds(seconds: u32) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(i64::from(seconds) + FIT_EPOCH_OFFSET_SECS, 0)
    }

    /// Serialize as FIT date-time
    ///
    /// # Errors
    ///
    /// Returns the serializer's error
    pub fn serialize<S: Serializer>(time: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u32(to_fit_seconds(time))
    }

    /// Deserialize from FIT date-time
    ///
    /// # Errors
    ///
    /// Returns an error for values that are not a valid FIT date-time
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<DateTime<Utc>, D::Error> {
        let seconds = u32::deserialize(deserializer)?;
        from_fit_seconds(seconds).ok_or_else(|| D::Error::custom("FIT date-time out of range"))
    }
}
