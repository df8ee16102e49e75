// ABOUTME: Sport-agnostic workout description accepted at the intake boundary
// ABOUTME: A named, ordered list of timed steps with optional intensity and target ranges
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Number;

use super::duration::DurationKind;
use super::intensity::Intensity;
use super::sport::WorkoutSport;

/// A validated workout ready for conversion
///
/// Intake guarantees a non-empty name, at least one step, and a supported sport.
/// The builders rely on those guarantees and never fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutDescription {
    /// Display name of the workout
    pub name: String,
    /// Sport the workout is planned for
    pub sport: WorkoutSport,
    /// Free-form sub-sport passed through to the binary header
    pub sub_sport: String,
    /// Steps in execution order
    pub steps: Vec<StepDescription>,
}

impl WorkoutDescription {
    /// Number of steps
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.steps.len()
    }
}

/// One timed block of a workout as the user described it
///
/// Category fields stay raw strings: they are interpreted only through the
/// enumeration projections, which fall back instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepDescription {
    /// Step label
    #[serde(default)]
    pub name: String,
    /// Duration value (seconds for time-based steps)
    pub duration: Number,
    /// Intensity key (`warmup`, `active`, `cooldown`, `rest`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity: Option<String>,
    /// Duration kind key (`time`, `distance`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_type: Option<String>,
    /// Target kind key (`heartRate`, `speed`, `power`, `cadence`, `pace`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<String>,
    /// Lower bound of the target range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_min: Option<f64>,
    /// Upper bound of the target range
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_max: Option<f64>,
}

impl StepDescription {
    /// Create a time-based active step with no target
    pub fn new(name: impl Into<String>, duration: impl Into<Number>) -> Self {
        Self {
            name: name.into(),
            duration: duration.into(),
            intensity: None,
            duration_type: None,
            target_type: None,
            target_min: None,
            target_max: None,
        }
    }

    /// Set the intensity key
    #[must_use]
    pub fn with_intensity(mut self, intensity: impl Into<String>) -> Self {
        self.intensity = Some(intensity.into());
        self
    }

    /// Set the duration kind key
    #[must_use]
    pub fn with_duration_type(mut self, duration_type: impl Into<String>) -> Self {
        self.duration_type = Some(duration_type.into());
        self
    }

    /// Set a target kind with its range
    #[must_use]
    pub fn with_target(mut self, target_type: impl Into<String>, min: f64, max: f64) -> Self {
        self.target_type = Some(target_type.into());
        self.target_min = Some(min);
        self.target_max = Some(max);
        self
    }

    /// Duration as a float
    #[must_use]
    pub fn duration_value(&self) -> f64 {
        self.duration.as_f64().unwrap_or_default()
    }

    /// Resolved intensity
    #[must_use]
    pub fn resolved_intensity(&self) -> Intensity {
        Intensity::resolve(self.intensity.as_deref())
    }

    /// Resolved duration kind
    #[must_use]
    pub fn resolved_duration_kind(&self) -> DurationKind {
        DurationKind::resolve(self.duration_type.as_deref())
    }

    /// Target kind key when the step declares one
    ///
    /// An empty key counts as no target.
    #[must_use]
    pub fn declared_target(&self) -> Option<&str> {
        self.target_type.as_deref().filter(|key| !key.is_empty())
    }

    /// Target range bounds, each defaulting to zero
    #[must_use]
    pub fn target_range(&self) -> (f64, f64) {
        (
            self.target_min.unwrap_or_default(),
            self.target_max.unwrap_or_default(),
        )
    }
}
