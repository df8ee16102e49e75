// ABOUTME: JSON document model accepted by the third-party workout import tool
// ABOUTME: Single-segment workouts whose steps carry id/key pairs for every category
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};
use serde_json::Number;

/// Interchange workout document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeDocument {
    /// Workout name
    pub workout_name: String,
    /// Sport pair
    pub sport_type: SportTypeRef,
    /// Segments in order; the builder always emits exactly one
    pub workout_segments: Vec<WorkoutSegment>,
}

impl InterchangeDocument {
    /// Every step across all segments, in order
    pub fn steps(&self) -> impl Iterator<Item = &InterchangeStep> {
        self.workout_segments
            .iter()
            .flat_map(|segment| segment.workout_steps.iter())
    }
}

/// Group of steps within a workout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkoutSegment {
    /// One-based segment position
    pub segment_order: u32,
    /// Steps in order
    pub workout_steps: Vec<InterchangeStep>,
}

/// One step of an interchange segment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterchangeStep {
    /// Assigned by the importing service; always serialized, `null` until then
    pub step_id: Option<u64>,
    /// Step label
    pub step_name: String,
    /// Duration kind pair
    pub step_type: StepTypeRef,
    /// Duration
    pub duration: StepDuration,
    /// Intensity pair
    pub intensity: IntensityRef,
    /// Target pair, omitted when the source step has no target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_type: Option<StepTargetRef>,
}

/// Step duration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepDuration {
    /// Duration kind key
    #[serde(rename = "type")]
    pub kind: String,
    /// Duration value as given by the user
    pub value: Number,
}

/// Sport id/key pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SportTypeRef {
    /// Sport id
    pub sport_type_id: u32,
    /// Sport key
    pub sport_type_key: String,
}

/// Step type id/key pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTypeRef {
    /// Step type id
    pub step_type_id: u32,
    /// Step type key
    pub step_type_key: String,
}

/// Intensity id/key pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityRef {
    /// Intensity id
    pub intensity_id: u32,
    /// Intensity key
    pub intensity_key: String,
}

/// Step target id/key pair
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepTargetRef {
    /// Target id
    pub step_target_id: u32,
    /// Target key
    pub step_target_key: String,
}

impl StepTargetRef {
    /// Sentinel pair for steps without a usable target
    #[must_use]
    pub fn no_target() -> Self {
        Self {
            step_target_id: 0,
            step_target_key: "noTarget".to_owned(),
        }
    }
}
