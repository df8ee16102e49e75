// ABOUTME: Builds the interchange JSON document for a validated workout description
// ABOUTME: One segment, one step per input step, target pair only for steps that declare one
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_workout_core::constants::fit::DURATION_TYPE_TIME;
use pierre_workout_core::constants::interchange::SEGMENT_ORDER;
use pierre_workout_core::errors::AppResult;
use pierre_workout_core::models::{
    InterchangeDocument, InterchangeStep, StepDescription, StepDuration, TargetKind,
    WorkoutDescription, WorkoutSegment,
};

/// Build the interchange document for a workout
///
/// The step type honors the step's duration kind; `duration.type` is always time.
#[must_use]
pub fn build_interchange_document(workout: &WorkoutDescription) -> InterchangeDocument {
    InterchangeDocument {
        workout_name: workout.name.clone(),
        sport_type: workout.sport.interchange(),
        workout_segments: vec![WorkoutSegment {
            segment_order: SEGMENT_ORDER,
            workout_steps: workout.steps.iter().map(interchange_step).collect(),
        }],
    }
}

fn interchange_step(step: &StepDescription) -> InterchangeStep {
    InterchangeStep {
        step_id: None,
        step_name: step.name.clone(),
        step_type: step.resolved_duration_kind().interchange(),
        duration: StepDuration {
            kind: DURATION_TYPE_TIME.to_owned(),
            value: step.duration.clone(),
        },
        intensity: step.resolved_intensity().interchange(),
        target_type: step
            .declared_target()
            .map(|key| TargetKind::resolve_interchange(Some(key))),
    }
}

/// Render a document as 2-space indented JSON text
///
/// # Errors
///
/// Returns a serialization error if the document cannot be encoded
pub fn to_pretty_json(document: &InterchangeDocument) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(document)?)
}
