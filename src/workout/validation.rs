// ABOUTME: Schema validator re-checking interchange documents against the import contract
// ABOUTME: Collects every violation as a readable message instead of stopping at the first
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Interchange Schema Validator
//!
//! Works on raw JSON so it can check documents from any source, not only the
//! builder in this crate. Findings are advisory: callers still write the
//! artifact and surface the list.
//!
//! `targetType` is required on every step here, while the builder omits it for
//! steps without a target. Documents for such steps therefore fail validation.

use pierre_workout_core::errors::AppResult;
use pierre_workout_core::models::InterchangeDocument;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Outcome of validating one document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    /// True when no violation was found
    pub valid: bool,
    /// Every violation, in document order
    pub errors: Vec<String>,
}

impl ValidationReport {
    /// Build a report from collected violations
    #[must_use]
    pub fn from_errors(errors: Vec<String>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }
}

/// Expected primitive type of an id/key pair member
#[derive(Clone, Copy)]
enum Primitive {
    Number,
    String,
}

impl Primitive {
    const fn name(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::String => "string",
        }
    }

    fn matches(self, value: Option<&Value>) -> bool {
        matches!(
            (self, value),
            (Self::Number, Some(Value::Number(_))) | (Self::String, Some(Value::String(_)))
        )
    }
}

/// Validate an interchange document given as raw JSON
#[must_use]
pub fn validate_interchange_json(document: &Value) -> ValidationReport {
    let mut errors = Vec::new();

    if !is_non_empty_string(document.get("workoutName")) {
        errors.push("Missing or invalid required field: workoutName (string)".to_owned());
    }

    match document.get("sportType") {
        Some(Value::Object(sport_type)) => check_members(
            sport_type,
            "sportType",
            &[
                ("sportTypeId", Primitive::Number),
                ("sportTypeKey", Primitive::String),
            ],
            "",
            &mut errors,
        ),
        _ => errors.push("Missing or invalid required field: sportType (object)".to_owned()),
    }

    match document.get("workoutSegments") {
        Some(Value::Array(segments)) => {
            if segments.is_empty() {
                errors.push("workoutSegments must not be empty".to_owned());
            }
            for (index, segment) in segments.iter().enumerate() {
                check_segment(index, segment, &mut errors);
            }
        }
        _ => errors.push("Missing or invalid required field: workoutSegments (array)".to_owned()),
    }

    ValidationReport::from_errors(errors)
}

/// Validate a typed interchange document
///
/// # Errors
///
/// Returns a serialization error if the document cannot be converted to JSON
pub fn validate_interchange_document(document: &InterchangeDocument) -> AppResult<ValidationReport> {
    let value = serde_json::to_value(document)?;
    Ok(validate_interchange_json(&value))
}

fn check_segment(index: usize, segment: &Value, errors: &mut Vec<String>) {
    if !Primitive::Number.matches(segment.get("segmentOrder")) {
        errors.push(format!(
            "Segment {index}: Missing required field: segmentOrder (number)"
        ));
    }

    match segment.get("workoutSteps") {
        Some(Value::Array(steps)) => {
            if steps.is_empty() {
                errors.push(format!("Segment {index}: workoutSteps must not be empty"));
            }
            for (step_index, step) in steps.iter().enumerate() {
                let prefix = format!("Segment {index}, Step {step_index}: ");
                check_step(&prefix, step, errors);
            }
        }
        _ => errors.push(format!(
            "Segment {index}: Missing or invalid field: workoutSteps (array)"
        )),
    }
}

fn check_step(prefix: &str, step: &Value, errors: &mut Vec<String>) {
    if !matches!(step.get("stepId"), Some(Value::Null | Value::Number(_))) {
        errors.push(format!("{prefix}stepId must be null or number"));
    }

    if !is_non_empty_string(step.get("stepName")) {
        errors.push(format!(
            "{prefix}Missing required field: stepName (string)"
        ));
    }

    check_object(
        step,
        "stepType",
        &[
            ("stepTypeId", Primitive::Number),
            ("stepTypeKey", Primitive::String),
        ],
        prefix,
        errors,
    );
    check_object(
        step,
        "duration",
        &[("type", Primitive::String), ("value", Primitive::Number)],
        prefix,
        errors,
    );
    check_object(
        step,
        "intensity",
        &[
            ("intensityId", Primitive::Number),
            ("intensityKey", Primitive::String),
        ],
        prefix,
        errors,
    );
    check_object(
        step,
        "targetType",
        &[
            ("stepTargetId", Primitive::Number),
            ("stepTargetKey", Primitive::String),
        ],
        prefix,
        errors,
    );
}

fn check_object(
    parent: &Value,
    field: &str,
    members: &[(&str, Primitive)],
    prefix: &str,
    errors: &mut Vec<String>,
) {
    match parent.get(field) {
        Some(Value::Object(object)) => check_members(object, field, members, prefix, errors),
        _ => errors.push(format!("{prefix}Missing required field: {field} (object)")),
    }
}

fn check_members(
    object: &Map<String, Value>,
    field: &str,
    members: &[(&str, Primitive)],
    prefix: &str,
    errors: &mut Vec<String>,
) {
    for &(member, primitive) in members {
        if !primitive.matches(object.get(member)) {
            errors.push(format!(
                "{prefix}Missing required field: {field}.{member} ({})",
                primitive.name()
            ));
        }
    }
}

fn is_non_empty_string(value: Option<&Value>) -> bool {
    matches!(value, Some(Value::String(text)) if !text.is_empty())
}
