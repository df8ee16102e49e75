// ABOUTME: Intake boundary turning raw request fields into a validated workout description
// ABOUTME: Rejects missing names, unparseable or empty steps, bad durations, and unknown sports
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use pierre_workout_core::constants::defaults;
use pierre_workout_core::errors::{AppError, AppResult};
use pierre_workout_core::models::{StepDescription, WorkoutDescription, WorkoutSport};
use serde_json::Value;
use tracing::debug;

/// Raw conversion request as received from the command line
#[derive(Debug, Clone, Default)]
pub struct WorkoutRequest {
    /// Workout name
    pub name: Option<String>,
    /// Steps as JSON array text
    pub steps_json: Option<String>,
    /// Sport key, any case
    pub sport: Option<String>,
    /// Sub-sport key
    pub sub_sport: Option<String>,
}

impl WorkoutRequest {
    /// Validate the request and build the workout description
    ///
    /// # Errors
    ///
    /// Returns a validation error when the name is missing, the steps are
    /// missing, unparseable, not a non-empty array, or malformed, or the sport
    /// is not supported
    pub fn into_description(self) -> AppResult<WorkoutDescription> {
        let name = self
            .name
            .filter(|name| !name.trim().is_empty())
            .ok_or_else(|| AppError::missing_field("--name is required"))?;

        let steps_json = self
            .steps_json
            .ok_or_else(|| AppError::missing_field("--steps is required"))?;
        let steps = parse_steps(&steps_json)?;

        let sport = self
            .sport
            .as_deref()
            .unwrap_or(defaults::SPORT)
            .parse::<WorkoutSport>()?;

        let sub_sport = self
            .sub_sport
            .unwrap_or_else(|| defaults::SUB_SPORT.to_owned());

        debug!(
            workout.name = %name,
            workout.sport = %sport,
            workout.steps = steps.len(),
            "Accepted workout request"
        );

        Ok(WorkoutDescription {
            name,
            sport,
            sub_sport,
            steps,
        })
    }
}

/// Parse and check the step list
///
/// # Errors
///
/// Returns a validation error when the text is not JSON, is not a non-empty
/// array, or holds an element that is not a well-formed step
pub fn parse_steps(steps_json: &str) -> AppResult<Vec<StepDescription>> {
    let value: Value = serde_json::from_str(steps_json).map_err(|error| {
        AppError::invalid_format("Invalid JSON in --steps argument").with_source(error)
    })?;

    let elements = match value {
        Value::Array(elements) if !elements.is_empty() => elements,
        _ => {
            return Err(AppError::invalid_input(
                "--steps must be a non-empty JSON array",
            ))
        }
    };

    elements
        .into_iter()
        .enumerate()
        .map(|(index, element)| parse_step(index, element))
        .collect()
}

fn parse_step(index: usize, element: Value) -> AppResult<StepDescription> {
    let step: StepDescription = serde_json::from_value(element).map_err(|error| {
        AppError::invalid_format(format!("Invalid step {index}: {error}"))
    })?;

    let duration = step.duration_value();
    if !duration.is_finite() || duration < 0.0 {
        return Err(AppError::out_of_range(format!(
            "Invalid step {index}: duration must be a non-negative number of seconds"
        )));
    }

    Ok(step)
}

/// Parse a sport key, rejecting unsupported ones with the list of valid keys
///
/// # Errors
///
/// Returns a validation error naming every supported sport
pub fn validate_sport(sport: &str) -> AppResult<WorkoutSport> {
    sport.parse()
}
