// ABOUTME: Builds the ordered binary record stream for a validated workout description
// ABOUTME: Emits file identity, workout header, then one step record per input step in order
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Model Builder
//!
//! Duration kind is always written as time in this path: distance steps are
//! not distinguished in the binary output.

use pierre_workout_core::constants::fit::{
    DURATION_TYPE_TIME, FILE_TYPE_WORKOUT, MANUFACTURER_DEVELOPMENT, PRODUCT_ID, SERIAL_NUMBER,
};
use pierre_workout_core::models::{
    FileIdRecord, FitRecord, StepDescription, StepTarget, TargetKind, WorkoutDescription,
    WorkoutRecord, WorkoutStepRecord,
};
use tracing::debug;

use super::clock::{Clock, SystemClock};

/// Builds binary workout records, reading the clock once per build
pub struct FitMessageBuilder<C = SystemClock> {
    clock: C,
}

impl FitMessageBuilder<SystemClock> {
    /// Builder stamped with the system time
    #[must_use]
    pub const fn new() -> Self {
        Self { clock: SystemClock }
    }
}

impl Default for FitMessageBuilder<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> FitMessageBuilder<C> {
    /// Builder stamped with the given clock
    #[must_use]
    pub const fn with_clock(clock: C) -> Self {
        Self { clock }
    }

    /// Build the record stream for a workout
    ///
    /// The result holds exactly `steps.len() + 2` records.
    #[must_use]
    pub fn build(&self, workout: &WorkoutDescription) -> Vec<FitRecord> {
        let step_count = saturating_u32(workout.step_count());
        let mut records = Vec::with_capacity(workout.step_count() + 2);

        records.push(FitRecord::FileId(FileIdRecord {
            file_type: FILE_TYPE_WORKOUT.to_owned(),
            manufacturer: MANUFACTURER_DEVELOPMENT.to_owned(),
            product: PRODUCT_ID,
            time_created: self.clock.now(),
            serial_number: SERIAL_NUMBER,
        }));

        records.push(FitRecord::Workout(WorkoutRecord {
            sport: workout.sport.key().to_owned(),
            sub_sport: workout.sub_sport.clone(),
            name: workout.name.clone(),
            num_steps: step_count,
            num_valid_steps: step_count,
        }));

        records.extend(
            workout
                .steps
                .iter()
                .enumerate()
                .map(|(index, step)| FitRecord::WorkoutStep(step_record(index, step))),
        );

        debug!(
            workout.name = %workout.name,
            records = records.len(),
            "Built binary workout records"
        );
        records
    }
}

fn step_record(index: usize, step: &StepDescription) -> WorkoutStepRecord {
    let target = step.declared_target().map(|key| {
        let (low, high) = step.target_range();
        StepTarget {
            target_type: TargetKind::resolve_fit_code(Some(key)),
            target_value_low: low,
            target_value_high: high,
        }
    });

    WorkoutStepRecord {
        message_index: saturating_u32(index),
        name: step.name.clone(),
        duration_type: DURATION_TYPE_TIME.to_owned(),
        duration_value: step.duration_value(),
        intensity: step.resolved_intensity().fit_code(),
        target,
    }
}

fn saturating_u32(value: usize) -> u32 {
    u32::try_from(value).unwrap_or(u32::MAX)
}

/// Build binary workout records stamped with the system time
#[must_use]
pub fn build_workout_messages(workout: &WorkoutDescription) -> Vec<FitRecord> {
    FitMessageBuilder::new().build(workout)
}
