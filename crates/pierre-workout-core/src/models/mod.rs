// ABOUTME: Workout data models and enumeration tables shared by both output builders
// ABOUTME: Re-exports the description, category enums, binary records, and interchange types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! Each category (sport, intensity, target kind, duration kind) has one
//! canonical enum with two total projections: a binary code and an
//! interchange id/key pair. Keeping a single enum per category means the two
//! output formats cannot drift apart.

mod duration;
mod fit;
mod intensity;
mod interchange;
mod sport;
mod target;
mod workout;

// Enumeration tables
pub use duration::DurationKind;
pub use intensity::Intensity;
pub use sport::WorkoutSport;
pub use target::{TargetKind, NO_TARGET_CODE};

// Input description
pub use workout::{StepDescription, WorkoutDescription};

// Binary record model
pub use fit::{fit_datetime, FileIdRecord, FitRecord, StepTarget, WorkoutRecord, WorkoutStepRecord};

// Interchange document model
pub use interchange::{
    IntensityRef, InterchangeDocument, InterchangeStep, SportTypeRef, StepDuration,
    StepTargetRef, StepTypeRef, WorkoutSegment,
};
