// ABOUTME: Workout conversion pipeline from raw request to binary records and JSON document
// ABOUTME: Intake, both builders, the schema validator, output planning, and the exporter
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Workout Conversion
//!
//! ```text
//! WorkoutRequest ──intake──▶ WorkoutDescription ─┬─▶ FitMessageBuilder ──▶ RecordEncoder ──▶ .fit
//!                                                └─▶ build_interchange_document ──▶ validator ──▶ .json
//! ```
//!
//! Intake errors stop a run before anything is built. Builders are total over
//! validated input. Validation findings are advisory and never stop a run.

/// Injectable time source
pub mod clock;
/// External binary encoder seam
pub mod encoder;
/// Run orchestration and artifact writing
pub mod export;
/// Binary record stream builder
pub mod fit_messages;
/// Request validation
pub mod intake;
/// Interchange document builder
pub mod interchange;
/// Destination resolution and slugs
pub mod output;
/// Interchange schema validator
pub mod validation;

pub use clock::{Clock, FixedClock, SystemClock};
pub use encoder::{CommandEncoder, RecordEncoder};
pub use export::{ArtifactKind, ExportReport, SkippedArtifact, WorkoutExporter, WrittenArtifact};
pub use fit_messages::{build_workout_messages, FitMessageBuilder};
pub use intake::{parse_steps, validate_sport, WorkoutRequest};
pub use interchange::{build_interchange_document, to_pretty_json};
pub use output::{slugify, OutputMode, OutputPlan};
pub use validation::{validate_interchange_document, validate_interchange_json, ValidationReport};
