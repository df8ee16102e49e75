// ABOUTME: Orchestrates a conversion run from validated workout to written artifacts
// ABOUTME: Builds, encodes, validates, and writes the artifacts an output plan asks for
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use pierre_workout_core::errors::{AppError, AppResult};
use pierre_workout_core::models::WorkoutDescription;
use serde::Serialize;
use tracing::{info, warn};

use crate::config::ENCODER_COMMAND_ENV;

use super::clock::{Clock, SystemClock};
use super::encoder::RecordEncoder;
use super::fit_messages::FitMessageBuilder;
use super::interchange::{build_interchange_document, to_pretty_json};
use super::output::{OutputMode, OutputPlan};
use super::validation::{validate_interchange_document, ValidationReport};

/// Kind of artifact a run can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtifactKind {
    /// Binary workout file
    Fit,
    /// Interchange JSON document
    Json,
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fit => "FIT",
            Self::Json => "JSON",
        })
    }
}

/// Artifact written to disk
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WrittenArtifact {
    /// Destination path
    pub path: PathBuf,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Bytes written
    pub size: usize,
}

/// Requested artifact that was not produced
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedArtifact {
    /// Path it would have been written to
    pub path: PathBuf,
    /// Artifact kind
    pub kind: ArtifactKind,
    /// Why it was skipped
    pub reason: String,
}

/// Result of one conversion run
#[derive(Debug, Clone, Serialize)]
pub struct ExportReport {
    /// Requested artifacts
    pub mode: OutputMode,
    /// Artifacts written, binary first
    pub files: Vec<WrittenArtifact>,
    /// Requested artifacts that were not produced
    pub skipped: Vec<SkippedArtifact>,
    /// Validation of the JSON document, when one was built
    pub validation: Option<ValidationReport>,
    /// Pretty-printed JSON document, when one was built
    pub json_text: Option<String>,
}

/// Runs conversions against an optional binary encoder
pub struct WorkoutExporter<C = SystemClock> {
    fit_builder: FitMessageBuilder<C>,
    encoder: Option<Box<dyn RecordEncoder>>,
}

impl WorkoutExporter<SystemClock> {
    /// Exporter stamped with the system time
    #[must_use]
    pub fn new(encoder: Option<Box<dyn RecordEncoder>>) -> Self {
        Self::with_clock(SystemClock, encoder)
    }
}

impl<C: Clock> WorkoutExporter<C> {
    /// Exporter stamped with the given clock
    #[must_use]
    pub fn with_clock(clock: C, encoder: Option<Box<dyn RecordEncoder>>) -> Self {
        Self {
            fit_builder: FitMessageBuilder::with_clock(clock),
            encoder,
        }
    }

    /// Produce every artifact the plan asks for
    ///
    /// Both artifacts are built before anything is written, so an encoder
    /// failure leaves the destination untouched. Validation findings never
    /// stop the run; they are logged and returned in the report.
    ///
    /// # Errors
    ///
    /// Returns an error when the encoder fails, the document cannot be
    /// serialized, an artifact cannot be written, or the only requested
    /// artifact needs an encoder that is not configured
    pub fn export(&self, workout: &WorkoutDescription, plan: &OutputPlan) -> AppResult<ExportReport> {
        info!(
            workout.name = %workout.name,
            workout.steps = workout.step_count(),
            output.mode = %plan.mode,
            "Exporting workout"
        );

        let mut skipped = Vec::new();
        let fit_artifact = match &plan.fit_path {
            Some(path) => match &self.encoder {
                Some(encoder) => {
                    let records = self.fit_builder.build(workout);
                    Some((path, encoder.encode(&records)?))
                }
                None => {
                    warn!(
                        artifact.path = %path.display(),
                        "No FIT encoder configured, skipping binary artifact"
                    );
                    skipped.push(SkippedArtifact {
                        path: path.clone(),
                        kind: ArtifactKind::Fit,
                        reason: format!("no FIT encoder configured (set {ENCODER_COMMAND_ENV})"),
                    });
                    None
                }
            },
            None => None,
        };

        let json_artifact = match &plan.json_path {
            Some(path) => {
                let document = build_interchange_document(workout);
                let validation = validate_interchange_document(&document)?;
                log_validation(&validation);
                Some((path, to_pretty_json(&document)?, validation))
            }
            None => None,
        };

        if fit_artifact.is_none() && json_artifact.is_none() {
            return Err(AppError::config_missing(format!(
                "no FIT encoder configured (set {ENCODER_COMMAND_ENV}); nothing was written"
            )));
        }

        let mut files = Vec::new();
        if let Some((path, bytes)) = fit_artifact {
            files.push(write_artifact(path, ArtifactKind::Fit, &bytes)?);
        }

        let mut validation = None;
        let mut json_text = None;
        if let Some((path, text, report)) = json_artifact {
            files.push(write_artifact(path, ArtifactKind::Json, text.as_bytes())?);
            validation = Some(report);
            json_text = Some(text);
        }

        Ok(ExportReport {
            mode: plan.mode,
            files,
            skipped,
            validation,
            json_text,
        })
    }
}

fn log_validation(report: &ValidationReport) {
    if report.valid {
        return;
    }
    for error in &report.errors {
        warn!(validation.error = %error, "Interchange document violates import schema");
    }
    warn!(
        validation.errors = report.errors.len(),
        "JSON output has validation issues; writing it anyway"
    );
}

fn write_artifact(path: &Path, kind: ArtifactKind, bytes: &[u8]) -> AppResult<WrittenArtifact> {
    fs::write(path, bytes).map_err(|error| {
        AppError::storage(format!("failed to write {}: {error}", path.display())).with_source(error)
    })?;

    info!(
        artifact.path = %path.display(),
        artifact.kind = %kind,
        artifact.bytes = bytes.len(),
        "Wrote artifact"
    );

    Ok(WrittenArtifact {
        path: path.to_path_buf(),
        kind,
        size: bytes.len(),
    })
}
