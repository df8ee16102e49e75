// ABOUTME: Integration tests for output planning, artifact writing, and record encoders
// ABOUTME: Exercises the exporter end to end against temporary directories
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use std::error::Error as StdError;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use pierre_workout_export::errors::{AppResult, ErrorCode};
use pierre_workout_export::models::{FitRecord, InterchangeDocument, StepDescription};
use pierre_workout_export::workout::{
    build_workout_messages, slugify, ArtifactKind, CommandEncoder, FixedClock, OutputMode,
    OutputPlan, RecordEncoder, WorkoutExporter,
};
use tempfile::tempdir;

use common::{
    easy_run, fixed_clock, hiit_session, untargeted_walk, FailingEncoder, RecordingEncoder,
    ENCODED_BYTES,
};

/// Shares a recording encoder between the exporter and the test body
struct SharedEncoder(Arc<RecordingEncoder>);

impl RecordEncoder for SharedEncoder {
    fn encode(&self, records: &[FitRecord]) -> AppResult<Vec<u8>> {
        self.0.encode(records)
    }
}

fn exporter_with(encoder: impl RecordEncoder + 'static) -> WorkoutExporter<FixedClock> {
    WorkoutExporter::with_clock(fixed_clock(), Some(Box::new(encoder)))
}

#[test]
fn test_slug_replaces_unsafe_characters() {
    assert_eq!(slugify("HIIT Session!"), "hiit-session-");
    assert_eq!(slugify("Easy Run"), "easy-run");
    assert_eq!(slugify("Tempo_Run-2"), "tempo_run-2");
}

#[test]
fn test_plan_without_destination_uses_slug_in_working_directory() {
    let plan = OutputPlan::resolve(None, "HIIT Session!");

    assert_eq!(plan.mode, OutputMode::Both);
    assert_eq!(plan.fit_path, Some(PathBuf::from("hiit-session-.fit")));
    assert_eq!(plan.json_path, Some(PathBuf::from("hiit-session-.json")));
}

#[test]
fn test_plan_for_directory_destination() {
    let dir = tempdir().unwrap();
    let plan = OutputPlan::resolve(Some(dir.path()), "Easy Run");

    assert_eq!(plan.mode, OutputMode::Both);
    assert_eq!(plan.fit_path, Some(dir.path().join("easy-run.fit")));
    assert_eq!(plan.json_path, Some(dir.path().join("easy-run.json")));
}

#[test]
fn test_plan_for_single_artifact_destinations() {
    let plan = OutputPlan::resolve(Some(Path::new("out/run.fit")), "Easy Run");
    assert_eq!(plan.mode, OutputMode::Fit);
    assert_eq!(plan.fit_path, Some(PathBuf::from("out/run.fit")));
    assert_eq!(plan.json_path, None);

    let plan = OutputPlan::resolve(Some(Path::new("out/run.JSON")), "Easy Run");
    assert_eq!(plan.mode, OutputMode::Json);
    assert_eq!(plan.fit_path, None);
    assert_eq!(plan.json_path, Some(PathBuf::from("out/run.JSON")));
}

#[test]
fn test_plan_for_extensionless_destination_appends_both_extensions() {
    let plan = OutputPlan::resolve(Some(Path::new("missing-dir/tempo")), "Tempo");

    assert_eq!(plan.mode, OutputMode::Both);
    assert_eq!(plan.fit_path, Some(PathBuf::from("missing-dir/tempo.fit")));
    assert_eq!(plan.json_path, Some(PathBuf::from("missing-dir/tempo.json")));
}

#[test]
fn test_export_writes_both_artifacts() {
    let dir = tempdir().unwrap();
    let encoder = Arc::new(RecordingEncoder::default());
    let exporter = exporter_with(SharedEncoder(Arc::clone(&encoder)));
    let workout = hiit_session();
    let plan = OutputPlan::resolve(Some(dir.path()), &workout.name);

    let report = exporter.export(&workout, &plan).unwrap();

    assert_eq!(report.mode, OutputMode::Both);
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].kind, ArtifactKind::Fit);
    assert_eq!(report.files[0].size, ENCODED_BYTES.len());
    assert_eq!(report.files[1].kind, ArtifactKind::Json);
    assert!(report.skipped.is_empty());
    assert!(report.validation.as_ref().unwrap().valid);

    let fit_bytes = fs::read(dir.path().join("hiit-session.fit")).unwrap();
    assert_eq!(fit_bytes, ENCODED_BYTES);

    let json_text = fs::read_to_string(dir.path().join("hiit-session.json")).unwrap();
    assert_eq!(Some(&json_text), report.json_text.as_ref());
    let document: InterchangeDocument = serde_json::from_str(&json_text).unwrap();
    assert_eq!(document.steps().count(), 6);

    let received = encoder.received.lock().unwrap();
    assert_eq!(received.len(), 8);
}

#[test]
fn test_json_only_destination_skips_encoder() {
    let dir = tempdir().unwrap();
    let encoder = Arc::new(RecordingEncoder::default());
    let exporter = exporter_with(SharedEncoder(Arc::clone(&encoder)));
    let destination = dir.path().join("run.json");
    let plan = OutputPlan::resolve(Some(destination.as_path()), "Easy Run");

    let report = exporter.export(&easy_run(), &plan).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].path, destination);
    assert!(destination.exists());
    assert!(!dir.path().join("run.fit").exists());
    assert!(encoder.received.lock().unwrap().is_empty());
}

#[test]
fn test_fit_only_destination_has_no_validation() {
    let dir = tempdir().unwrap();
    let exporter = exporter_with(RecordingEncoder::default());
    let destination = dir.path().join("run.fit");
    let plan = OutputPlan::resolve(Some(destination.as_path()), "Easy Run");

    let report = exporter.export(&easy_run(), &plan).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].kind, ArtifactKind::Fit);
    assert!(report.validation.is_none());
    assert!(report.json_text.is_none());
}

#[test]
fn test_invalid_json_is_still_written() {
    let dir = tempdir().unwrap();
    let exporter = exporter_with(RecordingEncoder::default());
    let plan = OutputPlan::resolve(Some(dir.path()), "Walk");

    let report = exporter.export(&untargeted_walk(), &plan).unwrap();

    let validation = report.validation.unwrap();
    assert!(!validation.valid);
    assert_eq!(validation.errors.len(), 1);
    assert!(dir.path().join("walk.json").exists());
    assert!(dir.path().join("walk.fit").exists());
}

#[test]
fn test_missing_encoder_skips_binary_artifact() {
    let dir = tempdir().unwrap();
    let exporter = WorkoutExporter::with_clock(fixed_clock(), None);
    let plan = OutputPlan::resolve(Some(dir.path()), "Easy Run");

    let report = exporter.export(&easy_run(), &plan).unwrap();

    assert_eq!(report.files.len(), 1);
    assert_eq!(report.files[0].kind, ArtifactKind::Json);
    assert_eq!(report.skipped.len(), 1);
    assert_eq!(report.skipped[0].kind, ArtifactKind::Fit);
    assert!(report.skipped[0].reason.contains("PIERRE_FIT_ENCODER_COMMAND"));
    assert!(!dir.path().join("easy-run.fit").exists());
}

#[test]
fn test_fit_only_destination_without_encoder_fails() {
    let dir = tempdir().unwrap();
    let exporter = WorkoutExporter::with_clock(fixed_clock(), None);
    let destination = dir.path().join("run.fit");
    let plan = OutputPlan::resolve(Some(destination.as_path()), "Easy Run");

    let error = exporter.export(&easy_run(), &plan).unwrap_err();

    assert_eq!(error.code, ErrorCode::ConfigMissing);
    assert_eq!(error.exit_code(), 1);
    assert!(error.message.contains("PIERRE_FIT_ENCODER_COMMAND"));
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_encoder_failure_writes_nothing() {
    let dir = tempdir().unwrap();
    let exporter = exporter_with(FailingEncoder);
    let plan = OutputPlan::resolve(Some(dir.path()), "Easy Run");

    let error = exporter.export(&easy_run(), &plan).unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert_eq!(error.exit_code(), 1);
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[test]
fn test_unwritable_destination_is_storage_error() {
    let dir = tempdir().unwrap();
    let exporter = exporter_with(RecordingEncoder::default());
    let destination = dir.path().join("no-such-dir").join("run");
    let plan = OutputPlan::resolve(Some(destination.as_path()), "Easy Run");

    let error = exporter.export(&easy_run(), &plan).unwrap_err();
    assert_eq!(error.code, ErrorCode::StorageError);
}

#[test]
fn test_command_encoder_parses_command_line() {
    let encoder = CommandEncoder::from_command_line("  fit-encode --strict ").unwrap();
    assert_eq!(encoder.program(), "fit-encode");
    assert!(CommandEncoder::from_command_line("   ").is_none());
}

#[test]
fn test_command_encoder_reports_missing_program() {
    let encoder = CommandEncoder::new("pierre-no-such-encoder-binary", Vec::new());
    let records = build_workout_messages(&easy_run());

    let error = encoder.encode(&records).unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceUnavailable);
}

#[cfg(unix)]
#[test]
fn test_command_encoder_pipes_records_through_process() {
    let encoder = CommandEncoder::new("cat", Vec::new());
    let records = build_workout_messages(&easy_run());

    let bytes = encoder.encode(&records).unwrap();
    let echoed: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(echoed.as_array().unwrap().len(), 3);
    assert_eq!(echoed[1]["name"], "Easy Run");
}

#[cfg(unix)]
#[test]
fn test_command_encoder_rejects_failing_or_silent_process() {
    let records = build_workout_messages(&easy_run());

    let failing = CommandEncoder::new("false", Vec::new());
    assert_eq!(
        failing.encode(&records).unwrap_err().code,
        ErrorCode::ExternalServiceError
    );

    let silent = CommandEncoder::new("sh", vec!["-c".to_owned(), "cat > /dev/null".to_owned()]);
    let error = silent.encode(&records).unwrap_err();
    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("produced no output"));
}

/// Records for a workout large enough to overflow any OS pipe buffer
#[cfg(unix)]
fn oversized_records() -> Vec<FitRecord> {
    let mut workout = easy_run();
    workout.steps = (0..2000)
        .map(|index| {
            StepDescription::new(format!("Repeat {index}"), 60)
                .with_intensity("active")
                .with_target("speed", 8.0, 10.0)
        })
        .collect();
    build_workout_messages(&workout)
}

#[cfg(unix)]
#[test]
fn test_command_encoder_streams_large_payload() {
    let records = oversized_records();
    let payload = serde_json::to_vec(&records).unwrap();
    assert!(payload.len() > 128 * 1024);

    let encoder = CommandEncoder::new("cat", Vec::new());
    let bytes = encoder.encode(&records).unwrap();

    assert_eq!(bytes.len(), payload.len());
}

#[cfg(unix)]
#[test]
fn test_command_encoder_reports_unread_input() {
    let records = oversized_records();
    let encoder = CommandEncoder::new("true", Vec::new());

    let error = encoder.encode(&records).unwrap_err();

    assert_eq!(error.code, ErrorCode::ExternalServiceError);
    assert!(error.message.contains("failed to send records"), "{}", error.message);
    assert!(StdError::source(&error).is_some());
}
