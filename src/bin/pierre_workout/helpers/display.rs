// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
// ABOUTME: Output formatting helpers for pierre-workout
// ABOUTME: Prints the run header, validation warnings, JSON echo, and written files

use pierre_workout_export::errors::AppError;
use pierre_workout_export::models::WorkoutDescription;
use pierre_workout_export::workout::{ExportReport, OutputPlan};

/// Print what is about to be generated
pub fn workout_summary(workout: &WorkoutDescription, plan: &OutputPlan) {
    println!("Workout: \"{}\"", workout.name);
    println!("   Sport: {} ({})", workout.sport, workout.sub_sport);
    println!("   Steps: {}", workout.step_count());
    println!("   Mode: {}", plan.mode);
}

/// Print the outcome of an export run
pub fn export_report(report: &ExportReport, echo_json: bool) {
    if let Some(validation) = report.validation.as_ref().filter(|v| !v.valid) {
        eprintln!("JSON validation errors:");
        for error in &validation.errors {
            eprintln!("   - {error}");
        }
        eprintln!("Warning: JSON output has validation issues");
    }

    if let (true, Some(json)) = (echo_json, report.json_text.as_deref()) {
        println!("\n--- JSON OUTPUT (copy for workout import) ---");
        println!("{json}");
        println!("--- END JSON OUTPUT ---");
    }

    for skipped in &report.skipped {
        eprintln!(
            "Skipped {} ({}): {}",
            skipped.path.display(),
            skipped.kind,
            skipped.reason
        );
    }

    println!("\nFiles written:");
    for file in &report.files {
        println!(
            "   - {} ({}, {} bytes)",
            file.path.display(),
            file.kind,
            file.size
        );
    }
}

/// Print a fatal error as a single line
pub fn error(error: &AppError) {
    eprintln!("Error: {error}");
}
