// ABOUTME: Main library entry point for Pierre workout export
// ABOUTME: Converts workout descriptions into binary workout records and interchange JSON
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workout Export
//!
//! Turns a sport-agnostic workout description (a named list of timed steps with
//! intensities and optional targets) into the two artifacts a fitness ecosystem
//! imports: a binary workout file and a JSON interchange document.
//!
//! ## Architecture
//!
//! - **Models** (`pierre-workout-core`): description, enumeration tables, and output models
//! - **Workout**: intake, both builders, schema validator, output planning, exporter
//! - **Config**: environment-driven settings
//! - **Logging**: `tracing` subscriber setup
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use pierre_workout_export::errors::AppResult;
//! use pierre_workout_export::workout::{
//!     build_interchange_document, validate_interchange_document, WorkoutRequest,
//! };
//!
//! fn main() -> AppResult<()> {
//!     let workout = WorkoutRequest {
//!         name: Some("Easy Run".into()),
//!         steps_json: Some(r#"[{"name":"Run","duration":1800,"targetType":"speed","targetMin":8,"targetMax":10}]"#.into()),
//!         ..WorkoutRequest::default()
//!     }
//!     .into_description()?;
//!
//!     let document = build_interchange_document(&workout);
//!     let report = validate_interchange_document(&document)?;
//!     println!("valid: {}", report.valid);
//!     Ok(())
//! }
//! ```

/// Unified error handling shared with the core crate
pub use pierre_workout_core::errors;

/// Constants shared with the core crate
pub use pierre_workout_core::constants;

/// Workout models and enumeration tables shared with the core crate
pub use pierre_workout_core::models;

/// Environment-driven configuration
pub mod config;

/// Structured logging setup
pub mod logging;

/// Conversion pipeline
pub mod workout;
