// ABOUTME: Pierre workout CLI - converts a workout description into FIT and interchange JSON
// ABOUTME: Parses flags, validates the request, runs the exporter, and prints a summary
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
//!
//! Usage:
//! ```bash
//! # Write easy-run.fit and easy-run.json to the working directory
//! pierre-workout --name "Easy Run" \
//!   --steps '[{"name":"Run","duration":1800,"intensity":"active","targetType":"speed","targetMin":8,"targetMax":10}]'
//!
//! # Only the interchange document, at an explicit path
//! pierre-workout --name "Bike Session" --sport cycling --sub-sport road \
//!   --steps-file intervals.json --output out/bike.json
//! ```

mod helpers;

use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use pierre_workout_export::config::ExportConfig;
use pierre_workout_export::errors::{AppError, AppResult};
use pierre_workout_export::logging::LoggingConfig;
use pierre_workout_export::workout::{OutputPlan, WorkoutExporter, WorkoutRequest};
use tracing::{debug, Level};

use helpers::display;

#[derive(Parser)]
#[command(
    name = "pierre-workout",
    about = "Generate structured workouts as FIT files and import JSON",
    long_about = "Converts a named list of timed workout steps into a binary FIT workout \
                  and a JSON document for the workout import tool. The output path decides \
                  which artifacts are written: .fit, .json, a directory, or a base name for both."
)]
struct Cli {
    /// Workout name
    #[arg(long)]
    name: Option<String>,

    /// Steps as a JSON array
    #[arg(long, conflicts_with = "steps_file")]
    steps: Option<String>,

    /// File holding the steps JSON array
    #[arg(long)]
    steps_file: Option<PathBuf>,

    /// Sport key (running, cycling, swimming, ...), any case
    #[arg(long)]
    sport: Option<String>,

    /// Sub-sport key passed through to the FIT header
    #[arg(long, alias = "subSport")]
    sub_sport: Option<String>,

    /// Output path: .fit, .json, a directory, or a base name (default: slug of the name)
    #[arg(long, short = 'o')]
    output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, short = 'v')]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            debug!(
                error.code = ?error.code,
                error.details = %error.details,
                "{}",
                error.code.description()
            );
            display::error(&error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run(cli: Cli) -> AppResult<()> {
    let mut logging = LoggingConfig::from_env();
    if cli.verbose {
        logging = logging.with_level(Level::DEBUG);
    }
    logging.init()?;

    let config = ExportConfig::from_env();

    let steps_json = match (cli.steps, cli.steps_file) {
        (Some(steps), _) => Some(steps),
        (None, Some(path)) => Some(fs::read_to_string(&path).map_err(|error| {
            AppError::invalid_input(format!(
                "Cannot read --steps-file {}: {error}",
                path.display()
            ))
        })?),
        (None, None) => None,
    };

    let workout = WorkoutRequest {
        name: cli.name,
        steps_json,
        sport: Some(cli.sport.unwrap_or_else(|| config.default_sport.clone())),
        sub_sport: Some(
            cli.sub_sport
                .unwrap_or_else(|| config.default_sub_sport.clone()),
        ),
    }
    .into_description()?;

    let plan = OutputPlan::resolve(cli.output.as_deref(), &workout.name);
    display::workout_summary(&workout, &plan);

    let exporter = WorkoutExporter::new(config.encoder());
    let report = exporter.export(&workout, &plan)?;

    display::export_report(&report, config.echo_json);
    Ok(())
}
