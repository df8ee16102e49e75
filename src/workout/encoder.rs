// ABOUTME: Seam to the external binary workout encoder that turns records into file bytes
// ABOUTME: CommandEncoder pipes the record list as JSON into a configured encoder process
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Binary Record Encoder
//!
//! Byte layout and checksums belong to the encoder. This crate only guarantees
//! the content and order of the records it is given.

use std::io::Write;
use std::process::{Command, Stdio};
use std::thread;

use pierre_workout_core::errors::{AppError, AppResult};
use pierre_workout_core::models::FitRecord;
use tracing::debug;

/// Name reported in encoder errors
const ENCODER_SERVICE: &str = "FIT encoder";

/// Serializes a record stream into binary file bytes
pub trait RecordEncoder: Send + Sync {
    /// Encode records in order
    ///
    /// # Errors
    ///
    /// Returns an external service error when encoding fails
    fn encode(&self, records: &[FitRecord]) -> AppResult<Vec<u8>>;
}

/// Encoder running an external program
///
/// The record list is written to the program's stdin as a JSON array and the
/// encoded file is read from its stdout.
#[derive(Debug, Clone)]
pub struct CommandEncoder {
    program: String,
    args: Vec<String>,
}

impl CommandEncoder {
    /// Encoder for a program and its arguments
    #[must_use]
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// Encoder from a whitespace-separated command line
    ///
    /// Returns `None` for a blank command line.
    #[must_use]
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_owned);
        let program = parts.next()?;
        Some(Self::new(program, parts.collect()))
    }

    /// Program that will be run
    #[must_use]
    pub fn program(&self) -> &str {
        &self.program
    }
}

impl RecordEncoder for CommandEncoder {
    fn encode(&self, records: &[FitRecord]) -> AppResult<Vec<u8>> {
        let payload = serde_json::to_vec(records)?;

        debug!(
            encoder.program = %self.program,
            records = records.len(),
            "Invoking external record encoder"
        );

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|error| {
                AppError::external_unavailable(
                    ENCODER_SERVICE,
                    format!("failed to start {}: {error}", self.program),
                )
                .with_source(error)
            })?;

        // Stdin is fed from its own thread while stdout and stderr drain here
        let stdin = child.stdin.take();
        let (sent, finished) = thread::scope(|scope| {
            let writer = scope.spawn(move || match stdin {
                Some(mut stdin) => stdin.write_all(&payload),
                None => Ok(()),
            });
            let finished = child.wait_with_output();
            (writer.join(), finished)
        });

        let output = finished.map_err(|error| {
            AppError::external_service(ENCODER_SERVICE, format!("encoder did not finish: {error}"))
                .with_source(error)
        })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(AppError::external_service(
                ENCODER_SERVICE,
                format!("exited with {}: {}", output.status, stderr.trim()),
            ));
        }

        match sent {
            Ok(Ok(())) => {}
            Ok(Err(error)) => {
                return Err(AppError::external_service(
                    ENCODER_SERVICE,
                    format!("failed to send records: {error}"),
                )
                .with_source(error));
            }
            Err(_) => return Err(AppError::internal("record writer thread panicked")),
        }

        if output.stdout.is_empty() {
            return Err(AppError::external_service(
                ENCODER_SERVICE,
                "produced no output",
            ));
        }

        Ok(output.stdout)
    }
}
