// ABOUTME: Environment-driven settings for workout export runs
// ABOUTME: Encoder command line, request defaults, and JSON echo toggle
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::env;

use pierre_workout_core::constants::defaults;
use tracing::debug;

use crate::workout::{CommandEncoder, RecordEncoder};

/// External encoder command line
pub const ENCODER_COMMAND_ENV: &str = "PIERRE_FIT_ENCODER_COMMAND";
/// Sport used when the request names none
pub const DEFAULT_SPORT_ENV: &str = "PIERRE_WORKOUT_DEFAULT_SPORT";
/// Sub-sport used when the request names none
pub const DEFAULT_SUB_SPORT_ENV: &str = "PIERRE_WORKOUT_DEFAULT_SUB_SPORT";
/// Whether the JSON artifact is echoed to stdout
pub const ECHO_JSON_ENV: &str = "PIERRE_WORKOUT_ECHO_JSON";

/// Export settings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportConfig {
    /// External encoder command line, if any
    pub encoder_command: Option<String>,
    /// Sport key applied when the request omits one
    pub default_sport: String,
    /// Sub-sport applied when the request omits one
    pub default_sub_sport: String,
    /// Echo the JSON artifact to stdout for manual import
    pub echo_json: bool,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            encoder_command: None,
            default_sport: defaults::SPORT.to_owned(),
            default_sub_sport: defaults::SUB_SPORT.to_owned(),
            echo_json: true,
        }
    }
}

impl ExportConfig {
    /// Load settings from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        let config = Self {
            encoder_command: env::var(ENCODER_COMMAND_ENV)
                .ok()
                .filter(|command| !command.trim().is_empty()),
            default_sport: env_var_or(DEFAULT_SPORT_ENV, defaults::SPORT),
            default_sub_sport: env_var_or(DEFAULT_SUB_SPORT_ENV, defaults::SUB_SPORT),
            echo_json: env_var_or(ECHO_JSON_ENV, "true")
                .parse()
                .unwrap_or(true),
        };

        debug!(
            encoder.configured = config.encoder_command.is_some(),
            default.sport = %config.default_sport,
            default.sub_sport = %config.default_sub_sport,
            echo_json = config.echo_json,
            "Loaded export configuration"
        );
        config
    }

    /// Encoder for the configured command line
    #[must_use]
    pub fn encoder(&self) -> Option<Box<dyn RecordEncoder>> {
        self.encoder_command
            .as_deref()
            .and_then(CommandEncoder::from_command_line)
            .map(|encoder| Box::new(encoder) as Box<dyn RecordEncoder>)
    }
}

fn env_var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_owned())
}
