// ABOUTME: Configuration module for workout export settings
// ABOUTME: Environment-only configuration; command-line flags override these defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration for the workout exporter
//!
//! There are no configuration files: every setting comes from the environment
//! and can be overridden per run on the command line.

/// Export settings loaded from the environment
pub mod export;

pub use export::{
    ExportConfig, DEFAULT_SPORT_ENV, DEFAULT_SUB_SPORT_ENV, ECHO_JSON_ENV, ENCODER_COMMAND_ENV,
};
