// ABOUTME: Core types and enumeration tables for Pierre workout export
// ABOUTME: Foundation crate with error handling, constants, and workout data models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Pierre Workout Core
//!
//! Foundation crate providing shared types for converting workout descriptions
//! into binary workout records and interchange documents. This crate is
//! designed to change infrequently; conversion behavior lives in
//! `pierre_workout_export`.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError` and `ErrorCode`
//! - **constants**: File identity values, extensions, and request defaults
//! - **models**: Workout description, enumeration tables, and both output models

/// Unified error handling system with standard error codes
pub mod errors;

/// Constants organized by domain
pub mod constants;

/// Workout description, enumeration tables, and output models
pub mod models;
