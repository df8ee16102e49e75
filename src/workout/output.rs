// ABOUTME: Resolves which artifacts to write and where from an optional destination path
// ABOUTME: Handles directory, .fit, .json, and extension-less destinations plus name slugs
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use pierre_workout_core::constants::files::{FIT_EXTENSION, JSON_EXTENSION};
use regex::Regex;
use serde::Serialize;

/// Characters that may not appear in a slug
static UNSAFE_SLUG_CHARS: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"[^a-zA-Z0-9_-]").ok());

/// Which artifacts a run produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    /// Binary workout file only
    Fit,
    /// Interchange JSON only
    Json,
    /// Both artifacts
    Both,
}

impl fmt::Display for OutputMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Fit => "FIT",
            Self::Json => "JSON",
            Self::Both => "BOTH",
        })
    }
}

/// Destination paths for one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPlan {
    /// Binary artifact path, when requested
    pub fit_path: Option<PathBuf>,
    /// JSON artifact path, when requested
    pub json_path: Option<PathBuf>,
    /// Requested artifacts
    pub mode: OutputMode,
}

impl OutputPlan {
    /// Resolve the plan for a destination and workout name
    ///
    /// - no destination: both artifacts named by the slug in the working directory
    /// - an existing directory: both artifacts named by the slug inside it
    /// - a path ending in `.fit` or `.json` (any case): that artifact only
    /// - anything else: both, with each extension appended to the path
    #[must_use]
    pub fn resolve(destination: Option<&Path>, workout_name: &str) -> Self {
        let slug = slugify(workout_name);

        let Some(destination) = destination else {
            return Self::both(
                PathBuf::from(format!("{slug}.{FIT_EXTENSION}")),
                PathBuf::from(format!("{slug}.{JSON_EXTENSION}")),
            );
        };

        if destination.is_dir() {
            return Self::both(
                destination.join(format!("{slug}.{FIT_EXTENSION}")),
                destination.join(format!("{slug}.{JSON_EXTENSION}")),
            );
        }

        if has_extension(destination, FIT_EXTENSION) {
            return Self {
                fit_path: Some(destination.to_path_buf()),
                json_path: None,
                mode: OutputMode::Fit,
            };
        }

        if has_extension(destination, JSON_EXTENSION) {
            return Self {
                fit_path: None,
                json_path: Some(destination.to_path_buf()),
                mode: OutputMode::Json,
            };
        }

        Self::both(
            append_extension(destination, FIT_EXTENSION),
            append_extension(destination, JSON_EXTENSION),
        )
    }

    const fn both(fit_path: PathBuf, json_path: PathBuf) -> Self {
        Self {
            fit_path: Some(fit_path),
            json_path: Some(json_path),
            mode: OutputMode::Both,
        }
    }
}

/// Filesystem-safe form of a workout name
///
/// Every character outside `[A-Za-z0-9_-]` becomes `-`, then the result is lowercased.
#[must_use]
pub fn slugify(name: &str) -> String {
    UNSAFE_SLUG_CHARS.as_ref().map_or_else(
        || {
            name.chars()
                .map(|c| {
                    if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                        c
                    } else {
                        '-'
                    }
                })
                .collect::<String>()
        },
        |pattern| pattern.replace_all(name, "-").into_owned(),
    )
    .to_lowercase()
}

fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case(extension))
}

fn append_extension(path: &Path, extension: &str) -> PathBuf {
    let mut raw = OsString::from(path.as_os_str());
    raw.push(".");
    raw.push(extension);
    PathBuf::from(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_keeps_dashes_and_underscores() {
        assert_eq!(slugify("Tempo_Run-2"), "tempo_run-2");
        assert_eq!(slugify("5x1k @ 10K pace"), "5x1k---10k-pace");
    }

    #[test]
    fn test_extension_match_ignores_case() {
        assert!(has_extension(Path::new("out/Run.FIT"), FIT_EXTENSION));
        assert!(!has_extension(Path::new("out/run.fits"), FIT_EXTENSION));
    }
}
