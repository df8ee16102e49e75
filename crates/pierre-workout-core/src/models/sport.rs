// ABOUTME: Sport enumeration for structured workouts with case-insensitive key parsing
// ABOUTME: Projects each sport onto its interchange id/key pair and rejects unknown keys
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::json;

use super::interchange::SportTypeRef;
use crate::errors::AppError;

/// Sports a structured workout can be built for
///
/// This is a closed set: the import tool only understands these eleven keys.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum WorkoutSport {
    /// Running
    #[default]
    Running,
    /// Cycling
    Cycling,
    /// Swimming
    Swimming,
    /// Walking
    Walking,
    /// General fitness
    Fitness,
    /// Strength training
    Strength,
    /// Cardio session
    Cardio,
    /// Hiking
    Hiking,
    /// Rowing
    Rowing,
    /// Elliptical trainer
    Elliptical,
    /// Stair climbing
    StairClimbing,
}

impl WorkoutSport {
    /// Every supported sport, in the order keys are listed to users
    pub const ALL: [Self; 11] = [
        Self::Running,
        Self::Cycling,
        Self::Swimming,
        Self::Walking,
        Self::Fitness,
        Self::Strength,
        Self::Cardio,
        Self::Hiking,
        Self::Rowing,
        Self::Elliptical,
        Self::StairClimbing,
    ];

    /// Canonical key of this sport
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Cycling => "cycling",
            Self::Swimming => "swimming",
            Self::Walking => "walking",
            Self::Fitness => "fitness",
            Self::Strength => "strength",
            Self::Cardio => "cardio",
            Self::Hiking => "hiking",
            Self::Rowing => "rowing",
            Self::Elliptical => "elliptical",
            Self::StairClimbing => "stairClimbing",
        }
    }

    /// Numeric sport type id used by the import tool
    #[must_use]
    pub const fn sport_type_id(self) -> u32 {
        match self {
            Self::Running => 1,
            Self::Cycling => 2,
            Self::Swimming => 4,
            Self::Walking => 8,
            Self::Fitness => 12,
            Self::Strength => 13,
            Self::Cardio => 15,
            Self::Hiking => 18,
            Self::Rowing => 19,
            Self::Elliptical => 21,
            Self::StairClimbing => 22,
        }
    }

    /// Look up a sport by key, ignoring ASCII case
    #[must_use]
    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::ALL
            .into_iter()
            .find(|sport| sport.key().eq_ignore_ascii_case(key))
    }

    /// Look up a sport by key, falling back to running for unknown keys
    #[must_use]
    pub fn parse_or_default(key: &str) -> Self {
        Self::parse(key).unwrap_or_default()
    }

    /// Comma-separated list of every supported key
    #[must_use]
    pub fn valid_keys() -> String {
        Self::ALL.map(Self::key).join(", ")
    }

    /// Interchange projection of this sport
    #[must_use]
    pub fn interchange(self) -> SportTypeRef {
        SportTypeRef {
            sport_type_id: self.sport_type_id(),
            sport_type_key: self.key().to_owned(),
        }
    }
}

impl fmt::Display for WorkoutSport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for WorkoutSport {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| {
            AppError::invalid_input(format!(
                "Invalid sport: \"{s}\". Valid sports: {}",
                Self::valid_keys()
            ))
            .with_details(json!({ "valid_sports": Self::ALL.map(Self::key) }))
        })
    }
}
