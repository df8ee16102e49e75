// ABOUTME: Duration kinds that decide how a step ends
// ABOUTME: Maps time and distance onto interchange step type pairs, defaulting to time
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::interchange::StepTypeRef;

/// How a step's duration value is measured
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DurationKind {
    /// Seconds elapsed
    #[default]
    Time,
    /// Distance covered
    Distance,
}

impl DurationKind {
    /// Every duration kind
    pub const ALL: [Self; 2] = [Self::Time, Self::Distance];

    /// Canonical key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Time => "time",
            Self::Distance => "distance",
        }
    }

    /// Step type id used by the import tool
    #[must_use]
    pub const fn step_type_id(self) -> u32 {
        match self {
            Self::Time => 3,
            Self::Distance => 1,
        }
    }

    /// Resolve a raw duration kind, defaulting to [`DurationKind::Time`]
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|raw| {
            let raw = raw.trim();
            Self::ALL
                .into_iter()
                .find(|kind| kind.key().eq_ignore_ascii_case(raw))
        })
        .unwrap_or_default()
    }

    /// Interchange projection
    #[must_use]
    pub fn interchange(self) -> StepTypeRef {
        StepTypeRef {
            step_type_id: self.step_type_id(),
            step_type_key: self.key().to_owned(),
        }
    }
}
