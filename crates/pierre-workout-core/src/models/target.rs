// ABOUTME: Physiological target kinds a workout step can constrain
// ABOUTME: Binary codes fall back to 0 and interchange pairs fall back to noTarget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::interchange::StepTargetRef;

/// Binary target code meaning "no target"
pub const NO_TARGET_CODE: u8 = 0;

/// Signal a step aims to keep within a range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TargetKind {
    /// Heart rate
    HeartRate,
    /// Speed
    Speed,
    /// Power
    Power,
    /// Cadence
    Cadence,
    /// Pace
    Pace,
}

impl TargetKind {
    /// Every target kind
    pub const ALL: [Self; 5] = [
        Self::HeartRate,
        Self::Speed,
        Self::Power,
        Self::Cadence,
        Self::Pace,
    ];

    /// Canonical key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::HeartRate => "heartRate",
            Self::Speed => "speed",
            Self::Power => "power",
            Self::Cadence => "cadence",
            Self::Pace => "pace",
        }
    }

    /// Look up a target kind by key, ignoring ASCII case
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        Self::ALL
            .into_iter()
            .find(|kind| kind.key().eq_ignore_ascii_case(raw))
    }

    /// Target code in the binary workout format
    #[must_use]
    pub const fn fit_code(self) -> u8 {
        match self {
            Self::HeartRate => 1,
            Self::Speed => 3,
            Self::Power => 5,
            Self::Cadence => 7,
            Self::Pace => 9,
        }
    }

    /// Binary target code for a raw key, [`NO_TARGET_CODE`] when unknown or absent
    #[must_use]
    pub fn resolve_fit_code(raw: Option<&str>) -> u8 {
        raw.and_then(Self::parse).map_or(NO_TARGET_CODE, Self::fit_code)
    }

    /// Step target id used by the import tool
    ///
    /// Heart rate differs from its binary code: the import tool numbers it `2`.
    #[must_use]
    pub const fn step_target_id(self) -> u32 {
        match self {
            Self::HeartRate => 2,
            Self::Speed => 3,
            Self::Power => 5,
            Self::Cadence => 7,
            Self::Pace => 9,
        }
    }

    /// Interchange projection
    #[must_use]
    pub fn interchange(self) -> StepTargetRef {
        StepTargetRef {
            step_target_id: self.step_target_id(),
            step_target_key: self.key().to_owned(),
        }
    }

    /// Interchange pair for a raw key, the `noTarget` sentinel when unknown or absent
    #[must_use]
    pub fn resolve_interchange(raw: Option<&str>) -> StepTargetRef {
        raw.and_then(Self::parse)
            .map_or_else(StepTargetRef::no_target, Self::interchange)
    }
}
