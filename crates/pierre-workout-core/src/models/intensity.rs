// ABOUTME: Step intensity categories with their binary codes and interchange pairs
// ABOUTME: Unknown or absent intensities resolve to active in both output formats
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use serde::{Deserialize, Serialize};

use super::interchange::IntensityRef;

/// Qualitative category of a workout step
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Intensity {
    /// Warm-up block
    Warmup,
    /// Main work block
    #[default]
    Active,
    /// Cool-down block
    Cooldown,
    /// Recovery between efforts
    Rest,
}

impl Intensity {
    /// Every intensity category
    pub const ALL: [Self; 4] = [Self::Warmup, Self::Active, Self::Cooldown, Self::Rest];

    /// Canonical key
    #[must_use]
    pub const fn key(self) -> &'static str {
        match self {
            Self::Warmup => "warmup",
            Self::Active => "active",
            Self::Cooldown => "cooldown",
            Self::Rest => "rest",
        }
    }

    /// Intensity code in the binary workout format
    #[must_use]
    pub const fn fit_code(self) -> u8 {
        match self {
            Self::Warmup => 0,
            Self::Active => 1,
            Self::Cooldown => 2,
            Self::Rest => 3,
        }
    }

    /// Resolve a raw step intensity, defaulting to [`Intensity::Active`]
    #[must_use]
    pub fn resolve(raw: Option<&str>) -> Self {
        raw.and_then(|raw| {
            let raw = raw.trim();
            Self::ALL
                .into_iter()
                .find(|intensity| intensity.key().eq_ignore_ascii_case(raw))
        })
        .unwrap_or_default()
    }

    /// Interchange projection
    #[must_use]
    pub fn interchange(self) -> IntensityRef {
        IntensityRef {
            intensity_id: u32::from(self.fit_code()),
            intensity_key: self.key().to_owned(),
        }
    }
}
