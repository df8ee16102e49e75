// ABOUTME: Fixed values for the binary workout file identity and artifact naming
// ABOUTME: Groups FIT protocol constants, file extensions, and request defaults by domain
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Constants module

/// Constants stamped onto the binary file identity record
pub mod fit {
    /// File type tag for workout files
    pub const FILE_TYPE_WORKOUT: &str = "workout";

    /// Manufacturer tag reserved for development tooling
    pub const MANUFACTURER_DEVELOPMENT: &str = "development";

    /// Product number written into the file identity
    pub const PRODUCT_ID: u16 = 1;

    /// Serial number written into the file identity
    pub const SERIAL_NUMBER: u32 = 12345;

    /// Seconds between the Unix epoch and the FIT epoch (1989-12-31T00:00:00Z)
    pub const FIT_EPOCH_OFFSET_SECS: i64 = 631_065_600;

    /// Duration type written on every binary step record and interchange `duration.type`
    pub const DURATION_TYPE_TIME: &str = "time";
}

/// Constants for the interchange document
pub mod interchange {
    /// Order of the single segment emitted per workout
    pub const SEGMENT_ORDER: u32 = 1;
}

/// Artifact naming
pub mod files {
    /// Extension of the binary workout artifact
    pub const FIT_EXTENSION: &str = "fit";

    /// Extension of the interchange JSON artifact
    pub const JSON_EXTENSION: &str = "json";
}

/// Request defaults applied when the caller omits a value
pub mod defaults {
    /// Sport used when no sport is given
    pub const SPORT: &str = "running";

    /// Sub-sport used when no sub-sport is given
    pub const SUB_SPORT: &str = "generic";
}
