// ABOUTME: Application-wide constants organized by domain
// ABOUTME: Conversion factors, time unit sizes, and display sentinels
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

/// Unit conversion factors between base metric units and display units
pub mod conversions {
    /// Meters in one kilometer
    pub const METERS_PER_KILOMETER: f64 = 1000.0;
    /// Meters in one statute mile
    pub const METERS_PER_MILE: f64 = 1609.34;
    /// Miles in one meter
    pub const MILES_PER_METER: f64 = 0.000_621_371;
    /// Feet in one meter
    pub const FEET_PER_METER: f64 = 3.280_84;
}

/// Time unit sizes used for duration decomposition
pub mod time {
    /// Seconds in one minute
    pub const SECONDS_PER_MINUTE: u64 = 60;
    /// Seconds in one hour
    pub const SECONDS_PER_HOUR: u64 = 3600;
    /// Seconds in one day
    pub const SECONDS_PER_DAY: u64 = 86_400;
    /// Hours in one day
    pub const HOURS_PER_DAY: u64 = 24;
}

/// Fixed sentinel strings returned for unknown or invalid values
pub mod display {
    /// Placeholder for an unknown duration in `MM:SS` layouts
    pub const PLACEHOLDER_MM_SS: &str = "--:--";
    /// Placeholder for an unknown duration or pace in `HH:MM:SS` layouts
    pub const PLACEHOLDER_HH_MM_SS: &str = "--:--:--";
    /// Sentinel returned by the grouped number formatter for non-numeric input
    pub const INVALID_NUMBER: &str = "Invalid Number";
    /// Sentinel for a pace that cannot be computed (no distance covered)
    pub const PACE_UNAVAILABLE: &str = "N/A";
    /// Pace rendered for an instantaneous effort (zero time over a real distance)
    pub const PACE_ZERO: &str = "0:00";
    /// Unit suffix appended to metric elevation values
    pub const SUFFIX_METERS: &str = " m";
    /// Unit suffix appended to imperial elevation values
    pub const SUFFIX_FEET: &str = " ft";
}
