// ABOUTME: Measurement system selection for distance, elevation, and pace output
// ABOUTME: Explicit metric/imperial enum replacing boolean unit flags at call sites
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::conversions::{
    FEET_PER_METER, METERS_PER_KILOMETER, METERS_PER_MILE, MILES_PER_METER,
};
use crate::constants::display::{SUFFIX_FEET, SUFFIX_METERS};

/// Measurement system controlling which derived unit and conversion factor
/// apply to distance, elevation, and pace output.
///
/// An explicit two-value enum rather than a `use_metric` boolean: boolean
/// unit flags read ambiguously at call sites, while the conversion behavior
/// here is identical either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UnitSystem {
    /// Kilometers, meters, pace per kilometer (default)
    #[default]
    Metric,
    /// Miles, feet, pace per mile
    Imperial,
}

impl UnitSystem {
    /// Parse system from string parameter (case-insensitive)
    /// Returns `Metric` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "imperial" => Self::Imperial,
            _ => Self::Metric,
        }
    }

    /// Get the system name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Metric => "metric",
            Self::Imperial => "imperial",
        }
    }

    /// Convert a distance in meters to this system's display unit
    /// (kilometers or miles)
    #[must_use]
    pub fn distance_from_meters(self, meters: f64) -> f64 {
        match self {
            Self::Metric => meters / METERS_PER_KILOMETER,
            Self::Imperial => meters * MILES_PER_METER,
        }
    }

    /// Convert an elevation gain in meters to this system's display unit
    /// (meters or feet)
    #[must_use]
    pub fn elevation_from_meters(self, meters: f64) -> f64 {
        match self {
            Self::Metric => meters,
            Self::Imperial => meters * FEET_PER_METER,
        }
    }

    /// Unit suffix appended to formatted elevation values
    #[must_use]
    pub const fn elevation_suffix(self) -> &'static str {
        match self {
            Self::Metric => SUFFIX_METERS,
            Self::Imperial => SUFFIX_FEET,
        }
    }

    /// Meters in one pace unit (kilometer or mile)
    #[must_use]
    pub const fn meters_per_pace_unit(self) -> f64 {
        match self {
            Self::Metric => METERS_PER_KILOMETER,
            Self::Imperial => METERS_PER_MILE,
        }
    }
}

impl fmt::Display for UnitSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
