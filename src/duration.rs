// ABOUTME: Duration display layouts and strict clock-string parsing
// ABOUTME: Typed parser for HH:MM:SS and MM:SS text with per-field validation
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::display::{PLACEHOLDER_HH_MM_SS, PLACEHOLDER_MM_SS};
use crate::constants::time::{SECONDS_PER_HOUR, SECONDS_PER_MINUTE};

/// Display layout for formatted durations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationLayout {
    /// `HH:MM:SS`, prefixed with an unpadded `{days}d ` once the duration
    /// reaches a full day (default)
    #[default]
    Long,
    /// `HH:MM:SS`; the day component is dropped silently, so multi-day
    /// durations lose information in this layout
    Medium,
    /// `MM:SS`; only the sub-hour remainder of the duration is shown
    Short,
}

impl DurationLayout {
    /// Parse layout from string parameter (case-insensitive)
    /// Returns `Long` for unrecognized values
    #[must_use]
    pub fn from_str_param(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "medium" => Self::Medium,
            "short" => Self::Short,
            _ => Self::Long,
        }
    }

    /// Get the layout name as a string
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Long => "long",
            Self::Medium => "medium",
            Self::Short => "short",
        }
    }

    /// Placeholder rendered for an unknown or non-positive duration
    #[must_use]
    pub const fn placeholder(self) -> &'static str {
        match self {
            Self::Long | Self::Medium => PLACEHOLDER_HH_MM_SS,
            Self::Short => PLACEHOLDER_MM_SS,
        }
    }
}

/// Reason a clock string was rejected
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockParseError {
    /// Input was empty after trimming surrounding whitespace
    #[error("clock string is empty")]
    Empty,
    /// Input did not have 2 (`MM:SS`) or 3 (`HH:MM:SS`) colon-separated fields
    #[error("expected 2 or 3 colon-separated fields, found {0}")]
    FieldCount(usize),
    /// A field did not parse as a base-10 non-negative integer
    #[error("field `{0}` is not a non-negative integer")]
    InvalidField(String),
    /// Minutes or seconds outside `[0, 60)`
    #[error("{unit} value {value} is outside 0..60")]
    FieldOutOfRange {
        /// Which field broke the bound ("minutes" or "seconds")
        unit: &'static str,
        /// The parsed value of that field
        value: u64,
    },
}

/// Parse a clock string (`HH:MM:SS` or `MM:SS`) into total seconds.
///
/// The leading field (hours in the 3-field form, minutes in the 2-field
/// form) is unbounded above; every other field must be in `[0, 60)`. Fields
/// must be base-10 non-negative integers, so signs, fractions, and stray
/// characters are all rejected. Surrounding whitespace is ignored.
///
/// # Errors
/// Returns a [`ClockParseError`] describing the first rule the input broke.
pub fn parse_clock(text: &str) -> Result<u64, ClockParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ClockParseError::Empty);
    }

    let fields: Vec<&str> = trimmed.split(':').collect();
    match fields.as_slice() {
        &[hours, minutes, seconds] => {
            let hours = open_field(hours)?;
            let minutes = bounded_field(minutes, "minutes")?;
            let seconds = bounded_field(seconds, "seconds")?;
            // Saturate on absurd hour counts rather than overflow
            Ok(hours
                .saturating_mul(SECONDS_PER_HOUR)
                .saturating_add(minutes * SECONDS_PER_MINUTE + seconds))
        }
        &[minutes, seconds] => {
            let minutes = open_field(minutes)?;
            let seconds = bounded_field(seconds, "seconds")?;
            Ok(minutes
                .saturating_mul(SECONDS_PER_MINUTE)
                .saturating_add(seconds))
        }
        other => Err(ClockParseError::FieldCount(other.len())),
    }
}

/// Parse a field with no upper bound (hours, or minutes in `MM:SS`)
fn open_field(field: &str) -> Result<u64, ClockParseError> {
    field
        .parse::<u64>()
        .map_err(|_| ClockParseError::InvalidField(field.to_owned()))
}

/// Parse a field that must stay below one minute's worth of its unit
fn bounded_field(field: &str, unit: &'static str) -> Result<u64, ClockParseError> {
    let value = open_field(field)?;
    if value >= SECONDS_PER_MINUTE {
        return Err(ClockParseError::FieldOutOfRange { unit, value });
    }
    Ok(value)
}
