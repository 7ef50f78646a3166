// ABOUTME: Unit conversion and display formatting for fitness activity metrics
// ABOUTME: Pure functions over meters, meters/second, and seconds with sentinel fallbacks
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

#![deny(unsafe_code)]

//! # Fitness Metrics
//!
//! Pure unit-conversion and display-formatting layer for fitness activity
//! metrics: distance, elevation gain, duration, pace, cadence, and large
//! counts, plus the inverse parse of clock-style duration strings back into
//! seconds.
//!
//! Every operation is synchronous, side-effect-free, and total. Invalid
//! input never panics and never surfaces an error to the caller: each
//! function either produces a well-formed value or falls back to a fixed
//! sentinel (`"--:--"`/`"--:--:--"`, `0` seconds, `"Invalid Number"`), so
//! callers always receive something renderable.
//!
//! ## Modules
//!
//! - **formatter**: [`MetricsFormatter`], the metric operations themselves
//! - **units**: [`UnitSystem`] selector (metric vs. imperial) and raw
//!   meter-based conversions
//! - **duration**: [`DurationLayout`] display layouts and the typed
//!   clock-string parser
//! - **notify**: the [`Notifier`] capability trait for surfacing transient
//!   user-facing messages
//! - **constants**: conversion factors, time unit sizes, and display
//!   sentinels organized by domain
//!
//! ## Example
//!
//! ```rust
//! use fitness_metrics::{DurationLayout, MetricsFormatter, UnitSystem};
//!
//! let distance = MetricsFormatter::convert_distance(10_000.0, UnitSystem::Metric);
//! assert_eq!(distance, "10.00");
//!
//! let elapsed = MetricsFormatter::format_duration(3930.0, DurationLayout::Medium);
//! assert_eq!(elapsed, "01:05:30");
//!
//! assert_eq!(MetricsFormatter::hms_to_seconds("01:05:30"), 3930);
//! ```

/// Conversion factors, time unit sizes, and display sentinels
pub mod constants;

/// Duration display layouts and clock-string parsing
pub mod duration;

/// Metric conversion and formatting operations
pub mod formatter;

/// Notification capability trait and severity tags
pub mod notify;

/// Measurement system selection and meter-based conversions
pub mod units;

pub use duration::{ClockParseError, DurationLayout};
pub use formatter::MetricsFormatter;
pub use notify::{Notifier, Severity, TracingNotifier};
pub use units::UnitSystem;
