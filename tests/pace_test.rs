// ABOUTME: Tests for speed-to-pace conversion in both unit systems
// ABOUTME: Covers the zero-speed sentinel, hour rendering, and saturating casts
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

use fitness_metrics::{MetricsFormatter, UnitSystem};

#[test]
fn test_zero_speed_yields_sentinel() {
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(0.0, UnitSystem::Metric),
        "--:--:--"
    );
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(0.0, UnitSystem::Imperial),
        "--:--:--"
    );
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(-0.0, UnitSystem::Metric),
        "--:--:--"
    );
}

#[test]
fn test_metric_pace_sub_hour() {
    // A 5:00/km pace corresponds to 1000 m per 300 s
    let speed = 1000.0 / 300.0;
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(speed, UnitSystem::Metric),
        "05:00"
    );
    // 5 m/s is 3:20/km
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(5.0, UnitSystem::Metric),
        "03:20"
    );
}

#[test]
fn test_imperial_pace_sub_hour() {
    let speed = 1609.34 / 300.0;
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(speed, UnitSystem::Imperial),
        "05:00"
    );
    // 2 m/s is 804.67 s/mi, rounded to 805 s
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(2.0, UnitSystem::Imperial),
        "13:25"
    );
}

#[test]
fn test_pace_shows_hours_only_when_nonzero() {
    // 0.05 m/s is 20000 s/km
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(0.05, UnitSystem::Metric),
        "05:33:20"
    );
    // Hours are unbounded and padded to a minimum of two digits
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(0.002, UnitSystem::Metric),
        "138:53:20"
    );
}

#[test]
fn test_pace_same_speed_differs_by_unit_system() {
    let speed = 3.0;
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(speed, UnitSystem::Metric),
        "05:33"
    );
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(speed, UnitSystem::Imperial),
        "08:56"
    );
}

#[test]
fn test_calculate_pace_from_totals() {
    // 10 km in 50 minutes averages 5:00/km
    assert_eq!(
        MetricsFormatter::calculate_pace(10_000.0, 3000.0, UnitSystem::Metric),
        "05:00"
    );
    // The same effort per mile: 482.802 s, truncated to 8:02
    assert_eq!(
        MetricsFormatter::calculate_pace(10_000.0, 3000.0, UnitSystem::Imperial),
        "08:02"
    );
}

#[test]
fn test_calculate_pace_truncates_and_never_shows_hours() {
    // 359.9 s/km truncates to 05:59 where the speed converter would round up
    assert_eq!(
        MetricsFormatter::calculate_pace(1000.0, 359.9, UnitSystem::Metric),
        "05:59"
    );
    // Very slow efforts accumulate minutes instead of rolling into hours
    assert_eq!(
        MetricsFormatter::calculate_pace(1000.0, 7200.0, UnitSystem::Metric),
        "120:00"
    );
}

#[test]
fn test_calculate_pace_sentinels() {
    assert_eq!(
        MetricsFormatter::calculate_pace(0.0, 100.0, UnitSystem::Metric),
        "N/A"
    );
    assert_eq!(
        MetricsFormatter::calculate_pace(-5.0, 100.0, UnitSystem::Metric),
        "N/A"
    );
    assert_eq!(
        MetricsFormatter::calculate_pace(1000.0, -1.0, UnitSystem::Metric),
        "N/A"
    );
    assert_eq!(
        MetricsFormatter::calculate_pace(1000.0, 0.0, UnitSystem::Metric),
        "0:00"
    );
}

#[test]
fn test_calculate_pace_non_finite_input_is_unavailable() {
    assert_eq!(
        MetricsFormatter::calculate_pace(1000.0, f64::INFINITY, UnitSystem::Metric),
        "N/A"
    );
    assert_eq!(
        MetricsFormatter::calculate_pace(f64::NAN, 100.0, UnitSystem::Metric),
        "N/A"
    );
    // Infinite distance collapses the quotient to zero seconds per unit
    assert_eq!(
        MetricsFormatter::calculate_pace(f64::INFINITY, 100.0, UnitSystem::Metric),
        "00:00"
    );
}

#[test]
fn test_invalid_speed_clamps_instead_of_nan_text() {
    // Unvalidated input: the float-to-integer cast saturates negative and
    // NaN paces to zero seconds.
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(-2.0, UnitSystem::Metric),
        "00:00"
    );
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(f64::NAN, UnitSystem::Metric),
        "00:00"
    );
    assert_eq!(
        MetricsFormatter::convert_speed_to_pace(f64::INFINITY, UnitSystem::Metric),
        "00:00"
    );
}
