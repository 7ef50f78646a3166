// ABOUTME: Metric conversion and formatting operations for fitness activities
// ABOUTME: Distance, elevation, duration, pace, cadence, race labels, grouped numbers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Fitness Metrics Project

use crate::constants::display::{
    INVALID_NUMBER, PACE_UNAVAILABLE, PACE_ZERO, PLACEHOLDER_HH_MM_SS,
};
use crate::constants::time::{HOURS_PER_DAY, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::duration::{self, DurationLayout};
use crate::units::UnitSystem;

/// Decimal places used by the distance and elevation converters
const MEASURE_DECIMALS: u32 = 2;

/// Largest decimal-place count handled by the exact fixed-point path
const MAX_EXACT_PLACES: u32 = 17;

/// Scaled magnitudes at or above this fall back to the standard formatter
const MAX_EXACT_SCALED: f64 = 1e38;

/// Inclusive distance bands in meters for common race labels.
/// Bands are checked in order; 15500 m belongs to "15km", not "10mi".
const RACE_DISTANCE_BANDS: [(f64, f64, &str); 12] = [
    (800.0, 1_000.0, "1km"),
    (4_700.0, 5_300.0, "5km"),
    (9_600.0, 10_400.0, "10km"),
    (14_500.0, 15_500.0, "15km"),
    (15_500.0, 16_500.0, "10mi"),
    (20_600.0, 21_600.0, "HM"),
    (29_500.0, 30_500.0, "30km"),
    (41_800.0, 42_900.0, "FM"),
    (49_000.0, 51_000.0, "50km"),
    (98_000.0, 102_000.0, "100km"),
    (147_000.0, 153_000.0, "150km"),
    (156_000.0, 164_900.0, "100mi"),
];

/// Label for distances outside every race band
const RACE_DISTANCE_OTHER: &str = "Other";

/// Unit-conversion and display-formatting operations for activity metrics.
///
/// All operations are associated functions over primitive inputs; there is
/// no state and no I/O. Validation coverage is deliberately uneven: the
/// duration formatter, clock parser, pace converter, and grouped number
/// formatter fall back to fixed sentinels on invalid input, while the
/// distance, elevation, and cadence converters pass non-finite or negative
/// input straight through the arithmetic (a quirk preserved from the
/// behavior this crate reimplements; see each function's contract).
pub struct MetricsFormatter;

impl MetricsFormatter {
    /// Convert a distance in meters to kilometers or miles, fixed to two
    /// decimals, without a unit suffix.
    ///
    /// Not validated: negative input yields negative text and non-finite
    /// input yields `"NaN"`/`"inf"` text.
    #[must_use]
    pub fn convert_distance(meters: f64, units: UnitSystem) -> String {
        to_fixed(units.distance_from_meters(meters), MEASURE_DECIMALS)
    }

    /// Convert an elevation gain in meters to meters or feet, fixed to two
    /// decimals, with the unit suffix (`" m"` or `" ft"`) appended.
    ///
    /// Not validated, like [`Self::convert_distance`].
    #[must_use]
    pub fn convert_elevation_gain(meters: f64, units: UnitSystem) -> String {
        format!(
            "{}{}",
            to_fixed(units.elevation_from_meters(meters), MEASURE_DECIMALS),
            units.elevation_suffix()
        )
    }

    /// Format an elapsed time in seconds as a clock string.
    ///
    /// Zero, negative, or non-finite input yields the layout's placeholder
    /// (`"--:--"` short, `"--:--:--"` medium/long), the designed sentinel
    /// for "no duration". Otherwise the value is rounded to the nearest
    /// integer second and decomposed into days, hours, minutes, and
    /// seconds. All fields except the day count are zero-padded to a
    /// minimum width of 2.
    ///
    /// Layouts lose information deliberately: `Short` shows only the
    /// sub-hour remainder (a 1h05m duration renders `"05:00"`), and
    /// `Medium` drops whole days. Only `Long` is lossless.
    #[must_use]
    pub fn format_duration(seconds: f64, layout: DurationLayout) -> String {
        if !seconds.is_finite() || seconds <= 0.0 {
            return layout.placeholder().to_owned();
        }

        let total = seconds.round() as u64;
        let days = total / SECONDS_PER_DAY;
        let rem = total % SECONDS_PER_DAY;
        let hours = rem / SECONDS_PER_HOUR;
        let minutes = (rem % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let secs = rem % SECONDS_PER_MINUTE;

        match layout {
            DurationLayout::Short => format!("{minutes:02}:{secs:02}"),
            DurationLayout::Medium => format!("{hours:02}:{minutes:02}:{secs:02}"),
            DurationLayout::Long if days > 0 => {
                format!("{days}d {hours:02}:{minutes:02}:{secs:02}")
            }
            DurationLayout::Long => format!("{hours:02}:{minutes:02}:{secs:02}"),
        }
    }

    /// Parse a clock string (`HH:MM:SS` or `MM:SS`) into total seconds,
    /// returning `0` on any invalid input.
    ///
    /// This is the inverse of [`Self::format_duration`] for the `Medium`
    /// layout: the round trip holds for any duration under a day and
    /// breaks for day-bearing durations, whose days the layout drops.
    /// `0` is not an error signal, merely "unspecified"; callers that need
    /// the failure reason should use [`duration::parse_clock`] directly.
    #[must_use]
    pub fn hms_to_seconds(text: &str) -> u64 {
        match duration::parse_clock(text) {
            Ok(total) => total,
            Err(err) => {
                tracing::debug!(input = text, %err, "rejected clock string");
                0
            }
        }
    }

    /// Convert a speed in meters/second to a pace string per kilometer or
    /// per mile.
    ///
    /// Zero speed yields the fixed sentinel `"--:--:--"`. Otherwise the
    /// seconds-per-unit value is rounded to the nearest integer and
    /// rendered `HH:MM:SS` when at least an hour, `MM:SS` below that --
    /// unlike [`Self::format_duration`], no zero hour field is shown.
    /// Hours are unbounded.
    ///
    /// Negative or non-finite speed is not validated; the float-to-integer
    /// cast saturates, so such input clamps to `"00:00"` rather than
    /// producing NaN text.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn convert_speed_to_pace(speed: f64, units: UnitSystem) -> String {
        if speed == 0.0 {
            return PLACEHOLDER_HH_MM_SS.to_owned();
        }

        let seconds_per_unit = (units.meters_per_pace_unit() / speed).round();
        let total = seconds_per_unit as u64;
        let hours = total / SECONDS_PER_HOUR;
        let minutes = (total % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let secs = total % SECONDS_PER_MINUTE;

        if hours > 0 {
            format!("{hours:02}:{minutes:02}:{secs:02}")
        } else {
            format!("{minutes:02}:{secs:02}")
        }
    }

    /// Compute an average pace string per kilometer or per mile from a
    /// total distance and total elapsed time.
    ///
    /// The aggregate counterpart of [`Self::convert_speed_to_pace`] for
    /// summing whole activities or weekly totals, with its own display
    /// rules: minutes accumulate without ever rolling into an hours field,
    /// and the sub-minute remainder is truncated rather than rounded, so a
    /// 359.9 s/km pace renders `"05:59"`.
    ///
    /// Sentinels: non-positive distance or negative time yields `"N/A"`,
    /// and zero time over a real distance yields `"0:00"`. A non-finite
    /// quotient (NaN input, or infinite time) also yields `"N/A"`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn calculate_pace(distance_meters: f64, time_seconds: f64, units: UnitSystem) -> String {
        if distance_meters <= 0.0 || time_seconds < 0.0 {
            return PACE_UNAVAILABLE.to_owned();
        }
        if time_seconds == 0.0 {
            return PACE_ZERO.to_owned();
        }

        let seconds_per_unit = (time_seconds / distance_meters) * units.meters_per_pace_unit();
        if !seconds_per_unit.is_finite() {
            return PACE_UNAVAILABLE.to_owned();
        }

        let minutes = (seconds_per_unit / 60.0).floor() as u64;
        let secs = (seconds_per_unit % 60.0) as u64;
        format!("{minutes:02}:{secs:02}")
    }

    /// Convert a single-limb cadence to a bilateral step rate.
    ///
    /// Purely `cadence * 2`: no validation, no rounding. Providers report
    /// running cadence per leg; displays want total steps per minute.
    #[must_use]
    pub fn convert_cadence_to_steps(cadence: f64) -> f64 {
        cadence * 2.0
    }

    /// Format a number with thousands separators in the integer portion,
    /// fixed to `decimal_places` decimals (omitting the decimal point
    /// entirely when `decimal_places` is 0).
    ///
    /// Rounding is half-away-from-zero. NaN and infinite input return the
    /// sentinel `"Invalid Number"`.
    #[must_use]
    pub fn format_number_with_commas(value: f64, decimal_places: u32) -> String {
        if !value.is_finite() {
            return INVALID_NUMBER.to_owned();
        }

        let fixed = to_fixed(value, decimal_places);
        match fixed.split_once('.') {
            Some((int_part, frac_part)) => format!("{}.{frac_part}", group_thousands(int_part)),
            None => group_thousands(&fixed),
        }
    }

    /// Label a distance in meters with the race it most plausibly was
    /// (`"5km"`, `"HM"`, `"FM"`, ...), or `"Other"` outside every band.
    ///
    /// Bands are inclusive and tuned for the GPS wobble of recorded
    /// activities, e.g. anything within 41800..=42900 m counts as a full
    /// marathon.
    #[must_use]
    pub fn guess_race_distance(meters: f64) -> &'static str {
        RACE_DISTANCE_BANDS
            .iter()
            .find(|(lo, hi, _)| (*lo..=*hi).contains(&meters))
            .map_or(RACE_DISTANCE_OTHER, |&(_, _, label)| label)
    }

    /// Format an elapsed time with whole days folded into the hours field,
    /// rendered `H:MM:SS` with unbounded, unpadded hours.
    ///
    /// Companion to the `Long` layout for tabular contexts where a `"3d "`
    /// prefix would break column alignment. Negative, NaN, or non-finite
    /// input decomposes as zero (`"0:00:00"`); fractional seconds are
    /// truncated.
    #[must_use]
    pub fn format_duration_total_hours(seconds: f64) -> String {
        let total = if seconds.is_finite() && seconds > 0.0 {
            seconds as u64
        } else {
            0
        };
        let days = total / SECONDS_PER_DAY;
        let rem = total % SECONDS_PER_DAY;
        let hours = days * HOURS_PER_DAY + rem / SECONDS_PER_HOUR;
        let minutes = (rem % SECONDS_PER_HOUR) / SECONDS_PER_MINUTE;
        let secs = rem % SECONDS_PER_MINUTE;
        format!("{hours}:{minutes:02}:{secs:02}")
    }
}

/// Render `value` with exactly `places` decimals, rounding half away from
/// zero.
///
/// The standard formatter rounds ties to even, which disagrees with the
/// display convention for values like `0.125` or `1234.5`. Exact rounding
/// is done on a scaled integer; non-finite values, very large magnitudes,
/// and very large `places` fall back to the standard formatter.
fn to_fixed(value: f64, places: u32) -> String {
    if !value.is_finite() || places > MAX_EXACT_PLACES {
        let places = places as usize;
        return format!("{value:.places$}");
    }

    let scaled = (value * 10f64.powi(places as i32)).round();
    if scaled.abs() >= MAX_EXACT_SCALED {
        let places = places as usize;
        return format!("{value:.places$}");
    }

    let scaled = scaled as i128;
    let magnitude = scaled.unsigned_abs();
    let scale = 10u128.pow(places);
    let int_part = magnitude / scale;
    let frac_part = magnitude % scale;
    let sign = if scaled < 0 { "-" } else { "" };

    if places == 0 {
        format!("{sign}{int_part}")
    } else {
        let width = places as usize;
        format!("{sign}{int_part}.{frac_part:0width$}")
    }
}

/// Insert a comma every three digits from the right of a (possibly signed)
/// integer digit string. Fractional digits are never passed here.
fn group_thousands(integer: &str) -> String {
    let (sign, digits) = integer
        .strip_prefix('-')
        .map_or(("", integer), |rest| ("-", rest));

    let mut grouped = String::with_capacity(sign.len() + digits.len() + digits.len() / 3);
    grouped.push_str(sign);
    let offset = digits.len() % 3;
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + 3 - offset) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
