//! Utility functions for value formatting

use time::macros::format_description;
use time::OffsetDateTime;

/// Format a timestamp for the page footer and logs
///
/// Converts an OffsetDateTime to DD.MM.YYYY - HH:MM:SS format.
/// Falls back to default string representation if formatting fails.
pub fn format_datetime(dt: &OffsetDateTime) -> String {
    dt.format(format_description!("[day].[month].[year] - [hour]:[minute]:[second]"))
        .unwrap_or_else(|_| dt.to_string())
}

/// Scale, round half away from zero, scale back
///
/// The rounding applies to the scaled value, so a binary value just below a
/// half (0.15 is stored as 0.1499...) can still round up once multiplied.
fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Temperature with exactly one decimal (24.5 -> "24.5", 23.0 -> "23.0")
pub fn format_temperature(celsius: f64) -> String {
    format!("{:.1}", round_to(celsius, 1))
}

/// Humidity with no decimals, halves rounded away from zero (52.5 -> "53")
pub fn format_humidity(percent: f64) -> String {
    format!("{:.0}", round_to(percent, 0))
}
