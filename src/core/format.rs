//! Cell formatters: race clocks, finishing positions, dates and map links.

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::RaceTime;


/// Placeholder shown when a value cannot be rendered.
pub const NOT_AVAILABLE: &str = "N/A";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid millisecond value: {input:?}")]
    InvalidMillis { input: String },

    #[error("Invalid finishing position: {input:?}")]
    InvalidPosition { input: String },
}

const MILLIS_PER_SECOND: u64 = 1_000;
const MILLIS_PER_MINUTE: u64 = 60 * MILLIS_PER_SECOND;
const MILLIS_PER_HOUR: u64 = 60 * MILLIS_PER_MINUTE;

/// Render a duration as `H:mm:ss.SSS`. Hours are not padded and do not wrap
/// at a day boundary.
pub fn format_duration(millis: u64) -> String {
    let hours = millis / MILLIS_PER_HOUR;
    let minutes = (millis % MILLIS_PER_HOUR) / MILLIS_PER_MINUTE;
    let seconds = (millis % MILLIS_PER_MINUTE) / MILLIS_PER_SECOND;
    let ms = millis % MILLIS_PER_SECOND;

    format!("{hours}:{minutes:02}:{seconds:02}.{ms:03}")
}

/// Parse a millisecond count as sent by the API and render it as a clock.
pub fn format_clock(millis: &str) -> Result<String, FormatError> {
    let value = millis
        .trim()
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidMillis {
            input: millis.to_string(),
        })?;
    Ok(format_duration(value))
}

/// English ordinal for a finishing position: `1st`, `2nd`, `11th`, `21st`...
pub fn format_ordinal(position: &str) -> Result<String, FormatError> {
    let n = position
        .trim()
        .parse::<u64>()
        .map_err(|_| FormatError::InvalidPosition {
            input: position.to_string(),
        })?;

    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    Ok(format!("{n}{suffix}"))
}

/// Time column for a results row. Never fails: missing or malformed times
/// render as [`NOT_AVAILABLE`].
pub fn time_cell(time: Option<&RaceTime>) -> String {
    time.and_then(|t| format_clock(&t.millis).ok())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

/// Position column for a results row, falling back to the raw value.
pub fn position_cell(position: &str) -> String {
    format_ordinal(position).unwrap_or_else(|_| position.to_string())
}

/// `2023-03-05` -> `March 05, 2023`. Unparseable input is returned as-is.
pub fn format_race_date(date: &str) -> String {
    NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|d| d.format("%B %d, %Y").to_string())
        .unwrap_or_else(|_| date.to_string())
}

pub fn maps_url(lat: &str, long: &str) -> String {
    format!("https://www.google.com/maps/search/?api=1&query={lat},{long}")
}
