//! Time utilities: parsing HH:MM, minute-of-day conversions, formatting.

use crate::errors::{AppError, AppResult};
use chrono::NaiveTime;

pub const MINUTES_PER_DAY: u32 = 1440;

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Strict validation for user input. "24:00" is accepted as the end of day.
pub fn parse_time_arg(t: &str) -> AppResult<String> {
    if t.trim() == "24:00" {
        return Ok("24:00".to_string());
    }
    let parsed = parse_time(t).ok_or_else(|| AppError::InvalidTime(t.to_string()))?;
    Ok(parsed.format("%H:%M").to_string())
}

pub fn parse_optional_time(input: Option<&String>) -> AppResult<Option<String>> {
    input.map(|s| parse_time_arg(s)).transpose()
}

/// Minute-of-day of an "HH:MM" string, never failing.
///
/// An unparseable or out-of-range hour/minute component counts as zero, so a
/// single malformed record cannot take the dial down. "24:00" maps to 1440.
pub fn lenient_minutes(t: &str) -> u32 {
    let mut parts = t.trim().splitn(2, ':');
    let hour = parts
        .next()
        .and_then(|h| h.trim().parse::<u32>().ok())
        .unwrap_or(0);
    let minute = parts
        .next()
        .and_then(|m| m.trim().parse::<u32>().ok())
        .filter(|m| *m < 60)
        .unwrap_or(0);

    match hour {
        24 if minute == 0 => MINUTES_PER_DAY,
        h if h < 24 => h * 60 + minute,
        _ => minute,
    }
}

/// Formats a minute-of-day as "HH:MM"; 1440 renders as "24:00".
pub fn format_hhmm(minutes: u32) -> String {
    if minutes >= MINUTES_PER_DAY {
        return "24:00".to_string();
    }
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
