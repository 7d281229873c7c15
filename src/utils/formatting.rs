//! Formatting utilities used for CLI and export outputs.

use crate::core::dial::angle::angle_to_minutes;
use crate::models::ring::Ring;
use crate::utils::time::format_hhmm;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

pub fn mins2readable(mins: i64, want_sign: bool, short: bool) -> String {
    let abs_m = mins.abs();
    let hours = abs_m / 60;
    let minutes = abs_m % 60;

    let sign = if mins > 0 && want_sign {
        "+"
    } else if mins < 0 && want_sign {
        "-"
    } else {
        "" // zero → no sign
    };

    if short {
        // e.g. +02:25 or -01:10
        format!("{}{:02}:{:02}", sign, hours, minutes)
    } else {
        // e.g. +02h 25m or -01h 10m
        format!("{}{:02}h {:02}m", sign, hours, minutes)
    }
}

/// "120.0°–150.0°"
pub fn angle_range(start: f64, end: f64) -> String {
    format!("{:.1}°–{:.1}°", start, end)
}

/// Clock range covered by an angular span on `ring`, e.g. "08:00-09:30".
pub fn span_clock(ring: Ring, start_angle: f64, end_angle: f64) -> String {
    let to_clock = |angle: f64| {
        let minutes = angle_to_minutes(angle).round() as u32 + ring.offset_minutes();
        format_hhmm(minutes)
    };
    format!("{}-{}", to_clock(start_angle), to_clock(end_angle))
}
