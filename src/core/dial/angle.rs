//! Dial coordinate conversions.
//!
//! Angles are in degrees, 0° at 12 o'clock and increasing clockwise. One ring
//! covers 12 hours, so 720 minutes map onto 360°.

use serde::Serialize;

pub const MINUTES_PER_RING: f64 = 720.0;
pub const DEGREES_PER_MINUTE: f64 = 360.0 / MINUTES_PER_RING;
pub const DEGREES_PER_HOUR: f64 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

pub fn polar_to_cartesian(center_x: f64, center_y: f64, radius: f64, angle_deg: f64) -> Point {
    let rad = (angle_deg - 90.0).to_radians();
    Point {
        x: center_x + radius * rad.cos(),
        y: center_y + radius * rad.sin(),
    }
}

/// Maps a 0..=720 minute value (relative to the ring start) to degrees.
pub fn minutes_to_angle(minutes: f64) -> f64 {
    minutes * DEGREES_PER_MINUTE
}

pub fn angle_to_minutes(angle: f64) -> f64 {
    angle / DEGREES_PER_MINUTE
}

/// Brings any finite angle into `[0, 360)`.
pub fn normalize_angle(angle: f64) -> f64 {
    let a = angle.rem_euclid(360.0);
    if a >= 360.0 { 0.0 } else { a }
}

fn large_arc_flag(start_angle: f64, end_angle: f64) -> u8 {
    let mut diff = end_angle - start_angle;
    if diff < 0.0 {
        diff += 360.0;
    }
    if diff <= 180.0 { 0 } else { 1 }
}

/// SVG path for a circular arc, drawn from `end_angle` back to `start_angle`.
pub fn describe_arc(x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64) -> String {
    let start = polar_to_cartesian(x, y, radius, end_angle);
    let end = polar_to_cartesian(x, y, radius, start_angle);
    let flag = large_arc_flag(start_angle, end_angle);

    format!(
        "M {} {} A {} {} 0 {} 0 {} {}",
        fmt_coord(start.x),
        fmt_coord(start.y),
        fmt_coord(radius),
        fmt_coord(radius),
        flag,
        fmt_coord(end.x),
        fmt_coord(end.y)
    )
}

/// SVG path for a closed annular sector between two radii.
pub fn describe_donut_slice(
    x: f64,
    y: f64,
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    end_angle: f64,
) -> String {
    let start_outer = polar_to_cartesian(x, y, outer_radius, end_angle);
    let end_outer = polar_to_cartesian(x, y, outer_radius, start_angle);
    let start_inner = polar_to_cartesian(x, y, inner_radius, end_angle);
    let end_inner = polar_to_cartesian(x, y, inner_radius, start_angle);
    let flag = large_arc_flag(start_angle, end_angle);

    format!(
        "M {} {} A {} {} 0 {} 0 {} {} L {} {} A {} {} 0 {} 1 {} {} Z",
        fmt_coord(start_outer.x),
        fmt_coord(start_outer.y),
        fmt_coord(outer_radius),
        fmt_coord(outer_radius),
        flag,
        fmt_coord(end_outer.x),
        fmt_coord(end_outer.y),
        fmt_coord(end_inner.x),
        fmt_coord(end_inner.y),
        fmt_coord(inner_radius),
        fmt_coord(inner_radius),
        flag,
        fmt_coord(start_inner.x),
        fmt_coord(start_inner.y)
    )
}

// Three decimals keeps paths stable across platforms.
fn fmt_coord(v: f64) -> String {
    let rounded = (v * 1000.0).round() / 1000.0;
    if rounded == 0.0 {
        "0".to_string()
    } else {
        format!("{}", rounded)
    }
}
