//! Pointer mapping: dial coordinates back to clock times.
//!
//! A gesture is either a tap on an hour slot or a drag across a time range.
//! The drag state is an owned value threaded through [`DragGesture::apply`],
//! so the state machine runs without any drawing surface.

use super::angle::{DEGREES_PER_HOUR, angle_to_minutes, normalize_angle};
use super::layout::DayLayout;
use crate::models::geometry::DialGeometry;
use crate::models::ring::Ring;
use crate::models::segment::Segment;
use crate::utils::time::{MINUTES_PER_DAY, format_hhmm};
use serde::Serialize;

/// Snapping step for drags: 7.5° is 15 minutes on a 12-hour ring.
pub const SNAP_DEGREES: f64 = 7.5;

/// Below this angular travel a gesture counts as a tap.
pub const CLICK_EPSILON_DEGREES: f64 = 2.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Polar {
    pub distance: f64,
    pub angle: f64,
}

/// Inverse of `polar_to_cartesian`: 0° at 12 o'clock, clockwise.
pub fn point_to_polar(x: f64, y: f64, center: (f64, f64)) -> Polar {
    let dx = x - center.0;
    let dy = y - center.1;
    let angle = normalize_angle(dy.atan2(dx).to_degrees() + 90.0);
    Polar {
        distance: dx.hypot(dy),
        angle,
    }
}

/// Rounds to the nearest snap step. 360 stays 360 so a drag ending at the
/// top of the dial still means the end of the ring.
pub fn snap_angle(angle: f64) -> f64 {
    (angle / SNAP_DEGREES).round() * SNAP_DEGREES
}

/// 24-hour bucket of the hour slot under `angle` on `ring`.
pub fn hour_at(angle: f64, ring: Ring) -> u32 {
    let bucket = (normalize_angle(angle) / DEGREES_PER_HOUR).floor() as u32;
    (bucket + ring.hour_offset()) % 24
}

/// "HH:MM" for `angle` on `ring`, minutes rounded to the quarter hour.
///
/// Angles from 360 up to 720 continue onto the following ring: 360 on AM is
/// noon, 360 on PM is midnight.
pub fn time_at(angle: f64, ring: Ring) -> String {
    let quarters = (angle_to_minutes(angle.rem_euclid(720.0)) / 15.0).round() as u32;
    format_hhmm((quarters * 15 + ring.offset_minutes()) % MINUTES_PER_DAY)
}

/// Outcome of a finished gesture, handed to the event-creation side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Selection {
    Tap { hour24: u32 },
    Range { start: String, end: String },
}

impl Selection {
    /// Start/end times for a new event. A tap books the whole hour.
    pub fn times(&self) -> (String, String) {
        match self {
            Selection::Tap { hour24 } => (
                format!("{:02}:00", hour24),
                format!("{:02}:00", (hour24 + 1) % 24),
            ),
            Selection::Range { start, end } => (start.clone(), end.clone()),
        }
    }
}

/// Resolves a pointer-down / pointer-up pair into a tap or a range.
pub fn resolve_gesture(down: (f64, f64), up: (f64, f64), geometry: &DialGeometry) -> Selection {
    let center = geometry.center();
    let from = point_to_polar(down.0, down.1, center);
    let to = point_to_polar(up.0, up.1, center);
    let ring = geometry.ring_at(from.distance);
    let (snapped_from, snapped_to) = (snap_angle(from.angle), snap_angle(to.angle));

    // A drag that never leaves its snap step would be an empty range.
    if angular_distance(from.angle, to.angle) < CLICK_EPSILON_DEGREES
        || angular_distance(snapped_from, snapped_to) < CLICK_EPSILON_DEGREES
    {
        return Selection::Tap {
            hour24: hour_at(from.angle, ring),
        };
    }

    // Follow the shorter way round: a clockwise drag may run past the top
    // onto the next ring, a counter-clockwise one keeps down as the start.
    let start = normalize_angle(snapped_from);
    let sweep = (snapped_to - start).rem_euclid(360.0);
    let end = if sweep <= 180.0 {
        start + sweep
    } else {
        normalize_angle(snapped_to)
    };

    Selection::Range {
        start: time_at(start, ring),
        end: time_at(end, ring),
    }
}

/// Shortest distance between two angles around the dial.
pub fn angular_distance(a: f64, b: f64) -> f64 {
    let d = (normalize_angle(a) - normalize_angle(b)).abs();
    d.min(360.0 - d)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerInput {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up { x: f64, y: f64 },
    Leave,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        start: (f64, f64),
        current: (f64, f64),
    },
}

/// Drag state owned by the caller. `locked` disables new gestures.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DragGesture {
    pub phase: DragPhase,
    pub locked: bool,
}

impl DragGesture {
    pub fn new(locked: bool) -> Self {
        Self {
            phase: DragPhase::Idle,
            locked,
        }
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    /// Idle → Dragging on down (unlocked only), Dragging stays on move,
    /// Dragging → Idle on up or leave, which both emit the selection.
    pub fn apply(self, input: PointerInput, geometry: &DialGeometry) -> (Self, Option<Selection>) {
        match (self.phase, input) {
            (DragPhase::Idle, PointerInput::Down { x, y }) if !self.locked => (
                Self {
                    phase: DragPhase::Dragging {
                        start: (x, y),
                        current: (x, y),
                    },
                    ..self
                },
                None,
            ),
            (DragPhase::Dragging { start, .. }, PointerInput::Move { x, y }) => (
                Self {
                    phase: DragPhase::Dragging {
                        start,
                        current: (x, y),
                    },
                    ..self
                },
                None,
            ),
            (DragPhase::Dragging { start, .. }, PointerInput::Up { x, y }) => (
                Self {
                    phase: DragPhase::Idle,
                    ..self
                },
                Some(resolve_gesture(start, (x, y), geometry)),
            ),
            (DragPhase::Dragging { start, current }, PointerInput::Leave) => (
                Self {
                    phase: DragPhase::Idle,
                    ..self
                },
                Some(resolve_gesture(start, current, geometry)),
            ),
            _ => (self, None),
        }
    }
}

/// Segment whose drawn arc lies under `(x, y)`, topmost track first.
pub fn segment_at<'a>(
    layout: &'a DayLayout,
    geometry: &DialGeometry,
    x: f64,
    y: f64,
) -> Option<&'a Segment> {
    let polar = point_to_polar(x, y, geometry.center());
    let half_band = geometry.stroke_width / 2.0;

    layout
        .segments()
        .filter(|s| {
            let radius = geometry.track_radius(s.ring, s.track);
            (polar.distance - radius).abs() <= half_band
                && polar.angle >= s.start_angle
                && polar.angle < s.end_angle
        })
        .max_by_key(|s| s.track)
}
