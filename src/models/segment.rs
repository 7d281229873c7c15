use super::ring::Ring;
use serde::Serialize;

/// A ring-tagged angular span, `0 <= start_angle < end_angle <= 360`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RingSpan {
    pub ring: Ring,
    pub start_angle: f64,
    pub end_angle: f64,
}

/// Drawable arc of one event on one ring.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub source_id: String,
    pub title: String,
    pub color: String,
    pub completed: bool,
    pub ring: Ring,
    pub start_angle: f64,
    pub end_angle: f64,
    pub track: usize,
}

/// Free time on a ring.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Gap {
    pub ring: Ring,
    pub start_angle: f64,
    pub end_angle: f64,
}
