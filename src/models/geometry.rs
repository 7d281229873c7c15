use super::ring::Ring;
use serde::{Deserialize, Serialize};

/// Physical layout of the dial, in drawing units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DialGeometry {
    pub size: f64,
    pub am_base_radius: f64,
    pub pm_base_radius: f64,
    /// Radial distance between two consecutive tracks.
    pub track_step: f64,
    pub stroke_width: f64,
    pub am_click_inner: f64,
    pub am_click_outer: f64,
    pub pm_click_inner: f64,
    pub pm_click_outer: f64,
}

impl Default for DialGeometry {
    fn default() -> Self {
        Self {
            size: 400.0,
            am_base_radius: 85.0,
            pm_base_radius: 145.0,
            track_step: 12.0,
            stroke_width: 10.0,
            am_click_inner: 40.0,
            am_click_outer: 110.0,
            pm_click_inner: 130.0,
            pm_click_outer: 190.0,
        }
    }
}

impl DialGeometry {
    pub fn center(&self) -> (f64, f64) {
        (self.size / 2.0, self.size / 2.0)
    }

    pub fn base_radius(&self, ring: Ring) -> f64 {
        match ring {
            Ring::Am => self.am_base_radius,
            Ring::Pm => self.pm_base_radius,
        }
    }

    /// Radius of the arc drawn for `track` on `ring`.
    pub fn track_radius(&self, ring: Ring, track: usize) -> f64 {
        self.base_radius(ring) + track as f64 * self.track_step
    }

    /// Radius separating the two rings for pointer selection.
    pub fn ring_boundary(&self) -> f64 {
        (self.am_base_radius + self.pm_base_radius) / 2.0
    }

    pub fn ring_at(&self, distance: f64) -> Ring {
        if distance < self.ring_boundary() {
            Ring::Am
        } else {
            Ring::Pm
        }
    }
}
