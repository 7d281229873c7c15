//! Day layout: projection, ring segmentation, tracks and gaps.

use super::interval::{Interval, free_intervals};
use super::projector::project_day;
use super::rings::{segment_minutes, segment_times};
use super::tracks::{assign_tracks, track_count};
use crate::models::event::Event;
use crate::models::occurrence::Occurrence;
use crate::models::ring::Ring;
use crate::models::segment::{Gap, RingSpan, Segment};
use chrono::NaiveDate;
use serde::Serialize;

/// Sleep period drawn as blocked arcs. It never affects tracks or gaps.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SleepWindow {
    pub start: String,
    pub end: String,
}

#[derive(Debug, Clone)]
pub struct LayoutRequest {
    pub date: NaiveDate,
    pub focus: Option<String>,
    pub sleep: Option<SleepWindow>,
}

impl LayoutRequest {
    pub fn for_date(date: NaiveDate) -> Self {
        Self {
            date,
            focus: None,
            sleep: None,
        }
    }

    pub fn with_focus(mut self, focus: Option<String>) -> Self {
        self.focus = focus;
        self
    }

    pub fn with_sleep(mut self, sleep: Option<SleepWindow>) -> Self {
        self.sleep = sleep;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RingLayout {
    pub ring: Ring,
    /// In track-assignment order: ascending start angle, ties in input order.
    pub segments: Vec<Segment>,
    pub gaps: Vec<Gap>,
    pub track_count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DayLayout {
    pub date: NaiveDate,
    pub focus: Option<String>,
    pub rings: Vec<RingLayout>,
    pub sleep: Vec<RingSpan>,
    #[serde(skip)]
    pub occurrences: Vec<Occurrence>,
}

impl DayLayout {
    pub fn ring(&self, ring: Ring) -> Option<&RingLayout> {
        self.rings.iter().find(|r| r.ring == ring)
    }

    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.rings.iter().flat_map(|r| r.segments.iter())
    }

    pub fn gaps(&self) -> impl Iterator<Item = &Gap> {
        self.rings.iter().flat_map(|r| r.gaps.iter())
    }

    /// A segment renders at full emphasis when nothing is focused or when it
    /// belongs to the focused event.
    pub fn is_emphasized(&self, segment: &Segment) -> bool {
        match &self.focus {
            Some(id) => *id == segment.source_id,
            None => true,
        }
    }
}

pub fn build_day_layout(events: &[Event], request: &LayoutRequest) -> DayLayout {
    let occurrences = project_day(events, request.date);

    let raw: Vec<(RingSpan, &Occurrence)> = occurrences
        .iter()
        .flat_map(|occ| {
            segment_minutes(occ.start_minutes(), occ.end_minutes())
                .into_iter()
                .map(move |span| (span, occ))
        })
        .collect();

    let rings = Ring::ALL
        .iter()
        .map(|&ring| layout_ring(ring, &raw))
        .collect();

    let sleep = request
        .sleep
        .as_ref()
        .map(|w| segment_times(&w.start, &w.end))
        .unwrap_or_default();

    log::debug!(
        "event=layout date={} occurrences={} spans={} focus={}",
        request.date,
        occurrences.len(),
        raw.len(),
        request.focus.as_deref().unwrap_or("-")
    );

    DayLayout {
        date: request.date,
        focus: request.focus.clone(),
        rings,
        sleep,
        occurrences,
    }
}

fn layout_ring(ring: Ring, raw: &[(RingSpan, &Occurrence)]) -> RingLayout {
    let on_ring: Vec<&(RingSpan, &Occurrence)> =
        raw.iter().filter(|(span, _)| span.ring == ring).collect();

    let intervals: Vec<Interval> = on_ring
        .iter()
        .map(|(span, _)| Interval::new(span.start_angle, span.end_angle))
        .collect();

    let placements = assign_tracks(&intervals);

    let segments = placements
        .iter()
        .map(|p| {
            let (span, occ) = on_ring[p.index];
            Segment {
                source_id: occ.event.id.clone(),
                title: occ.event.title.clone(),
                color: occ.event.color.clone(),
                completed: occ.event.completed,
                ring,
                start_angle: span.start_angle,
                end_angle: span.end_angle,
                track: p.track,
            }
        })
        .collect();

    // Gaps come from the raw spans: stacking on tracks does not free time.
    let gaps = free_intervals(&intervals, 360.0)
        .into_iter()
        .map(|iv| Gap {
            ring,
            start_angle: iv.start,
            end_angle: iv.end,
        })
        .collect();

    RingLayout {
        ring,
        segments,
        gaps,
        track_count: track_count(&placements),
    }
}
