//! Projection of the event catalog onto one calendar day.

use crate::models::event::Event;
use crate::models::occurrence::Occurrence;
use crate::models::recurrence::Recurrence;
use crate::utils::date::day_window;
use crate::utils::time::format_hhmm;
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Returns the occurrences touching `target`, clipped to its window and
/// sorted by start time (stable on ties).
pub fn project_day(events: &[Event], target: NaiveDate) -> Vec<Occurrence> {
    let mut out: Vec<Occurrence> = events
        .iter()
        .filter_map(|e| project_event(e, target))
        .collect();

    out.sort_by_key(|o| o.start_minutes());
    out
}

/// Projects a single event, or `None` when it does not touch `target`.
pub fn project_event(event: &Event, target: NaiveDate) -> Option<Occurrence> {
    let (day_start, day_end) = day_window(target);
    let (base_start, base_end) = event.base_bounds();

    let (start, end) = match event.recurrence {
        Recurrence::Daily => event.bounds_on(target),
        Recurrence::Weekly if base_start.weekday() == target.weekday() => {
            event.bounds_on(target)
        }
        Recurrence::Monthly if base_start.day() == target.day() => event.bounds_on(target),
        Recurrence::Weekly | Recurrence::Monthly => return None,
        Recurrence::None => {
            let touches = event.date == target || (base_start < day_end && base_end > day_start);
            if !touches {
                return None;
            }
            (base_start, base_end)
        }
    };

    let shown_start = start.max(day_start);
    let shown_end = end.min(day_end);
    if shown_start >= shown_end {
        return None;
    }

    Some(Occurrence {
        event: Event {
            date: target,
            start: clock_label(shown_start, day_start),
            end: clock_label(shown_end, day_start),
            ..event.clone()
        },
        effective_start: shown_start,
        effective_end: shown_end,
    })
}

fn clock_label(at: NaiveDateTime, day_start: NaiveDateTime) -> String {
    format_hhmm((at - day_start).num_minutes().clamp(0, 1440) as u32)
}
