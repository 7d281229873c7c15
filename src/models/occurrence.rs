use super::event::Event;
use chrono::{NaiveDateTime, NaiveTime};
use serde::Serialize;

/// An event made concrete for one target day.
///
/// `event.date` holds the target day and `event.start` / `event.end` hold the
/// clipped bounds as "HH:MM" ("24:00" when the occurrence runs up to the next
/// midnight). Recomputed on every render and never stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    pub event: Event,
    pub effective_start: NaiveDateTime,
    pub effective_end: NaiveDateTime,
}

impl Occurrence {
    /// Minute-of-day of the clipped start, in 0..1440.
    pub fn start_minutes(&self) -> u32 {
        minutes_from_day_start(self, self.effective_start)
    }

    /// Minute-of-day of the clipped end, in 1..=1440.
    pub fn end_minutes(&self) -> u32 {
        minutes_from_day_start(self, self.effective_end)
    }

    pub fn duration_minutes(&self) -> i64 {
        (self.effective_end - self.effective_start).num_minutes()
    }
}

fn minutes_from_day_start(occ: &Occurrence, at: NaiveDateTime) -> u32 {
    let day_start = occ.event.date.and_time(NaiveTime::MIN);
    (at - day_start).num_minutes().clamp(0, 1440) as u32
}
