use super::recurrence::Recurrence;
use crate::utils::time::lenient_minutes;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    #[serde(default)]
    pub id: String, // opaque, assigned on creation
    #[serde(default)]
    pub title: String,
    pub date: NaiveDate, // anchor / first occurrence ("YYYY-MM-DD")
    pub start: String,   // "HH:MM"
    pub end: String,     // "HH:MM", <= start means the event crosses midnight
    #[serde(default)]
    pub recurrence: Recurrence,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub completed: bool,
}

impl Event {
    /// Builds a non-recurring event with empty metadata; the id is assigned
    /// by the catalog when the event is added.
    pub fn new(title: &str, date: NaiveDate, start: &str, end: &str) -> Self {
        Self {
            id: String::new(),
            title: title.to_string(),
            date,
            start: start.to_string(),
            end: end.to_string(),
            recurrence: Recurrence::None,
            color: String::new(),
            category: String::new(),
            description: String::new(),
            completed: false,
        }
    }

    pub fn with_recurrence(mut self, recurrence: Recurrence) -> Self {
        self.recurrence = recurrence;
        self
    }

    pub fn with_id(mut self, id: &str) -> Self {
        self.id = id.to_string();
        self
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    pub fn start_minutes(&self) -> u32 {
        lenient_minutes(&self.start)
    }

    pub fn end_minutes(&self) -> u32 {
        lenient_minutes(&self.end)
    }

    /// True when `end <= start`, i.e. the event rolls past midnight.
    pub fn crosses_midnight(&self) -> bool {
        self.end_minutes() <= self.start_minutes()
    }

    /// Start/end date-times of the occurrence anchored on `day`, applying the
    /// midnight rollover rule.
    pub fn bounds_on(&self, day: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        let midnight = day.and_time(NaiveTime::MIN);
        let start = midnight + chrono::Duration::minutes(self.start_minutes() as i64);
        let mut end = midnight + chrono::Duration::minutes(self.end_minutes() as i64);
        if end <= start {
            end += chrono::Duration::days(1);
        }
        (start, end)
    }

    /// Start/end of the anchor occurrence (on `date`).
    pub fn base_bounds(&self) -> (NaiveDateTime, NaiveDateTime) {
        self.bounds_on(self.date)
    }
}
