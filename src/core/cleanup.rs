use crate::errors::AppResult;
use crate::models::event::Event;
use crate::store::EventStore;
use crate::utils::date::months_before;
use chrono::NaiveDate;

/// Age-based pruning of the catalog.
pub struct CleanupLogic;

impl CleanupLogic {
    /// Events kept by a cleanup of `months` relative to `today`.
    ///
    /// Recurring events are always kept: their anchor date says nothing about
    /// whether they are still current.
    pub fn retained(events: Vec<Event>, months: u32, today: NaiveDate) -> Vec<Event> {
        if months == 0 {
            return Vec::new();
        }
        let cutoff = months_before(today, months);
        events
            .into_iter()
            .filter(|e| e.date > cutoff || e.recurrence.is_recurring())
            .collect()
    }

    /// Prunes the store; `months == 0` clears it. Returns how many events
    /// were removed.
    pub fn apply(store: &dyn EventStore, months: u32, today: NaiveDate) -> AppResult<usize> {
        let events = store.load()?;
        let before = events.len();
        let kept = Self::retained(events, months, today);
        let removed = before - kept.len();

        store.save(&kept)?;
        log::info!(
            "event=catalog_cleanup months={} removed={} kept={}",
            months,
            removed,
            kept.len()
        );

        Ok(removed)
    }
}
