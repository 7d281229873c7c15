use crate::errors::AppResult;
use crate::models::event::Event;
use crate::store::EventStore;
use uuid::Uuid;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Appends `event` to the catalog, assigning an id when it has none.
    /// Returns the stored record.
    pub fn apply(store: &dyn EventStore, mut event: Event) -> AppResult<Event> {
        if event.id.trim().is_empty() {
            event.id = Uuid::new_v4().to_string();
        }

        let mut events = store.load()?;
        events.push(event.clone());
        store.save(&events)?;

        log::info!(
            "event=catalog_add id={} date={} start={} end={} recurrence={}",
            event.id,
            event.date_str(),
            event.start,
            event.end,
            event.recurrence.as_str()
        );

        Ok(event)
    }
}
