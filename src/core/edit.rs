use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::store::EventStore;

/// Whole-record replacement of stored events. There is no partial update:
/// callers load a record, change it and hand the full record back.
pub struct EditLogic;

impl EditLogic {
    pub fn replace(store: &dyn EventStore, event: Event) -> AppResult<Event> {
        let mut events = store.load()?;

        let slot = events
            .iter_mut()
            .find(|e| e.id == event.id)
            .ok_or_else(|| AppError::EventNotFound(event.id.clone()))?;
        *slot = event.clone();

        store.save(&events)?;
        log::info!("event=catalog_replace id={}", event.id);

        Ok(event)
    }

    pub fn set_completed(store: &dyn EventStore, id: &str, completed: bool) -> AppResult<Event> {
        let mut event = store.find(id)?;
        event.completed = completed;
        Self::replace(store, event)
    }
}
