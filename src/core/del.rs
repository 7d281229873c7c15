use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::store::EventStore;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Removes the event with `id` and returns it.
    pub fn apply(store: &dyn EventStore, id: &str) -> AppResult<Event> {
        let mut events = store.load()?;

        let idx = events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))?;
        let removed = events.remove(idx);

        store.save(&events)?;
        log::info!("event=catalog_delete id={} title={:?}", removed.id, removed.title);

        Ok(removed)
    }
}
