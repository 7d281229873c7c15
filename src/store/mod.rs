//! Event catalog persistence.
//!
//! The layout engine only ever sees a slice of events; where they live is up
//! to an [`EventStore`]. The CLI uses the JSON file store.

pub mod json;

use crate::errors::{AppError, AppResult};
use crate::models::event::Event;

pub use json::JsonStore;

pub trait EventStore {
    fn load(&self) -> AppResult<Vec<Event>>;
    fn save(&self, events: &[Event]) -> AppResult<()>;

    fn find(&self, id: &str) -> AppResult<Event> {
        self.load()?
            .into_iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::EventNotFound(id.to_string()))
    }
}
