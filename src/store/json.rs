//! JSON file catalog.
//!
//! Reads both a bare array of events and the backup layout
//! `{ "events": [...], ... }`; always writes the latter.

use super::EventStore;
use crate::errors::AppResult;
use crate::models::event::Event;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    Bare(Vec<Event>),
    Full {
        #[serde(default)]
        events: Vec<Event>,
    },
}

#[derive(Serialize)]
struct CatalogOut<'a> {
    events: &'a [Event],
}

pub struct JsonStore {
    pub path: PathBuf,
}

impl JsonStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Creates an empty catalog unless the file already exists.
    pub fn init(&self) -> AppResult<bool> {
        if self.path.exists() {
            return Ok(false);
        }
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        self.save(&[])?;
        Ok(true)
    }
}

impl EventStore for JsonStore {
    fn load(&self) -> AppResult<Vec<Event>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let events = match serde_json::from_str::<CatalogFile>(&content)? {
            CatalogFile::Bare(events) => events,
            CatalogFile::Full { events } => events,
        };
        Ok(events)
    }

    fn save(&self, events: &[Event]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(&CatalogOut { events })?;
        fs::write(&self.path, json)?;
        Ok(())
    }
}
