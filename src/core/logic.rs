use crate::config::Config;
use crate::core::dial::layout::{DayLayout, LayoutRequest, SleepWindow, build_day_layout};
use crate::core::dial::projector::project_day;
use crate::errors::AppResult;
use crate::models::occurrence::Occurrence;
use crate::store::EventStore;
use chrono::NaiveDate;

pub struct Core;

impl Core {
    /// Builds the layout request for `date` from the configuration.
    pub fn request_for(cfg: &Config, date: NaiveDate, focus: Option<String>, show_sleep: bool) -> LayoutRequest {
        let sleep = (show_sleep && cfg.show_sleep).then(|| SleepWindow {
            start: cfg.sleep_start.clone(),
            end: cfg.sleep_end.clone(),
        });

        LayoutRequest::for_date(date).with_focus(focus).with_sleep(sleep)
    }

    pub fn day_layout(store: &dyn EventStore, request: &LayoutRequest) -> AppResult<DayLayout> {
        let events = store.load()?;
        Ok(build_day_layout(&events, request))
    }

    pub fn occurrences(store: &dyn EventStore, date: NaiveDate) -> AppResult<Vec<Occurrence>> {
        let events = store.load()?;
        Ok(project_day(&events, date))
    }
}
