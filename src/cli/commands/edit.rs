use super::add::parse_recurrence;
use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::{AppError, AppResult};
use crate::store::EventStore;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_optional_time;

/// Rewrite an existing event with the given fields changed.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        title,
        start,
        end,
        recurrence,
        color,
        category,
        description,
    } = cmd
    {
        let store = open_store(cfg);
        let mut event = store.find(id)?;

        if let Some(d) = date {
            event.date = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
        }
        if let Some(t) = title {
            event.title = t.clone();
        }
        if let Some(s) = parse_optional_time(start.as_ref())? {
            event.start = s;
        }
        if let Some(e) = parse_optional_time(end.as_ref())? {
            event.end = e;
        }
        if let Some(r) = recurrence {
            event.recurrence = parse_recurrence(r)?;
        }
        if let Some(c) = color {
            event.color = c.clone();
        }
        if let Some(c) = category {
            event.category = c.clone();
        }
        if let Some(d) = description {
            event.description = d.clone();
        }

        let stored = EditLogic::replace(&store, event)?;
        success(format!(
            "Updated '{}' on {} {}-{} ({})",
            stored.title,
            stored.date_str(),
            stored.start,
            stored.end,
            stored.recurrence.as_str()
        ));
    }

    Ok(())
}
