use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::models::recurrence::Recurrence;
use crate::ui::messages::success;
use crate::utils::date;
use crate::utils::time::parse_time_arg;

/// Strict parsing of a `--recurrence` value.
pub(crate) fn parse_recurrence(input: &str) -> AppResult<Recurrence> {
    Recurrence::from_code(input).ok_or_else(|| {
        AppError::InvalidRecurrence(format!(
            "'{}'. Use one of: none, daily, weekly, monthly",
            input
        ))
    })
}

/// Add a new event to the catalog.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
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
        //
        // 1. Parse date and times (mandatory)
        //
        let d = date::parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let start = parse_time_arg(start)?;
        let end = parse_time_arg(end)?;

        //
        // 2. Optional fields
        //
        let rec = match recurrence {
            Some(r) => parse_recurrence(r)?,
            None => Recurrence::None,
        };

        let mut event = Event::new(title, d, &start, &end).with_recurrence(rec);
        event.color = color.clone().unwrap_or_default();
        event.category = category.clone().unwrap_or_default();
        event.description = description.clone().unwrap_or_default();

        //
        // 3. Store
        //
        let store = open_store(cfg);
        let stored = AddLogic::apply(&store, event)?;

        success(format!(
            "Added '{}' on {} {}-{} ({}) id={}",
            stored.title,
            stored.date_str(),
            stored.start,
            stored.end,
            stored.recurrence.as_str(),
            stored.id
        ));
    }

    Ok(())
}
