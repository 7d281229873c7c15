use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::models::occurrence::Occurrence;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_recurrence, dim_if, paint};
use crate::utils::date;
use crate::utils::mins2readable;
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { date: d, now } = cmd {
        let day = if *now {
            date::today()
        } else {
            date::resolve_date(d.as_ref())?
        };

        let store = open_store(cfg);
        let occurrences = Core::occurrences(&store, day)?;

        if occurrences.is_empty() {
            info(format!("No events for {}", day));
            return Ok(());
        }

        print_occurrences(&day, &occurrences);
    }
    Ok(())
}

fn print_occurrences(day: &NaiveDate, occurrences: &[Occurrence]) {
    header(format!("{} ({})", day, day.format("%A")));

    let mut table = Table::new(vec![
        Column::new("TIME", 11),
        Column::new("DURATION", 9),
        Column::new("TITLE", 28),
        Column::new("REPEAT", 8),
        Column::new("CATEGORY", 14),
        Column::new("ID", 36),
    ]);

    for occ in occurrences {
        let ev = &occ.event;
        table.add_row(vec![
            format!("{}-{}", ev.start, ev.end),
            mins2readable(occ.duration_minutes(), false, false),
            if ev.completed {
                format!("✔ {}", ev.title)
            } else {
                ev.title.clone()
            },
            ev.recurrence.as_str().to_string(),
            ev.category.clone(),
            ev.id.clone(),
        ]);
    }

    // Colour whole lines after padding so ANSI codes do not skew widths.
    let rendered = table.render();
    for (i, line) in rendered.lines().enumerate() {
        match i.checked_sub(2).and_then(|row| occurrences.get(row)) {
            Some(occ) if occ.event.completed => println!("{}", dim_if(line, true)),
            Some(occ) => println!("{}", paint(line, color_for_recurrence(occ.event.recurrence))),
            None => println!("{}", line),
        }
    }

    let total: i64 = occurrences.iter().map(|o| o.duration_minutes()).sum();
    println!("\n{} event(s), {} scheduled", occurrences.len(), mins2readable(total, false, false));
}
