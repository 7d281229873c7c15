use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dial::layout::{DayLayout, RingLayout};
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_ring, dim_if, paint};
use crate::utils::date;
use crate::utils::formatting::{angle_range, bold, span_clock};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dial {
        date: d,
        focus,
        no_sleep,
    } = cmd
    {
        let day = date::resolve_date(d.as_ref())?;
        let request = Core::request_for(cfg, day, focus.clone(), !*no_sleep);

        let store = open_store(cfg);
        let layout = Core::day_layout(&store, &request)?;

        print_layout(&layout);
    }
    Ok(())
}

fn print_layout(layout: &DayLayout) {
    header(format!("{} ({})", layout.date, layout.date.format("%A")));

    if let Some(id) = &layout.focus {
        println!("{} {}\n", bold("FOCUS MODE:"), id);
    }

    for ring in &layout.rings {
        print_ring(layout, ring);
    }

    if !layout.sleep.is_empty() {
        let spans: Vec<String> = layout
            .sleep
            .iter()
            .map(|s| format!("{} {}", s.ring.code(), span_clock(s.ring, s.start_angle, s.end_angle)))
            .collect();
        println!("😴 Sleep: {}", spans.join(", "));
    }

    println!("📅 {} event(s)", layout.occurrences.len());
}

fn print_ring(layout: &DayLayout, ring: &RingLayout) {
    println!(
        "{} ring — {} segment(s), {} track(s)",
        paint(ring.ring.code(), color_for_ring(ring.ring)),
        ring.segments.len(),
        ring.track_count
    );

    let mut table = Table::new(vec![
        Column::new("KIND", 5),
        Column::new("TRACK", 5),
        Column::new("ANGLES", 16),
        Column::new("TIME", 11),
        Column::new("TITLE", 28),
    ]);

    let mut dimmed = Vec::new();
    for seg in &ring.segments {
        table.add_row(vec![
            "event".to_string(),
            seg.track.to_string(),
            angle_range(seg.start_angle, seg.end_angle),
            span_clock(seg.ring, seg.start_angle, seg.end_angle),
            seg.title.clone(),
        ]);
        dimmed.push(!layout.is_emphasized(seg) || seg.completed);
    }
    for gap in &ring.gaps {
        table.add_row(vec![
            "free".to_string(),
            "-".to_string(),
            angle_range(gap.start_angle, gap.end_angle),
            span_clock(gap.ring, gap.start_angle, gap.end_angle),
            String::new(),
        ]);
        dimmed.push(true);
    }

    for (i, line) in table.render().lines().enumerate() {
        let dim = i.checked_sub(2).and_then(|row| dimmed.get(row)).copied().unwrap_or(false);
        println!("{}", dim_if(line, dim));
    }
    println!();
}
