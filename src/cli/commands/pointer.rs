use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::core::dial::pointer::{DragGesture, PointerInput, Selection, point_to_polar, segment_at};
use crate::core::logic::Core;
use crate::errors::{AppError, AppResult};
use crate::models::event::Event;
use crate::ui::messages::{info, success};
use crate::utils::date;

/// Parses "X,Y" into a dial coordinate.
pub(crate) fn parse_point(input: &str) -> AppResult<(f64, f64)> {
    let (x, y) = input
        .split_once(',')
        .ok_or_else(|| AppError::InvalidPoint(format!("'{}' (expected X,Y)", input)))?;

    let parse = |v: &str| {
        v.trim()
            .parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .ok_or_else(|| AppError::InvalidPoint(format!("'{}' (expected X,Y)", input)))
    };

    Ok((parse(x)?, parse(y)?))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pointer {
        date: d,
        down,
        moves,
        up,
        locked,
        add,
    } = cmd
    {
        let day = date::resolve_date(d.as_ref())?;
        let geometry = cfg.dial;
        let store = open_store(cfg);

        let down = parse_point(down)?;
        let moves = moves
            .iter()
            .map(|m| parse_point(m))
            .collect::<AppResult<Vec<_>>>()?;
        let up = up.as_deref().map(parse_point).transpose()?;

        // Replay the gesture through the drag state machine.
        let mut inputs = vec![PointerInput::Down { x: down.0, y: down.1 }];
        inputs.extend(moves.iter().map(|&(x, y)| PointerInput::Move { x, y }));
        inputs.push(match up {
            Some((x, y)) => PointerInput::Up { x, y },
            None => PointerInput::Leave,
        });

        let mut gesture = DragGesture::new(*locked);
        let mut selection = None;
        for input in inputs {
            let (next, emitted) = gesture.apply(input, &geometry);
            gesture = next;
            selection = selection.or(emitted);
        }

        let Some(selection) = selection else {
            info("Dial is locked: gesture ignored.");
            return Ok(());
        };

        let polar = point_to_polar(down.0, down.1, geometry.center());
        log::debug!(
            "event=pointer date={} distance={:.1} angle={:.1} selection={:?}",
            day,
            polar.distance,
            polar.angle,
            selection
        );

        // A tap on an existing arc selects that event instead of a slot.
        if let Selection::Tap { .. } = selection {
            let request = Core::request_for(cfg, day, None, false);
            let layout = Core::day_layout(&store, &request)?;
            if let Some(seg) = segment_at(&layout, &geometry, down.0, down.1) {
                println!("Selected event '{}' id={}", seg.title, seg.source_id);
                return Ok(());
            }
        }

        match &selection {
            Selection::Tap { hour24 } => println!("Selected hour {}", hour24),
            Selection::Range { start, end } => println!("Selected range {}-{}", start, end),
        }

        if let Some(title) = add {
            let (start, end) = selection.times();
            let stored = AddLogic::apply(&store, Event::new(title, day, &start, &end))?;
            success(format!(
                "Added '{}' on {} {}-{} id={}",
                stored.title,
                stored.date_str(),
                stored.start,
                stored.end,
                stored.id
            ));
        }
    }

    Ok(())
}
