use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::edit::EditLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Done { id, undo } = cmd {
        let store = open_store(cfg);
        let event = EditLogic::set_completed(&store, id, !*undo)?;

        if event.completed {
            success(format!("'{}' marked as completed.", event.title));
        } else {
            success(format!("'{}' marked as not completed.", event.title));
        }
    }

    Ok(())
}
