use super::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::cleanup::CleanupLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Cleanup { months, yes } = cmd {
        let prompt = if *months == 0 {
            "Remove ALL events from the catalog? This action is irreversible.".to_string()
        } else {
            format!(
                "Remove non-recurring events older than {} month(s)? Recurring events are kept.",
                months
            )
        };

        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let store = open_store(cfg);
        let removed = CleanupLogic::apply(&store, *months, date::today())?;
        success(format!("Cleanup done: {} event(s) removed.", removed));
    }

    Ok(())
}
