use super::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::store::EventStore;
use crate::ui::messages::{info, success};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let store = open_store(cfg);
        let event = store.find(id)?;

        //
        // Confirmation prompt
        //
        let prompt = format!(
            "Delete '{}' ({} {}-{})? This action is irreversible.",
            event.title,
            event.date_str(),
            event.start,
            event.end
        );
        if !*yes && !ask_confirmation(&prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        let removed = DeleteLogic::apply(&store, id)?;
        success(format!("Event '{}' has been deleted.", removed.title));
    }

    Ok(())
}
