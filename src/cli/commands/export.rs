use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::logic::Core;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        date: d,
        format,
        file,
        focus,
        no_sleep,
        force,
    } = cmd
    {
        let day = date::resolve_date(d.as_ref())?;
        let request = Core::request_for(cfg, day, focus.clone(), !*no_sleep);

        let store = open_store(cfg);
        let layout = Core::day_layout(&store, &request)?;
        ExportLogic::export(&layout, &cfg.dial, *format, file, *force)?;
    }
    Ok(())
}
