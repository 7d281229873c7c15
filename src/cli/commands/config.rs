use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::config::ConfigLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

/// Handle the `config` subcommand
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Config {
        print_config,
        edit_config,
        editor,
    } = cmd
    {
        if *print_config {
            println!("📄 Current configuration:\n");
            println!("{}", ConfigLogic::render(cfg)?);
        }

        if *edit_config {
            let path = Config::config_file();
            if !path.exists() {
                info("No configuration file yet: writing defaults first.");
                std::fs::create_dir_all(Config::config_dir())?;
                cfg.save()?;
            }
            ConfigLogic::edit(&path, editor)?;
        }

        if !*print_config && !*edit_config {
            info(format!("Config file: {}", Config::config_file().display()));
        }
    }

    Ok(())
}
