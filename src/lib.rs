//! daydial library root.
//! Exposes the radial layout engine, the CLI parser and the high-level run()
//! function used by the binary.

pub mod cli;
pub mod config;
pub mod core;
pub mod errors;
pub mod export;
pub mod logging;
pub mod models;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use ui::messages::warning;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::Edit { .. } => cli::commands::edit::handle(&cli.command, cfg),
        Commands::Done { .. } => cli::commands::done::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Dial { .. } => cli::commands::dial::handle(&cli.command, cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Pointer { .. } => cli::commands::pointer::handle(&cli.command, cfg),
        Commands::Cleanup { .. } => cli::commands::cleanup::handle(&cli.command, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    // 1️⃣ parse CLI
    let cli = Cli::parse();

    // 2️⃣ load config once
    let mut cfg = Config::load()?;

    // 3️⃣ command-line catalog override
    if let Some(custom) = &cli.catalog {
        cfg.catalog = custom.clone();
    }

    // 4️⃣ file logging (never blocks the command)
    if !cli.test
        && let Err(e) = logging::init_logging(&cfg.log_level, &Config::log_dir())
    {
        warning(format!("File logging disabled: {}", e));
    }

    dispatch(&cli, &cfg)
}
