pub mod add;
pub mod cleanup;
pub mod config;
pub mod del;
pub mod dial;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod pointer;

use crate::config::Config;
use crate::store::JsonStore;
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Catalog store configured for this run.
pub(crate) fn open_store(cfg: &Config) -> JsonStore {
    JsonStore::new(cfg.catalog_path())
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
