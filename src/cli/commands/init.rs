use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::store::JsonStore;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// This initializes:
///  - the config directory and file (skipped in test mode)
///  - an empty event catalog, unless one already exists
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.catalog.clone(), cli.test)?;
    let catalog = cfg.catalog_path();

    println!("⚙️  Initializing daydial…");
    if !cli.test {
        println!("📄 Config file : {}", Config::config_file().display());
    }
    println!("🗂️  Catalog     : {}", catalog.display());

    let store = JsonStore::new(&catalog);
    if store.init()? {
        log::info!("event=init catalog={} status=created", catalog.display());
        success(format!("Empty catalog created at {}", catalog.display()));
    } else {
        log::info!("event=init catalog={} status=existing", catalog.display());
        info(format!("Catalog already present at {}", catalog.display()));
    }

    println!("🎉 daydial initialization completed!");
    Ok(())
}
