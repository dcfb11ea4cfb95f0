use crate::cli::parser::Cli;
use crate::config::Config;
use crate::db::SchedulerStore;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command
///
/// Creates the config directory and file (unless `--test`), then opens the
/// database, which applies the schema and seeds default categories/settings.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let cfg = Config::init_all(cli.db.as_deref(), cli.test)?;

    info("Initializing superscheduler…");
    if !cli.test {
        info(format!("Config file : {}", Config::config_file().display()));
    }
    info(format!("Database    : {}", cfg.database));

    let mut store = SchedulerStore::open(&cfg.database)?;
    let counts = (
        store.count::<crate::models::Category>()?,
        store.count::<crate::models::Setting>()?,
    );
    store.close()?;

    success(format!(
        "Database initialized at {} ({} categories, {} settings)",
        cfg.database, counts.0, counts.1
    ));
    Ok(())
}
