use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::backup::BackupLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Backup {
        file,
        compress,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        BackupLogic::backup(&store, file, *compress, *force)?;
    }

    Ok(())
}
