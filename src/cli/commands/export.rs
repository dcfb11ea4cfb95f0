use crate::cli::commands::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::export::ExportLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        collection,
        force,
    } = cmd
    {
        let store = open_store(cfg)?;
        ExportLogic::export(&store, *format, *collection, file, *force)?;
    }
    Ok(())
}
