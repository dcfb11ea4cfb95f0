use crate::cli::commands::open_store;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::io::{self, Write};

fn confirm() -> AppResult<bool> {
    warning("This deletes every event and task. Categories and settings are kept.");
    print!("Continue? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(matches!(
        answer.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

pub fn handle(yes: bool, cfg: &Config) -> AppResult<()> {
    if !yes && !confirm()? {
        info("Nothing deleted.");
        return Ok(());
    }

    let store = open_store(cfg)?;
    store.clear_all_data()?;
    success("All events and tasks deleted.");
    Ok(())
}
