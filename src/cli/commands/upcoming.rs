use crate::cli::commands::open_store;
use crate::cli::commands::task::render;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};

pub fn handle(days: Option<u32>, cfg: &Config) -> AppResult<()> {
    let days = days.unwrap_or(cfg.upcoming_days);
    let store = open_store(cfg)?;
    let tasks = store.upcoming_tasks(days)?;

    if tasks.is_empty() {
        info(format!("Nothing due in the next {days} day(s)."));
        return Ok(());
    }

    header(format!("Upcoming tasks ({days} day window)"));
    print!("{}", render(&tasks));
    Ok(())
}
