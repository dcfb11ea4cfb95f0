use crate::cli::commands::open_store;
use crate::cli::parser::SettingAction;
use crate::config::Config;
use crate::db::log::ttlog_quiet;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};

pub fn handle(action: &SettingAction, cfg: &Config) -> AppResult<()> {
    let store = open_store(cfg)?;

    match action {
        SettingAction::Get { key } => match store.get_setting(key) {
            Some(value) => println!("{value}"),
            None => warning(format!("Setting '{key}' is not set.")),
        },

        SettingAction::Set { key, value } => {
            if !store.set_setting(key, value) {
                return Err(AppError::Other(format!("could not store setting '{key}'")));
            }
            ttlog_quiet(store.conn()?, "update", &format!("settings/{key}"), value);
            success(format!("{key} = {value}"));
        }

        SettingAction::List => {
            let settings = store.settings()?;
            let width = settings.keys().map(|k| k.len()).max().unwrap_or(0);
            for (key, value) in &settings {
                println!("{key:<width$}  {value}");
            }
        }
    }

    Ok(())
}
