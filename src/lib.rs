//! superscheduler library root.
//! Exposes the persistence layer (store, date rules, upcoming filter,
//! offline cache) plus the CLI parser and the high-level run() function.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod models;
pub mod offline;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::commands;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;

pub use db::{SchedulerStore, StoreLocation};

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => commands::init::handle(cli),
        Commands::Config { .. } => commands::config::handle(&cli.command, cfg),
        Commands::Db { .. } => commands::db::handle(&cli.command, cfg),
        Commands::Log { .. } => commands::log::handle(&cli.command, cfg),
        Commands::Event { action } => commands::event::handle(action, cfg),
        Commands::Task { action } => commands::task::handle(action, cfg),
        Commands::Upcoming { days } => commands::upcoming::handle(*days, cfg),
        Commands::Category { action } => commands::category::handle(action, cfg),
        Commands::Setting { action } => commands::setting::handle(action, cfg),
        Commands::Clear { yes } => commands::clear::handle(*yes, cfg),
        Commands::Backup { .. } => commands::backup::handle(&cli.command, cfg),
        Commands::Export { .. } => commands::export::handle(&cli.command, cfg),
        Commands::Cache { action } => commands::cache::handle(action, cfg),
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // Config is loaded once; --db overrides the configured database.
    let mut cfg = Config::load()?;
    if let Some(custom_db) = &cli.db {
        cfg.database = custom_db.clone();
    }

    dispatch(&cli, &cfg)
}
