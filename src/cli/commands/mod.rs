pub mod backup;
pub mod cache;
pub mod category;
pub mod clear;
pub mod config;
pub mod db;
pub mod event;
pub mod export;
pub mod init;
pub mod log;
pub mod setting;
pub mod task;
pub mod upcoming;

use crate::config::Config;
use crate::db::SchedulerStore;
use crate::errors::AppResult;

/// Open and initialize the configured store.
pub(crate) fn open_store(cfg: &Config) -> AppResult<SchedulerStore> {
    SchedulerStore::open(&cfg.database)
}
