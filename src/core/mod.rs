//! Scheduling logic on top of the store: date ranges, task state, the
//! upcoming filter, plus backup/export/log maintenance.

pub mod backup;
pub mod config;
pub mod export;
pub mod log;
pub mod range;
pub mod status;
pub mod upcoming;
