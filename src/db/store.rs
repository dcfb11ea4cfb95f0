//! Storage facade over the four collections.
//!
//! A `SchedulerStore` is constructed explicitly and passed to callers; it
//! owns a single SQLite connection. Every public operation runs in exactly
//! one transaction.

use crate::core::upcoming::filter_upcoming;
use crate::db::initialize::init_db;
use crate::db::log::ttlog_quiet;
use crate::db::queries;
use crate::db::seed::{SeedReport, seed_defaults};
use crate::errors::{AppError, AppResult};
use crate::models::{Collection, Index, Record, Setting, Task};
use crate::ui::messages::error;
use crate::utils::fs::ensure_parent;
use chrono::Local;
use rusqlite::Connection;
use std::collections::BTreeMap;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreLocation {
    File(PathBuf),
    Memory,
}

enum State {
    Closed,
    Ready(Connection),
    /// Init failed; the message is replayed on every later call.
    Failed(String),
}

pub struct SchedulerStore {
    location: StoreLocation,
    state: State,
}

impl std::fmt::Debug for SchedulerStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Closed => "closed",
            State::Ready(_) => "ready",
            State::Failed(_) => "failed",
        };
        f.debug_struct("SchedulerStore")
            .field("location", &self.location)
            .field("state", &state)
            .finish()
    }
}

fn open_connection(location: &StoreLocation) -> AppResult<Connection> {
    let mut conn = match location {
        StoreLocation::File(path) => {
            ensure_parent(path)?;
            Connection::open(path)?
        }
        StoreLocation::Memory => Connection::open_in_memory()?,
    };
    init_db(&mut conn)?;
    ttlog_quiet(&conn, "init", "store", "Database initialized successfully");
    Ok(conn)
}

impl SchedulerStore {
    /// Unopened store; call [`SchedulerStore::init`] before use.
    pub fn new(location: StoreLocation) -> Self {
        Self {
            location,
            state: State::Closed,
        }
    }

    /// Open (creating if needed) and initialize a store file.
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let mut store = Self::new(StoreLocation::File(path.into()));
        store.init()?;
        Ok(store)
    }

    pub fn in_memory() -> AppResult<Self> {
        let mut store = Self::new(StoreLocation::Memory);
        store.init()?;
        Ok(store)
    }

    pub fn location(&self) -> &StoreLocation {
        &self.location
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// Open the connection, migrate the schema and seed defaults.
    ///
    /// Idempotent once it has succeeded. A failure is sticky: this and every
    /// other call keep returning [`AppError::Initialization`].
    pub fn init(&mut self) -> AppResult<()> {
        match &self.state {
            State::Ready(_) => return Ok(()),
            State::Failed(msg) => return Err(AppError::Initialization(msg.clone())),
            State::Closed => {}
        }

        match open_connection(&self.location) {
            Ok(conn) => {
                self.state = State::Ready(conn);
                Ok(())
            }
            Err(e) => {
                let msg = e.to_string();
                error(format!("Database initialization error: {msg}"));
                self.state = State::Failed(msg.clone());
                Err(AppError::Initialization(msg))
            }
        }
    }

    /// Release the connection. `init` may reopen it later.
    pub fn close(&mut self) -> AppResult<()> {
        match std::mem::replace(&mut self.state, State::Closed) {
            State::Ready(conn) => conn.close().map_err(|(_, e)| AppError::Db(e)),
            State::Failed(msg) => {
                self.state = State::Failed(msg);
                Ok(())
            }
            State::Closed => Ok(()),
        }
    }

    pub(crate) fn conn(&self) -> AppResult<&Connection> {
        match &self.state {
            State::Ready(conn) => Ok(conn),
            State::Failed(msg) => Err(AppError::Initialization(msg.clone())),
            State::Closed => Err(AppError::NotInitialized),
        }
    }

    fn conn_mut(&mut self) -> AppResult<&mut Connection> {
        match &mut self.state {
            State::Ready(conn) => Ok(conn),
            State::Failed(msg) => Err(AppError::Initialization(msg.clone())),
            State::Closed => Err(AppError::NotInitialized),
        }
    }

    /// Insert a new record and return its key. Fails with
    /// [`AppError::WriteConflict`] if the key is taken.
    pub fn add<R: Record>(&self, record: &R) -> AppResult<String> {
        queries::insert_record(self.conn()?, record)?;
        Ok(record.key().to_string())
    }

    /// Insert or replace by key.
    pub fn update<R: Record>(&self, record: &R) -> AppResult<String> {
        queries::put_record(self.conn()?, record)?;
        Ok(record.key().to_string())
    }

    pub fn get<R: Record>(&self, key: &str) -> AppResult<Option<R>> {
        queries::select_record(self.conn()?, key)
    }

    pub fn get_all<R: Record>(&self) -> AppResult<Vec<R>> {
        queries::select_all(self.conn()?)
    }

    pub fn get_by_index<R: Record>(&self, index: Index, value: &str) -> AppResult<Vec<R>> {
        queries::select_by_index(self.conn()?, index, value)
    }

    /// Remove by key. Succeeds when the key is absent.
    pub fn delete<R: Record>(&self, key: &str) -> AppResult<()> {
        queries::delete_record(self.conn()?, R::COLLECTION, key)
    }

    pub fn count<R: Record>(&self) -> AppResult<i64> {
        queries::count_records(self.conn()?, R::COLLECTION)
    }

    /// Empty events and tasks. Categories and settings are kept.
    pub fn clear_all_data(&self) -> AppResult<()> {
        let conn = self.conn()?;
        let tx = conn.unchecked_transaction()?;
        queries::clear_collection(&tx, Collection::Events)?;
        queries::clear_collection(&tx, Collection::Tasks)?;
        tx.commit()?;

        ttlog_quiet(conn, "clear", "events,tasks", "Cleared all events and tasks");
        Ok(())
    }

    /// Seed default categories/settings into empty collections.
    pub fn seed_defaults(&mut self) -> AppResult<SeedReport> {
        seed_defaults(self.conn_mut()?)
    }

    /// Setting value, or `None` when unset. Failures are reported and
    /// read as `None`.
    pub fn get_setting(&self, key: &str) -> Option<String> {
        match self.get::<Setting>(key) {
            Ok(setting) => setting.map(|s| s.value),
            Err(e) => {
                error(format!("Error getting setting {key}: {e}"));
                None
            }
        }
    }

    /// Store a setting. Returns `false` (after reporting) on failure.
    pub fn set_setting(&self, key: &str, value: &str) -> bool {
        match self.update(&Setting::new(key, value)) {
            Ok(_) => true,
            Err(e) => {
                error(format!("Error setting {key} to {value}: {e}"));
                false
            }
        }
    }

    /// All settings as a key → value map.
    pub fn settings(&self) -> AppResult<BTreeMap<String, String>> {
        Ok(self
            .get_all::<Setting>()?
            .into_iter()
            .map(|s| (s.key, s.value))
            .collect())
    }

    /// Open tasks due from today through `days` days ahead, soonest first.
    pub fn upcoming_tasks(&self, days: u32) -> AppResult<Vec<Task>> {
        let tasks = self.get_all::<Task>()?;
        Ok(filter_upcoming(tasks, &Local::now(), days))
    }
}
