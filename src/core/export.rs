//! Export of collections to JSON or CSV.

use crate::core::range::event_range;
use crate::core::status::task_state;
use crate::db::log::ttlog_quiet;
use crate::db::store::SchedulerStore;
use crate::errors::{AppError, AppResult};
use crate::models::{Category, Collection, Event, Setting, Task};
use crate::ui::messages::success;
use crate::utils::date::format_instant;
use crate::utils::fs::{ensure_parent, ensure_writable};
use clap::ValueEnum;
use serde::Serialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// What to export: one collection or everything.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportTarget {
    Events,
    Tasks,
    Categories,
    Settings,
    All,
}

impl ExportTarget {
    fn collection(&self) -> Option<Collection> {
        match self {
            ExportTarget::Events => Some(Collection::Events),
            ExportTarget::Tasks => Some(Collection::Tasks),
            ExportTarget::Categories => Some(Collection::Categories),
            ExportTarget::Settings => Some(Collection::Settings),
            ExportTarget::All => None,
        }
    }
}

#[derive(Serialize)]
struct Snapshot {
    events: Vec<Event>,
    tasks: Vec<Task>,
    categories: Vec<Category>,
    settings: Vec<Setting>,
}

pub struct ExportLogic;

impl ExportLogic {
    /// Write `target` to `file` and return the number of records written.
    pub fn export(
        store: &SchedulerStore,
        format: ExportFormat,
        target: ExportTarget,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);
        ensure_parent(path)?;
        ensure_writable(path, force)?;

        let written = match format {
            ExportFormat::Json => export_json(store, target, path)?,
            ExportFormat::Csv => {
                let collection = target.collection().ok_or_else(|| {
                    AppError::Export("CSV export needs a single collection".into())
                })?;
                export_csv(store, collection, path)?
            }
        };

        success(format!("Exported {written} records to {}", path.display()));
        ttlog_quiet(
            store.conn()?,
            "export",
            &path.to_string_lossy(),
            &format!("Exported {written} records"),
        );

        Ok(written)
    }
}

fn export_json(store: &SchedulerStore, target: ExportTarget, path: &Path) -> AppResult<usize> {
    let (json, n) = match target {
        ExportTarget::Events => {
            let v = store.get_all::<Event>()?;
            (serde_json::to_string_pretty(&v)?, v.len())
        }
        ExportTarget::Tasks => {
            let v = store.get_all::<Task>()?;
            (serde_json::to_string_pretty(&v)?, v.len())
        }
        ExportTarget::Categories => {
            let v = store.get_all::<Category>()?;
            (serde_json::to_string_pretty(&v)?, v.len())
        }
        ExportTarget::Settings => {
            let v = store.get_all::<Setting>()?;
            (serde_json::to_string_pretty(&v)?, v.len())
        }
        ExportTarget::All => {
            let snapshot = Snapshot {
                events: store.get_all()?,
                tasks: store.get_all()?,
                categories: store.get_all()?,
                settings: store.get_all()?,
            };
            let n = snapshot.events.len()
                + snapshot.tasks.len()
                + snapshot.categories.len()
                + snapshot.settings.len();
            (serde_json::to_string_pretty(&snapshot)?, n)
        }
    };

    fs::write(path, json)?;
    Ok(n)
}

fn export_csv(store: &SchedulerStore, collection: Collection, path: &Path) -> AppResult<usize> {
    let mut wtr = csv::Writer::from_path(path)?;

    let n = match collection {
        Collection::Events => {
            wtr.write_record(["id", "title", "category", "start", "end"])?;
            let events = store.get_all::<Event>()?;
            for ev in &events {
                let range = event_range(ev);
                let start = range.start.as_ref().map(format_instant).unwrap_or_default();
                let end = range.end.as_ref().map(format_instant).unwrap_or_default();
                wtr.write_record([
                    ev.id.as_str(),
                    ev.title.as_str(),
                    ev.category.as_str(),
                    start.as_str(),
                    end.as_str(),
                ])?;
            }
            events.len()
        }
        Collection::Tasks => {
            wtr.write_record(["id", "title", "category", "due_date", "status", "state"])?;
            let tasks = store.get_all::<Task>()?;
            for task in &tasks {
                let state = task_state(task).to_string();
                wtr.write_record([
                    task.id.as_str(),
                    task.title.as_str(),
                    task.category.as_str(),
                    task.due_date.as_str(),
                    task.status.as_str(),
                    state.as_str(),
                ])?;
            }
            tasks.len()
        }
        Collection::Categories => {
            wtr.write_record(["id", "name", "color"])?;
            let categories = store.get_all::<Category>()?;
            for c in &categories {
                wtr.write_record([&c.id, &c.name, &c.color])?;
            }
            categories.len()
        }
        Collection::Settings => {
            wtr.write_record(["key", "value"])?;
            let settings = store.get_all::<Setting>()?;
            for s in &settings {
                wtr.write_record([&s.key, &s.value])?;
            }
            settings.len()
        }
    };

    wtr.flush()?;
    Ok(n)
}
