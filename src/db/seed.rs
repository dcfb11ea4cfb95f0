//! Default categories and settings written on first run.

use crate::db::queries::{count_records, insert_record};
use crate::errors::AppResult;
use crate::models::{Category, Record, Setting};
use rusqlite::{Connection, TransactionBehavior};

pub const DEFAULT_CATEGORIES: [(&str, &str, &str); 4] = [
    ("work", "Work", "blue"),
    ("personal", "Personal", "green"),
    ("health", "Health", "red"),
    ("social", "Social", "purple"),
];

pub const DEFAULT_SETTINGS: [(&str, &str); 14] = [
    ("theme", "light"),
    ("timeFormat", "12"),
    ("weekStart", "sunday"),
    ("dateFormat", "mm/dd/yyyy"),
    ("defaultView", "month"),
    ("eventReminder", "15"),
    ("taskReminder", "30"),
    ("soundEnabled", "false"),
    ("browserNotifications", "false"),
    ("highContrast", "false"),
    ("keyboardShortcuts", "true"),
    ("focusIndicators", "true"),
    ("fontSize", "16"),
    ("reducedMotion", "false"),
];

/// What a seeding pass wrote.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub settings: usize,
}

impl SeedReport {
    pub fn is_empty(&self) -> bool {
        self.categories == 0 && self.settings == 0
    }
}

/// Insert `records` only if their collection is empty.
///
/// The emptiness check and the writes share one IMMEDIATE transaction, so a
/// second connection cannot seed the same collection in between.
fn seed_if_empty<R: Record>(conn: &mut Connection, records: Vec<R>) -> AppResult<usize> {
    let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

    if count_records(&tx, R::COLLECTION)? > 0 {
        return Ok(0);
    }

    for record in &records {
        insert_record(&tx, record)?;
    }
    tx.commit()?;

    Ok(records.len())
}

pub fn seed_defaults(conn: &mut Connection) -> AppResult<SeedReport> {
    let categories = DEFAULT_CATEGORIES
        .iter()
        .map(|(id, name, color)| Category::new(id, name, color))
        .collect();
    let settings = DEFAULT_SETTINGS
        .iter()
        .map(|(key, value)| Setting::new(key, value))
        .collect();

    Ok(SeedReport {
        categories: seed_if_empty::<Category>(conn, categories)?,
        settings: seed_if_empty::<Setting>(conn, settings)?,
    })
}
