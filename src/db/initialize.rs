use crate::db::log::ttlog_quiet;
use crate::db::migrate::run_pending_migrations;
use crate::db::seed::{SeedReport, seed_defaults};
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare a freshly opened connection: schema first, then default data.
pub fn init_db(conn: &mut Connection) -> AppResult<SeedReport> {
    run_pending_migrations(conn)?;

    let report = seed_defaults(conn)?;
    if !report.is_empty() {
        ttlog_quiet(
            conn,
            "seed",
            "defaults",
            &format!(
                "Seeded {} categories and {} settings",
                report.categories, report.settings
            ),
        );
    }

    Ok(report)
}
