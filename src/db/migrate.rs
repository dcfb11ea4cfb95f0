use crate::errors::{AppError, AppResult};
use crate::models::Collection;
use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension};

const SCHEMA_VERSION: &str = "20250101_0001_collections";

/// Ensure that the internal `log` table exists.
fn ensure_log_table(conn: &Connection) -> AppResult<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn table_exists(conn: &Connection, name: &str) -> AppResult<bool> {
    let exists: Option<String> = conn
        .query_row(
            "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
            [name],
            |row| row.get(0),
        )
        .optional()?;
    Ok(exists.is_some())
}

fn migration_applied(conn: &Connection, version: &str) -> AppResult<bool> {
    let found = conn
        .query_row(
            "SELECT 1 FROM log
             WHERE operation = 'migration_applied' AND target = ?1
             LIMIT 1",
            [version],
            |_| Ok(()),
        )
        .optional()?;
    Ok(found.is_some())
}

fn collection_ddl(collection: Collection) -> &'static str {
    match collection {
        Collection::Events => {
            r#"
            CREATE TABLE IF NOT EXISTS events (
                id        TEXT PRIMARY KEY NOT NULL,
                date      TEXT,
                category  TEXT,
                body      TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_events_date ON events(date);
            CREATE INDEX IF NOT EXISTS idx_events_category ON events(category);
            "#
        }
        Collection::Tasks => {
            r#"
            CREATE TABLE IF NOT EXISTS tasks (
                id        TEXT PRIMARY KEY NOT NULL,
                due_date  TEXT,
                category  TEXT,
                status    TEXT,
                body      TEXT NOT NULL
            );
            CREATE INDEX IF NOT EXISTS idx_tasks_due_date ON tasks(due_date);
            CREATE INDEX IF NOT EXISTS idx_tasks_category ON tasks(category);
            CREATE INDEX IF NOT EXISTS idx_tasks_status ON tasks(status);
            "#
        }
        Collection::Categories => {
            r#"
            CREATE TABLE IF NOT EXISTS categories (
                id        TEXT PRIMARY KEY NOT NULL,
                body      TEXT NOT NULL
            );
            "#
        }
        Collection::Settings => {
            r#"
            CREATE TABLE IF NOT EXISTS settings (
                key       TEXT PRIMARY KEY NOT NULL,
                body      TEXT NOT NULL
            );
            "#
        }
    }
}

/// Run all pending migrations. Safe to call on every open.
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    let mut created = Vec::new();
    for collection in Collection::ALL {
        if !table_exists(conn, collection.name())? {
            created.push(collection.name());
        }
        // IF NOT EXISTS also restores indexes dropped by hand.
        conn.execute_batch(collection_ddl(collection))
            .map_err(|e| AppError::Migration(format!("{collection}: {e}")))?;
    }

    if !migration_applied(conn, SCHEMA_VERSION)? {
        conn.execute(
            "INSERT INTO log (date, operation, target, message)
             VALUES (datetime('now'), 'migration_applied', ?1, 'Created collection tables')",
            [SCHEMA_VERSION],
        )?;
    }

    if !created.is_empty() {
        success(format!("Created collections: {}", created.join(", ")));
    }

    Ok(())
}
