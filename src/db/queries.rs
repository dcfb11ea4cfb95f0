//! Generic record SQL shared by every collection.
//!
//! Each collection table has the key column, one column per secondary index
//! and a `body` column with the record as JSON. Table and column names come
//! from [`Collection`] / [`Index`], never from user input.

use crate::errors::{AppError, AppResult};
use crate::models::{Collection, Index, Record};
use rusqlite::{Connection, ErrorCode, ToSql, params_from_iter};

fn column_list(collection: Collection) -> Vec<&'static str> {
    let mut cols = vec![collection.key_column()];
    cols.extend(collection.indexes().iter().map(Index::column));
    cols.push("body");
    cols
}

fn write_sql(collection: Collection, verb: &str) -> String {
    let cols = column_list(collection);
    let placeholders = (1..=cols.len())
        .map(|i| format!("?{i}"))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "{verb} INTO {} ({}) VALUES ({})",
        collection.name(),
        cols.join(", "),
        placeholders
    )
}

fn write_params<R: Record>(record: &R) -> AppResult<Vec<Option<String>>> {
    let mut values = vec![Some(record.key().to_string())];
    values.extend(
        R::COLLECTION
            .indexes()
            .iter()
            .map(|idx| record.index_value(*idx).map(str::to_string)),
    );
    values.push(Some(serde_json::to_string(record)?));
    Ok(values)
}

fn is_constraint_violation(e: &rusqlite::Error) -> bool {
    matches!(e, rusqlite::Error::SqliteFailure(err, _) if err.code == ErrorCode::ConstraintViolation)
}

fn decode<R: Record>(body: &str) -> AppResult<R> {
    Ok(serde_json::from_str(body)?)
}

/// Plain insert; an existing key is a write conflict.
pub fn insert_record<R: Record>(conn: &Connection, record: &R) -> AppResult<()> {
    let values = write_params(record)?;
    conn.execute(&write_sql(R::COLLECTION, "INSERT"), params_from_iter(values.iter()))
        .map_err(|e| {
            if is_constraint_violation(&e) {
                AppError::WriteConflict {
                    collection: R::COLLECTION.name().to_string(),
                    key: record.key().to_string(),
                }
            } else {
                AppError::Db(e)
            }
        })?;
    Ok(())
}

/// Insert or replace by key.
pub fn put_record<R: Record>(conn: &Connection, record: &R) -> AppResult<()> {
    let values = write_params(record)?;
    conn.execute(
        &write_sql(R::COLLECTION, "INSERT OR REPLACE"),
        params_from_iter(values.iter()),
    )?;
    Ok(())
}

pub fn select_record<R: Record>(conn: &Connection, key: &str) -> AppResult<Option<R>> {
    let c = R::COLLECTION;
    let mut stmt = conn.prepare_cached(&format!(
        "SELECT body FROM {} WHERE {} = ?1",
        c.name(),
        c.key_column()
    ))?;

    let mut rows = stmt.query([key])?;
    match rows.next()? {
        Some(row) => {
            let body: String = row.get(0)?;
            Ok(Some(decode(&body)?))
        }
        None => Ok(None),
    }
}

fn collect_bodies<R: Record>(
    conn: &Connection,
    sql: &str,
    params: &[&dyn ToSql],
) -> AppResult<Vec<R>> {
    let mut stmt = conn.prepare_cached(sql)?;
    let bodies = stmt.query_map(params, |row| row.get::<_, String>(0))?;

    let mut out = Vec::new();
    for body in bodies {
        out.push(decode(&body?)?);
    }
    Ok(out)
}

/// All records, in key order.
pub fn select_all<R: Record>(conn: &Connection) -> AppResult<Vec<R>> {
    let c = R::COLLECTION;
    let sql = format!(
        "SELECT body FROM {} ORDER BY {} ASC",
        c.name(),
        c.key_column()
    );
    collect_bodies(conn, &sql, &[])
}

/// Records whose `index` equals `value`, in key order.
pub fn select_by_index<R: Record>(conn: &Connection, index: Index, value: &str) -> AppResult<Vec<R>> {
    let c = R::COLLECTION;
    if !c.has_index(index) {
        return Err(AppError::UnknownIndex {
            collection: c.name().to_string(),
            index: index.name().to_string(),
        });
    }

    let sql = format!(
        "SELECT body FROM {} WHERE {} = ?1 ORDER BY {} ASC",
        c.name(),
        index.column(),
        c.key_column()
    );
    collect_bodies(conn, &sql, &[&value])
}

/// Delete by key; a missing key is not an error.
pub fn delete_record(conn: &Connection, collection: Collection, key: &str) -> AppResult<()> {
    conn.execute(
        &format!(
            "DELETE FROM {} WHERE {} = ?1",
            collection.name(),
            collection.key_column()
        ),
        [key],
    )?;
    Ok(())
}

pub fn clear_collection(conn: &Connection, collection: Collection) -> AppResult<()> {
    conn.execute(&format!("DELETE FROM {}", collection.name()), [])?;
    Ok(())
}

pub fn count_records(conn: &Connection, collection: Collection) -> AppResult<i64> {
    let n = conn.query_row(
        &format!("SELECT COUNT(*) FROM {}", collection.name()),
        [],
        |row| row.get(0),
    )?;
    Ok(n)
}
