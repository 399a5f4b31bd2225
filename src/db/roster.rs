//! Stored roster versions.

use crate::core::roster::Roster;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::roster::RosterEntry;
use chrono::Local;
use rusqlite::{OptionalExtension, Row, params};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterVersion {
    pub id: i64,
    pub created_at: String,
    pub source: String,
    pub entry_count: i64,
}

fn map_version(row: &Row<'_>) -> rusqlite::Result<RosterVersion> {
    Ok(RosterVersion {
        id: row.get(0)?,
        created_at: row.get(1)?,
        source: row.get(2)?,
        entry_count: row.get(3)?,
    })
}

/// Store `roster` as a new version and return its id.
pub fn save_roster_version(pool: &mut DbPool, roster: &Roster, source: &str) -> AppResult<i64> {
    pool.with_conn(|conn| {
        let tx = conn.transaction()?;

        tx.execute(
            "INSERT INTO roster_versions (created_at, source, entry_count) VALUES (?1, ?2, ?3)",
            params![Local::now().to_rfc3339(), source, roster.len() as i64],
        )?;
        let version_id = tx.last_insert_rowid();

        {
            let mut stmt = tx.prepare(
                "INSERT INTO roster_entries (version_id, position, emp_id, name, status, activity)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            )?;
            for (pos, e) in roster.entries().iter().enumerate() {
                stmt.execute(params![
                    version_id,
                    pos as i64,
                    e.id,
                    e.name,
                    e.status,
                    e.activity
                ])?;
            }
        }

        tx.commit()?;
        Ok(version_id)
    })
}

pub fn list_roster_versions(pool: &mut DbPool) -> AppResult<Vec<RosterVersion>> {
    let mut stmt = pool.conn.prepare(
        "SELECT id, created_at, source, entry_count FROM roster_versions ORDER BY id ASC",
    )?;
    let rows = stmt.query_map([], map_version)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Load a roster version; `None` selects the latest one.
///
/// Returns `Ok(None)` when no version has been imported yet, and
/// [`AppError::RosterVersionNotFound`] for an unknown explicit id.
pub fn load_roster(
    pool: &mut DbPool,
    version: Option<i64>,
) -> AppResult<Option<(RosterVersion, Roster)>> {
    let meta = match version {
        Some(id) => pool
            .conn
            .query_row(
                "SELECT id, created_at, source, entry_count FROM roster_versions WHERE id = ?1",
                [id],
                map_version,
            )
            .optional()?
            .ok_or(AppError::RosterVersionNotFound(id))?,
        None => match pool
            .conn
            .query_row(
                "SELECT id, created_at, source, entry_count FROM roster_versions
                 ORDER BY id DESC LIMIT 1",
                [],
                map_version,
            )
            .optional()?
        {
            Some(v) => v,
            None => return Ok(None),
        },
    };

    let mut stmt = pool.conn.prepare(
        "SELECT emp_id, name, status, activity FROM roster_entries
         WHERE version_id = ?1 ORDER BY position ASC",
    )?;
    let rows = stmt.query_map([meta.id], |row| {
        Ok(RosterEntry {
            id: row.get(0)?,
            name: row.get(1)?,
            status: row.get(2)?,
            activity: row.get(3)?,
        })
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    Ok(Some((meta, Roster::new(entries))))
}
