use rusqlite::{Connection, OptionalExtension, Result};

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
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

/// Check if a table exists.
fn table_exists(conn: &Connection, name: &str) -> Result<bool> {
    let mut stmt = conn.prepare("SELECT name FROM sqlite_master WHERE type='table' AND name=?1")?;
    let exists: Option<String> = stmt.query_row([name], |row| row.get(0)).optional()?;
    Ok(exists.is_some())
}

/// Roster versions are append-only: an import adds a version with its
/// entries, earlier versions are never rewritten.
fn create_roster_tables(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS roster_versions (
            id          INTEGER PRIMARY KEY AUTOINCREMENT,
            created_at  TEXT NOT NULL,
            source      TEXT NOT NULL DEFAULT '',
            entry_count INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS roster_entries (
            version_id  INTEGER NOT NULL REFERENCES roster_versions(id),
            position    INTEGER NOT NULL,
            emp_id      TEXT NOT NULL DEFAULT '',
            name        TEXT NOT NULL DEFAULT '',
            status      TEXT NOT NULL DEFAULT '',
            activity    TEXT NOT NULL DEFAULT '',
            PRIMARY KEY (version_id, position)
        );

        CREATE INDEX IF NOT EXISTS idx_roster_entries_version ON roster_entries(version_id);
        "#,
    )?;
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Called by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> Result<()> {
    ensure_log_table(conn)?;

    if !table_exists(conn, "roster_versions")? || !table_exists(conn, "roster_entries")? {
        create_roster_tables(conn)?;
    }

    Ok(())
}
