use crate::db::migrate::run_pending_migrations;
use crate::errors::AppResult;
use rusqlite::Connection;

/// Prepare a freshly opened connection: roster entries reference their
/// version, so foreign keys are enforced before the schema is brought up
/// to date.
pub fn init_db(conn: &Connection) -> AppResult<()> {
    conn.pragma_update(None, "foreign_keys", "ON")?;
    run_pending_migrations(conn)?;
    Ok(())
}
