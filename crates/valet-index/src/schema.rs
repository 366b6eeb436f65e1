use rusqlite::Connection;

use crate::Result;

// Schema version, stamped into `PRAGMA user_version` on first creation
pub const SCHEMA_VERSION: i32 = 1;

// NOTE: Schema Rationale
//
// AUTOINCREMENT (not plain ROWID aliasing): ids of deleted tickets must never
// be handed out again, since a printed ticket carries its id.
//
// created_at defaults to local wall-clock time so that `date(created_at)`
// matches the calendar day the attendant sees on the ticket.
//
// The CHECK on plate_number mirrors the input validation in `insert`; it only
// fires for rows written by other tools.

pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS parking_records (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            plate_number TEXT NOT NULL CHECK (length(trim(plate_number)) > 0),
            created_at DATETIME NOT NULL DEFAULT (datetime('now', 'localtime'))
        );

        CREATE INDEX IF NOT EXISTS idx_records_created ON parking_records(created_at DESC);
        "#,
    )?;

    let current_version: i32 = conn.query_row("PRAGMA user_version", [], |row| row.get(0))?;
    if current_version == 0 {
        conn.execute_batch(&format!("PRAGMA user_version = {}", SCHEMA_VERSION))?;
        tracing::info!(version = SCHEMA_VERSION, "record schema created");
    } else if current_version != SCHEMA_VERSION {
        tracing::warn!(
            found = current_version,
            expected = SCHEMA_VERSION,
            "database was written by a different schema version"
        );
    } else {
        tracing::info!(version = current_version, "record schema ready");
    }

    Ok(())
}
