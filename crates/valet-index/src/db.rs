use chrono::{Local, NaiveDate, NaiveDateTime, SubsecRound};
use rusqlite::{Connection, MAIN_DB};
use std::path::{Path, PathBuf};
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

use crate::queries::record;
use crate::records::{ParkingRecord, RecordOrder};
use crate::schema;
use crate::{Error, Result};

/// Owned handle to the parking record database.
///
/// Every operation runs to completion on the caller's thread. The connection
/// is released when the handle is closed or dropped.
pub struct Database {
    conn: Connection,
    path: Option<PathBuf>,
}

impl Database {
    /// Open (creating if necessary) the database file and its parent directory,
    /// then make sure the record table exists. Safe to call on an existing store.
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| unavailable(db_path, e))?;
        }

        let conn = Connection::open(db_path).map_err(|e| unavailable(db_path, e))?;
        // SQLite silently falls back to read-only on write-protected files
        let readonly = conn
            .is_readonly(MAIN_DB)
            .map_err(|e| unavailable(db_path, e))?;
        if readonly {
            return Err(unavailable(db_path, "database file is read-only"));
        }
        conn.busy_timeout(BUSY_TIMEOUT)
            .map_err(|e| unavailable(db_path, e))?;
        schema::init_schema(&conn).map_err(|e| unavailable(db_path, e))?;

        tracing::info!(path = %db_path.display(), "database connection established");

        Ok(Self {
            conn,
            path: Some(db_path.to_path_buf()),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        schema::init_schema(&conn)?;
        Ok(Self { conn, path: None })
    }

    /// Backing file, or `None` for an in-memory store.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Append a record stamped with the current local time. Returns the new id.
    ///
    /// The plate is stored exactly as given; blank or whitespace-only plates are
    /// rejected. Trimming attendant input is the workflow's job.
    pub fn insert(&self, plate_number: &str) -> Result<i64> {
        self.insert_at(plate_number, Local::now().naive_local())
    }

    /// Append a record with an explicit entry time (truncated to whole seconds).
    pub fn insert_at(&self, plate_number: &str, created_at: NaiveDateTime) -> Result<i64> {
        validate_plate(plate_number)?;
        let id = record::insert(&self.conn, plate_number, created_at.trunc_subsecs(0))?;
        tracing::info!(id, plate = plate_number, "record inserted");
        Ok(id)
    }

    pub fn get_by_id(&self, id: i64) -> Result<Option<ParkingRecord>> {
        tracing::debug!(id, "get record");
        record::get_by_id(&self.conn, id)
    }

    pub fn list_all(&self, order: RecordOrder) -> Result<Vec<ParkingRecord>> {
        tracing::debug!(?order, "list records");
        record::list(&self.conn, order)
    }

    /// Records whose entry date falls in `[from, to]`, time of day ignored.
    /// An inverted interval matches nothing.
    pub fn list_between(&self, from: NaiveDate, to: NaiveDate) -> Result<Vec<ParkingRecord>> {
        tracing::debug!(%from, %to, "list records between dates");
        record::list_between(&self.conn, from, to)
    }

    /// Remove a record. Returns `false` when no record had that id.
    pub fn delete_by_id(&self, id: i64) -> Result<bool> {
        let removed = record::delete(&self.conn, id)?;
        if removed {
            tracing::info!(id, "record deleted");
        } else {
            tracing::debug!(id, "delete of unknown id ignored");
        }
        Ok(removed)
    }

    pub fn count(&self) -> Result<usize> {
        record::count(&self.conn)
    }

    /// Release the connection, reporting any error SQLite raises while closing.
    pub fn close(self) -> Result<()> {
        let path = self.path;
        self.conn.close().map_err(|(_, err)| {
            tracing::warn!(error = %err, "database close failed");
            Error::Storage(err)
        })?;

        if let Some(path) = path {
            tracing::info!(path = %path.display(), "database connection closed");
        }
        Ok(())
    }
}

fn validate_plate(plate_number: &str) -> Result<()> {
    if plate_number.trim().is_empty() {
        return Err(Error::InvalidInput(
            "plate number must not be empty".to_string(),
        ));
    }
    Ok(())
}

fn unavailable(path: &Path, err: impl std::fmt::Display) -> Error {
    Error::StorageUnavailable {
        path: path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(date: (i32, u32, u32), time: (u32, u32, u32)) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(date.0, date.1, date.2)
            .and_then(|d| d.and_hms_opt(time.0, time.1, time.2))
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_schema_initialization() {
        let db = Database::open_in_memory().unwrap();

        assert_eq!(db.count().unwrap(), 0);
        assert!(db.list_all(RecordOrder::NewestFirst).unwrap().is_empty());
        assert!(db.path().is_none());
    }

    #[test]
    fn test_insert_then_get_by_id() {
        let db = Database::open_in_memory().unwrap();
        let started = Local::now().naive_local().trunc_subsecs(0);

        let id = db.insert("ABC-123").unwrap();
        let record = db.get_by_id(id).unwrap().unwrap();

        assert_eq!(record.id, id);
        assert_eq!(record.plate_number, "ABC-123");
        assert!(record.created_at >= started);
    }

    #[test]
    fn test_insert_stores_plate_verbatim() {
        let db = Database::open_in_memory().unwrap();

        let id = db.insert(" ABC-123 ").unwrap();

        assert_eq!(db.get_by_id(id).unwrap().unwrap().plate_number, " ABC-123 ");
    }

    #[test]
    fn test_empty_plate_is_invalid_input() {
        let db = Database::open_in_memory().unwrap();
        db.insert("KEEP-1").unwrap();

        for plate in ["", "   ", "\t\n"] {
            let err = db.insert(plate).unwrap_err();
            assert!(err.is_invalid_input(), "expected InvalidInput for {:?}", plate);
        }

        assert_eq!(db.count().unwrap(), 1);
    }

    #[test]
    fn test_plate_text_is_not_interpreted_as_sql() {
        let db = Database::open_in_memory().unwrap();

        let plate = "X'); DROP TABLE parking_records; --";
        let id = db.insert(plate).unwrap();

        assert_eq!(db.get_by_id(id).unwrap().unwrap().plate_number, plate);
        assert_eq!(db.count().unwrap(), 1);
    }

    #[test]
    fn test_same_plate_creates_new_record() {
        let db = Database::open_in_memory().unwrap();

        let first = db.insert("ABC-123").unwrap();
        let second = db.insert("ABC-123").unwrap();

        assert_ne!(first, second);
        assert_eq!(db.count().unwrap(), 2);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let db = Database::open_in_memory().unwrap();

        assert!(db.get_by_id(42).unwrap().is_none());
    }

    #[test]
    fn test_list_all_newest_first_breaks_ties_by_id() {
        let db = Database::open_in_memory().unwrap();
        let a = db.insert_at("A", at((2024, 5, 1), (8, 0, 0))).unwrap();
        let b = db.insert_at("B", at((2024, 5, 1), (9, 0, 0))).unwrap();
        let c = db.insert_at("C", at((2024, 5, 1), (9, 0, 0))).unwrap();

        let ids: Vec<i64> = db
            .list_all(RecordOrder::NewestFirst)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec![c, b, a]);
    }

    #[test]
    fn test_list_all_oldest_first() {
        let db = Database::open_in_memory().unwrap();
        let a = db.insert_at("A", at((2024, 5, 1), (8, 0, 0))).unwrap();
        let b = db.insert_at("B", at((2024, 5, 2), (7, 0, 0))).unwrap();

        let ids: Vec<i64> = db
            .list_all(RecordOrder::OldestFirst)
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(ids, vec![a, b]);
    }

    #[test]
    fn test_insert_at_truncates_subseconds() {
        let db = Database::open_in_memory().unwrap();
        let precise = at((2024, 5, 1), (8, 0, 0)) + chrono::Duration::milliseconds(750);

        let id = db.insert_at("A", precise).unwrap();

        assert_eq!(
            db.get_by_id(id).unwrap().unwrap().created_at,
            at((2024, 5, 1), (8, 0, 0))
        );
    }

    #[test]
    fn test_list_between_ignores_time_of_day() {
        let db = Database::open_in_memory().unwrap();
        db.insert_at("EARLY", at((2024, 5, 1), (0, 0, 0))).unwrap();
        db.insert_at("LATE", at((2024, 5, 1), (23, 59, 59))).unwrap();
        db.insert_at("NEXT", at((2024, 5, 2), (0, 0, 0))).unwrap();
        db.insert_at("PREV", at((2024, 4, 30), (23, 59, 59))).unwrap();

        let plates: Vec<String> = db
            .list_between(day(2024, 5, 1), day(2024, 5, 1))
            .unwrap()
            .into_iter()
            .map(|r| r.plate_number)
            .collect();

        assert_eq!(plates, vec!["EARLY", "LATE"]);
    }

    #[test]
    fn test_list_between_inclusive_bounds() {
        let db = Database::open_in_memory().unwrap();
        db.insert_at("A", at((2024, 5, 1), (10, 0, 0))).unwrap();
        db.insert_at("B", at((2024, 5, 3), (10, 0, 0))).unwrap();
        db.insert_at("C", at((2024, 5, 4), (10, 0, 0))).unwrap();

        let records = db.list_between(day(2024, 5, 1), day(2024, 5, 3)).unwrap();

        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_list_between_inverted_range_is_empty() {
        let db = Database::open_in_memory().unwrap();
        db.insert_at("A", at((2024, 5, 2), (10, 0, 0))).unwrap();

        let records = db.list_between(day(2024, 5, 3), day(2024, 5, 1)).unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn test_scenario_single_plate_day_window() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert("ABC-123").unwrap();
        let today = db.get_by_id(id).unwrap().unwrap().entry_date();

        let same_day = db.list_between(today, today).unwrap();
        assert_eq!(same_day.len(), 1);
        assert_eq!(same_day[0].plate_number, "ABC-123");

        let later = db
            .list_between(
                today + chrono::Duration::days(1),
                today + chrono::Duration::days(2),
            )
            .unwrap();
        assert!(later.is_empty());
    }

    #[test]
    fn test_delete_existing_record() {
        let db = Database::open_in_memory().unwrap();
        let id = db.insert("ABC-123").unwrap();
        db.insert("DEF-456").unwrap();

        assert!(db.delete_by_id(id).unwrap());

        assert_eq!(db.count().unwrap(), 1);
        assert!(db.get_by_id(id).unwrap().is_none());
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let db = Database::open_in_memory().unwrap();
        db.insert("ABC-123").unwrap();

        assert!(!db.delete_by_id(999).unwrap());
        assert_eq!(db.count().unwrap(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let db = Database::open_in_memory().unwrap();
        db.insert("A").unwrap();
        let last = db.insert("B").unwrap();
        db.delete_by_id(last).unwrap();

        let next = db.insert("C").unwrap();

        assert!(next > last);
    }

    #[test]
    fn test_open_sets_busy_timeout() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let db = Database::open(&temp_dir.path().join("valet.db")).unwrap();

        let timeout: i64 = db
            .conn
            .query_row("PRAGMA busy_timeout", [], |row| row.get(0))
            .unwrap();

        assert_eq!(timeout, BUSY_TIMEOUT.as_millis() as i64);
    }

    #[test]
    fn test_close_in_memory() {
        let db = Database::open_in_memory().unwrap();
        db.insert("A").unwrap();

        db.close().unwrap();
    }
}
