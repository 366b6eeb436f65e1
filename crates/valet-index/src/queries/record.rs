use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, OptionalExtension, Row, params, types::Type};

use crate::{
    Result,
    records::{ParkingRecord, RecordOrder, TIMESTAMP_FORMAT, parse_timestamp},
};

const SELECT_COLUMNS: &str = "SELECT id, plate_number, created_at FROM parking_records";

pub fn insert(conn: &Connection, plate_number: &str, created_at: NaiveDateTime) -> Result<i64> {
    conn.execute(
        "INSERT INTO parking_records (plate_number, created_at) VALUES (?1, ?2)",
        params![plate_number, created_at.format(TIMESTAMP_FORMAT).to_string()],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn get_by_id(conn: &Connection, id: i64) -> Result<Option<ParkingRecord>> {
    let record = conn
        .query_row(
            &format!("{} WHERE id = ?1", SELECT_COLUMNS),
            [id],
            map_row,
        )
        .optional()?;

    Ok(record)
}

pub fn list(conn: &Connection, order: RecordOrder) -> Result<Vec<ParkingRecord>> {
    let order_clause = match order {
        RecordOrder::NewestFirst => "ORDER BY created_at DESC, id DESC",
        RecordOrder::OldestFirst => "ORDER BY created_at ASC, id ASC",
    };

    let mut stmt = conn.prepare(&format!("{} {}", SELECT_COLUMNS, order_clause))?;
    let records = stmt
        .query_map([], map_row)?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(records)
}

pub fn list_between(conn: &Connection, from: NaiveDate, to: NaiveDate) -> Result<Vec<ParkingRecord>> {
    let mut stmt = conn.prepare(&format!(
        "{} WHERE date(created_at) BETWEEN ?1 AND ?2 ORDER BY created_at ASC, id ASC",
        SELECT_COLUMNS
    ))?;

    let records = stmt
        .query_map(
            params![
                from.format("%Y-%m-%d").to_string(),
                to.format("%Y-%m-%d").to_string()
            ],
            map_row,
        )?
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(records)
}

pub fn delete(conn: &Connection, id: i64) -> Result<bool> {
    let affected = conn.execute("DELETE FROM parking_records WHERE id = ?1", [id])?;
    Ok(affected > 0)
}

pub fn count(conn: &Connection) -> Result<usize> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM parking_records", [], |row| {
        row.get(0)
    })?;

    Ok(count as usize)
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<ParkingRecord> {
    let raw: String = row.get(2)?;
    let created_at = parse_timestamp(&raw).ok_or_else(|| {
        rusqlite::Error::FromSqlConversionFailure(
            2,
            Type::Text,
            format!("unrecognized created_at value: {}", raw).into(),
        )
    })?;

    Ok(ParkingRecord {
        id: row.get(0)?,
        plate_number: row.get(1)?,
        created_at,
    })
}
