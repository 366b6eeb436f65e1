use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Storage and display format of `created_at` (SQLite `datetime()` layout).
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single parking ticket as stored in the index database.
///
/// Records are append-only: they are created on vehicle entry and removed
/// on attendant action. There is no update-in-place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParkingRecord {
    /// Surrogate key assigned by the store. Never reused.
    pub id: i64,
    /// Plate number as typed by the attendant (trimmed, non-empty).
    pub plate_number: String,
    /// Local wall-clock time of entry, second resolution.
    #[serde(with = "timestamp")]
    pub created_at: NaiveDateTime,
}

impl ParkingRecord {
    /// Calendar date of entry, used by date-ranged exports.
    pub fn entry_date(&self) -> NaiveDate {
        self.created_at.date()
    }

    pub fn created_at_string(&self) -> String {
        self.created_at.format(TIMESTAMP_FORMAT).to_string()
    }
}

/// Listing order. Ties on `created_at` are broken by `id` in the same direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RecordOrder {
    #[default]
    NewestFirst,
    OldestFirst,
}

pub(crate) fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    NaiveDateTime::parse_from_str(raw, TIMESTAMP_FORMAT)
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S%.f"))
        .ok()
}

mod timestamp {
    use super::{TIMESTAMP_FORMAT, parse_timestamp};
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &NaiveDateTime, s: S) -> Result<S::Ok, S::Error> {
        s.collect_str(&value.format(TIMESTAMP_FORMAT))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(d)?;
        parse_timestamp(&raw)
            .ok_or_else(|| de::Error::custom(format!("invalid timestamp: {}", raw)))
    }
}
