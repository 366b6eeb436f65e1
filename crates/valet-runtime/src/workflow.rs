use valet_index::{Database, ParkingRecord, RecordOrder};

use crate::export::{ExportBatch, parse_export_date};
use crate::{Error, Result};

/// The attendant-facing operations, sequenced over a borrowed record store.
///
/// Each call is one linear sequence of store operations; nothing is held
/// between calls.
pub struct TicketWorkflow<'a> {
    db: &'a Database,
}

impl<'a> TicketWorkflow<'a> {
    pub fn new(db: &'a Database) -> Self {
        Self { db }
    }

    /// Register a vehicle entry and return the stored record for ticket printing.
    pub fn register_entry(&self, plate_text: &str) -> Result<ParkingRecord> {
        let plate = plate_text.trim();
        if plate.is_empty() {
            return Err(Error::InvalidInput(
                "plate number must not be empty".to_string(),
            ));
        }

        let id = self.db.insert(plate)?;
        self.db.get_by_id(id)?.ok_or_else(|| {
            Error::InvalidOperation(format!("record {} missing right after insert", id))
        })
    }

    /// All records, newest first.
    pub fn refresh_listing(&self) -> Result<Vec<ParkingRecord>> {
        Ok(self.db.list_all(RecordOrder::NewestFirst)?)
    }

    /// Delete a record. Returns `false` when the id was already gone.
    pub fn delete_record(&self, id: i64) -> Result<bool> {
        Ok(self.db.delete_by_id(id)?)
    }

    /// Look up a previously printed ticket.
    pub fn reprint(&self, id: i64) -> Result<Option<ParkingRecord>> {
        Ok(self.db.get_by_id(id)?)
    }

    /// Resolve a `day/month/year` interval into the rows to export.
    ///
    /// Both bounds are validated before the store is queried.
    pub fn export(&self, from_text: &str, to_text: &str) -> Result<ExportBatch> {
        let from = parse_export_date(from_text)?;
        let to = parse_export_date(to_text)?;

        let rows = self.db.list_between(from, to)?;
        if rows.is_empty() {
            tracing::info!(%from, %to, "no records in export range");
        }
        Ok(ExportBatch::from_rows(rows))
    }
}
