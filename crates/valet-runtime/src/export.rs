use chrono::NaiveDate;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::{Error, ParkingRecord, Result};

/// Attendant-facing date layout for export bounds (`day/month/year`).
pub const EXPORT_DATE_FORMAT: &str = "%d/%m/%Y";

/// Header row of every exported report.
pub const EXPORT_HEADER: [&str; 3] = ["ID", "Số xe", "Ngày tạo"];

/// Result of resolving an export request against the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportBatch {
    /// Nothing was recorded in the requested interval. No file should be written.
    NoData,
    Rows(Vec<ParkingRecord>),
}

impl ExportBatch {
    pub fn from_rows(rows: Vec<ParkingRecord>) -> Self {
        if rows.is_empty() {
            ExportBatch::NoData
        } else {
            ExportBatch::Rows(rows)
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ExportBatch::NoData => 0,
            ExportBatch::Rows(rows) => rows.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, ExportBatch::NoData)
    }
}

/// Parse an export bound such as `09/03/2024` (leading zeros optional).
pub fn parse_export_date(text: &str) -> Result<NaiveDate> {
    let trimmed = text.trim();
    NaiveDate::parse_from_str(trimmed, EXPORT_DATE_FORMAT).map_err(|_| {
        Error::InvalidInput(format!(
            "invalid date '{}': expected day/month/year, e.g. 31/12/2024",
            trimmed
        ))
    })
}

/// Write the report header and one row per record. Returns the number of data rows.
pub fn write_csv<W: Write>(writer: W, rows: &[ParkingRecord]) -> Result<usize> {
    let mut wtr = csv::Writer::from_writer(writer);

    wtr.write_record(EXPORT_HEADER)?;
    for record in rows {
        wtr.write_record([
            record.id.to_string(),
            record.plate_number.clone(),
            record.created_at_string(),
        ])?;
    }
    wtr.flush()?;

    Ok(rows.len())
}

/// Write a report to `path`. The destination only ever holds a complete report:
/// rows go to a sibling temp file that replaces `path` once fully written.
pub fn write_csv_file(path: &Path, rows: &[ParkingRecord]) -> Result<usize> {
    let dir = match path.parent().filter(|p| !p.as_os_str().is_empty()) {
        Some(parent) => {
            std::fs::create_dir_all(parent)?;
            parent
        }
        None => Path::new("."),
    };

    let mut staging = NamedTempFile::new_in(dir)?;
    let written = write_csv(staging.as_file_mut(), rows)?;
    staging.as_file().sync_all()?;
    staging.persist(path).map_err(|e| e.error)?;
    tracing::info!(path = %path.display(), rows = written, "report exported");
    Ok(written)
}
