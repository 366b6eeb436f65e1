use std::path::PathBuf;
use thiserror::Error;

/// Result type for valet-index operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the record store
#[derive(Error, Debug)]
pub enum Error {
    /// Caller supplied data the store refuses to write (empty plate, etc.)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Backing file could not be created or opened
    #[error("Storage unavailable at {}: {reason}", .path.display())]
    StorageUnavailable { path: PathBuf, reason: String },

    /// Database operation failed after the store was opened
    #[error("{}", describe_storage_error(.0))]
    Storage(#[from] rusqlite::Error),
}

impl Error {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Error::InvalidInput(_))
    }
}

fn describe_storage_error(err: &rusqlite::Error) -> String {
    let msg = err.to_string();
    // Tables dropped or renamed by hand surface as missing-schema errors
    if msg.contains("no such column") || msg.contains("no such table") {
        format!(
            "Database schema mismatch: {}. Re-run `valet init` to recreate the table.",
            msg
        )
    } else {
        format!("Database error: {}", msg)
    }
}
