// SQLite record store for parking tickets
// One table, one connection, parameterized queries only

mod db;
mod error;
mod queries;
mod records;
mod schema;

// Public API
pub use db::Database;
pub use error::{Error, Result};
pub use records::{ParkingRecord, RecordOrder, TIMESTAMP_FORMAT};
pub use schema::SCHEMA_VERSION;
