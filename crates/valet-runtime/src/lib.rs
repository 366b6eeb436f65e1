pub mod config;
pub mod error;
pub mod export;
pub mod workflow;
pub mod workspace;

pub use config::{CONFIG_FILE_NAME, Config, DB_FILE_NAME, TicketSettings, resolve_workspace_path};
pub use error::{Error, Result};
pub use export::{EXPORT_HEADER, ExportBatch, parse_export_date, write_csv, write_csv_file};
pub use workflow::TicketWorkflow;
pub use workspace::{InitReport, Workspace};

pub use valet_index::{ParkingRecord, RecordOrder};
