use crate::types::{LogLevel, OutputFormat, TicketStyle};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "valet")]
#[command(about = "Register parked vehicles, print tickets and export reports", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Workspace directory (defaults to $VALET_PATH, then the XDG data dir)
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, global = true)]
    pub log_level: Option<LogLevel>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create the workspace, database and default config
    Init,

    /// Register a vehicle entry and print its ticket
    #[command(visible_alias = "in")]
    Entry {
        plate: String,

        #[arg(long, default_value = "text")]
        style: TicketStyle,
    },

    /// List records, newest first
    List {
        #[arg(long)]
        limit: Option<usize>,

        #[arg(long)]
        oldest_first: bool,
    },

    /// Reprint the ticket of an existing record
    Show {
        id: i64,

        #[arg(long, default_value = "text")]
        style: TicketStyle,
    },

    /// Delete a record (vehicle exit or correction)
    #[command(visible_alias = "rm")]
    Delete { id: i64 },

    /// Export records created between two dates (day/month/year) to CSV
    Export {
        #[arg(long)]
        from: String,

        #[arg(long)]
        to: String,

        #[arg(long, short)]
        output: PathBuf,
    },

    /// Show workspace location and record count
    Status,
}
