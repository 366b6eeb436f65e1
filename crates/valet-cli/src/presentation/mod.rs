pub mod records;
pub mod ticket;

use anyhow::Result;
use serde::Serialize;

pub use records::{RecordListView, render_table};
pub use ticket::Ticket;

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
