// NOTE: valet Architecture Rationale
//
// The CLI is one presentation layer over `valet_runtime::TicketWorkflow`.
// Handlers never touch SQL: they call workflow operations and hand the plain
// records to a presenter (ticket, table, JSON, CSV file).
//
// One process opens the store once. The workspace is opened lazily on the
// first command that needs it and closed explicitly before exit.

mod args;
mod commands;
pub mod context;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands};
pub use commands::{exit_code, run};
