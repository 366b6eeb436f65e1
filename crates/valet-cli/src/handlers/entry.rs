use crate::presentation::{Ticket, print_json};
use crate::types::{OutputFormat, TicketStyle};
use anyhow::Result;
use serde_json::json;
use valet_runtime::Workspace;

pub fn handle(
    workspace: &Workspace,
    plate: &str,
    style: TicketStyle,
    format: OutputFormat,
) -> Result<()> {
    let record = workspace.workflow().register_entry(plate)?;
    let ticket = Ticket::new(&workspace.config().ticket, &record);

    match format {
        OutputFormat::Json => print_json(&json!({
            "record": record,
            "ticket": ticket.render_text(),
        })),
        OutputFormat::Plain => {
            match style {
                TicketStyle::Text => print!("{}", ticket.render_text()),
                TicketStyle::Html => print!("{}", ticket.render_html()),
            }
            Ok(())
        }
    }
}
