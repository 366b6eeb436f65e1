use crate::presentation::{Ticket, print_json};
use crate::types::{OutputFormat, TicketStyle};
use anyhow::Result;
use serde_json::json;
use valet_runtime::Workspace;

pub fn handle(workspace: &Workspace, id: i64, style: TicketStyle, format: OutputFormat) -> Result<()> {
    let Some(record) = workspace.workflow().reprint(id)? else {
        return match format {
            OutputFormat::Json => print_json(&json!({ "id": id, "found": false })),
            OutputFormat::Plain => {
                println!("No record with id {}.", id);
                Ok(())
            }
        };
    };

    let ticket = Ticket::new(&workspace.config().ticket, &record);
    match format {
        OutputFormat::Json => print_json(&json!({
            "found": true,
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
