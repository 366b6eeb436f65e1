use crate::presentation::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use serde_json::json;
use valet_runtime::Workspace;

pub fn handle(workspace: &Workspace, id: i64, format: OutputFormat) -> Result<()> {
    let deleted = workspace.workflow().delete_record(id)?;

    match format {
        OutputFormat::Json => print_json(&json!({ "id": id, "deleted": deleted })),
        OutputFormat::Plain => {
            if deleted {
                println!("Deleted record {}.", id);
            } else {
                println!("No record with id {}; nothing to delete.", id);
            }
            Ok(())
        }
    }
}
