use crate::presentation::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use valet_runtime::{ExportBatch, Workspace, write_csv_file};

pub fn handle(
    workspace: &Workspace,
    from: &str,
    to: &str,
    output: &Path,
    format: OutputFormat,
) -> Result<()> {
    let rows = match workspace.workflow().export(from, to)? {
        ExportBatch::Rows(rows) => rows,
        ExportBatch::NoData => {
            return match format {
                OutputFormat::Json => print_json(&json!({ "status": "no_data", "rows": 0 })),
                OutputFormat::Plain => {
                    println!("No data in the selected date range; nothing exported.");
                    Ok(())
                }
            };
        }
    };

    let written = write_csv_file(output, &rows)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "status": "written",
            "rows": written,
            "path": output,
        })),
        OutputFormat::Plain => {
            println!("Exported {} records to {}", written, output.display());
            Ok(())
        }
    }
}
