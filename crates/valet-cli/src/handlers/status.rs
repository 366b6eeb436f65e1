use crate::presentation::print_json;
use crate::types::OutputFormat;
use anyhow::Result;
use serde_json::json;
use valet_runtime::Workspace;

pub fn handle(workspace: &Workspace, format: OutputFormat) -> Result<()> {
    let count = workspace.record_count()?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "app_name": workspace.config().app_name,
            "data_dir": workspace.data_dir(),
            "db_path": workspace.db_path(),
            "records": count,
        })),
        OutputFormat::Plain => {
            println!("{}", workspace.config().app_name);
            println!("  workspace: {}", workspace.data_dir().display());
            println!("  database:  {}", workspace.db_path().display());
            println!("  records:   {}", count);
            Ok(())
        }
    }
}
