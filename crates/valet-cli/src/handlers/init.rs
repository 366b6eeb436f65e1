use crate::presentation::print_json;
use crate::types::OutputFormat;
use anyhow::{Context, Result};
use serde_json::json;
use std::path::Path;
use valet_runtime::Workspace;

pub fn handle(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let report = Workspace::init(data_dir)
        .with_context(|| format!("Failed to initialize workspace at {}", data_dir.display()))?;

    match format {
        OutputFormat::Json => print_json(&json!({
            "data_dir": report.data_dir,
            "db_path": report.db_path,
            "config_path": report.config_path,
            "config_created": report.config_created,
        })),
        OutputFormat::Plain => {
            println!("Workspace ready: {}", report.data_dir.display());
            println!("  database: {}", report.db_path.display());
            if report.config_created {
                println!("  config:   {} (created with defaults)", report.config_path.display());
            } else {
                println!("  config:   {}", report.config_path.display());
            }
            Ok(())
        }
    }
}
