use crate::presentation::{RecordListView, print_json, render_table};
use crate::types::OutputFormat;
use anyhow::Result;
use is_terminal::IsTerminal;
use valet_runtime::Workspace;

pub fn handle(
    workspace: &Workspace,
    limit: Option<usize>,
    oldest_first: bool,
    format: OutputFormat,
) -> Result<()> {
    let mut records = workspace.workflow().refresh_listing()?;
    if oldest_first {
        records.reverse();
    }

    let total = records.len();
    let shown = limit.map_or(total, |l| l.min(total));
    let visible = &records[..shown];

    match format {
        OutputFormat::Json => print_json(&RecordListView {
            total,
            shown,
            records: visible,
        }),
        OutputFormat::Plain => {
            if total == 0 {
                println!("No records yet.");
                return Ok(());
            }
            print!("{}", render_table(visible, std::io::stdout().is_terminal()));
            if shown < total {
                println!("({} of {} records shown)", shown, total);
            }
            Ok(())
        }
    }
}
