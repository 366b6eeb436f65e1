use super::args::{Cli, Commands};
use super::handlers;
use crate::context::ExecutionContext;
use crate::types::OutputFormat;
use anyhow::Result;
use std::path::Path;
use valet_runtime::resolve_workspace_path;

pub fn run(cli: Cli) -> Result<()> {
    let data_dir = resolve_workspace_path(cli.data_dir.as_deref())?;
    tracing::debug!(data_dir = %data_dir.display(), "workspace resolved");

    let Some(command) = cli.command else {
        show_guidance(&data_dir);
        return Ok(());
    };

    let ctx = ExecutionContext::new(data_dir);
    let result = dispatch(&ctx, command, cli.format);
    let closed = ctx.close();

    result?;
    closed
}

fn dispatch(ctx: &ExecutionContext, command: Commands, format: OutputFormat) -> Result<()> {
    match command {
        Commands::Init => handlers::init::handle(ctx.data_dir(), format),

        Commands::Entry { plate, style } => {
            handlers::entry::handle(ctx.workspace()?, &plate, style, format)
        }

        Commands::List {
            limit,
            oldest_first,
        } => handlers::list::handle(ctx.workspace()?, limit, oldest_first, format),

        Commands::Show { id, style } => handlers::show::handle(ctx.workspace()?, id, style, format),

        Commands::Delete { id } => handlers::delete::handle(ctx.workspace()?, id, format),

        Commands::Export { from, to, output } => {
            handlers::export::handle(ctx.workspace()?, &from, &to, &output, format)
        }

        Commands::Status => handlers::status::handle(ctx.workspace()?, format),
    }
}

/// Process exit status: 2 for rejected input, 1 for everything else.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    let invalid_input = err.chain().any(|cause| {
        cause
            .downcast_ref::<valet_runtime::Error>()
            .is_some_and(|e| e.is_invalid_input())
    });

    if invalid_input { 2 } else { 1 }
}

fn show_guidance(data_dir: &Path) {
    let db_path = data_dir.join(valet_runtime::DB_FILE_NAME);

    if !db_path.exists() {
        println!("valet - parking ticket log\n");
        println!("No workspace found at {}.", data_dir.display());
        println!("Get started:");
        println!("  valet init");
        println!("  valet entry <PLATE>");
        return;
    }

    println!("valet - parking ticket log\n");
    println!("Workspace: {}", data_dir.display());
    println!("Common commands:");
    println!("  valet entry <PLATE>                         register a vehicle and print its ticket");
    println!("  valet list                                  show records, newest first");
    println!("  valet show <ID>                             reprint a ticket");
    println!("  valet delete <ID>                           remove a record");
    println!("  valet export --from D/M/Y --to D/M/Y -o F   export a date range to CSV");
}
