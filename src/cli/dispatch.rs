//! Built-in command dispatch

use crate::application;
use crate::cli::output::{format_alias_list, format_note_list};
use crate::cli::{Cli, Commands};
use crate::error::Result;
use crate::infrastructure::Container;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

/// Parse `args` (without the program name) and run the selected command.
///
/// The current notebook is re-indexed first, unless the command is `index`
/// itself, which would otherwise report no changes.
pub fn run_command(container: &Container, args: &[String]) -> Result<()> {
    let argv = std::iter::once("zk".to_string()).chain(args.iter().cloned());
    let cli = match Cli::try_parse_from(argv) {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.print()?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        println!();
        return Ok(());
    };

    if !command.is_index() {
        application::refresh_before_command(container)?;
    }

    tracing::debug!(?command, "running command");
    execute(container, command)
}

fn execute(container: &Container, command: Commands) -> Result<()> {
    match command {
        Commands::Init { path } => {
            let notebook = application::init(container, path.as_deref())?;
            println!("Initialized a notebook in {}", notebook.root().display());
        }
        Commands::Index { verbose } => {
            let stats = application::index_notes(container, verbose)?;
            println!("{}", stats);
        }
        Commands::List { pattern } => {
            let paths = application::list_notes(container, pattern.as_deref())?;
            println!("{}", format_note_list(&paths).trim_end());
        }
        Commands::Alias => {
            println!("{}", format_alias_list(&container.aliases()).trim_end());
        }
    }
    Ok(())
}
