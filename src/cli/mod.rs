//! CLI layer - Command-line interface

pub mod alias;
pub mod commands;
pub mod dispatch;
pub mod locator;
pub mod output;
pub mod prescan;

pub use alias::run_alias;
pub use commands::{Cli, Commands};
pub use dispatch::run_command;
pub use locator::{notebook_search_dirs, NOTEBOOK_DIR_ENV};
pub use output::{format_alias_list, format_note_list};
pub use prescan::scan_dirs;

use crate::domain::InvocationContext;
use crate::error::{Result, ZkError};
use std::ffi::OsString;
use crate::infrastructure::{Container, ShellRunner};

/// Convert raw process arguments, refusing any that is not valid UTF-8
/// rather than altering its bytes.
pub fn collect_args(raw: impl IntoIterator<Item = OsString>) -> Result<Vec<String>> {
    raw.into_iter()
        .map(|arg| {
            arg.into_string()
                .map_err(|arg| ZkError::InvalidArgument(arg.to_string_lossy().into_owned()))
        })
        .collect()
}

/// Run zk with the raw arguments (without the program name).
///
/// Locates the current notebook, then runs either the matching user alias
/// or a built-in command.
pub fn run(
    container: &mut Container,
    context: &InvocationContext,
    args: &[String],
    shell: &impl ShellRunner,
) -> Result<()> {
    let (dirs, args) = scan_dirs(args)?;
    let candidates = notebook_search_dirs(&dirs)?;
    container.set_current_notebook(&candidates);

    if run_alias(container, context, &args, shell)? {
        return Ok(());
    }
    run_command(container, &args)
}
