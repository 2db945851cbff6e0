//! User alias interception

use crate::domain::{InvocationContext, RUNNING_ALIAS_ENV};
use crate::error::{Result, ZkError};
use crate::infrastructure::{ChildExit, Container, ShellCommand, ShellRunner};

/// Run the user alias named by the first argument, if there is one.
///
/// Returns `Ok(false)` when `args` does not start with an alias, or when
/// that alias is the one already running (an alias calling `zk <itself>`
/// falls through to the built-in command). A failing alias yields
/// [`ZkError::AliasNonZeroExit`] with the child's exit code.
pub fn run_alias(
    container: &Container,
    context: &InvocationContext,
    args: &[String],
    runner: &impl ShellRunner,
) -> Result<bool> {
    let Some((name, rest)) = args.split_first() else {
        return Ok(false);
    };
    let aliases = container.aliases();
    let Some(template) = aliases.get(name) else {
        return Ok(false);
    };
    if context.is_running(name) {
        tracing::debug!(alias = %name, "alias already running, not expanding again");
        return Ok(false);
    }

    let mut command = ShellCommand::new(template)
        .args(rest.iter().cloned())
        .env(RUNNING_ALIAS_ENV, name.as_str());
    if let Ok(notebook) = container.current_notebook() {
        command = command.in_dir(notebook.root());
    }

    tracing::debug!(alias = %name, line = %command.line, "running alias");
    let exit = runner.run(&command).map_err(|e| ZkError::AliasExecution {
        alias: name.clone(),
        reason: e.to_string(),
    })?;

    match exit {
        ChildExit::Code(0) => Ok(true),
        ChildExit::Code(code) => Err(ZkError::AliasNonZeroExit(code)),
        ChildExit::Signaled => Err(ZkError::AliasExecution {
            alias: name.clone(),
            reason: "terminated by a signal".to_string(),
        }),
    }
}
