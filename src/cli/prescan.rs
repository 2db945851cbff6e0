//! Directory flags read before the command-line parser runs
//!
//! Aliases are resolved against the notebook configuration, so the notebook
//! must be known before the arguments can be handed to clap.

use crate::domain::Dirs;
use crate::error::{Result, ZkError};
use std::path::PathBuf;

pub const NOTEBOOK_DIR_FLAG: &str = "--notebook-dir";
pub const WORKING_DIR_FLAG: &str = "--working-dir";
pub const WORKING_DIR_SHORT_FLAG: &str = "-W";

/// Extract `--notebook-dir` and `--working-dir`/`-W` from `args`.
///
/// Returns the absolute paths given to these flags and the remaining
/// arguments, in their original order.
pub fn scan_dirs(args: &[String]) -> Result<(Dirs, Vec<String>)> {
    let (notebook_dir, args) = take_flag(args, NOTEBOOK_DIR_FLAG, None)?;
    let (working_dir, args) = take_flag(&args, WORKING_DIR_FLAG, Some(WORKING_DIR_SHORT_FLAG))?;

    Ok((
        Dirs {
            notebook_dir,
            working_dir,
        },
        args,
    ))
}

/// Remove the first occurrence of a flag and its value.
///
/// The value is the first token after the flag that is not the flag again,
/// so `--notebook-dir --notebook-dir /x` yields `/x`. Occurrences after the
/// value are left in the returned arguments.
fn take_flag(
    args: &[String],
    long: &str,
    short: Option<&str>,
) -> Result<(Option<PathBuf>, Vec<String>)> {
    let is_flag = |arg: &String| arg == long || short.is_some_and(|s| arg == s);

    let Some(pos) = args.iter().position(is_flag) else {
        return Ok((None, args.to_vec()));
    };
    let Some(offset) = args[pos..].iter().position(|arg| !is_flag(arg)) else {
        let last = args.last().cloned().unwrap_or_else(|| long.to_string());
        return Err(ZkError::MissingFlagArgument(last));
    };
    let value_pos = pos + offset;

    let path = absolute_path(&args[value_pos])?;

    let mut rest = Vec::with_capacity(args.len() - offset - 1);
    rest.extend_from_slice(&args[..pos]);
    rest.extend_from_slice(&args[value_pos + 1..]);
    Ok((Some(path), rest))
}

/// Make `value` absolute against the current directory. An empty value
/// stands for the current directory itself.
fn absolute_path(value: &str) -> Result<PathBuf> {
    if value.is_empty() {
        return std::env::current_dir().map_err(ZkError::WorkingDirectory);
    }
    std::path::absolute(value).map_err(|source| ZkError::PathResolution {
        path: value.to_string(),
        source,
    })
}
