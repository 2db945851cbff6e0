//! Index notes use case

use crate::error::Result;
use crate::infrastructure::{Container, IndexStats};

/// Refresh the index of the current notebook.
pub fn index_notes(container: &Container, verbose: bool) -> Result<IndexStats> {
    container.current_notebook()?.index(verbose)
}

/// Refresh the index before running another command.
///
/// Skipped without a current notebook so that commands which do not need
/// one keep working.
pub fn refresh_before_command(container: &Container) -> Result<()> {
    match container.current_notebook() {
        Ok(notebook) => notebook.index(false).map(|_| ()),
        Err(_) => Ok(()),
    }
}
