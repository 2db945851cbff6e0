//! List notes use case

use crate::error::Result;
use crate::infrastructure::Container;
use regex::Regex;

/// Paths of the indexed notes, relative to the working directory when the
/// note lives below it, optionally filtered by a regular expression matched
/// against the notebook-relative path.
pub fn list_notes(container: &Container, pattern: Option<&str>) -> Result<Vec<String>> {
    let notebook = container.current_notebook()?;
    let filter = pattern.map(Regex::new).transpose()?;

    let paths = notebook
        .indexed_notes()?
        .into_iter()
        .filter(|note| filter.as_ref().is_none_or(|re| re.is_match(&note.path)))
        .map(|note| {
            let abs = notebook.root().join(&note.path);
            match abs.strip_prefix(container.working_dir()) {
                Ok(rel) => rel.to_string_lossy().into_owned(),
                Err(_) => abs.to_string_lossy().into_owned(),
            }
        })
        .collect();

    Ok(paths)
}
