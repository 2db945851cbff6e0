//! Output formatting utilities

use crate::domain::AliasTable;

/// Format a list of note paths for display
pub fn format_note_list(paths: &[String]) -> String {
    if paths.is_empty() {
        return "No notes found".to_string();
    }

    let mut output = String::new();
    for path in paths {
        output.push_str(path);
        output.push('\n');
    }
    output
}

/// Format the alias table, one `name = command` per line.
pub fn format_alias_list(aliases: &AliasTable) -> String {
    if aliases.is_empty() {
        return "No aliases configured".to_string();
    }

    let width = aliases.iter().map(|(name, _)| name.len()).max().unwrap_or(0);
    let mut output = String::new();
    for (name, command) in aliases.iter() {
        output.push_str(&format!("{:<width$} = {}\n", name, command, width = width));
    }
    output
}
